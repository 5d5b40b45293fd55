//! Resource query translator.
//!
//! Turns a tool's declared parameter schema plus a caller-supplied argument
//! bag into a NetBox collection query (search tools) or a single-object
//! fetch (detail tools). Planning is pure and synchronous; execution is the
//! only place that touches the network, so the mapping rules are testable
//! without I/O.
//!
//! Detail resolution order: a parseable numeric id always wins, then the
//! natural keys combined into one exact-match lookup, then an empty result.
//! A missing lookup key yields "nothing found" rather than an error.

use serde_json::{Map, Value};

use crate::client::{NetBoxClient, NetBoxError};
use crate::registry::{DetailSpec, FilterPolicy, ParamSpec, ToolDescriptor, ToolKind};

/// Downstream result limit applied when the caller supplies none.
pub const DEFAULT_LIMIT: u64 = 10;
/// Hard cap on caller-supplied limits.
pub const MAX_LIMIT: u64 = 100;

/// One planned downstream filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub key: String,
    pub value: FilterValue,
}

/// A filter value is either ready to send or needs a name→id lookup first.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Literal(String),
    Lookup {
        endpoint: &'static str,
        field: &'static str,
        name: String,
    },
}

impl Filter {
    fn literal(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: FilterValue::Literal(value.into()),
        }
    }
}

/// Resolved target of a detail-mode call.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailKey {
    Id(i64),
    Natural(Vec<Filter>),
    /// Neither id nor natural key supplied: empty result, no downstream call.
    Missing,
}

/// Full plan for a detail-mode call.
#[derive(Debug, Clone)]
pub struct DetailPlan {
    pub key: DetailKey,
    /// Declared parameters that are neither the id nor a natural key; sent
    /// as query parameters on the final fetch (e.g. `count` → `limit` on
    /// an `available-ips` subresource).
    pub extra: Vec<Filter>,
}

/// Stringify a scalar argument per its wire rules: integers decimal,
/// booleans lowercase. Arrays/objects/null are treated as absent.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse an identifier argument. Numeric-looking strings count; anything
/// malformed is treated as absent so the natural-key path is tried next.
fn parse_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn effective_limit(args: &Map<String, Value>) -> u64 {
    let requested = args.get("limit").and_then(|v| match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    });
    match requested {
        Some(n) if n >= 1 => n.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

fn plan_one(param: &ParamSpec, value: &Value) -> Option<Filter> {
    let key = param.downstream_key();
    match param.policy {
        FilterPolicy::Related { endpoint, field } => {
            if let Some(id) = parse_id(value) {
                Some(Filter::literal(key, id.to_string()))
            } else {
                scalar(value).map(|name| Filter {
                    key,
                    value: FilterValue::Lookup { endpoint, field, name },
                })
            }
        }
        _ => scalar(value).map(|v| Filter::literal(key, v)),
    }
}

/// Build the filter set for a search tool. Only declared parameters present
/// in the bag are mapped; absent optionals are omitted entirely. Downstream
/// keys stay unique: when two parameters resolve to the same key (an explicit
/// id next to a name that would look up that id), the earlier-declared one
/// wins and the later one is dropped, lookup and all. The result always
/// carries a `limit`.
pub fn plan_search(descriptor: &ToolDescriptor, args: &Map<String, Value>) -> Vec<Filter> {
    let mut filters: Vec<Filter> = Vec::new();
    for param in &descriptor.params {
        if param.name == "limit" {
            continue;
        }
        if let Some(value) = args.get(param.name) {
            if let Some(filter) = plan_one(param, value) {
                if filters.iter().any(|f| f.key == filter.key) {
                    continue;
                }
                filters.push(filter);
            }
        }
    }
    filters.push(Filter::literal("limit", effective_limit(args).to_string()));
    filters
}

/// Build the resolution plan for a detail tool.
pub fn plan_detail(
    descriptor: &ToolDescriptor,
    spec: &DetailSpec,
    args: &Map<String, Value>,
) -> DetailPlan {
    let id = args.get(spec.id_param).and_then(parse_id);

    let key = if let Some(id) = id {
        DetailKey::Id(id)
    } else {
        let mut natural = Vec::new();
        for &name in spec.natural_keys {
            let Some(value) = args.get(name) else { continue };
            let Some(text) = scalar(value) else { continue };
            let base = descriptor
                .param(name)
                .and_then(|p| p.filter_key)
                .unwrap_or(name);
            natural.push(Filter::literal(base, text));
        }
        if natural.is_empty() {
            DetailKey::Missing
        } else {
            DetailKey::Natural(natural)
        }
    };

    let mut extra: Vec<Filter> = Vec::new();
    for param in &descriptor.params {
        if param.name == spec.id_param || spec.natural_keys.contains(&param.name) {
            continue;
        }
        if let Some(value) = args.get(param.name) {
            if let Some(filter) = plan_one(param, value) {
                if extra.iter().any(|f| f.key == filter.key) {
                    continue;
                }
                extra.push(filter);
            }
        }
    }

    DetailPlan { key, extra }
}

/// Resolve planned filters into wire-ready key/value pairs. Returns `None`
/// when a relational lookup matches nothing, which short-circuits the whole
/// call to an empty result.
async fn resolve_filters(
    client: &NetBoxClient,
    filters: &[Filter],
) -> Result<Option<Vec<(String, String)>>, NetBoxError> {
    let mut resolved = Vec::with_capacity(filters.len());
    for filter in filters {
        match &filter.value {
            FilterValue::Literal(v) => resolved.push((filter.key.clone(), v.clone())),
            FilterValue::Lookup { endpoint, field, name } => {
                let params = vec![
                    (field.to_string(), name.clone()),
                    ("limit".to_string(), "1".to_string()),
                ];
                let body = client.get(endpoint, &params).await?;
                let Some(id) = first_result_id(&body) else {
                    tracing::debug!(endpoint, %name, "relational lookup matched nothing");
                    return Ok(None);
                };
                resolved.push((filter.key.clone(), id.to_string()));
            }
        }
    }
    Ok(Some(resolved))
}

fn first_result_id(body: &Value) -> Option<i64> {
    body.get("results")?.as_array()?.first()?.get("id")?.as_i64()
}

fn results_array(body: Value) -> Vec<Value> {
    match body.get("results").and_then(Value::as_array) {
        Some(items) => items.clone(),
        None => Vec::new(),
    }
}

async fn run_search(
    client: &NetBoxClient,
    endpoint: &str,
    filters: &[Filter],
) -> Result<Vec<Value>, NetBoxError> {
    let Some(params) = resolve_filters(client, filters).await? else {
        return Ok(Vec::new());
    };
    let body = client.get(endpoint, &params).await?;
    Ok(results_array(body))
}

async fn run_detail(
    client: &NetBoxClient,
    spec: &DetailSpec,
    plan: &DetailPlan,
) -> Result<Vec<Value>, NetBoxError> {
    let id = match &plan.key {
        DetailKey::Missing => return Ok(Vec::new()),
        DetailKey::Id(id) => *id,
        DetailKey::Natural(filters) => {
            // Search-mode lookup: the natural keys plus any other declared
            // filters present, constrained to a single match.
            let mut lookup = filters.clone();
            lookup.extend(plan.extra.iter().filter(|f| f.key != "limit").cloned());
            lookup.push(Filter::literal("limit", "1"));
            let Some(params) = resolve_filters(client, &lookup).await? else {
                return Ok(Vec::new());
            };
            let body = client.get(spec.endpoint, &params).await?;
            match first_result_id(&body) {
                Some(id) => id,
                None => return Ok(Vec::new()),
            }
        }
    };

    let Some(extra) = resolve_filters(client, &plan.extra).await? else {
        return Ok(Vec::new());
    };

    let object = match spec.subresource {
        Some(sub) => {
            let path = format!("{}/{id}/{sub}", spec.endpoint.trim_matches('/'));
            client.get(&path, &extra).await?
        }
        None if extra.is_empty() => client.get_by_id(spec.endpoint, id).await?,
        None => {
            let path = format!("{}/{id}", spec.endpoint.trim_matches('/'));
            client.get(&path, &extra).await?
        }
    };

    // Subresources may return a bare array (e.g. available-ips); flatten it
    // so every tool yields a sequence of objects.
    Ok(match object {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// Execute a tool call end to end: plan per the descriptor's kind, resolve
/// relational filters, and issue the downstream query.
pub async fn execute(
    client: &NetBoxClient,
    descriptor: &ToolDescriptor,
    args: &Map<String, Value>,
) -> Result<Vec<Value>, NetBoxError> {
    match &descriptor.kind {
        ToolKind::Search { endpoint } => {
            let filters = plan_search(descriptor, args);
            run_search(client, endpoint, &filters).await
        }
        ToolKind::Detail(spec) => {
            let plan = plan_detail(descriptor, spec, args);
            run_detail(client, spec, &plan).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn limit_defaults_and_caps() {
        assert_eq!(effective_limit(&bag(json!({}))), DEFAULT_LIMIT);
        assert_eq!(effective_limit(&bag(json!({"limit": 5}))), 5);
        assert_eq!(effective_limit(&bag(json!({"limit": 5000}))), MAX_LIMIT);
        assert_eq!(effective_limit(&bag(json!({"limit": 0}))), DEFAULT_LIMIT);
        assert_eq!(effective_limit(&bag(json!({"limit": "25"}))), 25);
        assert_eq!(effective_limit(&bag(json!({"limit": "lots"}))), DEFAULT_LIMIT);
    }

    #[test]
    fn identifiers_parse_from_numbers_and_strings() {
        assert_eq!(parse_id(&json!(42)), Some(42));
        assert_eq!(parse_id(&json!("42")), Some(42));
        assert_eq!(parse_id(&json!(" 7 ")), Some(7));
        assert_eq!(parse_id(&json!("core-sw-01")), None);
        assert_eq!(parse_id(&json!(null)), None);
        assert_eq!(parse_id(&json!(4.5)), None);
    }

    #[test]
    fn booleans_stringify_lowercase() {
        assert_eq!(scalar(&json!(true)).as_deref(), Some("true"));
        assert_eq!(scalar(&json!(false)).as_deref(), Some("false"));
        assert_eq!(scalar(&json!(10)).as_deref(), Some("10"));
        assert_eq!(scalar(&json!(["x"])), None);
    }
}
