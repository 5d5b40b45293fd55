//! Static tool registry.
//!
//! Every tool the server exposes is declared once, at startup, as a
//! [`ToolDescriptor`] carrying its NetBox endpoint and a typed parameter
//! schema. Each parameter names an explicit [`FilterPolicy`] — nothing is
//! inferred from parameter naming at call time. The registry is read-only
//! after startup and safe for unsynchronized concurrent reads.

use std::collections::HashMap;

use serde_json::{json, Value};

/// Declared value type of a tool parameter, used for the published
/// `inputSchema` and for stringifying values into query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Boolean,
}

impl ParamType {
    fn json_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

/// How a parameter value maps onto a downstream filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Pass through under the filter key unchanged.
    Exact,
    /// Case-insensitive substring match: the filter key gets an
    /// `__icontains` suffix.
    Partial,
    /// Raw substring match (`__contains`), used for address text.
    Substring,
    /// The filter must reference another resource by id, but callers may
    /// supply a name: numeric values pass through, anything else is resolved
    /// via `GET {endpoint}?{field}=value&limit=1` first.
    Related {
        endpoint: &'static str,
        field: &'static str,
    },
}

/// One declared tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: ParamType,
    pub description: &'static str,
    pub policy: FilterPolicy,
    /// Downstream filter key; defaults to the parameter name.
    pub filter_key: Option<&'static str>,
}

impl ParamSpec {
    pub fn exact(name: &'static str, ty: ParamType, description: &'static str) -> Self {
        Self { name, ty, description, policy: FilterPolicy::Exact, filter_key: None }
    }

    pub fn partial(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            ty: ParamType::String,
            description,
            policy: FilterPolicy::Partial,
            filter_key: None,
        }
    }

    pub fn substring(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            ty: ParamType::String,
            description,
            policy: FilterPolicy::Substring,
            filter_key: None,
        }
    }

    pub fn related(
        name: &'static str,
        description: &'static str,
        endpoint: &'static str,
        field: &'static str,
        filter_key: &'static str,
    ) -> Self {
        Self {
            name,
            ty: ParamType::String,
            description,
            policy: FilterPolicy::Related { endpoint, field },
            filter_key: Some(filter_key),
        }
    }

    pub fn with_filter_key(mut self, key: &'static str) -> Self {
        self.filter_key = Some(key);
        self
    }

    /// The downstream filter key, with any policy suffix applied.
    pub fn downstream_key(&self) -> String {
        let base = self.filter_key.unwrap_or(self.name);
        match self.policy {
            FilterPolicy::Partial => format!("{base}__icontains"),
            FilterPolicy::Substring => format!("{base}__contains"),
            FilterPolicy::Exact | FilterPolicy::Related { .. } => base.to_string(),
        }
    }
}

/// What kind of query a tool performs.
#[derive(Debug, Clone)]
pub enum ToolKind {
    /// Collection query returning zero or more objects.
    Search { endpoint: &'static str },
    /// Resolves to at most one object by id or natural key.
    Detail(DetailSpec),
}

/// Detail-tool resolution rules.
#[derive(Debug, Clone)]
pub struct DetailSpec {
    pub endpoint: &'static str,
    /// Parameter carrying the numeric identifier; wins over natural keys.
    pub id_param: &'static str,
    /// Parameters usable as an exact-match natural key when no id is given.
    pub natural_keys: &'static [&'static str],
    /// Optional sub-path fetched under the resolved object, e.g.
    /// `available-ips` → `endpoint/{id}/available-ips/`.
    pub subresource: Option<&'static str>,
}

/// One registered tool: unique name, human description, parameter schema,
/// and the query kind the translator executes for it.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ToolKind,
    pub params: Vec<ParamSpec>,
}

impl ToolDescriptor {
    /// A search tool; a `limit` parameter is appended automatically.
    pub fn search(
        name: &'static str,
        description: &'static str,
        endpoint: &'static str,
        mut params: Vec<ParamSpec>,
    ) -> Self {
        params.push(ParamSpec::exact(
            "limit",
            ParamType::Integer,
            "Max results (default: 10)",
        ));
        Self {
            name,
            description,
            kind: ToolKind::Search { endpoint },
            params,
        }
    }

    pub fn detail(
        name: &'static str,
        description: &'static str,
        spec: DetailSpec,
        params: Vec<ParamSpec>,
    ) -> Self {
        Self {
            name,
            description,
            kind: ToolKind::Detail(spec),
            params,
        }
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Render the parameter schema as MCP `inputSchema` JSON
    /// (draft 2020-12 compatible object schema).
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        for param in &self.params {
            let mut prop = serde_json::Map::new();
            prop.insert("type".into(), json!(param.ty.json_name()));
            prop.insert("description".into(), json!(param.description));
            if param.name == "limit" {
                prop.insert("default".into(), json!(10));
            }
            properties.insert(param.name.to_string(), Value::Object(prop));
        }
        json!({
            "type": "object",
            "properties": properties,
        })
    }
}

/// Ordered tool table built once at startup. Lookups are by name;
/// enumeration preserves declaration order for `tools/list`.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register all descriptors, failing fast on a duplicate name.
    pub fn from_descriptors(descriptors: Vec<ToolDescriptor>) -> Result<Self, String> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), String> {
        if self.index.contains_key(descriptor.name) {
            return Err(format!("duplicate tool name: {}", descriptor.name));
        }
        self.index.insert(descriptor.name, self.tools.len());
        self.tools.push(descriptor);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_rejected() {
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDescriptor::search("search_widgets", "d", "dcim/widgets", vec![]))
            .unwrap();
        let err = registry
            .register(ToolDescriptor::search("search_widgets", "d", "dcim/widgets", vec![]))
            .unwrap_err();
        assert!(err.contains("search_widgets"));
    }

    #[test]
    fn partial_policy_suffixes_filter_key() {
        let p = ParamSpec::partial("name", "Name (partial match)");
        assert_eq!(p.downstream_key(), "name__icontains");

        let p = ParamSpec::substring("address", "IP address");
        assert_eq!(p.downstream_key(), "address__contains");

        let p = ParamSpec::exact("status", ParamType::String, "Status");
        assert_eq!(p.downstream_key(), "status");
    }

    #[test]
    fn search_tools_always_declare_limit() {
        let t = ToolDescriptor::search("search_widgets", "d", "dcim/widgets", vec![]);
        assert!(t.param("limit").is_some());
        let schema = t.input_schema();
        assert_eq!(schema["properties"]["limit"]["default"], 10);
    }
}
