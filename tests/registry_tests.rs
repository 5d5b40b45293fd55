//! Registry and catalog integrity tests, including JSON Schema validation
//! of every published tool inputSchema.

use serde_json::json;

use mcp_netbox_server::catalog;
use mcp_netbox_server::registry::{ToolDescriptor, ToolRegistry};
use mcp_netbox_server::schema;

#[test]
fn catalog_registers_all_tools() {
    let registry = catalog::build_registry().unwrap();
    assert_eq!(registry.len(), 72);
}

#[test]
fn tool_names_are_unique() {
    let registry = catalog::build_registry().unwrap();
    let mut names: Vec<_> = registry.list().iter().map(|t| t.name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn list_preserves_declaration_order() {
    let registry = catalog::build_registry().unwrap();
    let tools = registry.list();
    assert_eq!(tools[0].name, "search_devices");
    assert_eq!(tools[1].name, "get_device_details");
}

#[test]
fn resolve_finds_registered_tools_only() {
    let registry = catalog::build_registry().unwrap();
    assert!(registry.resolve("search_devices").is_some());
    assert!(registry.resolve("get_site_details").is_some());
    assert!(registry.resolve("delete_everything").is_none());
}

#[test]
fn duplicate_registration_fails_fast() {
    let mut registry = ToolRegistry::new();
    registry
        .register(ToolDescriptor::search("search_devices", "d", "dcim/devices", vec![]))
        .unwrap();
    assert!(registry
        .register(ToolDescriptor::search("search_devices", "d", "dcim/devices", vec![]))
        .is_err());
}

#[test]
fn every_input_schema_compiles() {
    let registry = catalog::build_registry().unwrap();
    for tool in registry.list() {
        let input_schema = tool.input_schema();
        schema::compile_schema(&input_schema)
            .unwrap_or_else(|e| panic!("{}: bad inputSchema: {e}", tool.name));
    }
}

#[test]
fn schemas_accept_representative_argument_bags() {
    let registry = catalog::build_registry().unwrap();

    let tool = registry.resolve("search_devices").unwrap();
    let input_schema = tool.input_schema();
    schema::validate_json(&input_schema, &json!({"site": "london", "limit": 5})).unwrap();
    schema::validate_json(&input_schema, &json!({})).unwrap();
    assert!(schema::validate_json(&input_schema, &json!({"limit": "not-an-int"})).is_err());

    let tool = registry.resolve("get_device_interfaces").unwrap();
    let input_schema = tool.input_schema();
    schema::validate_json(&input_schema, &json!({"device_name": "sw1", "enabled": true})).unwrap();
    assert!(schema::validate_json(&input_schema, &json!({"enabled": "yes"})).is_err());
}

#[test]
fn search_tools_publish_a_default_limit() {
    let registry = catalog::build_registry().unwrap();
    let tool = registry.resolve("search_racks").unwrap();
    let input_schema = tool.input_schema();
    assert_eq!(input_schema["properties"]["limit"]["default"], 10);
    assert_eq!(input_schema["properties"]["limit"]["type"], "integer");
}
