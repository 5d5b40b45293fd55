use jsonschema::validator_for;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Instance validation failed")]
    ValidationFailed,
}

/// Compile a JSON Schema (draft 2020-12), verifying it is well-formed.
/// Used to check every published tool `inputSchema`.
pub fn compile_schema(schema: &Value) -> Result<(), SchemaValidationError> {
    validator_for(schema)
        .map(|_| ())
        .map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
/// Returns Ok(()) if valid, Err otherwise.
pub fn validate_json(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator = validator_for(schema)
        .map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    if validator.is_valid(instance) {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed)
    }
}
