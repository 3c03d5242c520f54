use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static BOOKMARKS_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/bookmarks_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid bookmarks schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile bookmarks schema")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bookmarks file does not match schema:\n{}", .violations.join("\n"))]
pub struct SchemaViolations {
    pub violations: Vec<String>,
}

/// Validate a whole bookmarks document (a JSON array of bookmark objects).
pub fn validate_bookmarks_file(bookmarks: &Value) -> Result<(), SchemaViolations> {
    match BOOKMARKS_SCHEMA.validate(bookmarks) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let violations: Vec<String> = errors
                .map(|e| format!("{}: {}", e.instance_path, e))
                .collect();
            Err(SchemaViolations { violations })
        }
    }
}
