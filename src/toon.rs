//! TOON (Token-Oriented Object Notation) encoder using rtoon library
//!
//! Each file becomes an object whose tags form a uniform tabular array
//! (`name`, `kind`, `line`). Files without tags keep an empty array so the
//! file list stays complete.

use rtoon::encode_default;
use serde_json::{json, Map, Value};

use crate::schema::TagFile;

/// Encode scanned files as TOON
pub fn encode_toon(files: &[TagFile]) -> String {
    let files: Vec<Value> = files.iter().map(file_value).collect();

    let mut obj = Map::new();
    obj.insert("files".to_string(), Value::Array(files));

    let value = Value::Object(obj);
    encode_default(&value).unwrap_or_else(|e| format!("TOON encoding error: {}", e))
}

fn file_value(file: &TagFile) -> Value {
    let tags: Vec<Value> = file
        .tags
        .iter()
        .map(|t| json!({ "name": t.name, "kind": t.kind.name, "line": t.line }))
        .collect();

    let mut obj = Map::new();
    obj.insert("file".to_string(), json!(file.file));
    obj.insert("language".to_string(), json!(file.language));
    obj.insert("tags".to_string(), Value::Array(tags));
    Value::Object(obj)
}
