use serde_json::{Map, Value};

/// One table definition from an uploaded JSON list or a transformed sheet.
///
/// Entries are open-ended objects: `target_table` names the destination,
/// `metadata` is dropped when the request is built and every other field is
/// the source-to-target mapping passed through untouched.
pub type TableEntry = Map<String, Value>;

pub const TARGET_TABLE_FIELD: &str = "target_table";
pub const METADATA_FIELD: &str = "metadata";

/// Resolves the destination key of an entry.
///
/// Missing, `null`, `false`, `0` and `""` count as absent. Non-empty strings are
/// used as-is, non-zero numbers and `true` are stringified. Arrays and objects
/// never produce a key.
pub fn target_table_of(entry: &TableEntry) -> Option<String> {
    match entry.get(TARGET_TABLE_FIELD)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()) => {
            Some(n.to_string())
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
