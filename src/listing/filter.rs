use serde::Serialize;
use serde_json::Value;

/// Case-insensitive substring match against every field of `record`
///
/// Field values are compared by their string form; null fields are skipped. An
/// empty term matches everything, and a record that cannot be serialized only
/// matches the empty term.
pub fn matches_search<T: Serialize>(record: &T, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => fields
            .values()
            .filter_map(string_form)
            .any(|value| value.to_lowercase().contains(&needle)),
        Ok(other) => string_form(&other)
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Records matching `term`, in their original order
pub fn filter_records<'a, T: Serialize>(records: &'a [T], term: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_search(*record, term))
        .collect()
}

fn string_form(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
