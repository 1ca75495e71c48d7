use crate::prelude::*;

/// Arbitrary key-value metadata attached to a node, e.g. `owner`, `hidden`
/// or `type`. Keys keep insertion order so listings are stable.
pub type Meta = IndexMap<String, Value>;

/// Well known meta key holding the owner of a node.
pub const OWNER: &str = "owner";
/// Well known meta key marking a node as hidden.
pub const HIDDEN: &str = "hidden";
/// Well known meta key holding the MIME type of a file.
pub const TYPE: &str = "type";

/// Builds a [`Meta`] from `(key, value)` pairs.
pub fn meta<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Meta
where
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Renders a meta value for display, `None` if it counts as unset.
///
/// `null`, `false`, numeric zero and empty strings are unset, strings
/// are shown without quotes and anything else uses its JSON form.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
