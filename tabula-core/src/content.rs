use crate::{Result, Value};

/// Semi-structured object consulted by a record when an attribute is neither
/// a declared field nor a column of its schema.
pub trait Content {
    /// Value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Option<Value>;
    /// Calls `method`, `None` when the object has no such method.
    fn invoke(&self, method: &str, args: &[Value]) -> Option<Result<Value>>;
}

/// JSON documents expose object members by key and array items by index.
/// Invoking a member name without arguments returns the member.
impl Content for serde_json::Value {
    fn get(&self, key: &str) -> Option<Value> {
        let node = match self {
            serde_json::Value::Object(map) => map.get(key),
            serde_json::Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }?;
        Some(Value::from_json(node.clone()))
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Option<Result<Value>> {
        if !args.is_empty() {
            return None;
        }
        Content::get(self, method).map(Ok)
    }
}
