//! Which computed values are worth storing.

use crate::domain::entities::{Collection, Document, NavigationNode};

/// Decides whether a freshly computed value may be written to the cache.
///
/// Empty values are never stored so that a transient "nothing there"
/// answer is recomputed on the next request instead of being served
/// until the TTL runs out.
pub trait Cacheable {
    fn is_cacheable(&self) -> bool;
}

impl Cacheable for String {
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Cacheable for Option<T> {
    fn is_cacheable(&self) -> bool {
        self.is_some()
    }
}

impl<T> Cacheable for Vec<T> {
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

impl Cacheable for serde_json::Value {
    fn is_cacheable(&self) -> bool {
        match self {
            serde_json::Value::Null => false,
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(items) => !items.is_empty(),
            serde_json::Value::Object(fields) => !fields.is_empty(),
            _ => true,
        }
    }
}

impl Cacheable for Document {
    fn is_cacheable(&self) -> bool {
        !self.id.is_empty()
    }
}

impl Cacheable for Collection {
    fn is_cacheable(&self) -> bool {
        !self.id.is_empty()
    }
}

impl Cacheable for NavigationNode {
    fn is_cacheable(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_values_are_not_cacheable() {
        assert!(!String::new().is_cacheable());
        assert!(!Vec::<String>::new().is_cacheable());
        assert!(!None::<String>.is_cacheable());
        assert!(!json!(null).is_cacheable());
        assert!(!json!({}).is_cacheable());
        assert!(!json!([]).is_cacheable());
    }

    #[test]
    fn test_present_values_are_cacheable() {
        assert!("x".to_string().is_cacheable());
        assert!(vec![1].is_cacheable());
        assert!(Some(0).is_cacheable());
        assert!(json!({"id": "1"}).is_cacheable());
        assert!(json!(false).is_cacheable());
    }
}
