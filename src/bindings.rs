// SPDX-License-Identifier: MIT

//! Variable bindings for rule evaluation
//!
//! A [`Bindings`] map is supplied fresh for each evaluation call and has no
//! lifecycle beyond it. The evaluator never mutates it.

use crate::expr::Value;
use std::collections::HashMap;

/// Name-to-value map consulted when an expression references a variable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: HashMap<String, Value>,
}

impl Bindings {
    /// Create an empty bindings map
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert a value under `name`, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a variable
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build bindings from a JSON object of scalars
    ///
    /// Returns `None` if `object` is not an object or any member is an
    /// array or nested object.
    pub fn from_json(object: &serde_json::Value) -> Option<Self> {
        let map = object.as_object()?;
        let mut bindings = Bindings::empty();
        for (name, value) in map {
            bindings.set(name.clone(), Value::from_json(value)?);
        }
        Some(bindings)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::empty();
        for (name, value) in iter {
            bindings.set(name, value);
        }
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let mut bindings = Bindings::empty();
        bindings.set("temperature", 30).set("status", "active");

        assert_eq!(bindings.get("temperature"), Some(&Value::Number(30.0)));
        assert_eq!(
            bindings.get("status"),
            Some(&Value::String("active".to_string()))
        );
        assert_eq!(bindings.get("missing"), None);
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_set_overwrites() {
        let bindings = Bindings::empty().with("mode", "veg").with("mode", "flower");
        assert_eq!(bindings.get("mode"), Some(&Value::String("flower".to_string())));
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn test_from_json_object() {
        let bindings =
            Bindings::from_json(&json!({"temperature": 30, "active": true, "note": null}))
                .unwrap();
        assert_eq!(bindings.get("temperature"), Some(&Value::Number(30.0)));
        assert_eq!(bindings.get("active"), Some(&Value::Boolean(true)));
        assert_eq!(bindings.get("note"), Some(&Value::Null));
    }

    #[test]
    fn test_from_json_rejects_non_scalars() {
        assert_eq!(Bindings::from_json(&json!({"tags": ["a", "b"]})), None);
        assert_eq!(Bindings::from_json(&json!([1, 2, 3])), None);
    }

    #[test]
    fn test_from_iterator() {
        let bindings: Bindings = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(bindings.get("a"), Some(&Value::Number(1.0)));
        assert_eq!(bindings.get("b"), Some(&Value::Number(2.0)));
    }
}
