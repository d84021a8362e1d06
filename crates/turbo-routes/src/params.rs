//! Path parameters for building and matching routes.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Parameter values keyed by name (e.g., `id` for `/product/:id`).
///
/// Values are stored as strings; anything implementing `ToString` can be
/// inserted, so `1234` becomes `"1234"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|s| s.as_str())
    }

    /// Whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for RouteParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for RouteParams {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for RouteParams {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_stringified() {
        let params = RouteParams::new().with("id", 1234).with("slug", "shoes");

        assert_eq!(params.get("id"), Some("1234"));
        assert_eq!(params.get("slug"), Some("shoes"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_from_array() {
        let params = RouteParams::from([("page", 2), ("per_page", 20)]);

        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("per_page"), Some("20"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut params = RouteParams::new().with("id", "a");
        params.insert("id", "b");

        assert_eq!(params.get("id"), Some("b"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("id".to_string(), "42".to_string());

        let params = RouteParams::from(map);
        assert!(params.contains("id"));
        assert!(!params.contains("slug"));
    }

    #[test]
    fn test_empty() {
        let params = RouteParams::new();
        assert!(params.is_empty());
        assert_eq!(params.get("id"), None);
    }
}
