use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Value;

/// An ordered collection of named values for placeholder substitution.
///
/// Names are matched case-insensitively. When the same name appears twice
/// (ignoring case), the first entry wins.
///
/// # Example
///
/// ```
/// use msgcode::{Params, Value};
///
/// let params = Params::new().with("Field", "Email").with("max", 64);
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("field"), Some(&Value::from("Email")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named value, returning the extended collection.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Append a named value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Look up a value by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == wanted)
            .map(|(_, value)| value)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
