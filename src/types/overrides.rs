use serde_json::{Map, Value};

/// Caller-supplied parameter values keyed by canonical name.
///
/// A key that is present wins over the stored value, even when it maps to `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    values: Map<String, Value>,
}

impl Overrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Set a parameter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for Overrides {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for Overrides
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
