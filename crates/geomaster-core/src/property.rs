//! Untyped property bags handed over by the transport layer.
//!
//! A [`PropertyBag`] is whatever the caller parsed out of its request
//! body: string keys mapped to loosely-typed values. Construction reads
//! numbers out of it and ignores everything else.

use indexmap::IndexMap;

/// A loosely-typed property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Any JSON-like number.
    Number(f64),
    /// A string. Never coerced to a number.
    Text(String),
    /// A boolean.
    Bool(bool),
    /// An explicit null, or a value the parser could not represent.
    Null,
}

impl PropertyValue {
    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Insertion-ordered mapping of property names to values.
///
/// Keys are matched exactly (case-sensitive), as a JSON object would be.
///
/// # Examples
///
/// ```
/// use geomaster_core::PropertyBag;
///
/// let bag: PropertyBag = [("width", 4.0), ("height", 3.0)].into_iter().collect();
/// assert_eq!(bag.number("width"), Some(4.0));
/// assert_eq!(bag.number("depth"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyBag {
    entries: IndexMap<String, PropertyValue>,
}

impl PropertyBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property, returning the bag for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    /// Numeric value for `key`, or `None` if absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(PropertyValue::as_number)
    }

    /// Whether `key` is present with any value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
