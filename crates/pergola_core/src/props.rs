//! Prop maps for front-end components
//!
//! A [`Props`] map carries the camelCase attributes handed to a front-end
//! component. Keys keep insertion order so serialized trees are stable
//! across identical render passes. Unset values are never written: the map
//! only ever contains attributes the caller explicitly provided, so the
//! front-end default applies transparently everywhere else.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Insertion-ordered camelCase attribute map for one element.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(IndexMap<String, Value>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute unconditionally.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert an attribute only when a value is present.
    ///
    /// `None` leaves the map untouched: the key is omitted entirely rather
    /// than written as `null`.
    pub fn maybe<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.0.insert(key.into(), value.into());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Merge another map into this one; later entries win on key clashes.
    pub fn merge(&mut self, other: Props) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Props> for Value {
    fn from(props: Props) -> Self {
        Value::Object(props.0.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Build a [`Props`] map from a table of optional attributes.
///
/// Each entry is `"camelCaseKey" => option`, inserted only when the option
/// is `Some`. Mandatory attributes are `set` on the result afterwards.
///
/// ```
/// use pergola_core::props;
///
/// let gap: Option<&str> = Some("md");
/// let wrap: Option<&str> = None;
/// let p = props! {
///     "gap" => gap,
///     "wrap" => wrap,
/// };
/// assert!(p.contains("gap"));
/// assert!(!p.contains("wrap"));
/// ```
#[macro_export]
macro_rules! props {
    ( $( $key:literal => $value:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut props = $crate::Props::new();
        $( props.maybe($key, $value); )*
        props
    }};
}
