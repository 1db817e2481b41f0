//! Host-supplied property values and update payloads.

use std::collections::BTreeMap;
use std::fmt;

/// Key of the side-nav visibility prop.
pub const SIDE_NAV_OPEN: &str = "sideNavOpen";
/// Key of the children prop. Children are reconciled separately.
pub const CHILDREN: &str = "children";

/// A dynamically typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropValue>),
}

impl PropValue {
    /// Truthiness as a host scripting language sees it: `false`, `0`, `NaN`,
    /// the empty string and `Null` are falsy; lists are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Text(s) => !s.is_empty(),
            PropValue::List(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(values: Vec<T>) -> Self {
        PropValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => f.write_str("null"),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Number(n) => write!(f, "{n}"),
            PropValue::Text(s) => write!(f, "{s:?}"),
            PropValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Named properties of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` (builder).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_text)
    }

    /// Truthiness of `key`; a missing key is falsy.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(PropValue::is_truthy)
    }

    /// Text entries of the list at `key`. Non-text entries are skipped.
    pub fn text_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(PropValue::as_list)
            .map(|items| items.iter().filter_map(PropValue::as_text).map(str::to_owned).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Changed properties in commit order, as `(name, new value)` pairs.
pub type UpdatePayload = Vec<(String, PropValue)>;

/// Build an update payload from `(name, value)` pairs.
pub fn update_payload<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> UpdatePayload
where
    K: Into<String>,
    V: Into<PropValue>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!PropValue::Null.is_truthy());
        assert!(!PropValue::from(false).is_truthy());
        assert!(!PropValue::from(0.0).is_truthy());
        assert!(!PropValue::Number(f64::NAN).is_truthy());
        assert!(!PropValue::from("").is_truthy());
        assert!(PropValue::from("no").is_truthy());
        assert!(PropValue::from(Vec::<bool>::new()).is_truthy());
    }

    #[test]
    fn props_accessors() {
        let props = Props::new()
            .with("logoText", "Autodesk")
            .with("open", true)
            .with("links", vec!["Home", "Docs"]);
        assert_eq!(props.text("logoText"), Some("Autodesk"));
        assert!(props.flag("open"));
        assert!(!props.flag("missing"));
        assert_eq!(props.text_list("links"), vec!["Home", "Docs"]);
        assert!(props.text_list("logoText").is_empty());
    }

    #[test]
    fn payload_keeps_order() {
        let payload = update_payload([(SIDE_NAV_OPEN, PropValue::from(true)), (CHILDREN, PropValue::Null)]);
        let keys: Vec<&str> = payload.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec![SIDE_NAV_OPEN, CHILDREN]);
    }

    #[test]
    fn display_lists() {
        let v = PropValue::from(vec![PropValue::from(1.0), PropValue::from("a")]);
        assert_eq!(v.to_string(), "[1, \"a\"]");
    }
}
