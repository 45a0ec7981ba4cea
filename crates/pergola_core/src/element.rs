//! Element descriptors
//!
//! An [`Element`] identifies one widget instance for the front end: its kind
//! tag, its key (unique among siblings), its prop map, and whether it is a
//! virtual (purely structural) node. Descriptors are created once per
//! builder call during a render pass and replaced wholesale on the next.

use serde::Serialize;
use serde_json::Value;

use crate::Props;

/// One widget instance in the render tree, or an inert fragment embedded in
/// another element's props.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Element {
    /// Widget kind tag, e.g. `"button"` or `"tabpanel"`.
    pub name: String,
    /// Identity within the parent scope. Empty for inert fragments that are
    /// only ever embedded in props.
    pub key: String,
    pub props: Props,
    /// Virtual elements structure the tree (wrappers, markers, panels) and
    /// are not rendered as leaf widgets.
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
}

impl Element {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            props: Props::new(),
            is_virtual: false,
        }
    }

    /// An unkeyed virtual descriptor meant to be passed as a prop value
    /// (icon adornments, tab descriptors), never placed in the tree itself.
    pub fn fragment(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: String::new(),
            props: Props::new(),
            is_virtual: true,
        }
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn virtual_node(mut self) -> Self {
        self.is_virtual = true;
        self
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        serde_json::to_value(&element).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fragment_is_virtual_and_unkeyed() {
        let icon = Element::fragment("icon").props(crate::props! { "name" => Some("IconHome") });
        assert!(icon.is_virtual);
        assert_eq!(icon.key, "");
        let value = Value::from(icon);
        assert_eq!(value["name"], json!("icon"));
        assert_eq!(value["virtual"], json!(true));
        assert_eq!(value["props"]["name"], json!("IconHome"));
    }
}
