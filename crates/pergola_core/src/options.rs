//! Option vocabulary for select-like widgets
//!
//! Select, radio, checkbox-group, autocomplete and friends all take their
//! choices as a list of options, optionally grouped. A bare string is the
//! common case and stays a bare string on the wire; anything richer (label,
//! disabled flag, extra attributes) becomes an object.

use serde_json::Value;

use crate::Props;

/// Maps an option value to the label shown for it.
pub type LabelFormat = dyn Fn(&str) -> String;

/// One selectable choice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: Option<String>,
    pub disabled: bool,
    pub extra: Props,
}

impl SelectOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    fn to_wire(&self, format: Option<&LabelFormat>) -> Value {
        let label = self
            .label
            .clone()
            .or_else(|| format.map(|f| f(&self.value)));
        if label.is_none() && !self.disabled && self.extra.is_empty() {
            return Value::String(self.value.clone());
        }
        let mut object = Props::new();
        object.set("value", self.value.clone());
        object.maybe("label", label);
        if self.disabled {
            object.set("disabled", true);
        }
        object.merge(self.extra.clone());
        object.into()
    }
}

impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SelectOption {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<(&str, &str)> for SelectOption {
    fn from((value, label): (&str, &str)) -> Self {
        Self::new(value).label(label)
    }
}

/// A labelled group of options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionGroup {
    pub group: String,
    pub items: Vec<SelectOption>,
}

impl OptionGroup {
    pub fn new<I>(group: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SelectOption>,
    {
        Self {
            group: group.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Flat or grouped entry in an options list.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionItem {
    Flat(SelectOption),
    Group(OptionGroup),
}

impl OptionItem {
    /// The value of a flat entry; groups carry no value of their own.
    pub fn value(&self) -> Option<&str> {
        match self {
            OptionItem::Flat(option) => Some(&option.value),
            OptionItem::Group(_) => None,
        }
    }

    fn to_wire(&self, format: Option<&LabelFormat>) -> Value {
        match self {
            OptionItem::Flat(option) => option.to_wire(format),
            OptionItem::Group(group) => {
                let mut object = Props::new();
                object.set("group", group.group.clone());
                object.set(
                    "items",
                    Value::Array(group.items.iter().map(|o| o.to_wire(format)).collect()),
                );
                object.into()
            }
        }
    }
}

impl From<&str> for OptionItem {
    fn from(value: &str) -> Self {
        OptionItem::Flat(value.into())
    }
}

impl From<String> for OptionItem {
    fn from(value: String) -> Self {
        OptionItem::Flat(value.into())
    }
}

impl From<SelectOption> for OptionItem {
    fn from(option: SelectOption) -> Self {
        OptionItem::Flat(option)
    }
}

impl From<OptionGroup> for OptionItem {
    fn from(group: OptionGroup) -> Self {
        OptionItem::Group(group)
    }
}

/// Collect a heterogeneous options argument into a uniform list.
pub fn collect_options<I>(options: I) -> Vec<OptionItem>
where
    I: IntoIterator,
    I::Item: Into<OptionItem>,
{
    options.into_iter().map(Into::into).collect()
}

/// Serialize an options list to its wire array.
pub fn wire_options(options: &[OptionItem], format: Option<&LabelFormat>) -> Value {
    Value::Array(options.iter().map(|o| o.to_wire(format)).collect())
}

/// Value of the first flat option, if any. Used by controls that never show
/// an empty selection.
pub fn first_option_value(options: &[OptionItem]) -> Option<String> {
    options.iter().find_map(|item| match item {
        OptionItem::Flat(option) => Some(option.value.clone()),
        OptionItem::Group(group) => group.items.first().map(|o| o.value.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_string_stays_bare() {
        let options = collect_options(["apple", "banana"]);
        assert_eq!(wire_options(&options, None), json!(["apple", "banana"]));
    }

    #[test]
    fn test_rich_option_becomes_object() {
        let options = collect_options([SelectOption::new("a").label("Alpha").disabled()]);
        assert_eq!(
            wire_options(&options, None),
            json!([{"value": "a", "label": "Alpha", "disabled": true}])
        );
    }

    #[test]
    fn test_format_fills_missing_labels_only() {
        let options = collect_options([
            OptionItem::from("a"),
            OptionItem::Flat(SelectOption::new("b").label("Bee")),
        ]);
        let upper = |v: &str| v.to_uppercase();
        assert_eq!(
            wire_options(&options, Some(&upper)),
            json!([{"value": "a", "label": "A"}, {"value": "b", "label": "Bee"}])
        );
    }

    #[test]
    fn test_groups_nest_items() {
        let options = collect_options([OptionItem::Group(OptionGroup::new("Fruit", ["fig"]))]);
        assert_eq!(
            wire_options(&options, None),
            json!([{"group": "Fruit", "items": ["fig"]}])
        );
    }

    #[test]
    fn test_first_option_value_descends_into_groups() {
        let options = collect_options([OptionItem::Group(OptionGroup::new("G", ["x", "y"]))]);
        assert_eq!(first_option_value(&options), Some("x".into()));
        assert_eq!(first_option_value(&[]), None);
    }
}
