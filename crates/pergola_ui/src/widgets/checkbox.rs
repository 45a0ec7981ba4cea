//! Boolean inputs: checkbox, switch, chip, and their group variants.
//!
//! Single boolean widgets are checked-style: their `checked` prop is always
//! written, since omitting it is ambiguous with "unchecked". Group variants
//! are multi-select widgets whose value is the list of selected option
//! values.

use pergola_core::{
    collect_options, props, ChangeHandler, Element, LabelFormat, Props, Value,
};

use crate::Ui;

/// Options for [`Ui::checkbox`].
#[derive(Default)]
pub struct CheckboxProps {
    pub auto_contrast: Option<bool>,
    /// Initial checked state, used until the session holds a value.
    pub checked: bool,
    pub color: Option<String>,
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub icon_color: Option<String>,
    pub key: Option<String>,
    /// `"left"` or `"right"`.
    pub label_position: Option<String>,
    pub name: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<Value>,
    pub size: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::switch`].
#[derive(Default)]
pub struct SwitchProps {
    pub checked: bool,
    pub color: Option<String>,
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub key: Option<String>,
    pub label_position: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<String>,
    pub size: Option<String>,
    pub thumb_icon: Option<Element>,
    pub with_thumb_indicator: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::chip`].
#[derive(Default)]
pub struct ChipProps {
    pub auto_contrast: Option<bool>,
    pub checked: bool,
    pub color: Option<String>,
    pub disabled: Option<bool>,
    pub icon: Option<Element>,
    /// Chip behavior: `"checkbox"` or `"radio"`.
    pub input_type: Option<String>,
    pub key: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<Value>,
    pub size: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::checkbox_group`] and [`Ui::switch_group`].
#[derive(Default)]
pub struct CheckboxGroupProps {
    pub description: Option<String>,
    pub error: Option<String>,
    pub format_label: Option<Box<LabelFormat>>,
    pub group_props: Option<Props>,
    pub key: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<Value>,
    pub read_only: Option<bool>,
    pub required: Option<bool>,
    pub size: Option<String>,
    /// Selected values used until the session holds a value.
    pub value: Option<Vec<String>>,
    pub with_asterisk: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::chip_group`] (single selection).
#[derive(Default)]
pub struct ChipGroupProps {
    pub format_label: Option<Box<LabelFormat>>,
    pub group_props: Option<Props>,
    pub on_change: Option<ChangeHandler>,
    pub value: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::chip_group_multiple`].
#[derive(Default)]
pub struct ChipGroupMultipleProps {
    pub format_label: Option<Box<LabelFormat>>,
    pub group_props: Option<Props>,
    pub on_change: Option<ChangeHandler>,
    pub value: Option<Vec<String>>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Boolean input rendered as a single checkbox. Returns the current
    /// value.
    pub fn checkbox(&mut self, label: impl Into<String>, props: CheckboxProps) -> bool {
        let CheckboxProps {
            auto_contrast,
            checked,
            color,
            description,
            disabled,
            error,
            icon_color,
            key,
            label_position,
            name,
            on_change,
            radius,
            size,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("checkbox", &label, key);
        let mut p = props! {
            "autoContrast" => auto_contrast,
            "color" => color,
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "iconColor" => icon_color,
            "labelPosition" => label_position,
            "name" => name,
            "radius" => radius,
            "size" => size,
        };
        p.set("label", label);
        p.merge(extra);
        self.controlled_checkbox("checkbox", key, p, checked, on_change)
    }

    /// Boolean input rendered as a switch.
    pub fn switch(&mut self, label: impl Into<String>, props: SwitchProps) -> bool {
        let SwitchProps {
            checked,
            color,
            description,
            disabled,
            error,
            key,
            label_position,
            on_change,
            radius,
            size,
            thumb_icon,
            with_thumb_indicator,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("switch", &label, key);
        let mut p = props! {
            "color" => color,
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "labelPosition" => label_position,
            "radius" => radius,
            "size" => size,
            "thumbIcon" => thumb_icon,
            "withThumbIndicator" => with_thumb_indicator,
        };
        p.set("label", label);
        p.merge(extra);
        self.controlled_checkbox("switch", key, p, checked, on_change)
    }

    /// Toggleable chip; behaves as a checkbox or radio depending on
    /// `input_type`.
    pub fn chip(&mut self, label: impl Into<String>, props: ChipProps) -> bool {
        let ChipProps {
            auto_contrast,
            checked,
            color,
            disabled,
            icon,
            input_type,
            key,
            on_change,
            radius,
            size,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("chip", &label, key);
        let mut p = props! {
            "autoContrast" => auto_contrast,
            "color" => color,
            "disabled" => disabled,
            "icon" => icon,
            "radius" => radius,
            "size" => size,
            "type" => input_type,
        };
        p.set("children", label);
        p.merge(extra);
        self.controlled_checkbox("chip", key, p, checked, on_change)
    }

    /// Multiple selection using a group of checkboxes. Returns the selected
    /// values.
    pub fn checkbox_group<I>(
        &mut self,
        label: impl Into<String>,
        options: I,
        props: CheckboxGroupProps,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Into<pergola_core::OptionItem>,
    {
        self.check_group("checkboxgroup", "checkbox-group", label, options, props)
    }

    /// Multiple selection using a group of switches.
    pub fn switch_group<I>(
        &mut self,
        label: impl Into<String>,
        options: I,
        props: CheckboxGroupProps,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Into<pergola_core::OptionItem>,
    {
        self.check_group("switchgroup", "switch-group", label, options, props)
    }

    fn check_group<I>(
        &mut self,
        name: &'static str,
        kind: &str,
        label: impl Into<String>,
        options: I,
        props: CheckboxGroupProps,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Into<pergola_core::OptionItem>,
    {
        let CheckboxGroupProps {
            description,
            error,
            format_label,
            group_props,
            key,
            on_change,
            radius,
            read_only,
            required,
            size,
            value,
            with_asterisk,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key(kind, &label, key);
        let options = collect_options(options);
        let mut p = props! {
            "description" => description,
            "error" => error,
            "groupProps" => group_props,
            "radius" => radius,
            "readOnly" => read_only,
            "required" => required,
            "size" => size,
            "withAsterisk" => with_asterisk,
        };
        p.set("label", label);
        p.merge(extra);
        self.controlled_multi(
            name,
            key,
            p,
            &options,
            "options",
            value.unwrap_or_default(),
            format_label,
            on_change,
        )
    }

    /// Single selection among chips. The key is always explicit: a chip
    /// group has no label to derive one from.
    pub fn chip_group<I>(
        &mut self,
        key: impl Into<String>,
        options: I,
        props: ChipGroupProps,
    ) -> Option<String>
    where
        I: IntoIterator,
        I::Item: Into<pergola_core::OptionItem>,
    {
        let ChipGroupProps {
            format_label,
            group_props,
            on_change,
            value,
            extra,
        } = props;
        let options = collect_options(options);
        let mut p = props! {
            "groupProps" => group_props,
        };
        p.set("multiple", false);
        p.merge(extra);
        self.controlled_select(
            "chipgroup",
            key.into(),
            p,
            &options,
            "options",
            value,
            format_label,
            on_change,
        )
    }

    /// Multiple selection among chips.
    pub fn chip_group_multiple<I>(
        &mut self,
        key: impl Into<String>,
        options: I,
        props: ChipGroupMultipleProps,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Into<pergola_core::OptionItem>,
    {
        let ChipGroupMultipleProps {
            format_label,
            group_props,
            on_change,
            value,
            extra,
        } = props;
        let options = collect_options(options);
        let mut p = props! {
            "groupProps" => group_props,
        };
        p.set("multiple", true);
        p.merge(extra);
        self.controlled_multi(
            "chipgroup",
            key.into(),
            p,
            &options,
            "options",
            value.unwrap_or_default(),
            format_label,
            on_change,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    fn first_widget(wire: &Value) -> &Value {
        &wire["children"][0]["children"][1]["children"][0]
    }

    #[test]
    fn test_checkbox_renames_and_suppresses() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.checkbox(
            "Remember me",
            CheckboxProps {
                label_position: Some("left".into()),
                icon_color: Some("white".into()),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(props["labelPosition"], "left");
        assert_eq!(props["iconColor"], "white");
        assert!(props.get("label_position").is_none());
        assert!(props.get("color").is_none());
        assert_eq!(props["checked"], json!(false));
    }

    #[test]
    fn test_checkbox_key_derived_from_label() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.checkbox("Remember me", CheckboxProps::default());
        let wire = ui.finish().to_value();
        assert_eq!(first_widget(&wire)["key"], "checkbox-remember-me");
    }

    #[test]
    fn test_checkbox_session_value_wins() {
        let mut session = Session::new();
        session.set("checkbox-remember-me", true);
        let mut ui = Ui::new(&mut session);
        let value = ui.checkbox("Remember me", CheckboxProps::default());
        assert!(value);
    }

    #[test]
    fn test_chip_uses_children_for_label() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.chip(
            "Fancy",
            ChipProps {
                input_type: Some("radio".into()),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(props["children"], "Fancy");
        assert_eq!(props["type"], "radio");
    }

    #[test]
    fn test_checkbox_group_default_value() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let value = ui.checkbox_group(
            "Toppings",
            ["cheese", "olives"],
            CheckboxGroupProps {
                value: Some(vec!["cheese".into()]),
                ..Default::default()
            },
        );
        assert_eq!(value, vec!["cheese".to_string()]);
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(props["options"], json!(["cheese", "olives"]));
        assert_eq!(props["value"], json!(["cheese"]));
    }

    #[test]
    fn test_chip_group_multiple_flag() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.chip_group("chips", ["a", "b"], ChipGroupProps::default());
        ui.chip_group_multiple("chips-multi", ["a", "b"], ChipGroupMultipleProps::default());
        let wire = ui.finish().to_value();
        let main = &wire["children"][0]["children"][1]["children"];
        assert_eq!(main[0]["props"]["multiple"], json!(false));
        assert_eq!(main[1]["props"]["multiple"], json!(true));
    }
}
