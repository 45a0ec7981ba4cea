//! Text-like inputs: single line, password, textarea, color, and number.

use pergola_core::{props, ChangeHandler, Element, Props, Value};

use super::float_value;
use crate::Ui;

/// Options for [`Ui::text_input`].
#[derive(Default)]
pub struct TextInputProps {
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub key: Option<String>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub on_change: Option<ChangeHandler>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub size: Option<String>,
    /// Value used until the session holds one.
    pub value: Option<String>,
    pub with_asterisk: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::password_input`].
#[derive(Default)]
pub struct PasswordInputProps {
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub input_size: Option<String>,
    pub key: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<String>,
    pub required: Option<bool>,
    pub size: Option<String>,
    pub value: Option<String>,
    /// Force visibility of the password.
    pub visible: Option<bool>,
    pub with_asterisk: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::textarea`].
#[derive(Default)]
pub struct TextareaProps {
    pub autosize: Option<bool>,
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub input_size: Option<String>,
    pub key: Option<String>,
    pub max_rows: Option<u32>,
    pub min_rows: Option<u32>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<Value>,
    pub required: Option<bool>,
    /// CSS resize behavior.
    pub resize: Option<String>,
    pub value: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::color_input`].
#[derive(Default)]
pub struct ColorInputProps {
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub fix_on_blur: Option<bool>,
    pub input_size: Option<String>,
    pub key: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<String>,
    pub required: Option<bool>,
    pub size: Option<String>,
    /// Preset color swatches.
    pub swatches: Option<Vec<String>>,
    pub value: Option<String>,
    pub with_asterisk: Option<bool>,
    pub with_picker: Option<bool>,
    pub with_preview: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::number_input`].
#[derive(Default)]
pub struct NumberInputProps {
    pub allow_decimal: Option<bool>,
    pub allow_leading_zeros: Option<bool>,
    pub allow_negative: Option<bool>,
    pub allowed_decimal_separators: Option<Vec<String>>,
    pub decimal_scale: Option<u32>,
    pub decimal_separator: Option<String>,
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub hide_controls: Option<bool>,
    pub key: Option<String>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
    pub on_change: Option<ChangeHandler>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub size: Option<String>,
    pub step: Option<f64>,
    pub value: Option<f64>,
    pub with_asterisk: Option<bool>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Single-line text input. Returns the current value, empty when the
    /// user has not typed anything yet.
    pub fn text_input(&mut self, label: impl Into<String>, props: TextInputProps) -> String {
        let TextInputProps {
            description,
            disabled,
            error,
            key,
            left_section,
            left_section_props,
            left_section_width,
            on_change,
            required,
            right_section,
            right_section_props,
            right_section_width,
            size,
            value,
            with_asterisk,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("textinput", &label, key);
        let mut p = props! {
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "size" => size,
            "withAsterisk" => with_asterisk,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(Value::from).unwrap_or(Value::Null);
        let current = self.controlled_input("textinput", key, p, fallback, on_change);
        current.as_str().unwrap_or_default().to_string()
    }

    /// Password input with visibility toggle.
    pub fn password_input(
        &mut self,
        label: impl Into<String>,
        props: PasswordInputProps,
    ) -> Option<String> {
        let PasswordInputProps {
            description,
            disabled,
            error,
            input_size,
            key,
            on_change,
            radius,
            required,
            size,
            value,
            visible,
            with_asterisk,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("passwordinput", &label, key);
        let mut p = props! {
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "inputSize" => input_size,
            "radius" => radius,
            "required" => required,
            "size" => size,
            "visible" => visible,
            "withAsterisk" => with_asterisk,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(Value::from).unwrap_or(Value::Null);
        let current = self.controlled_input("passwordinput", key, p, fallback, on_change);
        current.as_str().map(str::to_string)
    }

    /// Multi-line text input.
    pub fn textarea(&mut self, label: impl Into<String>, props: TextareaProps) -> Option<String> {
        let TextareaProps {
            autosize,
            description,
            disabled,
            error,
            input_size,
            key,
            max_rows,
            min_rows,
            on_change,
            radius,
            required,
            resize,
            value,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("textarea", &label, key);
        let mut p = props! {
            "autosize" => autosize,
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "inputSize" => input_size,
            "maxRows" => max_rows,
            "minRows" => min_rows,
            "radius" => radius,
            "required" => required,
            "resize" => resize,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(Value::from).unwrap_or(Value::Null);
        let current = self.controlled_input("textarea", key, p, fallback, on_change);
        current.as_str().map(str::to_string)
    }

    /// Text input specialized for color values, with a picker.
    pub fn color_input(&mut self, label: impl Into<String>, props: ColorInputProps) -> String {
        let ColorInputProps {
            description,
            disabled,
            error,
            fix_on_blur,
            input_size,
            key,
            on_change,
            radius,
            required,
            size,
            swatches,
            value,
            with_asterisk,
            with_picker,
            with_preview,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("colorinput", &label, key);
        let mut p = props! {
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "fixOnBlur" => fix_on_blur,
            "inputSize" => input_size,
            "radius" => radius,
            "required" => required,
            "size" => size,
            "swatches" => swatches,
            "withAsterisk" => with_asterisk,
            "withPicker" => with_picker,
            "withPreview" => with_preview,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(Value::from).unwrap_or(Value::Null);
        let current = self.controlled_input("colorinput", key, p, fallback, on_change);
        current.as_str().unwrap_or_default().to_string()
    }

    /// Numeric input. Returns the current value converted to `f64`; use
    /// [`Ui::number_input_with`] to thread a custom parser.
    pub fn number_input(&mut self, label: impl Into<String>, props: NumberInputProps) -> f64 {
        self.number_input_with(label, props, float_value)
    }

    /// Numeric input returning the raw session value run through `parser`.
    pub fn number_input_with<T>(
        &mut self,
        label: impl Into<String>,
        props: NumberInputProps,
        parser: impl FnOnce(&Value) -> T,
    ) -> T {
        let NumberInputProps {
            allow_decimal,
            allow_leading_zeros,
            allow_negative,
            allowed_decimal_separators,
            decimal_scale,
            decimal_separator,
            description,
            disabled,
            error,
            hide_controls,
            key,
            left_section,
            left_section_props,
            left_section_width,
            max_value,
            min_value,
            on_change,
            required,
            right_section,
            right_section_props,
            right_section_width,
            size,
            step,
            value,
            with_asterisk,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("numberinput", &label, key);
        let mut p = props! {
            "allowDecimal" => allow_decimal,
            "allowLeadingZeros" => allow_leading_zeros,
            "allowNegative" => allow_negative,
            "allowedDecimalSeparators" => allowed_decimal_separators,
            "decimalScale" => decimal_scale,
            "decimalSeparator" => decimal_separator,
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "hideControls" => hide_controls,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "max" => max_value,
            "min" => min_value,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "size" => size,
            "step" => step,
            "withAsterisk" => with_asterisk,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(Value::from).unwrap_or(Value::Null);
        let current = self.controlled_input("numberinput", key, p, fallback, on_change);
        parser(&current)
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
    fn test_text_input_defaults_to_empty() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let value = ui.text_input("Name", TextInputProps::default());
        assert_eq!(value, "");
    }

    #[test]
    fn test_text_input_session_round_trip() {
        let mut session = Session::new();
        session.set("textinput-name", "Ada");
        let mut ui = Ui::new(&mut session);
        let value = ui.text_input("Name", TextInputProps::default());
        assert_eq!(value, "Ada");
        let wire = ui.finish().to_value();
        assert_eq!(first_widget(&wire)["props"]["value"], "Ada");
    }

    #[test]
    fn test_number_input_renames_bounds() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.number_input(
            "Amount",
            NumberInputProps {
                min_value: Some(0.0),
                max_value: Some(10.0),
                hide_controls: Some(true),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(props["min"], json!(0.0));
        assert_eq!(props["max"], json!(10.0));
        assert_eq!(props["hideControls"], json!(true));
        assert!(props.get("min_value").is_none());
    }

    #[test]
    fn test_number_input_parses_wire_strings() {
        let mut session = Session::new();
        session.set("numberinput-amount", "42.5");
        let mut ui = Ui::new(&mut session);
        let value = ui.number_input("Amount", NumberInputProps::default());
        assert_eq!(value, 42.5);
    }

    #[test]
    fn test_number_input_with_custom_parser() {
        let mut session = Session::new();
        session.set("numberinput-count", 7.0);
        let mut ui = Ui::new(&mut session);
        let value = ui.number_input_with("Count", NumberInputProps::default(), |v| {
            v.as_f64().map(|f| f as i64)
        });
        assert_eq!(value, Some(7));
    }

    #[test]
    fn test_textarea_without_value_returns_none() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        assert_eq!(ui.textarea("Notes", TextareaProps::default()), None);
        let wire = ui.finish().to_value();
        assert!(first_widget(&wire)["props"].get("value").is_none());
    }
}
