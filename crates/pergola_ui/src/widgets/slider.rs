//! Sliders and the rating input.
//!
//! These are the numeric widgets that thread a parser over the raw session
//! value: the plain constructors convert to `f64`, the `_with` variants
//! hand the wire value to a caller-supplied function.

use pergola_core::{props, ChangeHandler, Props, Value};

use super::float_value;
use crate::Ui;

/// Options for [`Ui::slider`].
#[derive(Default)]
pub struct SliderProps {
    pub disabled: Option<bool>,
    pub inverted: Option<bool>,
    pub key: Option<String>,
    pub label_always_on: Option<bool>,
    /// Marks along the track: `[{"value": 20, "label": "20%"}, ...]`.
    pub marks: Option<Value>,
    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
    pub on_change: Option<ChangeHandler>,
    pub precision: Option<u32>,
    pub restrict_to_marks: Option<bool>,
    pub show_label_on_hover: Option<bool>,
    pub size: Option<String>,
    pub step: Option<f64>,
    pub thumb_label: Option<String>,
    pub thumb_size: Option<String>,
    pub value: Option<f64>,
    pub extra: Props,
}

/// Options for [`Ui::range_slider`].
#[derive(Default)]
pub struct RangeSliderProps {
    pub color: Option<String>,
    pub disabled: Option<bool>,
    pub inverted: Option<bool>,
    pub key: Option<String>,
    pub label_always_on: Option<bool>,
    pub marks: Option<Value>,
    /// Max distance between the thumbs.
    pub max_range: Option<f64>,
    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
    pub on_change: Option<ChangeHandler>,
    pub precision: Option<u32>,
    pub step: Option<f64>,
    pub value: Option<(f64, f64)>,
    pub extra: Props,
}

/// Options for [`Ui::rating`].
#[derive(Default)]
pub struct RatingProps {
    pub color: Option<String>,
    pub count: Option<u32>,
    pub fractions: Option<u32>,
    pub on_change: Option<ChangeHandler>,
    pub read_only: Option<bool>,
    pub size: Option<String>,
    pub value: Option<f64>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Single-value slider.
    pub fn slider(&mut self, label: impl Into<String>, props: SliderProps) -> f64 {
        self.slider_with(label, props, float_value)
    }

    /// Single-value slider returning the raw session value run through
    /// `parser`.
    pub fn slider_with<T>(
        &mut self,
        label: impl Into<String>,
        props: SliderProps,
        parser: impl FnOnce(&Value) -> T,
    ) -> T {
        let SliderProps {
            disabled,
            inverted,
            key,
            label_always_on,
            marks,
            max_value,
            min_value,
            on_change,
            precision,
            restrict_to_marks,
            show_label_on_hover,
            size,
            step,
            thumb_label,
            thumb_size,
            value,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("slider", &label, key);
        let mut p = props! {
            "disabled" => disabled,
            "inverted" => inverted,
            "labelAlwaysOn" => label_always_on,
            "marks" => marks,
            "max" => max_value,
            "min" => min_value,
            "precision" => precision,
            "restrictToMarks" => restrict_to_marks,
            "showLabelOnHover" => show_label_on_hover,
            "size" => size,
            "step" => step,
            "thumbLabel" => thumb_label,
            "thumbSize" => thumb_size,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(Value::from).unwrap_or(Value::Null);
        let current = self.controlled_input("slider", key, p, fallback, on_change);
        parser(&current)
    }

    /// Slider selecting a numeric range. Returns the current `(low, high)`
    /// pair, `(0.0, 0.0)` when nothing is stored yet.
    pub fn range_slider(
        &mut self,
        label: impl Into<String>,
        props: RangeSliderProps,
    ) -> (f64, f64) {
        let RangeSliderProps {
            color,
            disabled,
            inverted,
            key,
            label_always_on,
            marks,
            max_range,
            max_value,
            min_value,
            on_change,
            precision,
            step,
            value,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("rangeslider", &label, key);
        let mut p = props! {
            "color" => color,
            "disabled" => disabled,
            "inverted" => inverted,
            "labelAlwaysOn" => label_always_on,
            "marks" => marks,
            "max" => max_value,
            "maxRange" => max_range,
            "min" => min_value,
            "precision" => precision,
            "step" => step,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value
            .map(|(low, high)| Value::from(vec![low, high]))
            .unwrap_or(Value::Null);
        let current = self.controlled_input("rangeslider", key, p, fallback, on_change);
        match current.as_array() {
            Some(pair) if pair.len() == 2 => (float_value(&pair[0]), float_value(&pair[1])),
            _ => (0.0, 0.0),
        }
    }

    /// Star rating input. The key is always explicit: ratings carry no
    /// label to derive one from.
    pub fn rating(&mut self, key: impl Into<String>, props: RatingProps) -> f64 {
        self.rating_with(key, props, float_value)
    }

    /// Rating input returning the raw session value run through `parser`.
    pub fn rating_with<T>(
        &mut self,
        key: impl Into<String>,
        props: RatingProps,
        parser: impl FnOnce(&Value) -> T,
    ) -> T {
        let RatingProps {
            color,
            count,
            fractions,
            on_change,
            read_only,
            size,
            value,
            extra,
        } = props;
        let mut p = props! {
            "color" => color,
            "count" => count,
            "fractions" => fractions,
            "readOnly" => read_only,
            "size" => size,
        };
        p.merge(extra);
        let fallback = value.map(Value::from).unwrap_or(Value::Null);
        let current = self.controlled_input("rating", key.into(), p, fallback, on_change);
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
    fn test_slider_renames_bounds_and_returns_default() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let value = ui.slider(
            "Volume",
            SliderProps {
                min_value: Some(0.0),
                max_value: Some(100.0),
                value: Some(30.0),
                ..Default::default()
            },
        );
        assert_eq!(value, 30.0);
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(props["min"], json!(0.0));
        assert_eq!(props["max"], json!(100.0));
        assert_eq!(props["value"], json!(30.0));
    }

    #[test]
    fn test_range_slider_pair_round_trip() {
        let mut session = Session::new();
        session.set("rangeslider-price", json!([10.0, 90.0]));
        let mut ui = Ui::new(&mut session);
        let value = ui.range_slider("Price", RangeSliderProps::default());
        assert_eq!(value, (10.0, 90.0));
    }

    #[test]
    fn test_rating_parses_session_value() {
        let mut session = Session::new();
        session.set("rating-stars", 4.0);
        let mut ui = Ui::new(&mut session);
        let value = ui.rating("rating-stars", RatingProps::default());
        assert_eq!(value, 4.0);
        let rounded = ui.rating_with("rating-stars", RatingProps::default(), |v| {
            v.as_f64().unwrap_or(0.0) as u32
        });
        assert_eq!(rounded, 4);
    }
}
