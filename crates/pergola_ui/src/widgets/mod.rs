//! The widget catalogue, one module per widget family.

pub mod accordion;
pub mod button;
pub mod checkbox;
pub mod datetime;
pub mod display;
pub mod feedback;
pub mod nav;
pub mod overlay;
pub mod select;
pub mod slider;
pub mod table;
pub mod tabs;
pub mod text_input;

use pergola_core::Value;

/// Default numeric conversion for the widgets that thread a parser:
/// numbers pass through, numeric strings are parsed, anything else is 0.
pub(crate) fn float_value(value: &Value) -> f64 {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or(0.0)
}
