//! Sparkline: a minimal inline area chart over a plain value list.

use pergola_core::{props, Element, Props, Scope, Value};
use pergola_ui::Ui;

/// Options for [`sparkline_chart`].
#[derive(Default)]
pub struct SparklineChartProps {
    pub area_props: Option<Props>,
    pub color: Option<String>,
    pub connect_nulls: Option<bool>,
    pub curve_type: Option<String>,
    pub fill_opacity: Option<f64>,
    pub key: Option<String>,
    pub stroke_width: Option<u32>,
    /// Colors keyed by trend: `{"positive": ..., "negative": ...}`.
    pub trend_colors: Option<Props>,
    pub with_gradient: Option<bool>,
    pub extra: Props,
}

/// Sparkline over a flat list of values (nulls allowed for gaps).
pub fn sparkline_chart(ui: &mut Ui, data: impl Into<Value>, props: SparklineChartProps) -> Scope {
    let SparklineChartProps {
        area_props,
        color,
        connect_nulls,
        curve_type,
        fill_opacity,
        key,
        stroke_width,
        trend_colors,
        with_gradient,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("sparkline"));
    let mut p = props! {
        "areaProps" => area_props,
        "color" => color,
        "connectNulls" => connect_nulls,
        "curveType" => curve_type,
        "fillOpacity" => fill_opacity,
        "strokeWidth" => stroke_width,
        "trendColors" => trend_colors,
        "withGradient" => with_gradient,
    };
    p.set("data", data);
    p.merge(extra);
    ui.container_element(Element::new("sparkline", key).props(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    #[test]
    fn test_sparkline_data_and_gaps() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        sparkline_chart(
            &mut ui,
            json!([10, 20, null, 40]),
            SparklineChartProps {
                connect_nulls: Some(true),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let chart = &wire["children"][0]["children"][1]["children"][0];
        assert_eq!(chart["props"]["data"], json!([10, 20, null, 40]));
        assert_eq!(chart["props"]["connectNulls"], json!(true));
    }
}
