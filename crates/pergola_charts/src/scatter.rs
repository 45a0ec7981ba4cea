//! Point charts: scatter and bubble.
//!
//! Unlike the cartesian record charts, `data_key` here is a field mapping
//! (`{"x": ..., "y": ..., "z": ...}`).

use pergola_core::{props, Element, Props, Scope, Value};
use pergola_ui::Ui;

/// Options for [`scatter_chart`].
#[derive(Default)]
pub struct ScatterChartProps {
    pub grid_axis: Option<String>,
    pub grid_color: Option<String>,
    pub grid_props: Option<Props>,
    /// Axis display labels keyed `x`/`y`.
    pub labels: Option<Props>,
    pub legend_props: Option<Props>,
    pub orientation: Option<String>,
    pub point_labels: Option<String>,
    pub reference_lines: Option<Value>,
    pub right_y_axis_label: Option<String>,
    pub right_y_axis_props: Option<Props>,
    pub scatter_chart_props: Option<Props>,
    pub scatter_props: Option<Props>,
    pub stroke_dasharray: Option<Value>,
    pub text_color: Option<String>,
    pub tick_line: Option<String>,
    pub tooltip_animation_duration: Option<u32>,
    pub tooltip_props: Option<Props>,
    /// Units keyed `x`/`y`.
    pub unit: Option<Props>,
    pub value_formatter: Option<Value>,
    pub with_legend: Option<bool>,
    pub with_right_y_axis: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub with_x_axis: Option<bool>,
    pub with_y_axis: Option<bool>,
    pub x_axis_label: Option<String>,
    pub x_axis_props: Option<Props>,
    pub y_axis_label: Option<String>,
    pub y_axis_props: Option<Props>,
    pub key: Option<String>,
    pub extra: Props,
}

/// Options for [`bubble_chart`].
#[derive(Default)]
pub struct BubbleChartProps {
    pub color: Option<String>,
    pub grid_color: Option<String>,
    pub key: Option<String>,
    pub label: Option<String>,
    pub scatter_props: Option<Props>,
    pub text_color: Option<String>,
    pub tooltip_props: Option<Props>,
    pub with_tooltip: Option<bool>,
    pub x_axis_props: Option<Props>,
    pub y_axis_props: Option<Props>,
    pub z_axis_props: Option<Props>,
    pub extra: Props,
}

/// Scatter chart; `data_key` maps point fields to axes.
pub fn scatter_chart(
    ui: &mut Ui,
    data: impl Into<Value>,
    data_key: impl Into<Value>,
    props: ScatterChartProps,
) -> Scope {
    let ScatterChartProps {
        grid_axis,
        grid_color,
        grid_props,
        labels,
        legend_props,
        orientation,
        point_labels,
        reference_lines,
        right_y_axis_label,
        right_y_axis_props,
        scatter_chart_props,
        scatter_props,
        stroke_dasharray,
        text_color,
        tick_line,
        tooltip_animation_duration,
        tooltip_props,
        unit,
        value_formatter,
        with_legend,
        with_right_y_axis,
        with_tooltip,
        with_x_axis,
        with_y_axis,
        x_axis_label,
        x_axis_props,
        y_axis_label,
        y_axis_props,
        key,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("scatterchart"));
    let mut p = props! {
        "gridAxis" => grid_axis,
        "gridColor" => grid_color,
        "gridProps" => grid_props,
        "labels" => labels,
        "legendProps" => legend_props,
        "orientation" => orientation,
        "pointLabels" => point_labels,
        "referenceLines" => reference_lines,
        "rightYAxisLabel" => right_y_axis_label,
        "rightYAxisProps" => right_y_axis_props,
        "scatterChartProps" => scatter_chart_props,
        "scatterProps" => scatter_props,
        "strokeDasharray" => stroke_dasharray,
        "textColor" => text_color,
        "tickLine" => tick_line,
        "tooltipAnimationDuration" => tooltip_animation_duration,
        "tooltipProps" => tooltip_props,
        "unit" => unit,
        "valueFormatter" => value_formatter,
        "withLegend" => with_legend,
        "withRightYAxis" => with_right_y_axis,
        "withTooltip" => with_tooltip,
        "withXAxis" => with_x_axis,
        "withYAxis" => with_y_axis,
        "xAxisLabel" => x_axis_label,
        "xAxisProps" => x_axis_props,
        "yAxisLabel" => y_axis_label,
        "yAxisProps" => y_axis_props,
    };
    p.set("data", data);
    p.set("dataKey", data_key);
    p.merge(extra);
    ui.container_element(Element::new("scatterchart", key).props(p))
}

/// Bubble chart; `range` bounds the bubble sizes in pixels.
pub fn bubble_chart(
    ui: &mut Ui,
    data: impl Into<Value>,
    data_key: impl Into<Value>,
    range: (u32, u32),
    props: BubbleChartProps,
) -> Scope {
    let BubbleChartProps {
        color,
        grid_color,
        key,
        label,
        scatter_props,
        text_color,
        tooltip_props,
        with_tooltip,
        x_axis_props,
        y_axis_props,
        z_axis_props,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("bubblechart"));
    let mut p = props! {
        "color" => color,
        "gridColor" => grid_color,
        "label" => label,
        "scatterProps" => scatter_props,
        "textColor" => text_color,
        "tooltipProps" => tooltip_props,
        "withTooltip" => with_tooltip,
        "xAxisProps" => x_axis_props,
        "yAxisProps" => y_axis_props,
        "zAxisProps" => z_axis_props,
    };
    p.set("data", data);
    p.set("dataKey", data_key);
    p.set("range", vec![range.0, range.1]);
    p.merge(extra);
    ui.container_element(Element::new("bubblechart", key).props(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    #[test]
    fn test_bubble_chart_range_and_mapping() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        bubble_chart(
            &mut ui,
            json!([{"hour": 8, "index": 60, "value": 12}]),
            json!({"x": "hour", "y": "index", "z": "value"}),
            (16, 144),
            BubbleChartProps::default(),
        );
        let wire = ui.finish().to_value();
        let chart = &wire["children"][0]["children"][1]["children"][0];
        assert_eq!(chart["props"]["dataKey"]["z"], "value");
        assert_eq!(chart["props"]["range"], json!([16, 144]));
    }
}
