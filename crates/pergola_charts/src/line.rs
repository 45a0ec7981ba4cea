//! Line chart and the mixed line/area/bar composite chart.

use pergola_core::{props, Element, Props, Scope, Value};
use pergola_ui::Ui;

use crate::common::{wire_series, ChartSeries};

/// Options for [`line_chart`].
#[derive(Default)]
pub struct LineChartProps {
    pub key: Option<String>,
    pub active_dot_props: Option<Props>,
    pub connect_nulls: Option<bool>,
    pub curve_type: Option<String>,
    pub dot_props: Option<Props>,
    pub fill_opacity: Option<f64>,
    pub gradient_stops: Option<Value>,
    pub grid_axis: Option<String>,
    pub grid_color: Option<String>,
    pub grid_props: Option<Props>,
    pub legend_props: Option<Props>,
    pub line_chart_props: Option<Props>,
    pub line_props: Option<Props>,
    pub orientation: Option<String>,
    pub reference_lines: Option<Value>,
    pub right_y_axis_label: Option<String>,
    pub right_y_axis_props: Option<Props>,
    pub stroke_dasharray: Option<String>,
    pub stroke_width: Option<f64>,
    pub text_color: Option<String>,
    pub tick_line: Option<String>,
    pub tooltip_animation_duration: Option<u32>,
    pub tooltip_props: Option<Props>,
    /// `"default"` or `"gradient"`.
    pub kind: Option<String>,
    pub unit: Option<String>,
    pub with_dots: Option<bool>,
    pub with_legend: Option<bool>,
    pub with_point_labels: Option<bool>,
    pub with_right_y_axis: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub with_x_axis: Option<bool>,
    pub with_y_axis: Option<bool>,
    pub x_axis_label: Option<String>,
    pub x_axis_props: Option<Props>,
    pub y_axis_label: Option<String>,
    pub y_axis_props: Option<Props>,
    pub extra: Props,
}

/// Options for [`composite_chart`].
#[derive(Default)]
pub struct CompositeChartProps {
    pub key: Option<String>,
    pub active_dot_props: Option<Props>,
    pub area_props: Option<Props>,
    pub bar_props: Option<Props>,
    pub children: Option<Value>,
    pub composed_chart_props: Option<Props>,
    pub connect_nulls: Option<bool>,
    pub curve_type: Option<String>,
    pub dot_props: Option<Props>,
    pub grid_axis: Option<String>,
    pub grid_color: Option<String>,
    pub grid_props: Option<Props>,
    pub legend_props: Option<Props>,
    pub line_props: Option<Props>,
    pub max_bar_width: Option<u32>,
    pub min_bar_size: Option<u32>,
    pub reference_lines: Option<Value>,
    pub right_y_axis_label: Option<String>,
    pub right_y_axis_props: Option<Props>,
    pub stroke_dasharray: Option<String>,
    pub stroke_width: Option<u32>,
    pub text_color: Option<String>,
    pub tick_line: Option<String>,
    pub tooltip_animation_duration: Option<u32>,
    pub tooltip_props: Option<Props>,
    pub unit: Option<String>,
    pub with_bar_value_label: Option<bool>,
    pub with_dots: Option<bool>,
    pub with_legend: Option<bool>,
    pub with_point_labels: Option<bool>,
    pub with_right_y_axis: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub with_x_axis: Option<bool>,
    pub with_y_axis: Option<bool>,
    pub x_axis_label: Option<String>,
    pub x_axis_props: Option<Props>,
    pub y_axis_label: Option<String>,
    pub y_axis_props: Option<Props>,
    pub extra: Props,
}

/// Line chart over a list of records.
pub fn line_chart<I>(
    ui: &mut Ui,
    data: impl Into<Value>,
    data_key: impl Into<String>,
    series: I,
    props: LineChartProps,
) -> Scope
where
    I: IntoIterator,
    I::Item: Into<ChartSeries>,
{
    let LineChartProps {
        key,
        active_dot_props,
        connect_nulls,
        curve_type,
        dot_props,
        fill_opacity,
        gradient_stops,
        grid_axis,
        grid_color,
        grid_props,
        legend_props,
        line_chart_props,
        line_props,
        orientation,
        reference_lines,
        right_y_axis_label,
        right_y_axis_props,
        stroke_dasharray,
        stroke_width,
        text_color,
        tick_line,
        tooltip_animation_duration,
        tooltip_props,
        kind,
        unit,
        with_dots,
        with_legend,
        with_point_labels,
        with_right_y_axis,
        with_tooltip,
        with_x_axis,
        with_y_axis,
        x_axis_label,
        x_axis_props,
        y_axis_label,
        y_axis_props,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("linechart"));
    let mut p = props! {
        "activeDotProps" => active_dot_props,
        "connectNulls" => connect_nulls,
        "curveType" => curve_type,
        "dotProps" => dot_props,
        "fillOpacity" => fill_opacity,
        "gradientStops" => gradient_stops,
        "gridAxis" => grid_axis,
        "gridColor" => grid_color,
        "gridProps" => grid_props,
        "legendProps" => legend_props,
        "lineChartProps" => line_chart_props,
        "lineProps" => line_props,
        "orientation" => orientation,
        "referenceLines" => reference_lines,
        "rightYAxisLabel" => right_y_axis_label,
        "rightYAxisProps" => right_y_axis_props,
        "strokeDasharray" => stroke_dasharray,
        "strokeWidth" => stroke_width,
        "textColor" => text_color,
        "tickLine" => tick_line,
        "tooltipAnimationDuration" => tooltip_animation_duration,
        "tooltipProps" => tooltip_props,
        "type" => kind,
        "unit" => unit,
        "withDots" => with_dots,
        "withLegend" => with_legend,
        "withPointLabels" => with_point_labels,
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
    p.set("dataKey", data_key.into());
    p.set("series", wire_series(series));
    p.merge(extra);
    ui.container_element(Element::new("linechart", key).props(p))
}

/// Composed chart mixing line, area, and bar series; each series picks its
/// own mark through the series `extra` attributes.
pub fn composite_chart<I>(
    ui: &mut Ui,
    data: impl Into<Value>,
    data_key: impl Into<String>,
    series: I,
    props: CompositeChartProps,
) -> Scope
where
    I: IntoIterator,
    I::Item: Into<ChartSeries>,
{
    let CompositeChartProps {
        key,
        active_dot_props,
        area_props,
        bar_props,
        children,
        composed_chart_props,
        connect_nulls,
        curve_type,
        dot_props,
        grid_axis,
        grid_color,
        grid_props,
        legend_props,
        line_props,
        max_bar_width,
        min_bar_size,
        reference_lines,
        right_y_axis_label,
        right_y_axis_props,
        stroke_dasharray,
        stroke_width,
        text_color,
        tick_line,
        tooltip_animation_duration,
        tooltip_props,
        unit,
        with_bar_value_label,
        with_dots,
        with_legend,
        with_point_labels,
        with_right_y_axis,
        with_tooltip,
        with_x_axis,
        with_y_axis,
        x_axis_label,
        x_axis_props,
        y_axis_label,
        y_axis_props,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("compositechart"));
    let mut p = props! {
        "activeDotProps" => active_dot_props,
        "areaProps" => area_props,
        "barProps" => bar_props,
        "children" => children,
        "composedChartProps" => composed_chart_props,
        "connectNulls" => connect_nulls,
        "curveType" => curve_type,
        "dotProps" => dot_props,
        "gridAxis" => grid_axis,
        "gridColor" => grid_color,
        "gridProps" => grid_props,
        "legendProps" => legend_props,
        "lineProps" => line_props,
        "maxBarWidth" => max_bar_width,
        "minBarSize" => min_bar_size,
        "referenceLines" => reference_lines,
        "rightYAxisLabel" => right_y_axis_label,
        "rightYAxisProps" => right_y_axis_props,
        "strokeDasharray" => stroke_dasharray,
        "strokeWidth" => stroke_width,
        "textColor" => text_color,
        "tickLine" => tick_line,
        "tooltipAnimationDuration" => tooltip_animation_duration,
        "tooltipProps" => tooltip_props,
        "unit" => unit,
        "withBarValueLabel" => with_bar_value_label,
        "withDots" => with_dots,
        "withLegend" => with_legend,
        "withPointLabels" => with_point_labels,
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
    p.set("dataKey", data_key.into());
    p.set("series", wire_series(series));
    p.merge(extra);
    ui.container_element(Element::new("compositechart", key).props(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    #[test]
    fn test_line_chart_wire_shape() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        line_chart(
            &mut ui,
            json!([{"day": 1, "temp": 17}]),
            "day",
            ["temp"],
            LineChartProps {
                curve_type: Some("monotone".into()),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let chart = &wire["children"][0]["children"][1]["children"][0];
        assert_eq!(chart["name"], "linechart");
        assert_eq!(chart["props"]["curveType"], "monotone");
        assert_eq!(chart["key"], "linechart-1");
    }
}
