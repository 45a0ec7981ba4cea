//! Bar charts, cartesian and radial.

use pergola_core::{props, Element, Props, Scope, Value};
use pergola_ui::Ui;

use crate::common::{wire_series, ChartSeries};

/// Options for [`bar_chart`].
#[derive(Default)]
pub struct BarChartProps {
    pub bar_chart_props: Option<Props>,
    pub bar_label_color: Option<String>,
    pub bar_props: Option<Props>,
    pub cursor_fill: Option<String>,
    pub fill_opacity: Option<f64>,
    /// Front-end hook computing a bar's color from its value.
    pub get_bar_color: Option<Value>,
    pub grid_axis: Option<String>,
    pub grid_color: Option<String>,
    pub grid_props: Option<Props>,
    pub key: Option<String>,
    pub legend_props: Option<Props>,
    pub max_bar_width: Option<u32>,
    pub min_bar_size: Option<u32>,
    pub orientation: Option<String>,
    pub reference_lines: Option<Value>,
    pub right_y_axis_label: Option<String>,
    pub right_y_axis_props: Option<Props>,
    pub stroke_dasharray: Option<Value>,
    pub text_color: Option<String>,
    pub tick_line: Option<String>,
    pub tooltip_animation_duration: Option<u32>,
    pub tooltip_props: Option<Props>,
    /// Bar family: `"default"`, `"stacked"`, `"percent"`, `"waterfall"`.
    pub kind: Option<String>,
    pub unit: Option<String>,
    pub value_label_props: Option<Props>,
    pub with_bar_value_label: Option<bool>,
    pub with_legend: Option<bool>,
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

/// Options for [`radial_bar_chart`].
#[derive(Default)]
pub struct RadialBarChartProps {
    pub bar_size: Option<u32>,
    pub empty_background_color: Option<String>,
    pub end_angle: Option<i32>,
    pub key: Option<String>,
    pub legend_props: Option<Props>,
    pub radial_bar_chart_props: Option<Props>,
    pub radial_bar_props: Option<Props>,
    pub start_angle: Option<i32>,
    pub tooltip_props: Option<Props>,
    pub with_background: Option<bool>,
    pub with_labels: Option<bool>,
    pub with_legend: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub extra: Props,
}

/// Bar chart over a list of records.
pub fn bar_chart<I>(
    ui: &mut Ui,
    data: impl Into<Value>,
    data_key: impl Into<String>,
    series: I,
    props: BarChartProps,
) -> Scope
where
    I: IntoIterator,
    I::Item: Into<ChartSeries>,
{
    let BarChartProps {
        bar_chart_props,
        bar_label_color,
        bar_props,
        cursor_fill,
        fill_opacity,
        get_bar_color,
        grid_axis,
        grid_color,
        grid_props,
        key,
        legend_props,
        max_bar_width,
        min_bar_size,
        orientation,
        reference_lines,
        right_y_axis_label,
        right_y_axis_props,
        stroke_dasharray,
        text_color,
        tick_line,
        tooltip_animation_duration,
        tooltip_props,
        kind,
        unit,
        value_label_props,
        with_bar_value_label,
        with_legend,
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
    let key = key.unwrap_or_else(|| ui.auto_key("barchart"));
    let mut p = props! {
        "barChartProps" => bar_chart_props,
        "barLabelColor" => bar_label_color,
        "barProps" => bar_props,
        "cursorFill" => cursor_fill,
        "fillOpacity" => fill_opacity,
        "getBarColor" => get_bar_color,
        "gridAxis" => grid_axis,
        "gridColor" => grid_color,
        "gridProps" => grid_props,
        "legendProps" => legend_props,
        "maxBarWidth" => max_bar_width,
        "minBarSize" => min_bar_size,
        "orientation" => orientation,
        "referenceLines" => reference_lines,
        "rightYAxisLabel" => right_y_axis_label,
        "rightYAxisProps" => right_y_axis_props,
        "strokeDasharray" => stroke_dasharray,
        "textColor" => text_color,
        "tickLine" => tick_line,
        "tooltipAnimationDuration" => tooltip_animation_duration,
        "tooltipProps" => tooltip_props,
        "type" => kind,
        "unit" => unit,
        "valueLabelProps" => value_label_props,
        "withBarValueLabel" => with_bar_value_label,
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
    p.set("dataKey", data_key.into());
    p.set("series", wire_series(series));
    p.merge(extra);
    ui.container_element(Element::new("barchart", key).props(p))
}

/// Radial bar chart; each record carries its own value under `data_key`.
pub fn radial_bar_chart(
    ui: &mut Ui,
    data: impl Into<Value>,
    data_key: impl Into<String>,
    props: RadialBarChartProps,
) -> Scope {
    let RadialBarChartProps {
        bar_size,
        empty_background_color,
        end_angle,
        key,
        legend_props,
        radial_bar_chart_props,
        radial_bar_props,
        start_angle,
        tooltip_props,
        with_background,
        with_labels,
        with_legend,
        with_tooltip,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("radialbarchart"));
    let mut p = props! {
        "barSize" => bar_size,
        "emptyBackgroundColor" => empty_background_color,
        "endAngle" => end_angle,
        "legendProps" => legend_props,
        "radialBarChartProps" => radial_bar_chart_props,
        "radialBarProps" => radial_bar_props,
        "startAngle" => start_angle,
        "tooltipProps" => tooltip_props,
        "withBackground" => with_background,
        "withLabels" => with_labels,
        "withLegend" => with_legend,
        "withTooltip" => with_tooltip,
    };
    p.set("data", data);
    p.set("dataKey", data_key.into());
    p.merge(extra);
    ui.container_element(Element::new("radialbarchart", key).props(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    #[test]
    fn test_bar_chart_series_and_renames() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        bar_chart(
            &mut ui,
            json!([{"month": "Jan", "laptops": 120}]),
            "month",
            [ChartSeries::new("laptops").color("blue.6")],
            BarChartProps {
                kind: Some("stacked".into()),
                with_legend: Some(true),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let chart = &wire["children"][0]["children"][1]["children"][0];
        assert_eq!(chart["props"]["type"], "stacked");
        assert_eq!(chart["props"]["withLegend"], json!(true));
        assert_eq!(
            chart["props"]["series"],
            json!([{"name": "laptops", "color": "blue.6"}])
        );
    }
}
