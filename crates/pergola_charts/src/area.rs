//! Area chart.

use pergola_core::{props, Element, Props, Scope, Value};
use pergola_ui::Ui;

use crate::common::{wire_series, ChartSeries};

/// Options for [`area_chart`].
pub struct AreaChartProps {
    pub key: Option<String>,
    pub active_dot_props: Option<Props>,
    pub area_chart_props: Option<Props>,
    pub area_props: Option<Props>,
    pub connect_nulls: Option<bool>,
    pub curve_type: Option<String>,
    pub dot_props: Option<Props>,
    /// Fill opacity of the areas; always written.
    pub fill_opacity: f64,
    pub grid_axis: Option<String>,
    pub grid_color: Option<String>,
    pub grid_props: Option<Props>,
    pub legend_props: Option<Props>,
    pub orientation: Option<String>,
    pub reference_lines: Option<Value>,
    pub right_y_axis_label: Option<String>,
    pub right_y_axis_props: Option<Props>,
    pub split_colors: Option<Vec<String>>,
    pub split_offset: Option<f64>,
    pub stroke_dasharray: Option<Value>,
    pub stroke_width: Option<u32>,
    pub text_color: Option<String>,
    pub tick_line: Option<String>,
    /// Tooltip fade duration in ms; always written.
    pub tooltip_animation_duration: u32,
    pub tooltip_props: Option<Props>,
    /// Curve family, e.g. `"stacked"`, `"percent"`, `"split"`.
    pub kind: Option<String>,
    pub unit: Option<String>,
    pub with_dots: Option<bool>,
    pub with_gradient: Option<bool>,
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

impl Default for AreaChartProps {
    fn default() -> Self {
        Self {
            key: None,
            active_dot_props: None,
            area_chart_props: None,
            area_props: None,
            connect_nulls: None,
            curve_type: None,
            dot_props: None,
            fill_opacity: 0.2,
            grid_axis: None,
            grid_color: None,
            grid_props: None,
            legend_props: None,
            orientation: None,
            reference_lines: None,
            right_y_axis_label: None,
            right_y_axis_props: None,
            split_colors: None,
            split_offset: None,
            stroke_dasharray: None,
            stroke_width: None,
            text_color: None,
            tick_line: None,
            tooltip_animation_duration: 0,
            tooltip_props: None,
            kind: None,
            unit: None,
            with_dots: None,
            with_gradient: None,
            with_legend: None,
            with_point_labels: None,
            with_right_y_axis: None,
            with_tooltip: None,
            with_x_axis: None,
            with_y_axis: None,
            x_axis_label: None,
            x_axis_props: None,
            y_axis_label: None,
            y_axis_props: None,
            extra: Props::new(),
        }
    }
}

/// Area chart over a list of records; `data_key` names the x-axis field,
/// `series` the plotted fields.
pub fn area_chart<I>(
    ui: &mut Ui,
    data: impl Into<Value>,
    data_key: impl Into<String>,
    series: I,
    props: AreaChartProps,
) -> Scope
where
    I: IntoIterator,
    I::Item: Into<ChartSeries>,
{
    let AreaChartProps {
        key,
        active_dot_props,
        area_chart_props,
        area_props,
        connect_nulls,
        curve_type,
        dot_props,
        fill_opacity,
        grid_axis,
        grid_color,
        grid_props,
        legend_props,
        orientation,
        reference_lines,
        right_y_axis_label,
        right_y_axis_props,
        split_colors,
        split_offset,
        stroke_dasharray,
        stroke_width,
        text_color,
        tick_line,
        tooltip_animation_duration,
        tooltip_props,
        kind,
        unit,
        with_dots,
        with_gradient,
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
    let key = key.unwrap_or_else(|| ui.auto_key("areachart"));
    let mut p = props! {
        "activeDotProps" => active_dot_props,
        "areaChartProps" => area_chart_props,
        "areaProps" => area_props,
        "connectNulls" => connect_nulls,
        "curveType" => curve_type,
        "dotProps" => dot_props,
        "gridAxis" => grid_axis,
        "gridColor" => grid_color,
        "gridProps" => grid_props,
        "legendProps" => legend_props,
        "orientation" => orientation,
        "referenceLines" => reference_lines,
        "rightYAxisLabel" => right_y_axis_label,
        "rightYAxisProps" => right_y_axis_props,
        "splitColors" => split_colors,
        "splitOffset" => split_offset,
        "strokeDasharray" => stroke_dasharray,
        "strokeWidth" => stroke_width,
        "textColor" => text_color,
        "tickLine" => tick_line,
        "tooltipProps" => tooltip_props,
        "type" => kind,
        "unit" => unit,
        "withDots" => with_dots,
        "withGradient" => with_gradient,
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
    p.set("fillOpacity", fill_opacity);
    p.set("tooltipAnimationDuration", tooltip_animation_duration);
    p.merge(extra);
    ui.container_element(Element::new("areachart", key).props(p))
}
