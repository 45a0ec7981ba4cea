//! Part-of-whole charts: pie, donut, funnel.
//!
//! These take their data as self-describing segments
//! (`[{"name", "value", "color"}, ...]`) rather than a series list.

use pergola_core::{props, Element, Props, Scope, Value};
use pergola_ui::Ui;

/// Options for [`pie_chart`].
#[derive(Default)]
pub struct PieChartProps {
    pub end_angle: Option<i32>,
    pub key: Option<String>,
    pub label_color: Option<String>,
    /// `"outside"` or `"inside"`.
    pub labels_position: Option<String>,
    /// `"value"` or `"percent"`.
    pub labels_type: Option<String>,
    pub padding_angle: Option<i32>,
    pub pie_chart_props: Option<Props>,
    pub pie_props: Option<Props>,
    pub size: Option<u32>,
    pub start_angle: Option<i32>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<u32>,
    pub tooltip_animation_duration: Option<u32>,
    /// `"all"` or `"segment"`.
    pub tooltip_data_source: Option<String>,
    pub tooltip_props: Option<Props>,
    pub with_labels: Option<bool>,
    pub with_labels_line: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub extra: Props,
}

/// Options for [`donut_chart`].
#[derive(Default)]
pub struct DonutChartProps {
    /// Label rendered in the donut hole.
    pub chart_label: Option<Value>,
    pub end_angle: Option<i32>,
    pub key: Option<String>,
    pub label_color: Option<String>,
    pub labels_type: Option<String>,
    pub padding_angle: Option<i32>,
    pub pie_chart_props: Option<Props>,
    pub pie_props: Option<Props>,
    pub size: Option<u32>,
    pub start_angle: Option<i32>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<u32>,
    pub thickness: Option<u32>,
    pub tooltip_animation_duration: Option<u32>,
    pub tooltip_data_source: Option<String>,
    pub tooltip_props: Option<Props>,
    pub with_labels: Option<bool>,
    pub with_labels_line: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub extra: Props,
}

/// Options for [`funnel_chart`].
#[derive(Default)]
pub struct FunnelChartProps {
    pub funnel_chart_props: Option<Props>,
    pub funnel_props: Option<Props>,
    pub key: Option<String>,
    pub label_color: Option<String>,
    /// `"left"`, `"right"`, or `"inside"`.
    pub labels_position: Option<String>,
    pub size: Option<u32>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<u32>,
    pub tooltip_animation_duration: Option<u32>,
    pub tooltip_data_source: Option<String>,
    pub tooltip_props: Option<Props>,
    /// Front-end hook formatting segment values.
    pub value_formatter: Option<Value>,
    pub with_labels: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub extra: Props,
}

/// Pie chart over self-describing segments.
pub fn pie_chart(ui: &mut Ui, data: impl Into<Value>, props: PieChartProps) -> Scope {
    let PieChartProps {
        end_angle,
        key,
        label_color,
        labels_position,
        labels_type,
        padding_angle,
        pie_chart_props,
        pie_props,
        size,
        start_angle,
        stroke_color,
        stroke_width,
        tooltip_animation_duration,
        tooltip_data_source,
        tooltip_props,
        with_labels,
        with_labels_line,
        with_tooltip,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("piechart"));
    let mut p = props! {
        "endAngle" => end_angle,
        "labelColor" => label_color,
        "labelsPosition" => labels_position,
        "labelsType" => labels_type,
        "paddingAngle" => padding_angle,
        "pieChartProps" => pie_chart_props,
        "pieProps" => pie_props,
        "size" => size,
        "startAngle" => start_angle,
        "strokeColor" => stroke_color,
        "strokeWidth" => stroke_width,
        "tooltipAnimationDuration" => tooltip_animation_duration,
        "tooltipDataSource" => tooltip_data_source,
        "tooltipProps" => tooltip_props,
        "withLabels" => with_labels,
        "withLabelsLine" => with_labels_line,
        "withTooltip" => with_tooltip,
    };
    p.set("data", data);
    p.merge(extra);
    ui.container_element(Element::new("piechart", key).props(p))
}

/// Donut chart over self-describing segments.
pub fn donut_chart(ui: &mut Ui, data: impl Into<Value>, props: DonutChartProps) -> Scope {
    let DonutChartProps {
        chart_label,
        end_angle,
        key,
        label_color,
        labels_type,
        padding_angle,
        pie_chart_props,
        pie_props,
        size,
        start_angle,
        stroke_color,
        stroke_width,
        thickness,
        tooltip_animation_duration,
        tooltip_data_source,
        tooltip_props,
        with_labels,
        with_labels_line,
        with_tooltip,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("donutchart"));
    let mut p = props! {
        "chartLabel" => chart_label,
        "endAngle" => end_angle,
        "labelColor" => label_color,
        "labelsType" => labels_type,
        "paddingAngle" => padding_angle,
        "pieChartProps" => pie_chart_props,
        "pieProps" => pie_props,
        "size" => size,
        "startAngle" => start_angle,
        "strokeColor" => stroke_color,
        "strokeWidth" => stroke_width,
        "thickness" => thickness,
        "tooltipAnimationDuration" => tooltip_animation_duration,
        "tooltipDataSource" => tooltip_data_source,
        "tooltipProps" => tooltip_props,
        "withLabels" => with_labels,
        "withLabelsLine" => with_labels_line,
        "withTooltip" => with_tooltip,
    };
    p.set("data", data);
    p.merge(extra);
    ui.container_element(Element::new("donutchart", key).props(p))
}

/// Funnel chart over self-describing segments.
pub fn funnel_chart(ui: &mut Ui, data: impl Into<Value>, props: FunnelChartProps) -> Scope {
    let FunnelChartProps {
        funnel_chart_props,
        funnel_props,
        key,
        label_color,
        labels_position,
        size,
        stroke_color,
        stroke_width,
        tooltip_animation_duration,
        tooltip_data_source,
        tooltip_props,
        value_formatter,
        with_labels,
        with_tooltip,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("funnelchart"));
    let mut p = props! {
        "funnelChartProps" => funnel_chart_props,
        "funnelProps" => funnel_props,
        "labelColor" => label_color,
        "labelsPosition" => labels_position,
        "size" => size,
        "strokeColor" => stroke_color,
        "strokeWidth" => stroke_width,
        "tooltipAnimationDuration" => tooltip_animation_duration,
        "tooltipDataSource" => tooltip_data_source,
        "tooltipProps" => tooltip_props,
        "valueFormatter" => value_formatter,
        "withLabels" => with_labels,
        "withTooltip" => with_tooltip,
    };
    p.set("data", data);
    p.merge(extra);
    ui.container_element(Element::new("funnelchart", key).props(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    #[test]
    fn test_donut_chart_segments_pass_through() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        donut_chart(
            &mut ui,
            json!([{"name": "USA", "value": 400, "color": "indigo.6"}]),
            DonutChartProps {
                chart_label: Some(json!("Sales")),
                thickness: Some(20),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let chart = &wire["children"][0]["children"][1]["children"][0];
        assert_eq!(chart["props"]["data"][0]["name"], "USA");
        assert_eq!(chart["props"]["chartLabel"], "Sales");
        assert_eq!(chart["props"]["thickness"], json!(20));
    }
}
