//! Radar chart.

use pergola_core::{props, Element, Props, Scope, Value};
use pergola_ui::Ui;

use crate::common::{wire_series, ChartSeries};

/// Options for [`radar_chart`].
#[derive(Default)]
pub struct RadarChartProps {
    pub active_dot_props: Option<Props>,
    pub dot_props: Option<Props>,
    pub grid_color: Option<String>,
    pub key: Option<String>,
    pub legend_props: Option<Props>,
    pub polar_angle_axis_props: Option<Props>,
    pub polar_grid_props: Option<Props>,
    pub polar_radius_axis_props: Option<Props>,
    pub radar_chart_props: Option<Props>,
    pub radar_props: Option<Props>,
    pub text_color: Option<String>,
    pub tooltip_animation_duration: Option<u32>,
    pub tooltip_props: Option<Props>,
    pub with_dots: Option<bool>,
    pub with_legend: Option<bool>,
    pub with_polar_angle_axis: Option<bool>,
    pub with_polar_grid: Option<bool>,
    pub with_polar_radius_axis: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub extra: Props,
}

/// Radar chart over a list of records; `data_key` names the axis field.
pub fn radar_chart<I>(
    ui: &mut Ui,
    data: impl Into<Value>,
    data_key: impl Into<String>,
    series: I,
    props: RadarChartProps,
) -> Scope
where
    I: IntoIterator,
    I::Item: Into<ChartSeries>,
{
    let RadarChartProps {
        active_dot_props,
        dot_props,
        grid_color,
        key,
        legend_props,
        polar_angle_axis_props,
        polar_grid_props,
        polar_radius_axis_props,
        radar_chart_props,
        radar_props,
        text_color,
        tooltip_animation_duration,
        tooltip_props,
        with_dots,
        with_legend,
        with_polar_angle_axis,
        with_polar_grid,
        with_polar_radius_axis,
        with_tooltip,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("radarchart"));
    let mut p = props! {
        "activeDotProps" => active_dot_props,
        "dotProps" => dot_props,
        "gridColor" => grid_color,
        "legendProps" => legend_props,
        "polarAngleAxisProps" => polar_angle_axis_props,
        "polarGridProps" => polar_grid_props,
        "polarRadiusAxisProps" => polar_radius_axis_props,
        "radarChartProps" => radar_chart_props,
        "radarProps" => radar_props,
        "textColor" => text_color,
        "tooltipAnimationDuration" => tooltip_animation_duration,
        "tooltipProps" => tooltip_props,
        "withDots" => with_dots,
        "withLegend" => with_legend,
        "withPolarAngleAxis" => with_polar_angle_axis,
        "withPolarGrid" => with_polar_grid,
        "withPolarRadiusAxis" => with_polar_radius_axis,
        "withTooltip" => with_tooltip,
    };
    p.set("data", data);
    p.set("dataKey", data_key.into());
    p.set("series", wire_series(series));
    p.merge(extra);
    ui.container_element(Element::new("radarchart", key).props(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    #[test]
    fn test_radar_chart_polar_renames() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        radar_chart(
            &mut ui,
            json!([{"skill": "Rust", "team": 86}]),
            "skill",
            ["team"],
            RadarChartProps {
                with_polar_grid: Some(true),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let chart = &wire["children"][0]["children"][1]["children"][0];
        assert_eq!(chart["props"]["withPolarGrid"], json!(true));
        assert!(chart["props"].get("with_polar_grid").is_none());
    }
}
