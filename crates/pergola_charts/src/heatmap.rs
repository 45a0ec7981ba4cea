//! Calendar heatmap over a date→value map.

use pergola_core::{props, Element, Props, Scope, Value};
use pergola_ui::Ui;

/// Options for [`heatmap`].
#[derive(Default)]
pub struct HeatmapProps {
    /// Color scale, light to dark.
    pub colors: Option<Vec<String>>,
    /// Value domain mapped onto the color scale.
    pub domain: Option<(f64, f64)>,
    pub end_date: Option<String>,
    pub first_day_of_week: Option<u8>,
    pub font_size: Option<u32>,
    pub gap: Option<u32>,
    /// Front-end hook for per-cell attributes.
    pub get_rect_props: Option<Value>,
    /// Front-end hook for tooltip labels.
    pub get_tooltip_label: Option<Value>,
    pub key: Option<String>,
    pub month_labels: Option<Vec<String>>,
    pub months_labels_height: Option<u32>,
    pub rect_radius: Option<u32>,
    pub rect_size: Option<u32>,
    pub start_date: Option<String>,
    pub tooltip_props: Option<Props>,
    pub weekday_labels: Option<Vec<String>>,
    pub weekdays_labels_width: Option<u32>,
    pub with_month_labels: Option<bool>,
    pub with_outside_dates: Option<bool>,
    pub with_tooltip: Option<bool>,
    pub with_weekday_labels: Option<bool>,
    pub extra: Props,
}

/// Heatmap over a `{iso-date: value}` map.
pub fn heatmap(ui: &mut Ui, data: impl Into<Value>, props: HeatmapProps) -> Scope {
    let HeatmapProps {
        colors,
        domain,
        end_date,
        first_day_of_week,
        font_size,
        gap,
        get_rect_props,
        get_tooltip_label,
        key,
        month_labels,
        months_labels_height,
        rect_radius,
        rect_size,
        start_date,
        tooltip_props,
        weekday_labels,
        weekdays_labels_width,
        with_month_labels,
        with_outside_dates,
        with_tooltip,
        with_weekday_labels,
        extra,
    } = props;
    let key = key.unwrap_or_else(|| ui.auto_key("heatmap"));
    let mut p = props! {
        "colors" => colors,
        "domain" => domain.map(|(low, high)| Value::from(vec![low, high])),
        "endDate" => end_date,
        "firstDayOfWeek" => first_day_of_week,
        "fontSize" => font_size,
        "gap" => gap,
        "getRectProps" => get_rect_props,
        "getTooltipLabel" => get_tooltip_label,
        "monthLabels" => month_labels,
        "monthsLabelsHeight" => months_labels_height,
        "rectRadius" => rect_radius,
        "rectSize" => rect_size,
        "startDate" => start_date,
        "tooltipProps" => tooltip_props,
        "weekdayLabels" => weekday_labels,
        "weekdaysLabelsWidth" => weekdays_labels_width,
        "withMonthLabels" => with_month_labels,
        "withOutsideDates" => with_outside_dates,
        "withTooltip" => with_tooltip,
        "withWeekdayLabels" => with_weekday_labels,
    };
    p.set("data", data);
    p.merge(extra);
    ui.container_element(Element::new("heatmap", key).props(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    #[test]
    fn test_heatmap_domain_serializes_as_pair() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        heatmap(
            &mut ui,
            json!({"2025-01-01": 2, "2025-01-02": 5}),
            HeatmapProps {
                domain: Some((0.0, 10.0)),
                rect_size: Some(12),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let chart = &wire["children"][0]["children"][1]["children"][0];
        assert_eq!(chart["props"]["domain"], json!([0.0, 10.0]));
        assert_eq!(chart["props"]["rectSize"], json!(12));
        assert_eq!(chart["props"]["data"]["2025-01-02"], json!(5));
    }
}
