//! Date and time pickers
//!
//! Values cross the wire as ISO-8601 strings. The constructors accept
//! either native chrono values or ISO strings, and the value coming back
//! from session state is parsed into the native type before being returned:
//! native values pass through unchanged, strings are parsed, sequences are
//! converted element-wise, and anything else yields no value rather than an
//! error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pergola_core::{props, ChangeHandler, Element, Props, Value};

use crate::Ui;

/// Date-time argument: native value or ISO-8601 string.
#[derive(Clone, Debug, PartialEq)]
pub enum DateTimeInput {
    DateTime(NaiveDateTime),
    Iso(String),
}

impl DateTimeInput {
    fn to_value(&self) -> Value {
        match self {
            DateTimeInput::DateTime(dt) => Value::from(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            DateTimeInput::Iso(s) => Value::from(s.clone()),
        }
    }
}

impl From<NaiveDateTime> for DateTimeInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateTimeInput::DateTime(dt)
    }
}

impl From<&str> for DateTimeInput {
    fn from(s: &str) -> Self {
        DateTimeInput::Iso(s.to_string())
    }
}

/// Date argument: native value or ISO-8601 string.
#[derive(Clone, Debug, PartialEq)]
pub enum DateInput {
    Date(NaiveDate),
    Iso(String),
}

impl DateInput {
    fn to_value(&self) -> Value {
        match self {
            DateInput::Date(d) => Value::from(d.to_string()),
            DateInput::Iso(s) => Value::from(s.clone()),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Iso(s.to_string())
    }
}

/// One or several dates, covering single, multiple, and range picker modes.
#[derive(Clone, Debug, PartialEq)]
pub enum DatesInput {
    One(DateInput),
    Many(Vec<DateInput>),
}

impl DatesInput {
    fn to_value(&self) -> Value {
        match self {
            DatesInput::One(d) => d.to_value(),
            DatesInput::Many(dates) => Value::Array(dates.iter().map(DateInput::to_value).collect()),
        }
    }
}

impl From<NaiveDate> for DatesInput {
    fn from(d: NaiveDate) -> Self {
        DatesInput::One(d.into())
    }
}

impl From<&str> for DatesInput {
    fn from(s: &str) -> Self {
        DatesInput::One(s.into())
    }
}

impl From<Vec<NaiveDate>> for DatesInput {
    fn from(dates: Vec<NaiveDate>) -> Self {
        DatesInput::Many(dates.into_iter().map(Into::into).collect())
    }
}

impl From<(NaiveDate, NaiveDate)> for DatesInput {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        DatesInput::Many(vec![start.into(), end.into()])
    }
}

/// Time argument: native value or ISO string.
#[derive(Clone, Debug, PartialEq)]
pub enum TimeInput {
    Time(NaiveTime),
    Iso(String),
}

impl TimeInput {
    fn to_value(&self) -> Value {
        match self {
            TimeInput::Time(t) => Value::from(t.format("%H:%M:%S").to_string()),
            TimeInput::Iso(s) => Value::from(s.clone()),
        }
    }
}

impl From<NaiveTime> for TimeInput {
    fn from(t: NaiveTime) -> Self {
        TimeInput::Time(t)
    }
}

impl From<&str> for TimeInput {
    fn from(s: &str) -> Self {
        TimeInput::Iso(s.to_string())
    }
}

/// Current selection of a date picker: a single date, or an ordered list
/// (multiple mode, or the two ends of a range).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateSelection {
    Single(NaiveDate),
    Many(Vec<NaiveDate>),
}

impl DateSelection {
    pub fn single(&self) -> Option<NaiveDate> {
        match self {
            DateSelection::Single(d) => Some(*d),
            DateSelection::Many(_) => None,
        }
    }

    /// Interpret a two-element selection as a range.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            DateSelection::Many(dates) if dates.len() == 2 => Some((dates[0], dates[1])),
            _ => None,
        }
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    s.parse().ok()
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    s.parse()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").ok())
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok())
}

fn parse_iso_time(s: &str) -> Option<NaiveTime> {
    s.parse()
        .ok()
        .or_else(|| NaiveTime::parse_from_str(s, "%H:%M").ok())
}

/// Wire value → date-time; anything unrecognized is no value.
pub fn parse_datetime_value(value: &Value) -> Option<NaiveDateTime> {
    value.as_str().and_then(parse_iso_datetime)
}

/// Wire value → date selection; sequences are converted element-wise.
pub fn parse_date_value(value: &Value) -> Option<DateSelection> {
    match value {
        Value::String(s) => parse_iso_date(s).map(DateSelection::Single),
        Value::Array(items) => Some(DateSelection::Many(
            items
                .iter()
                .filter_map(|v| v.as_str().and_then(parse_iso_date))
                .collect(),
        )),
        _ => None,
    }
}

/// Wire value → time; anything unrecognized is no value.
pub fn parse_time_value(value: &Value) -> Option<NaiveTime> {
    value.as_str().and_then(parse_iso_time)
}

/// Options for [`Ui::date_time_picker`].
#[derive(Default)]
pub struct DateTimePickerProps {
    pub value: Option<DateTimeInput>,
    pub clearable: Option<bool>,
    pub columns_to_scroll: Option<u32>,
    pub description: Option<String>,
    pub disabled: Option<bool>,
    /// `"modal"` or `"popover"`.
    pub dropdown_type: Option<String>,
    pub error: Option<String>,
    pub first_day_of_week: Option<u8>,
    pub header_controls_order: Option<Vec<String>>,
    pub hide_outside_dates: Option<bool>,
    pub hide_weekdays: Option<bool>,
    pub highlight_today: Option<bool>,
    pub input_size: Option<String>,
    pub input_wrapper_order: Option<Vec<String>>,
    pub key: Option<String>,
    pub label_props: Option<Props>,
    pub label_separator: Option<String>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    /// Initial calendar level: `"month"`, `"year"`, `"decade"`.
    pub level: Option<String>,
    pub locale: Option<String>,
    pub max_date: Option<DateTimeInput>,
    pub max_level: Option<String>,
    pub min_date: Option<DateTimeInput>,
    pub months_list_format: Option<String>,
    pub next_icon: Option<Element>,
    pub next_label: Option<String>,
    pub number_of_columns: Option<u32>,
    pub on_change: Option<ChangeHandler>,
    pub placeholder: Option<String>,
    pub pointer: Option<bool>,
    pub popover_props: Option<Props>,
    pub presets: Option<Value>,
    pub previous_icon: Option<Element>,
    pub previous_label: Option<String>,
    pub radius: Option<Value>,
    pub read_only: Option<bool>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_pointer_events: Option<String>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub size: Option<String>,
    pub sort_dates: Option<bool>,
    pub submit_button_props: Option<Props>,
    pub time_picker_props: Option<Props>,
    pub value_format: Option<String>,
    pub weekday_format: Option<String>,
    pub weekend_days: Option<Vec<u8>>,
    pub with_asterisk: Option<bool>,
    pub with_cell_spacing: Option<bool>,
    pub with_error_styles: Option<bool>,
    pub with_seconds: Option<bool>,
    pub with_week_numbers: Option<bool>,
    pub wrapper_props: Option<Props>,
    pub year_label_format: Option<String>,
    pub years_list_format: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::date_picker`] (inline calendar).
#[derive(Default)]
pub struct DatePickerProps {
    pub value: Option<DatesInput>,
    pub allow_deselect: Option<bool>,
    pub allow_single_date_in_range: Option<bool>,
    pub aria_labels: Option<Props>,
    pub columns_to_scroll: Option<u32>,
    pub decade_label_format: Option<String>,
    pub default_level: Option<String>,
    pub description: Option<String>,
    pub enable_keyboard_navigation: Option<bool>,
    pub first_day_of_week: Option<u8>,
    pub header_controls_order: Option<Vec<String>>,
    pub hide_outside_dates: Option<bool>,
    pub hide_weekdays: Option<bool>,
    pub highlight_today: Option<bool>,
    pub key: Option<String>,
    pub level: Option<String>,
    pub locale: Option<String>,
    pub max_date: Option<DateInput>,
    pub max_level: Option<String>,
    pub min_date: Option<DateInput>,
    pub month_label_format: Option<String>,
    pub months_list_format: Option<String>,
    pub next_icon: Option<Element>,
    pub next_label: Option<String>,
    pub number_of_columns: Option<u32>,
    pub on_change: Option<ChangeHandler>,
    pub presets: Option<Value>,
    pub previous_icon: Option<Element>,
    pub previous_label: Option<String>,
    pub size: Option<String>,
    /// Picker mode: `"default"`, `"range"`, `"multiple"`.
    pub kind: Option<String>,
    pub weekday_format: Option<String>,
    pub weekend_days: Option<Vec<u8>>,
    pub with_cell_spacing: Option<bool>,
    pub with_week_numbers: Option<bool>,
    pub year_label_format: Option<String>,
    pub years_list_format: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::date_picker_input`] (calendar in an input shell).
#[derive(Default)]
pub struct DatePickerInputProps {
    pub value: Option<DatesInput>,
    pub allow_deselect: Option<bool>,
    pub allow_single_date_in_range: Option<bool>,
    pub aria_labels: Option<Props>,
    pub clear_button_props: Option<Props>,
    pub clearable: Option<bool>,
    pub close_on_change: Option<bool>,
    pub columns_to_scroll: Option<u32>,
    pub decade_label_format: Option<String>,
    pub default_level: Option<String>,
    pub description: Option<String>,
    pub description_props: Option<Props>,
    pub disabled: Option<bool>,
    pub dropdown_type: Option<String>,
    pub enable_keyboard_navigation: Option<bool>,
    pub error: Option<String>,
    pub error_props: Option<Props>,
    pub first_day_of_week: Option<u8>,
    pub header_controls_order: Option<Vec<String>>,
    pub hide_outside_dates: Option<bool>,
    pub hide_weekdays: Option<bool>,
    pub highlight_today: Option<bool>,
    pub input_size: Option<String>,
    pub input_wrapper_order: Option<Vec<String>>,
    pub key: Option<String>,
    pub label_props: Option<Props>,
    pub label_separator: Option<String>,
    pub left_section: Option<Element>,
    pub left_section_pointer_events: Option<String>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub level: Option<String>,
    pub locale: Option<String>,
    pub max_date: Option<DateInput>,
    pub max_level: Option<String>,
    pub min_date: Option<DateInput>,
    pub modal_props: Option<Props>,
    pub month_label_format: Option<String>,
    pub months_list_format: Option<String>,
    pub next_icon: Option<Element>,
    pub next_label: Option<String>,
    pub number_of_columns: Option<u32>,
    pub on_change: Option<ChangeHandler>,
    pub placeholder: Option<String>,
    pub pointer: Option<bool>,
    pub popover_props: Option<Props>,
    pub presets: Option<Value>,
    pub previous_icon: Option<Element>,
    pub previous_label: Option<String>,
    pub radius: Option<Value>,
    pub read_only: Option<bool>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_pointer_events: Option<String>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub size: Option<String>,
    pub sort_dates: Option<bool>,
    pub kind: Option<String>,
    pub value_format: Option<String>,
    pub weekday_format: Option<String>,
    pub weekend_days: Option<Vec<u8>>,
    pub with_asterisk: Option<bool>,
    pub with_cell_spacing: Option<bool>,
    pub with_error_styles: Option<bool>,
    pub with_week_numbers: Option<bool>,
    pub wrapper_props: Option<Props>,
    pub year_label_format: Option<String>,
    pub years_list_format: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::time_input`].
#[derive(Default)]
pub struct TimeInputProps {
    pub value: Option<TimeInput>,
    pub description: Option<String>,
    pub description_props: Option<Props>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub error_props: Option<Props>,
    pub input_size: Option<String>,
    pub input_wrapper_order: Option<Vec<String>>,
    pub key: Option<String>,
    pub label_props: Option<Props>,
    pub left_section: Option<Element>,
    pub left_section_pointer_events: Option<String>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub max_time: Option<String>,
    pub min_time: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub pointer: Option<bool>,
    pub radius: Option<Value>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_pointer_events: Option<String>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub size: Option<String>,
    pub with_asterisk: Option<bool>,
    pub with_error_styles: Option<bool>,
    pub with_seconds: Option<bool>,
    pub wrapper_props: Option<Props>,
    pub extra: Props,
}

/// Options for [`Ui::time_picker`].
#[derive(Default)]
pub struct TimePickerProps {
    pub value: Option<TimeInput>,
    pub am_pm_input_label: Option<String>,
    pub am_pm_labels: Option<Props>,
    pub am_pm_select_props: Option<Props>,
    pub clear_button_props: Option<Props>,
    pub clearable: Option<bool>,
    pub description: Option<String>,
    pub description_props: Option<Props>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub error_props: Option<Props>,
    pub form: Option<String>,
    /// `"12h"` or `"24h"`.
    pub format: Option<String>,
    pub hidden_input_props: Option<Props>,
    pub hours_input_label: Option<String>,
    pub hours_input_props: Option<Props>,
    pub hours_step: Option<u32>,
    pub input_size: Option<String>,
    pub input_wrapper_order: Option<Vec<String>>,
    pub key: Option<String>,
    pub label_props: Option<Props>,
    pub left_section: Option<Element>,
    pub left_section_pointer_events: Option<String>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub max: Option<String>,
    pub max_dropdown_content_height: Option<u32>,
    pub min: Option<String>,
    pub minutes_input_label: Option<String>,
    pub minutes_input_props: Option<Props>,
    pub minutes_step: Option<u32>,
    pub name: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub pointer: Option<bool>,
    pub popover_props: Option<Props>,
    pub presets: Option<Value>,
    pub radius: Option<Value>,
    pub read_only: Option<bool>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_pointer_events: Option<String>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub scroll_area_props: Option<Props>,
    pub seconds_input_label: Option<String>,
    pub seconds_input_props: Option<Props>,
    pub seconds_step: Option<u32>,
    pub size: Option<String>,
    pub with_asterisk: Option<bool>,
    pub with_dropdown: Option<bool>,
    pub with_error_styles: Option<bool>,
    pub with_seconds: Option<bool>,
    pub wrapper_props: Option<Props>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Date-time picker with calendar and time selection.
    pub fn date_time_picker(
        &mut self,
        label: impl Into<String>,
        props: DateTimePickerProps,
    ) -> Option<NaiveDateTime> {
        let DateTimePickerProps {
            value,
            clearable,
            columns_to_scroll,
            description,
            disabled,
            dropdown_type,
            error,
            first_day_of_week,
            header_controls_order,
            hide_outside_dates,
            hide_weekdays,
            highlight_today,
            input_size,
            input_wrapper_order,
            key,
            label_props,
            label_separator,
            left_section,
            left_section_props,
            left_section_width,
            level,
            locale,
            max_date,
            max_level,
            min_date,
            months_list_format,
            next_icon,
            next_label,
            number_of_columns,
            on_change,
            placeholder,
            pointer,
            popover_props,
            presets,
            previous_icon,
            previous_label,
            radius,
            read_only,
            required,
            right_section,
            right_section_pointer_events,
            right_section_props,
            right_section_width,
            size,
            sort_dates,
            submit_button_props,
            time_picker_props,
            value_format,
            weekday_format,
            weekend_days,
            with_asterisk,
            with_cell_spacing,
            with_error_styles,
            with_seconds,
            with_week_numbers,
            wrapper_props,
            year_label_format,
            years_list_format,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("datetimepicker", &label, key);
        let mut p = props! {
            "clearable" => clearable,
            "columnsToScroll" => columns_to_scroll,
            "description" => description,
            "disabled" => disabled,
            "dropdownType" => dropdown_type,
            "error" => error,
            "firstDayOfWeek" => first_day_of_week,
            "headerControlsOrder" => header_controls_order,
            "hideOutsideDates" => hide_outside_dates,
            "hideWeekdays" => hide_weekdays,
            "highlightToday" => highlight_today,
            "inputSize" => input_size,
            "inputWrapperOrder" => input_wrapper_order,
            "labelProps" => label_props,
            "labelSeparator" => label_separator,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "level" => level,
            "locale" => locale,
            "maxDate" => max_date.as_ref().map(DateTimeInput::to_value),
            "maxLevel" => max_level,
            "minDate" => min_date.as_ref().map(DateTimeInput::to_value),
            "monthsListFormat" => months_list_format,
            "nextIcon" => next_icon,
            "nextLabel" => next_label,
            "numberOfColumns" => number_of_columns,
            "placeholder" => placeholder,
            "pointer" => pointer,
            "popoverProps" => popover_props,
            "presets" => presets,
            "previousIcon" => previous_icon,
            "previousLabel" => previous_label,
            "radius" => radius,
            "readOnly" => read_only,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionPointerEvents" => right_section_pointer_events,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "size" => size,
            "sortDates" => sort_dates,
            "submitButtonProps" => submit_button_props,
            "timePickerProps" => time_picker_props,
            "valueFormat" => value_format,
            "weekdayFormat" => weekday_format,
            "weekendDays" => weekend_days,
            "withAsterisk" => with_asterisk,
            "withCellSpacing" => with_cell_spacing,
            "withErrorStyles" => with_error_styles,
            "withSeconds" => with_seconds,
            "withWeekNumbers" => with_week_numbers,
            "wrapperProps" => wrapper_props,
            "yearLabelFormat" => year_label_format,
            "yearsListFormat" => years_list_format,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(|v| v.to_value()).unwrap_or(Value::Null);
        let current = self.controlled_input("datetimepicker", key, p, fallback, on_change);
        parse_datetime_value(&current)
    }

    /// Inline calendar date picker supporting single, range, and multiple
    /// modes.
    pub fn date_picker(
        &mut self,
        label: impl Into<String>,
        props: DatePickerProps,
    ) -> Option<DateSelection> {
        let DatePickerProps {
            value,
            allow_deselect,
            allow_single_date_in_range,
            aria_labels,
            columns_to_scroll,
            decade_label_format,
            default_level,
            description,
            enable_keyboard_navigation,
            first_day_of_week,
            header_controls_order,
            hide_outside_dates,
            hide_weekdays,
            highlight_today,
            key,
            level,
            locale,
            max_date,
            max_level,
            min_date,
            month_label_format,
            months_list_format,
            next_icon,
            next_label,
            number_of_columns,
            on_change,
            presets,
            previous_icon,
            previous_label,
            size,
            kind,
            weekday_format,
            weekend_days,
            with_cell_spacing,
            with_week_numbers,
            year_label_format,
            years_list_format,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("datepicker", &label, key);
        let mut p = props! {
            "allowDeselect" => allow_deselect,
            "allowSingleDateInRange" => allow_single_date_in_range,
            "ariaLabels" => aria_labels,
            "columnsToScroll" => columns_to_scroll,
            "decadeLabelFormat" => decade_label_format,
            "defaultLevel" => default_level,
            "description" => description,
            "enableKeyboardNavigation" => enable_keyboard_navigation,
            "firstDayOfWeek" => first_day_of_week,
            "headerControlsOrder" => header_controls_order,
            "hideOutsideDates" => hide_outside_dates,
            "hideWeekdays" => hide_weekdays,
            "highlightToday" => highlight_today,
            "level" => level,
            "locale" => locale,
            "maxDate" => max_date.as_ref().map(DateInput::to_value),
            "maxLevel" => max_level,
            "minDate" => min_date.as_ref().map(DateInput::to_value),
            "monthLabelFormat" => month_label_format,
            "monthsListFormat" => months_list_format,
            "nextIcon" => next_icon,
            "nextLabel" => next_label,
            "numberOfColumns" => number_of_columns,
            "presets" => presets,
            "previousIcon" => previous_icon,
            "previousLabel" => previous_label,
            "size" => size,
            "type" => kind,
            "weekdayFormat" => weekday_format,
            "weekendDays" => weekend_days,
            "withCellSpacing" => with_cell_spacing,
            "withWeekNumbers" => with_week_numbers,
            "yearLabelFormat" => year_label_format,
            "yearsListFormat" => years_list_format,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(|v| v.to_value()).unwrap_or(Value::Null);
        let current = self.controlled_input("datepicker", key, p, fallback, on_change);
        parse_date_value(&current)
    }

    /// Date picker rendered as an input with a dropdown calendar.
    pub fn date_picker_input(
        &mut self,
        label: impl Into<String>,
        props: DatePickerInputProps,
    ) -> Option<DateSelection> {
        let DatePickerInputProps {
            value,
            allow_deselect,
            allow_single_date_in_range,
            aria_labels,
            clear_button_props,
            clearable,
            close_on_change,
            columns_to_scroll,
            decade_label_format,
            default_level,
            description,
            description_props,
            disabled,
            dropdown_type,
            enable_keyboard_navigation,
            error,
            error_props,
            first_day_of_week,
            header_controls_order,
            hide_outside_dates,
            hide_weekdays,
            highlight_today,
            input_size,
            input_wrapper_order,
            key,
            label_props,
            label_separator,
            left_section,
            left_section_pointer_events,
            left_section_props,
            left_section_width,
            level,
            locale,
            max_date,
            max_level,
            min_date,
            modal_props,
            month_label_format,
            months_list_format,
            next_icon,
            next_label,
            number_of_columns,
            on_change,
            placeholder,
            pointer,
            popover_props,
            presets,
            previous_icon,
            previous_label,
            radius,
            read_only,
            required,
            right_section,
            right_section_pointer_events,
            right_section_props,
            right_section_width,
            size,
            sort_dates,
            kind,
            value_format,
            weekday_format,
            weekend_days,
            with_asterisk,
            with_cell_spacing,
            with_error_styles,
            with_week_numbers,
            wrapper_props,
            year_label_format,
            years_list_format,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("datepickerinput", &label, key);
        let mut p = props! {
            "allowDeselect" => allow_deselect,
            "allowSingleDateInRange" => allow_single_date_in_range,
            "ariaLabels" => aria_labels,
            "clearButtonProps" => clear_button_props,
            "clearable" => clearable,
            "closeOnChange" => close_on_change,
            "columnsToScroll" => columns_to_scroll,
            "decadeLabelFormat" => decade_label_format,
            "defaultLevel" => default_level,
            "description" => description,
            "descriptionProps" => description_props,
            "disabled" => disabled,
            "dropdownType" => dropdown_type,
            "enableKeyboardNavigation" => enable_keyboard_navigation,
            "error" => error,
            "errorProps" => error_props,
            "firstDayOfWeek" => first_day_of_week,
            "headerControlsOrder" => header_controls_order,
            "hideOutsideDates" => hide_outside_dates,
            "hideWeekdays" => hide_weekdays,
            "highlightToday" => highlight_today,
            "inputSize" => input_size,
            "inputWrapperOrder" => input_wrapper_order,
            "labelProps" => label_props,
            "labelSeparator" => label_separator,
            "leftSection" => left_section,
            "leftSectionPointerEvents" => left_section_pointer_events,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "level" => level,
            "locale" => locale,
            "maxDate" => max_date.as_ref().map(DateInput::to_value),
            "maxLevel" => max_level,
            "minDate" => min_date.as_ref().map(DateInput::to_value),
            "modalProps" => modal_props,
            "monthLabelFormat" => month_label_format,
            "monthsListFormat" => months_list_format,
            "nextIcon" => next_icon,
            "nextLabel" => next_label,
            "numberOfColumns" => number_of_columns,
            "placeholder" => placeholder,
            "pointer" => pointer,
            "popoverProps" => popover_props,
            "presets" => presets,
            "previousIcon" => previous_icon,
            "previousLabel" => previous_label,
            "radius" => radius,
            "readOnly" => read_only,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionPointerEvents" => right_section_pointer_events,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "size" => size,
            "sortDates" => sort_dates,
            "type" => kind,
            "valueFormat" => value_format,
            "weekdayFormat" => weekday_format,
            "weekendDays" => weekend_days,
            "withAsterisk" => with_asterisk,
            "withCellSpacing" => with_cell_spacing,
            "withErrorStyles" => with_error_styles,
            "withWeekNumbers" => with_week_numbers,
            "wrapperProps" => wrapper_props,
            "yearLabelFormat" => year_label_format,
            "yearsListFormat" => years_list_format,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(|v| v.to_value()).unwrap_or(Value::Null);
        let current = self.controlled_input("datepickerinput", key, p, fallback, on_change);
        parse_date_value(&current)
    }

    /// Free-typing time input.
    pub fn time_input(
        &mut self,
        label: impl Into<String>,
        props: TimeInputProps,
    ) -> Option<NaiveTime> {
        let TimeInputProps {
            value,
            description,
            description_props,
            disabled,
            error,
            error_props,
            input_size,
            input_wrapper_order,
            key,
            label_props,
            left_section,
            left_section_pointer_events,
            left_section_props,
            left_section_width,
            max_time,
            min_time,
            on_change,
            pointer,
            radius,
            required,
            right_section,
            right_section_pointer_events,
            right_section_props,
            right_section_width,
            size,
            with_asterisk,
            with_error_styles,
            with_seconds,
            wrapper_props,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("timeinput", &label, key);
        let mut p = props! {
            "description" => description,
            "descriptionProps" => description_props,
            "disabled" => disabled,
            "error" => error,
            "errorProps" => error_props,
            "inputSize" => input_size,
            "inputWrapperOrder" => input_wrapper_order,
            "labelProps" => label_props,
            "leftSection" => left_section,
            "leftSectionPointerEvents" => left_section_pointer_events,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "maxTime" => max_time,
            "minTime" => min_time,
            "pointer" => pointer,
            "radius" => radius,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionPointerEvents" => right_section_pointer_events,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "size" => size,
            "withAsterisk" => with_asterisk,
            "withErrorStyles" => with_error_styles,
            "withSeconds" => with_seconds,
            "wrapperProps" => wrapper_props,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(|v| v.to_value()).unwrap_or(Value::Null);
        let current = self.controlled_input("timeinput", key, p, fallback, on_change);
        parse_time_value(&current)
    }

    /// Time picker with spinner dropdowns.
    pub fn time_picker(
        &mut self,
        label: impl Into<String>,
        props: TimePickerProps,
    ) -> Option<NaiveTime> {
        let TimePickerProps {
            value,
            am_pm_input_label,
            am_pm_labels,
            am_pm_select_props,
            clear_button_props,
            clearable,
            description,
            description_props,
            disabled,
            error,
            error_props,
            form,
            format,
            hidden_input_props,
            hours_input_label,
            hours_input_props,
            hours_step,
            input_size,
            input_wrapper_order,
            key,
            label_props,
            left_section,
            left_section_pointer_events,
            left_section_props,
            left_section_width,
            max,
            max_dropdown_content_height,
            min,
            minutes_input_label,
            minutes_input_props,
            minutes_step,
            name,
            on_change,
            pointer,
            popover_props,
            presets,
            radius,
            read_only,
            required,
            right_section,
            right_section_pointer_events,
            right_section_props,
            right_section_width,
            scroll_area_props,
            seconds_input_label,
            seconds_input_props,
            seconds_step,
            size,
            with_asterisk,
            with_dropdown,
            with_error_styles,
            with_seconds,
            wrapper_props,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("timepicker", &label, key);
        let mut p = props! {
            "amPmInputLabel" => am_pm_input_label,
            "amPmLabels" => am_pm_labels,
            "amPmSelectProps" => am_pm_select_props,
            "clearButtonProps" => clear_button_props,
            "clearable" => clearable,
            "description" => description,
            "descriptionProps" => description_props,
            "disabled" => disabled,
            "error" => error,
            "errorProps" => error_props,
            "form" => form,
            "format" => format,
            "hiddenInputProps" => hidden_input_props,
            "hoursInputLabel" => hours_input_label,
            "hoursInputProps" => hours_input_props,
            "hoursStep" => hours_step,
            "inputSize" => input_size,
            "inputWrapperOrder" => input_wrapper_order,
            "labelProps" => label_props,
            "leftSection" => left_section,
            "leftSectionPointerEvents" => left_section_pointer_events,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "max" => max,
            "maxDropdownContentHeight" => max_dropdown_content_height,
            "min" => min,
            "minutesInputLabel" => minutes_input_label,
            "minutesInputProps" => minutes_input_props,
            "minutesStep" => minutes_step,
            "name" => name,
            "pointer" => pointer,
            "popoverProps" => popover_props,
            "presets" => presets,
            "radius" => radius,
            "readOnly" => read_only,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionPointerEvents" => right_section_pointer_events,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "scrollAreaProps" => scroll_area_props,
            "secondsInputLabel" => seconds_input_label,
            "secondsInputProps" => seconds_input_props,
            "secondsStep" => seconds_step,
            "size" => size,
            "withAsterisk" => with_asterisk,
            "withDropdown" => with_dropdown,
            "withErrorStyles" => with_error_styles,
            "withSeconds" => with_seconds,
            "wrapperProps" => wrapper_props,
        };
        p.set("label", label);
        p.merge(extra);
        let fallback = value.map(|v| v.to_value()).unwrap_or(Value::Null);
        let current = self.controlled_input("timepicker", key, p, fallback, on_change);
        parse_time_value(&current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn first_widget(wire: &Value) -> &Value {
        &wire["children"][0]["children"][1]["children"][0]
    }

    #[test]
    fn test_date_picker_native_value_round_trips() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let value = ui.date_picker(
            "Start",
            DatePickerProps {
                value: Some(date(2024, 3, 1).into()),
                ..Default::default()
            },
        );
        assert_eq!(value, Some(DateSelection::Single(date(2024, 3, 1))));
        let wire = ui.finish().to_value();
        assert_eq!(first_widget(&wire)["props"]["value"], "2024-03-01");
    }

    #[test]
    fn test_date_picker_iso_string_parses() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let value = ui.date_picker(
            "Start",
            DatePickerProps {
                value: Some("2024-03-01".into()),
                ..Default::default()
            },
        );
        assert_eq!(value, Some(DateSelection::Single(date(2024, 3, 1))));
    }

    #[test]
    fn test_date_picker_range_from_session() {
        let mut session = Session::new();
        session.set("datepicker-period", json!(["2024-01-01", "2024-01-31"]));
        let mut ui = Ui::new(&mut session);
        let value = ui.date_picker("Period", DatePickerProps::default());
        let selection = value.unwrap();
        assert_eq!(selection.range(), Some((date(2024, 1, 1), date(2024, 1, 31))));
        assert_eq!(selection.single(), None);
    }

    #[test]
    fn test_time_input_none_stays_none() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        assert_eq!(ui.time_input("Alarm", TimeInputProps::default()), None);
    }

    #[test]
    fn test_time_picker_parses_iso() {
        let mut session = Session::new();
        session.set("timepicker-alarm", "07:30:00");
        let mut ui = Ui::new(&mut session);
        let value = ui.time_picker("Alarm", TimePickerProps::default());
        assert_eq!(value, NaiveTime::from_hms_opt(7, 30, 0));
    }

    #[test]
    fn test_date_time_picker_parse_paths() {
        assert_eq!(
            parse_datetime_value(&json!("2024-03-01T10:30:00")),
            Some(date(2024, 3, 1).and_hms_opt(10, 30, 0).unwrap())
        );
        assert_eq!(parse_datetime_value(&json!(42)), None);
        assert_eq!(parse_datetime_value(&Value::Null), None);
    }

    #[test]
    fn test_date_picker_min_max_serialize_iso() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.date_picker(
            "Start",
            DatePickerProps {
                min_date: Some(date(2024, 1, 1).into()),
                max_date: Some("2024-12-31".into()),
                kind: Some("range".into()),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(props["minDate"], "2024-01-01");
        assert_eq!(props["maxDate"], "2024-12-31");
        assert_eq!(props["type"], "range");
    }
}
