//! Selection inputs: radios, selects, multiselect, autocomplete, tags, and
//! the segmented control.
//!
//! All of these take an options list (`&str`, [`SelectOption`], or
//! [`OptionGroup`] entries) and return the current selection from session
//! state. The segmented control is the one selector that never reports an
//! empty selection: with options present and no value it falls back to the
//! first option. That behavior is specific to this widget, not a general
//! policy.

use pergola_core::{
    collect_options, props, ChangeHandler, Element, LabelFormat, OptionItem, Props, Value,
};

use crate::Ui;

/// Options for [`Ui::radio_group`].
#[derive(Default)]
pub struct RadioGroupProps {
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub format_label: Option<Box<LabelFormat>>,
    pub group_props: Option<Props>,
    pub input_size: Option<String>,
    pub key: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub read_only: Option<bool>,
    pub required: Option<bool>,
    pub size: Option<String>,
    pub value: Option<String>,
    pub with_asterisk: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::native_select`].
#[derive(Default)]
pub struct NativeSelectProps {
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub error: Option<String>,
    pub format_label: Option<Box<LabelFormat>>,
    pub key: Option<String>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<String>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub size: Option<String>,
    pub value: Option<String>,
    pub with_asterisk: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::select`].
#[derive(Default)]
pub struct SelectProps {
    pub allow_deselect: Option<bool>,
    pub auto_select_on_blur: Option<bool>,
    pub check_icon_position: Option<String>,
    pub chevron_color: Option<String>,
    pub clearable: Option<bool>,
    pub combobox_props: Option<Props>,
    pub default_dropdown_opened: Option<bool>,
    pub default_search_value: Option<String>,
    pub description: Option<String>,
    pub error: Option<String>,
    pub format_label: Option<Box<LabelFormat>>,
    pub hidden_input_props: Option<Props>,
    pub input_size: Option<String>,
    pub input_wrapper_order: Option<Vec<String>>,
    pub key: Option<String>,
    pub label_props: Option<Props>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub limit: Option<u32>,
    pub max_dropdown_height: Option<Value>,
    pub nothing_found_message: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub pointer: Option<bool>,
    pub radius: Option<Value>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub scroll_area_props: Option<Props>,
    pub size: Option<String>,
    pub value: Option<String>,
    pub with_asterisk: Option<bool>,
    pub with_error_styles: Option<bool>,
    pub with_scroll_area: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::multiselect`].
#[derive(Default)]
pub struct MultiSelectProps {
    pub check_icon_position: Option<String>,
    pub chevron_color: Option<String>,
    pub clear_button_props: Option<Props>,
    pub clearable: Option<bool>,
    pub combobox_props: Option<Props>,
    pub default_dropdown_opened: Option<bool>,
    pub default_search_value: Option<String>,
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub dropdown_opened: Option<bool>,
    pub error: Option<String>,
    pub error_props: Option<Props>,
    pub format_label: Option<Box<LabelFormat>>,
    pub hidden_input_props: Option<Props>,
    pub hidden_input_values_divider: Option<String>,
    pub hide_picked_options: Option<bool>,
    pub input_size: Option<String>,
    pub input_wrapper_order: Option<Vec<String>>,
    pub key: Option<String>,
    pub label_props: Option<Props>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub limit: Option<u32>,
    pub max_dropdown_height: Option<Value>,
    pub max_values: Option<u32>,
    pub nothing_found_message: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<Value>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub scroll_area_props: Option<Props>,
    pub search_value: Option<String>,
    pub searchable: Option<bool>,
    pub select_first_option_on_change: Option<bool>,
    pub size: Option<String>,
    pub value: Option<Vec<String>>,
    pub with_asterisk: Option<bool>,
    pub with_check_icon: Option<bool>,
    pub with_error_styles: Option<bool>,
    pub with_scroll_area: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::autocomplete`].
#[derive(Default)]
pub struct AutocompleteProps {
    pub auto_select_on_blur: Option<bool>,
    pub clear_button_props: Option<Props>,
    pub clearable: Option<bool>,
    pub combobox_props: Option<Props>,
    pub default_dropdown_open: Option<bool>,
    pub description: Option<String>,
    pub disabled: Option<bool>,
    pub dropdown_opened: Option<bool>,
    pub error: Option<String>,
    pub key: Option<String>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub limit: Option<u32>,
    pub on_change: Option<ChangeHandler>,
    pub radius: Option<Value>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub size: Option<String>,
    pub value: Option<String>,
    pub with_asterisk: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::tags_input`].
#[derive(Default)]
pub struct TagsInputProps {
    pub accept_value_on_blur: Option<bool>,
    pub allow_duplicates: Option<bool>,
    pub clear_button_props: Option<Props>,
    pub clearable: Option<bool>,
    pub combobox_props: Option<Props>,
    pub default_dropdown_opened: Option<bool>,
    pub default_search_value: Option<String>,
    pub description: Option<String>,
    pub description_props: Option<Props>,
    pub disabled: Option<bool>,
    pub dropdown_opened: Option<bool>,
    pub error: Option<String>,
    pub error_props: Option<Props>,
    pub hidden_input_props: Option<Props>,
    pub hidden_input_values_divider: Option<String>,
    pub input_size: Option<String>,
    pub input_wrapper_order: Option<Vec<String>>,
    pub key: Option<String>,
    pub label_props: Option<Props>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub limit: Option<u32>,
    pub max_dropdown_height: Option<Value>,
    pub max_tags: Option<u32>,
    pub on_change: Option<ChangeHandler>,
    pub pointer: Option<bool>,
    pub radius: Option<Value>,
    pub required: Option<bool>,
    pub right_section: Option<Element>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub scroll_area_props: Option<Props>,
    pub search_value: Option<String>,
    pub select_first_option_on_change: Option<bool>,
    pub size: Option<String>,
    /// Characters that split typed input into tags.
    pub split_chars: Option<Vec<String>>,
    pub value: Option<Vec<String>>,
    pub with_asterisk: Option<bool>,
    pub with_error_styles: Option<bool>,
    pub with_scroll_area: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::segmented_control`].
#[derive(Default)]
pub struct SegmentedControlProps {
    pub auto_contrast: Option<bool>,
    pub color: Option<String>,
    pub disabled: Option<bool>,
    pub format_label: Option<Box<LabelFormat>>,
    pub full_width: Option<bool>,
    pub on_change: Option<ChangeHandler>,
    /// `"horizontal"` or `"vertical"`.
    pub orientation: Option<String>,
    pub radius: Option<String>,
    pub read_only: Option<bool>,
    pub size: Option<String>,
    pub transition_duration: Option<u32>,
    pub value: Option<String>,
    pub with_items_borders: Option<bool>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Single selection using radio inputs.
    pub fn radio_group<I>(
        &mut self,
        label: impl Into<String>,
        options: I,
        props: RadioGroupProps,
    ) -> Option<String>
    where
        I: IntoIterator,
        I::Item: Into<OptionItem>,
    {
        let RadioGroupProps {
            description,
            disabled,
            error,
            format_label,
            group_props,
            input_size,
            key,
            on_change,
            read_only,
            required,
            size,
            value,
            with_asterisk,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("radio-group", &label, key);
        let options = collect_options(options);
        let mut p = props! {
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "groupProps" => group_props,
            "inputSize" => input_size,
            "readOnly" => read_only,
            "required" => required,
            "size" => size,
            "withAsterisk" => with_asterisk,
        };
        p.set("label", label);
        p.merge(extra);
        self.controlled_select(
            "radiogroup", key, p, &options, "options", value, format_label, on_change,
        )
    }

    /// Native HTML select.
    pub fn native_select<I>(
        &mut self,
        label: impl Into<String>,
        options: I,
        props: NativeSelectProps,
    ) -> Option<String>
    where
        I: IntoIterator,
        I::Item: Into<OptionItem>,
    {
        let NativeSelectProps {
            description,
            disabled,
            error,
            format_label,
            key,
            left_section,
            left_section_props,
            left_section_width,
            on_change,
            radius,
            required,
            right_section,
            right_section_props,
            right_section_width,
            size,
            value,
            with_asterisk,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("native-select", &label, key);
        let options = collect_options(options);
        let mut p = props! {
            "description" => description,
            "disabled" => disabled,
            "error" => error,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "radius" => radius,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "size" => size,
            "withAsterisk" => with_asterisk,
        };
        p.set("label", label);
        p.merge(extra);
        self.controlled_select(
            "nativeselect", key, p, &options, "data", value, format_label, on_change,
        )
    }

    /// Searchable single-select input.
    pub fn select<I>(
        &mut self,
        label: impl Into<String>,
        options: I,
        props: SelectProps,
    ) -> Option<String>
    where
        I: IntoIterator,
        I::Item: Into<OptionItem>,
    {
        let SelectProps {
            allow_deselect,
            auto_select_on_blur,
            check_icon_position,
            chevron_color,
            clearable,
            combobox_props,
            default_dropdown_opened,
            default_search_value,
            description,
            error,
            format_label,
            hidden_input_props,
            input_size,
            input_wrapper_order,
            key,
            label_props,
            left_section,
            left_section_props,
            left_section_width,
            limit,
            max_dropdown_height,
            nothing_found_message,
            on_change,
            pointer,
            radius,
            required,
            right_section,
            right_section_props,
            right_section_width,
            scroll_area_props,
            size,
            value,
            with_asterisk,
            with_error_styles,
            with_scroll_area,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("select", &label, key);
        let options = collect_options(options);
        let mut p = props! {
            "allowDeselect" => allow_deselect,
            "autoSelectOnBlur" => auto_select_on_blur,
            "checkIconPosition" => check_icon_position,
            "chevronColor" => chevron_color,
            "clearable" => clearable,
            "comboboxProps" => combobox_props,
            "defaultDropdownOpened" => default_dropdown_opened,
            "defaultSearchValue" => default_search_value,
            "description" => description,
            "error" => error,
            "hiddenInputProps" => hidden_input_props,
            "inputSize" => input_size,
            "inputWrapperOrder" => input_wrapper_order,
            "labelProps" => label_props,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "limit" => limit,
            "maxDropdownHeight" => max_dropdown_height,
            "nothingFoundMessage" => nothing_found_message,
            "pointer" => pointer,
            "radius" => radius,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "scrollAreaProps" => scroll_area_props,
            "size" => size,
            "withAsterisk" => with_asterisk,
            "withErrorStyles" => with_error_styles,
            "withScrollArea" => with_scroll_area,
        };
        p.set("label", label);
        p.merge(extra);
        self.controlled_select(
            "select", key, p, &options, "data", value, format_label, on_change,
        )
    }

    /// Multi-select input with search and tags. Returns the selected values.
    pub fn multiselect<I>(
        &mut self,
        label: impl Into<String>,
        data: I,
        props: MultiSelectProps,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Into<OptionItem>,
    {
        let MultiSelectProps {
            check_icon_position,
            chevron_color,
            clear_button_props,
            clearable,
            combobox_props,
            default_dropdown_opened,
            default_search_value,
            description,
            disabled,
            dropdown_opened,
            error,
            error_props,
            format_label,
            hidden_input_props,
            hidden_input_values_divider,
            hide_picked_options,
            input_size,
            input_wrapper_order,
            key,
            label_props,
            left_section,
            left_section_props,
            left_section_width,
            limit,
            max_dropdown_height,
            max_values,
            nothing_found_message,
            on_change,
            radius,
            required,
            right_section,
            right_section_props,
            right_section_width,
            scroll_area_props,
            search_value,
            searchable,
            select_first_option_on_change,
            size,
            value,
            with_asterisk,
            with_check_icon,
            with_error_styles,
            with_scroll_area,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("multiselect", &label, key);
        let data = collect_options(data);
        let mut p = props! {
            "checkIconPosition" => check_icon_position,
            "chevronColor" => chevron_color,
            "clearButtonProps" => clear_button_props,
            "clearable" => clearable,
            "comboboxProps" => combobox_props,
            "defaultDropdownOpened" => default_dropdown_opened,
            "defaultSearchValue" => default_search_value,
            "description" => description,
            "disabled" => disabled,
            "dropdownOpened" => dropdown_opened,
            "error" => error,
            "errorProps" => error_props,
            "hiddenInputProps" => hidden_input_props,
            "hiddenInputValuesDivider" => hidden_input_values_divider,
            "hidePickedOptions" => hide_picked_options,
            "inputSize" => input_size,
            "inputWrapperOrder" => input_wrapper_order,
            "labelProps" => label_props,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "limit" => limit,
            "maxDropdownHeight" => max_dropdown_height,
            "maxValues" => max_values,
            "nothingFoundMessage" => nothing_found_message,
            "radius" => radius,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "scrollAreaProps" => scroll_area_props,
            "searchValue" => search_value,
            "searchable" => searchable,
            "selectFirstOptionOnChange" => select_first_option_on_change,
            "size" => size,
            "withAsterisk" => with_asterisk,
            "withCheckIcon" => with_check_icon,
            "withErrorStyles" => with_error_styles,
            "withScrollArea" => with_scroll_area,
        };
        p.set("label", label);
        p.merge(extra);
        self.controlled_multi(
            "multiselect",
            key,
            p,
            &data,
            "data",
            value.unwrap_or_default(),
            format_label,
            on_change,
        )
    }

    /// Autocomplete text input with a suggestions dropdown. The value is
    /// free text, not restricted to the suggestions.
    pub fn autocomplete<I>(
        &mut self,
        label: impl Into<String>,
        data: I,
        props: AutocompleteProps,
    ) -> Option<String>
    where
        I: IntoIterator,
        I::Item: Into<OptionItem>,
    {
        let AutocompleteProps {
            auto_select_on_blur,
            clear_button_props,
            clearable,
            combobox_props,
            default_dropdown_open,
            description,
            disabled,
            dropdown_opened,
            error,
            key,
            left_section,
            left_section_props,
            left_section_width,
            limit,
            on_change,
            radius,
            required,
            right_section,
            right_section_props,
            right_section_width,
            size,
            value,
            with_asterisk,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("autocomplete", &label, key);
        let data = collect_options(data);
        let mut p = props! {
            "autoSelectOnBlur" => auto_select_on_blur,
            "clearButtonProps" => clear_button_props,
            "clearable" => clearable,
            "comboboxProps" => combobox_props,
            "defaultDropdownOpen" => default_dropdown_open,
            "description" => description,
            "disabled" => disabled,
            "dropdownOpened" => dropdown_opened,
            "error" => error,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "limit" => limit,
            "radius" => radius,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "size" => size,
            "withAsterisk" => with_asterisk,
        };
        p.set("label", label);
        p.set("data", pergola_core::wire_options(&data, None));
        p.merge(extra);
        let fallback = value.map(Value::from).unwrap_or(Value::Null);
        let current = self.controlled_input("autocomplete", key, p, fallback, on_change);
        current.as_str().map(str::to_string)
    }

    /// Free-form tags input with suggestions. Returns the current tags.
    pub fn tags_input<I>(
        &mut self,
        label: impl Into<String>,
        data: I,
        props: TagsInputProps,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Into<OptionItem>,
    {
        let TagsInputProps {
            accept_value_on_blur,
            allow_duplicates,
            clear_button_props,
            clearable,
            combobox_props,
            default_dropdown_opened,
            default_search_value,
            description,
            description_props,
            disabled,
            dropdown_opened,
            error,
            error_props,
            hidden_input_props,
            hidden_input_values_divider,
            input_size,
            input_wrapper_order,
            key,
            label_props,
            left_section,
            left_section_props,
            left_section_width,
            limit,
            max_dropdown_height,
            max_tags,
            on_change,
            pointer,
            radius,
            required,
            right_section,
            right_section_props,
            right_section_width,
            scroll_area_props,
            search_value,
            select_first_option_on_change,
            size,
            split_chars,
            value,
            with_asterisk,
            with_error_styles,
            with_scroll_area,
            extra,
        } = props;
        let label = label.into();
        let key = self.widget_key("tagsinput", &label, key);
        let data = collect_options(data);
        let mut p = props! {
            "acceptValueOnBlur" => accept_value_on_blur,
            "allowDuplicates" => allow_duplicates,
            "clearButtonProps" => clear_button_props,
            "clearable" => clearable,
            "comboboxProps" => combobox_props,
            "defaultDropdownOpened" => default_dropdown_opened,
            "defaultSearchValue" => default_search_value,
            "description" => description,
            "descriptionProps" => description_props,
            "disabled" => disabled,
            "dropdownOpened" => dropdown_opened,
            "error" => error,
            "errorProps" => error_props,
            "hiddenInputProps" => hidden_input_props,
            "hiddenInputValuesDivider" => hidden_input_values_divider,
            "inputSize" => input_size,
            "inputWrapperOrder" => input_wrapper_order,
            "labelProps" => label_props,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "limit" => limit,
            "maxDropdownHeight" => max_dropdown_height,
            "maxTags" => max_tags,
            "pointer" => pointer,
            "radius" => radius,
            "required" => required,
            "rightSection" => right_section,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "scrollAreaProps" => scroll_area_props,
            "searchValue" => search_value,
            "selectFirstOptionOnChange" => select_first_option_on_change,
            "size" => size,
            "splitChars" => split_chars,
            "withAsterisk" => with_asterisk,
            "withErrorStyles" => with_error_styles,
            "withScrollArea" => with_scroll_area,
        };
        p.set("label", label);
        p.merge(extra);
        self.controlled_multi(
            "tagsinput",
            key,
            p,
            &data,
            "data",
            value.unwrap_or_default(),
            None,
            on_change,
        )
    }

    /// Segmented control for single selection. With options present this
    /// never reports an empty selection: no stored value falls back to the
    /// first option.
    pub fn segmented_control<I>(
        &mut self,
        key: impl Into<String>,
        options: I,
        props: SegmentedControlProps,
    ) -> Option<String>
    where
        I: IntoIterator,
        I::Item: Into<OptionItem>,
    {
        let SegmentedControlProps {
            auto_contrast,
            color,
            disabled,
            format_label,
            full_width,
            on_change,
            orientation,
            radius,
            read_only,
            size,
            transition_duration,
            value,
            with_items_borders,
            extra,
        } = props;
        let options = collect_options(options);
        let mut p = props! {
            "autoContrast" => auto_contrast,
            "color" => color,
            "disabled" => disabled,
            "fullWidth" => full_width,
            "orientation" => orientation,
            "radius" => radius,
            "readOnly" => read_only,
            "size" => size,
            "transitionDuration" => transition_duration,
            "withItemsBorders" => with_items_borders,
        };
        p.merge(extra);
        let current = self.controlled_select(
            "segmentedcontrol",
            key.into(),
            p,
            &options,
            "data",
            value,
            format_label,
            on_change,
        );
        current.or_else(|| pergola_core::first_option_value(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::{OptionGroup, Session};
    use serde_json::json;

    fn first_widget(wire: &Value) -> &Value {
        &wire["children"][0]["children"][1]["children"][0]
    }

    #[test]
    fn test_segmented_control_falls_back_to_first_option() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let value = ui.segmented_control(
            "fruit",
            ["apple", "banana"],
            SegmentedControlProps::default(),
        );
        assert_eq!(value.as_deref(), Some("apple"));
    }

    #[test]
    fn test_segmented_control_empty_options_has_no_value() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let value = ui.segmented_control(
            "fruit",
            Vec::<&str>::new(),
            SegmentedControlProps::default(),
        );
        assert_eq!(value, None);
    }

    #[test]
    fn test_segmented_control_session_value_wins() {
        let mut session = Session::new();
        session.set("fruit", "banana");
        let mut ui = Ui::new(&mut session);
        let value = ui.segmented_control(
            "fruit",
            ["apple", "banana"],
            SegmentedControlProps::default(),
        );
        assert_eq!(value.as_deref(), Some("banana"));
    }

    #[test]
    fn test_radio_group_returns_none_without_value() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let value = ui.radio_group("Pick one", ["a", "b"], RadioGroupProps::default());
        assert_eq!(value, None);
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(props["options"], json!(["a", "b"]));
        assert!(props.get("value").is_none());
    }

    #[test]
    fn test_select_uses_data_attr_and_format() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.select(
            "Country",
            ["mx", "us"],
            SelectProps {
                format_label: Some(Box::new(|v| v.to_uppercase())),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(
            props["data"],
            json!([{"value": "mx", "label": "MX"}, {"value": "us", "label": "US"}])
        );
        assert!(props.get("options").is_none());
    }

    #[test]
    fn test_multiselect_round_trip() {
        let mut session = Session::new();
        session.set("multiselect-tags", json!(["rust", "ui"]));
        let mut ui = Ui::new(&mut session);
        let value = ui.multiselect("Tags", ["rust", "ui", "web"], MultiSelectProps::default());
        assert_eq!(value, vec!["rust".to_string(), "ui".to_string()]);
    }

    #[test]
    fn test_autocomplete_accepts_groups() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.autocomplete(
            "City",
            [OptionGroup::new("Europe", ["Paris", "Rome"])],
            AutocompleteProps::default(),
        );
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(
            props["data"],
            json!([{"group": "Europe", "items": ["Paris", "Rome"]}])
        );
    }
}
