//! Catalogue-wide conventions: root scaffolding, prop-map discipline, key
//! derivation, and the controlled-value round trip through event dispatch.

use chrono::NaiveDate;
use pergola_core::{props, Event, Session, Value};
use pergola_ui::prelude::*;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn main_children(wire: &Value) -> &Value {
    &wire["children"][0]["children"][1]["children"]
}

#[test]
fn test_root_provider_defaults() {
    let mut session = Session::new();
    let ui = Ui::new(&mut session);
    let wire = ui.finish().to_value();
    assert_eq!(wire["name"], "provider");
    assert_eq!(wire["key"], "provider");
    assert_eq!(wire["props"]["theme"]["primaryColor"], "orange");
}

#[test]
fn test_appshell_and_navbar_initialized() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    let sidebar = ui.sidebar();
    ui.scope(&sidebar, |ui| {
        ui.title("Menu", TitleProps::default());
    });
    let wire = ui.finish().to_value();
    let shell = &wire["children"][0];
    assert_eq!(shell["name"], "appshell");
    assert_eq!(shell["children"][0]["name"], "navbar");
    assert_eq!(
        shell["children"][0]["children"][0]["props"]["children"],
        "Menu"
    );
}

#[test]
fn test_set_provider_props_updates_root() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    ui.set_provider_props(
        &Theme::new("green"),
        props! { "defaultColorScheme" => Some("dark") },
    );
    let wire = ui.finish().to_value();
    assert_eq!(wire["props"]["theme"]["primaryColor"], "green");
    assert_eq!(wire["props"]["defaultColorScheme"], "dark");
}

#[test]
fn test_container_accepts_free_form_extra_props() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    ui.container(ContainerProps {
        fluid: true,
        size: Some("xl".into()),
        extra: props! { "bg" => Some("var(--app-color-blue-light)") },
        ..Default::default()
    });
    let wire = ui.finish().to_value();
    let container = &main_children(&wire)[0];
    assert_eq!(container["name"], "container");
    assert_eq!(container["props"]["fluid"], json!(true));
    assert_eq!(container["props"]["size"], "xl");
    assert_eq!(container["props"]["bg"], "var(--app-color-blue-light)");
}

#[test]
fn test_unset_options_never_reach_the_prop_map() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    ui.checkbox("Remember me", CheckboxProps::default());
    let wire = ui.finish().to_value();
    let props = main_children(&wire)[0]["props"].as_object().unwrap();
    // Only the mandatory label and the always-written checked flag remain.
    let mut keys: Vec<&str> = props.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["checked", "label"]);
    assert!(!props.values().any(Value::is_null));
}

#[test]
fn test_rename_fidelity_across_widgets() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    ui.checkbox(
        "A",
        CheckboxProps {
            label_position: Some("left".into()),
            ..Default::default()
        },
    );
    ui.button(
        "B",
        ButtonProps {
            left_section: Some(icon("IconStar")),
            full_width: Some(true),
            ..Default::default()
        },
    );
    ui.textarea(
        "C",
        TextareaProps {
            max_rows: Some(8),
            ..Default::default()
        },
    );
    let wire = ui.finish().to_value();
    let widgets = main_children(&wire);
    for (index, renamed, original) in [
        (0, "labelPosition", "label_position"),
        (1, "leftSection", "left_section"),
        (1, "fullWidth", "full_width"),
        (2, "maxRows", "max_rows"),
    ] {
        assert!(widgets[index]["props"].get(renamed).is_some(), "{renamed}");
        assert!(widgets[index]["props"].get(original).is_none(), "{original}");
    }
}

#[test]
fn test_key_derivation_is_deterministic_and_collision_safe() {
    let build = |session: &mut Session| {
        let mut ui = Ui::new(session);
        ui.button("Save", ButtonProps::default());
        ui.button("Cancel", ButtonProps::default());
        ui.button("Save", ButtonProps::default());
        let wire = ui.finish().to_value();
        main_children(&wire)
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["key"].as_str().unwrap().to_string())
            .collect::<Vec<_>>()
    };
    let mut session = Session::new();
    let first = build(&mut session);
    let second = build(&mut session);
    assert_eq!(first, second);
    assert_eq!(first, vec!["button-save", "button-cancel", "button-save-2"]);
}

#[test]
fn test_controlled_round_trip_with_dispatch() {
    let mut session = Session::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let build = |session: &mut Session, seen: Rc<RefCell<Vec<String>>>| {
        let mut ui = Ui::new(session);
        let name = ui.text_input(
            "Name",
            TextInputProps {
                on_change: Some(Box::new(move |value| {
                    seen.borrow_mut()
                        .push(value.as_str().unwrap_or_default().to_string());
                })),
                ..Default::default()
            },
        );
        (ui.finish(), name)
    };

    let (mut page, name) = build(&mut session, seen.clone());
    assert_eq!(name, "");

    page.dispatch("textinput-name", Event::Change(json!("Ada")), &mut session)
        .unwrap();
    assert_eq!(seen.borrow().as_slice(), ["Ada".to_string()]);

    let (_, name) = build(&mut session, seen.clone());
    assert_eq!(name, "Ada");
}

#[test]
fn test_dispatch_unknown_key_is_an_error() {
    let mut session = Session::new();
    let ui = Ui::new(&mut session);
    let mut page = ui.finish();
    assert!(page
        .dispatch("nope", Event::Click, &mut session)
        .is_err());
}

#[test]
fn test_tabs_panels_in_input_order() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    let panels = ui.tabs(["a", "b", "c"], TabsProps::default());
    for (index, panel) in panels.iter().enumerate() {
        ui.scope(panel, |ui| {
            ui.text(format!("panel {index}"), TextProps::default());
        });
    }
    let wire = ui.finish().to_value();
    let root = &main_children(&wire)[0];
    assert_eq!(root["props"]["defaultValue"], "a");
    let children = root["children"].as_array().unwrap();
    assert_eq!(children[0]["children"].as_array().map(Vec::len), Some(3));
    for (offset, value) in ["a", "b", "c"].iter().enumerate() {
        let panel = &children[offset + 1];
        assert_eq!(panel["props"]["value"], *value);
        assert_eq!(
            panel["children"][0]["props"]["children"],
            format!("panel {offset}")
        );
    }
}

#[test]
fn test_expander_open_and_closed() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    ui.expander("Closed", ExpanderProps::default());
    ui.expander(
        "Open",
        ExpanderProps {
            is_open: true,
            ..Default::default()
        },
    );
    let wire = ui.finish().to_value();
    let widgets = main_children(&wire);
    assert!(widgets[0]["props"].get("defaultValue").is_none());
    let open_item_key = widgets[1]["children"][0]["key"].as_str().unwrap();
    assert_eq!(widgets[1]["props"]["defaultValue"], json!(open_item_key));
    assert_eq!(
        widgets[1]["children"][0]["children"][0]["props"]["children"],
        "Open"
    );
}

#[test]
fn test_date_widgets_parse_all_paths() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    let native = ui.date_picker(
        "Native",
        DatePickerProps {
            value: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().into()),
            ..Default::default()
        },
    );
    let parsed = ui.date_picker(
        "Parsed",
        DatePickerProps {
            value: Some("2024-03-01".into()),
            ..Default::default()
        },
    );
    let missing_time = ui.time_input("Alarm", TimeInputProps::default());

    let expected = DateSelection::Single(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(native, Some(expected.clone()));
    assert_eq!(parsed, Some(expected));
    assert_eq!(missing_time, None);
}

#[test]
fn test_segmented_control_fallback() {
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
fn test_theme_toml_reaches_provider() {
    let mut session = Session::new();
    let mut ui = Ui::new(&mut session);
    let theme = Theme::from_toml_str(
        r#"
        primaryColor = "grape"
        defaultRadius = "md"
        "#,
    )
    .unwrap();
    ui.set_provider_props(&theme, Default::default());
    let wire = ui.finish().to_value();
    assert_eq!(wire["props"]["theme"]["primaryColor"], "grape");
    assert_eq!(wire["props"]["theme"]["defaultRadius"], "md");
}
