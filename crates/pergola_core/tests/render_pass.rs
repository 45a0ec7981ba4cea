//! End-to-end render-pass flow: build, serialize, dispatch, rebuild.

use pergola_core::{Builder, Element, Event, Props, Session, Value};
use serde_json::json;

fn build_form(session: &mut Session) -> (pergola_core::Page, Value) {
    let mut builder = Builder::new(session);
    let root = builder.container_element(Element::new("main", "__main__").virtual_node());
    builder.push_scope(&root);

    let name = builder.controlled_input(
        "textinput",
        "textinput-name".into(),
        Props::new(),
        Value::Null,
        None,
    );
    builder.trigger("button", "button-save".into(), Props::new(), false, None);
    builder.pop_scope();
    (builder.finish(), name)
}

#[test]
fn test_value_survives_between_passes() {
    let mut session = Session::new();

    let (mut page, name) = build_form(&mut session);
    assert_eq!(name, Value::Null);

    page.dispatch("textinput-name", Event::Change(json!("Ada")), &mut session)
        .unwrap();

    let (_, name) = build_form(&mut session);
    assert_eq!(name, json!("Ada"));
}

#[test]
fn test_click_flag_is_consumed_by_next_pass_only() {
    let mut session = Session::new();

    let (mut page, _) = build_form(&mut session);
    page.dispatch("button-save", Event::Click, &mut session)
        .unwrap();

    // The pass after the event sees the click ...
    let mut builder = Builder::new(&mut session);
    let root = builder.container_element(Element::new("main", "__main__").virtual_node());
    builder.push_scope(&root);
    assert!(builder.trigger("button", "button-save".into(), Props::new(), false, None));
    builder.pop_scope();
    drop(builder.finish());

    // ... and the one after that does not.
    let (_, _) = build_form(&mut session);
    let mut builder = Builder::new(&mut session);
    let root = builder.container_element(Element::new("main", "__main__").virtual_node());
    builder.push_scope(&root);
    assert!(!builder.trigger("button", "button-save".into(), Props::new(), false, None));
}

#[test]
fn test_wire_form_contains_controlled_value() {
    let mut session = Session::new();
    session.set("textinput-name", "Grace");

    let (page, _) = build_form(&mut session);
    let wire = page.to_value();
    assert_eq!(wire["name"], "main");
    assert_eq!(wire["children"][0]["name"], "textinput");
    assert_eq!(wire["children"][0]["props"]["value"], "Grace");
    assert_eq!(wire["children"][1]["props"].as_object().map(|o| o.len()), Some(0));
}
