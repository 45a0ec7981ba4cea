//! Catalogue showcase: builds a small settings page and prints the wire
//! tree a front end would receive.
//!
//! Run with `cargo run -p pergola_ui --example showcase`.

use pergola_core::{Event, Session};
use pergola_ui::prelude::*;
use serde_json::json;

fn build_page(session: &mut Session) -> Page {
    let mut ui = Ui::new(session);
    ui.set_app_shell_props(AppShellProps {
        title: Some("Pergola Showcase".into()),
        logo: Some("/static/logo.svg".into()),
        ..Default::default()
    });

    let sidebar = ui.sidebar();
    ui.scope(&sidebar, |ui| {
        ui.nav_link("/", "Home", NavLinkProps::default());
        ui.nav_link("/settings", "Settings", NavLinkProps::default());
    });

    ui.title("Settings", TitleProps { order: Some(2), ..Default::default() });

    let panels = ui.tabs(
        [
            TabSpec::new("profile").label("Profile").left_section(icon("IconUser")),
            TabSpec::new("appearance").label("Appearance"),
        ],
        TabsProps { variant: Some("outline".into()), ..Default::default() },
    );

    ui.scope(&panels[0], |ui| {
        let form = ui.stack(StackProps { gap: Some("md".into()), ..Default::default() });
        ui.scope(&form, |ui| {
            let name = ui.text_input("Display name", TextInputProps::default());
            ui.text(format!("Hello, {name}!"), TextProps::default());
            ui.checkbox("Email me product updates", CheckboxProps::default());
            if ui.button("Save", ButtonProps { color: Some("teal".into()), ..Default::default() }) {
                ui.notification(
                    "Saved",
                    NotificationProps { color: Some("green".into()), ..Default::default() },
                );
            }
        });
    });

    ui.scope(&panels[1], |ui| {
        ui.segmented_control(
            "color-scheme",
            ["auto", "light", "dark"],
            SegmentedControlProps::default(),
        );
        ui.slider(
            "Font size",
            SliderProps {
                min_value: Some(12.0),
                max_value: Some(24.0),
                value: Some(16.0),
                ..Default::default()
            },
        );
    });

    ui.finish()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut session = Session::new();

    // First pass: everything at its defaults.
    let page = build_page(&mut session);
    println!("{}", serde_json::to_string_pretty(&page.to_value()).unwrap());

    // Simulate the front end: type a name, click Save, re-render.
    let mut page = build_page(&mut session);
    page.dispatch(
        "textinput-display-name",
        Event::Change(json!("Ada")),
        &mut session,
    )
    .unwrap();
    page.dispatch("button-save", Event::Click, &mut session).unwrap();

    let page = build_page(&mut session);
    println!("{}", serde_json::to_string_pretty(&page.to_value()).unwrap());
}
