//! Feedback widgets: alerts, notifications, progress.

use pergola_core::{props, ClickHandler, Element, Props, Scope, Value};

use crate::Ui;

/// Options for [`Ui::alert`].
#[derive(Default)]
pub struct AlertProps {
    pub auto_contrast: Option<bool>,
    pub key: Option<String>,
    pub color: Option<String>,
    pub radius: Option<Value>,
    pub icon: Option<Element>,
    pub with_close_button: Option<bool>,
    pub close_button_label: Option<String>,
    pub on_close: Option<ClickHandler>,
    /// `"default"`, `"filled"`, `"light"`, `"outline"`, `"white"`, `"transparent"`.
    pub variant: Option<String>,
    /// Alert body text; further content can be added through the returned
    /// scope.
    pub text: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::notification`].
#[derive(Default)]
pub struct NotificationProps {
    pub key: Option<String>,
    pub close_button_props: Option<Props>,
    pub color: Option<String>,
    pub icon: Option<Element>,
    pub on_close: Option<ClickHandler>,
    pub radius: Option<Value>,
    pub text: Option<String>,
    pub with_border: Option<bool>,
    pub with_close_button: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::progress`].
#[derive(Default)]
pub struct ProgressProps {
    pub key: Option<String>,
    pub animated: Option<bool>,
    pub auto_contrast: Option<bool>,
    pub color: Option<String>,
    pub radius: Option<Value>,
    pub size: Option<Value>,
    pub striped: Option<bool>,
    pub transition_duration: Option<u32>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Inline alert with optional icon and close button.
    pub fn alert(&mut self, title: impl Into<String>, props: AlertProps) -> Scope {
        let AlertProps {
            auto_contrast,
            key,
            color,
            radius,
            icon,
            with_close_button,
            close_button_label,
            on_close,
            variant,
            text,
            extra,
        } = props;
        let title = title.into();
        let key = self.widget_key("alert", &title, key);
        let mut p = props! {
            "autoContrast" => auto_contrast,
            "closeButtonLabel" => close_button_label,
            "color" => color,
            "radius" => radius,
            "icon" => icon,
            "variant" => variant,
            "withCloseButton" => with_close_button,
            "children" => text,
        };
        p.set("title", title);
        p.merge(extra);
        self.dismissible_element(Element::new("alert", key).props(p), on_close)
    }

    /// Notification block for transient messages.
    pub fn notification(&mut self, title: impl Into<String>, props: NotificationProps) -> Scope {
        let NotificationProps {
            key,
            close_button_props,
            color,
            icon,
            on_close,
            radius,
            text,
            with_border,
            with_close_button,
            extra,
        } = props;
        let title = title.into();
        let key = self.widget_key("notification", &title, key);
        let mut p = props! {
            "closeButtonProps" => close_button_props,
            "color" => color,
            "radius" => radius,
            "icon" => icon,
            "withBorder" => with_border,
            "withCloseButton" => with_close_button,
            "children" => text,
        };
        p.set("title", title);
        p.merge(extra);
        self.dismissible_element(Element::new("notification", key).props(p), on_close)
    }

    /// Determinate progress bar, `value` in 0..=100.
    pub fn progress(&mut self, value: f64, props: ProgressProps) {
        let ProgressProps {
            key,
            animated,
            auto_contrast,
            color,
            radius,
            size,
            striped,
            transition_duration,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("progress"));
        let mut p = props! {
            "animated" => animated,
            "autoContrast" => auto_contrast,
            "color" => color,
            "radius" => radius,
            "size" => size,
            "striped" => striped,
            "transitionDuration" => transition_duration,
        };
        p.set("value", value);
        p.merge(extra);
        self.create_element(Element::new("progress", key).props(p));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    fn first_widget(wire: &Value) -> &Value {
        &wire["children"][0]["children"][1]["children"][0]
    }

    #[test]
    fn test_alert_title_and_text() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.alert(
            "Heads up",
            AlertProps {
                color: Some("yellow".into()),
                text: Some("Something needs attention".into()),
                with_close_button: Some(true),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let alert = first_widget(&wire);
        assert_eq!(alert["key"], "alert-heads-up");
        assert_eq!(alert["props"]["title"], "Heads up");
        assert_eq!(alert["props"]["children"], "Something needs attention");
        assert_eq!(alert["props"]["withCloseButton"], json!(true));
    }

    #[test]
    fn test_progress_value_always_present() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.progress(62.5, ProgressProps::default());
        let wire = ui.finish().to_value();
        assert_eq!(first_widget(&wire)["props"]["value"], json!(62.5));
    }
}
