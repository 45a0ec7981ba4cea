//! Overlay containers: dialog, drawer, modal.
//!
//! An overlay constructor registers its element with `opened: true` and
//! returns a scope for the content; dismissal and re-rendering of the
//! subtree belong to the embedding application's overlay lifecycle.

use pergola_core::{props, ClickHandler, Element, Props, Scope, Value};

use crate::Ui;

/// Options for [`Ui::dialog`].
#[derive(Default)]
pub struct DialogProps {
    pub key: Option<String>,
    pub with_close_button: Option<bool>,
    pub on_close: Option<ClickHandler>,
    pub extra: Props,
}

/// Options for [`Ui::drawer`].
#[derive(Default)]
pub struct DrawerProps {
    pub key: Option<String>,
    pub close_button_props: Option<Props>,
    pub close_on_click_outside: Option<bool>,
    pub close_on_escape: Option<bool>,
    pub on_close: Option<ClickHandler>,
    pub keep_mounted: Option<bool>,
    pub lock_scroll: Option<bool>,
    pub offset: Option<Value>,
    pub overlay_props: Option<Props>,
    pub padding: Option<Value>,
    pub portal_props: Option<Props>,
    /// Edge the drawer slides from.
    pub position: Option<String>,
    pub radius: Option<Value>,
    pub remove_scroll_props: Option<Props>,
    pub return_focus: Option<bool>,
    pub scroll_area_component: Option<String>,
    pub shadow: Option<String>,
    pub size: Option<Value>,
    pub stack_id: Option<String>,
    pub title: Option<String>,
    pub transition_props: Option<Props>,
    pub trap_focus: Option<bool>,
    pub with_close_button: Option<bool>,
    pub with_overlay: Option<bool>,
    pub within_portal: Option<bool>,
    pub z_index: Option<Value>,
    pub extra: Props,
}

/// Options for [`Ui::modal`].
#[derive(Default)]
pub struct ModalProps {
    pub key: Option<String>,
    pub title: Option<String>,
    pub with_close_button: Option<bool>,
    pub on_close: Option<ClickHandler>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Open a lightweight dialog for arbitrary content.
    pub fn dialog(&mut self, props: DialogProps) -> Scope {
        let DialogProps {
            key,
            with_close_button,
            on_close,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("dialog"));
        let mut p = props! {
            "withCloseButton" => with_close_button,
        };
        p.set("opened", true);
        p.merge(extra);
        self.dismissible_element(Element::new("dialog", key).props(p), on_close)
    }

    /// Drawer that slides in from a screen edge.
    pub fn drawer(&mut self, props: DrawerProps) -> Scope {
        let DrawerProps {
            key,
            close_button_props,
            close_on_click_outside,
            close_on_escape,
            on_close,
            keep_mounted,
            lock_scroll,
            offset,
            overlay_props,
            padding,
            portal_props,
            position,
            radius,
            remove_scroll_props,
            return_focus,
            scroll_area_component,
            shadow,
            size,
            stack_id,
            title,
            transition_props,
            trap_focus,
            with_close_button,
            with_overlay,
            within_portal,
            z_index,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("drawer"));
        let mut p = props! {
            "closeButtonProps" => close_button_props,
            "closeOnClickOutside" => close_on_click_outside,
            "closeOnEscape" => close_on_escape,
            "keepMounted" => keep_mounted,
            "lockScroll" => lock_scroll,
            "offset" => offset,
            "overlayProps" => overlay_props,
            "padding" => padding,
            "portalProps" => portal_props,
            "position" => position,
            "radius" => radius,
            "removeScrollProps" => remove_scroll_props,
            "returnFocus" => return_focus,
            "scrollAreaComponent" => scroll_area_component,
            "shadow" => shadow,
            "size" => size,
            "stackId" => stack_id,
            "title" => title,
            "transitionProps" => transition_props,
            "trapFocus" => trap_focus,
            "withCloseButton" => with_close_button,
            "withOverlay" => with_overlay,
            "withinPortal" => within_portal,
            "zIndex" => z_index,
        };
        p.set("opened", true);
        p.merge(extra);
        self.dismissible_element(Element::new("drawer", key).props(p), on_close)
    }

    /// Centered modal dialog.
    pub fn modal(&mut self, props: ModalProps) -> Scope {
        let ModalProps {
            key,
            title,
            with_close_button,
            on_close,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("modal"));
        let mut p = props! {
            "title" => title,
            "withCloseButton" => with_close_button,
        };
        p.set("opened", true);
        p.merge(extra);
        self.dismissible_element(Element::new("modal", key).props(p), on_close)
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
    fn test_modal_opens_with_content() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let modal = ui.modal(ModalProps {
            title: Some("Confirm".into()),
            with_close_button: Some(true),
            ..Default::default()
        });
        ui.scope(&modal, |ui| {
            ui.text("Are you sure?", Default::default());
        });
        let wire = ui.finish().to_value();
        let modal = first_widget(&wire);
        assert_eq!(modal["props"]["opened"], json!(true));
        assert_eq!(modal["props"]["title"], "Confirm");
        assert_eq!(modal["children"][0]["props"]["children"], "Are you sure?");
    }

    #[test]
    fn test_drawer_position_rename() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.drawer(DrawerProps {
            position: Some("right".into()),
            close_on_escape: Some(false),
            ..Default::default()
        });
        let wire = ui.finish().to_value();
        let drawer = first_widget(&wire);
        assert_eq!(drawer["key"], "drawer-1");
        assert_eq!(drawer["props"]["position"], "right");
        assert_eq!(drawer["props"]["closeOnEscape"], json!(false));
    }
}
