//! Buttons and action icons, plus the inert `icon` adornment helper.

use pergola_core::{props, ClickHandler, Element, Props, Value};

use crate::Ui;

/// An inert icon descriptor for adornment props (`left_section`,
/// `thumb_icon`, ...). Never placed in the tree on its own.
pub fn icon(name: impl Into<String>) -> Element {
    let mut p = Props::new();
    p.set("name", name.into());
    Element::fragment("icon").props(p)
}

/// Options for [`Ui::button`].
#[derive(Default)]
pub struct ButtonProps {
    pub color: Option<String>,
    pub disabled: Option<bool>,
    pub full_width: Option<bool>,
    pub gradient: Option<Props>,
    pub justify: Option<String>,
    pub left_section: Option<Element>,
    pub left_section_props: Option<Props>,
    pub left_section_width: Option<Value>,
    pub loading: Option<bool>,
    pub key: Option<String>,
    pub on_click: Option<ClickHandler>,
    pub radius: Option<Value>,
    pub right_section: Option<Element>,
    pub right_section_props: Option<Props>,
    pub right_section_width: Option<Value>,
    pub size: Option<String>,
    pub variant: Option<String>,
    /// Register the element as virtual (structural only).
    pub virtual_node: bool,
    pub extra: Props,
}

/// Options for [`Ui::action_icon`].
#[derive(Default)]
pub struct ActionIconProps {
    pub key: Option<String>,
    pub on_click: Option<ClickHandler>,
    pub virtual_node: bool,
    pub extra: Props,
}

/// Options for [`Ui::action_icon_group`].
#[derive(Default)]
pub struct ActionIconGroupProps {
    pub border_width: Option<String>,
    /// `"horizontal"` or `"vertical"`.
    pub orientation: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::action_icon_group_section`].
#[derive(Default)]
pub struct ActionIconGroupSectionProps {
    pub text: Option<String>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Standard button. Returns whether it was clicked since the last pass.
    pub fn button(&mut self, text: impl Into<String>, props: ButtonProps) -> bool {
        let ButtonProps {
            color,
            disabled,
            full_width,
            gradient,
            justify,
            left_section,
            left_section_props,
            left_section_width,
            loading,
            key,
            on_click,
            radius,
            right_section,
            right_section_props,
            right_section_width,
            size,
            variant,
            virtual_node,
            extra,
        } = props;
        let text = text.into();
        let key = self.widget_key("button", &text, key);
        let mut p = props! {
            "color" => color,
            "disabled" => disabled,
            "fullWidth" => full_width,
            "gradient" => gradient,
            "justify" => justify,
            "leftSection" => left_section,
            "leftSectionProps" => left_section_props,
            "leftSectionWidth" => left_section_width,
            "loading" => loading,
            "radius" => radius,
            "rightSection" => right_section,
            "rightSectionProps" => right_section_props,
            "rightSectionWidth" => right_section_width,
            "size" => size,
            "variant" => variant,
        };
        p.set("children", text);
        p.merge(extra);
        self.trigger("button", key, p, virtual_node, on_click)
    }

    /// Icon-only button for compact actions.
    pub fn action_icon(&mut self, name: impl Into<String>, props: ActionIconProps) -> bool {
        let ActionIconProps {
            key,
            on_click,
            virtual_node,
            extra,
        } = props;
        let name = name.into();
        let key = self.widget_key("actionicon", &name, key);
        let mut p = Props::new();
        p.set("name", name);
        p.merge(extra);
        self.trigger("actionicon", key, p, virtual_node, on_click)
    }

    /// Group several action icons together.
    pub fn action_icon_group(&mut self, props: ActionIconGroupProps) -> pergola_core::Scope {
        let ActionIconGroupProps {
            border_width,
            orientation,
            extra,
        } = props;
        let key = self.auto_key("actionicongroup");
        let mut p = props! {
            "borderWidth" => border_width,
            "orientation" => orientation,
        };
        p.merge(extra);
        self.container_element(Element::new("actionicongroup", key).props(p).virtual_node())
    }

    /// Labelled section within an action icon group.
    pub fn action_icon_group_section(
        &mut self,
        props: ActionIconGroupSectionProps,
    ) -> pergola_core::Scope {
        let ActionIconGroupSectionProps { text, extra } = props;
        let key = self.auto_key("actionicongroupsection");
        let mut p = props! {
            "children" => text,
        };
        p.merge(extra);
        self.container_element(
            Element::new("actionicongroupsection", key)
                .props(p)
                .virtual_node(),
        )
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
    fn test_button_click_round_trip() {
        let mut session = Session::new();
        session.fire("button-save");
        let mut ui = Ui::new(&mut session);
        assert!(ui.button("Save", ButtonProps::default()));
        assert!(!ui.button("Cancel", ButtonProps::default()));
    }

    #[test]
    fn test_button_sections_embed_icons() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.button(
            "Download",
            ButtonProps {
                left_section: Some(icon("IconDownload")),
                variant: Some("light".into()),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let props = &first_widget(&wire)["props"];
        assert_eq!(props["leftSection"]["name"], "icon");
        assert_eq!(props["leftSection"]["virtual"], json!(true));
        assert_eq!(props["leftSection"]["props"]["name"], "IconDownload");
        assert_eq!(props["children"], "Download");
    }

    #[test]
    fn test_action_icon_key_from_name() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.action_icon("IconTrash", ActionIconProps::default());
        let wire = ui.finish().to_value();
        assert_eq!(first_widget(&wire)["key"], "actionicon-icontrash");
    }
}
