//! Navigation links: inline anchors and sidebar nav links.
//!
//! Both map onto one shared link primitive parameterized by element kind
//! and the attribute carrying the visible text.

use pergola_core::{props, Element, ElementId, Props, Scope};

use crate::Ui;

/// Options for [`Ui::anchor`].
#[derive(Default)]
pub struct AnchorProps {
    /// Text color.
    pub c: Option<String>,
    pub gradient: Option<Props>,
    pub inherit: Option<bool>,
    pub inline: Option<bool>,
    /// Open in a new tab/window instead of routing internally.
    pub is_external: bool,
    pub key: Option<String>,
    pub line_clamp: Option<u32>,
    /// Replace the history entry when routing.
    pub replace: bool,
    pub size: Option<String>,
    pub truncate: Option<String>,
    pub underline: Option<String>,
    pub variant: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::nav_link`].
#[derive(Default)]
pub struct NavLinkProps {
    pub active: Option<bool>,
    pub auto_contrast: Option<bool>,
    pub children_offset: Option<String>,
    pub color: Option<String>,
    pub default_opened: Option<bool>,
    pub description: Option<String>,
    pub disable_right_section_rotation: Option<bool>,
    pub disabled: Option<bool>,
    /// Match the route exactly when computing the active state.
    pub exact: Option<bool>,
    pub is_external: bool,
    pub key: Option<String>,
    pub left_section: Option<Element>,
    pub no_wrap: Option<bool>,
    pub right_section: Option<Element>,
    pub extra: Props,
}

impl Ui<'_> {
    fn link_element(
        &mut self,
        name: &'static str,
        text_attr: &'static str,
        href: String,
        text: String,
        key: Option<String>,
        is_external: bool,
        mut props: Props,
    ) -> ElementId {
        let key = self.widget_key(name, &text, key);
        props.set(text_attr, text);
        props.set("href", href);
        props.set("isExternal", is_external);
        self.create_element(Element::new(name, key).props(props))
    }

    /// Inline link that routes internally or opens external URLs.
    pub fn anchor(
        &mut self,
        href: impl Into<String>,
        text: impl Into<String>,
        props: AnchorProps,
    ) -> ElementId {
        let AnchorProps {
            c,
            gradient,
            inherit,
            inline,
            is_external,
            key,
            line_clamp,
            replace,
            size,
            truncate,
            underline,
            variant,
            extra,
        } = props;
        let mut p = props! {
            "c" => c,
            "gradient" => gradient,
            "inherit" => inherit,
            "inline" => inline,
            "lineClamp" => line_clamp,
            "size" => size,
            "truncate" => truncate,
            "underline" => underline,
            "variant" => variant,
        };
        p.set("replace", replace);
        p.merge(extra);
        self.link_element("anchor", "children", href.into(), text.into(), key, is_external, p)
    }

    /// Navigation link, typically used in sidebars. Returns a scope for
    /// nested child links.
    pub fn nav_link(
        &mut self,
        href: impl Into<String>,
        label: impl Into<String>,
        props: NavLinkProps,
    ) -> Scope {
        let NavLinkProps {
            active,
            auto_contrast,
            children_offset,
            color,
            default_opened,
            description,
            disable_right_section_rotation,
            disabled,
            exact,
            is_external,
            key,
            left_section,
            no_wrap,
            right_section,
            extra,
        } = props;
        let mut p = props! {
            "active" => active,
            "autoContrast" => auto_contrast,
            "childrenOffset" => children_offset,
            "color" => color,
            "defaultOpened" => default_opened,
            "description" => description,
            "disableRightSectionRotation" => disable_right_section_rotation,
            "disabled" => disabled,
            "exact" => exact,
            "leftSection" => left_section,
            "noWrap" => no_wrap,
            "rightSection" => right_section,
        };
        p.merge(extra);
        let id = self.link_element("navlink", "label", href.into(), label.into(), key, is_external, p);
        self.scope_of(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::{Session, Value};
    use serde_json::json;

    fn first_widget(wire: &Value) -> &Value {
        &wire["children"][0]["children"][1]["children"][0]
    }

    #[test]
    fn test_anchor_wire_shape() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.anchor(
            "https://example.org",
            "Docs",
            AnchorProps {
                is_external: true,
                underline: Some("hover".into()),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let anchor = &first_widget(&wire);
        assert_eq!(anchor["key"], "anchor-docs");
        assert_eq!(anchor["props"]["children"], "Docs");
        assert_eq!(anchor["props"]["href"], "https://example.org");
        assert_eq!(anchor["props"]["isExternal"], json!(true));
        assert_eq!(anchor["props"]["underline"], "hover");
    }

    #[test]
    fn test_nav_link_nests_children() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let parent = ui.nav_link("/settings", "Settings", NavLinkProps::default());
        ui.scope(&parent, |ui| {
            ui.nav_link("/settings/profile", "Profile", NavLinkProps::default());
        });
        let wire = ui.finish().to_value();
        let link = first_widget(&wire);
        assert_eq!(link["props"]["label"], "Settings");
        assert_eq!(link["children"][0]["props"]["label"], "Profile");
    }
}
