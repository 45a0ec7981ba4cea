//! Tabs composite
//!
//! `tabs` builds more than one element: a virtual tabs root carrying the
//! shared tab-bar configuration, a virtual tab list holding one virtual tab
//! marker per descriptor, and, as siblings of the tab list, one virtual
//! tab panel per descriptor. The panels come back in input order for the
//! caller to populate; switching between them is the front end's job.

use pergola_core::{props, Element, Props, Scope, Value};

use crate::Ui;

/// One tab descriptor. A bare string is shorthand for a tab whose value
/// doubles as its label.
#[derive(Default)]
pub struct TabSpec {
    pub value: String,
    pub label: Option<String>,
    pub color: Option<String>,
    pub left_section: Option<Element>,
    pub right_section: Option<Element>,
    pub size: Option<Value>,
    /// Keep this tab's panel mounted while inactive.
    pub keep_mounted: Option<bool>,
    pub extra: Props,
}

impl TabSpec {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn left_section(mut self, section: Element) -> Self {
        self.left_section = Some(section);
        self
    }

    pub fn right_section(mut self, section: Element) -> Self {
        self.right_section = Some(section);
        self
    }

    pub fn keep_mounted(mut self, keep: bool) -> Self {
        self.keep_mounted = Some(keep);
        self
    }
}

impl From<&str> for TabSpec {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TabSpec {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Options for [`Ui::tabs`].
#[derive(Default)]
pub struct TabsProps {
    pub activate_tab_with_keyboard: Option<bool>,
    pub allow_tab_deactivation: Option<bool>,
    pub auto_contrast: Option<bool>,
    pub color: Option<String>,
    /// Initially selected tab value; defaults to the first descriptor's.
    pub default_value: Option<String>,
    pub inverted: Option<bool>,
    pub keep_mounted: Option<bool>,
    pub key: Option<String>,
    /// Loop keyboard focus within the tab list.
    pub loop_focus: Option<bool>,
    /// `"horizontal"` or `"vertical"`.
    pub orientation: Option<String>,
    /// Placement of the tab list relative to the panels: `"left"`/`"right"`.
    pub placement: Option<String>,
    pub radius: Option<Value>,
    pub tablist_grow: Option<bool>,
    pub tablist_justify: Option<String>,
    /// `"default"`, `"outline"`, or `"pills"`.
    pub variant: Option<String>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Tabs with a tab list and one panel scope per descriptor, returned in
    /// input order.
    ///
    /// ```
    /// # use pergola_core::Session;
    /// # use pergola_ui::{TabSpec, TabsProps, Ui};
    /// # let mut session = Session::new();
    /// # let mut ui = Ui::new(&mut session);
    /// let panels = ui.tabs(
    ///     [TabSpec::new("overview").label("Overview"), TabSpec::new("details")],
    ///     TabsProps::default(),
    /// );
    /// ui.scope(&panels[0], |ui| {
    ///     ui.text("Overview body", Default::default());
    /// });
    /// ```
    pub fn tabs<I>(&mut self, tabs: I, props: TabsProps) -> Vec<Scope>
    where
        I: IntoIterator,
        I::Item: Into<TabSpec>,
    {
        let TabsProps {
            activate_tab_with_keyboard,
            allow_tab_deactivation,
            auto_contrast,
            color,
            default_value,
            inverted,
            keep_mounted,
            key,
            loop_focus,
            orientation,
            placement,
            radius,
            tablist_grow,
            tablist_justify,
            variant,
            extra,
        } = props;
        let specs: Vec<TabSpec> = tabs.into_iter().map(Into::into).collect();
        let default_value = default_value.or_else(|| specs.first().map(|t| t.value.clone()));

        let root_key = key.unwrap_or_else(|| self.auto_key("tabs"));
        let mut root_props = props! {
            "activateTabWithKeyboard" => activate_tab_with_keyboard,
            "allowTabDeactivation" => allow_tab_deactivation,
            "autoContrast" => auto_contrast,
            "color" => color,
            "defaultValue" => default_value,
            "inverted" => inverted,
            "keepMounted" => keep_mounted,
            "loop" => loop_focus,
            "orientation" => orientation,
            "placement" => placement,
            "radius" => radius,
            "variant" => variant,
        };
        root_props.merge(extra);
        let root = self.container_element(
            Element::new("tabs", root_key).props(root_props).virtual_node(),
        );

        self.scope(&root, |ui| {
            let list_key = ui.auto_key("tablist");
            let list_props = props! {
                "grow" => tablist_grow,
                "justify" => tablist_justify,
            };
            let tab_list = ui.container_element(
                Element::new("tablist", list_key).props(list_props).virtual_node(),
            );

            let mut panels = Vec::with_capacity(specs.len());
            for spec in specs {
                let TabSpec {
                    value,
                    label,
                    color,
                    left_section,
                    right_section,
                    size,
                    keep_mounted,
                    extra,
                } = spec;

                let mut tab_props = props! {
                    "color" => color,
                    "leftSection" => left_section,
                    "rightSection" => right_section,
                    "size" => size,
                };
                tab_props.set("value", value.clone());
                tab_props.set("children", label.unwrap_or_else(|| value.clone()));
                tab_props.merge(extra);
                ui.scope(&tab_list, |ui| {
                    let tab_key = ui.auto_key("tab");
                    ui.create_element(Element::new("tab", tab_key).props(tab_props).virtual_node());
                });

                let panel_key = ui.auto_key("tabpanel");
                let mut panel_props = Props::new();
                panel_props.set("value", value);
                panel_props.maybe("keepMounted", keep_mounted);
                panels.push(ui.container_element(
                    Element::new("tabpanel", panel_key)
                        .props(panel_props)
                        .virtual_node(),
                ));
            }
            panels
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    fn tabs_root(wire: &Value) -> &Value {
        &wire["children"][0]["children"][1]["children"][0]
    }

    #[test]
    fn test_tabs_structure_for_bare_strings() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let panels = ui.tabs(["a", "b", "c"], TabsProps::default());
        assert_eq!(panels.len(), 3);
        ui.scope(&panels[1], |ui| {
            ui.text("second", Default::default());
        });

        let wire = ui.finish().to_value();
        let root = tabs_root(&wire);
        assert_eq!(root["name"], "tabs");
        assert_eq!(root["props"]["defaultValue"], "a");
        assert_eq!(root["virtual"], json!(true));

        // Tab list first, then one sibling panel per descriptor.
        let children = root["children"].as_array().unwrap();
        assert_eq!(children.len(), 4);
        assert_eq!(children[0]["name"], "tablist");
        let markers = children[0]["children"].as_array().unwrap();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0]["props"]["value"], "a");
        assert_eq!(markers[0]["props"]["children"], "a");
        assert_eq!(markers[2]["props"]["value"], "c");

        assert_eq!(children[1]["name"], "tabpanel");
        assert_eq!(children[1]["props"]["value"], "a");
        assert_eq!(children[2]["props"]["value"], "b");
        assert_eq!(children[3]["props"]["value"], "c");
        assert_eq!(children[2]["children"][0]["props"]["children"], "second");
    }

    #[test]
    fn test_tabs_explicit_default_and_labels() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.tabs(
            [
                TabSpec::new("first").label("First tab").keep_mounted(true),
                TabSpec::new("second"),
            ],
            TabsProps {
                default_value: Some("second".into()),
                variant: Some("outline".into()),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let root = tabs_root(&wire);
        assert_eq!(root["props"]["defaultValue"], "second");
        assert_eq!(root["props"]["variant"], "outline");

        let children = root["children"].as_array().unwrap();
        let marker = &children[0]["children"][0];
        assert_eq!(marker["props"]["children"], "First tab");
        assert!(marker["props"].get("label").is_none());
        assert!(marker["props"].get("keep_mounted").is_none());
        assert_eq!(children[1]["props"]["keepMounted"], json!(true));
        assert!(children[2]["props"].get("keepMounted").is_none());
    }

    #[test]
    fn test_tabs_empty_list_has_no_default() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let panels = ui.tabs(Vec::<TabSpec>::new(), TabsProps::default());
        assert!(panels.is_empty());
        let wire = ui.finish().to_value();
        let root = tabs_root(&wire);
        assert!(root["props"].get("defaultValue").is_none());
        assert_eq!(root["children"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_tab_sections_are_renamed() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.tabs(
            [TabSpec::new("home").left_section(crate::icon("IconHome"))],
            TabsProps::default(),
        );
        let wire = ui.finish().to_value();
        let marker = &tabs_root(&wire)["children"][0]["children"][0];
        assert_eq!(marker["props"]["leftSection"]["props"]["name"], "IconHome");
        assert!(marker["props"].get("left_section").is_none());
    }
}
