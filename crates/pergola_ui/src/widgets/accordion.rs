//! Accordion composite and the single-item expander convenience.

use pergola_core::{key::widget_key, props, Element, Props, Scope, Value};

use crate::Ui;

/// Options for [`Ui::accordion`].
#[derive(Default)]
pub struct AccordionProps {
    /// Open item value(s); the parent accordion tracks open/closed state
    /// by item value.
    pub value: Option<Value>,
    pub key: Option<String>,
    pub chevron: Option<Element>,
    pub chevron_icon_size: Option<Value>,
    pub chevron_position: Option<String>,
    pub chevron_size: Option<Value>,
    pub disable_chevron_rotation: Option<bool>,
    /// Loop keyboard focus through the items.
    pub loop_focus: Option<bool>,
    /// Allow multiple items open at once.
    pub multiple: Option<bool>,
    /// Heading order for the controls, 2-6.
    pub order: Option<u8>,
    pub radius: Option<Value>,
    pub transition_duration: Option<u32>,
    /// `"default"`, `"filled"`, `"separated"`, `"contained"`, `"unstyled"`.
    pub variant: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::accordion_item`].
#[derive(Default)]
pub struct AccordionItemProps {
    pub key: Option<String>,
    pub chevron: Option<Element>,
    pub disabled: Option<bool>,
    pub icon: Option<Element>,
    pub extra: Props,
}

/// Options for [`Ui::expander`].
#[derive(Default)]
pub struct ExpanderProps {
    /// Start expanded.
    pub is_open: bool,
    pub key: Option<String>,
    pub chevron: Option<Element>,
    pub chevron_icon_size: Option<Value>,
    pub chevron_position: Option<String>,
    pub chevron_size: Option<Value>,
    pub disabled: Option<bool>,
    pub disable_chevron_rotation: Option<bool>,
    pub icon: Option<Element>,
    pub radius: Option<Value>,
    pub transition_duration: Option<u32>,
    pub variant: Option<String>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Accordion container; fill it with [`Ui::accordion_item`]s.
    pub fn accordion(&mut self, props: AccordionProps) -> Scope {
        let AccordionProps {
            value,
            key,
            chevron,
            chevron_icon_size,
            chevron_position,
            chevron_size,
            disable_chevron_rotation,
            loop_focus,
            multiple,
            order,
            radius,
            transition_duration,
            variant,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("accordion"));
        let mut p = props! {
            "defaultValue" => value,
            "chevron" => chevron,
            "chevronIconSize" => chevron_icon_size,
            "chevronPosition" => chevron_position,
            "chevronSize" => chevron_size,
            "disableChevronRotation" => disable_chevron_rotation,
            "loop" => loop_focus,
            "multiple" => multiple,
            "order" => order,
            "radius" => radius,
            "transitionDuration" => transition_duration,
            "variant" => variant,
        };
        p.merge(extra);
        self.container_element(Element::new("accordion", key).props(p).virtual_node())
    }

    /// One accordion item: a virtual control showing `label` and a virtual
    /// panel scope, which is returned for the caller to populate. The item
    /// key doubles as the value the parent accordion tracks.
    pub fn accordion_item(&mut self, label: impl Into<String>, props: AccordionItemProps) -> Scope {
        let AccordionItemProps {
            key,
            chevron,
            disabled,
            icon,
            extra,
        } = props;
        let label = label.into();
        let explicit = key.is_some();
        let item_key = match key {
            Some(key) => key,
            None => self.widget_key("accordionitem", &label, None),
        };

        let mut item_props = Props::new();
        item_props.set("value", item_key.clone());
        item_props.merge(extra);
        let item = self.container_element(
            Element::new("accordionitem", item_key.clone())
                .props(item_props)
                .virtual_node(),
        );

        self.scope(&item, |ui| {
            let control_key = if explicit {
                format!("{item_key}-control")
            } else {
                widget_key("accordioncontrol", &label)
            };
            let mut control_props = props! {
                "chevron" => chevron,
                "disabled" => disabled,
                "icon" => icon,
            };
            control_props.set("children", label.clone());
            ui.create_element(
                Element::new("accordioncontrol", control_key)
                    .props(control_props)
                    .virtual_node(),
            );

            let panel_key = if explicit {
                format!("{item_key}-panel")
            } else {
                widget_key("accordionpanel", &label)
            };
            ui.container_element(Element::new("accordionpanel", panel_key).virtual_node())
        })
    }

    /// A single collapsible section: an accordion pre-configured with
    /// exactly one item. Returns the panel scope for the body content.
    pub fn expander(&mut self, title: impl Into<String>, props: ExpanderProps) -> Scope {
        let ExpanderProps {
            is_open,
            key,
            chevron,
            chevron_icon_size,
            chevron_position,
            chevron_size,
            disabled,
            disable_chevron_rotation,
            icon,
            radius,
            transition_duration,
            variant,
            extra,
        } = props;
        let title = title.into();
        let value = match &key {
            Some(key) => key.clone(),
            None => self.widget_key("accordionitem", &title, None),
        };

        let accordion = self.accordion(AccordionProps {
            key,
            chevron,
            chevron_icon_size,
            chevron_position,
            chevron_size,
            disable_chevron_rotation,
            radius,
            transition_duration,
            variant,
            value: is_open.then(|| Value::from(value.clone())),
            extra,
            ..Default::default()
        });
        self.scope(&accordion, |ui| {
            ui.accordion_item(
                title,
                AccordionItemProps {
                    key: Some(value),
                    disabled,
                    icon,
                    ..Default::default()
                },
            )
        })
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
    fn test_accordion_item_structure() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let accordion = ui.accordion(AccordionProps::default());
        let panel = ui.scope(&accordion, |ui| {
            ui.accordion_item("Shipping", AccordionItemProps::default())
        });
        ui.scope(&panel, |ui| {
            ui.text("Details", Default::default());
        });

        let wire = ui.finish().to_value();
        let accordion = first_widget(&wire);
        let item = &accordion["children"][0];
        assert_eq!(item["name"], "accordionitem");
        assert_eq!(item["key"], "accordionitem-shipping");
        assert_eq!(item["props"]["value"], "accordionitem-shipping");
        assert_eq!(item["children"][0]["name"], "accordioncontrol");
        assert_eq!(item["children"][0]["props"]["children"], "Shipping");
        assert_eq!(item["children"][1]["name"], "accordionpanel");
        assert_eq!(item["children"][1]["children"][0]["props"]["children"], "Details");
    }

    #[test]
    fn test_accordion_item_explicit_key_suffixes() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let accordion = ui.accordion(AccordionProps::default());
        ui.scope(&accordion, |ui| {
            ui.accordion_item(
                "Billing",
                AccordionItemProps {
                    key: Some("billing".into()),
                    ..Default::default()
                },
            )
        });
        let wire = ui.finish().to_value();
        let item = &first_widget(&wire)["children"][0];
        assert_eq!(item["key"], "billing");
        assert_eq!(item["children"][0]["key"], "billing-control");
        assert_eq!(item["children"][1]["key"], "billing-panel");
    }

    #[test]
    fn test_expander_closed_has_no_default_value() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.expander("Advanced", ExpanderProps::default());
        let wire = ui.finish().to_value();
        let accordion = first_widget(&wire);
        assert_eq!(accordion["name"], "accordion");
        assert!(accordion["props"].get("defaultValue").is_none());
        let items = accordion["children"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["children"][0]["props"]["children"], "Advanced");
    }

    #[test]
    fn test_expander_open_tracks_item_key() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        let panel = ui.expander(
            "Advanced",
            ExpanderProps {
                is_open: true,
                ..Default::default()
            },
        );
        ui.scope(&panel, |ui| {
            ui.text("body", Default::default());
        });
        let wire = ui.finish().to_value();
        let accordion = first_widget(&wire);
        let item_key = accordion["children"][0]["key"].as_str().unwrap();
        assert_eq!(accordion["props"]["defaultValue"], json!(item_key));
    }
}
