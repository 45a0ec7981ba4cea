//! Layout containers
//!
//! Containers register one element and return a [`Scope`] handle; content
//! is added by re-entering the scope with [`Ui::scope`]. Prop structs carry
//! the widget's optional attributes plus an `extra` passthrough map for
//! anything the front-end component accepts beyond the typed surface.

use pergola_core::{props, Element, Props, Scope, Value};

use crate::Ui;

/// Options for [`Ui::container`].
#[derive(Default)]
pub struct ContainerProps {
    pub fluid: bool,
    pub key: Option<String>,
    pub size: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::flex`].
#[derive(Default)]
pub struct FlexProps {
    pub align: Option<String>,
    pub column_gap: Option<String>,
    pub direction: Option<String>,
    pub gap: Option<String>,
    pub justify: Option<String>,
    pub key: Option<String>,
    pub row_gap: Option<String>,
    pub wrap: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::grid`].
#[derive(Default)]
pub struct GridProps {
    pub align: Option<String>,
    pub breakpoints: Option<Props>,
    pub columns: Option<u32>,
    pub grow: Option<bool>,
    pub gutter: Option<Value>,
    pub justify: Option<String>,
    pub key: Option<String>,
    pub overflow: Option<String>,
    /// Responsive query type: `"media"` or `"container"`.
    pub query_type: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::grid_col`].
#[derive(Default)]
pub struct GridColProps {
    pub key: Option<String>,
    pub offset: Option<i32>,
    pub order: Option<i32>,
    pub span: Option<i32>,
    pub extra: Props,
}

/// Options for [`Ui::group`].
#[derive(Default)]
pub struct GroupProps {
    pub align: Option<String>,
    pub gap: Option<String>,
    pub grow: Option<bool>,
    pub justify: Option<String>,
    pub key: Option<String>,
    pub prevent_grow_overflow: Option<bool>,
    pub wrap: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::simple_grid`].
#[derive(Default)]
pub struct SimpleGridProps {
    pub cols: Option<u32>,
    pub key: Option<String>,
    pub query_type: Option<String>,
    pub spacing: Option<String>,
    pub vertical_spacing: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::space`].
#[derive(Default)]
pub struct SpaceProps {
    pub h: Option<String>,
    pub key: Option<String>,
    pub v: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::stack`].
#[derive(Default)]
pub struct StackProps {
    pub align: Option<String>,
    pub gap: Option<String>,
    pub justify: Option<String>,
    pub key: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::box_`].
#[derive(Default)]
pub struct BoxProps {
    pub key: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::paper`].
#[derive(Default)]
pub struct PaperProps {
    pub key: Option<String>,
    pub radius: Option<Value>,
    pub shadow: Option<String>,
    pub with_border: Option<bool>,
    pub extra: Props,
}

/// Options for [`Ui::scroll_area`].
#[derive(Default)]
pub struct ScrollAreaProps {
    pub key: Option<String>,
    pub offset_scrollbars: Option<Value>,
    pub overscroll_behavior: Option<String>,
    pub scroll_hide_delay: Option<u32>,
    pub scrollbar_size: Option<Value>,
    pub scrollbars: Option<Value>,
    /// Scrollbar visibility policy: `auto`, `scroll`, `always`, `hover`, `never`.
    pub kind: Option<String>,
    pub viewport_props: Option<Props>,
    pub extra: Props,
}

/// Options for [`Ui::fieldset`].
#[derive(Default)]
pub struct FieldsetProps {
    pub disabled: Option<bool>,
    pub key: Option<String>,
    pub radius: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::affix`].
#[derive(Default)]
pub struct AffixProps {
    pub key: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::spoiler`].
#[derive(Default)]
pub struct SpoilerProps {
    pub show_label: Option<String>,
    pub hide_label: Option<String>,
    pub key: Option<String>,
    pub initial_state: bool,
    pub max_height: Option<u32>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Centered content container.
    pub fn container(&mut self, props: ContainerProps) -> Scope {
        let ContainerProps {
            fluid,
            key,
            size,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("container"));
        let mut p = Props::new();
        p.set("fluid", fluid);
        p.maybe("size", size);
        p.merge(extra);
        self.container_element(Element::new("container", key).props(p))
    }

    /// Flexbox container.
    pub fn flex(&mut self, props: FlexProps) -> Scope {
        let FlexProps {
            align,
            column_gap,
            direction,
            gap,
            justify,
            key,
            row_gap,
            wrap,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("flex"));
        let mut p = props! {
            "align" => align,
            "columnGap" => column_gap,
            "direction" => direction,
            "gap" => gap,
            "justify" => justify,
            "rowGap" => row_gap,
            "wrap" => wrap,
        };
        p.merge(extra);
        self.container_element(Element::new("flex", key).props(p))
    }

    /// Responsive grid container; columns are added with [`Ui::grid_col`].
    pub fn grid(&mut self, props: GridProps) -> Scope {
        let GridProps {
            align,
            breakpoints,
            columns,
            grow,
            gutter,
            justify,
            key,
            overflow,
            query_type,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("grid"));
        let mut p = props! {
            "align" => align,
            "breakpoints" => breakpoints,
            "columns" => columns,
            "grow" => grow,
            "gutter" => gutter,
            "justify" => justify,
            "overflow" => overflow,
            "type" => query_type,
        };
        p.merge(extra);
        self.container_element(Element::new("grid", key).props(p))
    }

    /// Column inside the nearest [`Ui::grid`].
    pub fn grid_col(&mut self, props: GridColProps) -> Scope {
        let GridColProps {
            key,
            offset,
            order,
            span,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("gridcol"));
        let mut p = props! {
            "offset" => offset,
            "order" => order,
            "span" => span,
        };
        p.merge(extra);
        self.container_element(Element::new("gridcol", key).props(p))
    }

    /// Horizontal arrangement with spacing and alignment.
    pub fn group(&mut self, props: GroupProps) -> Scope {
        let GroupProps {
            align,
            gap,
            grow,
            justify,
            key,
            prevent_grow_overflow,
            wrap,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("group"));
        let mut p = props! {
            "align" => align,
            "gap" => gap,
            "grow" => grow,
            "justify" => justify,
            "preventGrowOverflow" => prevent_grow_overflow,
            "wrap" => wrap,
        };
        p.merge(extra);
        self.container_element(Element::new("group", key).props(p))
    }

    /// Equal-width responsive grid.
    pub fn simple_grid(&mut self, props: SimpleGridProps) -> Scope {
        let SimpleGridProps {
            cols,
            key,
            query_type,
            spacing,
            vertical_spacing,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("simplegrid"));
        let mut p = props! {
            "cols" => cols,
            "spacing" => spacing,
            "type" => query_type,
            "verticalSpacing" => vertical_spacing,
        };
        p.merge(extra);
        self.container_element(Element::new("simplegrid", key).props(p))
    }

    /// Insert vertical and/or horizontal spacing.
    pub fn space(&mut self, props: SpaceProps) {
        let SpaceProps { h, key, v, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key("space"));
        let mut p = props! {
            "h" => h,
            "v" => v,
        };
        p.merge(extra);
        self.create_element(Element::new("space", key).props(p));
    }

    /// Vertical arrangement with spacing and alignment.
    pub fn stack(&mut self, props: StackProps) -> Scope {
        let StackProps {
            align,
            gap,
            justify,
            key,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("stack"));
        let mut p = props! {
            "align" => align,
            "gap" => gap,
            "justify" => justify,
        };
        p.merge(extra);
        self.container_element(Element::new("stack", key).props(p))
    }

    /// Generic styling container; all attributes go through `extra`.
    pub fn box_(&mut self, props: BoxProps) -> Scope {
        let BoxProps { key, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key("box"));
        self.container_element(Element::new("box", key).props(extra).virtual_node())
    }

    /// Container with background, border, and shadow.
    pub fn paper(&mut self, props: PaperProps) -> Scope {
        let PaperProps {
            key,
            radius,
            shadow,
            with_border,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("paper"));
        let mut p = props! {
            "radius" => radius,
            "shadow" => shadow,
            "withBorder" => with_border,
        };
        p.merge(extra);
        self.container_element(Element::new("paper", key).props(p).virtual_node())
    }

    /// Scrollable area with configurable scrollbars.
    pub fn scroll_area(&mut self, props: ScrollAreaProps) -> Scope {
        let ScrollAreaProps {
            key,
            offset_scrollbars,
            overscroll_behavior,
            scroll_hide_delay,
            scrollbar_size,
            scrollbars,
            kind,
            viewport_props,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("scrollarea"));
        let mut p = props! {
            "offsetScrollbars" => offset_scrollbars,
            "overscrollBehavior" => overscroll_behavior,
            "scrollHideDelay" => scroll_hide_delay,
            "scrollbarSize" => scrollbar_size,
            "scrollbars" => scrollbars,
            "type" => kind,
            "viewportProps" => viewport_props,
        };
        p.merge(extra);
        self.container_element(Element::new("scrollarea", key).props(p).virtual_node())
    }

    /// Group related form fields under a legend.
    pub fn fieldset(&mut self, legend: impl Into<String>, props: FieldsetProps) -> Scope {
        let FieldsetProps {
            disabled,
            key,
            radius,
            extra,
        } = props;
        let legend = legend.into();
        let key = self.widget_key("fieldset", &legend, key);
        let mut p = props! {
            "disabled" => disabled,
            "radius" => radius,
        };
        p.set("legend", legend);
        p.merge(extra);
        self.container_element(Element::new("fieldset", key).props(p))
    }

    /// Pin content at a fixed offset from the viewport edges.
    pub fn affix(&mut self, props: AffixProps) -> Scope {
        let AffixProps { key, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key("affix"));
        self.container_element(Element::new("affix", key).props(extra).virtual_node())
    }

    /// Collapsible content with show/hide controls.
    pub fn spoiler(&mut self, props: SpoilerProps) -> Scope {
        let SpoilerProps {
            show_label,
            hide_label,
            key,
            initial_state,
            max_height,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("spoiler"));
        let mut p = Props::new();
        p.set("showLabel", show_label.unwrap_or_else(|| "Show more".into()));
        p.set("hideLabel", hide_label.unwrap_or_else(|| "Show less".into()));
        p.set("initialState", initial_state);
        p.maybe("maxHeight", max_height);
        p.merge(extra);
        self.container_element(Element::new("spoiler", key).props(p).virtual_node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;
    use serde_json::json;

    fn wire(build: impl FnOnce(&mut Ui)) -> Value {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        build(&mut ui);
        ui.finish().to_value()
    }

    fn main_children(wire: &Value) -> &Value {
        &wire["children"][0]["children"][1]["children"]
    }

    #[test]
    fn test_container_always_writes_fluid() {
        let wire = wire(|ui| {
            ui.container(ContainerProps {
                size: Some("xl".into()),
                ..Default::default()
            });
        });
        let container = &main_children(&wire)[0];
        assert_eq!(container["key"], "container-1");
        assert_eq!(container["props"]["fluid"], json!(false));
        assert_eq!(container["props"]["size"], "xl");
    }

    #[test]
    fn test_flex_renames_gaps() {
        let wire = wire(|ui| {
            ui.flex(FlexProps {
                column_gap: Some("sm".into()),
                row_gap: Some("lg".into()),
                ..Default::default()
            });
        });
        let flex = &main_children(&wire)[0]["props"];
        assert_eq!(flex["columnGap"], "sm");
        assert_eq!(flex["rowGap"], "lg");
        assert!(flex.get("column_gap").is_none());
        assert!(flex.get("align").is_none());
    }

    #[test]
    fn test_nested_layout_scopes() {
        let wire = wire(|ui| {
            let grid = ui.grid(GridProps {
                columns: Some(12),
                ..Default::default()
            });
            ui.scope(&grid, |ui| {
                let col = ui.grid_col(GridColProps {
                    span: Some(6),
                    ..Default::default()
                });
                ui.scope(&col, |ui| {
                    ui.text("cell", Default::default());
                });
            });
        });
        let grid = &main_children(&wire)[0];
        assert_eq!(grid["name"], "grid");
        assert_eq!(grid["children"][0]["props"]["span"], json!(6));
        assert_eq!(
            grid["children"][0]["children"][0]["props"]["children"],
            "cell"
        );
    }

    #[test]
    fn test_spoiler_defaults_are_explicit() {
        let wire = wire(|ui| {
            ui.spoiler(SpoilerProps::default());
        });
        let spoiler = &main_children(&wire)[0];
        assert_eq!(spoiler["props"]["showLabel"], "Show more");
        assert_eq!(spoiler["props"]["hideLabel"], "Show less");
        assert_eq!(spoiler["props"]["initialState"], json!(false));
        assert_eq!(spoiler["virtual"], json!(true));
    }

    #[test]
    fn test_fieldset_derives_key_from_legend() {
        let wire = wire(|ui| {
            ui.fieldset("Account settings", FieldsetProps::default());
        });
        assert_eq!(main_children(&wire)[0]["key"], "fieldset-account-settings");
    }
}
