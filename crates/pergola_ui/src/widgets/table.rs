//! Tables, in two forms: prop-driven (whole table as a `data` prop) and
//! structural (head/body/rows/cells as nested scopes).

use pergola_core::{props, Element, Props, Scope, Value};

use crate::Ui;

/// Options for [`Ui::table`].
#[derive(Default)]
pub struct TableProps {
    pub key: Option<String>,
    /// Body rows for the prop-driven form.
    pub body: Option<Value>,
    pub caption: Option<String>,
    pub head: Option<Vec<String>>,
    pub foot: Option<Vec<String>>,
    pub sticky_header: Option<bool>,
    pub extra: Props,
}

/// Options for the keyed structural table sections.
#[derive(Default)]
pub struct TableSectionProps {
    pub key: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::table_scroll_container`].
#[derive(Default)]
pub struct TableScrollContainerProps {
    pub key: Option<String>,
    pub max_height: Option<Value>,
    pub max_width: Option<Value>,
    pub min_height: Option<Value>,
    pub min_width: Option<Value>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Data table. Rows given through `body`/`head`/`foot` render directly;
    /// the returned scope takes structural sections instead.
    pub fn table(&mut self, props: TableProps) -> Scope {
        let TableProps {
            key,
            body,
            caption,
            head,
            foot,
            sticky_header,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("table"));
        let data = props! {
            "body" => body,
            "caption" => caption,
            "head" => head,
            "foot" => foot,
        };
        let mut p = Props::new();
        p.set("data", data);
        p.maybe("stickyHeader", sticky_header);
        p.merge(extra);
        self.container_element(Element::new("table", key).props(p))
    }

    /// Caption for the current table.
    pub fn table_caption(&mut self, text: impl Into<String>, props: TableSectionProps) {
        let TableSectionProps { key, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key("tablecaption"));
        let mut p = Props::new();
        p.set("children", text.into());
        p.merge(extra);
        self.create_element(Element::new("tablecaption", key).props(p).virtual_node());
    }

    pub fn table_head(&mut self, props: TableSectionProps) -> Scope {
        self.table_section("tablehead", props)
    }

    pub fn table_body(&mut self, props: TableSectionProps) -> Scope {
        self.table_section("tablebody", props)
    }

    pub fn table_foot(&mut self, props: TableSectionProps) -> Scope {
        self.table_section("tablefoot", props)
    }

    pub fn table_row(&mut self, props: TableSectionProps) -> Scope {
        self.table_section("tablerow", props)
    }

    /// Data cell, optionally with text content.
    pub fn table_cell(&mut self, text: Option<String>, props: TableSectionProps) -> Scope {
        self.table_text_section("tablecell", text, props)
    }

    /// Header cell, optionally with text content.
    pub fn table_header(&mut self, text: Option<String>, props: TableSectionProps) -> Scope {
        self.table_text_section("tableheader", text, props)
    }

    /// Scrollable wrapper for large tables.
    pub fn table_scroll_container(&mut self, props: TableScrollContainerProps) -> Scope {
        let TableScrollContainerProps {
            key,
            max_height,
            max_width,
            min_height,
            min_width,
            extra,
        } = props;
        let key = key.unwrap_or_else(|| self.auto_key("tablescrollcontainer"));
        let mut p = props! {
            "maxHeight" => max_height,
            "maxWidth" => max_width,
            "minHeight" => min_height,
            "minWidth" => min_width,
        };
        p.merge(extra);
        self.container_element(
            Element::new("tablescrollcontainer", key)
                .props(p)
                .virtual_node(),
        )
    }

    fn table_section(&mut self, name: &'static str, props: TableSectionProps) -> Scope {
        let TableSectionProps { key, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key(name));
        self.container_element(Element::new(name, key).props(extra).virtual_node())
    }

    fn table_text_section(
        &mut self,
        name: &'static str,
        text: Option<String>,
        props: TableSectionProps,
    ) -> Scope {
        let TableSectionProps { key, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key(name));
        let mut p = props! {
            "children" => text,
        };
        p.merge(extra);
        self.container_element(Element::new(name, key).props(p).virtual_node())
    }
}
