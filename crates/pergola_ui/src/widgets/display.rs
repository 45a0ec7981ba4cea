//! Plain display widgets: text, titles, images, formatted numbers.

use pergola_core::{Element, Props, Value};

use crate::Ui;

/// Options for [`Ui::text`].
#[derive(Default)]
pub struct TextProps {
    pub key: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::title`].
#[derive(Default)]
pub struct TitleProps {
    pub key: Option<String>,
    /// Heading level, 1-6.
    pub order: Option<u8>,
    pub extra: Props,
}

/// Options for [`Ui::image`].
#[derive(Default)]
pub struct ImageProps {
    pub key: Option<String>,
    pub extra: Props,
}

/// Options for [`Ui::number_formatter`].
#[derive(Default)]
pub struct NumberFormatterProps {
    pub key: Option<String>,
    pub extra: Props,
}

impl Ui<'_> {
    /// Plain text content.
    pub fn text(&mut self, text: impl Into<String>, props: TextProps) {
        let TextProps { key, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key("text"));
        let mut p = Props::new();
        p.set("children", text.into());
        p.merge(extra);
        self.create_element(Element::new("text", key).props(p));
    }

    /// Heading text with semantic order (h1-h6).
    pub fn title(&mut self, text: impl Into<String>, props: TitleProps) {
        let TitleProps { key, order, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key("title"));
        let mut p = Props::new();
        p.set("children", text.into());
        p.maybe("order", order);
        p.merge(extra);
        self.create_element(Element::new("title", key).props(p));
    }

    /// Display an image.
    pub fn image(&mut self, src: impl Into<String>, props: ImageProps) {
        let ImageProps { key, extra } = props;
        let src = src.into();
        let key = self.widget_key("image", &src, key);
        let mut p = Props::new();
        p.set("src", src);
        p.merge(extra);
        self.create_element(Element::new("image", key).props(p));
    }

    /// Format and display a number; formatting options go through `extra`.
    pub fn number_formatter(&mut self, value: impl Into<Value>, props: NumberFormatterProps) {
        let NumberFormatterProps { key, extra } = props;
        let key = key.unwrap_or_else(|| self.auto_key("numberformatter"));
        let mut p = Props::new();
        p.set("value", value);
        p.merge(extra);
        self.create_element(Element::new("numberformatter", key).props(p));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_core::Session;

    #[test]
    fn test_text_keys_are_sequential() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.text("one", TextProps::default());
        ui.text("two", TextProps::default());
        let wire = ui.finish().to_value();
        let main = &wire["children"][0]["children"][1]["children"];
        assert_eq!(main[0]["key"], "text-1");
        assert_eq!(main[1]["key"], "text-2");
    }

    #[test]
    fn test_title_order() {
        let mut session = Session::new();
        let mut ui = Ui::new(&mut session);
        ui.title(
            "Dashboard",
            TitleProps {
                order: Some(2),
                ..Default::default()
            },
        );
        let wire = ui.finish().to_value();
        let title = &wire["children"][0]["children"][1]["children"][0];
        assert_eq!(title["props"]["children"], "Dashboard");
        assert_eq!(title["props"]["order"], 2);
    }
}
