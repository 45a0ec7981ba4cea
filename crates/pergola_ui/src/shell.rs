//! The `Ui` builder and its root scaffolding
//!
//! [`Ui`] wraps the core render-pass [`Builder`] and owns the root
//! structure every page shares: a virtual `provider` element carrying the
//! theme, an `appshell` containing a `navbar` (the sidebar) and a `main`
//! area. Widgets created afterwards land in `main` unless a scope says
//! otherwise.

use std::ops::{Deref, DerefMut};

use pergola_core::{Builder, Element, Page, Props, Scope, Session};
use tracing::debug;

use crate::theme::{ColorScheme, Theme};

/// Builder for one render pass, carrying the widget catalogue.
pub struct Ui<'s> {
    base: Builder<'s>,
    provider: Scope,
    app_shell: Scope,
    navbar: Scope,
    #[allow(dead_code)]
    main: Scope,
}

impl<'s> Ui<'s> {
    /// Start a pass over `session`, creating the provider/app-shell root.
    pub fn new(session: &'s mut Session) -> Self {
        let mut base = Builder::new(session);

        let mut provider_props = Props::new();
        provider_props.set("defaultColorScheme", ColorScheme::Auto.as_str());
        provider_props.set("theme", Theme::default().to_value());
        let provider = base.container_element(
            Element::new("provider", "provider")
                .props(provider_props)
                .virtual_node(),
        );
        base.push_scope(&provider);

        let app_shell =
            base.container_element(Element::new("appshell", "__appshell__").virtual_node());
        base.push_scope(&app_shell);

        let navbar = base.container_element(Element::new("navbar", "__navbar__").virtual_node());
        let main = base.container_element(Element::new("main", "__main__").virtual_node());
        base.push_scope(&main);
        debug!("render pass root initialized");

        Self {
            base,
            provider,
            app_shell,
            navbar,
            main,
        }
    }

    /// Run `body` with `scope` as the current parent.
    ///
    /// ```
    /// # use pergola_core::Session;
    /// # use pergola_ui::{StackProps, Ui};
    /// # let mut session = Session::new();
    /// # let mut ui = Ui::new(&mut session);
    /// let card = ui.stack(StackProps::default());
    /// ui.scope(&card, |ui| {
    ///     ui.text("Hello", Default::default());
    /// });
    /// ```
    pub fn scope<R>(&mut self, scope: &Scope, body: impl FnOnce(&mut Self) -> R) -> R {
        self.base.push_scope(scope);
        let out = body(self);
        self.base.pop_scope();
        out
    }

    /// The navbar scope, for sidebar content.
    pub fn sidebar(&self) -> Scope {
        self.navbar
    }

    /// Replace the provider theme and merge further provider props.
    pub fn set_provider_props(&mut self, theme: &Theme, extra: Props) {
        let id = self.provider.id();
        if let Some(node) = self.base.tree_mut().get_mut(id) {
            node.element.props.merge(extra);
            node.element.props.set("theme", theme.to_value());
        }
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        let id = self.provider.id();
        if let Some(node) = self.base.tree_mut().get_mut(id) {
            node.element.props.set("defaultColorScheme", scheme.as_str());
        }
    }

    /// Configure the app shell (title bar, logo, navbar sizing).
    pub fn set_app_shell_props(&mut self, config: AppShellProps) {
        let AppShellProps {
            title,
            logo,
            navbar_props,
            extra,
        } = config;
        let id = self.app_shell.id();
        if let Some(node) = self.base.tree_mut().get_mut(id) {
            node.element.props.merge(extra);
            node.element.props.maybe("title", title);
            node.element.props.maybe("logo", logo);
            node.element.props.maybe("navbarProps", navbar_props);
        }
    }

    /// End the pass.
    pub fn finish(self) -> Page {
        self.base.finish()
    }
}

impl<'s> Deref for Ui<'s> {
    type Target = Builder<'s>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for Ui<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

/// Options for [`Ui::set_app_shell_props`].
#[derive(Default)]
pub struct AppShellProps {
    pub title: Option<String>,
    pub logo: Option<String>,
    pub navbar_props: Option<Props>,
    pub extra: Props,
}
