//! Render-pass builder
//!
//! A [`Builder`] owns the state of one render pass: the element tree being
//! constructed, the scope stack naming the current parent, the session
//! borrow backing controlled values, and the handler registry. Each pass is
//! a single synchronous traversal; scope entry and exit are strictly
//! lexical via [`Builder::scope`].
//!
//! The controlled-value helpers (`controlled_input`, `controlled_checkbox`,
//! `controlled_select`, `controlled_multi`, `trigger`) implement the one
//! contract shared by every interactive widget: register an element whose
//! `value`/`checked` prop reflects current session state, bind its key for
//! event dispatch, and return that current value to the caller.

use serde_json::Value;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::key::{self, KeyAllocator};
use crate::options::{wire_options, LabelFormat, OptionItem};
use crate::session::{ChangeHandler, ClickHandler, DispatchError, Event, Handlers};
use crate::{Element, ElementId, ElementTree, Props, Session};

/// Handle to a container element, used to re-enter it as the current parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scope {
    id: ElementId,
}

impl Scope {
    pub fn id(&self) -> ElementId {
        self.id
    }
}

/// State of one render pass.
pub struct Builder<'s> {
    tree: ElementTree,
    stack: SmallVec<[ElementId; 8]>,
    session: &'s mut Session,
    handlers: Handlers,
    keys: KeyAllocator,
}

impl<'s> Builder<'s> {
    pub fn new(session: &'s mut Session) -> Self {
        Self {
            tree: ElementTree::new(),
            stack: SmallVec::new(),
            session,
            handlers: Handlers::new(),
            keys: KeyAllocator::new(),
        }
    }

    /// Register a descriptor as a child of the current scope.
    pub fn create_element(&mut self, element: Element) -> ElementId {
        let parent = self.stack.last().copied();
        if let Some(parent_id) = parent {
            if !element.key.is_empty()
                && self.tree.child_keys(parent_id).contains(&element.key.as_str())
            {
                warn!(key = %element.key, "duplicate sibling key");
            }
        }
        debug!(name = %element.name, key = %element.key, "element created");
        self.tree.insert(element, parent)
    }

    /// Register a descriptor and return a scope handle for its children.
    pub fn container_element(&mut self, element: Element) -> Scope {
        Scope {
            id: self.create_element(element),
        }
    }

    /// Scope handle for an already-created element.
    pub fn scope_of(&self, id: ElementId) -> Scope {
        Scope { id }
    }

    /// Make `scope` the current parent. Prefer [`Builder::scope`]; this is
    /// the raw half used by wrappers that provide their own closure entry.
    pub fn push_scope(&mut self, scope: &Scope) {
        let id = if self.tree.contains(scope.id) {
            scope.id
        } else {
            warn!("entering a scope that is not part of this pass; keeping current parent");
            match self.stack.last() {
                Some(&parent) => parent,
                None => scope.id,
            }
        };
        self.stack.push(id);
    }

    pub fn pop_scope(&mut self) {
        self.stack.pop();
    }

    /// Run `body` with `scope` as the current parent.
    pub fn scope<R>(&mut self, scope: &Scope, body: impl FnOnce(&mut Self) -> R) -> R {
        self.push_scope(scope);
        let out = body(self);
        self.pop_scope();
        out
    }

    pub fn current_parent(&self) -> Option<ElementId> {
        self.stack.last().copied()
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    pub fn session(&self) -> &Session {
        self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        self.session
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    // --- key derivation ----------------------------------------------------

    /// Sequential key for an unlabelled element: `{kind}-{n}`.
    pub fn auto_key(&mut self, kind: &'static str) -> String {
        self.keys.next_auto(kind)
    }

    /// Resolve a labelled widget's key: the explicit key verbatim, or a
    /// label-derived key disambiguated against already-created siblings.
    pub fn widget_key(&mut self, kind: &str, label: &str, explicit: Option<String>) -> String {
        if let Some(key) = explicit {
            return key;
        }
        let base = key::widget_key(kind, label);
        let Some(parent) = self.current_parent() else {
            return base;
        };
        let siblings = self.tree.child_keys(parent);
        if !siblings.contains(&base.as_str()) {
            return base;
        }
        let mut n = 2u32;
        loop {
            let candidate = format!("{base}-{n}");
            if !siblings.contains(&candidate.as_str()) {
                return candidate;
            }
            n += 1;
        }
    }

    // --- controlled values -------------------------------------------------

    /// Value-widget registration: emit the element with its current value
    /// (session state, else `fallback`) and return that value. A null
    /// current value leaves the `value` prop out entirely.
    pub fn controlled_input(
        &mut self,
        name: &'static str,
        key: String,
        mut props: Props,
        fallback: Value,
        on_change: Option<ChangeHandler>,
    ) -> Value {
        let current = self.session.get(&key).cloned().unwrap_or(fallback);
        if !current.is_null() {
            props.set("value", current.clone());
        }
        self.create_element(Element::new(name, key.clone()).props(props));
        self.handlers.bind_change(key, on_change);
        current
    }

    /// Checked-style boolean widget. Unlike other controlled values the
    /// `checked` prop is always written, since an absent flag is ambiguous
    /// with "unchecked".
    pub fn controlled_checkbox(
        &mut self,
        name: &'static str,
        key: String,
        mut props: Props,
        default: bool,
        on_change: Option<ChangeHandler>,
    ) -> bool {
        let current = self
            .session
            .get(&key)
            .and_then(Value::as_bool)
            .unwrap_or(default);
        props.set("checked", current);
        self.create_element(Element::new(name, key.clone()).props(props));
        self.handlers.bind_change(key, on_change);
        current
    }

    /// Single-selection widget over an options list. The options are wired
    /// under `options_attr` (components differ between `options` and
    /// `data`), labels filled in from `format` where missing.
    #[allow(clippy::too_many_arguments)]
    pub fn controlled_select(
        &mut self,
        name: &'static str,
        key: String,
        mut props: Props,
        options: &[OptionItem],
        options_attr: &'static str,
        fallback: Option<String>,
        format: Option<Box<LabelFormat>>,
        on_change: Option<ChangeHandler>,
    ) -> Option<String> {
        props.set(options_attr, wire_options(options, format.as_deref()));
        let current = self
            .session
            .get(&key)
            .and_then(|v| v.as_str().map(str::to_string))
            .or(fallback);
        props.maybe("value", current.clone());
        self.create_element(Element::new(name, key.clone()).props(props));
        self.handlers.bind_change(key, on_change);
        current
    }

    /// Multi-selection widget over an options list; the current value is a
    /// list of selected option values.
    #[allow(clippy::too_many_arguments)]
    pub fn controlled_multi(
        &mut self,
        name: &'static str,
        key: String,
        mut props: Props,
        options: &[OptionItem],
        options_attr: &'static str,
        fallback: Vec<String>,
        format: Option<Box<LabelFormat>>,
        on_change: Option<ChangeHandler>,
    ) -> Vec<String> {
        props.set(options_attr, wire_options(options, format.as_deref()));
        let stored = self.session.get(&key).and_then(Value::as_array).map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect::<Vec<_>>()
        });
        let from_session = stored.is_some();
        let current = stored.unwrap_or(fallback);
        if from_session || !current.is_empty() {
            props.set("value", current.clone());
        }
        self.create_element(Element::new(name, key.clone()).props(props));
        self.handlers.bind_change(key, on_change);
        current
    }

    /// Trigger widget (button-style): consumes this pass's click flag and
    /// returns whether it fired.
    pub fn trigger(
        &mut self,
        name: &'static str,
        key: String,
        props: Props,
        virtual_node: bool,
        on_click: Option<ClickHandler>,
    ) -> bool {
        let clicked = self.session.take_trigger(&key);
        let mut element = Element::new(name, key.clone()).props(props);
        if virtual_node {
            element = element.virtual_node();
        }
        self.create_element(element);
        self.handlers.bind_trigger(key, on_click);
        clicked
    }

    /// Overlay-style element (alert, dialog, drawer): returns the content
    /// scope and binds the key so a close event can be dispatched to it.
    pub fn dismissible_element(
        &mut self,
        element: Element,
        on_close: Option<ClickHandler>,
    ) -> Scope {
        let key = element.key.clone();
        let scope = self.container_element(element);
        self.handlers.bind_trigger(key, on_close);
        scope
    }

    /// End the pass, yielding the finished tree and the handler registry.
    pub fn finish(self) -> Page {
        Page {
            tree: self.tree,
            handlers: self.handlers,
        }
    }
}

/// Output of one render pass: the element tree to stream to the front end
/// and the handler registry for event dispatch until the next pass.
pub struct Page {
    tree: ElementTree,
    handlers: Handlers,
}

impl Page {
    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Serialize the whole tree to its nested wire form.
    pub fn to_value(&self) -> Value {
        match self.tree.root() {
            Some(root) => self.tree.to_value(root),
            None => Value::Null,
        }
    }

    /// Apply an incoming front-end event; see [`Handlers::dispatch`].
    pub fn dispatch(
        &mut self,
        key: &str,
        event: Event,
        session: &mut Session,
    ) -> Result<(), DispatchError> {
        self.handlers.dispatch(key, event, session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root_scope(builder: &mut Builder) -> Scope {
        let scope = builder.container_element(Element::new("main", "__main__").virtual_node());
        builder.push_scope(&scope);
        scope
    }

    #[test]
    fn test_controlled_input_prefers_session_value() {
        let mut session = Session::new();
        session.set("textinput-name", "Ada");
        let mut builder = Builder::new(&mut session);
        root_scope(&mut builder);

        let value = builder.controlled_input(
            "textinput",
            "textinput-name".into(),
            Props::new(),
            json!("default"),
            None,
        );
        assert_eq!(value, json!("Ada"));
    }

    #[test]
    fn test_controlled_input_omits_null_value_prop() {
        let mut session = Session::new();
        let mut builder = Builder::new(&mut session);
        let root = root_scope(&mut builder);

        builder.controlled_input(
            "colorinput",
            "colorinput-accent".into(),
            Props::new(),
            Value::Null,
            None,
        );
        let child = builder.tree().children(root.id())[0];
        let node = builder.tree().get(child).unwrap();
        assert!(!node.element.props.contains("value"));
    }

    #[test]
    fn test_controlled_checkbox_always_writes_checked() {
        let mut session = Session::new();
        let mut builder = Builder::new(&mut session);
        let root = root_scope(&mut builder);

        let value =
            builder.controlled_checkbox("checkbox", "checkbox-a".into(), Props::new(), false, None);
        assert!(!value);
        let child = builder.tree().children(root.id())[0];
        let node = builder.tree().get(child).unwrap();
        assert_eq!(node.element.props.get("checked"), Some(&json!(false)));
    }

    #[test]
    fn test_trigger_consumes_click_flag() {
        let mut session = Session::new();
        session.fire("button-save");
        let mut builder = Builder::new(&mut session);
        root_scope(&mut builder);

        assert!(builder.trigger("button", "button-save".into(), Props::new(), false, None));
        assert!(!builder.trigger("button", "button-save".into(), Props::new(), false, None));
    }

    #[test]
    fn test_widget_key_disambiguates_derived_siblings() {
        let mut session = Session::new();
        let mut builder = Builder::new(&mut session);
        root_scope(&mut builder);

        let first = builder.widget_key("checkbox", "Same label", None);
        builder.create_element(Element::new("checkbox", first.clone()));
        let second = builder.widget_key("checkbox", "Same label", None);
        assert_eq!(first, "checkbox-same-label");
        assert_eq!(second, "checkbox-same-label-2");
    }

    #[test]
    fn test_scope_restores_parent() {
        let mut session = Session::new();
        let mut builder = Builder::new(&mut session);
        let root = root_scope(&mut builder);

        let inner = builder.container_element(Element::new("stack", "stack-1"));
        builder.scope(&inner, |b| {
            b.create_element(Element::new("text", "text-1"));
        });
        builder.create_element(Element::new("text", "text-2"));

        assert_eq!(builder.tree().child_keys(inner.id()), vec!["text-1"]);
        assert_eq!(builder.tree().child_keys(root.id()), vec!["stack-1", "text-2"]);
    }
}
