//! Session state and event dispatch
//!
//! Session state is the ambient storage behind every controlled widget: a
//! value map keyed by element key that survives across render passes within
//! one logical session, plus per-pass trigger flags for click-style events.
//! The library only reads and writes it by key; locking, persistence, and
//! transport belong to the embedding application.
//!
//! During a pass every interactive widget binds its key into a [`Handlers`]
//! registry. When an event arrives from the front end, the host calls
//! [`Handlers::dispatch`], which writes the payload into session state (or
//! sets the trigger flag) and invokes the widget's callback if one was
//! registered, then starts the next render pass.

use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Change callback, invoked with the incoming wire value.
pub type ChangeHandler = Box<dyn FnMut(&Value)>;

/// Click callback.
pub type ClickHandler = Box<dyn FnMut()>;

/// Per-session widget state, keyed by element key.
#[derive(Default)]
pub struct Session {
    values: FxHashMap<String, Value>,
    triggers: FxHashSet<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        debug!(%key, "session value updated");
        self.values.insert(key, value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Mark a trigger (click-style) event for `key`. Consumed by the next
    /// pass that reads it.
    pub fn fire(&mut self, key: impl Into<String>) {
        self.triggers.insert(key.into());
    }

    /// Consume the trigger flag for `key`.
    pub fn take_trigger(&mut self, key: &str) -> bool {
        self.triggers.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An event arriving from the front end for one element key.
pub enum Event {
    /// A value change; the payload is the new wire value.
    Change(Value),
    /// A click / activation.
    Click,
}

enum Binding {
    Change(Option<ChangeHandler>),
    Trigger(Option<ClickHandler>),
}

/// Dispatch failures surfaced to the embedding application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The event names a key no interactive element bound this pass.
    #[error("no interactive element is bound to key `{0}`")]
    UnknownKey(String),
    /// The event kind does not match the element bound to the key
    /// (e.g. a click sent to a value input).
    #[error("event kind does not match the element bound to key `{0}`")]
    KindMismatch(String),
}

/// Registry of the interactive elements bound during one render pass.
#[derive(Default)]
pub struct Handlers {
    bindings: FxHashMap<String, Binding>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value widget's key, with an optional change callback.
    pub fn bind_change(&mut self, key: impl Into<String>, handler: Option<ChangeHandler>) {
        self.bindings.insert(key.into(), Binding::Change(handler));
    }

    /// Bind a trigger widget's key, with an optional click callback.
    pub fn bind_trigger(&mut self, key: impl Into<String>, handler: Option<ClickHandler>) {
        self.bindings.insert(key.into(), Binding::Trigger(handler));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Apply an incoming event: update session state for `key`, then invoke
    /// the bound callback if one was registered.
    pub fn dispatch(
        &mut self,
        key: &str,
        event: Event,
        session: &mut Session,
    ) -> Result<(), DispatchError> {
        let Some(binding) = self.bindings.get_mut(key) else {
            warn!(%key, "dropping event for unbound key");
            return Err(DispatchError::UnknownKey(key.to_string()));
        };
        match (binding, event) {
            (Binding::Change(handler), Event::Change(value)) => {
                session.set(key, value.clone());
                if let Some(handler) = handler {
                    handler(&value);
                }
                Ok(())
            }
            (Binding::Trigger(handler), Event::Click) => {
                session.fire(key);
                if let Some(handler) = handler {
                    handler();
                }
                Ok(())
            }
            _ => Err(DispatchError::KindMismatch(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_change_updates_session_and_runs_handler() {
        let mut session = Session::new();
        let mut handlers = Handlers::new();
        let seen = Rc::new(Cell::new(false));
        let seen_inner = seen.clone();
        handlers.bind_change(
            "textinput-name",
            Some(Box::new(move |v| seen_inner.set(v == &json!("Ada")))),
        );

        handlers
            .dispatch("textinput-name", Event::Change(json!("Ada")), &mut session)
            .unwrap();
        assert_eq!(session.get("textinput-name"), Some(&json!("Ada")));
        assert!(seen.get());
    }

    #[test]
    fn test_dispatch_click_sets_trigger_once() {
        let mut session = Session::new();
        let mut handlers = Handlers::new();
        handlers.bind_trigger("button-save", None);

        handlers
            .dispatch("button-save", Event::Click, &mut session)
            .unwrap();
        assert!(session.take_trigger("button-save"));
        assert!(!session.take_trigger("button-save"));
    }

    #[test]
    fn test_dispatch_unknown_key_errors() {
        let mut session = Session::new();
        let mut handlers = Handlers::new();
        let err = handlers
            .dispatch("ghost", Event::Click, &mut session)
            .unwrap_err();
        assert_eq!(err, DispatchError::UnknownKey("ghost".into()));
    }

    #[test]
    fn test_dispatch_kind_mismatch_errors() {
        let mut session = Session::new();
        let mut handlers = Handlers::new();
        handlers.bind_change("slider-volume", None);
        let err = handlers
            .dispatch("slider-volume", Event::Click, &mut session)
            .unwrap_err();
        assert_eq!(err, DispatchError::KindMismatch("slider-volume".into()));
    }
}
