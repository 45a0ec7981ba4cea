//! pergola_core
//!
//! Runtime primitives for the Pergola component-builder: element
//! descriptors and the pass-local element tree, the builder-scope stack,
//! session state with controlled-value plumbing, handler registration and
//! event dispatch, and key derivation.
//!
//! A render pass is one synchronous traversal: the embedding application
//! creates a [`Builder`] over its [`Session`], runs the view function, and
//! [`Builder::finish`]es into a [`Page`]: the serialized tree goes to the
//! front end, the handler registry services events until the next pass.
//!
//! Widget catalogues (see `pergola_ui`) are layered on top of this crate;
//! nothing here knows about concrete widget kinds.

mod builder;
mod element;
pub mod key;
mod options;
mod props;
mod session;
mod tree;

pub use builder::{Builder, Page, Scope};
pub use element::Element;
pub use options::{
    collect_options, first_option_value, wire_options, LabelFormat, OptionGroup, OptionItem,
    SelectOption,
};
pub use props::Props;
pub use session::{ChangeHandler, ClickHandler, DispatchError, Event, Handlers, Session};
pub use tree::{ElementId, ElementNode, ElementTree};

/// Wire value type for props and session state.
pub use serde_json::Value;
