//! pergola_ui
//!
//! The Pergola widget catalogue: layout containers, inputs, selectors,
//! overlays, tables, navigation, and the tabs/accordion composites, built
//! on the `pergola_core` runtime primitives.
//!
//! Every constructor follows one convention: a fixed set of optional
//! attributes (a props struct with `Default` plus an `extra` passthrough
//! map) is translated into the camelCase prop map the front-end component
//! expects (unset attributes are omitted entirely), and the element is
//! registered under a key that is either caller-supplied or derived from
//! the widget kind and its label. Interactive widgets return the current
//! session value (controlled components); container-like widgets return a
//! [`pergola_core::Scope`] to be filled through [`Ui::scope`].
//!
//! ```
//! use pergola_core::Session;
//! use pergola_ui::{ButtonProps, StackProps, TextInputProps, Ui};
//!
//! let mut session = Session::new();
//! let mut ui = Ui::new(&mut session);
//!
//! let form = ui.stack(StackProps::default());
//! let name = ui.scope(&form, |ui| {
//!     let name = ui.text_input("Name", TextInputProps::default());
//!     ui.button("Save", ButtonProps::default());
//!     name
//! });
//! assert_eq!(name, "");
//!
//! let page = ui.finish();
//! let wire = page.to_value(); // nested {name, key, props, virtual, children}
//! # let _ = wire;
//! ```
//!
//! Change and click callbacks are plain boxed closures in the props
//! structs (`on_change: Some(Box::new(|value| ...))`); they run when the
//! embedding application dispatches the matching event through
//! [`pergola_core::Page::dispatch`].

mod layout;
mod shell;
mod theme;
mod widgets;

pub use layout::{
    AffixProps, BoxProps, ContainerProps, FieldsetProps, FlexProps, GridColProps, GridProps,
    GroupProps, PaperProps, ScrollAreaProps, SimpleGridProps, SpaceProps, SpoilerProps, StackProps,
};
pub use shell::{AppShellProps, Ui};
pub use theme::{ColorScheme, Theme, ThemeError};
pub use widgets::accordion::{AccordionItemProps, AccordionProps, ExpanderProps};
pub use widgets::button::{
    icon, ActionIconGroupProps, ActionIconGroupSectionProps, ActionIconProps, ButtonProps,
};
pub use widgets::checkbox::{
    CheckboxGroupProps, CheckboxProps, ChipGroupMultipleProps, ChipGroupProps, ChipProps,
    SwitchProps,
};
pub use widgets::datetime::{
    parse_date_value, parse_datetime_value, parse_time_value, DateInput, DatePickerInputProps,
    DatePickerProps, DateSelection, DateTimeInput, DateTimePickerProps, DatesInput, TimeInput,
    TimeInputProps, TimePickerProps,
};
pub use widgets::display::{ImageProps, NumberFormatterProps, TextProps, TitleProps};
pub use widgets::feedback::{AlertProps, NotificationProps, ProgressProps};
pub use widgets::nav::{AnchorProps, NavLinkProps};
pub use widgets::overlay::{DialogProps, DrawerProps, ModalProps};
pub use widgets::select::{
    AutocompleteProps, MultiSelectProps, NativeSelectProps, RadioGroupProps, SegmentedControlProps,
    SelectProps, TagsInputProps,
};
pub use widgets::slider::{RangeSliderProps, RatingProps, SliderProps};
pub use widgets::table::{TableProps, TableScrollContainerProps, TableSectionProps};
pub use widgets::tabs::{TabSpec, TabsProps};
pub use widgets::text_input::{
    ColorInputProps, NumberInputProps, PasswordInputProps, TextInputProps, TextareaProps,
};

/// Common imports for application code.
pub mod prelude {
    pub use pergola_core::{
        props, Element, Event, OptionGroup, Page, Props, Scope, SelectOption, Session, Value,
    };

    pub use crate::layout::*;
    pub use crate::shell::{AppShellProps, Ui};
    pub use crate::theme::{ColorScheme, Theme};
    pub use crate::widgets::accordion::*;
    pub use crate::widgets::button::*;
    pub use crate::widgets::checkbox::*;
    pub use crate::widgets::datetime::*;
    pub use crate::widgets::display::*;
    pub use crate::widgets::feedback::*;
    pub use crate::widgets::nav::*;
    pub use crate::widgets::overlay::*;
    pub use crate::widgets::select::*;
    pub use crate::widgets::slider::*;
    pub use crate::widgets::table::*;
    pub use crate::widgets::tabs::*;
    pub use crate::widgets::text_input::*;
}
