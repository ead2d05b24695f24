#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-textfield/")]

//! # bubbletea-textfield
//!
//! A form text field for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: value synchronization with an owning form, input masks,
//! validation rules and exactly-once change notifications.
//!
//! ## Overview
//!
//! The field is built from three parts:
//!
//! - [`mask`]: a pure transform from raw text and a mask pattern to masked
//!   and unmasked text, with named presets such as `date` and `phone`.
//! - [`validation`]: an ordered rule runner that always evaluates every
//!   rule and collects every message.
//! - [`textfield`]: the state machine that owns the working value, focus
//!   and validation flags, and decides when to notify listeners.
//!
//! ## Focus Management
//!
//! The field implements the [`Component`] trait:
//!
//! ```rust
//! use bubbletea_textfield::prelude::*;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _ = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut field = textfield_new();
//! field.mount();
//! handle_focus(&mut field);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_textfield::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     email: TextField,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut email = textfield_new();
//!         email.label = Some("Email".to_string());
//!         email.set_policy(Policy::new().with_rule(required("Required")));
//!         email.mount();
//!         email.focus();
//!         (Self { email }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(NotificationsMsg(events)) = msg.downcast_ref::<NotificationsMsg>() {
//!             for event in events {
//!                 if let Notification::Commit(value) = event {
//!                     let _ = value; // save it
//!                 }
//!             }
//!             return None;
//!         }
//!         self.email.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.email.view()
//!     }
//! }
//! ```

pub mod key;
pub mod mask;
pub mod runeutil;
pub mod textfield;
pub mod validation;
pub mod value;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command for
///   initialization.
/// - `blur()` unsets the focused state.
/// - `focused()` reports the current focus state.
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use key::{matches_binding, Binding, KeyPress};
pub use mask::{Mask, MaskError, MaskSpec, Masked, Preset};
pub use textfield::{
    default_key_map as textfield_default_key_map, new as textfield_new, paste, Counter,
    InputType, KeyMap as TextFieldKeyMap, Model as TextField, Notification, NotificationsMsg,
    PasteErrMsg, PasteMsg, Policy,
};
pub use validation::{Rule, Rules, ValidationResult};
pub use value::FieldValue;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_textfield::prelude::*;
///
/// let mut field = textfield_new();
/// field.set_policy(Policy::new().with_mask("#-#"));
/// field.set_external_value("44");
/// field.mount();
/// assert_eq!(field.display_text(), "4-4");
/// ```
pub mod prelude {
    pub use crate::key::{matches_binding, Binding, KeyPress};
    pub use crate::mask::{Mask, MaskSpec, Preset};
    pub use crate::textfield::{
        default_key_map as textfield_default_key_map, new as textfield_new, Counter, InputType,
        KeyMap as TextFieldKeyMap, Model as TextField, Notification, NotificationsMsg, Policy,
    };
    pub use crate::validation::{max_length, min_length, required, rule, Rule, Rules};
    pub use crate::value::FieldValue;
    pub use crate::Component;
}
