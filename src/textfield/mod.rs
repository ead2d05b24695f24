//! Text field component for Bubble Tea applications.
//!
//! A text field keeps a working value in sync with a value owned by its
//! caller, shapes it with an optional mask, runs validation rules, and
//! reports edits through notifications.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_textfield::textfield::{new, Policy};
//! use bubbletea_textfield::validation::required;
//!
//! let mut field = new();
//! field.label = Some("Birthday".to_string());
//! field.set_policy(
//!     Policy::new()
//!         .with_mask("date")
//!         .with_return_masked_value(true)
//!         .with_rule(required("Required")),
//! );
//! field.set_external_value("12311999");
//! field.mount();
//!
//! assert_eq!(field.value(), "12/31/1999");
//! assert!(field.valid());
//! ```
//!
//! # Lifecycle
//!
//! 1. Build with [`new`], configure the [`Policy`] and presentation fields.
//! 2. Register listeners with [`Model::subscribe`].
//! 3. Call [`Model::mount`]; the rules run once and a `Validation`
//!    notification is emitted before any interaction.
//! 4. Feed events: [`Model::set_external_value`],
//!    [`Model::notify_focus_gained`], [`Model::notify_keystroke`],
//!    [`Model::notify_focus_lost`], [`Model::notify_enter_key`],
//!    [`Model::request_clear`], or let [`Model::update`] translate
//!    bubbletea-rs key messages.

pub mod keymap;
pub mod methods;
pub mod model;
pub mod policy;
pub mod state;
pub mod types;
pub mod update;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export main types and functions for public API
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use policy::Policy;
pub use types::{
    Callback, Counter, InputType, Listener, Notification, NotificationsMsg, PasteErrMsg, PasteMsg,
};
