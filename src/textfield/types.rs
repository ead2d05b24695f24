//! Core types for the textfield component.

use crate::validation::ValidationResult;
use crate::value::FieldValue;
use bubbletea_rs::Msg;

/// An outbound notification from a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The working value changed through typing, clearing or normalization.
    ValueUpdate(FieldValue),
    /// A finalized value: on blur after a change, or on enter.
    Commit(FieldValue),
    /// The field gained focus.
    Focus,
    /// The field lost focus.
    Blur,
    /// Rules were evaluated.
    Validation(ValidationResult),
}

/// Receives notifications as they are emitted. Listeners must be `Send`
/// since the field itself is moved into the bubbletea-rs runtime.
pub type Listener = Box<dyn FnMut(&Notification) + Send>;

/// A parameterless callback, used for the clear interceptor and the
/// append action.
pub type Callback = Box<dyn FnMut() + Send>;

/// The notifications produced while handling one message in `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationsMsg(pub Vec<Notification>);

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<NotificationsMsg> for Msg {
    fn from(msg: NotificationsMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// The kind of value a field edits.
///
/// Date, time, color and file inputs always show something, so their
/// label stays in the active position even when the value is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    /// Plain text. This is the default.
    #[default]
    Text,
    /// Text rendered with the echo character.
    Password,
    /// An email address.
    Email,
    /// A number.
    Number,
    /// A search query.
    Search,
    /// A telephone number.
    Tel,
    /// A URL.
    Url,
    /// A color.
    Color,
    /// A file.
    File,
    /// A time of day.
    Time,
    /// A calendar date.
    Date,
    /// A local date and time.
    DatetimeLocal,
    /// A week.
    Week,
    /// A month.
    Month,
}

impl InputType {
    /// Whether the label is active for this type regardless of value.
    pub fn is_dirty_type(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::File
                | Self::Time
                | Self::Date
                | Self::DatetimeLocal
                | Self::Week
                | Self::Month
        )
    }
}

/// Character counter configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Counter {
    /// No counter. This is the default.
    #[default]
    Off,
    /// Count against the policy's character limit, if any.
    CharLimit,
    /// Count against a fixed maximum.
    Max(usize),
}
