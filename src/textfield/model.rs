//! Core model implementation for the textfield component.

use super::keymap::{default_key_map, KeyMap};
use super::policy::Policy;
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{Callback, Counter, InputType, Listener, Notification, PasteErrMsg};
use crate::mask::{Mask, MaskError};
use crate::runeutil::Sanitizer;
use crate::validation::ValidationResult;
use crate::value::FieldValue;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// A single-line form field with masking, validation and change tracking.
///
/// The model keeps an internal working value in sync with a value owned by
/// the caller. The caller pushes its value in with
/// [`set_external_value`](Model::set_external_value) and reports focus,
/// blur and keystrokes; the model answers with [`Notification`]s delivered
/// to listeners registered with [`subscribe`](Model::subscribe).
///
/// Once the user types into a focused field, local edits win over external
/// updates until the field loses focus. A commit is emitted at most once per
/// focus/blur cycle, and only when the value actually changed, unless the
/// user presses enter.
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::textfield::{new, Notification, Policy};
/// use bubbletea_textfield::validation::required;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
///
/// let mut field = new();
/// field.set_policy(Policy::new().with_mask("#-#").with_rule(required("Required")));
/// field.subscribe(move |n| sink.lock().unwrap().push(n.clone()));
/// field.mount();
/// assert!(!field.valid());
///
/// field.notify_focus_gained();
/// field.notify_keystroke("33", false);
/// field.notify_focus_lost();
///
/// assert_eq!(field.display_text(), "3-3");
/// assert!(seen.lock().unwrap().contains(&Notification::Commit("33".into())));
/// ```
pub struct Model {
    /// Prompt is the prompt to display before the value.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style of the value as it's being typed.
    pub text_style: Style,

    /// Placeholder shown while the value is empty.
    pub placeholder: Option<String>,
    /// Style for the placeholder text.
    pub placeholder_style: Style,

    /// Label shown above the field.
    pub label: Option<String>,
    /// Style for the label.
    pub label_style: Style,
    /// Hide the label once it would move to the active position.
    pub single_line: bool,

    /// Fixed text before the value.
    pub prefix: Option<String>,
    /// Fixed text after the value.
    pub suffix: Option<String>,

    /// Style for the counter.
    pub counter_style: Style,
    /// Style for the error message.
    pub error_style: Style,

    /// Width of the value area between prefix and suffix; 0 means no
    /// padding.
    pub width: usize,
    /// Character used to echo password input.
    pub echo_character: char,
    /// Kind of value edited.
    pub input_type: InputType,
    /// Counter configuration.
    pub counter: Counter,
    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    pub(super) policy: Policy,
    pub(super) mask: Option<Mask>,
    pub(super) mask_error: Option<MaskError>,
    pub(super) sanitizer: Sanitizer,

    /// Last value pushed in by the caller.
    pub(super) external_value: FieldValue,
    /// Working value, masked or unmasked per policy.
    pub(super) internal_value: FieldValue,
    /// Masked text shown to the user.
    pub(super) display: String,
    /// Value at the last focus, commit or accepted external update.
    pub(super) snapshot: FieldValue,

    pub(super) focus: bool,
    pub(super) should_validate: bool,
    pub(super) internal_change: bool,
    pub(super) bad_input: bool,
    pub(super) validation: ValidationResult,

    pub(super) mounted: bool,
    pub(super) element_attached: bool,

    pub(super) listeners: Vec<Listener>,
    /// Collects notifications while `update` runs.
    pub(super) captured: Option<Vec<Notification>>,
    pub(super) clear_interceptor: Option<Callback>,
    pub(super) append_callback: Option<Callback>,
}

/// Creates a new, unmounted text field with the default policy.
///
/// Configure it, register listeners, then call [`Model::mount`].
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: None,
        placeholder_style: Style::new().foreground(Color::from("240")),
        label: None,
        label_style: Style::new().bold(true),
        single_line: false,
        prefix: None,
        suffix: None,
        counter_style: Style::new().foreground(Color::from("240")),
        error_style: Style::new().foreground(Color::from("196")),
        width: 0,
        echo_character: '*',
        input_type: InputType::Text,
        counter: Counter::Off,
        key_map: default_key_map(),
        policy: Policy::default(),
        mask: None,
        mask_error: None,
        sanitizer: Sanitizer::default(),
        external_value: FieldValue::null(),
        internal_value: FieldValue::null(),
        display: String::new(),
        snapshot: FieldValue::null(),
        focus: false,
        should_validate: false,
        internal_change: false,
        bad_input: false,
        validation: ValidationResult::default(),
        mounted: false,
        element_attached: true,
        listeners: Vec::new(),
        captured: None,
        clear_interceptor: None,
        append_callback: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Creates a command that retrieves text from the system clipboard.
///
/// The command resolves to a `PasteMsg` with the clipboard contents, or a
/// `PasteErrMsg` when the clipboard cannot be read.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let mut model = new();
        model.mount();
        (model, std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
