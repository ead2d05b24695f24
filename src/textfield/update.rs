//! bubbletea-rs message handling for the textfield.

use super::model::{paste, Model};
use super::types::{Notification, NotificationsMsg, PasteErrMsg, PasteMsg};
use crate::key::matches_binding;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

impl Model {
    /// Processes a message while the field is focused.
    ///
    /// Key presses and paste messages are turned into the field's
    /// transitions. Notifications emitted while handling `msg` go to the
    /// listeners as usual and are also returned as a command resolving to
    /// a [`NotificationsMsg`], so a parent model can react in its own
    /// `update`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_textfield::textfield::new;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut field = new();
    /// field.mount();
    /// field.focus();
    ///
    /// field.update(Box::new(KeyMsg { key: KeyCode::Char('h'), modifiers: KeyModifiers::NONE }));
    /// assert_eq!(field.value(), "h");
    /// ```
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if !self.focus {
            return None;
        }

        self.captured = Some(Vec::new());
        let mut cmd = None;

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            cmd = self.handle_key(key_msg);
        } else if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            let text = self.sanitizer.sanitize(&paste_msg.0);
            self.insert_text(&text);
        } else if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            log::warn!("textfield: {}", paste_err.0);
        }

        let events = self.captured.take().unwrap_or_default();
        if cmd.is_some() || events.is_empty() {
            return cmd;
        }
        Some(notifications_cmd(events))
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        self.notify_key_down();

        if matches_binding(key_msg, &self.key_map.commit) {
            self.notify_enter_key();
        } else if matches_binding(key_msg, &self.key_map.clear) {
            self.request_clear();
        } else if matches_binding(key_msg, &self.key_map.paste) {
            return Some(paste());
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            let raw = self.backspaced();
            self.notify_keystroke(&raw, false);
        } else if matches_binding(key_msg, &self.key_map.delete_line) {
            self.notify_keystroke("", false);
        } else if let KeyCode::Char(ch) = key_msg.key {
            // Shift is encoded in the char itself.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_text(&ch.to_string());
            }
        }
        None
    }

    fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let raw = format!("{}{}", self.display, text);
        self.notify_keystroke(&raw, false);
    }

    /// The raw text after deleting the last entered character. With a mask
    /// this drops the last slot character along with any literals after it.
    fn backspaced(&self) -> String {
        match &self.mask {
            Some(mask) => {
                let mut unmasked = mask
                    .apply_with(&self.display, self.policy.fill_mask_blanks)
                    .unmasked;
                unmasked.pop();
                unmasked
            }
            None => {
                let mut graphemes: Vec<&str> = self.display.graphemes(true).collect();
                graphemes.pop();
                graphemes.concat()
            }
        }
    }
}

fn notifications_cmd(events: Vec<Notification>) -> Cmd {
    Box::pin(async move { Some(Box::new(NotificationsMsg(events)) as Msg) })
}
