//! Read-only accessors and derived state.

use super::model::Model;
use super::types::Counter;
use crate::mask::MaskError;
use crate::validation::ValidationResult;
use crate::value::FieldValue;
use unicode_segmentation::UnicodeSegmentation;

impl Model {
    /// The working value.
    pub fn value(&self) -> &FieldValue {
        &self.internal_value
    }

    /// The text shown in the field, with mask literals.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Whether rule errors are surfaced to the user yet.
    pub fn should_validate(&self) -> bool {
        self.should_validate
    }

    /// Whether a local edit is in flight.
    pub fn internal_change_pending(&self) -> bool {
        self.internal_change
    }

    /// The element's last reported "unparseable input" signal.
    pub fn bad_input(&self) -> bool {
        self.bad_input
    }

    /// Whether [`mount`](Model::mount) has run.
    pub fn mounted(&self) -> bool {
        self.mounted
    }

    /// The last validation result.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Whether the last validation passed.
    pub fn valid(&self) -> bool {
        self.validation.valid
    }

    /// Messages from the last validation.
    pub fn errors(&self) -> &[String] {
        &self.validation.errors
    }

    /// Whether any rule failed.
    pub fn has_error(&self) -> bool {
        !self.validation.valid
    }

    /// Whether errors should be shown: validation is on and a rule failed.
    pub fn shows_error(&self) -> bool {
        self.should_validate && self.has_error()
    }

    /// Why the configured mask was rejected, if it was.
    pub fn mask_error(&self) -> Option<&MaskError> {
        self.mask_error.as_ref()
    }

    /// The field holds text or the element reports bad input.
    pub fn is_dirty(&self) -> bool {
        !self.internal_value.is_empty() || self.bad_input
    }

    /// The label sits in the active position.
    pub fn is_label_active(&self) -> bool {
        self.is_dirty() || self.input_type.is_dirty_type()
    }

    /// The label is raised: focused or active.
    pub fn label_value(&self) -> bool {
        self.focus || self.is_label_active()
    }

    /// Whether the label is rendered at all.
    ///
    /// Single-line fields drop the label once it would be raised or when a
    /// placeholder takes its place.
    pub fn shows_label(&self) -> bool {
        if self.label.as_deref().map_or(true, str::is_empty) {
            return false;
        }
        !(self.single_line && (self.label_value() || self.placeholder.is_some()))
    }

    /// Number of user-perceived characters in the value.
    pub fn counter_value(&self) -> usize {
        self.internal_value.as_display().graphemes(true).count()
    }

    /// Counter text such as `"3 / 25"`, or `None` when the counter is off.
    pub fn counter_text(&self) -> Option<String> {
        let n = self.counter_value();
        let max = match self.counter {
            Counter::Off => return None,
            Counter::CharLimit => self.policy.char_limit,
            Counter::Max(max) => Some(max),
        };
        Some(match max {
            Some(max) => format!("{} / {}", n, max),
            None => n.to_string(),
        })
    }
}
