//! Behaviour configuration for the textfield component.

use crate::mask::MaskSpec;
use crate::validation::{Rule, Rules};
use serde::{Deserialize, Serialize};

/// Flags and settings that alter how a text field reacts to events.
///
/// Everything except the rule set can be loaded from configuration; rules
/// are closures and are attached in code.
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::textfield::Policy;
/// use bubbletea_textfield::validation::required;
///
/// let policy = Policy::new()
///     .with_mask("date")
///     .with_return_masked_value(true)
///     .with_rule(required("Required"));
/// assert!(policy.return_masked_value);
///
/// let loaded: Policy = serde_json::from_str(r##"{ "clearable": true, "mask": "#-#" }"##).unwrap();
/// assert!(loaded.clearable);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Start validating only after the first blur, and validate on every
    /// blur instead of on every change.
    pub validate_on_blur: bool,
    /// Emit the masked text instead of the unmasked text.
    pub return_masked_value: bool,
    /// The mask, if any.
    pub mask: Option<MaskSpec>,
    /// Append literals that follow the last filled mask slot.
    pub fill_mask_blanks: bool,
    /// Allow the clear action while a value is present.
    pub clearable: bool,
    /// Ignore input and clicks.
    pub disabled: bool,
    /// Ignore input but allow focus.
    pub readonly: bool,
    /// Focus the field when it is mounted.
    pub autofocus: bool,
    /// Maximum number of user-perceived characters a typed working value may
    /// hold. Mask literals count only when the masked value is returned.
    pub char_limit: Option<usize>,
    /// Validation rules, evaluated in order.
    #[serde(skip)]
    pub rules: Rules,
}

impl Policy {
    /// The default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`Policy::validate_on_blur`].
    pub fn with_validate_on_blur(mut self, on: bool) -> Self {
        self.validate_on_blur = on;
        self
    }

    /// Sets [`Policy::return_masked_value`].
    pub fn with_return_masked_value(mut self, on: bool) -> Self {
        self.return_masked_value = on;
        self
    }

    /// Sets the mask from a preset name or pattern.
    pub fn with_mask(mut self, mask: impl Into<MaskSpec>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    /// Sets [`Policy::fill_mask_blanks`].
    pub fn with_fill_mask_blanks(mut self, on: bool) -> Self {
        self.fill_mask_blanks = on;
        self
    }

    /// Sets [`Policy::clearable`].
    pub fn with_clearable(mut self, on: bool) -> Self {
        self.clearable = on;
        self
    }

    /// Sets [`Policy::disabled`].
    pub fn with_disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    /// Sets [`Policy::readonly`].
    pub fn with_readonly(mut self, on: bool) -> Self {
        self.readonly = on;
        self
    }

    /// Sets [`Policy::autofocus`].
    pub fn with_autofocus(mut self, on: bool) -> Self {
        self.autofocus = on;
        self
    }

    /// Sets [`Policy::char_limit`].
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    /// Replaces the rule set.
    pub fn with_rules(mut self, rules: impl Into<Rules>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Whether the value-shaping settings differ from `other`'s.
    pub(super) fn shaping_differs(&self, other: &Policy) -> bool {
        self.mask != other.mask
            || self.fill_mask_blanks != other.fill_mask_blanks
            || self.return_masked_value != other.return_masked_value
    }
}
