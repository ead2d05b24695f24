//! Value synchronization: the transitions of the textfield state machine.

use super::model::Model;
use super::policy::Policy;
use super::types::Notification;
use crate::mask::MaskSpec;
use crate::validation::{run, Rules};
use crate::value::FieldValue;
use crate::Component;
use bubbletea_rs::Cmd;
use unicode_segmentation::UnicodeSegmentation;

impl Model {
    /// Registers a listener for every notification the field emits.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Notification) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Registers a callback that replaces the built-in clear action.
    pub fn set_clear_interceptor<F>(&mut self, f: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.clear_interceptor = Some(Box::new(f));
    }

    /// Registers the callback run by [`click_append`](Model::click_append).
    pub fn set_append_callback<F>(&mut self, f: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.append_callback = Some(Box::new(f));
    }

    pub(super) fn emit(&mut self, notification: Notification) {
        log::trace!("textfield: {:?}", notification);
        for listener in self.listeners.iter_mut() {
            listener(&notification);
        }
        if let Some(captured) = self.captured.as_mut() {
            captured.push(notification);
        }
    }

    /// Seeds the field from the external value and runs the rules once.
    ///
    /// If the mask reshapes the external value, the reshaped value is
    /// emitted as a `ValueUpdate`. Mounting twice has no effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let external = self.external_value.clone();
        let (internal, display) = self.conform(&external);
        self.internal_value = internal;
        self.display = display;
        self.snapshot = self.internal_value.clone();
        if self.internal_value != external {
            self.emit(Notification::ValueUpdate(self.internal_value.clone()));
        }

        self.run_validation();

        if self.policy.autofocus {
            self.focus();
        }
    }

    /// Pushes the caller's value into the field.
    ///
    /// Ignored while the field is focused with a local edit pending, which
    /// stops the field's own emitted value from echoing back over newer
    /// typing.
    pub fn set_external_value(&mut self, value: impl Into<FieldValue>) {
        let value = value.into();
        self.external_value = value.clone();
        if !self.mounted {
            return;
        }
        if self.focus && self.internal_change {
            log::debug!("textfield: external value ignored during local edit");
            return;
        }

        let (internal, display) = self.conform(&value);
        let changed = internal != self.internal_value;
        self.internal_value = internal;
        self.display = display;
        self.snapshot = self.internal_value.clone();

        if self.internal_value != value {
            self.emit(Notification::ValueUpdate(self.internal_value.clone()));
        }
        self.after_value_change(changed);
    }

    /// Records that a key went down inside the field.
    pub fn notify_key_down(&mut self) {
        self.internal_change = true;
    }

    /// Applies the editable element's new raw text.
    ///
    /// `bad_input` is the element's native "unparseable input" signal.
    pub fn notify_keystroke(&mut self, raw: &str, bad_input: bool) {
        if self.policy.disabled || self.policy.readonly {
            log::debug!("textfield: keystroke ignored on inactive field");
            return;
        }
        self.internal_change = true;
        self.bad_input = bad_input;

        let (mut internal, mut display) = self.conform(&FieldValue::text(raw));
        if let Some(limit) = self.policy.char_limit {
            // The limit counts the working value, same as the counter.
            let text = internal.as_display();
            if text.graphemes(true).count() > limit {
                let kept: String = text.graphemes(true).take(limit).collect();
                (internal, display) = self.conform(&FieldValue::text(kept));
            }
        }
        let changed = internal != self.internal_value;
        self.internal_value = internal;
        self.display = display;

        self.emit(Notification::ValueUpdate(self.internal_value.clone()));
        self.after_value_change(changed || !self.should_validate);
    }

    /// The editable element gained focus. Disabled fields stay unfocused.
    pub fn notify_focus_gained(&mut self) {
        if !self.element_attached {
            log::debug!("textfield: focus without an element");
            return;
        }
        if self.focus || self.policy.disabled {
            return;
        }
        self.focus = true;
        self.snapshot = self.internal_value.clone();
        self.emit(Notification::Focus);
    }

    /// The editable element lost focus.
    pub fn notify_focus_lost(&mut self) {
        self.focus = false;
        self.internal_change = false;

        if self.internal_value != self.snapshot {
            self.snapshot = self.internal_value.clone();
            self.emit(Notification::Commit(self.internal_value.clone()));
        }
        self.emit(Notification::Blur);

        self.should_validate = true;
        if self.policy.validate_on_blur {
            self.run_validation();
        }
    }

    /// Enter was pressed: always commits the current value, unless the
    /// field is disabled.
    pub fn notify_enter_key(&mut self) {
        if self.policy.disabled {
            return;
        }
        self.notify_key_down();
        self.snapshot = self.internal_value.clone();
        self.emit(Notification::Commit(self.internal_value.clone()));
    }

    /// Focuses the backing element. A no-op when the element is detached.
    pub fn focus(&mut self) {
        if !self.element_attached {
            log::debug!("textfield: focus() without an element");
            return;
        }
        self.notify_focus_gained();
    }

    /// Blurs the backing element. A no-op when the element is detached or
    /// not focused.
    pub fn blur(&mut self) {
        if !self.element_attached {
            log::debug!("textfield: blur() without an element");
            return;
        }
        if self.focus {
            self.notify_focus_lost();
        }
    }

    /// Returns whether the field currently has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// A click on the field: focuses it unless focused or disabled.
    pub fn click(&mut self) {
        if self.focus || self.policy.disabled {
            return;
        }
        self.focus();
    }

    /// Marks the backing element as present.
    pub fn attach_element(&mut self) {
        self.element_attached = true;
    }

    /// Marks the backing element as torn down. Programmatic focus and blur
    /// become no-ops until it is attached again.
    pub fn detach_element(&mut self) {
        self.element_attached = false;
    }

    /// The clear action. Only available on clearable, editable fields with
    /// a value.
    ///
    /// A registered clear interceptor runs instead of the built-in action.
    /// Otherwise the value becomes null and a `ValueUpdate(null)` is
    /// emitted; the commit follows the usual blur or enter path.
    pub fn request_clear(&mut self) {
        if !self.policy.clearable || self.internal_value.is_empty() {
            return;
        }
        if self.policy.disabled || self.policy.readonly {
            log::debug!("textfield: clear ignored on inactive field");
            return;
        }
        if let Some(intercept) = self.clear_interceptor.as_mut() {
            intercept();
            return;
        }

        self.internal_value = FieldValue::null();
        self.display.clear();
        self.bad_input = false;
        self.emit(Notification::ValueUpdate(FieldValue::null()));
        self.after_value_change(true);
    }

    /// A click on the append action. Never clears the value.
    pub fn click_append(&mut self) {
        if let Some(cb) = self.append_callback.as_mut() {
            cb();
        }
    }

    /// Replaces the policy.
    ///
    /// A changed mask is re-applied to the current unmasked value, and a
    /// changed rule set is evaluated immediately.
    pub fn set_policy(&mut self, policy: Policy) {
        let shaping_changed = policy.shaping_differs(&self.policy);
        let rules_changed = !policy.rules.same_as(&self.policy.rules);
        let unmasked = self.unmasked_value();

        self.policy = policy;
        if shaping_changed {
            self.resolve_mask();
        }
        if !self.mounted {
            return;
        }

        let mut revalidate = rules_changed;
        if shaping_changed {
            let (internal, display) = self.conform(&unmasked);
            self.display = display;
            if internal != self.internal_value {
                self.internal_value = internal;
                self.snapshot = self.internal_value.clone();
                self.emit(Notification::ValueUpdate(self.internal_value.clone()));
                if !self.policy.validate_on_blur {
                    self.should_validate = true;
                    revalidate = true;
                }
            }
        }
        if revalidate {
            self.run_validation();
        }
    }

    /// Returns the current policy.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Sets the mask from a preset name or pattern; `None` removes it.
    pub fn set_mask(&mut self, mask: Option<MaskSpec>) {
        let policy = Policy {
            mask,
            ..self.policy.clone()
        };
        self.set_policy(policy);
    }

    /// Replaces the validation rules.
    pub fn set_rules(&mut self, rules: impl Into<Rules>) {
        let policy = Policy {
            rules: rules.into(),
            ..self.policy.clone()
        };
        self.set_policy(policy);
    }

    /// Enables or disables the field.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.policy.disabled = disabled;
    }

    /// Runs the rules now and returns whether the value is valid.
    ///
    /// With `force`, errors are shown from now on.
    pub fn validate(&mut self, force: bool) -> bool {
        if force {
            self.should_validate = true;
        }
        self.run_validation();
        self.validation.valid
    }

    pub(super) fn run_validation(&mut self) {
        self.validation = run(&self.internal_value, &self.policy.rules);
        self.emit(Notification::Validation(self.validation.clone()));
    }

    /// Under the default policy a mutation turns validation on and re-runs
    /// the rules. Validate-on-blur waits for the next blur.
    fn after_value_change(&mut self, revalidate: bool) {
        if self.policy.validate_on_blur || !revalidate {
            return;
        }
        self.should_validate = true;
        self.run_validation();
    }

    pub(super) fn resolve_mask(&mut self) {
        self.mask_error = None;
        self.mask = match self.policy.mask.as_ref().map(MaskSpec::resolve) {
            None => None,
            Some(Ok(mask)) => mask,
            Some(Err(err)) => {
                log::warn!("textfield: {}; input is left unmasked", err);
                self.mask_error = Some(err);
                None
            }
        };
    }

    /// Shapes `value` with the mask: returns the working value per policy
    /// and the text to display.
    pub(super) fn conform(&self, value: &FieldValue) -> (FieldValue, String) {
        match (value.as_str(), &self.mask) {
            (None, _) => (FieldValue::null(), String::new()),
            (Some(raw), None) => (FieldValue::text(raw), raw.to_string()),
            (Some(raw), Some(mask)) => {
                let out = mask.apply_with(raw, self.policy.fill_mask_blanks);
                let internal = if self.policy.return_masked_value {
                    out.masked.clone()
                } else {
                    out.unmasked
                };
                (FieldValue::text(internal), out.masked)
            }
        }
    }

    /// The working value with the current mask's literals removed.
    pub(super) fn unmasked_value(&self) -> FieldValue {
        match (&self.mask, self.internal_value.is_null()) {
            (_, true) => FieldValue::null(),
            (Some(mask), false) => FieldValue::text(
                mask.apply_with(&self.display, self.policy.fill_mask_blanks)
                    .unmasked,
            ),
            (None, false) => self.internal_value.clone(),
        }
    }
}

impl Component for Model {
    /// Focuses the field. Focus changes are reported through listeners, so
    /// no command is returned.
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
