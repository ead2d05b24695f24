//! Tests for the textfield component.

use super::*;
use crate::validation::{required, rule, Rules};
use crate::value::FieldValue;
use crate::Component;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Log = Arc<Mutex<Vec<Notification>>>;

fn record(field: &mut Model) -> Log {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    field.subscribe(move |n| sink.lock().unwrap().push(n.clone()));
    log
}

fn mounted(policy: Policy, value: impl Into<FieldValue>) -> (Model, Log) {
    let mut field = new();
    field.set_policy(policy);
    field.set_external_value(value);
    let log = record(&mut field);
    field.mount();
    (field, log)
}

fn updates(log: &Log) -> Vec<FieldValue> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|n| match n {
            Notification::ValueUpdate(v) => Some(v.clone()),
            _ => None,
        })
        .collect()
}

fn commits(log: &Log) -> Vec<FieldValue> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|n| match n {
            Notification::Commit(v) => Some(v.clone()),
            _ => None,
        })
        .collect()
}

fn count(log: &Log, wanted: &Notification) -> usize {
    log.lock().unwrap().iter().filter(|n| *n == wanted).count()
}

fn counting_rule(calls: &Arc<AtomicUsize>) -> crate::validation::Rule {
    let calls = calls.clone();
    rule(move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
}

#[test]
fn test_starts_out_invalid() {
    let (field, log) = mounted(
        Policy::new().with_rule(rule(|v| {
            if v.is_empty() {
                Err("Required".to_string())
            } else {
                Ok(())
            }
        })),
        FieldValue::null(),
    );

    assert!(!field.valid());
    assert!(!field.should_validate());
    assert!(!field.shows_error());
    assert_eq!(
        log.lock().unwrap().as_slice(),
        &[Notification::Validation(crate::ValidationResult {
            valid: false,
            errors: vec!["Required".to_string()],
        })]
    );
}

#[test]
fn test_starts_validating_on_input() {
    let (mut field, _log) = mounted(Policy::new(), FieldValue::null());
    assert!(!field.should_validate());

    field.set_external_value("asd");
    assert!(field.should_validate());
}

#[test]
fn test_validate_on_blur_defers_validation() {
    let (mut field, _log) = mounted(Policy::new().with_validate_on_blur(true), FieldValue::null());
    assert!(!field.should_validate());

    field.set_external_value("asd");
    assert!(!field.should_validate());
}

#[test]
fn test_starts_validating_on_blur() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (mut field, _log) = mounted(
        Policy::new()
            .with_validate_on_blur(true)
            .with_rule(counting_rule(&calls)),
        FieldValue::null(),
    );

    assert!(!field.should_validate());
    // Rules run once on mount.
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    field.notify_focus_gained();
    field.notify_keystroke("f", false);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    field.notify_focus_lost();
    assert!(field.should_validate());
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // Every blur validates, changed or not.
    field.notify_focus_gained();
    field.notify_focus_lost();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_default_policy_validates_every_change() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (mut field, _log) = mounted(
        Policy::new().with_rule(counting_rule(&calls)),
        FieldValue::null(),
    );

    field.notify_focus_gained();
    field.notify_keystroke("a", false);
    field.notify_keystroke("ab", false);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(field.should_validate());
}

#[test]
fn test_should_validate_never_reverts() {
    let (mut field, _log) = mounted(Policy::new(), "x");
    field.notify_focus_gained();
    field.notify_keystroke("xy", false);
    field.notify_focus_lost();
    field.set_external_value(FieldValue::null());
    field.notify_focus_gained();
    assert!(field.should_validate());
}

#[test]
fn test_clear_input_value() {
    let (mut field, log) = mounted(Policy::new().with_clearable(true), "foo");
    assert_eq!(field.value(), "foo");

    field.request_clear();

    assert_eq!(updates(&log), vec![FieldValue::null()]);
    assert!(commits(&log).is_empty());
    assert!(field.value().is_null());
    assert_eq!(field.display_text(), "");
}

#[test]
fn test_clear_then_blur_commits_null() {
    let (mut field, log) = mounted(Policy::new().with_clearable(true), "foo");
    field.notify_focus_gained();
    field.request_clear();
    field.notify_focus_lost();
    assert_eq!(commits(&log), vec![FieldValue::null()]);
}

#[test]
fn test_clear_requires_clearable_and_value() {
    let (mut field, log) = mounted(Policy::new(), "foo");
    field.request_clear();
    assert_eq!(field.value(), "foo");

    let (mut empty, empty_log) = mounted(Policy::new().with_clearable(true), "");
    empty.request_clear();
    assert!(updates(&log).is_empty());
    assert!(updates(&empty_log).is_empty());
}

#[test]
fn test_custom_clear_callback() {
    let (mut field, log) = mounted(Policy::new().with_clearable(true), "foo");
    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    field.set_clear_interceptor(move || {
        c.fetch_add(1, Ordering::SeqCst);
    });

    field.request_clear();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(field.value(), "foo");
    assert!(updates(&log).is_empty());
}

#[test]
fn test_append_action_does_not_clear() {
    let (mut field, _log) = mounted(Policy::new(), "foo");
    field.click_append();
    assert_eq!(field.value(), "foo");

    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    field.set_append_callback(move || {
        c.fetch_add(1, Ordering::SeqCst);
    });
    field.click_append();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(field.value(), "foo");
}

#[test]
fn test_keeps_value_on_blur() {
    let (mut field, _log) = mounted(Policy::new(), "asd");
    field.notify_keystroke("fgh", false);
    field.notify_focus_lost();
    assert_eq!(field.display_text(), "fgh");
    assert_eq!(field.value(), "fgh");
}

#[test]
fn test_updates_when_value_changed_externally() {
    let (mut field, _log) = mounted(Policy::new(), FieldValue::null());

    field.set_external_value("fgh");
    assert_eq!(field.display_text(), "fgh");

    field.notify_focus_gained();
    field.set_external_value("jkl");
    assert_eq!(field.display_text(), "jkl");
}

#[test]
fn test_unfocused_field_tracks_last_external_value() {
    let (mut field, _log) = mounted(Policy::new().with_mask("#-#"), FieldValue::null());
    for v in ["1", "12", "9", "77"] {
        field.set_external_value(v);
        let expected = crate::mask::Mask::parse("#-#").unwrap().apply(v).unmasked;
        assert_eq!(field.value(), expected.as_str());
    }
}

#[test]
fn test_external_value_ignored_during_local_edit() {
    let (mut field, log) = mounted(Policy::new(), "asd");
    field.notify_focus_gained();
    field.notify_keystroke("fgh", false);

    // The owner echoes an older value back.
    field.set_external_value("asd");
    assert_eq!(field.value(), "fgh");

    field.notify_focus_lost();
    assert_eq!(commits(&log), vec![FieldValue::from("fgh")]);

    // After blur, external values apply again.
    field.set_external_value("zzz");
    assert_eq!(field.value(), "zzz");
}

#[test]
fn test_single_change_event_on_blur() {
    let (mut field, log) = mounted(Policy::new(), "asd");

    field.notify_focus_gained();
    field.notify_keystroke("fgh", false);
    field.notify_focus_lost();

    assert_eq!(commits(&log), vec![FieldValue::from("fgh")]);
    assert_eq!(count(&log, &Notification::Blur), 1);
}

#[test]
fn test_no_change_event_if_value_unchanged() {
    let (mut field, log) = mounted(Policy::new(), "test");
    field.notify_focus_gained();
    field.notify_focus_lost();
    assert!(commits(&log).is_empty());

    // Typing back to the original value is not a change either.
    field.notify_focus_gained();
    field.notify_keystroke("tes", false);
    field.notify_keystroke("test", false);
    field.notify_focus_lost();
    assert!(commits(&log).is_empty());
}

#[test]
fn test_display_number_zero() {
    let (field, _log) = mounted(Policy::new(), 0i32);
    assert_eq!(field.display_text(), "0");
    assert!(field.is_dirty());
}

#[test]
fn test_reset_internal_change_on_blur_and_keydown() {
    let (mut field, _log) = mounted(Policy::new(), FieldValue::null());
    field.set_external_value("foo");
    field.internal_change = true;
    field.notify_focus_lost();
    assert!(!field.internal_change_pending());

    field.notify_key_down();
    assert!(field.internal_change_pending());
}

#[test]
fn test_emits_input_when_external_value_modified_internally() {
    let (mut field, log) = mounted(
        Policy::new().with_mask("##").with_return_masked_value(true),
        "33",
    );
    assert!(updates(&log).is_empty());

    field.set_external_value("4444");

    assert_eq!(updates(&log), vec![FieldValue::from("44")]);
    assert_eq!(field.value(), "44");
}

#[test]
fn test_mask_value_if_return_masked_value() {
    let (mut field, log) = mounted(
        Policy::new().with_mask("#-#").with_return_masked_value(true),
        "44",
    );
    assert_eq!(updates(&log), vec![FieldValue::from("4-4")]);

    field.notify_focus_gained();
    field.notify_keystroke("33", false);

    assert_eq!(updates(&log).last(), Some(&FieldValue::from("3-3")));
    assert_eq!(field.display_text(), "3-3");
}

#[test]
fn test_unmasked_value_if_not_return_masked_value() {
    let (mut field, log) = mounted(Policy::new().with_mask("#-#"), "44");
    assert!(updates(&log).is_empty());
    assert_eq!(field.value(), "44");
    assert_eq!(field.display_text(), "4-4");

    field.notify_focus_gained();
    field.notify_keystroke("33", false);

    assert_eq!(updates(&log), vec![FieldValue::from("33")]);
    assert_eq!(field.display_text(), "3-3");
}

#[test]
fn test_predefined_mask() {
    let (field, log) = mounted(
        Policy::new().with_mask("date").with_return_masked_value(true),
        "12311999",
    );
    assert_eq!(updates(&log), vec![FieldValue::from("12/31/1999")]);
    assert_eq!(field.value(), "12/31/1999");
}

#[test]
fn test_switching_mask() {
    let (mut field, _log) = mounted(Policy::new().with_mask("#-#-#"), "1-2-3");
    assert_eq!(field.display_text(), "1-2-3");

    field.set_mask(Some("#.#.#".into()));
    assert_eq!(field.display_text(), "1.2.3");

    field.set_mask(Some("#,#".into()));
    assert_eq!(field.display_text(), "1,2");

    field.set_mask(None);
    assert_eq!(field.display_text(), "12");
    assert_eq!(field.value(), "12");
}

#[test]
fn test_switching_mask_with_masked_value_emits_update() {
    let (mut field, log) = mounted(
        Policy::new().with_mask("#-#").with_return_masked_value(true),
        "1-2",
    );
    field.set_mask(Some("#/#".into()));
    assert_eq!(updates(&log), vec![FieldValue::from("1/2")]);
}

#[test]
fn test_malformed_mask_falls_back_to_identity() {
    let (mut field, _log) = mounted(Policy::new().with_mask("--"), "abc");
    assert_eq!(field.display_text(), "abc");
    assert!(matches!(
        field.mask_error(),
        Some(crate::MaskError::NoPlaceholderSlots { .. })
    ));

    field.notify_keystroke("abcd", false);
    assert_eq!(field.value(), "abcd");

    field.set_mask(Some("#".into()));
    assert!(field.mask_error().is_none());
}

#[test]
fn test_autofocus_and_click() {
    let mut field = new();
    field.set_policy(Policy::new().with_autofocus(true));
    field.mount();
    assert!(field.focused());

    let log = record(&mut field);
    let focus = Notification::Focus;

    field.click();
    assert_eq!(count(&log, &focus), 0);

    field.notify_focus_lost();
    field.click();
    assert_eq!(count(&log, &focus), 1);

    field.set_disabled(true);
    field.notify_focus_lost();
    field.click();
    assert_eq!(count(&log, &focus), 1);

    field.set_disabled(false);
    field.click();
    assert_eq!(count(&log, &focus), 2);

    field.notify_focus_lost();
    field.detach_element();
    field.notify_focus_gained();
    field.click();
    assert_eq!(count(&log, &focus), 2);
}

#[test]
fn test_enter_fires_change_every_time() {
    let (mut field, log) = mounted(Policy::new(), FieldValue::null());
    field.notify_focus_gained();
    field.notify_keystroke("foo", false);
    field.notify_enter_key();
    field.notify_enter_key();

    assert_eq!(
        commits(&log),
        vec![FieldValue::from("foo"), FieldValue::from("foo")]
    );
    assert!(field.focused());

    // Enter already committed the value, so blur does not repeat it.
    field.notify_focus_lost();
    assert_eq!(commits(&log).len(), 2);
}

#[test]
fn test_focus_and_blur_methods() {
    let (mut field, log) = mounted(Policy::new(), FieldValue::null());

    field.focus();
    assert_eq!(count(&log, &Notification::Focus), 1);

    field.blur();
    assert_eq!(count(&log, &Notification::Blur), 1);

    // Blurring an unfocused field fires nothing.
    field.blur();
    assert_eq!(count(&log, &Notification::Blur), 1);
}

#[test]
fn test_focus_and_blur_without_element_are_noops() {
    let (mut field, log) = mounted(Policy::new(), FieldValue::null());
    field.detach_element();
    field.focus();
    field.blur();
    assert!(log
        .lock()
        .unwrap()
        .iter()
        .all(|n| matches!(n, Notification::Validation(_))));

    field.attach_element();
    field.focus();
    assert!(field.focused());
}

#[test]
fn test_component_trait() {
    let (mut field, _log) = mounted(Policy::new(), FieldValue::null());
    assert!(Component::focus(&mut field).is_none());
    assert!(Component::focused(&field));
    Component::blur(&mut field);
    assert!(!Component::focused(&field));
}

#[test]
fn test_label_active_for_dirty_types() {
    let (mut field, _log) = mounted(Policy::new(), FieldValue::null());
    field.label = Some("Foobar".to_string());

    for ty in [
        InputType::Color,
        InputType::File,
        InputType::Time,
        InputType::Date,
        InputType::DatetimeLocal,
        InputType::Week,
        InputType::Month,
    ] {
        field.input_type = ty;
        assert!(field.is_label_active());

        field.input_type = InputType::Text;
        assert!(!field.is_label_active());
    }
}

#[test]
fn test_label_generation() {
    let (mut field, _log) = mounted(Policy::new(), FieldValue::null());
    assert!(!field.shows_label());

    field.single_line = true;
    assert!(!field.shows_label());

    field.placeholder = Some("foo".to_string());
    assert!(!field.shows_label());

    field.placeholder = None;
    field.set_external_value("bar");
    assert!(!field.shows_label());

    field.label = Some("bar".to_string());
    field.set_external_value(FieldValue::null());
    assert!(field.shows_label());

    field.single_line = false;
    field.set_external_value("bar");
    assert!(field.shows_label());
}

#[test]
fn test_counter() {
    let (mut field, _log) = mounted(Policy::new().with_char_limit(25), FieldValue::null());
    assert_eq!(field.counter_text(), None);

    field.counter = Counter::CharLimit;
    assert_eq!(field.counter_text().as_deref(), Some("0 / 25"));

    field.counter = Counter::Max(50);
    assert_eq!(field.counter_text().as_deref(), Some("0 / 50"));

    field.set_external_value("héllo");
    assert_eq!(field.counter_text().as_deref(), Some("5 / 50"));

    field.set_policy(Policy::new());
    field.counter = Counter::CharLimit;
    assert_eq!(field.counter_text().as_deref(), Some("5"));
}

#[test]
fn test_bad_input() {
    let (mut field, _log) = mounted(Policy::new(), FieldValue::null());
    assert!(!field.bad_input());

    field.notify_keystroke("", false);
    assert!(!field.bad_input());

    field.notify_keystroke("", true);
    assert!(field.bad_input());
    assert!(field.is_dirty());
}

#[test]
fn test_char_limit_truncates_typing() {
    let (mut field, log) = mounted(Policy::new().with_char_limit(3), FieldValue::null());
    field.notify_keystroke("abcdef", false);
    assert_eq!(field.value(), "abc");
    assert_eq!(updates(&log), vec![FieldValue::from("abc")]);

    // Programmatic values are not truncated.
    field.notify_focus_lost();
    field.set_external_value("abcdef");
    assert_eq!(field.value(), "abcdef");
}

#[test]
fn test_disabled_and_readonly_ignore_keystrokes() {
    let (mut field, log) = mounted(Policy::new().with_readonly(true), "a");
    field.notify_keystroke("ab", false);
    assert_eq!(field.value(), "a");

    field.set_policy(Policy::new().with_disabled(true));
    field.notify_keystroke("ab", false);
    assert_eq!(field.value(), "a");
    assert!(updates(&log).is_empty());
}

#[test]
fn test_inactive_field_ignores_clear_and_enter() {
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    let (mut field, log) = mounted(
        Policy::new().with_clearable(true).with_readonly(true),
        "foo",
    );
    field.focus();
    field.update(Box::new(KeyMsg {
        key: KeyCode::Char('x'),
        modifiers: KeyModifiers::CONTROL,
    }));
    assert_eq!(field.value(), "foo");
    assert!(updates(&log).is_empty());

    // Read-only values can still be committed.
    field.notify_enter_key();
    assert_eq!(commits(&log), vec![FieldValue::from("foo")]);
    field.blur();

    field.set_policy(Policy::new().with_clearable(true).with_disabled(true));
    field.request_clear();
    field.notify_enter_key();
    assert_eq!(field.value(), "foo");
    assert!(updates(&log).is_empty());
    assert_eq!(commits(&log).len(), 1);

    field.focus();
    field.notify_focus_gained();
    assert!(!field.focused());
}

#[test]
fn test_char_limit_matches_counter_under_mask() {
    let (mut field, _log) = mounted(
        Policy::new().with_mask("##/##").with_char_limit(3),
        FieldValue::null(),
    );
    field.counter = Counter::CharLimit;
    field.notify_keystroke("12/31", false);
    assert_eq!(field.value(), "123");
    assert_eq!(field.display_text(), "12/3");
    assert_eq!(field.counter_text().as_deref(), Some("3 / 3"));

    let (mut masked, _log) = mounted(
        Policy::new()
            .with_mask("##/##")
            .with_return_masked_value(true)
            .with_char_limit(4),
        FieldValue::null(),
    );
    masked.counter = Counter::CharLimit;
    masked.notify_keystroke("1231", false);
    assert_eq!(masked.value(), "12/3");
    assert_eq!(masked.counter_text().as_deref(), Some("4 / 4"));
}

#[test]
fn test_replacing_rules_revalidates() {
    let (mut field, _log) = mounted(Policy::new(), "");
    assert!(field.valid());

    field.set_rules(Rules::new().with(required("Required")));
    assert!(!field.valid());
    assert_eq!(field.errors(), &["Required".to_string()]);

    field.set_external_value("x");
    assert!(field.valid());
}

#[test]
fn test_errors_shown_only_after_validation_starts() {
    let (mut field, _log) = mounted(Policy::new().with_rule(required("Required")), "");
    assert!(field.has_error());
    assert!(!field.shows_error());
    assert!(!field.view().contains("Required"));

    assert!(!field.validate(true));
    assert!(field.shows_error());
    assert!(field.view().contains("Required"));
}

#[test]
fn test_view_placeholder_and_password() {
    let (mut field, _log) = mounted(Policy::new(), FieldValue::null());
    field.placeholder = Some("Enter text...".to_string());
    assert!(field.view().contains("Enter text"));

    field.set_external_value("secret");
    field.input_type = InputType::Password;
    let view = field.view();
    assert!(view.contains("******"));
    assert!(!view.contains("secret"));
}

#[test]
fn test_view_prefix_and_suffix() {
    let (mut field, _log) = mounted(Policy::new(), "example");
    field.prefix = Some("$".to_string());
    field.suffix = Some(".com".to_string());
    let view = field.view();
    assert!(view.contains('$'));
    assert!(view.contains("example"));
    assert!(view.contains(".com"));
}

#[test]
fn test_typing_through_key_messages() {
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    let key = |code| -> bubbletea_rs::Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    };

    let (mut field, log) = mounted(Policy::new().with_mask("##/##"), FieldValue::null());

    // Unfocused fields ignore keys.
    assert!(field.update(key(KeyCode::Char('1'))).is_none());
    assert!(field.value().is_null());

    field.focus();
    for c in "1231".chars() {
        field.update(key(KeyCode::Char(c)));
    }
    assert_eq!(field.display_text(), "12/31");
    assert_eq!(field.value(), "1231");

    field.update(key(KeyCode::Backspace));
    assert_eq!(field.display_text(), "12/3");
    field.update(key(KeyCode::Backspace));
    field.update(key(KeyCode::Backspace));
    assert_eq!(field.display_text(), "1");

    field.update(key(KeyCode::Enter));
    assert_eq!(commits(&log), vec![FieldValue::from("1")]);
}

#[test]
fn test_paste_message_is_sanitized() {
    let (mut field, _log) = mounted(Policy::new(), "a");
    field.focus();
    field.update(Box::new(PasteMsg("b\nc\x1b[31md".to_string())));
    assert_eq!(field.value(), "ab cd");
}

#[tokio::test]
async fn test_update_returns_notifications_as_message() {
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    let (mut field, _log) = mounted(Policy::new(), "foo");
    field.focus();

    let cmd = field
        .update(Box::new(KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
        }))
        .expect("enter produces notifications");

    let msg = cmd.await.expect("command yields a message");
    let NotificationsMsg(events) = msg
        .downcast_ref::<NotificationsMsg>()
        .expect("notifications message")
        .clone();
    assert_eq!(events, vec![Notification::Commit("foo".into())]);
}

#[tokio::test]
async fn test_clear_key_returns_value_update() {
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    let (mut field, _log) = mounted(Policy::new().with_clearable(true), "foo");
    field.focus();

    let cmd = field
        .update(Box::new(KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
        }))
        .expect("clear produces notifications");
    let msg = cmd.await.expect("command yields a message");
    let events = &msg.downcast_ref::<NotificationsMsg>().unwrap().0;
    assert_eq!(events[0], Notification::ValueUpdate(FieldValue::null()));
}

#[test]
fn test_view_pads_value_area_before_suffix() {
    let (mut field, _log) = mounted(Policy::new(), "ab");
    field.prefix = Some("$".to_string());
    field.suffix = Some(".com".to_string());
    field.width = 10;
    let view = strip_ansi_escapes::strip_str(field.view());
    assert!(view.contains("$ab        .com"));
}

#[test]
fn test_password_echo_counts_graphemes() {
    let (mut field, _log) = mounted(Policy::new(), "e\u{301}x");
    field.input_type = InputType::Password;
    let view = strip_ansi_escapes::strip_str(field.view());
    assert!(view.contains("**"));
    assert!(!view.contains("***"));
}
