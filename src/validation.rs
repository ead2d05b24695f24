//! Validation rules and the rule runner.
//!
//! A rule inspects a [`FieldValue`] and returns `Ok(())` when the value
//! passes or `Err(message)` when it does not. Rules run in order and every
//! rule always runs, so callers receive the complete list of messages
//! rather than only the first failure.
//!
//! ```rust
//! use bubbletea_textfield::validation::{max_length, required, run, Rules};
//! use bubbletea_textfield::FieldValue;
//!
//! let rules: Rules = vec![required("Required"), max_length(3, "Too long")].into();
//! let result = run(&FieldValue::null(), &rules);
//! assert!(!result.valid);
//! assert_eq!(result.errors, vec!["Required".to_string()]);
//! ```

use crate::value::FieldValue;
use std::fmt;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// A validation rule.
///
/// `Send + Sync` so rule sets can be shared between policies and satisfy
/// the bubbletea-rs `Model: Send` bound.
pub type Rule = Arc<dyn Fn(&FieldValue) -> Result<(), String> + Send + Sync>;

/// Wraps a closure as a [`Rule`].
pub fn rule<F>(f: F) -> Rule
where
    F: Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Fails when the value is null or empty.
pub fn required(message: impl Into<String>) -> Rule {
    let message = message.into();
    rule(move |v| {
        if v.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Fails when the value has more than `max` user-perceived characters.
pub fn max_length(max: usize, message: impl Into<String>) -> Rule {
    let message = message.into();
    rule(move |v| {
        if v.as_display().graphemes(true).count() > max {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Fails when a non-empty value has fewer than `min` user-perceived
/// characters. Pair with [`required`] to reject empty values.
pub fn min_length(min: usize, message: impl Into<String>) -> Rule {
    let message = message.into();
    rule(move |v| {
        let len = v.as_display().graphemes(true).count();
        if len > 0 && len < min {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// An ordered set of rules.
#[derive(Clone, Default)]
pub struct Rules(Vec<Rule>);

impl Rules {
    /// An empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: Rule) {
        self.0.push(rule);
    }

    /// Builder form of [`Rules::push`].
    pub fn with(mut self, rule: Rule) -> Self {
        self.0.push(rule);
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    /// Whether both sets hold the same rules in the same order.
    ///
    /// Rules are closures, so identity is pointer identity.
    pub fn same_as(&self, other: &Rules) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(&other.0).all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules").field("len", &self.0.len()).finish()
    }
}

impl From<Vec<Rule>> for Rules {
    fn from(rules: Vec<Rule>) -> Self {
        Self(rules)
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outcome of running a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub valid: bool,
    /// Messages from failing rules, in rule order.
    pub errors: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }
}

/// Runs every rule against `value` and collects the failure messages.
pub fn run(value: &FieldValue, rules: &Rules) -> ValidationResult {
    let errors: Vec<String> = rules.iter().filter_map(|r| r(value).err()).collect();
    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn empty_rule_set_is_valid() {
        let result = run(&FieldValue::from("x"), &Rules::new());
        assert_eq!(result, ValidationResult::default());
    }

    #[test]
    fn all_rules_run_and_keep_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = {
            let calls = calls.clone();
            rule(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("second".to_string())
            })
        };
        let rules = Rules::new()
            .with(rule(|_| Err("first".to_string())))
            .with(counted)
            .with(rule(|_| Ok(())));

        let result = run(&FieldValue::from("abc"), &rules);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["first", "second"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn valid_matches_empty_errors() {
        let rules: Rules = vec![required("Required"), min_length(3, "Short")].into();
        for v in [FieldValue::null(), "".into(), "ab".into(), "abcd".into()] {
            let r = run(&v, &rules);
            assert_eq!(r.valid, r.errors.is_empty());
        }
    }

    #[test]
    fn length_rules_count_graphemes() {
        let rules: Rules = vec![max_length(2, "Too long")].into();
        assert!(run(&FieldValue::from("e\u{301}e\u{301}"), &rules).valid);
        assert!(!run(&FieldValue::from("abc"), &rules).valid);
        assert!(run(&FieldValue::from(""), &vec![min_length(2, "Short")].into()).valid);
    }

    #[test]
    fn rule_identity() {
        let r = required("Required");
        let a: Rules = vec![r.clone()].into();
        let b: Rules = vec![r].into();
        assert!(a.same_as(&b));
        assert!(!a.same_as(&vec![required("Required")].into()));
    }
}
