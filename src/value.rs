//! The logical value held by a text field.
//!
//! A field value is either text or null. Numbers handed to a field are
//! stringified on the way in, so a numeric `0` is displayed as `"0"` rather
//! than being treated as an empty field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value of a text field: a string or null.
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::FieldValue;
///
/// let v = FieldValue::from("foo");
/// assert_eq!(v, "foo");
/// assert!(!v.is_null());
///
/// let zero = FieldValue::from(0);
/// assert_eq!(zero.as_str(), Some("0"));
///
/// assert!(FieldValue::null().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Option<String>);

impl FieldValue {
    /// The null value.
    pub fn null() -> Self {
        Self(None)
    }

    /// A text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self(Some(s.into()))
    }

    /// Returns the text, or `None` for null.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns the text, treating null as the empty string.
    pub fn as_display(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    /// Whether the value is null.
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Whether the value is null or the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.as_deref().map_or(true, str::is_empty)
    }

    /// Consumes the value and returns the inner option.
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self(Some(s))
    }
}

impl From<Option<String>> for FieldValue {
    fn from(v: Option<String>) -> Self {
        Self(v)
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(v: Option<&str>) -> Self {
        Self(v.map(str::to_string))
    }
}

macro_rules! numeric_field_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(n: $t) -> Self {
                    Self(Some(n.to_string()))
                }
            }
        )*
    };
}

numeric_field_value!(i32, i64, u32, u64, usize, f32, f64);

impl PartialEq<str> for FieldValue {
    fn eq(&self, other: &str) -> bool {
        self.0.as_deref() == Some(other)
    }
}

impl PartialEq<&str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_deref() == Some(*other)
    }
}
