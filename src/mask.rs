//! Mask transform for formatted text entry.
//!
//! A mask pattern is a string in which placeholder tokens mark editable
//! slots and every other character is a literal separator. Applying a mask
//! to raw text produces both the masked text shown to the user and the
//! unmasked text made of only the characters that filled slots.
//!
//! | Token | Accepts                 | Converts to |
//! |-------|-------------------------|-------------|
//! | `#`   | ASCII digit             | as typed    |
//! | `A`   | ASCII letter            | upper case  |
//! | `a`   | ASCII letter            | lower case  |
//! | `N`   | ASCII letter or digit   | upper case  |
//! | `n`   | ASCII letter or digit   | lower case  |
//! | `X`   | a delimiter character   | as typed    |
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_textfield::mask::{apply, Mask, MaskSpec};
//!
//! let mask = Mask::parse("#-#").unwrap();
//! let out = apply("44", &mask);
//! assert_eq!(out.masked, "4-4");
//! assert_eq!(out.unmasked, "44");
//!
//! // Named presets resolve to a fixed pattern.
//! let date = MaskSpec::from("date").resolve().unwrap().unwrap();
//! assert_eq!(apply("12311999", &date).masked, "12/31/1999");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Characters treated as separators when raw text is re-masked.
pub const DELIMITERS: &str = "-!$%^&*()_+|~=`{}[]:\";'<>?,./\\ ";

/// Reports whether `c` is one of the [`DELIMITERS`].
pub fn is_mask_delimiter(c: char) -> bool {
    DELIMITERS.contains(c)
}

/// Errors raised while resolving a mask pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// The pattern contains only literal characters.
    #[error("mask pattern {pattern:?} has no placeholder slots")]
    NoPlaceholderSlots {
        /// The offending pattern.
        pattern: String,
    },
}

/// The kind of character an editable slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// `#`
    Digit,
    /// `A`
    UpperLetter,
    /// `a`
    LowerLetter,
    /// `N`
    UpperAlphanumeric,
    /// `n`
    LowerAlphanumeric,
    /// `X`
    Delimiter,
}

impl SlotKind {
    fn from_token(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Digit),
            'A' => Some(Self::UpperLetter),
            'a' => Some(Self::LowerLetter),
            'N' => Some(Self::UpperAlphanumeric),
            'n' => Some(Self::LowerAlphanumeric),
            'X' => Some(Self::Delimiter),
            _ => None,
        }
    }

    /// Whether this slot accepts `c`.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::UpperLetter | Self::LowerLetter => c.is_ascii_alphabetic(),
            Self::UpperAlphanumeric | Self::LowerAlphanumeric => c.is_ascii_alphanumeric(),
            Self::Delimiter => is_mask_delimiter(c),
        }
    }

    fn convert(self, c: char) -> char {
        match self {
            Self::UpperLetter | Self::UpperAlphanumeric => c.to_ascii_uppercase(),
            Self::LowerLetter | Self::LowerAlphanumeric => c.to_ascii_lowercase(),
            Self::Digit | Self::Delimiter => c,
        }
    }
}

/// One position of a parsed mask pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    /// An editable slot.
    Slot(SlotKind),
    /// A literal separator.
    Literal(char),
}

/// Result of applying a mask.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Masked {
    /// Text with literal separators inserted.
    pub masked: String,
    /// Only the characters that filled slots.
    pub unmasked: String,
}

/// A parsed mask pattern with at least one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pattern: String,
    tokens: Vec<MaskToken>,
}

impl Mask {
    /// Parses a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::NoPlaceholderSlots`] when the pattern has no
    /// slot tokens.
    pub fn parse(pattern: &str) -> Result<Self, MaskError> {
        let tokens: Vec<MaskToken> = pattern
            .chars()
            .map(|c| match SlotKind::from_token(c) {
                Some(kind) => MaskToken::Slot(kind),
                None => MaskToken::Literal(c),
            })
            .collect();

        if !tokens.iter().any(|t| matches!(t, MaskToken::Slot(_))) {
            return Err(MaskError::NoPlaceholderSlots {
                pattern: pattern.to_string(),
            });
        }

        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The parsed tokens.
    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Number of editable slots.
    pub fn slot_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, MaskToken::Slot(_)))
            .count()
    }

    /// Applies the mask, ending the output at the last filled slot.
    pub fn apply(&self, raw: &str) -> Masked {
        self.apply_with(raw, false)
    }

    /// Applies the mask. With `fill_blanks`, literals following the last
    /// filled slot are appended up to the next slot.
    pub fn apply_with(&self, raw: &str, fill_blanks: bool) -> Masked {
        let chars: Vec<char> = raw.chars().collect();
        if chars.is_empty() {
            return Masked::default();
        }

        let mut out = Masked::default();
        let mut i = 0;
        // Byte length of `masked` up to and including the last filled slot.
        let mut filled = 0;

        for token in &self.tokens {
            match *token {
                MaskToken::Literal(lit) => {
                    if chars.get(i) == Some(&lit) {
                        i += 1;
                    }
                    out.masked.push(lit);
                }
                MaskToken::Slot(kind) => {
                    while let Some(&c) = chars.get(i) {
                        if !kind.accepts(c) && is_mask_delimiter(c) {
                            i += 1;
                        } else {
                            break;
                        }
                    }
                    match chars.get(i) {
                        Some(&c) if kind.accepts(c) => {
                            let c = kind.convert(c);
                            out.masked.push(c);
                            out.unmasked.push(c);
                            filled = out.masked.len();
                            i += 1;
                        }
                        _ => break,
                    }
                }
            }
        }

        if !fill_blanks || out.unmasked.is_empty() {
            out.masked.truncate(filled);
        }
        out
    }
}

/// Applies `mask` to `raw`.
pub fn apply(raw: &str, mask: &Mask) -> Masked {
    mask.apply(raw)
}

/// Named mask presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// `#### - #### - #### - ####`
    CreditCard,
    /// Month/day/year: `##/##/####`
    Date,
    /// `##/##/#### ##:##`
    DateWithTime,
    /// `(###) ### - ####`
    Phone,
    /// `###-##-####`
    Social,
    /// `##:##`
    Time,
    /// `##:##:##`
    TimeWithSeconds,
}

static PRESETS: Lazy<HashMap<&'static str, Preset>> = Lazy::new(|| {
    [
        Preset::CreditCard,
        Preset::Date,
        Preset::DateWithTime,
        Preset::Phone,
        Preset::Social,
        Preset::Time,
        Preset::TimeWithSeconds,
    ]
    .into_iter()
    .map(|p| (p.name(), p))
    .collect()
});

impl Preset {
    /// Looks a preset up by its name, e.g. `"date"`.
    pub fn from_name(name: &str) -> Option<Self> {
        PRESETS.get(name).copied()
    }

    /// The preset's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::Date => "date",
            Self::DateWithTime => "date-with-time",
            Self::Phone => "phone",
            Self::Social => "social",
            Self::Time => "time",
            Self::TimeWithSeconds => "time-with-seconds",
        }
    }

    /// The pattern the preset resolves to.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::CreditCard => "#### - #### - #### - ####",
            Self::Date => "##/##/####",
            Self::DateWithTime => "##/##/#### ##:##",
            Self::Phone => "(###) ### - ####",
            Self::Social => "###-##-####",
            Self::Time => "##:##",
            Self::TimeWithSeconds => "##:##:##",
        }
    }
}

/// A configured mask: a named preset or a literal pattern.
///
/// Deserializes from a plain string; preset names take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MaskSpec {
    /// A named preset.
    Preset(Preset),
    /// A literal pattern.
    Pattern(String),
}

impl MaskSpec {
    /// The pattern this spec resolves to.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Preset(p) => p.pattern(),
            Self::Pattern(s) => s,
        }
    }

    /// Resolves to a parsed mask. An empty pattern resolves to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::NoPlaceholderSlots`] for a non-empty pattern
    /// without slots.
    pub fn resolve(&self) -> Result<Option<Mask>, MaskError> {
        let pattern = self.pattern();
        if pattern.is_empty() {
            return Ok(None);
        }
        Mask::parse(pattern).map(Some)
    }
}

impl From<&str> for MaskSpec {
    fn from(s: &str) -> Self {
        match Preset::from_name(s) {
            Some(p) => Self::Preset(p),
            None => Self::Pattern(s.to_string()),
        }
    }
}

impl From<String> for MaskSpec {
    fn from(s: String) -> Self {
        match Preset::from_name(&s) {
            Some(p) => Self::Preset(p),
            None => Self::Pattern(s),
        }
    }
}

impl From<Preset> for MaskSpec {
    fn from(p: Preset) -> Self {
        Self::Preset(p)
    }
}

impl From<MaskSpec> for String {
    fn from(spec: MaskSpec) -> Self {
        match spec {
            MaskSpec::Preset(p) => p.name().to_string(),
            MaskSpec::Pattern(s) => s,
        }
    }
}
