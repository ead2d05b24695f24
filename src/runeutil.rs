//! Cleanup for text arriving from the terminal.
//!
//! A text field holds a single line, so pasted text is flattened before it
//! reaches the field: ANSI escape sequences are stripped, line breaks and
//! tabs are replaced, and remaining control characters are dropped.
//!
//! ```rust
//! use bubbletea_textfield::runeutil::{new_sanitizer, replace_newlines};
//!
//! let sanitizer = new_sanitizer(vec![replace_newlines(", ")]);
//! assert_eq!(sanitizer.sanitize("a\nb\x1b[31mc\x07"), "a, bc");
//! ```

/// Flattens text into a single clean line.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    replace_newline: String,
    replace_tab: String,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            replace_newline: " ".to_string(),
            replace_tab: " ".to_string(),
        }
    }
}

/// A configuration option applied by [`new_sanitizer`].
pub type SanitizerOpt = Box<dyn FnOnce(&mut Sanitizer)>;

/// Builds a sanitizer from the defaults and `opts`, applied in order.
pub fn new_sanitizer(opts: Vec<SanitizerOpt>) -> Sanitizer {
    let mut s = Sanitizer::default();
    for opt in opts {
        opt(&mut s);
    }
    s
}

/// Replaces each tab with `tab_repl`.
pub fn replace_tabs(tab_repl: &str) -> SanitizerOpt {
    let repl = tab_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_tab = repl)
}

/// Replaces each line break (`\n`, `\r` or `\r\n`) with `nl_repl`.
pub fn replace_newlines(nl_repl: &str) -> SanitizerOpt {
    let repl = nl_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_newline = repl)
}

impl Sanitizer {
    /// Returns `input` as a single clean line.
    pub fn sanitize(&self, input: &str) -> String {
        // The escape stripper drops bare carriage returns.
        let unified = input.replace("\r\n", "\n").replace('\r', "\n");
        let stripped = strip_ansi_escapes::strip_str(unified);
        let mut out = String::with_capacity(stripped.len());

        for c in stripped.chars() {
            match c {
                '\n' => out.push_str(&self.replace_newline),
                '\t' => out.push_str(&self.replace_tab),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}
