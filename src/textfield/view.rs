//! View rendering methods for the textfield component.

use super::model::Model;
use super::types::InputType;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// View renders the field in its current state.
    ///
    /// Layout: an optional label line, then prompt, prefix, value (or
    /// placeholder) padded to `width`, suffix and counter, then the first
    /// error once errors are shown.
    pub fn view(&self) -> String {
        let mut out = String::new();

        if self.shows_label() {
            if let Some(label) = &self.label {
                out.push_str(&self.label_style.render(label));
                out.push('\n');
            }
        }

        out.push_str(&self.prompt_style.render(&self.prompt));
        if let Some(prefix) = &self.prefix {
            out.push_str(&self.text_style.render(prefix));
        }

        let (body, body_width) = self.body_view();
        out.push_str(&body);
        if self.width > body_width {
            out.push_str(&" ".repeat(self.width - body_width));
        }
        if let Some(suffix) = &self.suffix {
            out.push_str(&self.text_style.render(suffix));
        }

        if let Some(counter) = self.counter_text() {
            out.push(' ');
            out.push_str(&self.counter_style.render(&counter));
        }

        if self.shows_error() {
            if let Some(first) = self.validation.errors.first() {
                out.push('\n');
                out.push_str(&self.error_style.render(first));
            }
        }

        out
    }

    /// The styled value, echoed per input type, or the placeholder when
    /// empty; paired with its unstyled display width.
    fn body_view(&self) -> (String, usize) {
        if self.display.is_empty() {
            // The label doubles as placeholder text until it is raised.
            let label_in_place = self.shows_label() && !self.label_value();
            return match &self.placeholder {
                Some(p) if !label_in_place => {
                    (self.placeholder_style.render(p), UnicodeWidthStr::width(p.as_str()))
                }
                _ => (String::new(), 0),
            };
        }

        let text = match self.input_type {
            InputType::Password => self
                .echo_character
                .to_string()
                .repeat(self.display.graphemes(true).count()),
            _ => self.display.clone(),
        };
        let width = UnicodeWidthStr::width(text.as_str());
        (self.text_style.render(&text), width)
    }
}
