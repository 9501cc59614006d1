use crate::ui::span::{Span, SpanLine, plain_text};
use crate::ui::style::{Color, Style};
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

const PREFIX: &str = "Flags: ";
const UNSET: &str = "-";

/// Read-only `R`/`S` indicator for a field row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagsLabel {
    id: String,
    required: bool,
    searchable: bool,
}

impl FlagsLabel {
    pub fn new(id: impl Into<String>, required: bool, searchable: bool) -> Self {
        Self {
            id: id.into(),
            required,
            searchable,
        }
    }

    pub fn set(&mut self, required: bool, searchable: bool) {
        self.required = required;
        self.searchable = searchable;
    }

    pub fn spans(&self) -> SpanLine {
        let muted = Style::new().color(Color::DarkGrey);
        let flag = |on: bool, letter: &str| {
            if on {
                Span::new(letter)
            } else {
                Span::styled(UNSET, muted)
            }
        };
        vec![
            Span::new(PREFIX),
            flag(self.required, "R"),
            flag(self.searchable, "S"),
        ]
    }

    pub fn text(&self) -> String {
        plain_text(&self.spans())
    }
}

impl Drawable for FlagsLabel {
    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        DrawOutput {
            lines: vec![self.spans()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FlagsLabel;

    #[test]
    fn renders_letters_or_muted_placeholders() {
        assert_eq!(FlagsLabel::new("f", false, false).text(), "Flags: --");
        assert_eq!(FlagsLabel::new("f", true, false).text(), "Flags: R-");
        assert_eq!(FlagsLabel::new("f", false, true).text(), "Flags: -S");
        assert_eq!(FlagsLabel::new("f", true, true).text(), "Flags: RS");
    }

    #[test]
    fn placeholder_is_styled_differently_from_letter() {
        let off = FlagsLabel::new("f", false, false).spans();
        let on = FlagsLabel::new("f", true, false).spans();
        assert_ne!(off[1].style, on[1].style);
    }
}
