use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{DrawOutput, Drawable, InteractionResult, Interactive, RenderContext};
use crate::widgets::value::Value;

/// Cycling selector over a fixed option list. Starts with no selection
/// unless one is preset; every change reports the selected text.
pub struct SelectInput {
    base: WidgetBase,
    options: Vec<String>,
    selected: Option<usize>,
}

impl SelectInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            options,
            selected: None,
        }
    }

    /// Out-of-range presets are dropped rather than clamped.
    pub fn with_selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected.filter(|index| *index < self.options.len());
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_text(&self) -> &str {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn move_left(&mut self) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            Some(current) => (current + len - 1) % len,
            None => len - 1,
        });
        true
    }

    fn move_right(&mut self) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            Some(current) => (current + 1) % len,
            None => 0,
        });
        true
    }

    fn selection_result(&self) -> InteractionResult {
        InteractionResult::value_changed(Value::Text(self.selected_text().to_string()))
    }
}

impl Drawable for SelectInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let arrows = if focused {
            Style::new().color(Color::Cyan)
        } else {
            Style::new().color(Color::DarkGrey)
        };
        DrawOutput {
            lines: vec![vec![
                self.base.label_span(focused),
                Span::styled("‹ ", arrows),
                Span::new(self.selected_text().to_string()),
                Span::styled(" ›", arrows),
            ]],
        }
    }
}

impl Interactive for SelectInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        let moved = match key.code {
            KeyCode::Left => self.move_left(),
            KeyCode::Right | KeyCode::Char(' ') => self.move_right(),
            _ => return InteractionResult::ignored(),
        };
        if moved {
            self.selection_result()
        } else {
            InteractionResult::ignored()
        }
    }

    fn value(&self) -> Option<Value> {
        self.selected
            .map(|_| Value::Text(self.selected_text().to_string()))
    }

    fn set_value(&mut self, value: Value) {
        if let Some(text) = value.as_text() {
            self.selected = self.options.iter().position(|option| option == text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectInput;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::traits::{Interactive, WidgetAction};
    use crate::widgets::value::Value;

    fn options() -> Vec<String> {
        vec!["string".into(), "int".into(), "related".into()]
    }

    #[test]
    fn first_right_from_no_selection_picks_first_option() {
        let mut select = SelectInput::new("t", " Type: ", options());
        assert_eq!(select.value(), None);
        let result = select.on_key(KeyEvent::plain(KeyCode::Right));
        assert_eq!(
            result.actions,
            vec![WidgetAction::ValueChanged {
                value: Value::Text("string".into())
            }]
        );
    }

    #[test]
    fn left_wraps_to_last_option() {
        let mut select = SelectInput::new("t", " Type: ", options()).with_selected(Some(0));
        select.on_key(KeyEvent::plain(KeyCode::Left));
        assert_eq!(select.selected_text(), "related");
    }

    #[test]
    fn out_of_range_preset_means_no_selection() {
        let select = SelectInput::new("t", " Type: ", options()).with_selected(Some(7));
        assert_eq!(select.selected(), None);
        assert_eq!(select.selected_text(), "");
    }

    #[test]
    fn empty_option_list_ignores_keys() {
        let mut select = SelectInput::new("m", " Rel. Model: ", Vec::new());
        assert!(!select.on_key(KeyEvent::plain(KeyCode::Right)).handled);
    }

    #[test]
    fn set_value_selects_matching_option() {
        let mut select = SelectInput::new("t", " Type: ", options());
        select.set_value(Value::Text("int".into()));
        assert_eq!(select.selected(), Some(1));
    }
}
