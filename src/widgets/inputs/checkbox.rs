use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{DrawOutput, Drawable, InteractionResult, Interactive, RenderContext};
use crate::widgets::value::Value;

pub struct CheckboxInput {
    base: WidgetBase,
    checked: bool,
}

impl CheckboxInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            checked: false,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Drawable for CheckboxInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let mark = if self.checked {
            Span::styled("[x]", Style::new().color(Color::Green))
        } else {
            Span::new("[ ]")
        };
        DrawOutput {
            lines: vec![vec![self.base.label_span(focused), mark]],
        }
    }
}

impl Interactive for CheckboxInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.checked = !self.checked;
                InteractionResult::value_changed(Value::Bool(self.checked))
            }
            _ => InteractionResult::ignored(),
        }
    }

    fn value(&self) -> Option<Value> {
        Some(Value::Bool(self.checked))
    }

    fn set_value(&mut self, value: Value) {
        if let Some(flag) = value.to_bool() {
            self.checked = flag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CheckboxInput;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::traits::{Interactive, WidgetAction};
    use crate::widgets::value::Value;

    #[test]
    fn space_toggles_and_reports() {
        let mut checkbox = CheckboxInput::new("h", " Hidden: ");
        let result = checkbox.on_key(KeyEvent::plain(KeyCode::Char(' ')));
        assert!(checkbox.is_checked());
        assert_eq!(
            result.actions,
            vec![WidgetAction::ValueChanged {
                value: Value::Bool(true)
            }]
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut checkbox = CheckboxInput::new("h", " Hidden: ").with_checked(true);
        assert!(!checkbox.on_key(KeyEvent::plain(KeyCode::Char('x'))).handled);
        assert!(checkbox.is_checked());
    }
}
