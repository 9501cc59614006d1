use super::text_edit;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, TextEditState,
};
use crate::widgets::value::Value;
use unicode_width::UnicodeWidthStr;

/// Single-line text editor. Every edit reports the full new text.
pub struct TextInput {
    base: WidgetBase,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            value: String::new(),
            cursor: 0,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.set_value(value.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    fn edited_result(&self) -> InteractionResult {
        InteractionResult::value_changed(Value::Text(self.value.clone()))
    }
}

impl Drawable for TextInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let mut line = vec![self.base.label_span(focused)];
        match &self.placeholder {
            Some(placeholder) if self.value.is_empty() => {
                line.push(Span::styled(
                    placeholder.clone(),
                    Style::new().color(Color::DarkGrey),
                ));
            }
            _ => line.push(Span::new(self.value.clone())),
        }
        DrawOutput { lines: vec![line] }
    }
}

impl Interactive for TextInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Char(ch) if inserts_text(key.modifiers) => {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                self.edited_result()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                InteractionResult::handled()
            }
            _ => InteractionResult::ignored(),
        }
    }

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        Some(TextEditState {
            value: &mut self.value,
            cursor: &mut self.cursor,
        })
    }

    fn value(&self) -> Option<Value> {
        Some(Value::Text(self.value.clone()))
    }

    fn set_value(&mut self, value: Value) {
        if let Some(text) = value.as_text() {
            self.value = text.to_owned();
            self.cursor = text_edit::char_count(&self.value);
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let label_width = UnicodeWidthStr::width(self.base.label());
        let value_width = text_edit::width_before(&self.value, self.cursor);
        Some(CursorPos {
            col: (label_width + value_width).min(u16::MAX as usize) as u16,
            row: 0,
        })
    }
}

fn inserts_text(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}
