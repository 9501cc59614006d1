use crate::terminal::{CursorPos, KeyEvent, TerminalSize};
use crate::ui::span::SpanLine;
use crate::widgets::inputs::text_edit;
use crate::widgets::value::Value;

// ---------------------------------------------------------------------------
// Render context & output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RenderContext {
    pub focused_id: Option<String>,
    pub terminal_size: TerminalSize,
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

pub trait Drawable {
    fn id(&self) -> &str;
    fn label(&self) -> &str {
        ""
    }
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

/// Emitted by an editor when its value changes. The owner of the editor
/// knows which document attribute the editor is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetAction {
    ValueChanged { value: Value },
}

#[derive(Debug, Clone, Default)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }

    pub fn value_changed(value: Value) -> Self {
        Self::with_action(WidgetAction::ValueChanged { value })
    }
}

// ---------------------------------------------------------------------------
// TextAction & TextEditState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    DeleteWordLeft,
    DeleteWordRight,
}

pub struct TextEditState<'a> {
    pub value: &'a mut String,
    pub cursor: &'a mut usize,
}

impl TextAction {
    pub(crate) fn apply(self, state: &mut TextEditState<'_>) -> bool {
        match self {
            Self::DeleteWordLeft => text_edit::delete_word_left(state.value, state.cursor),
            Self::DeleteWordRight => text_edit::delete_word_right(state.value, state.cursor),
        }
    }
}

// ---------------------------------------------------------------------------
// Interactive editors
// ---------------------------------------------------------------------------

pub trait Interactive {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        None
    }

    fn on_text_action(&mut self, action: TextAction) -> InteractionResult {
        let Some(mut state) = self.text_editing() else {
            return InteractionResult::ignored();
        };
        if action.apply(&mut state) {
            let value = Value::Text(state.value.clone());
            InteractionResult::value_changed(value)
        } else {
            InteractionResult::ignored()
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        None
    }

    fn value(&self) -> Option<Value> {
        None
    }

    fn set_value(&mut self, _value: Value) {}
}

pub trait InteractiveNode: Drawable + Interactive {}
impl<T> InteractiveNode for T where T: Drawable + Interactive {}
