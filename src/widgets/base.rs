use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::traits::RenderContext;

#[derive(Debug, Clone)]
pub struct WidgetBase {
    id: String,
    label: String,
}

impl WidgetBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_focused(&self, ctx: &RenderContext) -> bool {
        ctx.focused_id.as_deref() == Some(self.id.as_str())
    }

    pub fn label_span(&self, focused: bool) -> Span {
        let style = if focused {
            Style::new().color(Color::Yellow).bold()
        } else {
            Style::default()
        };
        Span::styled(self.label.clone(), style)
    }
}
