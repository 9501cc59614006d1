use super::navigator::PositionHint;
use crate::terminal::{CursorPos, KeyEvent};
use crate::widgets::inputs::{SelectInput, TextInput};
use crate::widgets::outputs::FlagsLabel;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, TextAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Name,
    RelatedModel,
    Options,
    Type,
    Flags,
}

/// Horizontal space a cell asks for when a row is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellWidth {
    Fixed(u16),
    Flex(u16),
}

impl CellKind {
    pub fn is_focusable(self) -> bool {
        !matches!(self, Self::Flags)
    }

    /// Where inside a row a cell of this kind sits. The name cell always
    /// opens a row and the type cell always closes the editable part.
    pub fn position_hint(self) -> Option<PositionHint> {
        match self {
            Self::Name => Some(PositionHint::Start),
            Self::RelatedModel | Self::Options => Some(PositionHint::Middle),
            Self::Type => Some(PositionHint::End),
            Self::Flags => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => " Name: ",
            Self::RelatedModel => " Rel. Model: ",
            Self::Options => " Options: ",
            Self::Type => " Type: ",
            Self::Flags => "",
        }
    }

    pub fn width(self) -> CellWidth {
        match self {
            Self::Name | Self::RelatedModel | Self::Options => CellWidth::Flex(4),
            Self::Type => CellWidth::Fixed(25),
            Self::Flags => CellWidth::Fixed(15),
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::RelatedModel => "related_model",
            Self::Options => "options",
            Self::Type => "type",
            Self::Flags => "flags",
        }
    }
}

/// The concrete editor behind a cell.
pub enum CellWidget {
    Text(TextInput),
    Select(SelectInput),
    Flags(FlagsLabel),
}

impl CellWidget {
    pub fn id(&self) -> &str {
        match self {
            Self::Text(w) => w.id(),
            Self::Select(w) => w.id(),
            Self::Flags(w) => w.id(),
        }
    }

    pub fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        match self {
            Self::Text(w) => w.draw(ctx),
            Self::Select(w) => w.draw(ctx),
            Self::Flags(w) => w.draw(ctx),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match self {
            Self::Text(w) => w.on_key(key),
            Self::Select(w) => w.on_key(key),
            Self::Flags(_) => InteractionResult::ignored(),
        }
    }

    pub fn on_text_action(&mut self, action: TextAction) -> InteractionResult {
        match self {
            Self::Text(w) => w.on_text_action(action),
            Self::Select(w) => w.on_text_action(action),
            Self::Flags(_) => InteractionResult::ignored(),
        }
    }

    pub fn cursor_pos(&self) -> Option<CursorPos> {
        match self {
            Self::Text(w) => w.cursor_pos(),
            Self::Select(w) => w.cursor_pos(),
            Self::Flags(_) => None,
        }
    }
}

pub struct Cell {
    kind: CellKind,
    widget: CellWidget,
}

impl Cell {
    pub fn new(kind: CellKind, widget: CellWidget) -> Self {
        Self { kind, widget }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn widget(&self) -> &CellWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut CellWidget {
        &mut self.widget
    }

    /// Items a selector cell lets the user pick from.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.widget {
            CellWidget::Select(select) => Some(select.options()),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match &self.widget {
            CellWidget::Select(select) => select.selected(),
            _ => None,
        }
    }

    pub fn text(&self) -> String {
        match &self.widget {
            CellWidget::Text(input) => input.text().to_string(),
            CellWidget::Select(select) => select.selected_text().to_string(),
            CellWidget::Flags(flags) => flags.text(),
        }
    }
}
