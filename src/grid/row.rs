use super::cell::{Cell, CellKind, CellWidget};
use crate::catalog::FieldCatalog;
use crate::schema::{FieldDefinition, FieldKind};
use crate::widgets::inputs::{SelectInput, TextInput};
use crate::widgets::outputs::FlagsLabel;
use crate::widgets::value::Value;

const RELATED_CELLS: &[CellKind] = &[
    CellKind::Name,
    CellKind::RelatedModel,
    CellKind::Type,
    CellKind::Flags,
];
const DROPDOWN_CELLS: &[CellKind] = &[
    CellKind::Name,
    CellKind::Options,
    CellKind::Type,
    CellKind::Flags,
];
const PLAIN_CELLS: &[CellKind] = &[CellKind::Name, CellKind::Type, CellKind::Flags];

/// Cell sequence shown for a field of the given kind.
pub fn cell_kinds(kind: FieldKind) -> &'static [CellKind] {
    match kind {
        FieldKind::Related => RELATED_CELLS,
        FieldKind::Dropdown => DROPDOWN_CELLS,
        FieldKind::Plain => PLAIN_CELLS,
    }
}

/// On-screen editors for one field. Rebuilt wholesale whenever the field's
/// type changes; the field itself is never touched by a rebuild.
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn build(
        index: usize,
        field: &FieldDefinition,
        searchable: bool,
        catalog: &FieldCatalog,
    ) -> Self {
        let cells = cell_kinds(field.kind())
            .iter()
            .map(|kind| {
                let id = format!("row{index}.{}", kind.slug());
                let widget = match kind {
                    CellKind::Name => CellWidget::Text(
                        TextInput::new(id, kind.label()).with_default(field.name.as_str()),
                    ),
                    CellKind::Options => CellWidget::Text(
                        TextInput::new(id, kind.label())
                            .with_placeholder("a, b, c")
                            .with_default(field.options_text()),
                    ),
                    CellKind::RelatedModel => CellWidget::Select(
                        SelectInput::new(id, kind.label(), catalog.model_names().to_vec())
                            .with_selected(catalog.model_index(field.related_model_or_empty())),
                    ),
                    CellKind::Type => CellWidget::Select(
                        SelectInput::new(id, kind.label(), catalog.field_types().to_vec())
                            .with_selected(catalog.type_index(&field.field_type)),
                    ),
                    CellKind::Flags => {
                        CellWidget::Flags(FlagsLabel::new(id, field.required, searchable))
                    }
                };
                Cell::new(*kind, widget)
            })
            .collect();
        Self { cells }
    }

    pub fn kinds(&self) -> Vec<CellKind> {
        self.cells.iter().map(Cell::kind).collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn focusable_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.kind().is_focusable()).count()
    }

    pub fn type_cell_index(&self) -> Option<usize> {
        self.cells.iter().position(|cell| cell.kind() == CellKind::Type)
    }

    pub fn refresh_flags(&mut self, required: bool, searchable: bool) {
        for cell in &mut self.cells {
            if let CellWidget::Flags(flags) = cell.widget_mut() {
                flags.set(required, searchable);
            }
        }
    }

    pub fn flags_text(&self) -> String {
        self.cells
            .iter()
            .find(|cell| cell.kind() == CellKind::Flags)
            .map(Cell::text)
            .unwrap_or_default()
    }
}

/// A user edit of one cell, carrying the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEdit {
    Name(String),
    Options(String),
    RelatedModel(String),
    Type(String),
}

impl CellEdit {
    pub fn from_value(kind: CellKind, value: &Value) -> Option<Self> {
        let text = value.as_text()?.to_string();
        match kind {
            CellKind::Name => Some(Self::Name(text)),
            CellKind::Options => Some(Self::Options(text)),
            CellKind::RelatedModel => Some(Self::RelatedModel(text)),
            CellKind::Type => Some(Self::Type(text)),
            CellKind::Flags => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteBack {
    Updated,
    /// The field's type changed; its row must be rebuilt.
    Rebuild,
}

pub fn write_back(field: &mut FieldDefinition, edit: CellEdit) -> WriteBack {
    match edit {
        CellEdit::Name(name) => field.name = name,
        CellEdit::Options(text) => field.set_options_text(&text),
        CellEdit::RelatedModel(model) => field.related_model = Some(model),
        CellEdit::Type(field_type) => {
            field.field_type = field_type;
            return WriteBack::Rebuild;
        }
    }
    WriteBack::Updated
}
