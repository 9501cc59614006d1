use crate::catalog::FieldCatalog;
use crate::grid::{
    CellEdit, CellKind, Direction, GridFocus, GridNavigator, GridShape, PositionHint, Row,
    WriteBack, write_back,
};
use crate::schema::{FieldDefinition, Model};
use crate::terminal::KeyEvent;
use crate::widgets::traits::{InteractionResult, TextAction};
use crate::widgets::value::Value;

impl GridShape for Vec<Row> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn focusable_count(&self, row: usize) -> usize {
        self.get(row).map(Row::focusable_count).unwrap_or(0)
    }
}

/// One model being edited: its document, one row per field, and the grid
/// focus. Row `i` always renders `model.fields[i]`.
pub struct Page {
    title: String,
    model: Model,
    rows: Vec<Row>,
    navigator: GridNavigator,
}

impl Page {
    /// Opens `model` for editing. A model without fields gets one blank
    /// field so the grid always has a row to focus.
    pub fn open(title: impl Into<String>, mut model: Model, catalog: &FieldCatalog) -> Self {
        if model.fields.is_empty() {
            model.fields.push(FieldDefinition::new());
        }
        for field in &model.fields {
            if !catalog.is_known_type(&field.field_type) {
                tracing::warn!(
                    model = %model.name,
                    field = %field.name,
                    field_type = %field.field_type,
                    "field type not in catalog"
                );
            }
        }
        let rows = model
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                Row::build(index, field, model.is_search_field(&field.name), catalog)
            })
            .collect();
        Self {
            title: title.into(),
            model,
            rows,
            navigator: GridNavigator::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn focus(&self) -> GridFocus {
        self.navigator.focus()
    }

    pub fn add_field(&mut self, catalog: &FieldCatalog) {
        let field = FieldDefinition::new();
        let index = self.model.fields.len();
        let searchable = self.model.is_search_field(&field.name);
        self.rows.push(Row::build(index, &field, searchable, catalog));
        self.model.fields.push(field);
        self.navigator
            .set_focus(GridFocus { row: index, cell: 0 }, &self.rows);
        tracing::debug!(fields = self.model.fields.len(), "field added");
    }

    /// Drops the last field unless it is the only one left.
    pub fn remove_field(&mut self) -> bool {
        if self.model.fields.len() <= 1 {
            return false;
        }
        self.model.fields.pop();
        self.rows.pop();
        self.navigator.revalidate(&self.rows);
        tracing::debug!(fields = self.model.fields.len(), "field removed");
        true
    }

    pub fn toggle_required(&mut self) {
        let row = self.navigator.focus().row;
        let Some(field) = self.model.fields.get_mut(row) else {
            return;
        };
        field.required = !field.required;
        tracing::debug!(row, required = field.required, "required toggled");
        self.refresh_flags(row);
    }

    /// Toggles search membership of the focused field's current name.
    pub fn toggle_searchable(&mut self) {
        let row = self.navigator.focus().row;
        let Some(name) = self.model.fields.get(row).map(|field| field.name.clone()) else {
            return;
        };
        let searchable = self.model.toggle_search_field(&name);
        tracing::debug!(%name, searchable, "search membership toggled");
        self.refresh_all_flags();
    }

    pub fn change_field_type(&mut self, row: usize, field_type: &str, catalog: &FieldCatalog) {
        let Some(field) = self.model.fields.get_mut(row) else {
            return;
        };
        write_back(field, CellEdit::Type(field_type.to_string()));
        self.rebuild_row(row, catalog);
        let cell = self.rows[row].type_cell_index().unwrap_or(0);
        self.navigator.set_focus(GridFocus { row, cell }, &self.rows);
        tracing::debug!(row, cell, field_type, "field type changed");
    }

    pub fn navigate(&mut self, direction: Direction) -> GridFocus {
        let hint = self.focused_hint();
        self.navigator.navigate(direction, hint, &self.rows)
    }

    pub fn focused_kind(&self) -> Option<CellKind> {
        let focus = self.navigator.focus();
        self.rows
            .get(focus.row)
            .and_then(|row| row.cell(focus.cell))
            .map(|cell| cell.kind())
    }

    fn focused_hint(&self) -> PositionHint {
        self.focused_kind()
            .and_then(CellKind::position_hint)
            .unwrap_or(PositionHint::Start)
    }

    pub fn focused_widget_id(&self) -> Option<String> {
        let focus = self.navigator.focus();
        self.rows
            .get(focus.row)
            .and_then(|row| row.cell(focus.cell))
            .map(|cell| cell.widget().id().to_string())
    }

    pub fn dispatch_key(&mut self, key: KeyEvent) -> InteractionResult {
        let focus = self.navigator.focus();
        self.rows
            .get_mut(focus.row)
            .and_then(|row| row.cell_mut(focus.cell))
            .map(|cell| cell.widget_mut().on_key(key))
            .unwrap_or_default()
    }

    pub fn dispatch_text_action(&mut self, action: TextAction) -> InteractionResult {
        let focus = self.navigator.focus();
        self.rows
            .get_mut(focus.row)
            .and_then(|row| row.cell_mut(focus.cell))
            .map(|cell| cell.widget_mut().on_text_action(action))
            .unwrap_or_default()
    }

    /// Writes an edited cell value back into the field it belongs to.
    pub fn apply_cell_value(&mut self, focus: GridFocus, value: &Value, catalog: &FieldCatalog) {
        let Some(kind) = self
            .rows
            .get(focus.row)
            .and_then(|row| row.cell(focus.cell))
            .map(|cell| cell.kind())
        else {
            return;
        };
        let Some(edit) = CellEdit::from_value(kind, value) else {
            return;
        };
        let Some(field) = self.model.fields.get_mut(focus.row) else {
            return;
        };
        match write_back(field, edit) {
            WriteBack::Rebuild => {
                let field_type = field.field_type.clone();
                self.change_field_type(focus.row, &field_type, catalog);
            }
            WriteBack::Updated if kind == CellKind::Name => self.refresh_all_flags(),
            WriteBack::Updated => {}
        }
    }

    fn rebuild_row(&mut self, row: usize, catalog: &FieldCatalog) {
        let field = &self.model.fields[row];
        let searchable = self.model.is_search_field(&field.name);
        self.rows[row] = Row::build(row, field, searchable, catalog);
    }

    fn refresh_flags(&mut self, row: usize) {
        let field = &self.model.fields[row];
        let searchable = self.model.is_search_field(&field.name);
        self.rows[row].refresh_flags(field.required, searchable);
    }

    fn refresh_all_flags(&mut self) {
        for row in 0..self.rows.len() {
            self.refresh_flags(row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Page;
    use crate::catalog::FieldCatalog;
    use crate::grid::{CellKind, Direction, GridFocus};
    use crate::schema::{FieldDefinition, Model};
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::traits::WidgetAction;
    use crate::widgets::value::Value;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn catalog() -> FieldCatalog {
        FieldCatalog::new(
            ["string", "int", "float", "related", "dropdown"]
                .into_iter()
                .map(String::from)
                .collect(),
            vec!["User".into(), "Post".into()],
        )
    }

    fn blank_page() -> Page {
        Page::open("model #1", Model::default(), &catalog())
    }

    fn set_type(page: &mut Page, row: usize, field_type: &str) {
        page.change_field_type(row, field_type, &catalog());
    }

    #[test]
    fn empty_model_opens_with_one_blank_row() {
        let page = blank_page();
        assert_eq!(page.model().fields, vec![FieldDefinition::new()]);
        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.focus(), GridFocus::default());
    }

    #[test]
    fn add_field_focuses_new_name_cell() {
        let mut page = blank_page();
        page.add_field(&catalog());
        assert_eq!(page.rows().len(), 2);
        assert_eq!(page.focus(), GridFocus { row: 1, cell: 0 });
        assert_eq!(page.focused_kind(), Some(CellKind::Name));
        assert_eq!(page.rows()[1].cells()[1].selected(), None);
    }

    #[test]
    fn remove_field_keeps_last_row() {
        let mut page = blank_page();
        assert!(!page.remove_field());
        page.add_field(&catalog());
        assert!(page.remove_field());
        assert_eq!(page.model().fields.len(), 1);
        assert_eq!(page.focus(), GridFocus { row: 0, cell: 0 });
    }

    #[test]
    fn toggle_required_twice_restores_flags() {
        let mut page = blank_page();
        let before = page.rows()[0].flags_text();
        page.toggle_required();
        assert!(page.model().fields[0].required);
        assert_eq!(page.rows()[0].flags_text(), "Flags: R-");
        page.toggle_required();
        assert!(!page.model().fields[0].required);
        assert_eq!(page.rows()[0].flags_text(), before);
    }

    #[test]
    fn toggle_searchable_twice_restores_search_fields() {
        let mut model = Model::named("User");
        model.fields.push(FieldDefinition::named("email", "string"));
        model.search_fields.push("id".into());
        let mut page = Page::open("User", model, &catalog());

        page.toggle_searchable();
        assert_eq!(page.model().search_fields, ["id", "email"]);
        assert_eq!(page.rows()[0].flags_text(), "Flags: -S");
        page.toggle_searchable();
        assert_eq!(page.model().search_fields, ["id"]);
        assert_eq!(page.rows()[0].flags_text(), "Flags: --");
    }

    #[test]
    fn rename_keeps_membership_under_old_name() {
        let mut model = Model::named("User");
        model.fields.push(FieldDefinition::named("email", "string"));
        let mut page = Page::open("User", model, &catalog());
        page.toggle_searchable();

        page.apply_cell_value(
            GridFocus { row: 0, cell: 0 },
            &Value::Text("mail".into()),
            &catalog(),
        );
        assert_eq!(page.model().fields[0].name, "mail");
        assert_eq!(page.model().search_fields, ["email"]);
        assert_eq!(page.rows()[0].flags_text(), "Flags: --");
    }

    #[test]
    fn remove_keeps_membership_of_removed_field() {
        let mut page = blank_page();
        page.add_field(&catalog());
        page.apply_cell_value(
            GridFocus { row: 1, cell: 0 },
            &Value::Text("slug".into()),
            &catalog(),
        );
        page.toggle_searchable();
        page.remove_field();
        assert_eq!(page.model().search_fields, ["slug"]);
    }

    #[test]
    fn related_model_survives_switch_to_dropdown() {
        let mut page = blank_page();
        set_type(&mut page, 0, "related");
        assert_eq!(page.focus(), GridFocus { row: 0, cell: 2 });
        page.apply_cell_value(
            GridFocus { row: 0, cell: 1 },
            &Value::Text("Post".into()),
            &catalog(),
        );
        set_type(&mut page, 0, "dropdown");

        assert_eq!(
            page.rows()[0].kinds(),
            [CellKind::Name, CellKind::Options, CellKind::Type, CellKind::Flags]
        );
        assert_eq!(
            page.model().fields[0].related_model.as_deref(),
            Some("Post")
        );
    }

    #[test]
    fn selecting_related_type_shows_model_choices() {
        let mut page = blank_page();
        page.add_field(&catalog());
        let type_index = 3;
        let field_type = catalog().field_types()[type_index].clone();
        page.apply_cell_value(
            GridFocus { row: 1, cell: 1 },
            &Value::Text(field_type),
            &catalog(),
        );

        let row = &page.rows()[1];
        assert_eq!(
            row.kinds(),
            [CellKind::Name, CellKind::RelatedModel, CellKind::Type, CellKind::Flags]
        );
        assert_eq!(row.cells()[1].choices(), Some(&["User".to_string(), "Post".to_string()][..]));
        assert_eq!(row.cells()[2].selected(), Some(type_index));
        assert_eq!(page.focus(), GridFocus { row: 1, cell: 2 });
    }

    #[test]
    fn typing_in_focused_name_cell_reports_text() {
        let mut page = blank_page();
        let result = page.dispatch_key(KeyEvent::plain(KeyCode::Char('x')));
        assert_eq!(
            result.actions,
            vec![WidgetAction::ValueChanged {
                value: Value::Text("x".into())
            }]
        );
        assert_eq!(page.focused_widget_id().as_deref(), Some("row0.name"));
    }

    #[test]
    fn navigation_uses_focused_cell_hint() {
        let mut page = blank_page();
        page.add_field(&catalog());
        set_type(&mut page, 0, "related");
        page.navigator.set_focus(GridFocus { row: 0, cell: 0 }, &page.rows);

        assert_eq!(page.navigate(Direction::Forward), GridFocus { row: 0, cell: 1 });
        assert_eq!(page.navigate(Direction::Forward), GridFocus { row: 0, cell: 2 });
        assert_eq!(page.navigate(Direction::Forward), GridFocus { row: 1, cell: 1 });
        assert_eq!(page.navigate(Direction::Backward), GridFocus { row: 1, cell: 0 });
        assert_eq!(page.navigate(Direction::Backward), GridFocus { row: 0, cell: 2 });
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add,
        Remove,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Add), Just(Op::Remove)]
    }

    proptest! {
        #[test]
        fn rows_track_fields_and_never_drop_below_one(
            ops in proptest::collection::vec(op(), 0..40)
        ) {
            let mut page = blank_page();
            for op in ops {
                match op {
                    Op::Add => page.add_field(&catalog()),
                    Op::Remove => {
                        page.remove_field();
                    }
                }
                prop_assert!(page.model().fields.len() >= 1);
                prop_assert_eq!(page.rows().len(), page.model().fields.len());
                prop_assert!(page.focus().row < page.rows().len());
            }
        }

        #[test]
        fn type_changes_keep_name_and_required(
            first in 0usize..6,
            second in 0usize..6,
            required in any::<bool>(),
        ) {
            let types = ["", "string", "int", "float", "related", "dropdown"];
            let mut model = Model::named("Post");
            let mut field = FieldDefinition::named("title", types[first]);
            field.required = required;
            model.fields.push(field);
            let mut page = Page::open("Post", model, &catalog());

            set_type(&mut page, 0, types[second]);
            let field = &page.model().fields[0];
            prop_assert_eq!(field.name.as_str(), "title");
            prop_assert_eq!(field.required, required);
            prop_assert_eq!(field.field_type.as_str(), types[second]);
        }
    }
}
