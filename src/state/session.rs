use super::dialog::ModelDialog;
use super::page::Page;
use crate::catalog::{CatalogSnapshot, FieldCatalog};
use crate::grid::{Direction, GridFocus};
use crate::schema::Model;
use crate::terminal::KeyEvent;
use crate::widgets::traits::{InteractionResult, TextAction, WidgetAction};

/// Which editor a widget action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Grid(GridFocus),
    Dialog(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitMode {
    /// Print the current page's model, then quit.
    Export,
    /// Quit without printing anything.
    Abort,
}

/// Everything the editor mutates during one run: the catalog fetched at
/// startup, one page per model, which page is active, and the model dialog
/// when it is open.
pub struct Session {
    catalog: FieldCatalog,
    pages: Vec<Page>,
    current: usize,
    dialog: Option<ModelDialog>,
    exit: Option<ExitMode>,
}

impl Session {
    /// One page per provider model; a single blank page when there are none.
    pub fn start(snapshot: CatalogSnapshot) -> Self {
        let CatalogSnapshot { catalog, models } = snapshot;
        let models = if models.is_empty() {
            vec![Model::default()]
        } else {
            models
        };
        let pages = models
            .into_iter()
            .enumerate()
            .map(|(index, model)| Page::open(page_title(index, &model), model, &catalog))
            .collect();
        Self {
            catalog,
            pages,
            current: 0,
            dialog: None,
            exit: None,
        }
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current]
    }

    fn current_page_mut(&mut self) -> &mut Page {
        &mut self.pages[self.current]
    }

    pub fn dialog(&self) -> Option<&ModelDialog> {
        self.dialog.as_ref()
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn add_field(&mut self) {
        let Self {
            catalog,
            pages,
            current,
            ..
        } = self;
        pages[*current].add_field(catalog);
    }

    pub fn remove_field(&mut self) -> bool {
        self.current_page_mut().remove_field()
    }

    pub fn toggle_required(&mut self) {
        self.current_page_mut().toggle_required();
    }

    pub fn toggle_searchable(&mut self) {
        self.current_page_mut().toggle_searchable();
    }

    /// Returns false when already on the last page.
    pub fn page_forward(&mut self) -> bool {
        if self.current + 1 >= self.pages.len() {
            return false;
        }
        self.current += 1;
        tracing::debug!(page = self.current, "page forward");
        true
    }

    /// Returns false when already on the first page.
    pub fn page_backward(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        tracing::debug!(page = self.current, "page backward");
        true
    }

    pub fn toggle_dialog(&mut self) {
        if self.dialog.is_some() {
            self.close_dialog();
        } else {
            self.dialog = Some(ModelDialog::open(self.current_page().model()));
        }
    }

    pub fn close_dialog(&mut self) -> bool {
        self.dialog.take().is_some()
    }

    pub fn navigate(&mut self, direction: Direction) {
        match self.dialog.as_mut() {
            Some(dialog) => {
                dialog.navigate(direction);
            }
            None => {
                self.current_page_mut().navigate(direction);
            }
        }
    }

    pub fn focus_target(&self) -> FocusTarget {
        match &self.dialog {
            Some(dialog) => FocusTarget::Dialog(dialog.focus()),
            None => FocusTarget::Grid(self.current_page().focus()),
        }
    }

    pub fn focused_widget_id(&self) -> Option<String> {
        match &self.dialog {
            Some(dialog) => dialog.focused_widget_id(),
            None => self.current_page().focused_widget_id(),
        }
    }

    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> (FocusTarget, InteractionResult) {
        let target = self.focus_target();
        let result = match self.dialog.as_mut() {
            Some(dialog) => dialog.dispatch_key(key),
            None => self.current_page_mut().dispatch_key(key),
        };
        (target, result)
    }

    pub fn dispatch_text_action_to_focused(
        &mut self,
        action: TextAction,
    ) -> (FocusTarget, InteractionResult) {
        let target = self.focus_target();
        let result = match self.dialog.as_mut() {
            Some(dialog) => dialog.dispatch_text_action(action),
            None => self.current_page_mut().dispatch_text_action(action),
        };
        (target, result)
    }

    /// Writes a widget's reported value back into the current model.
    /// Returns whether anything needs redrawing.
    pub fn apply_action(&mut self, target: FocusTarget, action: WidgetAction) -> bool {
        let WidgetAction::ValueChanged { value } = action;
        let Self {
            catalog,
            pages,
            current,
            ..
        } = self;
        let page = &mut pages[*current];
        match target {
            FocusTarget::Grid(focus) => page.apply_cell_value(focus, &value, catalog),
            FocusTarget::Dialog(index) => ModelDialog::apply_value(index, &value, page.model_mut()),
        }
        true
    }

    pub fn request_exit(&mut self, mode: ExitMode) {
        tracing::info!(?mode, "exit requested");
        self.exit = Some(mode);
    }

    pub fn exit_mode(&self) -> Option<ExitMode> {
        self.exit
    }

    pub fn should_exit(&self) -> bool {
        self.exit.is_some()
    }

    /// The document handed to the export sink when the session ends.
    pub fn export_document(&self) -> &Model {
        self.current_page().model()
    }
}

/// Titles stay fixed for the session even when the model is renamed.
fn page_title(index: usize, model: &Model) -> String {
    if model.name.is_empty() {
        format!("model #{}", index + 1)
    } else {
        model.name.clone()
    }
}
