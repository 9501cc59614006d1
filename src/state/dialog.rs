use crate::grid::{DialogNavigator, Direction};
use crate::schema::Model;
use crate::terminal::KeyEvent;
use crate::widgets::inputs::{CheckboxInput, TextInput};
use crate::widgets::traits::{InteractionResult, InteractiveNode, TextAction};
use crate::widgets::value::Value;

pub const DIALOG_TITLE: &str = "Model";
pub const DIALOG_WIDTH: u16 = 50;
pub const DIALOG_HEIGHT: u16 = 25;

const NAME: usize = 0;
const DISPLAY_TEMPLATE: usize = 1;
const HIDDEN: usize = 2;

/// Modal form for the model-level attributes of the current page.
pub struct ModelDialog {
    items: Vec<Box<dyn InteractiveNode>>,
    navigator: DialogNavigator,
}

impl ModelDialog {
    pub fn open(model: &Model) -> Self {
        let items: Vec<Box<dyn InteractiveNode>> = vec![
            Box::new(TextInput::new("dialog.name", " Name: ").with_default(model.name.as_str())),
            Box::new(
                TextInput::new("dialog.display_template", " Disp. Template: ")
                    .with_default(model.display_template.as_str()),
            ),
            Box::new(CheckboxInput::new("dialog.hidden", " Hidden: ").with_checked(model.hidden)),
        ];
        let navigator = DialogNavigator::new(items.len());
        Self { items, navigator }
    }

    pub fn items(&self) -> &[Box<dyn InteractiveNode>] {
        &self.items
    }

    pub fn focus(&self) -> usize {
        self.navigator.focus()
    }

    pub fn focused_widget_id(&self) -> Option<String> {
        self.items
            .get(self.navigator.focus())
            .map(|item| item.id().to_string())
    }

    pub fn navigate(&mut self, direction: Direction) -> usize {
        self.navigator.navigate(direction)
    }

    pub fn dispatch_key(&mut self, key: KeyEvent) -> InteractionResult {
        let focus = self.navigator.focus();
        self.items
            .get_mut(focus)
            .map(|item| item.on_key(key))
            .unwrap_or_default()
    }

    pub fn dispatch_text_action(&mut self, action: TextAction) -> InteractionResult {
        let focus = self.navigator.focus();
        self.items
            .get_mut(focus)
            .map(|item| item.on_text_action(action))
            .unwrap_or_default()
    }

    /// Writes the value reported by item `index` into `model`.
    pub fn apply_value(index: usize, value: &Value, model: &mut Model) {
        match (index, value) {
            (NAME, Value::Text(text)) => model.name = text.clone(),
            (DISPLAY_TEMPLATE, Value::Text(text)) => model.display_template = text.clone(),
            (HIDDEN, Value::Bool(flag)) => model.hidden = *flag,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ModelDialog;
    use crate::grid::Direction;
    use crate::schema::Model;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::traits::{Interactive, WidgetAction};
    use crate::widgets::value::Value;

    #[test]
    fn opens_with_model_values() {
        let mut model = Model::named("Post");
        model.display_template = "{{title}}".into();
        model.hidden = true;
        let dialog = ModelDialog::open(&model);
        let values: Vec<_> = dialog.items().iter().map(|item| item.value()).collect();
        assert_eq!(
            values,
            vec![
                Some(Value::Text("Post".into())),
                Some(Value::Text("{{title}}".into())),
                Some(Value::Bool(true)),
            ]
        );
    }

    #[test]
    fn edits_reach_the_model() {
        let mut model = Model::named("Post");
        let mut dialog = ModelDialog::open(&model);
        dialog.navigate(Direction::Up);
        let result = dialog.dispatch_key(KeyEvent::plain(KeyCode::Char(' ')));
        let Some(WidgetAction::ValueChanged { value }) = result.actions.first() else {
            panic!("checkbox should report its value");
        };
        ModelDialog::apply_value(dialog.focus(), value, &mut model);
        assert!(model.hidden);

        ModelDialog::apply_value(0, &Value::Text("Article".into()), &mut model);
        assert_eq!(model.name, "Article");
    }

    #[test]
    fn mismatched_values_are_ignored() {
        let mut model = Model::named("Post");
        ModelDialog::apply_value(2, &Value::Text("yes".into()), &mut model);
        ModelDialog::apply_value(7, &Value::Bool(true), &mut model);
        assert_eq!(model, Model::named("Post"));
    }
}
