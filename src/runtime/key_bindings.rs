use crate::grid::Direction;
use crate::runtime::command::Command;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::widgets::traits::TextAction;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Editor-level shortcuts. Keys without a binding go to the focused widget.
#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyBinding::from_event(event)).cloned()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::F(2)), Command::AddField);
        self.bind(KeyBinding::key(KeyCode::F(3)), Command::RemoveField);
        self.bind(KeyBinding::key(KeyCode::F(4)), Command::ToggleRequired);
        self.bind(KeyBinding::key(KeyCode::F(5)), Command::ToggleSearchable);
        self.bind(KeyBinding::key(KeyCode::F(7)), Command::PageBackward);
        self.bind(KeyBinding::key(KeyCode::F(8)), Command::PageForward);
        self.bind(KeyBinding::key(KeyCode::F(9)), Command::ToggleDialog);
        self.bind(KeyBinding::key(KeyCode::F(10)), Command::ExportAndQuit);
        self.bind(KeyBinding::key(KeyCode::Esc), Command::Cancel);

        self.bind(
            KeyBinding::key(KeyCode::Tab),
            Command::Navigate(Direction::Forward),
        );
        self.bind(
            KeyBinding::key(KeyCode::Enter),
            Command::Navigate(Direction::Forward),
        );
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Command::Navigate(Direction::Backward),
        );
        self.bind(
            KeyBinding::key(KeyCode::BackTab),
            Command::Navigate(Direction::Backward),
        );
        self.bind(
            KeyBinding::key(KeyCode::Down),
            Command::Navigate(Direction::Down),
        );
        self.bind(KeyBinding::key(KeyCode::Up), Command::Navigate(Direction::Up));

        self.bind(
            KeyBinding::ctrl(KeyCode::Backspace),
            Command::TextAction(TextAction::DeleteWordLeft),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Char('w')),
            Command::TextAction(TextAction::DeleteWordLeft),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Delete),
            Command::TextAction(TextAction::DeleteWordRight),
        );
    }
}
