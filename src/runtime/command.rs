use crate::grid::Direction;
use crate::terminal::KeyEvent;
use crate::widgets::traits::TextAction;

#[derive(Debug, Clone)]
pub enum Command {
    /// Quit without exporting.
    Exit,
    ExportAndQuit,
    AddField,
    RemoveField,
    ToggleRequired,
    ToggleSearchable,
    PageBackward,
    PageForward,
    ToggleDialog,
    Cancel,
    Navigate(Direction),
    InputKey(KeyEvent),
    TextAction(TextAction),
}
