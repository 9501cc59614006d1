pub mod dialog;
pub mod page;
pub mod session;

pub use dialog::ModelDialog;
pub use page::Page;
pub use session::{ExitMode, FocusTarget, Session};
