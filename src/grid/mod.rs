//! Editable field grid: cell descriptors, the row builder and the
//! `(row, cell)` focus state machine.

pub mod cell;
pub mod navigator;
pub mod row;

pub use cell::{Cell, CellKind, CellWidget, CellWidth};
pub use navigator::{DialogNavigator, Direction, GridFocus, GridNavigator, GridShape, PositionHint};
pub use row::{CellEdit, Row, WriteBack, cell_kinds, write_back};
