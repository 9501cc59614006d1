pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod logging;
pub mod runtime;
pub mod schema;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widgets;
