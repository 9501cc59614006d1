use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub active_page: Style,
    pub inactive_page: Style,
    pub dialog_border: Style,
    pub help: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            active_page: Style::new()
                .color(Color::White)
                .background(Color::Blue)
                .bold(),
            inactive_page: Style::new(),
            dialog_border: Style::new().color(Color::Green),
            help: Style::new().color(Color::DarkGrey),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
