mod cells;
mod overlay;

use self::cells::fit_line;
use self::overlay::{OverlayGeometry, apply_overlay};
use crate::grid::{CellKind, CellWidth, Row};
use crate::state::dialog::{DIALOG_HEIGHT, DIALOG_TITLE, DIALOG_WIDTH};
use crate::state::{ModelDialog, Session};
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use crate::widgets::traits::RenderContext;

pub const HELP_TEXT: &str = "F2: Add Field, F3: Remove Field, F4: Toggle Required, \
F5: Toggle Searchable, F7: Page Backward, F8: Page Forward, F9: Model, F10: Print and Quit";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

/// Draws the page bar, the field grid of the current page, the help line
/// and, when open, the model dialog on top.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, session: &Session, terminal_size: TerminalSize) -> RenderFrame {
        let width = terminal_size.width as usize;
        let ctx = RenderContext {
            focused_id: session.focused_widget_id(),
            terminal_size,
        };
        let mut frame = RenderFrame::default();

        frame.lines.push(self.page_bar(session));

        let page = session.current_page();
        let focus = page.focus();
        for (index, row) in page.rows().iter().enumerate() {
            let focused_cell =
                (session.dialog().is_none() && index == focus.row).then_some(focus.cell);
            let (line, cursor_col) = draw_row(row, focused_cell, width, &ctx);
            if let Some(col) = cursor_col {
                frame.cursor = Some(CursorPos {
                    col,
                    row: frame.lines.len().min(u16::MAX as usize) as u16,
                });
            }
            frame.lines.push(line);
        }

        let help_row = (terminal_size.height as usize).saturating_sub(1);
        while frame.lines.len() < help_row {
            frame.lines.push(vec![Span::new("")]);
        }
        frame
            .lines
            .push(vec![Span::styled(HELP_TEXT, self.theme.help)]);

        if let Some(dialog) = session.dialog() {
            self.draw_dialog(dialog, &ctx, &mut frame);
        }

        frame
    }

    fn page_bar(&self, session: &Session) -> SpanLine {
        let mut line = Vec::new();
        for (index, page) in session.pages().iter().enumerate() {
            if index > 0 {
                line.push(Span::new(" "));
            }
            let style = if index == session.current_index() {
                self.theme.active_page
            } else {
                self.theme.inactive_page
            };
            line.push(Span::styled(format!(" {} ", page.title()), style));
        }
        line
    }

    fn draw_dialog(&self, dialog: &ModelDialog, ctx: &RenderContext, frame: &mut RenderFrame) {
        let geometry = OverlayGeometry::centered(DIALOG_WIDTH, DIALOG_HEIGHT, ctx.terminal_size);
        let mut body = Vec::<SpanLine>::new();
        let mut cursor = None;
        for (index, item) in dialog.items().iter().enumerate() {
            body.push(Vec::new());
            if index == dialog.focus() {
                cursor = item.cursor_pos().map(|local| CursorPos {
                    col: local.col,
                    row: (body.len() as u16).saturating_add(local.row),
                });
            }
            body.extend(item.draw(ctx).lines);
        }

        apply_overlay(
            &mut frame.lines,
            geometry,
            DIALOG_TITLE,
            &body,
            self.theme.dialog_border,
        );
        frame.cursor = cursor.map(|local| geometry.frame_cursor(local));
    }
}

/// Lays the cells of `row` out side by side. Returns the line and, when
/// the focused cell shows a text cursor, its column.
fn draw_row(
    row: &Row,
    focused_cell: Option<usize>,
    width: usize,
    ctx: &RenderContext,
) -> (SpanLine, Option<u16>) {
    let kinds = row.kinds();
    let widths = column_widths(&kinds, width);
    let mut line = SpanLine::new();
    let mut cursor = None;
    let mut x = 0usize;

    for (index, (cell, cell_width)) in row.cells().iter().zip(widths).enumerate() {
        let drawn = cell.widget().draw(ctx);
        let first = drawn.lines.first().map(Vec::as_slice).unwrap_or(&[]);
        line.extend(fit_line(first, cell_width));

        if focused_cell == Some(index)
            && let Some(local) = cell.widget().cursor_pos()
        {
            let col = x + (local.col as usize).min(cell_width.saturating_sub(1));
            cursor = Some(col.min(u16::MAX as usize) as u16);
        }
        x += cell_width;
    }

    (line, cursor)
}

/// Fixed cells get their width; flex cells share what is left by weight.
fn column_widths(kinds: &[CellKind], total: usize) -> Vec<usize> {
    let fixed: usize = kinds
        .iter()
        .map(|kind| match kind.width() {
            CellWidth::Fixed(width) => width as usize,
            CellWidth::Flex(_) => 0,
        })
        .sum();
    let weights: usize = kinds
        .iter()
        .map(|kind| match kind.width() {
            CellWidth::Flex(weight) => weight as usize,
            CellWidth::Fixed(_) => 0,
        })
        .sum();
    let remaining = total.saturating_sub(fixed);

    let mut handed_out = 0usize;
    let mut seen_weight = 0usize;
    kinds
        .iter()
        .map(|kind| match kind.width() {
            CellWidth::Fixed(width) => width as usize,
            CellWidth::Flex(weight) => {
                seen_weight += weight as usize;
                let upto = remaining * seen_weight / weights.max(1);
                let share = upto - handed_out;
                handed_out = upto;
                share
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{HELP_TEXT, Renderer, column_widths};
    use crate::catalog::{CatalogSnapshot, FieldCatalog};
    use crate::grid::CellKind;
    use crate::schema::Model;
    use crate::state::Session;
    use crate::terminal::{CursorPos, TerminalSize};
    use crate::ui::span::plain_text;
    use crate::ui::theme::Theme;

    const SIZE: TerminalSize = TerminalSize {
        width: 100,
        height: 30,
    };

    fn session(models: Vec<Model>) -> Session {
        Session::start(CatalogSnapshot {
            catalog: FieldCatalog::builtin(),
            models,
        })
    }

    #[test]
    fn flex_columns_split_what_fixed_columns_leave() {
        let widths = column_widths(
            &[CellKind::Name, CellKind::RelatedModel, CellKind::Type, CellKind::Flags],
            100,
        );
        assert_eq!(widths, vec![30, 30, 25, 15]);

        let widths = column_widths(&[CellKind::Name, CellKind::Type, CellKind::Flags], 20);
        assert_eq!(widths, vec![0, 25, 15]);
    }

    #[test]
    fn frame_has_page_bar_rows_and_help_line() {
        let frame = Renderer::default().render(
            &session(vec![Model::named("User"), Model::named("Post")]),
            SIZE,
        );
        assert_eq!(frame.lines.len(), SIZE.height as usize);
        assert_eq!(plain_text(&frame.lines[0]), " User   Post ");
        assert!(plain_text(&frame.lines[1]).starts_with(" Name: "));
        assert!(plain_text(&frame.lines[1]).trim_end().ends_with("Flags: --"));
        assert_eq!(plain_text(&frame.lines[29]), HELP_TEXT);
    }

    #[test]
    fn active_page_uses_highlight_style() {
        let mut session = session(vec![Model::named("User"), Model::named("Post")]);
        session.page_forward();
        let theme = Theme::default();
        let frame = Renderer::new(theme.clone()).render(&session, SIZE);
        assert_eq!(frame.lines[0][0].style, theme.inactive_page);
        assert_eq!(frame.lines[0][2].style, theme.active_page);
    }

    #[test]
    fn cursor_follows_focused_name_cell() {
        let frame = Renderer::default().render(&session(Vec::new()), SIZE);
        assert_eq!(frame.cursor, Some(CursorPos { col: 7, row: 1 }));
    }

    #[test]
    fn dialog_is_drawn_over_grid_with_cursor_inside() {
        let mut session = session(vec![Model::named("User")]);
        session.toggle_dialog();
        let frame = Renderer::default().render(&session, SIZE);
        let top = plain_text(&frame.lines[2]);
        assert!(top.contains("┌ Model "));
        let cursor = frame.cursor.expect("dialog cursor");
        assert_eq!(cursor.row, 4);
        assert_eq!(cursor.col, 25 + 1 + 7 + 4);
    }
}
