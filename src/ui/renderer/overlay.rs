use super::cells::{
    StyledCell, cells_to_span_line, fit_cells_to_width, span_line_to_cells,
};
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct OverlayGeometry {
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub height: u16,
}

impl OverlayGeometry {
    /// A `width` x `height` box centered on the terminal, shrunk to fit.
    pub fn centered(width: u16, height: u16, terminal: TerminalSize) -> Self {
        let width = width.min(terminal.width);
        let height = height.min(terminal.height);
        Self {
            row: (terminal.height - height) / 2,
            col: (terminal.width - width) / 2,
            width,
            height,
        }
    }

    /// Maps a cursor inside the box body to frame coordinates.
    pub fn frame_cursor(self, local: CursorPos) -> CursorPos {
        let max_col = self.width.saturating_sub(3);
        CursorPos {
            col: self.col.saturating_add(1).saturating_add(local.col.min(max_col)),
            row: self.row.saturating_add(1).saturating_add(local.row),
        }
    }
}

/// Draws `body` inside a bordered box and pastes the box over `base`.
pub(super) fn apply_overlay(
    base: &mut Vec<SpanLine>,
    geometry: OverlayGeometry,
    title: &str,
    body: &[SpanLine],
    border_style: Style,
) {
    let box_lines = render_overlay_box(
        geometry.width as usize,
        geometry.height as usize,
        title,
        body,
        border_style,
    );
    blend_overlay_lines(
        base,
        geometry.row as usize,
        geometry.col as usize,
        geometry.width as usize,
        &box_lines,
    );
}

fn render_overlay_box(
    width: usize,
    height: usize,
    title: &str,
    content_lines: &[SpanLine],
    border_style: Style,
) -> Vec<SpanLine> {
    if width < 2 || height < 2 {
        return Vec::new();
    }

    let inner_w = width - 2;
    let inner_h = height - 2;

    let mut out = Vec::with_capacity(height);
    out.push(top_border(width, title, border_style));

    for row in 0..inner_h {
        let content = content_lines.get(row).map(Vec::as_slice).unwrap_or(&[]);
        let mut row_cells = Vec::<StyledCell>::with_capacity(width);
        row_cells.push(StyledCell::from_char('│', border_style));
        row_cells.extend(fit_cells_to_width(&span_line_to_cells(content), inner_w));
        row_cells.push(StyledCell::from_char('│', border_style));
        out.push(cells_to_span_line(&row_cells));
    }

    out.push(border_line(width, '└', '┘', border_style));
    out
}

fn top_border(width: usize, title: &str, style: Style) -> SpanLine {
    let label = format!(" {title} ");
    if title.is_empty() || UnicodeWidthStr::width(label.as_str()) + 2 > width {
        return border_line(width, '┌', '┐', style);
    }
    let mut cells =
        span_line_to_cells(&[Span::styled("┌", style), Span::styled(label, style.bold())]);
    while cells.len() < width - 1 {
        cells.push(StyledCell::from_char('─', style));
    }
    cells.push(StyledCell::from_char('┐', style));
    cells_to_span_line(&cells)
}

fn border_line(width: usize, left: char, right: char, style: Style) -> SpanLine {
    let mut cells = Vec::<StyledCell>::with_capacity(width);
    cells.push(StyledCell::from_char(left, style));
    for _ in 0..width.saturating_sub(2) {
        cells.push(StyledCell::from_char('─', style));
    }
    cells.push(StyledCell::from_char(right, style));
    cells_to_span_line(&cells)
}

fn blend_overlay_lines(
    base: &mut Vec<SpanLine>,
    row: usize,
    col: usize,
    width: usize,
    overlay_lines: &[SpanLine],
) {
    if width == 0 {
        return;
    }

    for (offset, overlay_line) in overlay_lines.iter().enumerate() {
        let target_row = row.saturating_add(offset);
        while base.len() <= target_row {
            base.push(vec![Span::new("")]);
        }

        let mut base_cells = span_line_to_cells(&base[target_row]);
        let needed = col.saturating_add(width);
        if base_cells.len() < needed {
            base_cells.resize(needed, StyledCell::default());
        }

        let patch_cells = fit_cells_to_width(&span_line_to_cells(overlay_line), width);
        base_cells[col..col + width].copy_from_slice(&patch_cells);

        base[target_row] = cells_to_span_line(&base_cells);
    }
}
