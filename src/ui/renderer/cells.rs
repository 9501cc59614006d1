use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;
use unicode_width::UnicodeWidthChar;

/// One terminal column. Wide glyphs occupy a leading cell plus
/// continuation cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct StyledCell {
    ch: char,
    style: Style,
    continuation: bool,
}

impl StyledCell {
    pub(super) fn from_char(ch: char, style: Style) -> Self {
        Self {
            ch,
            style,
            continuation: false,
        }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::from_char(' ', Style::default())
    }
}

pub(super) fn span_line_to_cells(line: &[Span]) -> Vec<StyledCell> {
    let mut out = Vec::<StyledCell>::new();
    for span in line {
        for ch in span.text.chars() {
            let width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if width == 0 {
                continue;
            }
            out.push(StyledCell::from_char(ch, span.style));
            for _ in 1..width {
                out.push(StyledCell {
                    ch: ' ',
                    style: span.style,
                    continuation: true,
                });
            }
        }
    }
    out
}

/// Truncates or pads to exactly `width` columns without splitting a wide
/// glyph.
pub(super) fn fit_cells_to_width(cells: &[StyledCell], width: usize) -> Vec<StyledCell> {
    if width == 0 {
        return Vec::new();
    }

    let mut out = Vec::<StyledCell>::with_capacity(width);
    let mut idx = 0usize;

    while idx < cells.len() && out.len() < width {
        if cells[idx].continuation {
            idx += 1;
            continue;
        }

        let mut group_len = 1usize;
        while idx + group_len < cells.len() && cells[idx + group_len].continuation {
            group_len += 1;
        }

        if out.len().saturating_add(group_len) > width {
            break;
        }

        out.extend_from_slice(&cells[idx..idx + group_len]);
        idx += group_len;
    }

    out.resize(width, StyledCell::default());
    out
}

pub(super) fn cells_to_span_line(cells: &[StyledCell]) -> SpanLine {
    let mut out = Vec::<Span>::new();
    let mut current: Option<(Style, String)> = None;

    for cell in cells.iter().filter(|cell| !cell.continuation) {
        if let Some((style, text)) = current.as_mut()
            && *style == cell.style
        {
            text.push(cell.ch);
            continue;
        }
        if let Some((style, text)) = current.take() {
            out.push(Span::styled(text, style));
        }
        current = Some((cell.style, cell.ch.to_string()));
    }

    if let Some((style, text)) = current {
        out.push(Span::styled(text, style));
    }
    if out.is_empty() {
        out.push(Span::new(""));
    }
    out
}

/// A span line clipped or padded to exactly `width` columns.
pub(super) fn fit_line(line: &[Span], width: usize) -> SpanLine {
    cells_to_span_line(&fit_cells_to_width(&span_line_to_cells(line), width))
}

#[cfg(test)]
mod tests {
    use super::{fit_line, span_line_to_cells};
    use crate::ui::span::{Span, plain_text};
    use crate::ui::style::{Color, Style};

    #[test]
    fn fit_pads_short_lines() {
        let line = fit_line(&[Span::new("ab")], 4);
        assert_eq!(plain_text(&line), "ab  ");
    }

    #[test]
    fn fit_never_splits_wide_glyphs() {
        let line = fit_line(&[Span::new("日本")], 3);
        assert_eq!(plain_text(&line), "日 ");
        assert_eq!(span_line_to_cells(&[Span::new("日")]).len(), 2);
    }

    #[test]
    fn adjacent_cells_with_same_style_merge() {
        let red = Style::new().color(Color::Red);
        let line = fit_line(&[Span::styled("a", red), Span::styled("b", red), Span::new("c")], 3);
        assert_eq!(line.len(), 2);
        assert_eq!(line[0].text, "ab");
    }
}
