/// Where inside its row the focused cell sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionHint {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Down,
    Up,
}

/// Row and cell counts the navigator reads on every transition.
pub trait GridShape {
    fn row_count(&self) -> usize;
    fn focusable_count(&self, row: usize) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridFocus {
    pub row: usize,
    pub cell: usize,
}

/// Explicit `(row, cell)` focus over a grid of rows whose focusable cells
/// come first and whose display-only cells trail.
#[derive(Debug, Clone, Default)]
pub struct GridNavigator {
    focus: GridFocus,
}

impl GridNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> GridFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: GridFocus, shape: &dyn GridShape) {
        self.focus = focus;
        self.revalidate(shape);
    }

    /// Clamp focus back inside the grid after rows were added, removed or
    /// rebuilt.
    pub fn revalidate(&mut self, shape: &dyn GridShape) {
        let rows = shape.row_count();
        if rows == 0 {
            self.focus = GridFocus::default();
            return;
        }
        self.focus.row = self.focus.row.min(rows - 1);
        self.focus.cell = clamp_cell(self.focus.cell, shape.focusable_count(self.focus.row));
    }

    pub fn navigate(
        &mut self,
        direction: Direction,
        hint: PositionHint,
        shape: &dyn GridShape,
    ) -> GridFocus {
        let rows = shape.row_count();
        if rows == 0 {
            return self.focus;
        }
        let GridFocus { row, cell } = self.focus;
        let next_row = (row + 1) % rows;
        let prev_row = (row + rows - 1) % rows;

        self.focus = match (direction, hint) {
            (Direction::Forward, PositionHint::End) | (Direction::Down, _) => GridFocus {
                row: next_row,
                cell: clamp_cell(cell, shape.focusable_count(next_row)),
            },
            (Direction::Forward, _) => GridFocus {
                row,
                cell: clamp_cell(cell + 1, shape.focusable_count(row)),
            },
            (Direction::Backward, PositionHint::Start) => GridFocus {
                row: prev_row,
                cell: shape.focusable_count(prev_row).saturating_sub(1),
            },
            (Direction::Backward, _) => GridFocus {
                row,
                cell: cell.saturating_sub(1),
            },
            (Direction::Up, _) => GridFocus {
                row: prev_row,
                cell: clamp_cell(cell, shape.focusable_count(prev_row)),
            },
        };
        self.focus
    }
}

fn clamp_cell(cell: usize, focusable: usize) -> usize {
    cell.min(focusable.saturating_sub(1))
}

/// Focus over a flat, fixed list of items. Every direction steps one item
/// and wraps.
#[derive(Debug, Clone)]
pub struct DialogNavigator {
    focus: usize,
    len: usize,
}

impl DialogNavigator {
    pub fn new(len: usize) -> Self {
        Self { focus: 0, len }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn navigate(&mut self, direction: Direction) -> usize {
        if self.len == 0 {
            return self.focus;
        }
        self.focus = match direction {
            Direction::Forward | Direction::Down => (self.focus + 1) % self.len,
            Direction::Backward | Direction::Up => (self.focus + self.len - 1) % self.len,
        };
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::{DialogNavigator, Direction, GridFocus, GridNavigator, GridShape, PositionHint};
    use proptest::prelude::*;

    struct Shape(Vec<usize>);

    impl GridShape for Shape {
        fn row_count(&self) -> usize {
            self.0.len()
        }

        fn focusable_count(&self, row: usize) -> usize {
            self.0[row]
        }
    }

    fn at(row: usize, cell: usize, shape: &Shape) -> GridNavigator {
        let mut nav = GridNavigator::new();
        nav.set_focus(GridFocus { row, cell }, shape);
        nav
    }

    #[test]
    fn forward_from_middle_moves_to_next_cell() {
        let shape = Shape(vec![3, 2]);
        let mut nav = at(0, 1, &shape);
        let focus = nav.navigate(Direction::Forward, PositionHint::Middle, &shape);
        assert_eq!(focus, GridFocus { row: 0, cell: 2 });
    }

    #[test]
    fn forward_from_end_keeps_position_and_clamps_on_shorter_row() {
        let shape = Shape(vec![3, 2]);
        let mut nav = at(0, 2, &shape);
        let focus = nav.navigate(Direction::Forward, PositionHint::End, &shape);
        assert_eq!(focus, GridFocus { row: 1, cell: 1 });
    }

    #[test]
    fn backward_from_start_wraps_to_last_editable_cell_of_previous_row() {
        let shape = Shape(vec![2, 3, 3]);
        let mut nav = at(0, 0, &shape);
        let focus = nav.navigate(Direction::Backward, PositionHint::Start, &shape);
        assert_eq!(focus, GridFocus { row: 2, cell: 2 });
    }

    #[test]
    fn backward_from_end_moves_left() {
        let shape = Shape(vec![3]);
        let mut nav = at(0, 2, &shape);
        let focus = nav.navigate(Direction::Backward, PositionHint::End, &shape);
        assert_eq!(focus, GridFocus { row: 0, cell: 1 });
    }

    #[test]
    fn vertical_moves_wrap_both_ways() {
        let shape = Shape(vec![2, 2, 2]);
        let mut nav = at(2, 1, &shape);
        assert_eq!(
            nav.navigate(Direction::Down, PositionHint::End, &shape),
            GridFocus { row: 0, cell: 1 }
        );
        assert_eq!(
            nav.navigate(Direction::Up, PositionHint::End, &shape),
            GridFocus { row: 2, cell: 1 }
        );
    }

    #[test]
    fn single_row_grid_stays_on_its_row() {
        let shape = Shape(vec![2]);
        let mut nav = at(0, 1, &shape);
        assert_eq!(
            nav.navigate(Direction::Forward, PositionHint::End, &shape),
            GridFocus { row: 0, cell: 1 }
        );
    }

    #[test]
    fn empty_grid_is_a_no_op() {
        let shape = Shape(Vec::new());
        let mut nav = GridNavigator::new();
        assert_eq!(
            nav.navigate(Direction::Down, PositionHint::Start, &shape),
            GridFocus::default()
        );
    }

    #[test]
    fn revalidate_pulls_focus_back_after_rows_shrink() {
        let mut nav = at(2, 2, &Shape(vec![3, 3, 3]));
        nav.revalidate(&Shape(vec![3, 2]));
        assert_eq!(nav.focus(), GridFocus { row: 1, cell: 1 });
    }

    #[test]
    fn dialog_navigation_wraps_regardless_of_direction_kind() {
        let mut nav = DialogNavigator::new(3);
        assert_eq!(nav.navigate(Direction::Up), 2);
        assert_eq!(nav.navigate(Direction::Forward), 0);
        assert_eq!(nav.navigate(Direction::Down), 1);
        assert_eq!(nav.navigate(Direction::Backward), 0);
    }

    proptest! {
        #[test]
        fn forward_from_end_lands_on_next_row_same_position(
            rows in proptest::collection::vec(2usize..=3, 1..8),
            start in 0usize..8,
        ) {
            let shape = Shape(rows.clone());
            let row = start % rows.len();
            let cell = rows[row] - 1;
            let mut nav = at(row, cell, &shape);
            let focus = nav.navigate(Direction::Forward, PositionHint::End, &shape);
            let next = (row + 1) % rows.len();
            prop_assert_eq!(focus.row, next);
            prop_assert_eq!(focus.cell, cell.min(rows[next] - 1));
        }

        #[test]
        fn down_then_up_returns_to_same_focus_on_uniform_rows(
            count in 1usize..10,
            start in 0usize..10,
            cell in 0usize..2,
        ) {
            let shape = Shape(vec![2; count]);
            let row = start % count;
            let mut nav = at(row, cell, &shape);
            nav.navigate(Direction::Down, PositionHint::Start, &shape);
            let focus = nav.navigate(Direction::Up, PositionHint::Start, &shape);
            prop_assert_eq!(focus, GridFocus { row, cell });
        }
    }
}
