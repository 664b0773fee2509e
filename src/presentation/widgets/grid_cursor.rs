//! Cursor movement over a row-major grid of cells.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Selected cell of a grid with `columns` cells per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    index: usize,
    columns: usize,
}

impl GridCursor {
    #[must_use]
    pub const fn new(columns: usize) -> Self {
        Self {
            index: 0,
            columns: if columns == 0 { 1 } else { columns },
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Keeps the cursor inside a grid of `len` cells.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Moves one cell, staying put at the edges.
    pub fn step(&mut self, direction: Direction, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        let column = self.index % self.columns;
        let next = match direction {
            Direction::Up => self.index.checked_sub(self.columns),
            Direction::Down => Some(self.index + self.columns).filter(|i| *i < len),
            Direction::Left => (column > 0).then(|| self.index - 1),
            Direction::Right => {
                Some(self.index + 1).filter(|i| *i < len && column + 1 < self.columns)
            }
        };
        if let Some(next) = next {
            self.index = next;
        }
    }
}
