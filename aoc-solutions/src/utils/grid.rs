//! Rectangular grids addressed by [`Cell`], plus compass [`Direction`]s.
//!
//! Grids are built once from puzzle text and never mutated; searches keep
//! their own visited sets instead of marking cells.

use std::fmt;
use std::ops::Add;
use thiserror::Error;

/// A `(row, col)` position. Signed so that stepping off the grid is
/// representable and can be rejected by [`Grid::is_inbounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Cell) -> u64 {
        (self.row - other.row).unsigned_abs() as u64 + (self.col - other.col).unsigned_abs() as u64
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction, stored as its clockwise ordinal starting at North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// Unit displacement per direction, indexed by ordinal
const DELTAS: [Cell; 4] = [
    Cell::new(-1, 0),
    Cell::new(0, 1),
    Cell::new(1, 0),
    Cell::new(0, -1),
];

impl Direction {
    /// All directions in clockwise order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    pub fn clockwise(self) -> Direction {
        Self::ALL[(self as usize + 1) % 4]
    }

    #[inline]
    pub fn counter_clockwise(self) -> Direction {
        Self::ALL[(self as usize + 3) % 4]
    }

    #[inline]
    pub fn reverse(self) -> Direction {
        Self::ALL[(self as usize + 2) % 4]
    }

    #[inline]
    pub fn delta(self) -> Cell {
        DELTAS[self as usize]
    }
}

/// Errors raised while building or reading a [`Grid`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {found:?} at {cell}")]
    InvalidCell { cell: Cell, found: char },
    #[error("cell {cell} is outside the {height}x{width} grid")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },
}

/// Immutable row-major 2D storage. Every row has `width` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    height: usize,
    width: usize,
}

impl Grid<u8> {
    /// Parse a block of text into byte markers, one row per non-blank line.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        Self::parse_with(input, |c| u8::try_from(c).ok())
    }
}

impl<T> Grid<T> {
    /// Parse a block of text, mapping each character with `f`.
    ///
    /// Blank lines are skipped and trailing whitespace is trimmed. `f`
    /// returning `None` fails with [`GridError::InvalidCell`].
    pub fn parse_with<F>(input: &str, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let mut cells = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0;

        for line in input.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let start = cells.len();
            for (col, c) in line.chars().enumerate() {
                let value = f(c).ok_or(GridError::InvalidCell {
                    cell: Cell::new(height as i32, col as i32),
                    found: c,
                })?;
                cells.push(value);
            }

            let found = cells.len() - start;
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRow {
                    row: height,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                cells,
                height,
                width,
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// Build a grid by evaluating `f` at every cell in row-major order.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(Cell) -> T,
    {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Cell::new(row as i32, col as i32)))
            .map(&mut f)
            .collect();
        Self {
            cells,
            height,
            width,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_inbounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.is_inbounds(cell)
            .then(|| cell.row as usize * self.width + cell.col as usize)
    }

    /// Value at `cell`, or `None` off the grid
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.index(cell).map(|i| &self.cells[i])
    }

    /// Value at `cell`; off-grid access is a [`GridError::OutOfBounds`].
    pub fn at(&self, cell: Cell) -> Result<&T, GridError> {
        self.get(cell).ok_or(GridError::OutOfBounds {
            cell,
            height: self.height,
            width: self.width,
        })
    }

    /// Every cell with its value, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, value)| {
            (Cell::new((i / width) as i32, (i % width) as i32), value)
        })
    }

    /// Bottom-right cell
    pub fn last_cell(&self) -> Cell {
        Cell::new(self.height as i32 - 1, self.width as i32 - 1)
    }
}

impl<T: PartialEq> Grid<T> {
    /// All cells holding `target`, row-major
    pub fn find(&self, target: &T) -> Vec<Cell> {
        self.cells()
            .filter(|(_, value)| *value == target)
            .map(|(cell, _)| cell)
            .collect()
    }
}
