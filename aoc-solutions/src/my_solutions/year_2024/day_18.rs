//! Falling bytes: shortest walk across a square memory space while bytes
//! corrupt cells one at a time, and the first byte that seals the exit.

use crate::utils::grid::{Cell, Direction, Grid};
use crate::utils::search::{StateSpace, shortest_path};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;
use thiserror::Error;

pub const MEMORY_SIZE: usize = 71;
pub const FIRST_FALLEN: usize = 1024;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["grid", "bfs"])]
pub struct Solver;

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("exit unreachable after {0} bytes fell")]
    Unreachable(usize),
    #[error("exit stays reachable after all {0} bytes fell")]
    NeverBlocked(usize),
}

/// `size x size` memory space. Each cell holds the index of the first byte
/// that lands on it, so one grid serves every prefix of the byte list.
pub struct MemorySpace {
    landed_at: Grid<Option<usize>>,
    fallen: usize,
}

impl MemorySpace {
    pub fn new(size: usize, bytes: &[Cell]) -> Self {
        let mut first_landing = HashMap::with_capacity(bytes.len());
        for (i, cell) in bytes.iter().enumerate() {
            first_landing.entry(*cell).or_insert(i);
        }
        Self {
            landed_at: Grid::from_fn(size, size, |cell| first_landing.get(&cell).copied()),
            fallen: 0,
        }
    }

    fn is_open(&self, cell: Cell) -> bool {
        self.landed_at
            .get(cell)
            .is_some_and(|landed| landed.is_none_or(|i| i >= self.fallen))
    }

    /// Fewest steps from the top-left to the bottom-right corner once the
    /// first `fallen` bytes have landed
    pub fn min_steps(&mut self, fallen: usize) -> Option<u64> {
        self.fallen = fallen;
        let start = Cell::new(0, 0);
        let exit = self.landed_at.last_cell();
        if !self.is_open(start) {
            return None;
        }
        shortest_path(&*self, [start], |cell| *cell == exit)
    }
}

impl StateSpace for MemorySpace {
    type State = Cell;

    fn successors(&self, state: &Cell, buf: &mut Vec<(Cell, u64)>) {
        buf.extend(
            Direction::ALL
                .iter()
                .map(|dir| *state + dir.delta())
                .filter(|next| self.is_open(*next))
                .map(|next| (next, 1)),
        );
    }
}

/// Steps to the exit after the first `fallen` bytes
pub fn steps_after(bytes: &[Cell], size: usize, fallen: usize) -> Result<u64, MemoryError> {
    let fallen = fallen.min(bytes.len());
    MemorySpace::new(size, bytes)
        .min_steps(fallen)
        .ok_or(MemoryError::Unreachable(fallen))
}

/// The first byte after which the exit can no longer be reached.
///
/// Reachability only ever goes from true to false as bytes fall, so the
/// prefix length is found by binary search.
pub fn first_blocker(bytes: &[Cell], size: usize) -> Result<Cell, MemoryError> {
    let mut space = MemorySpace::new(size, bytes);
    let prefixes: Vec<usize> = (0..=bytes.len()).collect();
    let blocked_at = prefixes.partition_point(|&fallen| space.min_steps(fallen).is_some());
    log::debug!("exit sealed once {} of {} bytes fell", blocked_at, bytes.len());

    match blocked_at.checked_sub(1) {
        Some(i) if blocked_at <= bytes.len() => Ok(bytes[i]),
        _ => Err(MemoryError::NeverBlocked(bytes.len())),
    }
}

/// Bytes are listed as `x,y`: column first, then row
pub fn parse_bytes(input: &str) -> Result<Vec<Cell>, anyhow::Error> {
    input
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_idx, line)| {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| anyhow!("(line {}) expected `x,y`, got {:?}", line_idx + 1, line))?;
            let col: u16 = x
                .trim()
                .parse()
                .with_context(|| format!("(line {}) bad x {:?}", line_idx + 1, x))?;
            let row: u16 = y
                .trim()
                .parse()
                .with_context(|| format!("(line {}) bad y {:?}", line_idx + 1, y))?;
            Ok(Cell::new(i32::from(row), i32::from(col)))
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Cell>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let bytes = parse_bytes(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if bytes.is_empty() {
            return Err(ParseError::MissingData("no byte positions".to_string()));
        }
        Ok(bytes)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let steps = steps_after(shared, MEMORY_SIZE, FIRST_FALLEN).map_err(SolveError::failed)?;
        Ok(steps.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let byte = first_blocker(shared, MEMORY_SIZE).map_err(SolveError::failed)?;
        Ok(format!("{},{}", byte.col, byte.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn test_example() {
        let bytes = parse_bytes(EXAMPLE).unwrap();
        assert_eq!(bytes.len(), 25);
        assert_eq!(bytes[0], Cell::new(4, 5));

        assert_eq!(steps_after(&bytes, 7, 12).unwrap(), 22);
        assert_eq!(first_blocker(&bytes, 7).unwrap(), Cell::new(1, 6));
    }

    #[test]
    fn test_empty_space_is_manhattan() {
        assert_eq!(steps_after(&[], 2, 0).unwrap(), 2);
        assert_eq!(steps_after(&[], 7, 0).unwrap(), 12);
    }

    #[test]
    fn test_diagonal_wall_blocks() {
        // .#
        // #.
        let bytes = [Cell::new(0, 1), Cell::new(1, 0)];
        assert_eq!(steps_after(&bytes, 2, 1).unwrap(), 2);
        assert!(matches!(
            steps_after(&bytes, 2, 2),
            Err(MemoryError::Unreachable(2))
        ));
        assert_eq!(first_blocker(&bytes, 2).unwrap(), Cell::new(1, 0));
    }

    #[test]
    fn test_winding_route() {
        // ..#
        // #..
        // .#.
        let bytes = [Cell::new(0, 2), Cell::new(1, 0), Cell::new(2, 1)];
        assert_eq!(steps_after(&bytes, 3, 3).unwrap(), 4);
    }

    #[test]
    fn test_never_blocked_reported() {
        let bytes = [Cell::new(0, 2)];
        assert!(matches!(
            first_blocker(&bytes, 3),
            Err(MemoryError::NeverBlocked(1))
        ));
    }

    #[test]
    fn test_byte_on_start_blocks_immediately() {
        let bytes = [Cell::new(0, 0)];
        assert_eq!(first_blocker(&bytes, 3).unwrap(), Cell::new(0, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_bytes("1,2\n3;4").is_err());
        assert!(parse_bytes("1,-2").is_err());
        assert!(matches!(
            <Solver as AocParser>::parse("1,2\nx,4"),
            Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")
        ));
        assert!(matches!(
            <Solver as AocParser>::parse("\n\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    proptest! {
        /// Binary search agrees with trying every prefix in order
        #[test]
        fn first_blocker_matches_linear_scan(
            raw in prop::collection::vec((0i32..6, 0i32..6), 0..30),
        ) {
            let bytes: Vec<Cell> = raw.into_iter().map(|(row, col)| Cell::new(row, col)).collect();
            let mut space = MemorySpace::new(6, &bytes);
            let linear = (0..=bytes.len()).find(|&n| space.min_steps(n).is_none());

            match (first_blocker(&bytes, 6), linear) {
                (Ok(byte), Some(n)) => prop_assert_eq!(byte, bytes[n - 1]),
                (Err(MemoryError::NeverBlocked(_)), None) => {}
                (result, linear) => prop_assert!(false, "{:?} vs {:?}", result, linear),
            }
        }
    }
}
