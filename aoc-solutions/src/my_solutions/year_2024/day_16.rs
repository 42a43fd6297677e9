//! Reindeer maze: cheapest route from `S` to `E` when every 90° turn costs
//! 1000 and every step forward costs 1, and the set of tiles lying on any
//! cheapest route.

use crate::utils::grid::{Cell, Direction, Grid, GridError};
use crate::utils::search::{DistanceTable, StateSpace, shortest_path};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;
use thiserror::Error;

pub const TURN_COST: u64 = 1000;
pub const STEP_COST: u64 = 1;

const WALL: u8 = b'#';
const START: u8 = b'S';
const END: u8 = b'E';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
pub struct Solver;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("maze has no {0:?} marker")]
    MissingMarker(char),
    #[error("maze has {count} {marker:?} markers, expected exactly one")]
    DuplicateMarker { marker: char, count: usize },
    #[error("no path from {start} to {end}")]
    Unreachable { start: Cell, end: Cell },
}

/// Search state: where the reindeer stands and which way it faces. The
/// same tile reached with different facings costs differently to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reindeer {
    pub cell: Cell,
    pub facing: Direction,
}

#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid<u8>,
    start: Cell,
    end: Cell,
}

impl Maze {
    pub fn parse(input: &str) -> Result<Self, MazeError> {
        let grid = Grid::parse_with(input, |c| {
            matches!(c, '#' | '.' | 'S' | 'E').then_some(c as u8)
        })?;
        let start = unique_marker(&grid, START)?;
        let end = unique_marker(&grid, END)?;
        Ok(Self { grid, start, end })
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    /// The reindeer always starts facing East
    pub fn start_state(&self) -> Reindeer {
        Reindeer {
            cell: self.start,
            facing: Direction::East,
        }
    }

    fn is_open(&self, cell: Cell) -> bool {
        self.grid.get(cell).is_some_and(|tile| *tile != WALL)
    }

    fn is_goal(&self, state: &Reindeer) -> bool {
        state.cell == self.end
    }

    fn unreachable(&self) -> MazeError {
        MazeError::Unreachable {
            start: self.start,
            end: self.end,
        }
    }

    /// Lowest score from `S` to `E`, stopping at the first goal popped
    pub fn lowest_score(&self) -> Result<u64, MazeError> {
        shortest_path(self, [self.start_state()], |s| self.is_goal(s))
            .ok_or_else(|| self.unreachable())
    }

    pub fn distance_table(&self) -> DistanceTable<Reindeer> {
        DistanceTable::compute(self, [self.start_state()])
    }

    /// Lowest score read from a completed distance table
    pub fn lowest_score_in(&self, table: &DistanceTable<Reindeer>) -> Result<u64, MazeError> {
        table
            .best_goal(|s| self.is_goal(s))
            .ok_or_else(|| self.unreachable())
    }

    /// Tiles on at least one lowest-score route, facings collapsed
    pub fn best_seats(&self, table: &DistanceTable<Reindeer>) -> Result<HashSet<Cell>, MazeError> {
        let states = table.optimal_states(|s| self.is_goal(s));
        if states.is_empty() {
            return Err(self.unreachable());
        }
        Ok(states.into_iter().map(|s| s.cell).collect())
    }
}

fn unique_marker(grid: &Grid<u8>, marker: u8) -> Result<Cell, MazeError> {
    match grid.find(&marker).as_slice() {
        [] => Err(MazeError::MissingMarker(marker as char)),
        [cell] => Ok(*cell),
        many => Err(MazeError::DuplicateMarker {
            marker: marker as char,
            count: many.len(),
        }),
    }
}

impl StateSpace for Maze {
    type State = Reindeer;

    fn successors(&self, state: &Reindeer, buf: &mut Vec<(Reindeer, u64)>) {
        for facing in [state.facing.clockwise(), state.facing.counter_clockwise()] {
            buf.push((
                Reindeer {
                    cell: state.cell,
                    facing,
                },
                TURN_COST,
            ));
        }

        let ahead = state.cell + state.facing.delta();
        if self.is_open(ahead) {
            buf.push((
                Reindeer {
                    cell: ahead,
                    facing: state.facing,
                },
                STEP_COST,
            ));
        }
    }
}

pub struct SharedData {
    maze: Maze,
    table: Option<DistanceTable<Reindeer>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let maze = Maze::parse(input).map_err(|e| match e {
            MazeError::MissingMarker(_) => ParseError::MissingData(e.to_string()),
            _ => ParseError::InvalidFormat(e.to_string()),
        })?;
        Ok(SharedData { maze, table: None })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score = match &shared.table {
            Some(table) => shared.maze.lowest_score_in(table),
            None => shared.maze.lowest_score(),
        }
        .map_err(SolveError::failed)?;
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let maze = &shared.maze;
        let table = shared.table.get_or_insert_with(|| maze.distance_table());
        let seats = maze.best_seats(table).map_err(SolveError::failed)?;
        Ok(seats.len().to_string())
    }
}
