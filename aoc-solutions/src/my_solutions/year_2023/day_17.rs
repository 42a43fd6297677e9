//! Crucible heat loss: cheapest walk across a city of digits where the
//! crucible must go straight between `min_run` and `max_run` blocks before
//! turning.

use crate::utils::grid::{Cell, Direction, Grid, GridError};
use crate::utils::search::{StateSpace, shortest_path};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["grid", "dijkstra"])]
pub struct Solver;

#[derive(Debug, Error)]
#[error("no route from {start} to {end} with runs of {min_run}..={max_run} blocks")]
pub struct NoRoute {
    start: Cell,
    end: Cell,
    min_run: u8,
    max_run: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crucible {
    pub cell: Cell,
    pub facing: Direction,
    /// Blocks moved in a straight line since the last turn
    pub run: u8,
}

/// City map paired with the movement limits of one kind of crucible
pub struct CityMap<'g> {
    heat_loss: &'g Grid<u8>,
    min_run: u8,
    max_run: u8,
}

impl<'g> CityMap<'g> {
    pub fn new(heat_loss: &'g Grid<u8>, min_run: u8, max_run: u8) -> Self {
        Self {
            heat_loss,
            min_run,
            max_run,
        }
    }

    /// Least heat loss from the top-left to the bottom-right block. The
    /// starting block's own loss is not counted.
    pub fn least_heat_loss(&self) -> Result<u64, NoRoute> {
        let start = Cell::new(0, 0);
        let end = self.heat_loss.last_cell();
        let starts = [Direction::East, Direction::South].map(|facing| Crucible {
            cell: start,
            facing,
            run: 0,
        });

        shortest_path(self, starts, |c| c.cell == end && c.run >= self.min_run).ok_or(NoRoute {
            start,
            end,
            min_run: self.min_run,
            max_run: self.max_run,
        })
    }

    fn enter(&self, from: Cell, facing: Direction, run: u8, buf: &mut Vec<(Crucible, u64)>) {
        let cell = from + facing.delta();
        if let Some(loss) = self.heat_loss.get(cell) {
            buf.push((Crucible { cell, facing, run }, u64::from(*loss)));
        }
    }
}

impl StateSpace for CityMap<'_> {
    type State = Crucible;

    fn successors(&self, state: &Crucible, buf: &mut Vec<(Crucible, u64)>) {
        if state.run < self.max_run {
            self.enter(state.cell, state.facing, state.run + 1, buf);
        }
        if state.run >= self.min_run {
            for facing in [state.facing.clockwise(), state.facing.counter_clockwise()] {
                self.enter(state.cell, facing, 1, buf);
            }
        }
    }
}

pub fn parse_city(input: &str) -> Result<Grid<u8>, GridError> {
    Grid::parse_with(input, |c| {
        c.to_digit(10)
            .filter(|d| *d > 0)
            .map(|d| d as u8)
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_city(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let loss = CityMap::new(shared, 1, 3)
            .least_heat_loss()
            .map_err(SolveError::failed)?;
        Ok(loss.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let loss = CityMap::new(shared, 4, 10)
            .least_heat_loss()
            .map_err(SolveError::failed)?;
        Ok(loss.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    const UNFORTUNATE: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        let mut shared = <Solver as AocParser>::parse(input).unwrap();
        Solver::solve_part(&mut shared, part)
    }

    #[test]
    fn test_example() {
        assert_eq!(solve(EXAMPLE, 1).unwrap(), "102");
        assert_eq!(solve(EXAMPLE, 2).unwrap(), "94");
    }

    #[test]
    fn test_ultra_crucible_must_run_four_before_stopping() {
        assert_eq!(solve(UNFORTUNATE, 2).unwrap(), "71");
    }

    #[test]
    fn test_single_row_limits() {
        // Eleven blocks straight east: too far for either crucible
        let row = parse_city("111111111111").unwrap();
        assert!(CityMap::new(&row, 1, 3).least_heat_loss().is_err());
        assert!(CityMap::new(&row, 4, 10).least_heat_loss().is_err());

        // Five blocks east: fine for the ultra crucible only
        let row = parse_city("123456").unwrap();
        assert!(CityMap::new(&row, 1, 3).least_heat_loss().is_err());
        assert_eq!(CityMap::new(&row, 4, 10).least_heat_loss().unwrap(), 20);

        // Three blocks south
        let column = parse_city("9\n1\n2\n3").unwrap();
        assert_eq!(CityMap::new(&column, 1, 3).least_heat_loss().unwrap(), 6);
        assert!(CityMap::new(&column, 4, 10).least_heat_loss().is_err());

        assert!(matches!(solve("1111\n1111", 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_never_reverses() {
        let city = parse_city("11\n11").unwrap();
        let map = CityMap::new(&city, 1, 3);
        let mut buf = Vec::new();
        let state = Crucible {
            cell: Cell::new(1, 0),
            facing: Direction::South,
            run: 1,
        };
        map.successors(&state, &mut buf);

        // South and West step off the grid, North would be a reversal
        assert_eq!(buf.len(), 1);
        assert_eq!(buf[0].0.cell, Cell::new(1, 1));
        assert_eq!(buf[0].0.facing, Direction::East);
        assert_eq!(buf[0].0.run, 1);
    }

    #[test]
    fn test_invalid_digits_rejected() {
        assert!(matches!(
            parse_city("120\n111"),
            Err(GridError::InvalidCell { found: '0', .. })
        ));
        assert!(matches!(
            <Solver as AocParser>::parse("12\n1x"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(parse_city("\n\n"), Err(GridError::Empty)));
    }

    fn city_text(size: usize, digits: &[u8]) -> String {
        digits
            .chunks(size)
            .map(|row| row.iter().map(|d| char::from(b'0' + d)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    proptest! {
        /// A staircase path exists on any square of ones
        #[test]
        fn uniform_square_costs_manhattan(size in 2usize..9) {
            let text = city_text(size, &vec![1; size * size]);
            let city = parse_city(&text).unwrap();
            let loss = CityMap::new(&city, 1, 3).least_heat_loss().unwrap();
            prop_assert_eq!(loss, 2 * (size as u64 - 1));
        }

        /// Every block entered loses at least 1, so the loss is at least the
        /// number of blocks between the corners and at most 9 per block
        #[test]
        fn loss_bounded_by_route_length(digits in prop::collection::vec(1u8..=9, 36)) {
            let city = parse_city(&city_text(6, &digits)).unwrap();
            let loss = CityMap::new(&city, 1, 3).least_heat_loss().unwrap();
            prop_assert!(loss >= 10);
            prop_assert!(loss <= 9 * 10);
        }
    }
}
