//! Solver instances: parsed shared data plus timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Owns the shared data for one year/day and records how long parsing took.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and keep the result for later [`DynSolver::solve`] calls.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        log::debug!(
            "{}/{:02}: parsed {} bytes in {}µs",
            year,
            day,
            input.len(),
            (parse_end - parse_start).num_microseconds().unwrap_or(-1)
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased view of a [`SolverInstance`].
///
/// The registry hands these out so callers can drive any solver without
/// knowing its shared data type.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run_all(solver: &mut dyn DynSolver) {
///     for part in 1..=solver.parts() {
///         match solver.solve(part) {
///             Ok(result) => println!("part {}: {} ({})", part, result.answer, result.duration()),
///             Err(e) => eprintln!("part {}: {}", part, e),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, rejecting parts outside `1..=parts()`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        log::debug!(
            "{}/{:02} part {}: solved in {}µs",
            self.year,
            self.day,
            part,
            (solve_end - solve_start).num_microseconds().unwrap_or(-1)
        );

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
