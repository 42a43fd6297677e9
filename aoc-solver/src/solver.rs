//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle text into the data shared by every part.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Walls;
///
/// impl AocParser for Walls {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let rows: Vec<&str> = input.lines().collect();
///         if rows.is_empty() {
///             return Err(ParseError::MissingData("empty grid".into()));
///         }
///         Ok(rows)
///     }
/// }
///
/// assert_eq!(Walls::parse("#.#\n...").unwrap().len(), 2);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// The lifetime lets the data borrow from the input text.
    type SharedData<'a>;

    /// Parse the raw puzzle input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement this once per part and derive [`AocSolver`](crate::AocSolver) to
/// get a [`Solver`] impl that dispatches on the part number.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Steps;
///
/// impl AocParser for Steps {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split(',')
///             .map(|s| s.trim().parse().map_err(|_| ParseError::InvalidFormat(s.into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Steps {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<u64>().to_string())
///     }
/// }
///
/// let mut shared = Steps::parse("1, 1000, 1").unwrap();
/// assert_eq!(<Steps as PartSolver<1>>::solve(&mut shared).unwrap(), "1002");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part. Parts may cache work in `shared` for later parts.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one year/day.
///
/// Usually generated by `#[derive(AocSolver)]`; hand-written impls are fine
/// for solvers that prefer a single `match`.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Turns;
///
/// impl AocParser for Turns {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Turns {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.matches('L').count().to_string()),
///             2 => Ok(shared.matches('R').count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Turns::parse("LLRL").unwrap();
/// assert_eq!(Turns::solve_part(&mut shared, 1).unwrap(), "3");
/// assert_eq!(Turns::solve_part(&mut shared, 2).unwrap(), "1");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part` (1-based).
    ///
    /// Returns [`SolveError::PartNotImplemented`] for parts without an
    /// implementation.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by solver instances.
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    /// with [`SolveError::PartOutOfRange`] before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
