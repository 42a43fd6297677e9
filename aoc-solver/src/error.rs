//! Error types for the solver library

use thiserror::Error;

/// Error raised while turning raw puzzle text into shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not have the shape the puzzle expects
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Something the puzzle needs (a marker, a section) is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Anything else
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error raised while solving one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is 0 or larger than the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The solver ran but could not produce an answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error as [`SolveError::SolveFailed`]
    pub fn failed<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SolveError::SolveFailed(Box::new(error))
    }
}

/// Error returned by registry lookups and solver instances
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the year/day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// The year/day cannot be stored in the registry
    #[error("Invalid year {0} day {1}")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error returned while building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for the year/day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// The year/day falls outside the supported range
    #[error("Invalid year {0} day {1} for registration")]
    InvalidYearDay(u16, u8),
}
