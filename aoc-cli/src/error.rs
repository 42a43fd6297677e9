//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input store error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading puzzle inputs from disk
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the requested puzzle
    #[error("no input for {year}/{day:02} at {}", path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// Input directory is not a directory
    #[error("input directory {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// IO error
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
