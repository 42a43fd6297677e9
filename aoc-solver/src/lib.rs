//! Advent of Code Solver Library
//!
//! Framework shared by the puzzle solutions and the `aoc` runner:
//! - [`AocParser`], [`PartSolver`] and [`Solver`] describe one puzzle
//! - [`SolverInstance`] / [`DynSolver`] hold parsed input and time each part
//! - [`SolverRegistry`] maps year/day to solver factories
//! - [`SolverPlugin`] plus `#[derive(AutoRegisterSolver)]` collect solvers
//!   from every linked crate through `inventory`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder, register_solver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Corridor;
//!
//! impl AocParser for Corridor {
//!     type SharedData<'a> = &'a str;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         if input.contains('S') && input.contains('E') {
//!             Ok(input.trim())
//!         } else {
//!             Err(ParseError::MissingData("start or end marker".into()))
//!         }
//!     }
//! }
//!
//! impl PartSolver<1> for Corridor {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.matches('.').count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Corridor {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! register_solver!(builder, Corridor, 2024, 16);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2024, 16, "S...E").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```
//!
//! # Automatic registration
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 16, tags = ["grid"])]
//! pub struct Solver;
//! ```
//!
//! `SolverRegistryBuilder::register_all_plugins` then picks up every solver
//! linked into the binary.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code generated in aoc-solver-macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
