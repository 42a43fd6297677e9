//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live under `my_solutions/year_YYYY/day_N.rs`. Each one derives
//! `AocSolver` and `AutoRegisterSolver`, so linking this crate is enough for
//! the `aoc` runner to find it. The grid puzzles share [`utils::grid`] and
//! [`utils::search`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
