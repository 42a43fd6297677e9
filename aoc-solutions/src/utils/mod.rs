//! Helpers shared by the grid puzzles

pub mod grid;
pub mod search;
