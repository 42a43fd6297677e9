//! Uniform-cost search over implicit state spaces.
//!
//! A puzzle describes its graph by implementing [`StateSpace`]: given a
//! state, append every legal transition and its cost. Nothing is
//! materialized up front; states are expanded as the frontier reaches them.
//!
//! - [`shortest_path`] stops at the first goal state popped and returns its
//!   cost. Because states leave the frontier in cost order, that is the
//!   minimum over every goal state (for example every facing direction at
//!   the goal cell).
//! - [`DistanceTable`] runs the search to exhaustion and keeps, for every
//!   state, its final cost and all of its optimal predecessors, so the union
//!   of every minimum-cost path can be recovered in one backward sweep.
//!
//! Both return `None` when no goal state is reachable. Costs must be
//! strictly positive.
//!
//! # Example
//!
//! ```
//! use aoc_solutions::utils::search::{shortest_path, DistanceTable, StateSpace};
//!
//! /// A ring of `n` nodes; stepping forward costs 1, jumping two costs 3.
//! struct Ring(u32);
//!
//! impl StateSpace for Ring {
//!     type State = u32;
//!
//!     fn successors(&self, state: &u32, buf: &mut Vec<(u32, u64)>) {
//!         buf.push(((state + 1) % self.0, 1));
//!         buf.push(((state + 2) % self.0, 3));
//!     }
//! }
//!
//! assert_eq!(shortest_path(&Ring(10), [0], |s| *s == 4), Some(4));
//!
//! let table = DistanceTable::compute(&Ring(10), [0]);
//! assert_eq!(table.distance(&9), Some(9));
//! // 0 -> 1 -> 2 -> 3 -> 4 is the only way to reach 4 at cost 4
//! assert_eq!(table.optimal_states(|s| *s == 4).len(), 5);
//! ```

mod dijkstra;
mod distance_table;

pub use dijkstra::shortest_path;
pub use distance_table::DistanceTable;

use std::cmp::Ordering;
use std::hash::Hash;

/// A graph given implicitly by its transition function.
pub trait StateSpace {
    /// A search node. Two states are the same node iff they compare equal.
    type State: Copy + Eq + Hash;

    /// Append every `(next_state, cost)` reachable from `state` in one
    /// transition. `buf` is cleared by the caller. Costs must be `> 0`.
    fn successors(&self, state: &Self::State, buf: &mut Vec<(Self::State, u64)>);
}

/// Frontier entry ordered so that `BinaryHeap` pops the cheapest first.
struct FrontierEntry<S> {
    cost: u64,
    state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other.cost.cmp(&self.cost)
    }
}
