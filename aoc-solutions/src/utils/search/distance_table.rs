//! Exhaustive search keeping every optimal predecessor.

use super::{FrontierEntry, StateSpace};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// Final costs of every state reachable from the start states, together with
/// the set of predecessors through which each state attains its cost.
///
/// A single parent pointer per state would keep only one of several tied
/// routes, so every predecessor `p` with `cost(p) + edge = cost(s)` is kept.
#[derive(Debug, Clone)]
pub struct DistanceTable<St> {
    distances: HashMap<St, u64>,
    predecessors: HashMap<St, Vec<St>>,
}

impl<St> DistanceTable<St>
where
    St: Copy + Eq + Hash,
{
    /// Run the search from `starts` until the frontier is empty.
    pub fn compute<S, I>(space: &S, starts: I) -> Self
    where
        S: StateSpace<State = St>,
        I: IntoIterator<Item = St>,
    {
        let mut distances: HashMap<St, u64> = HashMap::new();
        let mut tentative: HashMap<St, u64> = HashMap::new();
        let mut predecessors: HashMap<St, Vec<St>> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        for start in starts {
            tentative.insert(start, 0);
            frontier.push(FrontierEntry {
                cost: 0,
                state: start,
            });
        }

        let mut buf = Vec::new();
        while let Some(FrontierEntry { cost, state }) = frontier.pop() {
            if distances.contains_key(&state) {
                continue;
            }
            distances.insert(state, cost);

            buf.clear();
            space.successors(&state, &mut buf);
            for &(next, step) in &buf {
                // Positive costs: a finalized state can never be tied again
                if distances.contains_key(&next) {
                    continue;
                }
                let candidate = cost + step;
                let known = tentative.entry(next).or_insert(u64::MAX);
                if candidate < *known {
                    *known = candidate;
                    predecessors.insert(next, vec![state]);
                    frontier.push(FrontierEntry {
                        cost: candidate,
                        state: next,
                    });
                } else if candidate == *known {
                    predecessors.entry(next).or_default().push(state);
                }
            }
        }

        log::debug!("distance table finalized {} states", distances.len());
        Self {
            distances,
            predecessors,
        }
    }

    /// Final cost of `state`, `None` if it was never reached
    pub fn distance(&self, state: &St) -> Option<u64> {
        self.distances.get(state).copied()
    }

    /// Cheapest cost over every reached state satisfying `is_goal`
    pub fn best_goal<G>(&self, mut is_goal: G) -> Option<u64>
    where
        G: FnMut(&St) -> bool,
    {
        self.distances
            .iter()
            .filter(|(state, _)| is_goal(*state))
            .map(|(_, cost)| *cost)
            .min()
    }

    /// Every state lying on at least one minimum-cost path to a goal.
    ///
    /// Walks backwards from all goal states at the best goal cost through the
    /// predecessor sets. Each state is visited once, so merging routes are not
    /// re-walked. Empty when no goal was reached.
    pub fn optimal_states<G>(&self, mut is_goal: G) -> HashSet<St>
    where
        G: FnMut(&St) -> bool,
    {
        let Some(best) = self.best_goal(&mut is_goal) else {
            return HashSet::new();
        };

        let mut stack: Vec<St> = self
            .distances
            .iter()
            .filter(|(state, cost)| **cost == best && is_goal(*state))
            .map(|(state, _)| *state)
            .collect();
        let mut visited: HashSet<St> = stack.iter().copied().collect();

        while let Some(state) = stack.pop() {
            for &prev in self.predecessors.get(&state).into_iter().flatten() {
                if visited.insert(prev) {
                    stack.push(prev);
                }
            }
        }
        visited
    }

    /// Number of states reached
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
