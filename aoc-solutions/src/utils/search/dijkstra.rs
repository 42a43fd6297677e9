//! Early-exit uniform-cost search.

use super::{FrontierEntry, StateSpace};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Minimum cost from any of `starts` to any state satisfying `is_goal`.
///
/// Every start state begins at cost 0. A state is finalized the first time
/// it is popped and never expanded again. Returns `None` once the frontier
/// is exhausted without popping a goal state.
pub fn shortest_path<S, I, G>(space: &S, starts: I, mut is_goal: G) -> Option<u64>
where
    S: StateSpace,
    I: IntoIterator<Item = S::State>,
    G: FnMut(&S::State) -> bool,
{
    let mut best: HashMap<S::State, u64> = HashMap::new();
    let mut finalized: HashSet<S::State> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    for start in starts {
        best.insert(start, 0);
        frontier.push(FrontierEntry {
            cost: 0,
            state: start,
        });
    }

    let mut buf = Vec::new();
    while let Some(FrontierEntry { cost, state }) = frontier.pop() {
        if !finalized.insert(state) {
            continue;
        }
        if is_goal(&state) {
            log::debug!(
                "goal reached at cost {} after finalizing {} states",
                cost,
                finalized.len()
            );
            return Some(cost);
        }

        buf.clear();
        space.successors(&state, &mut buf);
        for &(next, step) in &buf {
            if finalized.contains(&next) {
                continue;
            }
            let tentative = cost + step;
            let known = best.entry(next).or_insert(u64::MAX);
            if tentative < *known {
                *known = tentative;
                frontier.push(FrontierEntry {
                    cost: tentative,
                    state: next,
                });
            }
        }
    }

    log::debug!(
        "frontier exhausted after finalizing {} states, goal unreachable",
        finalized.len()
    );
    None
}
