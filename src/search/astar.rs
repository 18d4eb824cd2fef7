use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, instrument, trace};

use super::FrontierEntry;
use crate::common::{manhattan_distance, Position};
use crate::problem::{PositionSearchProblem, SearchProblem};
use crate::stat::Stats;

/// The trivial heuristic. A* with it degenerates to uniform-cost search.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> f64 {
    0.0
}

/// L1 distance to the goal of a [`PositionSearchProblem`]. Admissible on a
/// four-connected grid with unit step costs.
pub fn manhattan_heuristic(state: &Position, problem: &PositionSearchProblem) -> f64 {
    manhattan_distance(*state, problem.goal())
}

/// A* search over `problem`, ordered by f = g + h.
///
/// A node may be re-enqueued while open, but a state is closed the first
/// time it pops and never re-expanded after that. Optimality requires an
/// admissible `heuristic`; that is the caller's responsibility and is not
/// checked here.
#[instrument(skip_all, name = "a_star", level = "debug")]
pub fn a_star_search<P, H>(problem: &P, heuristic: H, stats: &mut Stats) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    let mut frontier = BinaryHeap::new();
    let mut closed = HashSet::new();
    let mut seq = 0u64;

    let start = problem.start_state();
    frontier.push(Reverse(FrontierEntry {
        priority: heuristic(&start, problem),
        seq,
        cost: 0.0,
        state: start,
        path: Vec::new(),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        trace!("expand: {:?} f {:?}", entry.state, entry.priority);

        if problem.is_goal(&entry.state) {
            return entry.path;
        }

        if !closed.insert(entry.state.clone()) {
            continue;
        }
        stats.expanded_nodes += 1;

        for successor in problem.successors(&entry.state) {
            if closed.contains(&successor.state) {
                continue;
            }
            let next_cost = entry.cost + successor.cost;
            stats.generated_nodes += 1;
            let mut next_path = entry.path.clone();
            next_path.push(successor.action);
            seq += 1;
            frontier.push(Reverse(FrontierEntry {
                priority: next_cost + heuristic(&successor.state, problem),
                seq,
                cost: next_cost,
                state: successor.state,
                path: next_path,
            }));
        }
    }

    debug!("frontier exhausted without reaching a goal");
    Vec::new()
}
