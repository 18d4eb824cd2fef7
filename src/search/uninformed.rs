use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::{debug, instrument, trace};

use super::FrontierEntry;
use crate::problem::SearchProblem;
use crate::stat::Stats;

/// Depth-first search over `problem`.
///
/// LIFO frontier; a popped state is expanded only if unvisited and marked
/// visited at expansion time. Returns the path to the first goal found, or
/// an empty path when the frontier is exhausted. Not cost-optimal.
#[instrument(skip_all, name = "dfs", level = "debug")]
pub fn depth_first_search<P: SearchProblem>(problem: &P, stats: &mut Stats) -> Vec<P::Action> {
    let mut frontier = vec![(problem.start_state(), Vec::new())];
    let mut visited = HashSet::new();

    while let Some((state, path)) = frontier.pop() {
        if !visited.insert(state.clone()) {
            continue;
        }
        stats.expanded_nodes += 1;
        trace!("expand: {state:?}");

        if problem.is_goal(&state) {
            return path;
        }

        for successor in problem.successors(&state) {
            if !visited.contains(&successor.state) {
                stats.generated_nodes += 1;
                let mut next_path = path.clone();
                next_path.push(successor.action);
                frontier.push((successor.state, next_path));
            }
        }
    }

    debug!("frontier exhausted without reaching a goal");
    Vec::new()
}

/// Breadth-first search over `problem`.
///
/// FIFO frontier; states are marked visited at insertion so no state is
/// queued twice. Optimal in action count when all step costs are equal.
#[instrument(skip_all, name = "bfs", level = "debug")]
pub fn breadth_first_search<P: SearchProblem>(problem: &P, stats: &mut Stats) -> Vec<P::Action> {
    let mut frontier = VecDeque::new();
    let mut visited = HashSet::new();

    let start = problem.start_state();
    visited.insert(start.clone());
    frontier.push_back((start, Vec::new()));

    while let Some((state, path)) = frontier.pop_front() {
        stats.expanded_nodes += 1;
        trace!("expand: {state:?}");

        if problem.is_goal(&state) {
            return path;
        }

        for successor in problem.successors(&state) {
            if visited.insert(successor.state.clone()) {
                stats.generated_nodes += 1;
                let mut next_path = path.clone();
                next_path.push(successor.action);
                frontier.push_back((successor.state, next_path));
            }
        }
    }

    debug!("frontier exhausted without reaching a goal");
    Vec::new()
}

/// Uniform-cost search over `problem`.
///
/// Min-priority frontier on accumulated path cost with FIFO tie order. A
/// successor is enqueued only when it strictly improves the best known cost
/// for its state; stale pops are discarded. The first goal popped carries a
/// minimum-cost path.
#[instrument(skip_all, name = "ucs", level = "debug")]
pub fn uniform_cost_search<P: SearchProblem>(problem: &P, stats: &mut Stats) -> Vec<P::Action> {
    let mut frontier = BinaryHeap::new();
    let mut best_cost: HashMap<P::State, f64> = HashMap::new();
    let mut seq = 0u64;

    let start = problem.start_state();
    best_cost.insert(start.clone(), 0.0);
    frontier.push(Reverse(FrontierEntry {
        priority: 0.0,
        seq,
        cost: 0.0,
        state: start,
        path: Vec::new(),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        trace!("expand: {:?} cost {:?}", entry.state, entry.cost);

        if problem.is_goal(&entry.state) {
            return entry.path;
        }

        // A cheaper route to this state was queued after this entry.
        if entry.cost > best_cost.get(&entry.state).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        stats.expanded_nodes += 1;

        for successor in problem.successors(&entry.state) {
            let next_cost = entry.cost + successor.cost;
            if next_cost
                < best_cost
                    .get(&successor.state)
                    .copied()
                    .unwrap_or(f64::INFINITY)
            {
                best_cost.insert(successor.state.clone(), next_cost);
                stats.generated_nodes += 1;
                let mut next_path = entry.path.clone();
                next_path.push(successor.action);
                seq += 1;
                frontier.push(Reverse(FrontierEntry {
                    priority: next_cost,
                    seq,
                    cost: next_cost,
                    state: successor.state,
                    path: next_path,
                }));
            }
        }
    }

    debug!("frontier exhausted without reaching a goal");
    Vec::new()
}
