mod astar;
mod uninformed;

pub use astar::{a_star_search, manhattan_heuristic, null_heuristic};
pub use uninformed::{breadth_first_search, depth_first_search, uniform_cost_search};

use std::cmp::Ordering;

/// Priority-queue entry for the cost-ordered searches.
///
/// Ordered by `priority`, then by insertion sequence, so equal-priority
/// entries pop in FIFO order.
#[derive(Debug)]
pub(crate) struct FrontierEntry<S, A> {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    pub(crate) cost: f64,
    pub(crate) state: S,
    pub(crate) path: Vec<A>,
}

impl<S, A> PartialEq for FrontierEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, A> Eq for FrontierEntry<S, A> {}

impl<S, A> PartialOrd for FrontierEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for FrontierEntry<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}
