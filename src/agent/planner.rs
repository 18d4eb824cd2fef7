use std::collections::VecDeque;

use tracing::debug;

use super::Agent;
use crate::game::GameState;
use crate::problem::SearchProblem;
use crate::stat::Stats;

/// Computes a full plan up front and replays it one action per decision.
pub struct PlannerAgent<A> {
    plan: VecDeque<A>,
}

impl<A> PlannerAgent<A> {
    /// Runs `search` once over `problem` and stores the resulting plan.
    pub fn new<P, S>(problem: &P, search: S, stats: &mut Stats) -> Self
    where
        P: SearchProblem<Action = A>,
        S: FnOnce(&P, &mut Stats) -> Vec<A>,
    {
        let plan = search(problem, stats);
        debug!("planned {} actions", plan.len());
        PlannerAgent { plan: plan.into() }
    }

    pub fn remaining(&self) -> usize {
        self.plan.len()
    }
}

impl<G, A> Agent<G> for PlannerAgent<A>
where
    G: GameState<Action = A>,
{
    fn act(&mut self, _state: &G) -> Option<A> {
        self.plan.pop_front()
    }
}
