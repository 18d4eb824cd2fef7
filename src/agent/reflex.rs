use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use super::Agent;
use crate::eval::reflex_evaluation;
use crate::game::GameState;

/// Scores each legal action's successor with the reflex evaluation and
/// picks uniformly at random among the actions tied for the best score.
pub struct ReflexAgent<R: Rng> {
    rng: R,
}

impl<R: Rng> ReflexAgent<R> {
    pub fn new(rng: R) -> Self {
        ReflexAgent { rng }
    }
}

impl<G: GameState, R: Rng> Agent<G> for ReflexAgent<R> {
    fn act(&mut self, state: &G) -> Option<G::Action> {
        let actions = state.legal_actions(0);
        let scores: Vec<f64> = actions
            .iter()
            .map(|action| reflex_evaluation(state, action))
            .collect();
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let candidates: Vec<&G::Action> = actions
            .iter()
            .zip(&scores)
            .filter(|(_, score)| **score == best)
            .map(|(action, _)| action)
            .collect();
        trace!("{} actions tied at {best:?}", candidates.len());

        candidates
            .choose(&mut self.rng)
            .map(|action| (*action).clone())
    }
}
