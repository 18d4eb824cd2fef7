use super::Agent;
use crate::adversarial::{alpha_beta_decision, expectimax_decision, minimax_decision};
use crate::game::GameState;

/// Minimax shell: ply depth and evaluation function fixed at construction.
pub struct MinimaxAgent<F> {
    depth: u32,
    eval: F,
}

impl<F> MinimaxAgent<F> {
    pub fn new(depth: u32, eval: F) -> Self {
        MinimaxAgent { depth, eval }
    }
}

impl<G, F> Agent<G> for MinimaxAgent<F>
where
    G: GameState,
    F: Fn(&G) -> f64,
{
    fn act(&mut self, state: &G) -> Option<G::Action> {
        minimax_decision(state, self.depth, &self.eval).action
    }
}

/// Alpha-beta shell; decisions are identical to [`MinimaxAgent`] with the
/// same depth and evaluation function.
pub struct AlphaBetaAgent<F> {
    depth: u32,
    eval: F,
}

impl<F> AlphaBetaAgent<F> {
    pub fn new(depth: u32, eval: F) -> Self {
        AlphaBetaAgent { depth, eval }
    }
}

impl<G, F> Agent<G> for AlphaBetaAgent<F>
where
    G: GameState,
    F: Fn(&G) -> f64,
{
    fn act(&mut self, state: &G) -> Option<G::Action> {
        alpha_beta_decision(state, self.depth, &self.eval).action
    }
}

/// Expectimax shell for environments better modeled by uniformly random
/// threats than adversarial ones.
pub struct ExpectimaxAgent<F> {
    depth: u32,
    eval: F,
}

impl<F> ExpectimaxAgent<F> {
    pub fn new(depth: u32, eval: F) -> Self {
        ExpectimaxAgent { depth, eval }
    }
}

impl<G, F> Agent<G> for ExpectimaxAgent<F>
where
    G: GameState,
    F: Fn(&G) -> f64,
{
    fn act(&mut self, state: &G) -> Option<G::Action> {
        expectimax_decision(state, self.depth, &self.eval).action
    }
}
