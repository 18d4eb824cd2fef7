mod alphabeta;
mod expectimax;
mod minimax;

pub use alphabeta::alpha_beta_decision;
pub use expectimax::expectimax_decision;
pub use minimax::minimax_decision;

use crate::game::GameState;

/// Outcome of one game-tree evaluation from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// Best root action. `None` when the root is terminal or the depth
    /// budget is zero, in which case `value` is the bare evaluation score.
    pub action: Option<A>,
    pub value: f64,
}

/// Terminal test shared by all three engines: a won or lost state, or an
/// exhausted ply budget, returns the evaluation score without expansion.
pub(crate) fn is_terminal<G: GameState>(state: &G, depth: u32) -> bool {
    depth == 0 || state.is_win() || state.is_lose()
}

/// Turn order: agents cycle in index order, and completing a full round
/// (wrapping back to agent 0) consumes one unit of ply depth.
pub(crate) fn next_turn<G: GameState>(state: &G, agent: usize, depth: u32) -> (usize, u32) {
    if agent + 1 == state.num_agents() {
        (0, depth - 1)
    } else {
        (agent + 1, depth)
    }
}
