mod adversarial;
mod planner;
mod reflex;

pub use adversarial::{AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent};
pub use planner::PlannerAgent;
pub use reflex::ReflexAgent;

use crate::game::GameState;

/// One decision per call from the driving game loop. `None` means the agent
/// has no action to offer (no legal moves, or an exhausted plan).
pub trait Agent<G: GameState> {
    fn act(&mut self, state: &G) -> Option<G::Action>;
}
