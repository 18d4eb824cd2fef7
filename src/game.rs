use std::fmt::Debug;

use crate::common::Position;

/// A threat agent as reported by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub position: Position,
    /// Remaining steps for which this threat is neutralized. While nonzero
    /// the threat poses no danger and may be chased for bonus.
    pub calm_timer: u32,
}

impl Threat {
    pub fn is_calmed(&self) -> bool {
        self.calm_timer > 0
    }
}

/// Turn-based multi-agent game state as exposed by the external engine.
///
/// Agent 0 is the single maximizing player; agents `1..num_agents()` are
/// threats, visited in index order. States are immutable snapshots; every
/// capability here is a read-only query, and `successor` produces a new
/// snapshot without touching the receiver.
pub trait GameState: Clone {
    type Action: Clone + PartialEq + Debug;

    /// Legal actions for `agent` in this state, in stable order.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state after `agent` takes `action`.
    fn successor(&self, agent: usize, action: &Self::Action) -> Self;

    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    fn score(&self) -> f64;

    fn player_position(&self) -> Position;

    fn threats(&self) -> Vec<Threat>;

    fn food_positions(&self) -> Vec<Position>;

    fn food_count(&self) -> usize;

    /// Special pickups that neutralize threats when collected.
    fn powerups(&self) -> Vec<Position>;

    fn is_noop(&self, action: &Self::Action) -> bool;
}
