use tracing::{instrument, trace};

use super::{is_terminal, next_turn, Decision};
use crate::game::GameState;

/// Expectimax. Agent 0 maximizes as in minimax; every other agent is a
/// chance node returning the mean of its children under a uniform
/// distribution over that agent's legal actions. A chance agent with no
/// legal action at a non-terminal state evaluates the state directly.
#[instrument(skip_all, name = "expectimax", level = "debug")]
pub fn expectimax_decision<G, F>(state: &G, depth: u32, eval: &F) -> Decision<G::Action>
where
    G: GameState,
    F: Fn(&G) -> f64,
{
    if is_terminal(state, depth) {
        return Decision {
            action: None,
            value: eval(state),
        };
    }

    let (next_agent, next_depth) = next_turn(state, 0, depth);
    let mut best: Option<(G::Action, f64)> = None;
    for action in state.legal_actions(0) {
        let value = value_of(&state.successor(0, &action), next_depth, next_agent, eval);
        trace!("root action {action:?} expected value {value:?}");
        if best.as_ref().is_none_or(|(_, best_value)| value > *best_value) {
            best = Some((action, value));
        }
    }

    match best {
        Some((action, value)) => Decision {
            action: Some(action),
            value,
        },
        None => Decision {
            action: None,
            value: eval(state),
        },
    }
}

fn value_of<G, F>(state: &G, depth: u32, agent: usize, eval: &F) -> f64
where
    G: GameState,
    F: Fn(&G) -> f64,
{
    if is_terminal(state, depth) {
        return eval(state);
    }

    let (next_agent, next_depth) = next_turn(state, agent, depth);
    if agent == 0 {
        let mut best = f64::NEG_INFINITY;
        for action in state.legal_actions(agent) {
            best = best.max(value_of(
                &state.successor(agent, &action),
                next_depth,
                next_agent,
                eval,
            ));
        }
        best
    } else {
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            // A blocked chance agent contributes the state's own value.
            return eval(state);
        }
        let probability = 1.0 / actions.len() as f64;
        let mut expected = 0.0;
        for action in &actions {
            expected += probability
                * value_of(&state.successor(agent, action), next_depth, next_agent, eval);
        }
        expected
    }
}
