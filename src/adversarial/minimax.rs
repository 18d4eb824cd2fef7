use tracing::{instrument, trace};

use super::{is_terminal, next_turn, Decision};
use crate::game::GameState;

/// Depth-bounded minimax. Agent 0 takes the max over successor values and
/// every other agent takes the min. The root enumerates agent 0's own legal
/// actions and keeps the first-encountered action on ties.
#[instrument(skip_all, name = "minimax", level = "debug")]
pub fn minimax_decision<G, F>(state: &G, depth: u32, eval: &F) -> Decision<G::Action>
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
        trace!("root action {action:?} value {value:?}");
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
        let mut worst = f64::INFINITY;
        for action in state.legal_actions(agent) {
            worst = worst.min(value_of(
                &state.successor(agent, &action),
                next_depth,
                next_agent,
                eval,
            ));
        }
        worst
    }
}
