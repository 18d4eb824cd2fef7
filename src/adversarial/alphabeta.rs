use tracing::{instrument, trace};

use super::{is_terminal, next_turn, Decision};
use crate::game::GameState;

/// Minimax with alpha-beta pruning. Value semantics are identical to
/// [`minimax_decision`](super::minimax_decision) for every input; pruning
/// only reduces the number of explored nodes.
///
/// A maximizing node raises alpha after each child and stops once alpha
/// strictly exceeds beta; minimizing nodes are symmetric with beta. The
/// root only tightens alpha from its running best, so it never prunes.
#[instrument(skip_all, name = "alpha_beta", level = "debug")]
pub fn alpha_beta_decision<G, F>(state: &G, depth: u32, eval: &F) -> Decision<G::Action>
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
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut best: Option<(G::Action, f64)> = None;
    for action in state.legal_actions(0) {
        let value = value_of(
            &state.successor(0, &action),
            next_depth,
            next_agent,
            alpha,
            beta,
            eval,
        );
        trace!("root action {action:?} value {value:?}");
        if best.as_ref().is_none_or(|(_, best_value)| value > *best_value) {
            best = Some((action, value));
        }
        if let Some((_, best_value)) = &best {
            alpha = alpha.max(*best_value);
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

fn value_of<G, F>(
    state: &G,
    depth: u32,
    agent: usize,
    mut alpha: f64,
    mut beta: f64,
    eval: &F,
) -> f64
where
    G: GameState,
    F: Fn(&G) -> f64,
{
    if is_terminal(state, depth) {
        return eval(state);
    }

    let (next_agent, next_depth) = next_turn(state, agent, depth);
    if agent == 0 {
        let mut value = f64::NEG_INFINITY;
        for action in state.legal_actions(agent) {
            value = value.max(value_of(
                &state.successor(agent, &action),
                next_depth,
                next_agent,
                alpha,
                beta,
                eval,
            ));
            alpha = alpha.max(value);
            if alpha > beta {
                break;
            }
        }
        value
    } else {
        let mut value = f64::INFINITY;
        for action in state.legal_actions(agent) {
            value = value.min(value_of(
                &state.successor(agent, &action),
                next_depth,
                next_agent,
                alpha,
                beta,
                eval,
            ));
            beta = beta.min(value);
            if alpha > beta {
                break;
            }
        }
        value
    }
}
