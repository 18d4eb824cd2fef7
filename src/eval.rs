use crate::common::{manhattan_distance, Position};
use crate::game::GameState;

// Tunable weights for the reflex evaluation. The qualitative shape is what
// matters: scores decay monotonically with distance, close active threats
// cost a flat penalty, and standing still is discouraged.
const FOOD_PROXIMITY_WEIGHT: f64 = 2.0;
const FOOD_EATEN_BONUS: f64 = 12.0;
const CHASE_WEIGHT: f64 = 3.0;
const CAPTURE_BONUS: f64 = 30.0;
const THREAT_CONTACT_PENALTY: f64 = 8.0;
const POWERUP_URGENT_WEIGHT: f64 = 2.5;
const POWERUP_IDLE_WEIGHT: f64 = 1.2;
const NOOP_PENALTY: f64 = 6.0;

/// The raw engine score. Baseline evaluation for the adversarial agents.
pub fn score_evaluation<G: GameState>(state: &G) -> f64 {
    state.score()
}

/// Scores the successor reached by the player taking `action` from `state`.
/// Used by the reflex agent to rank its immediate alternatives.
pub fn reflex_evaluation<G: GameState>(state: &G, action: &G::Action) -> f64 {
    let successor = state.successor(0, action);
    let position = successor.player_position();
    let threats = successor.threats();

    let mut total = successor.score();

    if let Some(closest) = nearest(position, &successor.food_positions()) {
        total += FOOD_PROXIMITY_WEIGHT / (1.0 + closest);
    }
    if successor.food_count() < state.food_count() {
        total += FOOD_EATEN_BONUS;
    }

    for threat in &threats {
        let distance = manhattan_distance(position, threat.position);
        if threat.is_calmed() {
            total += CHASE_WEIGHT / (1.0 + distance);
            if distance == 0.0 {
                total += CAPTURE_BONUS;
            }
        } else if distance <= 1.0 {
            total -= THREAT_CONTACT_PENALTY;
        } else {
            total -= 1.0 / distance;
        }
    }

    if let Some(closest) = nearest(position, &successor.powerups()) {
        let threat_pressing = threats.iter().any(|threat| {
            !threat.is_calmed() && manhattan_distance(position, threat.position) <= 2.0
        });
        let weight = if threat_pressing {
            POWERUP_URGENT_WEIGHT
        } else {
            POWERUP_IDLE_WEIGHT
        };
        total += weight / (1.0 + closest);
    }

    if state.is_noop(action) {
        total -= NOOP_PENALTY;
    }

    total
}

/// Full-state evaluation for the adversarial agents.
///
/// Decided games dominate everything: a lost state is negative infinity and
/// a won state positive infinity. Otherwise the engine score is shaped by
/// decaying food attraction, threat avoidance (or pursuit while calmed) and
/// powerup attraction.
pub fn combined_evaluation<G: GameState>(state: &G) -> f64 {
    if state.is_lose() {
        return f64::NEG_INFINITY;
    }
    if state.is_win() {
        return f64::INFINITY;
    }

    let position = state.player_position();
    let mut total = state.score();

    let food_distance = nearest(position, &state.food_positions()).unwrap_or(0.0);
    total += 20.0 / (1.0 + food_distance);

    for threat in state.threats() {
        let distance = manhattan_distance(position, threat.position);
        if threat.is_calmed() {
            total += 10.0 / (1.0 + distance);
        } else if distance <= 1.0 {
            total -= 200.0;
        } else {
            total -= 1.0 / (1.0 + distance);
        }
    }

    if let Some(closest) = nearest(position, &state.powerups()) {
        total += 10.0 / (1.0 + closest);
    }

    total
}

fn nearest(from: Position, targets: &[Position]) -> Option<f64> {
    targets
        .iter()
        .map(|target| manhattan_distance(from, *target))
        .min_by(f64::total_cmp)
}
