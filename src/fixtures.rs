//! Hand-built problems and a miniature pursuit game used across the test
//! modules. Everything here is deterministic so expected values can be
//! worked out on paper.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::common::{Move, Position};
use crate::game::{GameState, Threat};
use crate::problem::{SearchProblem, Successor};

/// Adjacency-list search problem over named states.
pub(crate) struct GraphProblem {
    start: &'static str,
    goals: Vec<&'static str>,
    edges: HashMap<&'static str, Vec<(&'static str, &'static str, f64)>>,
}

impl GraphProblem {
    pub(crate) fn new(start: &'static str, goals: &[&'static str]) -> Self {
        GraphProblem {
            start,
            goals: goals.to_vec(),
            edges: HashMap::new(),
        }
    }

    /// Adds `from -[action]-> to` with the given cost. Insertion order is
    /// the successor order, which the tie-break tests rely on.
    pub(crate) fn edge(
        mut self,
        from: &'static str,
        action: &'static str,
        to: &'static str,
        cost: f64,
    ) -> Self {
        self.edges.entry(from).or_default().push((action, to, cost));
        self
    }
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = &'static str;

    fn start_state(&self) -> &'static str {
        self.start
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &&'static str) -> Vec<Successor<&'static str, &'static str>> {
        self.edges
            .get(state)
            .map(|edges| {
                edges
                    .iter()
                    .map(|(action, to, cost)| Successor {
                        state: *to,
                        action: *action,
                        cost: *cost,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn cost_of_path(&self, actions: &[&'static str]) -> f64 {
        let mut state = self.start;
        let mut total = 0.0;
        for action in actions {
            let Some(&(_, to, cost)) = self
                .edges
                .get(state)
                .and_then(|edges| edges.iter().find(|(label, _, _)| label == action))
            else {
                return f64::INFINITY;
            };
            state = to;
            total += cost;
        }
        total
    }
}

/// Replays `plan` through the problem's own successor function and reports
/// whether it ends in a goal state.
pub(crate) fn replay<P: SearchProblem>(problem: &P, plan: &[P::Action]) -> bool {
    let mut state = problem.start_state();
    for action in plan {
        let Some(successor) = problem
            .successors(&state)
            .into_iter()
            .find(|successor| successor.action == *action)
        else {
            return false;
        };
        state = successor.state;
    }
    problem.is_goal(&state)
}

const CALM_STEPS: u32 = 5;
const FOOD_SCORE: f64 = 10.0;
const WIN_SCORE: f64 = 100.0;
const CAPTURE_SCORE: f64 = 200.0;
const LOSS_SCORE: f64 = 500.0;

/// A one-row pursuit game on columns `0..width`.
///
/// Agent 0 moves the player east/west (or stops); each further agent moves
/// one threat. Eating the last food wins; touching an active threat loses;
/// touching a calmed one captures it (it respawns at the east wall). A
/// powerup calms every threat for [`CALM_STEPS`] of its moves.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TinyPursuit {
    width: i32,
    player: i32,
    threats: Vec<(i32, u32)>,
    food: Vec<i32>,
    powerups: Vec<i32>,
    score: f64,
    lost: bool,
    threat_moves: Vec<Move>,
}

impl TinyPursuit {
    pub(crate) fn corridor(width: i32, player: i32) -> Self {
        assert!(width > 0 && (0..width).contains(&player));
        TinyPursuit {
            width,
            player,
            threats: Vec::new(),
            food: Vec::new(),
            powerups: Vec::new(),
            score: 0.0,
            lost: false,
            threat_moves: vec![Move::East, Move::West],
        }
    }

    pub(crate) fn with_threat(mut self, column: i32, calm_timer: u32) -> Self {
        self.threats.push((column, calm_timer));
        self
    }

    pub(crate) fn with_food(mut self, columns: &[i32]) -> Self {
        self.food.extend_from_slice(columns);
        self
    }

    pub(crate) fn with_powerup(mut self, column: i32) -> Self {
        self.powerups.push(column);
        self
    }

    /// Pins every threat to the no-op, giving chance nodes a single action.
    pub(crate) fn frozen_threats(mut self) -> Self {
        self.threat_moves = vec![Move::Stop];
        self
    }

    /// Removes every threat move, leaving chance agents with no legal action.
    pub(crate) fn blocked_threats(mut self) -> Self {
        self.threat_moves = Vec::new();
        self
    }

    fn in_bounds(&self, column: i32) -> bool {
        (0..self.width).contains(&column)
    }

    fn step(&self, from: i32, movement: Move) -> Option<i32> {
        let next = from + movement.delta().1;
        self.in_bounds(next).then_some(next)
    }
}

impl GameState for TinyPursuit {
    type Action = Move;

    fn legal_actions(&self, agent: usize) -> Vec<Move> {
        if self.is_win() || self.is_lose() {
            return Vec::new();
        }
        if agent == 0 {
            [Move::East, Move::West, Move::Stop]
                .into_iter()
                .filter(|movement| self.step(self.player, *movement).is_some())
                .collect()
        } else {
            let (column, _) = self.threats[agent - 1];
            self.threat_moves
                .iter()
                .copied()
                .filter(|movement| self.step(column, *movement).is_some())
                .collect()
        }
    }

    fn successor(&self, agent: usize, action: &Move) -> Self {
        let mut next = self.clone();
        if agent == 0 {
            next.player = next.step(next.player, *action).expect("illegal player move");
            if let Some(index) = next.food.iter().position(|food| *food == next.player) {
                next.food.swap_remove(index);
                next.score += FOOD_SCORE;
                if next.food.is_empty() {
                    next.score += WIN_SCORE;
                }
            }
            if let Some(index) = next.powerups.iter().position(|cell| *cell == next.player) {
                next.powerups.swap_remove(index);
                for threat in &mut next.threats {
                    threat.1 = CALM_STEPS;
                }
            }
            for threat in &mut next.threats {
                if threat.0 == next.player {
                    if threat.1 > 0 {
                        next.score += CAPTURE_SCORE;
                        *threat = (next.width - 1, 0);
                    } else {
                        next.lost = true;
                        next.score -= LOSS_SCORE;
                    }
                }
            }
        } else {
            let (column, calm) = self.threats[agent - 1];
            let moved = self.step(column, *action).expect("illegal threat move");
            next.threats[agent - 1] = (moved, calm.saturating_sub(1));
            if moved == next.player {
                if calm > 0 {
                    next.score += CAPTURE_SCORE;
                    next.threats[agent - 1] = (next.width - 1, 0);
                } else {
                    next.lost = true;
                    next.score -= LOSS_SCORE;
                }
            }
        }
        next
    }

    fn num_agents(&self) -> usize {
        1 + self.threats.len()
    }

    fn is_win(&self) -> bool {
        self.food.is_empty() && !self.lost
    }

    fn is_lose(&self) -> bool {
        self.lost
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn player_position(&self) -> Position {
        (0, self.player)
    }

    fn threats(&self) -> Vec<Threat> {
        self.threats
            .iter()
            .map(|(column, calm_timer)| Threat {
                position: (0, *column),
                calm_timer: *calm_timer,
            })
            .collect()
    }

    fn food_positions(&self) -> Vec<Position> {
        self.food.iter().map(|column| (0, *column)).collect()
    }

    fn food_count(&self) -> usize {
        self.food.len()
    }

    fn powerups(&self) -> Vec<Position> {
        self.powerups.iter().map(|column| (0, *column)).collect()
    }

    fn is_noop(&self, action: &Move) -> bool {
        *action == Move::Stop
    }
}

/// Wraps a game state and counts successor generations across all clones,
/// for asserting terminal short-circuits and pruning behavior.
#[derive(Clone)]
pub(crate) struct CountingState<G: GameState> {
    inner: G,
    generated: Rc<Cell<usize>>,
}

impl<G: GameState> CountingState<G> {
    pub(crate) fn new(inner: G) -> Self {
        CountingState {
            inner,
            generated: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn generated(&self) -> usize {
        self.generated.get()
    }

    pub(crate) fn take_generated(&self) -> usize {
        self.generated.replace(0)
    }
}

impl<G: GameState> GameState for CountingState<G> {
    type Action = G::Action;

    fn legal_actions(&self, agent: usize) -> Vec<G::Action> {
        self.inner.legal_actions(agent)
    }

    fn successor(&self, agent: usize, action: &G::Action) -> Self {
        self.generated.set(self.generated.get() + 1);
        CountingState {
            inner: self.inner.successor(agent, action),
            generated: Rc::clone(&self.generated),
        }
    }

    fn num_agents(&self) -> usize {
        self.inner.num_agents()
    }

    fn is_win(&self) -> bool {
        self.inner.is_win()
    }

    fn is_lose(&self) -> bool {
        self.inner.is_lose()
    }

    fn score(&self) -> f64 {
        self.inner.score()
    }

    fn player_position(&self) -> Position {
        self.inner.player_position()
    }

    fn threats(&self) -> Vec<Threat> {
        self.inner.threats()
    }

    fn food_positions(&self) -> Vec<Position> {
        self.inner.food_positions()
    }

    fn food_count(&self) -> usize {
        self.inner.food_count()
    }

    fn powerups(&self) -> Vec<Position> {
        self.inner.powerups()
    }

    fn is_noop(&self, action: &G::Action) -> bool {
        self.inner.is_noop(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corridor_rules() {
        let state = TinyPursuit::corridor(5, 2).with_food(&[3, 4]).with_threat(0, 0);
        assert_eq!(state.num_agents(), 2);
        assert!(!state.is_win());
        assert!(!state.is_lose());

        let eaten = state.successor(0, &Move::East);
        assert_eq!(eaten.food_count(), 1);
        assert_eq!(eaten.score(), 10.0);

        let done = eaten.successor(0, &Move::East);
        assert!(done.is_win());
        assert_eq!(done.score(), 120.0);
        assert!(done.legal_actions(0).is_empty());
    }

    #[test]
    fn test_powerup_calms_threats() {
        let state = TinyPursuit::corridor(5, 1)
            .with_food(&[4])
            .with_threat(3, 0)
            .with_powerup(2);
        let charged = state.successor(0, &Move::East);
        assert!(charged.threats()[0].is_calmed());
        assert!(charged.powerups().is_empty());

        // Walking into the calmed threat captures it instead of losing.
        let captured = charged.successor(0, &Move::East);
        assert!(!captured.is_lose());
        assert_eq!(captured.score(), 200.0);
        assert_eq!(captured.threats()[0].position, (0, 4));
    }

    #[test]
    fn test_active_threat_collision_loses() {
        let state = TinyPursuit::corridor(5, 2).with_food(&[4]).with_threat(3, 0);
        let lost = state.successor(0, &Move::East);
        assert!(lost.is_lose());
        assert!(!lost.is_win());
        assert_eq!(lost.score(), -500.0);
    }
}
