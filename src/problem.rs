use std::fmt::Debug;
use std::hash::Hash;

use crate::common::{Move, Position};
use crate::maze::Maze;

/// One legal transition out of a state.
#[derive(Debug, Clone)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    /// Step cost, finite and non-negative.
    pub cost: f64,
}

/// Capability set every search problem must provide.
///
/// There are no default method bodies: a problem type that leaves one out
/// does not compile, so a missing capability can never fall through silently.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of an action sequence replayed from the start state.
    fn cost_of_path(&self, actions: &[Self::Action]) -> f64;
}

/// Reach a single goal position on a maze, unit step cost.
#[derive(Debug, Clone)]
pub struct PositionSearchProblem {
    maze: Maze,
    start: Position,
    goal: Position,
}

impl PositionSearchProblem {
    pub fn new(maze: Maze, start: Position, goal: Position) -> Self {
        PositionSearchProblem { maze, start, goal }
    }

    pub fn goal(&self) -> Position {
        self.goal
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Position;
    type Action = Move;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Move>> {
        self.maze
            .neighbors(*state)
            .into_iter()
            .map(|(position, action)| Successor {
                state: position,
                action,
                cost: 1.0,
            })
            .collect()
    }

    fn cost_of_path(&self, actions: &[Move]) -> f64 {
        let mut position = self.start;
        let mut cost = 0.0;
        for action in actions {
            position = action.apply(position);
            if self.maze.is_wall(position) {
                // An illegal plan costs more than any legal one.
                return f64::INFINITY;
            }
            cost += 1.0;
        }
        cost
    }
}
