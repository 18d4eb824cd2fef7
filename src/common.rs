/// Grid coordinate as (row, column). Rows grow downward, columns rightward.
pub type Position = (i32, i32);

/// The five moves available on a grid. `Stop` is the no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    North,
    South,
    East,
    West,
    Stop,
}

impl Move {
    /// The four movement directions, in the order successors are generated.
    pub const COMPASS: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Move::North => (-1, 0),
            Move::South => (1, 0),
            Move::East => (0, 1),
            Move::West => (0, -1),
            Move::Stop => (0, 0),
        }
    }

    pub fn apply(&self, position: Position) -> Position {
        let (d_row, d_col) = self.delta();
        (position.0 + d_row, position.1 + d_col)
    }
}

/// L1 distance, the metric used by every heuristic and evaluation term.
pub fn manhattan_distance(a: Position, b: Position) -> f64 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
}
