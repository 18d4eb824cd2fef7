use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{anyhow, Result};

use crate::common::{Move, Position};

/// Static grid layout parsed from an ASCII file.
///
/// Layout characters: `%` wall, `.` food, `o` powerup, `P` player spawn,
/// `T` threat spawn, space open floor.
#[derive(Debug, Clone)]
pub struct Maze {
    height: usize,
    width: usize,
    walls: Vec<Vec<bool>>,
    food: Vec<Position>,
    powerups: Vec<Position>,
    player_spawn: Option<Position>,
    threat_spawns: Vec<Position>,
}

impl Maze {
    pub fn from_file(path: &str) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut text = String::new();
        for line in reader.lines() {
            text.push_str(&line?);
            text.push('\n');
        }
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        if rows.is_empty() {
            return Err(anyhow!("layout is empty"));
        }
        let height = rows.len();
        let width = rows[0].chars().count();

        let mut walls = vec![vec![false; width]; height];
        let mut food = Vec::new();
        let mut powerups = Vec::new();
        let mut player_spawn = None;
        let mut threat_spawns = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(anyhow!("layout row {row} is not {width} characters wide"));
            }
            for (col, ch) in line.chars().enumerate() {
                let position = (row as i32, col as i32);
                match ch {
                    '%' => walls[row][col] = true,
                    '.' => food.push(position),
                    'o' => powerups.push(position),
                    'P' => {
                        if player_spawn.replace(position).is_some() {
                            return Err(anyhow!("layout has more than one player spawn"));
                        }
                    }
                    'T' => threat_spawns.push(position),
                    ' ' => {}
                    other => return Err(anyhow!("unknown layout character {other:?} at {position:?}")),
                }
            }
        }

        Ok(Maze {
            height,
            width,
            walls,
            food,
            powerups,
            player_spawn,
            threat_spawns,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Out-of-bounds positions count as walls.
    pub fn is_wall(&self, position: Position) -> bool {
        let (row, col) = position;
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return true;
        }
        self.walls[row as usize][col as usize]
    }

    /// Reachable neighbor positions with the move leading into each.
    pub fn neighbors(&self, position: Position) -> Vec<(Position, Move)> {
        Move::COMPASS
            .iter()
            .filter_map(|movement| {
                let next = movement.apply(position);
                if self.is_wall(next) {
                    None
                } else {
                    Some((next, *movement))
                }
            })
            .collect()
    }

    pub fn food(&self) -> &[Position] {
        &self.food
    }

    pub fn powerups(&self) -> &[Position] {
        &self.powerups
    }

    pub fn player_spawn(&self) -> Option<Position> {
        self.player_spawn
    }

    pub fn threat_spawns(&self) -> &[Position] {
        &self.threat_spawns
    }
}
