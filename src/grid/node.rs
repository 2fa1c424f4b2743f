// Grid cells - a (file, rank) position plus four directed neighbor relations

use crate::grid_errors::GridError;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::fmt;
use std::str::FromStr;

new_key_type! {
    /// Stable handle for a cell in a grid's arena.
    ///
    /// Handles stay valid for the lifetime of the grid, including after the
    /// cell has been renamed or deleted from the position mapping.
    pub struct NodeId;
}

/// Composite cell key: a column letter ("file") and a row number ("rank").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub file: char,
    pub rank: i32,
}

impl Position {
    pub fn new(file: char, rank: i32) -> Self {
        Self { file, rank }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Position {
    type Err = GridError;

    /// Parse a key such as `"B4"`: one file character followed by the rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let file = chars
            .next()
            .ok_or_else(|| GridError::ConfigurationError("empty position".to_string()))?;
        let rank = chars.as_str().parse::<i32>().map_err(|e| {
            GridError::ConfigurationError(format!("invalid rank in position '{}': {}", s, e))
        })?;
        Ok(Self { file, rank })
    }
}

/// The four directed relations a cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// The relation a neighbor would hold pointing back at us.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Top => "Top",
            Direction::Bottom => "Bottom",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single grid cell. Relations are non-owning handles into the grid arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub file: char,
    pub rank: i32,
    pub top: Option<NodeId>,
    pub bottom: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    pub fn new(file: char, rank: i32) -> Self {
        Self {
            file,
            rank,
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }

    /// Current key, always computed from the live file and rank.
    pub fn position(&self) -> Position {
        Position::new(self.file, self.rank)
    }

    pub fn neighbor(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set_neighbor(&mut self, direction: Direction, neighbor: Option<NodeId>) {
        match direction {
            Direction::Top => self.top = neighbor,
            Direction::Bottom => self.bottom = neighbor,
            Direction::Left => self.left = neighbor,
            Direction::Right => self.right = neighbor,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {}", self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_tracks_field_changes() {
        let mut node = Node::new('A', 1);
        assert_eq!(node.position().to_string(), "A1");

        node.file = 'D';
        node.rank = 9;
        assert_eq!(node.position().to_string(), "D9");
        assert_eq!(node.to_string(), "Node D9");
    }

    #[test]
    fn test_position_parse() {
        let pos: Position = "B4".parse().unwrap();
        assert_eq!(pos, Position::new('B', 4));

        let pos: Position = " C12 ".parse().unwrap();
        assert_eq!(pos, Position::new('C', 12));

        assert!("".parse::<Position>().is_err());
        assert!("A".parse::<Position>().is_err());
        assert!("Ax".parse::<Position>().is_err());
    }

    #[test]
    fn test_direction_opposites() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_neighbor_accessors() {
        let mut node = Node::new('A', 1);
        for direction in Direction::ALL {
            assert_eq!(node.neighbor(direction), None);
        }

        let id = NodeId::default();
        node.set_neighbor(Direction::Left, Some(id));
        assert_eq!(node.left, Some(id));
        assert_eq!(node.neighbor(Direction::Left), Some(id));
        assert_eq!(node.right, None);
    }
}
