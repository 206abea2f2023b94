//! Positions on the plateau and the grid that bounds them.

use serde::{Deserialize, Serialize};

/// A grid cell, addressed from the plateau's lower-left corner at (0, 0).
///
/// Carries no bounds of its own: proposed positions may be negative or past
/// the grid edge, and the mission controller judges them against [`GridSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The plateau bounds, extracted once from the head of the command data.
///
/// A header of `55` names the upper-right corner coordinate (5, 5): `width`
/// and `height` are the largest addressable coordinates, so the valid range
/// is `0..=width` by `0..=height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether a position lies on the plateau.
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x <= self.width
            && position.y <= self.height
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_on_the_plateau() {
        let grid = GridSize::new(5, 5);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(5, 5)));
        assert!(grid.contains(Position::new(0, 5)));
        assert!(grid.contains(Position::new(5, 0)));
    }

    #[test]
    fn beyond_the_edges_is_off_the_plateau() {
        let grid = GridSize::new(5, 5);
        assert!(!grid.contains(Position::new(6, 0)));
        assert!(!grid.contains(Position::new(0, 6)));
        assert!(!grid.contains(Position::new(-1, 2)));
        assert!(!grid.contains(Position::new(2, -1)));
    }
}
