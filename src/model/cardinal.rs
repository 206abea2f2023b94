//! Compass orientations and the lookup table that drives turns and moves.

use serde::{Deserialize, Serialize};

use crate::model::Position;

/// The four headings a rover can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

/// One row of the compass: where a turn lands and how a move displaces.
struct Cardinal {
    left: Orientation,
    right: Orientation,
    dx: i32,
    dy: i32,
}

/// Indexed by `Orientation as usize`, in declaration order N, E, S, W.
const CARDINALS: [Cardinal; 4] = [
    Cardinal { left: Orientation::West, right: Orientation::East, dx: 0, dy: 1 },
    Cardinal { left: Orientation::North, right: Orientation::South, dx: 1, dy: 0 },
    Cardinal { left: Orientation::East, right: Orientation::West, dx: 0, dy: -1 },
    Cardinal { left: Orientation::South, right: Orientation::North, dx: -1, dy: 0 },
];

impl Orientation {
    /// Parses a single compass letter, tolerating lowercase.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The heading after a 90-degree turn to the left.
    pub fn turned_left(self) -> Self {
        CARDINALS[self as usize].left
    }

    /// The heading after a 90-degree turn to the right.
    pub fn turned_right(self) -> Self {
        CARDINALS[self as usize].right
    }

    /// The cell one step ahead along this heading.
    pub fn advance(self, from: Position) -> Position {
        let cardinal = &CARDINALS[self as usize];
        Position::new(from.x + cardinal.dx, from.y + cardinal.dy)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        };
        write!(f, "{symbol}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_left_turns_come_full_circle() {
        let mut heading = Orientation::North;
        for _ in 0..4 {
            heading = heading.turned_left();
        }
        assert_eq!(heading, Orientation::North);
    }

    #[test]
    fn left_and_right_are_inverses() {
        for heading in [
            Orientation::North,
            Orientation::East,
            Orientation::South,
            Orientation::West,
        ] {
            assert_eq!(heading.turned_left().turned_right(), heading);
        }
    }

    #[test]
    fn advance_follows_the_heading() {
        let origin = Position::new(2, 2);
        assert_eq!(Orientation::North.advance(origin), Position::new(2, 3));
        assert_eq!(Orientation::East.advance(origin), Position::new(3, 2));
        assert_eq!(Orientation::South.advance(origin), Position::new(2, 1));
        assert_eq!(Orientation::West.advance(origin), Position::new(1, 2));
    }

    #[test]
    fn symbols_parse_in_either_case() {
        assert_eq!(Orientation::from_symbol('N'), Some(Orientation::North));
        assert_eq!(Orientation::from_symbol('w'), Some(Orientation::West));
        assert_eq!(Orientation::from_symbol('Q'), None);
    }
}
