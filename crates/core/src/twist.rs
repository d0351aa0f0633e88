//! Quarter-turn request types.

use crate::Face;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Parse a direction label as the presentation layer sends it.
    pub fn from_label(label: &str) -> Option<Direction> {
        match label {
            "clockwise" => Some(Direction::Clockwise),
            "counter-clockwise" | "counterclockwise" => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::Clockwise => "clockwise",
            Direction::CounterClockwise => "counter-clockwise",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single quarter turn of one face.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Twist {
    pub face: Face,
    pub direction: Direction,
}

impl Twist {
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }
}

impl std::fmt::Display for Twist {
    /// Singmaster notation: `U` for clockwise, `U'` for counter-clockwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}
