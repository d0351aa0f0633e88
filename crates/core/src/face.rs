//! Face identifiers and their layout in the flat sticker array.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Face {
    U,
    F,
    R,
    B,
    L,
    D,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::F, Face::R, Face::B, Face::L, Face::D];

    /// Position of this face in the flat state, 0-5 in U,F,R,B,L,D order.
    pub const fn index(self) -> usize {
        match self {
            Face::U => 0,
            Face::F => 1,
            Face::R => 2,
            Face::B => 3,
            Face::L => 4,
            Face::D => 5,
        }
    }

    /// Flat index of this face's first sticker.
    pub const fn base(self) -> usize {
        self.index() * 9
    }

    /// The one face sharing no edge with this one.
    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::R => Face::L,
            Face::L => Face::R,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Face::U => "U",
            Face::F => "F",
            Face::R => "R",
            Face::B => "B",
            Face::L => "L",
            Face::D => "D",
        }
    }

    pub fn from_char(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'F' => Some(Face::F),
            'R' => Some(Face::R),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'D' => Some(Face::D),
            _ => None,
        }
    }

    /// Parse a single-character face label. Anything else is rejected.
    pub fn from_label(label: &str) -> Option<Face> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Face::from_char(c),
            _ => None,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
