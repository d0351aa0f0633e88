//! Sticker labels - the immutable identity a rotation moves but never rewrites.

use crate::Face;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One cell label: the face it originally belonged to plus its home cell
/// number, 1-9 in row-major order. Displays as `U1` .. `D9`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Sticker {
    pub face: Face,
    pub cell: u8,
}

impl Sticker {
    pub const fn new(face: Face, cell: u8) -> Self {
        Self { face, cell }
    }

    /// Parse a two-character label such as `"F5"`. Cell numbers outside 1-9
    /// are rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let face = Face::from_char(chars.next()?)?;
        let cell = chars.next()?.to_digit(10)? as u8;
        if chars.next().is_some() || !(1..=9).contains(&cell) {
            return None;
        }
        Some(Self { face, cell })
    }
}

impl std::fmt::Display for Sticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.cell)
    }
}

impl Serialize for Sticker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Sticker::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid sticker label: {label}")))
    }
}
