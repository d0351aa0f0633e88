//! Cube state - a flat array of 54 stickers, nine per face.
//!
//! Faces are stored in the fixed order U, F, R, B, L, D; within a face the
//! nine cells are row-major (0-2 top row, 3-5 middle, 6-8 bottom) in the
//! orientation the face is normally viewed.

use crate::{Face, Sticker};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Cube {
    stickers: [Sticker; 54],
}

impl Cube {
    pub const FACE_CELLS: usize = 9;
    pub const CELLS: usize = 54;

    /// The canonical initial state: face X holds X1..X9 in order.
    pub fn solved() -> Self {
        let mut stickers = [Sticker::new(Face::U, 1); Self::CELLS];
        for face in Face::ALL {
            for i in 0..Self::FACE_CELLS {
                stickers[face.base() + i] = Sticker::new(face, (i + 1) as u8);
            }
        }
        Self { stickers }
    }

    /// Sticker at a flat index, `face.base() + cell`.
    #[inline(always)]
    pub fn get(&self, i: usize) -> Sticker {
        self.stickers[i]
    }

    /// Raw write. The turn engine maintains the 54-label invariant; callers
    /// writing arbitrary stickers are on their own.
    #[inline(always)]
    pub fn set(&mut self, i: usize, sticker: Sticker) {
        self.stickers[i] = sticker;
    }

    /// The nine cells of one face, row-major.
    pub fn face(&self, face: Face) -> &[Sticker] {
        &self.stickers[face.base()..face.base() + Self::FACE_CELLS]
    }

    pub fn is_solved(&self) -> bool {
        self.stickers
            .iter()
            .enumerate()
            .all(|(i, s)| s.face.base() + s.cell as usize == i + 1)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl Serialize for Cube {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Face::ALL.len()))?;
        for face in Face::ALL {
            let labels: Vec<String> = self.face(face).iter().map(Sticker::to_string).collect();
            map.serialize_entry(face.label(), &labels)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Cube {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut faces: HashMap<String, Vec<Sticker>> = HashMap::deserialize(deserializer)?;
        let mut stickers = [Sticker::new(Face::U, 1); Cube::CELLS];
        for face in Face::ALL {
            let cells = faces
                .remove(face.label())
                .ok_or_else(|| serde::de::Error::custom(format!("missing face: {face}")))?;
            if cells.len() != Cube::FACE_CELLS {
                return Err(serde::de::Error::custom(format!(
                    "expected 9 cells on face {face}, got {}",
                    cells.len()
                )));
            }
            for (i, sticker) in cells.into_iter().enumerate() {
                stickers[face.base() + i] = sticker;
            }
        }
        Ok(Cube { stickers })
    }
}

impl std::fmt::Display for Cube {
    /// Unfolded net: U on top, then the L F R B band, then D.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |face: Face, r: usize| {
            let cells = self.face(face);
            format!("{} {} {}", cells[r * 3], cells[r * 3 + 1], cells[r * 3 + 2])
        };
        for r in 0..3 {
            writeln!(f, "         {}", row(Face::U, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::L, r),
                row(Face::F, r),
                row(Face::R, r),
                row(Face::B, r)
            )?;
        }
        for r in 0..3 {
            writeln!(f, "         {}", row(Face::D, r))?;
        }
        Ok(())
    }
}
