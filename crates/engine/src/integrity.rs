//! Structural checks on cube states.

use facet_core::Cube;
use rustc_hash::FxHashSet;

/// True when the state holds all 54 sticker labels exactly once, each with
/// a cell number in 1-9. Turn application preserves this; states built by
/// hand or deserialized from outside may not.
pub fn is_well_formed(cube: &Cube) -> bool {
    let mut seen = FxHashSet::default();
    (0..Cube::CELLS).all(|i| {
        let sticker = cube.get(i);
        (1..=9).contains(&sticker.cell) && seen.insert(sticker)
    })
}
