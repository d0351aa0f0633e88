//! Validation of untyped face and direction labels.
//!
//! The typed API cannot be called with an invalid face or direction; labels
//! arriving from a presentation layer are checked here, before any
//! transformation, so an error never leaves a partial state behind.

use crate::apply::apply;
use facet_core::{Cube, Direction, Face, Twist};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TwistError {
    #[error("invalid face: {0}")]
    InvalidFace(String),
    #[error("invalid direction: {0}")]
    InvalidDirection(String),
}

/// Apply a turn described by string labels.
///
/// Faces are `"U" "F" "R" "B" "L" "D"`; directions are `"clockwise"` and
/// `"counter-clockwise"`.
pub fn apply_labeled(cube: &Cube, face: &str, direction: &str) -> Result<Cube, TwistError> {
    let face = Face::from_label(face).ok_or_else(|| TwistError::InvalidFace(face.to_owned()))?;
    let direction = Direction::from_label(direction)
        .ok_or_else(|| TwistError::InvalidDirection(direction.to_owned()))?;
    Ok(apply(cube, Twist::new(face, direction)))
}
