//! Face-turn application.

use crate::cycles::face_cycles;
use facet_core::{Cube, Direction, Twist};

/// Apply one quarter turn and return the resulting state.
///
/// Pure: the input is untouched and the output is fully independent. Every
/// cycle is a permutation, so the 54-label invariant holds by construction.
pub fn apply(cube: &Cube, twist: Twist) -> Cube {
    let mut next = cube.clone();
    apply_mut(&mut next, twist);
    next
}

/// Apply one quarter turn in place.
#[inline]
pub fn apply_mut(cube: &mut Cube, twist: Twist) {
    for &[a, b, c, d] in face_cycles(twist.face) {
        match twist.direction {
            Direction::Clockwise => {
                let last = cube.get(d);
                cube.set(d, cube.get(c));
                cube.set(c, cube.get(b));
                cube.set(b, cube.get(a));
                cube.set(a, last);
            }
            Direction::CounterClockwise => {
                let first = cube.get(a);
                cube.set(a, cube.get(b));
                cube.set(b, cube.get(c));
                cube.set(c, cube.get(d));
                cube.set(d, first);
            }
        }
    }
}

/// Fold a sequence of turns over a starting state.
pub fn apply_all(cube: &Cube, twists: &[Twist]) -> Cube {
    let mut next = cube.clone();
    for &twist in twists {
        apply_mut(&mut next, twist);
    }
    next
}
