//! facet-core - cube state representation and move vocabulary.

mod cube;
mod face;
mod sticker;
mod twist;

pub use cube::Cube;
pub use face::Face;
pub use sticker::Sticker;
pub use twist::{Direction, Twist};
