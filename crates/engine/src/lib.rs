//! facet-engine - quarter-turn rotation engine for the 3x3x3 cube.
//!
//! Applies single-face turns, permuting the turned face's own nine cells and
//! the ring of twelve bordering cells on its four neighbours. Each turn is a
//! fixed permutation held as cycle tables in [`cycles`].

pub mod apply;
pub mod cycles;
pub mod error;
pub mod integrity;

pub use apply::{apply, apply_all, apply_mut};
pub use cycles::face_cycles;
pub use error::{apply_labeled, TwistError};
pub use integrity::is_well_formed;
