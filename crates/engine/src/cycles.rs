//! Quarter-turn permutation tables.
//!
//! A face turn is a fixed permutation of the 54 flat sticker indices,
//! written as five 4-cycles in the clockwise sense: corners of the turned
//! face, edges of the turned face, then the three cycles of the ring of
//! bordering strips. A clockwise turn moves the sticker at each listed
//! index to the next index in its cycle; counter-clockwise walks the
//! cycles backward. Strip orientation is baked into the index order, so
//! the per-face reversal conventions live here as data.

use facet_core::Face;

/// One 4-cycle of flat sticker indices, `face.base() + cell`.
pub type Cycle = [usize; 4];

/// The five cycles of a clockwise quarter turn of `face`.
pub fn face_cycles(face: Face) -> &'static [Cycle; 5] {
    match face {
        // ring: top rows, F -> L -> B -> R
        Face::U => &[
            [0, 2, 8, 6],
            [1, 5, 7, 3],
            [9, 36, 27, 18],
            [10, 37, 28, 19],
            [11, 38, 29, 20],
        ],
        // ring: U bottom row -> R left column -> D top row (reversed)
        // -> L right column (reversed)
        Face::F => &[
            [9, 11, 17, 15],
            [10, 14, 16, 12],
            [6, 18, 47, 44],
            [7, 21, 46, 41],
            [8, 24, 45, 38],
        ],
        // ring: F right column -> U right column -> B left column (reversed)
        // -> D right column
        Face::R => &[
            [18, 20, 26, 24],
            [19, 23, 25, 21],
            [11, 2, 33, 47],
            [14, 5, 30, 50],
            [17, 8, 27, 53],
        ],
        // ring: U top row (reversed) -> L left column -> D bottom row
        // -> R right column (reversed)
        Face::B => &[
            [27, 29, 35, 33],
            [28, 32, 34, 30],
            [2, 36, 51, 26],
            [1, 39, 52, 23],
            [0, 42, 53, 20],
        ],
        // ring: U left column -> F left column -> D left column
        // -> B right column (reversed)
        Face::L => &[
            [36, 38, 44, 42],
            [37, 41, 43, 39],
            [0, 9, 45, 35],
            [3, 12, 48, 32],
            [6, 15, 51, 29],
        ],
        // ring: bottom rows, F -> R -> B -> L
        Face::D => &[
            [45, 47, 53, 51],
            [46, 50, 52, 48],
            [15, 24, 33, 42],
            [16, 25, 34, 43],
            [17, 26, 35, 44],
        ],
    }
}
