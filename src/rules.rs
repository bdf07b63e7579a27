//! Movement rules: the pure displacement table. Knows nothing about board
//! contents.

use crate::board::CharacterClass;
use serde::{Deserialize, Serialize};

/// Requested movement direction.
///
/// Forward (`F`) is a fixed grid direction, decreasing the row for both
/// sides; the board is never flipped per side. The diagonals are only
/// meaningful for H2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    L,
    R,
    F,
    B,
    FL,
    FR,
    BL,
    BR,
}

/// Row/column displacement for `class` moving in `direction`.
///
/// P1-P3 step one cell along the axes, H1 two cells along the axes, H2 two
/// cells along both axes of a diagonal. `None` means the pair is
/// unsupported; callers must reject such a request rather than treat it as
/// a no-op.
pub fn displacement(class: CharacterClass, direction: Direction) -> Option<(i32, i32)> {
    use CharacterClass::*;
    use Direction::*;

    match (class, direction) {
        (P1 | P2 | P3, L) => Some((0, -1)),
        (P1 | P2 | P3, R) => Some((0, 1)),
        (P1 | P2 | P3, F) => Some((-1, 0)),
        (P1 | P2 | P3, B) => Some((1, 0)),
        (H1, L) => Some((0, -2)),
        (H1, R) => Some((0, 2)),
        (H1, F) => Some((-2, 0)),
        (H1, B) => Some((2, 0)),
        (H2, FL) => Some((-2, -2)),
        (H2, FR) => Some((-2, 2)),
        (H2, BL) => Some((2, -2)),
        (H2, BR) => Some((2, 2)),
        _ => None,
    }
}
