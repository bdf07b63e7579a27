//! Move validation and resolution against the authoritative game state.

use crate::board::{Board, CharacterClass, Occupant, Side};
use crate::rules::{displacement, Direction};
use core::fmt;
use serde::{Deserialize, Serialize};

/// The single authoritative state of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    #[serde(rename = "currentSide")]
    pub current_side: Side,
}

impl GameState {
    /// Fresh state: starting layout, side A to move.
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            current_side: Side::A,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Untrusted move intent from a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub side: Side,
    pub character: CharacterClass,
    pub direction: Direction,
}

/// Why a move request was rejected. All kinds are non-fatal and reported
/// to the sender only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The requesting side is not the side to move.
    NotYourTurn,
    /// The side has no live character of the requested class.
    CharacterNotFound,
    /// The character does not support the requested direction.
    InvalidDirection,
    /// The destination falls outside the board.
    OutOfBounds,
    /// The destination holds a character of the requesting side.
    FriendlyFire,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotYourTurn => write!(f, "It is not your turn."),
            RejectReason::CharacterNotFound => write!(f, "Character not found on board."),
            RejectReason::InvalidDirection => {
                write!(f, "Unsupported direction for this character.")
            }
            RejectReason::OutOfBounds => write!(f, "Move out of bounds."),
            RejectReason::FriendlyFire => {
                write!(f, "Cannot move to a position occupied by your own character.")
            }
        }
    }
}

/// Apply one move request to `state`.
///
/// Pure: the input is never mutated. A rejection carries a [`RejectReason`]
/// and implies the caller's state is untouched; an accepted move yields the
/// successor state with the turn flipped. Landing on an opposing occupant
/// captures it (the captured character is removed for the rest of the
/// match). Intermediate cells of magnitude-2 moves are never inspected;
/// only the destination matters. No win condition is evaluated: a side may
/// be reduced to zero occupants and play continues.
pub fn resolve(state: &GameState, request: &MoveRequest) -> Result<GameState, RejectReason> {
    if request.side != state.current_side {
        return Err(RejectReason::NotYourTurn);
    }
    let source = state
        .board
        .find(request.side, request.character)
        .ok_or(RejectReason::CharacterNotFound)?;
    let (drow, dcol) =
        displacement(request.character, request.direction).ok_or(RejectReason::InvalidDirection)?;
    let destination = source.offset(drow, dcol).ok_or(RejectReason::OutOfBounds)?;
    if let Some(target) = state.board.get(destination) {
        if target.side == request.side {
            return Err(RejectReason::FriendlyFire);
        }
    }

    let mut next = *state;
    next.board.set(source, None);
    next.board.set(
        destination,
        Some(Occupant {
            side: request.side,
            class: request.character,
        }),
    );
    next.current_side = state.current_side.opponent();
    Ok(next)
}
