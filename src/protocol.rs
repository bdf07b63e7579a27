//! Messages exchanged between the server and a connected participant.
//!
//! Envelopes are JSON objects discriminated by a `type` field. Field names
//! match what the board renderer sends and consumes.

use crate::board::{CharacterClass, Side};
use crate::game::GameState;
use crate::rules::Direction;
use serde::{Deserialize, Serialize};

/// Messages a participant may send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Move intent for one character of the declared side.
    #[serde(rename = "MOVE")]
    Move {
        player: Side,
        #[serde(rename = "characterName")]
        character_name: CharacterClass,
        #[serde(rename = "move")]
        direction: Direction,
    },
}

/// Messages the server sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Full-state snapshot: sent to a newly joined connection immediately,
    /// broadcast to all participants after every accepted move, and after
    /// a reset. Clients need no memory beyond the latest snapshot.
    #[serde(rename = "STATE")]
    State {
        #[serde(rename = "gameState")]
        game_state: GameState,
    },
    /// Non-fatal error reply, sent only to the offending connection.
    #[serde(rename = "ERROR")]
    Error { message: String },
}
