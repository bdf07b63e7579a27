//! Match session: binds up to two connections to one game instance, routes
//! inbound move requests to the resolver, and fans out state broadcasts.

use crate::board::Side;
use crate::game::{resolve, GameState, MoveRequest};
use crate::protocol::{ClientMessage, ServerMessage};
use core::fmt;
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

/// Process-unique handle for one connected socket.
pub type ConnectionId = u64;

/// Admission-time rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinError {
    /// Both seats are taken.
    GameFull,
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::GameFull => write!(f, "Game is full. Only two players allowed."),
        }
    }
}

struct Participant {
    id: ConnectionId,
    side: Side,
    outbound: UnboundedSender<ServerMessage>,
}

struct Inner {
    participants: Vec<Participant>,
    state: GameState,
}

/// One match: at most two participants and the authoritative [`GameState`].
///
/// Every entry point locks the whole validate-mutate-broadcast sequence,
/// so concurrent moves are serialized per match and a broadcast always
/// reflects the state it was computed from.
pub struct MatchSession {
    inner: Mutex<Inner>,
}

impl MatchSession {
    pub fn new() -> Self {
        MatchSession {
            inner: Mutex::new(Inner {
                participants: Vec::new(),
                state: GameState::new(),
            }),
        }
    }

    /// Admit a connection, bind it to the free seat, and send it a state
    /// snapshot. The first joiner takes side A; a later joiner takes
    /// whichever seat is free. The bound seat, not the client-declared
    /// `player` field, is what moves are attributed to.
    pub fn join(
        &self,
        id: ConnectionId,
        outbound: UnboundedSender<ServerMessage>,
    ) -> Result<Side, JoinError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.participants.len() >= 2 {
            return Err(JoinError::GameFull);
        }
        let side = if inner.participants.iter().any(|p| p.side == Side::A) {
            Side::B
        } else {
            Side::A
        };
        let _ = outbound.send(ServerMessage::State {
            game_state: inner.state,
        });
        inner.participants.push(Participant { id, side, outbound });
        log::info!("connection {} joined as side {}", id, side);
        Ok(side)
    }

    /// Handle one raw text payload from `id`.
    ///
    /// A malformed payload, a seat mismatch, or a rejected move earns the
    /// sender an ERROR reply and leaves the state untouched; an accepted
    /// move is broadcast to all participants as a full snapshot.
    pub fn handle_message(&self, id: ConnectionId, raw: &str) {
        let mut inner = self.inner.lock().unwrap();
        let Some(seat) = inner.participants.iter().find(|p| p.id == id).map(|p| p.side) else {
            return;
        };

        let message: ClientMessage = match serde_json::from_str(raw) {
            Ok(message) => message,
            Err(err) => {
                log::debug!("connection {}: malformed payload: {}", id, err);
                send_to(&inner, id, error("Malformed message."));
                return;
            }
        };
        let ClientMessage::Move {
            player,
            character_name,
            direction,
        } = message;
        if player != seat {
            log::debug!(
                "connection {}: declared player {} but is seated as {}",
                id,
                player,
                seat
            );
            send_to(&inner, id, error("Declared player does not match your seat."));
            return;
        }

        let request = MoveRequest {
            side: seat,
            character: character_name,
            direction,
        };
        match resolve(&inner.state, &request) {
            Ok(next) => {
                inner.state = next;
                log::debug!("side {} moved {} {:?}", seat, character_name, direction);
                log::trace!("board now:\n{}", inner.state.board);
                broadcast(&inner);
            }
            Err(reason) => {
                log::debug!("connection {}: move rejected: {}", id, reason);
                send_to(&inner, id, error(reason.to_string()));
            }
        }
    }

    /// Reject a payload the session cannot interpret at all, such as a
    /// binary frame.
    pub fn reject_payload(&self, id: ConnectionId) {
        let inner = self.inner.lock().unwrap();
        send_to(&inner, id, error("Invalid message type."));
    }

    /// Drop a connection. Any disconnect wipes the board back to the
    /// starting layout, even mid-match; whoever remains is sent the fresh
    /// snapshot.
    pub fn disconnect(&self, id: ConnectionId) {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.participants.len();
        inner.participants.retain(|p| p.id != id);
        if inner.participants.len() == before {
            return;
        }
        log::info!("connection {} left; match reset", id);
        inner.state = GameState::new();
        broadcast(&inner);
    }

    /// Number of currently connected participants.
    pub fn participant_count(&self) -> usize {
        self.inner.lock().unwrap().participants.len()
    }

    /// Snapshot of the current state, for inspection.
    pub fn state(&self) -> GameState {
        self.inner.lock().unwrap().state
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        MatchSession::new()
    }
}

fn error(message: impl Into<String>) -> ServerMessage {
    ServerMessage::Error {
        message: message.into(),
    }
}

fn broadcast(inner: &Inner) {
    let snapshot = ServerMessage::State {
        game_state: inner.state,
    };
    for participant in &inner.participants {
        let _ = participant.outbound.send(snapshot.clone());
    }
}

fn send_to(inner: &Inner, id: ConnectionId, message: ServerMessage) {
    if let Some(participant) = inner.participants.iter().find(|p| p.id == id) {
        let _ = participant.outbound.send(message);
    }
}
