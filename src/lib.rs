mod board;
mod config;
mod game;
pub mod gateway;
mod logging;
pub mod protocol;
mod registry;
mod rules;
pub mod session;

pub use board::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use protocol::*;
pub use registry::*;
pub use rules::*;
pub use session::*;
