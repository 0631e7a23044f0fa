//! Domain layer with the session state machine, entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Swipe-and-match state machine.
pub mod session;

pub use entities::{HandlePair, Movie, Poster};
pub use errors::RecommendationError;
pub use ports::RecommendationPort;
pub use session::{Deck, Effect, HandleField, HandleForm, Screen, Session, SessionEvent};
