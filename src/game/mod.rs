//! Deck construction and the Concentration engine.

pub mod deck;
pub mod engine;

pub use deck::generate_cards;
pub use engine::{FaceUpState, Game, MoveOutcome, MoveRecord, MATCH_BONUS, SEEN_MISS_PENALTY};
