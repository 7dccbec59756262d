//! # concentration
//!
//! The core state machine of a memory-matching (pairs) card game: a deck
//! of paired cards, one transition for flipping and matching, and
//! score/flip bookkeeping.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, input handling, or storage. A
//!    presentation layer calls [`Game::choose_card`] on user input and
//!    re-reads the table afterwards.
//!
//! 2. **Deterministic by construction**: all randomness flows through the
//!    [`RandomSource`] seam, so one seed reproduces a whole game.
//!
//! 3. **Synchronous and total**: every transition completes immediately;
//!    the only failure mode is an out-of-bounds index, which is a caller
//!    bug and fails fast.
//!
//! ## Modules
//!
//! - `core`: card value types and deterministic RNG
//! - `game`: deck construction and the Concentration engine
//!
//! ## Example
//!
//! ```
//! use concentration::Game;
//!
//! let mut game = Game::new(2, 42);
//! assert_eq!(game.cards().len(), 4);
//! assert!(!game.is_game_over());
//!
//! game.choose_card(0);
//! assert_eq!(game.sole_face_up_index(), Some(0));
//! assert_eq!(game.flip_count(), 1);
//! ```

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{shuffle, Card, GameRng, PairId, RandomSource};

pub use crate::game::{
    generate_cards, FaceUpState, Game, MoveOutcome, MoveRecord, MATCH_BONUS, SEEN_MISS_PENALTY,
};
