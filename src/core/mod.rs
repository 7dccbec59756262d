//! Core building blocks: card value types and deterministic randomness.
//!
//! Nothing in this module knows the rules of the game; the `game` module
//! builds the Concentration engine out of these parts.

pub mod card;
pub mod rng;

pub use card::{Card, PairId};
pub use rng::{shuffle, GameRng, RandomSource};
