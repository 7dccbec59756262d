//! Card value types.
//!
//! A card is a plain value: a pairing identifier plus two facing flags.
//! Two cards match when their [`PairId`]s are equal; table position and
//! flag state never enter into it.

use serde::{Deserialize, Serialize};

/// Pairing identifier shared by exactly two cards in a deck.
///
/// Identifiers are deck-local: a fresh deck mints them sequentially, so
/// no process-wide counter is involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// A single card on the table.
///
/// Starts face down and unmatched. `Copy`, so the two cards of a pair
/// are fully independent values even though they share a [`PairId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Which pair this card belongs to.
    pub pair: PairId,

    /// Is this card currently showing?
    pub face_up: bool,

    /// Has this card been matched with its partner?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card for a pair.
    #[must_use]
    pub const fn new(pair: PairId) -> Self {
        Self {
            pair,
            face_up: false,
            matched: false,
        }
    }

    /// Check whether this card pairs with another.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.pair == other.pair
    }
}
