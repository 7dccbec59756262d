//! Deck construction.

use crate::core::{Card, PairId};

/// Generate an ordered, unshuffled deck of `number_of_pairs` pairs.
///
/// Each pair mints a fresh deck-local identifier and contributes two
/// independent [`Card`] values, so the result is always exactly
/// `2 * number_of_pairs` long. Zero pairs yields an empty deck, not an
/// error.
#[must_use]
pub fn generate_cards(number_of_pairs: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(number_of_pairs * 2);

    for id in 0..number_of_pairs {
        let pair = PairId::new(id as u32);
        cards.push(Card::new(pair));
        cards.push(Card::new(pair));
    }

    cards
}
