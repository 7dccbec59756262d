//! The Concentration engine: flip/match rules, scoring, and bookkeeping.
//!
//! ## Table state machine
//!
//! The table is always in one of two states:
//!
//! - [`FaceUpState::NoneOrSeveral`]: nothing is showing, or both cards of
//!   the previous comparison still are. The next choice faces everything
//!   down and becomes the sole face-up card.
//! - [`FaceUpState::One`]: exactly one unmatched card is showing. The
//!   next choice of a *different* card resolves a comparison against it:
//!   match or miss.
//!
//! Re-choosing the sole face-up card takes the reset branch again: the
//! table faces down and the same card flips back up. The flip counter is
//! untouched in that case, because it is charged against the facing the
//! card had at the moment of the choice.
//!
//! ## Scoring
//!
//! A completed pair is worth [`MATCH_BONUS`]. A miss costs
//! [`SEEN_MISS_PENALTY`] for each of the two compared cards that had
//! already been through a comparison before this move. The score is
//! signed and unbounded in both directions.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{shuffle, Card, GameRng, PairId, RandomSource};
use crate::game::deck::generate_cards;

/// Points awarded for completing a pair.
pub const MATCH_BONUS: i64 = 2;

/// Points lost per already-seen card in a missed comparison.
pub const SEEN_MISS_PENALTY: i64 = 1;

/// Which card, if any, is the sole unmatched card currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceUpState {
    /// Zero cards showing, or both cards of an unresolved comparison.
    NoneOrSeveral,
    /// Exactly one unmatched card is showing, at this position.
    One(usize),
}

/// What a single effective move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The chosen card became the sole face-up card.
    Revealed,
    /// The chosen card completed a pair with the card at `with`.
    Matched { with: usize },
    /// The chosen card failed to pair with the card at `with`.
    Missed { with: usize },
}

/// History entry for one effective move.
///
/// Choosing an already-matched card is inert and records nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Move number, starting at 0.
    pub sequence: u32,
    /// The position the player chose.
    pub index: usize,
    /// What the move did.
    pub outcome: MoveOutcome,
}

/// A game of Concentration.
///
/// Owns the card vector and all bookkeeping. The only transition is
/// [`choose_card`](Self::choose_card); everything else is a read.
///
/// ## Example
///
/// ```
/// use concentration::Game;
///
/// let mut game = Game::new(2, 42);
/// assert_eq!(game.cards().len(), 4);
///
/// game.choose_card(0);
/// assert_eq!(game.sole_face_up_index(), Some(0));
/// assert_eq!(game.flip_count(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    /// Fixed-length table; contents mutate, length never changes.
    cards: Vec<Card>,
    face_up: FaceUpState,
    flip_count: u32,
    score: i64,
    /// Positions that have been through at least one comparison.
    seen: FxHashSet<usize>,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Create a shuffled game from a seed.
    ///
    /// The same seed always produces the same table order.
    #[must_use]
    pub fn new(number_of_pairs: usize, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        Self::with_source(number_of_pairs, &mut rng)
    }

    /// Create a shuffled game drawing from the given randomness source.
    #[must_use]
    pub fn with_source(number_of_pairs: usize, rng: &mut dyn RandomSource) -> Self {
        let mut cards = generate_cards(number_of_pairs);
        shuffle(&mut cards, rng);
        Self::from_cards(cards)
    }

    /// Create a game over an explicit card order.
    ///
    /// For tests and replays that need a known layout.
    ///
    /// # Panics
    ///
    /// Panics unless every pairing identifier occurs on exactly two
    /// cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut occurrences: FxHashMap<PairId, u32> = FxHashMap::default();
        for card in &cards {
            *occurrences.entry(card.pair).or_default() += 1;
        }
        assert!(
            occurrences.values().all(|&count| count == 2),
            "Every pairing identifier must occur on exactly two cards"
        );

        Self {
            cards,
            face_up: FaceUpState::NoneOrSeveral,
            flip_count: 0,
            score: 0,
            seen: FxHashSet::default(),
            history: Vec::new(),
        }
    }

    // === Transition ===

    /// Apply one choice to the table.
    ///
    /// The flip counter is charged first, against the facing the card had
    /// when it was chosen; the table reset in the reveal branch never
    /// re-charges a card that was already showing. Matched cards are
    /// inert: choosing one changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position on the table.
    pub fn choose_card(&mut self, index: usize) {
        assert!(index < self.cards.len(), "Card index out of bounds");

        if !self.cards[index].matched && !self.cards[index].face_up {
            self.flip_count += 1;
        }

        if self.cards[index].matched {
            return;
        }

        let outcome = match self.face_up {
            FaceUpState::One(match_index) if match_index != index => {
                self.resolve_comparison(index, match_index)
            }
            _ => self.reveal_alone(index),
        };

        let sequence = self.history.len() as u32;
        self.history.push(MoveRecord {
            sequence,
            index,
            outcome,
        });
    }

    /// Compare the chosen card against the sole face-up card.
    fn resolve_comparison(&mut self, index: usize, match_index: usize) -> MoveOutcome {
        self.cards[index].face_up = true;

        let outcome = if self.cards[index].matches(&self.cards[match_index]) {
            self.cards[match_index].matched = true;
            self.cards[index].matched = true;
            self.score += MATCH_BONUS;
            MoveOutcome::Matched { with: match_index }
        } else {
            // Penalties consult the seen set as it stood before this move;
            // both positions are inserted only afterwards.
            if self.seen.contains(&index) {
                self.score -= SEEN_MISS_PENALTY;
            }
            if self.seen.contains(&match_index) {
                self.score -= SEEN_MISS_PENALTY;
            }
            MoveOutcome::Missed { with: match_index }
        };

        self.seen.insert(index);
        self.seen.insert(match_index);
        self.face_up = FaceUpState::NoneOrSeveral;

        outcome
    }

    /// Face everything down and show only the chosen card.
    fn reveal_alone(&mut self, index: usize) -> MoveOutcome {
        for card in &mut self.cards {
            card.face_up = false;
        }
        self.cards[index].face_up = true;
        self.face_up = FaceUpState::One(index);

        MoveOutcome::Revealed
    }

    // === Queries ===

    /// All cards in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// A single card, if the index is on the table.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of pairs this game was built with.
    #[must_use]
    pub fn number_of_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Pairs completed so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / 2
    }

    /// Net score: positive for matches, negative for repeated misses.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Flips charged so far.
    ///
    /// A flip is a choice that turned a previously face-down, unmatched
    /// card up. The counter never decreases.
    #[must_use]
    pub fn flip_count(&self) -> u32 {
        self.flip_count
    }

    /// The raw table state.
    #[must_use]
    pub fn face_up_state(&self) -> FaceUpState {
        self.face_up
    }

    /// The sole unmatched face-up card, if the table is in that state.
    #[must_use]
    pub fn sole_face_up_index(&self) -> Option<usize> {
        match self.face_up {
            FaceUpState::One(index) => Some(index),
            FaceUpState::NoneOrSeveral => None,
        }
    }

    /// Whether a position has been through at least one comparison.
    #[must_use]
    pub fn has_been_seen(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    /// Every effective move so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// True once every card is matched.
    ///
    /// An empty table is trivially over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }
}
