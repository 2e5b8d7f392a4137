//! Card stacks: decks, hands, and discard piles.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cmp::Ordering;

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit, compare_suit_rank};
use crate::options::ShuffleOptions;

/// Orientation of a card stack.
///
/// The orientation decides which end of the stack is the "top" that
/// [`CardStack::draw`] and [`CardStack::add_card`] work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Faces are visible; the top is the back of the underlying storage.
    FaceUp,
    /// Faces are hidden; the top is the front of the underlying storage.
    #[default]
    FaceDown,
}

impl Orientation {
    /// Returns the opposite orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::FaceUp => Self::FaceDown,
            Self::FaceDown => Self::FaceUp,
        }
    }
}

/// An ordered stack of cards.
///
/// A stack may be empty or hold any number of cards, duplicates included, so
/// it can model a standard deck as well as a hand or a discard pile.
///
/// Cards are kept in one fixed storage order. Changing the orientation never
/// moves cards; it only changes which end is treated as the top.
///
/// # Example
///
/// ```
/// use cardstack::{Card, CardStack, Orientation, Rank, Suit};
///
/// let mut deck = CardStack::sorted_standard_deck(Orientation::FaceDown);
/// assert_eq!(deck.draw(1), vec![Card::new(Suit::Hearts, Rank::Ace)]);
///
/// deck.flip();
/// assert_eq!(deck.draw(1), vec![Card::new(Suit::Clubs, Rank::King)]);
/// assert_eq!(deck.len(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardStack {
    /// Cards in storage order.
    cards: VecDeque<Card>,
    /// Current orientation.
    orientation: Orientation,
}

impl CardStack {
    /// Creates an empty stack with the given orientation.
    #[must_use]
    pub const fn empty(orientation: Orientation) -> Self {
        Self {
            cards: VecDeque::new(),
            orientation,
        }
    }

    /// Creates a standard 52-card deck sorted by suit, then by rank.
    ///
    /// The storage order is the same for either orientation: a face down
    /// deck draws the Ace of Hearts first, a face up deck the King of Clubs.
    #[must_use]
    pub fn sorted_standard_deck(orientation: Orientation) -> Self {
        let cards: VecDeque<Card> = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        debug!("Built standard deck of {} cards ({orientation:?})", cards.len());

        Self { cards, orientation }
    }

    /// Creates a standard 52-card deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled_standard_deck<R: Rng + ?Sized>(orientation: Orientation, rng: &mut R) -> Self {
        let mut stack = Self::sorted_standard_deck(orientation);
        stack.shuffle(rng);
        stack
    }

    /// Creates a stack from a list of cards.
    ///
    /// The first card of the list becomes the top card of the new stack, so
    /// [`contents`](Self::contents) returns the cards in input order.
    ///
    /// ```
    /// use cardstack::{Card, CardStack, Orientation, Rank, Suit};
    ///
    /// let cards = [
    ///     Card::new(Suit::Hearts, Rank::Ace),
    ///     Card::new(Suit::Diamonds, Rank::Ten),
    /// ];
    /// let stack = CardStack::from_cards(cards, Orientation::FaceUp);
    /// assert_eq!(stack.contents(), cards);
    /// ```
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I, orientation: Orientation) -> Self {
        let mut cards: VecDeque<Card> = cards.into_iter().collect();
        if orientation == Orientation::FaceUp {
            cards.make_contiguous().reverse();
        }

        Self { cards, orientation }
    }

    /// Returns a snapshot of the cards, top card first.
    #[must_use]
    pub fn contents(&self) -> Vec<Card> {
        match self.orientation {
            Orientation::FaceDown => self.cards.iter().copied().collect(),
            Orientation::FaceUp => self.cards.iter().rev().copied().collect(),
        }
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        match self.orientation {
            Orientation::FaceDown => self.cards.front().copied(),
            Orientation::FaceUp => self.cards.back().copied(),
        }
    }

    /// Returns the number of cards in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Sets the orientation.
    ///
    /// Cards are not moved; only the end treated as the top changes. This has
    /// the same effect as [`flip`](Self::flip) when the orientation differs.
    pub const fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Flips the stack over.
    pub const fn flip(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    /// Shuffles the stack using the default [`ShuffleOptions`] (one to five
    /// passes).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.shuffle_with(&ShuffleOptions::default(), rng);
    }

    /// Shuffles the stack with a number of passes drawn from `options`.
    ///
    /// Every pass is a full Fisher-Yates shuffle, so any permutation can
    /// result.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, options: &ShuffleOptions, rng: &mut R) {
        let passes = rng.random_range(options.passes_range());
        debug!("Shuffling {} cards with {passes} passes", self.cards.len());

        let cards = self.cards.make_contiguous();
        for _ in 0..passes {
            cards.shuffle(&mut *rng);
        }
    }

    /// Draws up to `n` cards from the top of the stack.
    ///
    /// The first card drawn is the first element of the result. If the stack
    /// holds fewer than `n` cards, all remaining cards are returned.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let count = n.min(self.cards.len());
        if count < n {
            trace!("Requested {n} cards, drawing the remaining {count}");
        }

        match self.orientation {
            Orientation::FaceDown => self.draw_from_front(count),
            Orientation::FaceUp => self.draw_from_back(count),
        }
    }

    /// Adds a card to the top of the stack.
    pub fn add_card(&mut self, card: Card) {
        match self.orientation {
            Orientation::FaceDown => self.cards.push_front(card),
            Orientation::FaceUp => self.cards.push_back(card),
        }
    }

    /// Sorts the stack by suit, then rank, lowest card on top.
    pub fn sort(&mut self) {
        self.sort_by(compare_suit_rank);
    }

    /// Sorts the stack with the given comparison, lowest card on top.
    ///
    /// ```
    /// use cardstack::{Card, CardStack, Orientation, Rank, Suit, compare_rank_suit};
    ///
    /// let mut stack = CardStack::from_cards(
    ///     [
    ///         Card::new(Suit::Clubs, Rank::Ace),
    ///         Card::new(Suit::Hearts, Rank::Deuce),
    ///     ],
    ///     Orientation::FaceUp,
    /// );
    /// stack.sort_by(compare_rank_suit);
    /// assert_eq!(stack.top(), Some(Card::new(Suit::Clubs, Rank::Ace)));
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        let cards = self.cards.make_contiguous();
        cards.sort_by(compare);
        if self.orientation == Orientation::FaceUp {
            cards.reverse();
        }
    }

    /// Removes `n` cards from the front of storage, ignoring orientation.
    fn draw_from_front(&mut self, n: usize) -> Vec<Card> {
        self.cards.drain(..n).collect()
    }

    /// Removes `n` cards from the back of storage, ignoring orientation.
    /// The last stored card comes first.
    fn draw_from_back(&mut self, n: usize) -> Vec<Card> {
        let start = self.cards.len() - n;
        self.cards.drain(start..).rev().collect()
    }
}
