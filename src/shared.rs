//! A card stack that can be shared between threads.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::Rng;

use crate::card::Card;
use crate::options::ShuffleOptions;
use crate::stack::{CardStack, Orientation};
use crate::sync::Mutex;

/// A [`CardStack`] guarded by a single lock.
///
/// Every operation takes the lock for its whole duration, so draws, adds,
/// sorts and shuffles never interleave. With the `std` feature the lock is a
/// `std::sync::Mutex` (poisoning is ignored); in `no_std` builds it is a
/// spin lock.
///
/// # Example
///
/// ```
/// use cardstack::{CardStack, Orientation, SharedCardStack};
///
/// let deck = SharedCardStack::new(CardStack::sorted_standard_deck(Orientation::FaceDown));
/// let hand = deck.draw(5);
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.len(), 47);
/// ```
pub struct SharedCardStack {
    stack: Mutex<CardStack>,
}

impl SharedCardStack {
    /// Wraps a stack.
    #[must_use]
    pub const fn new(stack: CardStack) -> Self {
        Self {
            stack: Mutex::new(stack),
        }
    }

    /// Returns a clone of the inner stack.
    #[must_use]
    pub fn snapshot(&self) -> CardStack {
        self.stack.lock().clone()
    }

    /// Unwraps the inner stack.
    #[must_use]
    pub fn into_inner(self) -> CardStack {
        self.stack.into_inner()
    }

    /// Returns a snapshot of the cards, top card first.
    #[must_use]
    pub fn contents(&self) -> Vec<Card> {
        self.stack.lock().contents()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.stack.lock().top()
    }

    /// Returns the number of cards in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.lock().len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.lock().is_empty()
    }

    /// Returns the current orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.stack.lock().orientation()
    }

    /// Sets the orientation without moving any cards.
    pub fn set_orientation(&self, orientation: Orientation) {
        self.stack.lock().set_orientation(orientation);
    }

    /// Flips the stack over.
    pub fn flip(&self) {
        self.stack.lock().flip();
    }

    /// Shuffles the stack with the default options.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) {
        self.stack.lock().shuffle(rng);
    }

    /// Shuffles the stack with the given options.
    pub fn shuffle_with<R: Rng + ?Sized>(&self, options: &ShuffleOptions, rng: &mut R) {
        self.stack.lock().shuffle_with(options, rng);
    }

    /// Draws up to `n` cards from the top of the stack.
    pub fn draw(&self, n: usize) -> Vec<Card> {
        self.stack.lock().draw(n)
    }

    /// Adds a card to the top of the stack.
    pub fn add_card(&self, card: Card) {
        self.stack.lock().add_card(card);
    }

    /// Sorts the stack by suit, then rank, lowest card on top.
    pub fn sort(&self) {
        self.stack.lock().sort();
    }

    /// Sorts the stack with the given comparison, lowest card on top.
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        self.stack.lock().sort_by(compare);
    }
}

impl From<CardStack> for SharedCardStack {
    fn from(stack: CardStack) -> Self {
        Self::new(stack)
    }
}

impl Default for SharedCardStack {
    fn default() -> Self {
        Self::new(CardStack::default())
    }
}

impl fmt::Debug for SharedCardStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedCardStack")
            .field(&*self.stack.lock())
            .finish()
    }
}
