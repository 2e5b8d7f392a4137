//! Playing cards and card stacks with optional `no_std` support.
//!
//! The crate provides a [`Card`] value type and a [`CardStack`] that models
//! a deck, hand, or discard pile. A stack has an [`Orientation`] that decides
//! which end is the top for drawing and adding cards.
//!
//! # Example
//!
//! ```
//! use cardstack::{CardStack, Orientation, compare_rank_suit};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = CardStack::shuffled_standard_deck(Orientation::FaceDown, &mut rng);
//!
//! let mut hand = CardStack::from_cards(deck.draw(10), Orientation::FaceUp);
//! hand.sort_by(compare_rank_suit);
//! assert_eq!(hand.len(), 10);
//! assert_eq!(deck.len(), 42);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod options;
pub mod shared;
pub mod stack;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, compare_rank_suit, compare_suit_rank};
pub use error::CardError;
pub use options::ShuffleOptions;
pub use shared::SharedCardStack;
pub use stack::{CardStack, Orientation};
