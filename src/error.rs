//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when building a card from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit value is not one of the four defined suits.
    #[error("invalid card suit: {0}")]
    InvalidSuit(u8),
    /// Rank value is not one of the thirteen defined ranks.
    #[error("invalid card rank: {0}")]
    InvalidRank(u8),
}
