//! Card types and comparisons.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Declaration order is the sort order used by [`compare_suit_rank`] and
/// [`compare_rank_suit`]: Hearts < Spades < Diamonds < Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    /// Hearts.
    Hearts = 0,
    /// Spades.
    Spades = 1,
    /// Diamonds.
    Diamonds = 2,
    /// Clubs.
    Clubs = 3,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    /// Returns the full suit name (e.g. `"Spades"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// Returns the printable glyph for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2664}',
            Self::Clubs => '\u{2667}',
            Self::Diamonds => '\u{2666}',
            Self::Hearts => '\u{2665}',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(CardError::InvalidSuit(value))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, valued from Ace (1) through King (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Deuce = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Deuce,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric value of the rank (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the full rank name (e.g. `"Jack"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Deuce => "Deuce",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the short symbol for the rank.
    ///
    /// Face cards, aces and tens use a letter (`A`, `T`, `J`, `Q`, `K`);
    /// the rest use their numeral.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Deuce => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
            .ok_or(CardError::InvalidRank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A French-suited playing card. Jokers are not represented.
///
/// The default ordering is suit first, then rank (see [`compare_suit_rank`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from raw suit (0..=3) and rank (1..=13) values.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] or [`CardError::InvalidRank`] when a
    /// value is outside its range. The suit is checked first.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::{Card, CardError, Rank, Suit};
    ///
    /// assert_eq!(Card::from_values(1, 11), Ok(Card::new(Suit::Spades, Rank::Jack)));
    /// assert_eq!(Card::from_values(4, 1), Err(CardError::InvalidSuit(4)));
    /// assert_eq!(Card::from_values(3, 14), Err(CardError::InvalidRank(14)));
    /// ```
    pub fn from_values(suit: u8, rank: u8) -> Result<Self, CardError> {
        let suit = Suit::try_from(suit)?;
        let rank = Rank::try_from(rank)?;
        Ok(Self::new(suit, rank))
    }

    /// Returns the card's suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card's rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card name in the form `"{Rank} of {Suit}"`, e.g.
    /// `"Jack of Spades"`.
    #[must_use]
    pub fn long_name(&self) -> String {
        alloc::format!("{} of {}", self.rank, self.suit)
    }

    /// Returns the compact card name: rank symbol, suit glyph and a trailing
    /// space, e.g. `"J♤ "`.
    #[must_use]
    pub fn short_name(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ", self.rank.symbol(), self.suit.symbol())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_suit_rank(self, other)
    }
}

/// Orders cards by suit, then by rank.
#[must_use]
pub fn compare_suit_rank(a: &Card, b: &Card) -> Ordering {
    a.suit.cmp(&b.suit).then(a.rank.cmp(&b.rank))
}

/// Orders cards by rank, then by suit.
#[must_use]
pub fn compare_rank_suit(a: &Card, b: &Card) -> Ordering {
    a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit))
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();
