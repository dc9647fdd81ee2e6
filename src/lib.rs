use std::{fmt::Display, mem::transmute};
use strum::{EnumCount, EnumIter};

pub mod combinations;
pub mod config;
pub mod deal;
pub mod deck;
pub mod error;
pub mod high_card;
pub mod rank;

pub use deal::{Stage, rank_deal, unrank_deal};
pub use deck::DeckSpec;
pub use error::DealError;
pub use rank::{rank_combination, rank_group, unrank_combination, unrank_group};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Card {
    // First 4 bits = Value
    // Jack - Ace = 11 - 14
    //
    // Next two bits = Suit
    // 00 = Spades
    // 01 = Clubs
    // 10 = Diamonds
    // 11 = Hearts
    inner: u8,
}
impl Card {
    #[must_use]
    pub const fn new(value: CardValue, suit: Suit) -> Self {
        // Safe because of conversion to u8 from valid values
        unsafe { Self::from_num_unchecked(value as u8, suit as u8) }
    }
    /// # Panics
    /// - If value isnt inside of 2..=14
    /// - If suit isnt inside of 0..=3
    #[must_use]
    pub fn from_num(value: u8, suit: u8) -> Self {
        assert!((2..=14).contains(&value));
        assert!((0..=3).contains(&suit));

        unsafe { Self::from_num_unchecked(value, suit) }
    }
    const unsafe fn from_num_unchecked(value: u8, suit: u8) -> Self {
        Self {
            inner: value + (suit << 4),
        }
    }
    #[must_use]
    pub const fn value(self) -> CardValue {
        // Safe because of the manually set discriminants
        unsafe { transmute(self.inner & 0b0000_1111) }
    }
    #[must_use]
    pub const fn suit(self) -> Suit {
        // Safe because of the manually set discriminants
        unsafe { transmute(self.inner >> 4) }
    }
}
impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value().symbol(), self.suit().symbol())
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, EnumIter)]
#[repr(u8)]
pub enum CardValue {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}
impl CardValue {
    /// `None` outside of 2..=14
    #[must_use]
    pub const fn from_num(value: u8) -> Option<Self> {
        if value >= 2 && value <= 14 {
            // Safe because of the bounds check above
            Some(unsafe { transmute::<u8, Self>(value) })
        } else {
            None
        }
    }
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

/// Suits in deck order. Short decks drop suits from the front of this list.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, EnumCount, EnumIter)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Clubs = 1,
    Diamonds = 2,
    Hearts = 3,
}
impl Suit {
    #[must_use]
    pub const fn from_num(suit: u8) -> Option<Self> {
        match suit {
            0 => Some(Self::Spades),
            1 => Some(Self::Clubs),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Hearts),
            _ => None,
        }
    }
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => 's',
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
        }
    }
}
