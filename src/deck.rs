use crate::{
    Card, CardValue, Suit,
    deal::{Stage, rank_deal},
    error::{DealError, Result, invalid},
};
use itertools::{Either, Itertools};
use log::debug;
use std::{collections::HashMap, fmt::Display, str::FromStr};
use strum::{EnumCount, IntoEnumIterator};

/// A short deck: every value from `lowest` to `highest` in the last `suits`
/// suits. Cards are numbered value-major, `7s 7c 7d 7h 8s ...` for the Manila
/// deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckSpec {
    lowest: CardValue,
    highest: CardValue,
    suits: u8,
}
impl DeckSpec {
    /// # Errors
    /// `InvalidArgument` unless `lowest < highest` and `suits` is 1 to 4.
    pub fn new(lowest: CardValue, highest: CardValue, suits: u8) -> Result<Self> {
        if lowest >= highest {
            return Err(invalid(format!(
                "highest card {highest:?} must be above lowest card {lowest:?}"
            )));
        }
        if suits == 0 || usize::from(suits) > Suit::COUNT {
            return Err(invalid(format!(
                "number of suits ({suits}) must be from 1 to {}",
                Suit::COUNT
            )));
        }
        Ok(Self {
            lowest,
            highest,
            suits,
        })
    }
    /// # Errors
    /// `InvalidArgument` if a value is outside of 2..=14, or as [`Self::new`].
    pub fn from_nums(lowest: u8, highest: u8, suits: u8) -> Result<Self> {
        let value = |num| {
            CardValue::from_num(num)
                .ok_or_else(|| invalid(format!("card value ({num}) must be from 2 to 14")))
        };
        Self::new(value(lowest)?, value(highest)?, suits)
    }
    /// Manila poker: sevens through aces, 32 cards.
    #[must_use]
    pub const fn manila() -> Self {
        Self {
            lowest: CardValue::Seven,
            highest: CardValue::Ace,
            suits: 4,
        }
    }
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            lowest: CardValue::Two,
            highest: CardValue::Ace,
            suits: 4,
        }
    }
    #[must_use]
    pub const fn size(&self) -> usize {
        (self.highest as usize - self.lowest as usize + 1) * self.suits as usize
    }
    /// Fewest cards needed to deal a game with `rounds` betting rounds.
    #[must_use]
    pub fn minimum_size(rounds: usize) -> Option<usize> {
        Stage::from_rounds(rounds).map(Stage::dealt)
    }
    fn first_suit(&self) -> u8 {
        Suit::COUNT as u8 - self.suits
    }
    pub fn suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::iter().skip(usize::from(self.first_suit()))
    }
    pub fn values(&self) -> impl Iterator<Item = CardValue> + '_ {
        CardValue::iter().filter(|value| (self.lowest..=self.highest).contains(value))
    }
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.values()
            .cartesian_product(self.suits().collect::<Vec<_>>())
            .map(|(value, suit)| Card::new(value, suit))
            .collect()
    }
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        if index >= self.size() {
            return None;
        }
        let suits = usize::from(self.suits);
        let value = self.lowest as usize + index / suits;
        let suit = usize::from(self.first_suit()) + index % suits;
        Some(Card::from_num(value as u8, suit as u8))
    }
    #[must_use]
    pub fn index_of(&self, card: Card) -> Option<usize> {
        let suit = (card.suit() as u8).checked_sub(self.first_suit())?;
        if !(self.lowest..=self.highest).contains(&card.value()) {
            return None;
        }
        let value = card.value() as usize - self.lowest as usize;
        Some(value * usize::from(self.suits) + usize::from(suit))
    }
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.cards().iter().map(ToString::to_string).collect()
    }
    #[must_use]
    pub fn label_map(&self) -> HashMap<String, usize> {
        self.labels()
            .into_iter()
            .enumerate()
            .map(|(index, label)| (label, index))
            .collect()
    }
    /// Card indices for `labels`, in order.
    ///
    /// # Errors
    /// `AmbiguousInput` listing every label that doesn't name a card of this deck.
    pub fn indices<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        let (indices, bad_cards): (Vec<usize>, Vec<String>) =
            labels.iter().partition_map(|label| {
                let label: &str = label.as_ref();
                match label.parse::<Card>().ok().and_then(|card| self.index_of(card)) {
                    Some(index) => Either::Left(index),
                    None => Either::Right(label.to_owned()),
                }
            });
        if bad_cards.is_empty() {
            Ok(indices)
        } else {
            Err(DealError::AmbiguousInput(bad_cards))
        }
    }
    /// The cards at `indices`.
    ///
    /// # Errors
    /// `InvalidArgument` if an index is outside of the deck.
    pub fn describe(&self, indices: &[usize]) -> Result<Vec<Card>> {
        indices
            .iter()
            .map(|&index| {
                self.card(index).ok_or_else(|| {
                    invalid(format!("card={index} is outside a deck of {}", self.size()))
                })
            })
            .collect()
    }
    /// Per-stage child indices of the branch that deals exactly these cards.
    /// Empty when no cards are given.
    ///
    /// # Errors
    /// `AmbiguousInput` for labels outside of the deck, otherwise as
    /// [`rank_deal`].
    pub fn locate<S: AsRef<str>>(
        &self,
        hole: &[S],
        flop: &[S],
        turn: &[S],
        river: &[S],
    ) -> Result<Vec<usize>> {
        let labels: Vec<&str> = [hole, flop, turn, river]
            .into_iter()
            .flatten()
            .map(AsRef::as_ref)
            .collect();
        if labels.is_empty() {
            return Ok(Vec::new());
        }
        let card_ints = self.indices(&labels)?;
        debug!("scenario {labels:?} maps to {card_ints:?}");
        rank_deal(&card_ints, self.size())
    }
}
impl Default for DeckSpec {
    fn default() -> Self {
        Self::manila()
    }
}
impl Display for DeckSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} in {} suit(s), {} cards",
            self.lowest.symbol(),
            self.highest.symbol(),
            self.suits,
            self.size()
        )
    }
}

impl FromStr for Card {
    type Err = &'static str;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Split the label into Value and Suit, the suit is the last character
        let (split, _) = s.char_indices().last().ok_or("Empty card label")?;
        let (value, suit) = s.split_at(split);

        let value = value.parse()?;
        let suit = suit.parse()?;

        Ok(Self::new(value, suit))
    }
}

impl FromStr for CardValue {
    type Err = &'static str;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" | "t" | "T" => Ok(Self::Ten),
            "Jack" | "11" | "j" | "J" => Ok(Self::Jack),
            "Queen" | "12" | "q" | "Q" => Ok(Self::Queen),
            "King" | "13" | "k" | "K" => Ok(Self::King),
            "Ace" | "1" | "14" | "a" | "A" => Ok(Self::Ace),
            _otherwise => Err("Failed to parse value"),
        }
    }
}

impl FromStr for Suit {
    type Err = &'static str;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "s" | "S" => Ok(Self::Spades),
            "c" | "C" => Ok(Self::Clubs),
            "d" | "D" => Ok(Self::Diamonds),
            "h" | "H" => Ok(Self::Hearts),
            _otherwise => Err("Failed to parse suit"),
        }
    }
}
