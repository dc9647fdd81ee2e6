//! The high-card game as a payoff matrix.
//!
//! Each player antes and is dealt one of `n` distinct cards, the higher card
//! wins at showdown. Player 1 checks or bets, player 2 folds or calls a bet.
//! A pure strategy picks one of the two actions for every card a player could
//! hold, so each player has `2^n` of them.

use crate::error::{Result, invalid};
use log::{debug, info};
use serde::Serialize;
use std::{fmt::Display, ops::RangeInclusive};

pub const NUM_CHOICES_PER_CARD: u32 = 2;

/// Card counts the matrix is built for. The matrix has `4^n` entries.
pub const CARD_RANGE: RangeInclusive<usize> = 2..=10;

/// Bit `c` set means "bet" for player 1, or "call" for player 2, holding card `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Strategy(u32);
impl Strategy {
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
    const fn choice(self, card: usize) -> bool {
        (self.0 >> card) & 1 == 1
    }
    /// Binary label, `num_cards` wide, card 0 is the last character.
    #[must_use]
    pub fn label(self, num_cards: usize) -> String {
        format!("{:0num_cards$b}", self.0)
    }
    /// # Errors
    /// `InvalidArgument` unless `label` is made of `0` and `1` only.
    pub fn parse(label: &str) -> Result<Self> {
        u32::from_str_radix(label, 2)
            .map(Self)
            .map_err(|_| invalid(format!("strategy label {label:?} is not a binary string")))
    }
}

#[must_use]
pub const fn checks(strategy: Strategy, card: usize) -> bool {
    !strategy.choice(card)
}
#[must_use]
pub const fn bets(strategy: Strategy, card: usize) -> bool {
    strategy.choice(card)
}
#[must_use]
pub const fn folds(strategy: Strategy, card: usize) -> bool {
    !strategy.choice(card)
}
#[must_use]
pub const fn calls(strategy: Strategy, card: usize) -> bool {
    strategy.choice(card)
}

/// Payoffs of both players when player 1 holds `i` and player 2 holds `j`.
#[must_use]
pub fn payoffs(s0: Strategy, s1: Strategy, i: usize, j: usize, ante: i64, bet: i64) -> (i64, i64) {
    let mut pot = 2 * ante;
    let mut payoff_rose = -ante;
    let mut payoff_colin = -ante;

    if checks(s0, i) {
        if i > j {
            payoff_rose += pot;
        } else {
            payoff_colin += pot;
        }
    } else {
        payoff_rose -= bet;
        pot += bet;

        if folds(s1, j) {
            payoff_rose += pot;
        } else {
            payoff_colin -= bet;
            pot += bet;
            if i > j {
                payoff_rose += pot;
            } else {
                payoff_colin += pot;
            }
        }
    }
    (payoff_rose, payoff_colin)
}

/// Expected payoffs over every deal, kept as exact sums over `deals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpectedPayoff {
    pub total_rose: i64,
    pub total_colin: i64,
    pub deals: u64,
}
impl ExpectedPayoff {
    #[must_use]
    pub fn rose(&self) -> f64 {
        self.total_rose as f64 / self.deals as f64
    }
    #[must_use]
    pub fn colin(&self) -> f64 {
        self.total_colin as f64 / self.deals as f64
    }
}
impl Display for ExpectedPayoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}/{}, {}/{})",
            self.total_rose, self.deals, self.total_colin, self.deals
        )
    }
}

/// Averages [`payoffs`] over all `num_cards² - num_cards` deals of two distinct cards.
#[must_use]
pub fn expected_payoffs(s0: Strategy, s1: Strategy, ante: i64, bet: i64, num_cards: usize) -> ExpectedPayoff {
    let (total_rose, total_colin) = (0..num_cards)
        .flat_map(|i| (0..num_cards).filter(move |&j| j != i).map(move |j| (i, j)))
        .map(|(i, j)| payoffs(s0, s1, i, j, ante, bet))
        .fold((0, 0), |(rose, colin), (r, c)| (rose + r, colin + c));

    ExpectedPayoff {
        total_rose,
        total_colin,
        deals: (num_cards * num_cards - num_cards) as u64,
    }
}

/// Expected payoffs of every pure strategy pair, player 1's strategies as rows.
#[derive(Debug, Clone, Serialize)]
pub struct PayoffMatrix {
    pub title: String,
    pub players: [String; 2],
    pub num_cards: usize,
    pub ante: i64,
    pub bet: i64,
    pub strategies: Vec<String>,
    pub payoffs: Vec<Vec<ExpectedPayoff>>,
}
impl PayoffMatrix {
    /// # Errors
    /// `InvalidArgument` if `num_cards` is outside of [`CARD_RANGE`].
    pub fn new(num_cards: usize, ante: i64, bet: i64, players: [String; 2]) -> Result<Self> {
        if !CARD_RANGE.contains(&num_cards) {
            return Err(invalid(format!(
                "num_cards={num_cards} must be in {CARD_RANGE:?}"
            )));
        }
        let title = format!("PSP Game with {} players and {num_cards} cards", players.len());
        info!("Beginning to compute payoff matrix for {title}");

        let num_strategies = NUM_CHOICES_PER_CARD.pow(num_cards as u32);
        let strategies: Vec<Strategy> = (0..num_strategies).map(Strategy::new).collect();
        let payoffs = strategies
            .iter()
            .map(|&s0| {
                strategies
                    .iter()
                    .map(|&s1| expected_payoffs(s0, s1, ante, bet, num_cards))
                    .collect()
            })
            .collect();
        debug!("{num_strategies} strategies per player");

        Ok(Self {
            title,
            players,
            num_cards,
            ante,
            bet,
            strategies: strategies.iter().map(|s| s.label(num_cards)).collect(),
            payoffs,
        })
    }
}
