//! Whole deals: hole cards for both players, then flop, turn and river.
//!
//! A deal is a flat list of card indices in canonical order, two hole cards
//! for player 1, two for player 2, three flop cards, the turn and the river.
//! Every stage gets its own rank relative to the cards dealt before it, and
//! the stage ranks compose into a single index counting every deal.

use crate::{
    combinations::n_choose_k,
    error::{DealError, Result, invalid},
    rank::{rank_combination, rank_group, unrank_combination, unrank_group},
};
use itertools::Itertools;
use log::debug;
use rand::Rng;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Where each dealt group ends in a full deal: player 1, player 2, flop, turn, river.
const GROUP_ENDS: [usize; 5] = [2, 4, 7, 8, 9];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCount, EnumIter)]
pub enum Stage {
    Hole,
    Flop,
    Turn,
    River,
}
impl Stage {
    /// Cards dealt in this stage. Hole cards count both players.
    #[must_use]
    pub const fn cards(self) -> usize {
        match self {
            Self::Hole => 4,
            Self::Flop => 3,
            Self::Turn | Self::River => 1,
        }
    }
    /// Cards dealt once this stage is over.
    #[must_use]
    pub const fn dealt(self) -> usize {
        match self {
            Self::Hole => 4,
            Self::Flop => 7,
            Self::Turn => 8,
            Self::River => 9,
        }
    }
    /// Cards out of the deck before this stage is dealt.
    #[must_use]
    pub const fn removed(self) -> usize {
        self.dealt() - self.cards()
    }
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Hole => None,
            Self::Flop => Some(Self::Hole),
            Self::Turn => Some(Self::Flop),
            Self::River => Some(Self::Turn),
        }
    }
    /// The stage that leaves exactly `dealt` cards on the table.
    #[must_use]
    pub fn from_dealt(dealt: usize) -> Option<Self> {
        Self::iter().find(|stage| stage.dealt() == dealt)
    }
    /// The last stage of a game with `rounds` betting rounds.
    #[must_use]
    pub fn from_rounds(rounds: usize) -> Option<Self> {
        rounds.checked_sub(1).and_then(|index| Self::iter().nth(index))
    }
    /// Stages from the hole cards up to and including `self`.
    pub fn through(self) -> impl Iterator<Item = Self> {
        Self::iter().take_while(move |stage| *stage <= self)
    }
}

/// Splits a deal into its groups: player 1, player 2, flop, turn, river.
#[must_use]
pub fn groups(cards: &[usize]) -> Vec<&[usize]> {
    let mut start = 0;
    GROUP_ENDS
        .iter()
        .take_while(|&&end| end <= cards.len())
        .map(|&end| {
            let group = &cards[start..end];
            start = end;
            group
        })
        .collect()
}

fn stage_for_len(len: usize) -> Result<Stage> {
    Stage::from_dealt(len).ok_or_else(|| {
        invalid(format!(
            "Valid sizes for the list of cards are: 4, 7, 8, 9. Current size is {len}."
        ))
    })
}

fn check_deck(last: Stage, max: usize) -> Result<()> {
    if max < last.dealt() {
        return Err(invalid(format!(
            "a deck of {max} cards can't deal the {} cards of the {last:?}",
            last.dealt()
        )));
    }
    Ok(())
}

/// Per-stage ranks of a deal in canonical order, one rank per stage present.
///
/// Only complete stages are accepted, so `card_ints` holds 4, 7, 8 or 9 cards.
/// Every group is sorted before ranking.
///
/// # Errors
/// `InvalidArgument` for any other card count, or if a group fails
/// [`rank_group`] validation.
pub fn rank_deal(card_ints: &[usize], max: usize) -> Result<Vec<usize>> {
    let last = stage_for_len(card_ints.len())?;
    let sorted: Vec<usize> = groups(card_ints)
        .into_iter()
        .flat_map(|group| group.iter().copied().sorted_unstable())
        .collect();

    let ranks = rank_through(last, &sorted, max)?;
    debug!("deal {card_ints:?} out of {max} ranks {ranks:?}");
    Ok(ranks)
}

fn rank_through(last: Stage, cards: &[usize], max: usize) -> Result<Vec<usize>> {
    match last.previous() {
        None => rank_hole(cards, max),
        Some(previous) => {
            let rank = rank_group(cards, max, last.dealt(), last.removed())?;
            let mut ranks = rank_through(previous, &cards[..previous.dealt()], max)?;
            ranks.push(rank);
            Ok(ranks)
        }
    }
}

/// Rank of both hole pairs. Player 1's pair picks a "digit" scaled by the
/// number of pairs left for player 2.
///
/// # Errors
/// `InvalidArgument` unless `cards` are four distinct cards of the deck.
pub fn rank_hole(cards: &[usize], max: usize) -> Result<Vec<usize>> {
    let second = rank_group(cards, max, Stage::Hole.dealt(), 2)?;
    let first_pair: Vec<usize> = cards[..2].iter().copied().sorted_unstable().collect();
    let first = rank_combination(&first_pair, max)?;

    // Number of combinations given a fixed first pair
    let combos_given_pair = n_choose_k(max - 2, 2) as usize;

    Ok(vec![first * combos_given_pair + second])
}

/// # Errors
/// As [`rank_deal`] for seven cards.
pub fn rank_hole_flop(cards: &[usize], max: usize) -> Result<Vec<usize>> {
    rank_through(Stage::Flop, cards, max)
}

/// # Errors
/// As [`rank_deal`] for eight cards.
pub fn rank_hole_flop_turn(cards: &[usize], max: usize) -> Result<Vec<usize>> {
    rank_through(Stage::Turn, cards, max)
}

/// # Errors
/// As [`rank_deal`] for nine cards.
pub fn rank_hole_flop_turn_river(cards: &[usize], max: usize) -> Result<Vec<usize>> {
    rank_through(Stage::River, cards, max)
}

/// Inverse of [`rank_deal`]: the deal with the given per-stage ranks, every
/// group ascending.
///
/// # Errors
/// `InvalidArgument` if there aren't one to four ranks, the deck is too small
/// for them, or a rank is out of range for its stage.
pub fn unrank_deal(ranks: &[usize], max: usize) -> Result<Vec<usize>> {
    let last = ranks
        .len()
        .checked_sub(1)
        .and_then(|index| Stage::iter().nth(index))
        .ok_or_else(|| {
            invalid(format!(
                "{} ranks given, a deal has one to {} stages",
                ranks.len(),
                Stage::COUNT
            ))
        })?;
    check_deck(last, max)?;

    let mut cards = Vec::with_capacity(last.dealt());
    for (stage, &rank) in last.through().zip(ranks) {
        match stage {
            Stage::Hole => {
                let combos_given_pair = n_choose_k(max - 2, 2) as usize;
                let first = unrank_combination(rank / combos_given_pair, 2, max)?;
                let second = unrank_group(rank % combos_given_pair, &first, 2, max)?;
                cards.extend(first);
                cards.extend(second);
            }
            _ => {
                let group = unrank_group(rank, &cards, stage.cards(), max)?;
                cards.extend(group);
            }
        }
    }
    Ok(cards)
}

/// Number of distinct ways `stage` can be dealt once the earlier stages are.
///
/// # Errors
/// `InvalidArgument` if the deck can't deal through `stage`.
pub fn stage_outcomes(stage: Stage, max: usize) -> Result<u64> {
    check_deck(stage, max)?;
    match stage {
        Stage::Hole => n_choose_k(max, 2)
            .checked_mul(n_choose_k(max - 2, 2))
            .ok_or_else(|| too_many(max)),
        _ => Ok(n_choose_k(max - stage.removed(), stage.cards())),
    }
}

fn too_many(max: usize) -> DealError {
    invalid(format!("deals out of a deck of {max} cards don't fit in a u64 index"))
}

/// Number of distinct deals from the hole cards through `last`.
///
/// # Errors
/// `InvalidArgument` if the deck can't deal through `last`, or has so many
/// deals that they overflow a `u64`.
pub fn total_deals(last: Stage, max: usize) -> Result<u64> {
    last.through().try_fold(1, |total: u64, stage| {
        total
            .checked_mul(stage_outcomes(stage, max)?)
            .ok_or_else(|| too_many(max))
    })
}

/// Folds per-stage ranks into one index, in mixed radix with every stage's
/// outcome count as its base.
///
/// # Errors
/// `InvalidArgument` if a rank is out of range for its stage, or the index
/// overflows a `u64`.
pub fn compose(ranks: &[usize], max: usize) -> Result<u64> {
    if ranks.is_empty() || ranks.len() > Stage::COUNT {
        return Err(invalid(format!(
            "{} ranks given, a deal has one to {} stages",
            ranks.len(),
            Stage::COUNT
        )));
    }
    Stage::iter()
        .zip(ranks)
        .try_fold(0, |index: u64, (stage, &rank)| {
            let base = stage_outcomes(stage, max)?;
            if rank as u64 >= base {
                return Err(invalid(format!(
                    "{stage:?} rank={rank} is out of range for {base} outcomes"
                )));
            }
            index
                .checked_mul(base)
                .and_then(|index| index.checked_add(rank as u64))
                .ok_or_else(|| too_many(max))
        })
}

/// Inverse of [`compose`] for deals through `last`.
///
/// # Errors
/// `InvalidArgument` if `index` is not below [`total_deals`].
pub fn decompose(index: u64, last: Stage, max: usize) -> Result<Vec<usize>> {
    let total = total_deals(last, max)?;
    if index >= total {
        return Err(invalid(format!(
            "deal index={index} is out of range for {total} deals"
        )));
    }
    let mut rest = index;
    let mut ranks = Vec::with_capacity(Stage::COUNT);
    for stage in last.through().collect::<Vec<_>>().into_iter().rev() {
        let base = stage_outcomes(stage, max)?;
        ranks.push((rest % base) as usize);
        rest /= base;
    }
    ranks.reverse();
    Ok(ranks)
}

/// Every deal through a stage, in deal index order.
///
/// Every index below the total decomposes into valid ranks, so items are only
/// `Err` if that stops holding.
pub struct Deals {
    last: Stage,
    max: usize,
    next: u64,
    total: u64,
}
impl Deals {
    /// # Errors
    /// `InvalidArgument` if the deck can't deal through `last`.
    pub fn new(last: Stage, max: usize) -> Result<Self> {
        Ok(Self {
            last,
            max,
            next: 0,
            total: total_deals(last, max)?,
        })
    }
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }
}
impl Iterator for Deals {
    type Item = Result<Vec<usize>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let deal = decompose(self.next, self.last, self.max)
            .and_then(|ranks| unrank_deal(&ranks, self.max));
        self.next += 1;
        Some(deal)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for Deals {}

/// A uniformly random deal through `last`.
///
/// # Errors
/// `InvalidArgument` if the deck can't deal through `last`.
pub fn random_deal<R: Rng + ?Sized>(last: Stage, max: usize, rng: &mut R) -> Result<Vec<usize>> {
    let index = rng.gen_range(0..total_deals(last, max)?);
    let ranks = decompose(index, last, max)?;
    debug!("sampled deal index {index}, ranks {ranks:?}");
    unrank_deal(&ranks, max)
}
