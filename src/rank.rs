//! Ranks of small card combinations within a shrinking deck.
//!
//! A group of `k` cards drawn from a deck of `max` cards is ranked by its
//! position among all ascending `k`-subsets of `0..max`, smallest elements
//! first. Groups dealt later in a hand are ranked after renumbering the deck so
//! that the cards dealt before them leave no gaps.

use crate::{
    combinations::n_choose_k,
    error::{Result, invalid},
};
use itertools::Itertools;
use log::trace;

/// Group sizes the peeling recursion knows how to skip over.
pub const GROUP_SIZES: [usize; 3] = [1, 2, 3];

fn check_group(cards: &[usize], max: usize) -> Result<()> {
    if !GROUP_SIZES.contains(&cards.len()) {
        return Err(invalid(format!(
            "The length of cards is {} and should be one of {GROUP_SIZES:?}.",
            cards.len()
        )));
    }
    check_in_deck(cards, max)?;
    if cards.iter().tuple_windows().any(|(a, b)| a >= b) {
        return Err(invalid(format!(
            "cards={cards:?} must be strictly ascending"
        )));
    }
    Ok(())
}

fn check_in_deck(cards: &[usize], max: usize) -> Result<()> {
    let outside: Vec<usize> = cards.iter().copied().filter(|&card| card >= max).collect();
    if outside.is_empty() {
        Ok(())
    } else {
        Err(invalid(format!(
            "card(s) {outside:?} not smaller than MAX=({max})"
        )))
    }
}

/// Rank of an ascending group of one to three cards taken from `0..max`.
///
/// `[0, 1]` and `[0, 1, 2]` rank 0, `[max - 1]` ranks `max - 1`.
///
/// # Errors
/// `InvalidArgument` if the group has the wrong size, is not strictly ascending
/// or holds a card outside of the deck.
pub fn rank_combination(cards: &[usize], max: usize) -> Result<usize> {
    check_group(cards, max)?;
    Ok(peel(cards, 0, max))
}

// The first card fixes how many combinations come before this one, the rest is
// ranked again in the deck above it.
fn peel(cards: &[usize], offset: usize, max: usize) -> usize {
    match cards {
        [] => 0,
        [last] => last - offset,
        [first, rest @ ..] => {
            let first = first - offset;
            skipped(first, max, cards.len()) + peel(rest, offset + first + 1, max - first - 1)
        }
    }
}

/// Combinations of `length` cards whose first card is smaller than `first`.
fn skipped(first: usize, max: usize, length: usize) -> usize {
    match length {
        3 => (max - 1 - first..max - 1).map(triangular).sum(),
        2 => (max - first..max).sum(),
        _ => 0,
    }
}

const fn triangular(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Rank of the cards following the first `removed` entries of `cards`.
///
/// `cards` is numbered in the full deck of `max` cards. The earlier cards are
/// taken out of the deck, the remaining group is renumbered to close the gaps
/// and ranked against the `max - removed` cards left.
///
/// # Errors
/// `InvalidArgument` if `cards` isn't `expected_len` long, a card is outside of
/// the deck or dealt twice, or the group has a size
/// [`rank_combination`] rejects.
pub fn rank_group(cards: &[usize], max: usize, expected_len: usize, removed: usize) -> Result<usize> {
    if cards.len() != expected_len {
        return Err(invalid(format!(
            "The length of cards is {} and should be {expected_len}.",
            cards.len()
        )));
    }
    if removed >= expected_len {
        return Err(invalid(format!(
            "{removed} removed cards leave no group out of {expected_len}"
        )));
    }
    check_in_deck(cards, max)?;

    let (earlier, group) = cards.split_at(removed);
    if earlier
        .iter()
        .sorted_unstable()
        .tuple_windows()
        .any(|(a, b)| a == b)
    {
        return Err(invalid(format!("removed cards {earlier:?} repeat")));
    }
    let repeated: Vec<usize> = group
        .iter()
        .copied()
        .filter(|card| earlier.contains(card))
        .collect();
    if !repeated.is_empty() {
        return Err(invalid(format!("card(s) {repeated:?} already dealt")));
    }

    let renumbered: Vec<usize> = group
        .iter()
        .map(|&card| card - earlier.iter().filter(|&&gap| gap < card).count())
        .sorted_unstable()
        .collect();
    trace!("group {group:?} renumbered to {renumbered:?} in a deck of {}", max - removed);

    rank_combination(&renumbered, max - removed)
}

/// The ascending group of `size` cards out of `0..max` with the given rank.
///
/// # Errors
/// `InvalidArgument` if `size` isn't one to three cards, doesn't fit in the
/// deck, or `rank` is not below `C(max, size)`.
pub fn unrank_combination(rank: usize, size: usize, max: usize) -> Result<Vec<usize>> {
    if !GROUP_SIZES.contains(&size) {
        return Err(invalid(format!(
            "The group size is {size} and should be one of {GROUP_SIZES:?}."
        )));
    }
    if size > max {
        return Err(invalid(format!(
            "can't choose {size} cards out of MAX=({max})"
        )));
    }
    let total = n_choose_k(max, size);
    let mut rank = rank as u64;
    if rank >= total {
        return Err(invalid(format!(
            "rank={rank} is out of range for {total} combinations of {size} out of {max}"
        )));
    }

    let mut combination = Vec::with_capacity(size);
    let mut candidate = 0;
    for position in 0..size {
        // Skip every block of combinations starting with a smaller card
        loop {
            let starting_here = n_choose_k(max - candidate - 1, size - position - 1);
            if rank < starting_here {
                break;
            }
            rank -= starting_here;
            candidate += 1;
        }
        combination.push(candidate);
        candidate += 1;
    }
    Ok(combination)
}

/// Inverse of [`rank_group`]: the group of `size` cards, in full deck
/// numbering, that has the given rank once `removed` left the deck.
///
/// # Errors
/// `InvalidArgument` if `removed` repeats or leaves the deck, or the rank
/// can't be unranked in the remaining deck.
pub fn unrank_group(rank: usize, removed: &[usize], size: usize, max: usize) -> Result<Vec<usize>> {
    check_in_deck(removed, max)?;
    let gaps: Vec<usize> = removed.iter().copied().sorted_unstable().collect();
    if gaps.iter().tuple_windows().any(|(a, b)| a == b) {
        return Err(invalid(format!("removed cards {removed:?} repeat")));
    }

    let renumbered = unrank_combination(rank, size, max - gaps.len())?;
    Ok(renumbered
        .into_iter()
        .map(|card| {
            gaps.iter()
                .fold(card, |card, &gap| if card >= gap { card + 1 } else { card })
        })
        .collect())
}
