use insta::assert_debug_snapshot;
use poker_deals::{
    Card, CardValue, Suit,
    combinations::{Combinations, n_choose_k},
    rank_combination,
};

#[test]
fn combinations() {
    // Some random cards
    let cards = [
        Card::new(CardValue::Two, Suit::Diamonds),
        Card::new(CardValue::Jack, Suit::Clubs),
        Card::new(CardValue::Ace, Suit::Spades),
    ];
    let combinations: Vec<String> = Combinations::<Card, 2>::new(&cards)
        .map(|[a, b]| format!("{a}{b}"))
        .collect();

    assert_debug_snapshot!(combinations, @r#"
    [
        "2dJc",
        "2dAs",
        "JcAs",
    ]
    "#);
}

#[test]
fn more_than_available() {
    assert_eq!(Combinations::<usize, 3>::of_deck(2).count(), 0);
    assert_eq!(Combinations::<usize, 2>::of_deck(2).count(), 1);
}

#[test]
fn counts_match_binomials() {
    for n in 0..12 {
        assert_eq!(Combinations::<usize, 1>::of_deck(n).count() as u64, n_choose_k(n, 1));
        assert_eq!(Combinations::<usize, 2>::of_deck(n).count() as u64, n_choose_k(n, 2));
        assert_eq!(Combinations::<usize, 3>::of_deck(n).count() as u64, n_choose_k(n, 3));
    }
}

#[test]
fn binomials() {
    assert_eq!(n_choose_k(0, 0), 1);
    assert_eq!(n_choose_k(5, 2), 10);
    assert_eq!(n_choose_k(5, 3), 10);
    assert_eq!(n_choose_k(5, 6), 0);
    assert_eq!(n_choose_k(52, 2), 1326);
    assert_eq!(n_choose_k(48, 3), 17296);
}

// Combinations come out in the order rank_combination counts
#[test]
fn iteration_order_is_rank_order() {
    for (expected, triple) in Combinations::<usize, 3>::of_deck(9).enumerate() {
        assert_eq!(rank_combination(&triple, 9), Ok(expected));
    }
    for (expected, pair) in Combinations::<usize, 2>::of_deck(13).enumerate() {
        assert_eq!(rank_combination(&pair, 13), Ok(expected));
    }
}
