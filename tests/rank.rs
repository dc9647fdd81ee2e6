use itertools::Itertools;
use poker_deals::{
    DealError, combinations::n_choose_k, rank_combination, rank_group, unrank_combination,
    unrank_group,
};

macro_rules! order_test {
    ($name:ident, $max:expr, $(($($card:expr),+ => $order:expr)),+ $(,)?) => {
        #[test]
        fn $name() {
            $(
                assert_eq!(
                    rank_combination(&[$($card),+], $max),
                    Ok($order),
                    "cards {:?}",
                    [$($card),+]
                );
            )+
        }
    };
}

order_test!(
    two_cards_of_five,
    5,
    (0, 1 => 0),
    (0, 2 => 1),
    (0, 3 => 2),
    (0, 4 => 3),
    (1, 2 => 4),
    (1, 3 => 5),
    (1, 4 => 6),
    (2, 3 => 7),
    (2, 4 => 8),
    (3, 4 => 9),
);

order_test!(
    two_cards_of_six,
    6,
    (0, 1 => 0),
    (0, 2 => 1),
    (0, 3 => 2),
    (0, 4 => 3),
    (0, 5 => 4),
    (1, 2 => 5),
    (1, 3 => 6),
    (1, 4 => 7),
    (1, 5 => 8),
    (2, 3 => 9),
    (2, 4 => 10),
    (2, 5 => 11),
    (3, 4 => 12),
    (3, 5 => 13),
    (4, 5 => 14),
);

order_test!(
    three_cards_of_five,
    5,
    (0, 1, 2 => 0),
    (0, 1, 3 => 1),
    (0, 1, 4 => 2),
    (0, 2, 3 => 3),
    (0, 2, 4 => 4),
    (0, 3, 4 => 5),
    (1, 2, 3 => 6),
    (1, 2, 4 => 7),
    (1, 3, 4 => 8),
    (2, 3, 4 => 9),
);

order_test!(
    three_cards_of_six,
    6,
    (0, 1, 2 => 0),
    (0, 1, 3 => 1),
    (0, 1, 4 => 2),
    (0, 1, 5 => 3),
    (0, 2, 3 => 4),
    (0, 2, 4 => 5),
    (0, 2, 5 => 6),
    (0, 3, 4 => 7),
    (0, 3, 5 => 8),
    (0, 4, 5 => 9),
    (1, 2, 3 => 10),
    (1, 2, 4 => 11),
    (1, 2, 5 => 12),
    (1, 3, 4 => 13),
    (1, 3, 5 => 14),
    (1, 4, 5 => 15),
    (2, 3, 4 => 16),
    (2, 3, 5 => 17),
    (2, 4, 5 => 18),
    (3, 4, 5 => 19),
);

order_test!(single_cards, 7, (0 => 0), (3 => 3), (6 => 6));

#[test]
fn bijection_onto_rank_range() {
    for max in 1..=12 {
        for size in 1..=3 {
            let ranks: Vec<usize> = (0..max)
                .combinations(size)
                .map(|cards| rank_combination(&cards, max).unwrap())
                .collect();
            let expected: Vec<usize> = (0..n_choose_k(max, size) as usize).collect();
            // Lexicographic order in, consecutive ranks out
            assert_eq!(ranks, expected, "max {max}, size {size}");
        }
    }
}

#[test]
fn unrank_inverts_rank() {
    for max in 1..=12 {
        for size in 1..=3 {
            for cards in (0..max).combinations(size) {
                let rank = rank_combination(&cards, max).unwrap();
                assert_eq!(unrank_combination(rank, size, max), Ok(cards));
            }
        }
    }
}

#[test]
fn extremes() {
    assert_eq!(rank_combination(&[31], 32), Ok(31));
    assert_eq!(rank_combination(&[0, 1], 32), Ok(0));
    assert_eq!(rank_combination(&[30, 31], 32), Ok(495));
    assert_eq!(rank_combination(&[29, 30, 31], 32), Ok(4959));
}

#[test]
fn card_equal_to_max() {
    let error = rank_combination(&[5], 5).unwrap_err();
    assert!(matches!(error, DealError::InvalidArgument(_)));
    assert!(error.to_string().contains("[5]"), "{error}");
}

#[test]
fn invalid_groups() {
    for cards in [&[][..], &[0, 1, 2, 3][..], &[2, 1][..], &[1, 1][..], &[0, 3, 2][..]] {
        assert!(
            matches!(rank_combination(cards, 6), Err(DealError::InvalidArgument(_))),
            "cards {cards:?}"
        );
    }
}

#[test]
fn group_after_removed_cards() {
    assert_eq!(rank_group(&[0, 1, 2, 3], 5, 4, 2), Ok(0));
    // 1 and 3 renumber to 0 and 1 once 0 and 2 are gone
    assert_eq!(rank_group(&[0, 2, 1, 3], 5, 4, 2), Ok(0));
    assert_eq!(rank_group(&[3, 4, 1, 2], 5, 4, 2), Ok(2));
    assert_eq!(rank_group(&[0, 1, 2, 3, 5, 6, 7], 8, 7, 4), Ok(3));
    // Order inside the group doesn't matter
    assert_eq!(rank_group(&[0, 1, 2, 3, 7, 5, 6], 8, 7, 4), Ok(3));
}

#[test]
fn invalid_group_after_removed_cards() {
    let cases: [(&[usize], usize, usize, usize); 7] = [
        (&[0, 1, 2], 5, 4, 2),
        (&[0, 1, 2, 5], 5, 4, 2),
        (&[0, 1, 1, 3], 5, 4, 2),
        (&[0, 1, 2, 3], 5, 4, 4),
        (&[0, 1, 2, 3, 4, 5, 6, 7], 9, 8, 4),
        (&[3, 3, 4, 5], 8, 4, 2),
        (&[0, 0, 1, 2], 8, 4, 2),
    ];
    for (cards, max, expected_len, removed) in cases {
        assert!(
            matches!(
                rank_group(cards, max, expected_len, removed),
                Err(DealError::InvalidArgument(_))
            ),
            "cards {cards:?}"
        );
    }
}

#[test]
fn unrank_group_inverts_rank_group() {
    let removed = [5, 0, 2];
    for size in 1..=3 {
        for rank in 0..n_choose_k(9 - removed.len(), size) as usize {
            let group = unrank_group(rank, &removed, size, 9).unwrap();
            assert!(group.iter().all(|card| !removed.contains(card)));
            let cards: Vec<usize> = removed.iter().chain(&group).copied().collect();
            assert_eq!(rank_group(&cards, 9, cards.len(), removed.len()), Ok(rank));
        }
    }
}

#[test]
fn invalid_unranks() {
    assert!(unrank_combination(10, 2, 5).is_err());
    assert!(unrank_combination(0, 0, 5).is_err());
    assert!(unrank_combination(0, 4, 5).is_err());
    assert!(unrank_combination(0, 3, 2).is_err());
    assert!(unrank_group(0, &[1, 1], 2, 5).is_err());
    assert!(unrank_group(0, &[7], 2, 5).is_err());
}
