use std::collections::{HashMap, HashSet};

use poker_table::domain::{Card, Deck, Street};
use poker_table::engine::{
    advance_round, create_deck, deal_hand, shuffle_deck, visible_community_count, EngineError,
};
use poker_table::infra::DeterministicRng;

fn sorted(cards: &[Card]) -> Vec<String> {
    let mut v: Vec<String> = cards.iter().map(ToString::to_string).collect();
    v.sort();
    v
}

//
// shuffle.rs
//
#[test]
fn create_deck_is_canonical_and_complete() {
    let deck = create_deck();
    assert_eq!(deck, Deck::standard_52());

    let unique: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn shuffle_is_permutation_and_leaves_input_alone() {
    let deck = create_deck();
    let mut rng = DeterministicRng::from_u64(42);

    let shuffled = shuffle_deck(&deck, &mut rng);

    assert_eq!(deck, Deck::standard_52(), "input deck must not be mutated");
    assert_eq!(shuffled.len(), 52);
    assert_eq!(sorted(&shuffled.cards), sorted(&deck.cards));
    assert_ne!(shuffled, deck);
}

#[test]
fn shuffle_of_short_decks() {
    let mut rng = DeterministicRng::from_u64(1);

    let empty = Deck::from_cards(Vec::new());
    assert!(shuffle_deck(&empty, &mut rng).is_empty());

    let one = Deck::from_cards(vec![create_deck().cards[5]]);
    assert_eq!(shuffle_deck(&one, &mut rng), one);
}

/// Хи-квадрат по каждой позиции колоды: каждая карта должна попадать
/// в каждую позицию примерно одинаково часто.
#[test]
fn shuffle_positions_are_uniform() {
    const TRIALS: usize = 26_000;
    // df = 51; p ≈ 4e-6 при 110 на позицию, 52 позиции
    const CHI_SQUARE_LIMIT: f64 = 110.0;

    let deck = create_deck();
    let index_of: HashMap<Card, usize> =
        deck.cards.iter().enumerate().map(|(i, c)| (*c, i)).collect();

    let mut rng = DeterministicRng::from_u64(2024);
    // counts[позиция][карта]
    let mut counts = vec![[0usize; 52]; 52];

    for _ in 0..TRIALS {
        let shuffled = shuffle_deck(&deck, &mut rng);
        for (pos, card) in shuffled.cards.iter().enumerate() {
            counts[pos][index_of[card]] += 1;
        }
    }

    let expected = TRIALS as f64 / 52.0;
    for (pos, row) in counts.iter().enumerate() {
        let chi: f64 = row
            .iter()
            .map(|&observed| {
                let d = observed as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(
            chi < CHI_SQUARE_LIMIT,
            "position {pos}: chi-square {chi:.1} exceeds {CHI_SQUARE_LIMIT}"
        );
    }
}

//
// dealer.rs
//
#[test]
fn deal_hand_takes_seven_distinct_cards_from_prefix() {
    let shuffled = shuffle_deck(&create_deck(), &mut DeterministicRng::from_u64(7));

    let (hand, pool) = deal_hand(&shuffled).unwrap();

    assert_eq!(hand.cards, [shuffled.cards[0], shuffled.cards[1]]);
    assert_eq!(&pool.cards[..], &shuffled.cards[2..7]);

    let all: HashSet<Card> = hand.cards.iter().chain(pool.cards.iter()).copied().collect();
    assert_eq!(all.len(), 7);
    for c in &hand.cards {
        assert!(!pool.cards.contains(c), "{c} is both in hand and board");
    }
}

#[test]
fn deal_hand_works_on_exactly_seven_cards() {
    let deck = Deck::from_cards(create_deck().cards[..7].to_vec());
    let (hand, pool) = deal_hand(&deck).unwrap();

    assert_eq!(hand.cards[0], deck.cards[0]);
    assert_eq!(pool.cards[4], deck.cards[6]);
}

#[test]
fn deal_hand_rejects_short_deck() {
    let deck = Deck::from_cards(create_deck().cards[..6].to_vec());
    assert_eq!(deal_hand(&deck), Err(EngineError::DeckTooShort { len: 6 }));
}

#[test]
fn visible_community_count_table() {
    assert_eq!(visible_community_count(1), 0);
    assert_eq!(visible_community_count(2), 3);
    assert_eq!(visible_community_count(3), 4);
    assert_eq!(visible_community_count(4), 5);
    assert_eq!(visible_community_count(5), 5);
    assert_eq!(visible_community_count(u8::MAX), 5);
}

#[test]
fn visible_community_count_is_monotone() {
    let counts: Vec<usize> = (1..=10).map(visible_community_count).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{counts:?}");
}

#[test]
fn advance_round_steps_and_caps_at_four() {
    assert_eq!(advance_round(1), 2);
    assert_eq!(advance_round(2), 3);
    assert_eq!(advance_round(3), 4);
    assert_eq!(advance_round(4), 4);
    assert_eq!(advance_round(advance_round(4)), 4);
}

#[test]
fn round_functions_agree_with_street() {
    for round in 1..=4u8 {
        let street = Street::from_round(round);
        assert_eq!(street.visible_community_count(), visible_community_count(round));
        assert_eq!(street.next().round(), advance_round(round));
    }
}
