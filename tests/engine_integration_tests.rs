//! Сценарии целиком: стол → раздача → раунды → ставки.

use poker_table::domain::{Chips, Street, Table};
use poker_table::engine::{
    advance_street, place_bet, start_hand, EngineError, HandEventKind, ManagerError, TableManager,
};
use poker_table::infra::DeterministicRng;

fn table(id: u64) -> Table {
    Table::new(id, format!("Table {id}"))
}

fn chips(s: &str) -> Chips {
    s.parse().unwrap()
}

#[test]
fn deal_then_advance_through_all_rounds() {
    let mut t = table(1);
    let mut rng = DeterministicRng::from_u64(10);

    let mut engine = start_hand(&mut t, &mut rng, 1).unwrap();
    assert_eq!(t.round(), 1);
    assert_eq!(t.visible_board().len(), 0);
    assert!(t.can_advance());

    for expected in [Street::Flop, Street::Turn, Street::River] {
        assert_eq!(advance_street(&mut t, &mut engine).unwrap(), expected);
    }
    assert_eq!(t.round(), 4);
    assert_eq!(t.visible_board().len(), 5);
    assert!(!t.can_advance());

    // После ривера — без изменений.
    assert_eq!(advance_street(&mut t, &mut engine).unwrap(), Street::River);
    assert_eq!(t.round(), 4);
    assert_eq!(t.visible_board().len(), 5);
}

#[test]
fn board_reveals_prefix_of_dealt_community() {
    let mut t = table(1);
    let mut engine = start_hand(&mut t, &mut DeterministicRng::from_u64(3), 1).unwrap();
    let community = t.community.unwrap();

    advance_street(&mut t, &mut engine).unwrap();
    assert_eq!(t.visible_board(), &community.cards[..3]);
    advance_street(&mut t, &mut engine).unwrap();
    assert_eq!(t.visible_board(), &community.cards[..4]);
    advance_street(&mut t, &mut engine).unwrap();
    assert_eq!(t.visible_board(), &community.cards[..]);

    // Рука и борд — это первые 7 карт перетасованной колоды.
    let hand = t.hand.unwrap();
    assert_eq!(&hand.cards[..], &engine.deck.cards[..2]);
    assert_eq!(&community.cards[..], &engine.deck.cards[2..7]);
}

#[test]
fn bets_accumulate_and_garbage_counts_as_zero() {
    let mut t = table(1);
    let mut engine = start_hand(&mut t, &mut DeterministicRng::from_u64(1), 1).unwrap();

    assert_eq!(place_bet(&mut t, &mut engine, "abc").unwrap(), Chips::ZERO);
    assert_eq!(t.total_pot, Chips::ZERO);

    assert_eq!(place_bet(&mut t, &mut engine, "5.5").unwrap(), chips("5.5"));
    assert_eq!(t.total_pot.as_f64(), 5.5);

    assert_eq!(place_bet(&mut t, &mut engine, "").unwrap(), Chips::ZERO);
    assert_eq!(place_bet(&mut t, &mut engine, "-10").unwrap(), Chips::ZERO);
    assert_eq!(place_bet(&mut t, &mut engine, "0").unwrap(), Chips::ZERO);
    assert_eq!(place_bet(&mut t, &mut engine, "4.5").unwrap(), chips("4.5"));

    assert_eq!(t.total_pot, chips("10"));
}

#[test]
fn sub_cent_bets_reach_the_pot() {
    let mut t = table(1);
    let mut engine = start_hand(&mut t, &mut DeterministicRng::from_u64(6), 1).unwrap();

    assert_eq!(place_bet(&mut t, &mut engine, "0.001").unwrap(), chips("0.001"));
    assert_eq!(place_bet(&mut t, &mut engine, "1.234").unwrap(), chips("1.234"));
    for _ in 0..10 {
        place_bet(&mut t, &mut engine, "0.004").unwrap();
    }

    assert_eq!(t.total_pot, chips("1.275"));
    assert_eq!(t.total_pot.to_string(), "1.275");
    assert!(!engine
        .history
        .events
        .iter()
        .any(|e| matches!(e.kind, HandEventKind::BetIgnored { .. })));
}

#[test]
fn new_deal_resets_round_and_pot() {
    let mut t = table(1);
    let mut rng = DeterministicRng::from_u64(2);

    let mut engine = start_hand(&mut t, &mut rng, 1).unwrap();
    place_bet(&mut t, &mut engine, "20").unwrap();
    advance_street(&mut t, &mut engine).unwrap();
    advance_street(&mut t, &mut engine).unwrap();

    let engine = start_hand(&mut t, &mut rng, 2).unwrap();
    assert_eq!(t.street, Street::Preflop);
    assert!(t.total_pot.is_zero());
    assert_eq!(t.current_hand_id, Some(2));
    assert_eq!(t.hands_dealt, 2);
    assert_eq!(engine.history.len(), 2);
}

#[test]
fn actions_before_first_deal_fail() {
    let mut manager = TableManager::new();
    manager.add_table(table(1));

    assert_eq!(
        manager.advance_street(1),
        Err(ManagerError::Engine(EngineError::NoActiveHand))
    );
    assert_eq!(
        manager.place_bet(1, "5"),
        Err(ManagerError::Engine(EngineError::NoActiveHand))
    );
    assert_eq!(manager.advance_street(99), Err(ManagerError::TableNotFound(99)));
}

#[test]
fn history_records_deal_reveals_and_bets() {
    let mut t = table(4);
    let mut engine = start_hand(&mut t, &mut DeterministicRng::from_u64(4), 17).unwrap();
    place_bet(&mut t, &mut engine, "nope").unwrap();
    place_bet(&mut t, &mut engine, "2").unwrap();
    advance_street(&mut t, &mut engine).unwrap();
    // ривер уже не пишет событий
    for _ in 0..5 {
        advance_street(&mut t, &mut engine).unwrap();
    }

    let kinds: Vec<&HandEventKind> = engine.history.events.iter().map(|e| &e.kind).collect();
    assert_eq!(
        kinds[0],
        &HandEventKind::HandStarted {
            table_id: 4,
            hand_id: 17
        }
    );
    assert!(matches!(kinds[1], HandEventKind::HoleCardsDealt { cards } if cards.len() == 2));
    assert_eq!(
        kinds[2],
        &HandEventKind::BetIgnored {
            input: "nope".to_string()
        }
    );
    assert_eq!(
        kinds[3],
        &HandEventKind::BetPlaced {
            amount: chips("2"),
            pot_after: chips("2")
        }
    );

    let reveals: Vec<(Street, usize)> = engine
        .history
        .events
        .iter()
        .filter_map(|e| match &e.kind {
            HandEventKind::BoardRevealed { street, cards } => Some((*street, cards.len())),
            _ => None,
        })
        .collect();
    assert_eq!(
        reveals,
        vec![(Street::Flop, 3), (Street::Turn, 1), (Street::River, 1)]
    );

    let indexes: Vec<u32> = engine.history.events.iter().map(|e| e.index).collect();
    assert_eq!(indexes, (0..indexes.len() as u32).collect::<Vec<_>>());
}

#[test]
fn tables_in_manager_are_independent() {
    let mut manager = TableManager::new();
    manager.add_table(table(1));
    manager.add_table(table(2));

    let mut rng = DeterministicRng::from_u64(5);
    manager.start_hand(1, &mut rng, 1).unwrap();
    manager.start_hand(2, &mut rng, 2).unwrap();

    manager.advance_street(1).unwrap();
    manager.advance_street(1).unwrap();
    manager.place_bet(1, "7.25").unwrap();

    let t1 = manager.table(1).unwrap();
    let t2 = manager.table(2).unwrap();
    assert_eq!(t1.street, Street::Turn);
    assert_eq!(t1.total_pot, chips("7.25"));
    assert_eq!(t2.street, Street::Preflop);
    assert!(t2.total_pot.is_zero());
    assert_eq!(manager.hand_engine(2).unwrap().hand_id, 2);

    let ids: Vec<u64> = manager.tables().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn same_seed_same_deal() {
    let mut a = table(1);
    let mut b = table(1);

    start_hand(&mut a, &mut DeterministicRng::from_u64(99), 1).unwrap();
    start_hand(&mut b, &mut DeterministicRng::from_u64(99), 1).unwrap();

    assert_eq!(a, b);
}
