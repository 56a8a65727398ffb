use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::table::Table;
use crate::domain::{HandId, TableId};
use crate::engine::dealer::deal_hand;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::pot::parse_bet;
use crate::engine::shuffle::{create_deck, shuffle_deck};
use crate::engine::RandomSource;

/// Внутреннее состояние раздачи.
#[derive(Clone, Debug)]
pub struct HandEngine {
    pub table_id: TableId,
    pub hand_id: HandId,
    /// Перетасованная колода этой раздачи (первые 7 карт уже розданы).
    pub deck: Deck,
    /// История раздачи.
    pub history: HandHistory,
}

impl HandEngine {
    fn new(table_id: TableId, hand_id: HandId, deck: Deck) -> Self {
        Self {
            table_id,
            hand_id,
            deck,
            history: HandHistory::new(),
        }
    }
}

/// Старт новой раздачи:
/// - собирает и тасует колоду;
/// - раздаёт 2 карманные карты и 5 общих;
/// - сбрасывает улицу на префлоп и обнуляет банк.
///
/// Можно вызывать в любой момент: новая раздача заменяет текущую.
pub fn start_hand<R: RandomSource>(
    table: &mut Table,
    rng: &mut R,
    new_hand_id: HandId,
) -> Result<HandEngine, EngineError> {
    let deck = shuffle_deck(&create_deck(), rng);
    let (hand, community) = deal_hand(&deck)?;

    table.hand = Some(hand);
    table.community = Some(community);
    table.street = Street::FIRST;
    table.current_hand_id = Some(new_hand_id);
    table.hands_dealt += 1;
    table.hand_in_progress = true;
    table.total_pot = Chips::ZERO;

    let mut engine = HandEngine::new(table.id, new_hand_id, deck);

    engine.history.push(HandEventKind::HandStarted {
        table_id: table.id,
        hand_id: new_hand_id,
    });
    engine.history.push(HandEventKind::HoleCardsDealt {
        cards: hand.cards.to_vec(),
    });

    log::info!(
        "table {} hand {}: dealt {} {}",
        table.id,
        new_hand_id,
        hand.cards[0],
        hand.cards[1]
    );

    Ok(engine)
}

/// Перейти на следующую улицу и открыть новые карты борда.
///
/// На ривере ничего не меняется; возвращается текущая улица.
pub fn advance_street(table: &mut Table, engine: &mut HandEngine) -> Result<Street, EngineError> {
    if !table.hand_in_progress {
        return Err(EngineError::NoActiveHand);
    }
    let community = table.community.ok_or(EngineError::NoActiveHand)?;

    let prev = table.street;
    if prev.is_final() {
        log::debug!("table {}: already on the river", table.id);
        return Ok(prev);
    }

    let next = prev.next();
    table.street = next;

    let revealed =
        community.cards[prev.visible_community_count()..next.visible_community_count()].to_vec();

    log::debug!(
        "table {}: {} -> {}, revealed {:?}",
        table.id,
        prev,
        next,
        revealed.iter().map(ToString::to_string).collect::<Vec<_>>()
    );

    engine.history.push(HandEventKind::BoardRevealed {
        street: next,
        cards: revealed,
    });

    Ok(next)
}

/// Ставка из свободного ввода.
///
/// Возвращает сумму, ушедшую в банк: для нераспознанного ввода — `Chips::ZERO`.
pub fn place_bet(
    table: &mut Table,
    engine: &mut HandEngine,
    input: &str,
) -> Result<Chips, EngineError> {
    if !table.hand_in_progress {
        return Err(EngineError::NoActiveHand);
    }

    let amount = parse_bet(input);
    if amount.is_zero() {
        log::debug!("table {}: ignoring bet input {:?}", table.id, input);
        engine.history.push(HandEventKind::BetIgnored {
            input: input.to_string(),
        });
        return Ok(Chips::ZERO);
    }

    table.total_pot += amount;

    log::debug!(
        "table {}: bet {} -> pot {}",
        table.id,
        amount,
        table.total_pot
    );

    engine.history.push(HandEventKind::BetPlaced {
        amount,
        pot_after: table.total_pot,
    });

    Ok(amount)
}
