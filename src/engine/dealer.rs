use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{CommunityPool, Hand, Street, COMMUNITY_SIZE, HAND_SIZE};
use crate::engine::errors::EngineError;

/// Сколько карт раздача забирает из начала колоды.
pub const CARDS_PER_DEAL: usize = HAND_SIZE + COMMUNITY_SIZE;

/// Разрезать перетасованную колоду: [0,1] — рука, [2..=6] — борд.
///
/// Колода короче 7 карт — ошибка вызывающего кода.
pub fn deal_hand(deck: &Deck) -> Result<(Hand, CommunityPool), EngineError> {
    if deck.len() < CARDS_PER_DEAL {
        return Err(EngineError::DeckTooShort { len: deck.len() });
    }

    let mut hole = [deck.cards[0]; HAND_SIZE];
    hole.copy_from_slice(&deck.cards[..HAND_SIZE]);

    let mut board: [Card; COMMUNITY_SIZE] = [deck.cards[HAND_SIZE]; COMMUNITY_SIZE];
    board.copy_from_slice(&deck.cards[HAND_SIZE..CARDS_PER_DEAL]);

    Ok((Hand::new(hole), CommunityPool::new(board)))
}

/// Расписание открытия борда: 1→0, 2→3, 3→4, 4 и больше→5.
pub fn visible_community_count(round: u8) -> usize {
    Street::from_round(round).visible_community_count()
}

/// `min(round + 1, 4)`: после ривера переход ничего не меняет.
pub fn advance_round(round: u8) -> u8 {
    round.saturating_add(1).min(Street::LAST.round())
}
