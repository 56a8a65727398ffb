use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::{HandId, TableId};
use crate::engine::HandHistory;

/// DTO карты: то, что нужно фронту, чтобы нарисовать лицо карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub rank: Rank,
    pub suit: Suit,
    /// Подпись вида "10♥".
    pub label: String,
    pub red: bool,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
            label: card.to_string(),
            red: card.is_red(),
        }
    }
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub table_id: TableId,
    pub name: String,
    pub round: u8,
    pub street: Street,
    pub hand_id: Option<HandId>,
    pub hand: Vec<CardDto>,
    /// Только открытые карты борда.
    pub board: Vec<CardDto>,
    /// Сколько карт борда рисовать рубашкой.
    pub hidden_board_cards: usize,
    pub total_pot: Chips,
    pub hand_in_progress: bool,
    /// false — кнопку "следующий раунд" надо выключить.
    pub can_advance: bool,
}

/// DTO истории раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandHistoryDto {
    pub table_id: TableId,
    pub hand_id: HandId,
    pub history: HandHistory,
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    TableCreated(TableViewDto),
    Dealt(TableViewDto),
    RoundAdvanced(TableViewDto),
    /// `accepted` — сколько реально ушло в банк (0 для мусорного ввода).
    BetPlaced { accepted: Chips, table: TableViewDto },
}
