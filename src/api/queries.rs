use serde::{Deserialize, Serialize};

use crate::domain::table::Table;
use crate::domain::TableId;

use super::dto::{CardDto, HandHistoryDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние стола.
    GetTable { table_id: TableId },

    /// Получить список столов.
    ListTables,

    /// История текущей раздачи стола.
    GetHistory { table_id: TableId },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Tables(Vec<TableViewDto>),
    History(Option<HandHistoryDto>),
}

/// Сформировать DTO стола. Скрытые карты борда наружу не уходят.
pub fn build_table_view(table: &Table) -> TableViewDto {
    let hand = table
        .hand
        .as_ref()
        .map(|h| h.cards.iter().map(CardDto::from).collect())
        .unwrap_or_default();

    let board = table.visible_board().iter().map(CardDto::from).collect();

    let hidden_board_cards = table
        .community
        .as_ref()
        .map(|c| c.hidden_count(table.street))
        .unwrap_or(0);

    TableViewDto {
        table_id: table.id,
        name: table.name.clone(),
        round: table.round(),
        street: table.street,
        hand_id: table.current_hand_id,
        hand,
        board,
        hidden_board_cards,
        total_pot: table.total_pot,
        hand_in_progress: table.hand_in_progress,
        can_advance: table.can_advance(),
    }
}
