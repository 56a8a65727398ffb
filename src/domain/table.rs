use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{CommunityPool, Hand, Street};
use crate::domain::{HandId, TableId};

/// Основное состояние стола.
///
/// Владелец — вызывающий код (менеджер столов, тест, CLI). Глобального
/// состояния нет: каждый стол независим.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub id: TableId,
    pub name: String,

    /// Карманные карты героя (None, пока не было ни одной раздачи).
    pub hand: Option<Hand>,

    /// Пять общих карт текущей раздачи.
    pub community: Option<CommunityPool>,

    /// Текущая улица раздачи.
    pub street: Street,

    /// ID текущей раздачи.
    pub current_hand_id: Option<HandId>,

    /// Сколько раздач сыграно за этим столом.
    pub hands_dealt: u64,

    /// Идёт ли сейчас раздача.
    pub hand_in_progress: bool,

    /// Банк текущей раздачи.
    pub total_pot: Chips,
}

impl Table {
    /// Создать пустой стол.
    pub fn new(id: TableId, name: String) -> Self {
        Self {
            id,
            name,
            hand: None,
            community: None,
            street: Street::FIRST,
            current_hand_id: None,
            hands_dealt: 0,
            hand_in_progress: false,
            total_pot: Chips::ZERO,
        }
    }

    pub fn round(&self) -> u8 {
        self.street.round()
    }

    /// Открытые общие карты (пусто до раздачи и на префлопе).
    pub fn visible_board(&self) -> &[Card] {
        self.community
            .as_ref()
            .map(|c| c.visible(self.street))
            .unwrap_or(&[])
    }

    /// Можно ли ещё перейти на следующую улицу.
    /// UI использует это, чтобы выключить кнопку "дальше".
    pub fn can_advance(&self) -> bool {
        self.hand_in_progress && !self.street.is_final()
    }
}
