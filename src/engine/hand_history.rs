use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::{HandId, TableId};

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        table_id: TableId,
        hand_id: HandId,
    },

    /// Герой получил карманные карты.
    HoleCardsDealt {
        cards: Vec<Card>,
    },

    /// Открыты новые общие карты.
    BoardRevealed {
        street: Street,
        cards: Vec<Card>,
    },

    /// Ставка принята в банк.
    BetPlaced {
        amount: Chips,
        pot_after: Chips,
    },

    /// Ввод не распознан как ставка – в банк ушёл 0.
    BetIgnored {
        input: String,
    },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
