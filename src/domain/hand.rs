use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Карманных карт у игрока.
pub const HAND_SIZE: usize = 2;
/// Общих карт на борде.
pub const COMMUNITY_SIZE: usize = 5;

/// Улица (раунд торговли). Номер раунда: Preflop=1 .. River=4.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop = 1,
    Flop = 2,
    Turn = 3,
    River = 4,
}

impl Street {
    pub const FIRST: Street = Street::Preflop;
    pub const LAST: Street = Street::River;

    /// Раунд вне [1,4] прижимается к ближайшей границе.
    pub fn from_round(round: u8) -> Self {
        match round {
            0 | 1 => Street::Preflop,
            2 => Street::Flop,
            3 => Street::Turn,
            _ => Street::River,
        }
    }

    pub fn round(self) -> u8 {
        self as u8
    }

    /// Следующая улица; после River — снова River.
    pub fn next(self) -> Self {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn | Street::River => Street::River,
        }
    }

    pub fn is_final(self) -> bool {
        self == Street::LAST
    }

    /// Сколько общих карт открыто на этой улице.
    pub fn visible_community_count(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => COMMUNITY_SIZE,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(name)
    }
}

/// Карманные карты игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }
}

/// Общие карты раздачи. Все пять известны с момента раздачи,
/// видимость префикса определяется улицей.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityPool {
    pub cards: [Card; COMMUNITY_SIZE],
}

impl CommunityPool {
    pub fn new(cards: [Card; COMMUNITY_SIZE]) -> Self {
        Self { cards }
    }

    /// Открытые на этой улице карты (префикс пула).
    pub fn visible(&self, street: Street) -> &[Card] {
        &self.cards[..street.visible_community_count()]
    }

    /// Сколько карт ещё лежит рубашкой вверх.
    pub fn hidden_count(&self, street: Street) -> usize {
        COMMUNITY_SIZE - street.visible_community_count()
    }
}
