use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RandomSource), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке масть→ранг:
    /// ♠ A..K, ♥ A..K, ♦ A..K, ♣ A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}
