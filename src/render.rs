//! Граница с UI: движок сам ничего не рисует, а отдаёт руку, борд и улицу
//! в `TableRenderer`. Браузер, egui или терминал реализуют трейт у себя.

use std::fmt::Write as _;

use crate::domain::card::Card;
use crate::domain::hand::{CommunityPool, Hand, Street};
use crate::domain::table::Table;

/// Рубашка карты в текстовом виде.
pub const CARD_BACK: &str = "[##]";

pub trait TableRenderer {
    fn render(&mut self, hand: &Hand, community: &CommunityPool, street: Street);
}

/// Отрисовать стол, если на нём уже была раздача.
pub fn render_table<R: TableRenderer + ?Sized>(table: &Table, renderer: &mut R) {
    if let (Some(hand), Some(community)) = (table.hand.as_ref(), table.community.as_ref()) {
        renderer.render(hand, community, table.street);
    }
}

/// Текстовый рендер для CLI и тестов. Последний кадр лежит в `output`.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    pub output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn card(card: &Card) -> String {
        // красные помечаем звёздочкой: цвета в терминале не везде есть
        if card.is_red() {
            format!("[{card}*]")
        } else {
            format!("[{card}]")
        }
    }
}

impl TableRenderer for TextRenderer {
    fn render(&mut self, hand: &Hand, community: &CommunityPool, street: Street) {
        self.output.clear();

        let hole: Vec<String> = hand.cards.iter().map(Self::card).collect();
        let mut board: Vec<String> = community.visible(street).iter().map(Self::card).collect();
        board.extend((0..community.hidden_count(street)).map(|_| CARD_BACK.to_string()));

        let _ = writeln!(self.output, "round {} ({})", street.round(), street);
        let _ = writeln!(self.output, "board: {}", board.join(" "));
        let _ = write!(self.output, "hand:  {}", hole.join(" "));
    }
}
