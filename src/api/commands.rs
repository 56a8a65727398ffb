use serde::{Deserialize, Serialize};

use crate::domain::TableId;

/// Команда верхнего уровня — всё, что меняет состояние.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Открыть новый стол. Без имени берётся имя из конфига.
    CreateTable { name: Option<String> },

    /// Новая раздача: колода, тасовка, рука + борд, раунд 1, банк 0.
    Deal { table_id: TableId },

    /// Следующий раунд торговли (после ривера — без изменений).
    AdvanceRound { table_id: TableId },

    /// Ставка из поля ввода, как есть. Мусор в банк не попадает.
    PlaceBet { table_id: TableId, input: String },
}
