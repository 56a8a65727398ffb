//! Движок стола: колода, тасовка, раздача, улицы, банк.
//!
//! Высокоуровневый объект: `HandEngine`
//! Основные операции:
//!   - `start_hand` – новая раздача (колода → тасовка → рука + борд)
//!   - `advance_street` – переход на следующую улицу
//!   - `place_bet` – ставка из свободного ввода в банк

pub mod dealer;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod pot;
pub mod shuffle;
pub mod table_manager;

pub use dealer::{advance_round, deal_hand, visible_community_count};
pub use errors::EngineError;
pub use game_loop::{advance_street, place_bet, start_hand, HandEngine};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::parse_bet;
pub use shuffle::{create_deck, shuffle_deck};
pub use table_manager::{ManagerError, TableManager};

/// Источник случайности для движка.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайный индекс из `[0, upper]` включительно.
    fn index_up_to(&mut self, upper: usize) -> usize;
}
