use thiserror::Error;

/// Ошибки движка стола.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("В колоде {len} карт, для раздачи нужно минимум 7")]
    DeckTooShort { len: usize },
}
