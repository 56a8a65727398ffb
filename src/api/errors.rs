use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TableId;
use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Стол не найден.
    #[error("table {0} not found")]
    TableNotFound(TableId),

    /// Достигнут лимит столов из конфига.
    #[error("table limit {0} reached")]
    TooManyTables(usize),

    /// Ошибка движка (нет раздачи и т.п.).
    #[error("engine error: {0}")]
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::TableNotFound(id) => ApiError::TableNotFound(id),
            ManagerError::Engine(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
