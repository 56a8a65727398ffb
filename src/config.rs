//! Конфиг движка: имя стола по умолчанию, seed для воспроизводимых раздач,
//! лимит столов. Читается из JSON, все поля необязательны.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infra::RngSeed;

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Имя для столов, созданных без явного имени.
    pub table_name: String,

    /// Если задан — каждая раздача получает детерминированный RNG,
    /// производный от (seed, table_id, hand_id, номер раздачи).
    pub seed: Option<u64>,

    /// Сколько столов можно открыть одновременно.
    pub max_tables: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            table_name: "Table".to_string(),
            seed: None,
            max_tables: 16,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn rng_seed(&self) -> Option<RngSeed> {
        self.seed.map(RngSeed::from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let cfg = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert!(cfg.rng_seed().is_none());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let cfg = EngineConfig::from_json_str(r#"{ "seed": 7, "table_name": "Home" }"#).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.table_name, "Home");
        assert_eq!(cfg.max_tables, 16);
        assert_eq!(cfg.rng_seed(), Some(RngSeed::from_u64(7)));
    }

    #[test]
    fn broken_json_is_parse_error() {
        let err = EngineConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
