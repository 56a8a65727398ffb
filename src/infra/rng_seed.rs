//! RngSeed — доменный seed для RNG стола.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32]) или собрать его из u64
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || table_id || hand_id || hand_index)
//!   - создавать DeterministicRng из seed
//!
//! Так у каждого стола и каждой раздачи свой независимый поток.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{HandId, TableId};
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для конфига и тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с контекстом стола и раздачи.
    pub fn derive(&self, table_id: TableId, hand_id: HandId, hand_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"POKER_TABLE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(table_id.to_le_bytes());
        hasher.update(hand_id.to_le_bytes());
        hasher.update(hand_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
