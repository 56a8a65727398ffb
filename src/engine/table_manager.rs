// src/engine/table_manager.rs

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::table::Table;
use crate::domain::{HandId, TableId};
use crate::engine::{self, EngineError, HandEngine, RandomSource};

/// Ошибки уровня менеджера столов (над движком одной раздачи).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// Стол с таким ID не найден.
    #[error("Стол {0} не найден")]
    TableNotFound(TableId),

    /// Проброшенная ошибка из движка.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Внутренний объект: один стол + опционально активный движок раздачи.
#[derive(Clone, Debug)]
struct ManagedTable {
    table: Table,
    engine: Option<HandEngine>,
}

impl ManagedTable {
    fn new(table: Table) -> Self {
        Self {
            table,
            engine: None,
        }
    }

    fn engine_mut(&mut self) -> Result<(&mut Table, &mut HandEngine), EngineError> {
        let engine = self.engine.as_mut().ok_or(EngineError::NoActiveHand)?;
        Ok((&mut self.table, engine))
    }
}

/// Менеджер столов:
/// - хранит несколько независимых столов по TableId;
/// - для каждого стола может быть активный HandEngine (текущая раздача);
/// - даёт методы start_hand/advance_street/place_bet поверх engine.
#[derive(Clone, Debug, Default)]
pub struct TableManager {
    tables: BTreeMap<TableId, ManagedTable>,
}

impl TableManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Добавить стол под его TableId.
    ///
    /// Если стол с таким id уже был — заменяем его.
    pub fn add_table(&mut self, table: Table) {
        let id = table.id;
        self.tables.insert(id, ManagedTable::new(table));
    }

    pub fn has_table(&self, table_id: TableId) -> bool {
        self.tables.contains_key(&table_id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(&self, table_id: TableId) -> Option<&Table> {
        self.tables.get(&table_id).map(|mt| &mt.table)
    }

    /// Все столы в порядке возрастания id.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values().map(|mt| &mt.table)
    }

    pub fn hand_engine(&self, table_id: TableId) -> Option<&HandEngine> {
        self.tables
            .get(&table_id)
            .and_then(|mt| mt.engine.as_ref())
    }

    /// Запустить новую раздачу на конкретном столе.
    pub fn start_hand<R: RandomSource>(
        &mut self,
        table_id: TableId,
        rng: &mut R,
        hand_id: HandId,
    ) -> Result<&Table, ManagerError> {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        let hand = engine::start_hand(&mut mt.table, rng, hand_id)?;
        mt.engine = Some(hand);

        Ok(&mt.table)
    }

    /// Перейти на следующую улицу на конкретном столе.
    pub fn advance_street(&mut self, table_id: TableId) -> Result<Street, ManagerError> {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        let (table, hand) = mt.engine_mut()?;
        Ok(engine::advance_street(table, hand)?)
    }

    /// Ставка на конкретном столе.
    pub fn place_bet(&mut self, table_id: TableId, input: &str) -> Result<Chips, ManagerError> {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        let (table, hand) = mt.engine_mut()?;
        Ok(engine::place_bet(table, hand, input)?)
    }
}
