use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::table::Table;
use crate::domain::TableId;
use crate::engine::TableManager;
use crate::infra::{IdGenerator, SystemRng};

use super::commands::Command;
use super::dto::{CommandResponse, HandHistoryDto, TableViewDto};
use super::errors::ApiError;
use super::queries::{build_table_view, Query, QueryResponse};

/// Запрос в JSON-мост: команда или чтение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Request {
    Command(Command),
    Query(Query),
}

/// Ответ JSON-моста. Ошибки тоже уходят в JSON, а не теряются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Response {
    Command(CommandResponse),
    Query(QueryResponse),
    Error(ApiError),
}

/// Точка входа для внешнего слоя (браузерный мост, CLI).
///
/// Владеет столами, генератором id и конфигом. Если в конфиге задан seed,
/// каждая раздача тасуется детерминированным RNG, иначе — `SystemRng`.
#[derive(Debug)]
pub struct PokerService {
    config: EngineConfig,
    manager: TableManager,
    ids: IdGenerator,
}

impl PokerService {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            manager: TableManager::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn manager(&self) -> &TableManager {
        &self.manager
    }

    pub fn execute(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::CreateTable { name } => {
                let view = self.create_table(name)?;
                Ok(CommandResponse::TableCreated(view))
            }
            Command::Deal { table_id } => Ok(CommandResponse::Dealt(self.deal(table_id)?)),
            Command::AdvanceRound { table_id } => {
                self.manager.advance_street(table_id)?;
                Ok(CommandResponse::RoundAdvanced(self.view(table_id)?))
            }
            Command::PlaceBet { table_id, input } => {
                let accepted = self.manager.place_bet(table_id, &input)?;
                Ok(CommandResponse::BetPlaced {
                    accepted,
                    table: self.view(table_id)?,
                })
            }
        }
    }

    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::GetTable { table_id } => Ok(QueryResponse::Table(self.view(table_id)?)),
            Query::ListTables => Ok(QueryResponse::Tables(
                self.manager.tables().map(build_table_view).collect(),
            )),
            Query::GetHistory { table_id } => {
                if !self.manager.has_table(table_id) {
                    return Err(ApiError::TableNotFound(table_id));
                }
                let history = self.manager.hand_engine(table_id).map(|e| HandHistoryDto {
                    table_id,
                    hand_id: e.hand_id,
                    history: e.history.clone(),
                });
                Ok(QueryResponse::History(history))
            }
        }
    }

    /// JSON-вход для фронта: `Request` → `Response`.
    ///
    /// Всегда возвращает JSON: битый запрос или ошибка движка приходят
    /// как `Response::Error`.
    pub fn handle_json(&mut self, raw: &str) -> String {
        let response = self.dispatch(raw).unwrap_or_else(|err| {
            log::debug!("json request failed: {err}");
            Response::Error(err)
        });
        serde_json::to_string(&response).unwrap_or_else(|err| {
            serde_json::json!({ "Error": { "BadRequest": err.to_string() } }).to_string()
        })
    }

    fn dispatch(&mut self, raw: &str) -> Result<Response, ApiError> {
        let request: Request = serde_json::from_str(raw)?;
        Ok(match request {
            Request::Command(c) => Response::Command(self.execute(c)?),
            Request::Query(q) => Response::Query(self.query(q)?),
        })
    }

    fn create_table(&mut self, name: Option<String>) -> Result<TableViewDto, ApiError> {
        if self.manager.len() >= self.config.max_tables {
            return Err(ApiError::TooManyTables(self.config.max_tables));
        }
        let id = self.ids.next_table_id();
        let name = name.unwrap_or_else(|| format!("{} {id}", self.config.table_name));
        let table = Table::new(id, name);
        let view = build_table_view(&table);
        self.manager.add_table(table);
        log::info!("opened table {} ({})", id, view.name);
        Ok(view)
    }

    fn deal(&mut self, table_id: TableId) -> Result<TableViewDto, ApiError> {
        let hands_dealt = self
            .manager
            .table(table_id)
            .map(|t| t.hands_dealt)
            .ok_or(ApiError::TableNotFound(table_id))?;
        let hand_id = self.ids.next_hand_id();

        let table = match self.config.rng_seed() {
            Some(seed) => {
                let mut rng = seed.derive(table_id, hand_id, hands_dealt).to_rng();
                self.manager.start_hand(table_id, &mut rng, hand_id)?
            }
            None => self.manager.start_hand(table_id, &mut SystemRng, hand_id)?,
        };
        Ok(build_table_view(table))
    }

    fn view(&self, table_id: TableId) -> Result<TableViewDto, ApiError> {
        self.manager
            .table(table_id)
            .map(build_table_view)
            .ok_or(ApiError::TableNotFound(table_id))
    }
}
