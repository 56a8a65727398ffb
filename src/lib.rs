//! Ядро упрощённого покерного стола.
//!
//! Колода из 52 карт, честная тасовка Фишера–Йетса, раздача руки (2 карты)
//! и борда (5 карт), открытие борда по раундам и банк из свободного ввода.
//! Рисование — снаружи, через `render::TableRenderer`.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod render;

pub use config::{ConfigError, EngineConfig};
