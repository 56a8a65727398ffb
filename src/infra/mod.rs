//! Инфраструктурный слой вокруг движка стола:
//! - генерация ID;
//! - RNG-реализации для движка;
//! - производные seed'ы для воспроизводимых раздач.

pub mod ids;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use rng::*;
pub use rng_seed::RngSeed;
