//! Core engine types: topics, orientation, RNG, configuration, errors.
//!
//! Everything here is layout-agnostic. Layout-specific behavior lives in
//! data (`layouts`, `store`) rather than in code branches.

pub mod config;
pub mod error;
pub mod rng;
pub mod topic;

pub use config::{EngineConfig, GenerationMode, ShareConfig};
pub use error::{EngineError, ReadingError, Result};
pub use rng::DrawRng;
pub use topic::{Orientation, Topic};
