//! Readings: requests, seeded drawing and the interpretation engine.
//!
//! ## Key Types
//!
//! - `ReadingRequest`: layout, topic, drawn cards and optional personalization
//! - `SpreadDrawer`: deterministic draw of a full spread from a seed
//! - `ReadingEngine`: runs every analyzer and assembles the narrative

pub mod drawer;
pub mod engine;
pub mod request;

pub use drawer::SpreadDrawer;
pub use engine::ReadingEngine;
pub use request::ReadingRequest;
