//! # tarot-engine
//!
//! A data-driven tarot spread interpretation engine.
//!
//! ## Design Principles
//!
//! 1. **Layout-Agnostic**: No layout is special-cased in code. Positions,
//!    roles, questions and score weights are data on `Layout`.
//!
//! 2. **Always An Answer**: Missing content never fails a reading. Every
//!    analyzer has a built-in fallback, and every narrative section has a
//!    procedural writer that cannot come back empty.
//!
//! 3. **Deterministic**: The same draw, snapshot and configuration always
//!    give byte-identical output. Only the optional remote generator can
//!    introduce variation.
//!
//! ## Architecture
//!
//! - **Content Snapshots**: The store hands out an immutable snapshot per
//!   reading. Tables use `im` vectors so snapshots are cheap to clone.
//!
//! - **Async Collaborators**: The content store and text generator are
//!   `async_trait` seams, each bounded by a configured timeout.
//!
//! ## Modules
//!
//! - `core`: Topics, orientation, RNG, configuration, errors
//! - `cards`: Card definitions, drawn cards and the catalog
//! - `layouts`: Spread layouts, position roles and score weights
//! - `store`: Content tables, pattern conditions and snapshots
//! - `analysis`: Position, relationship, pattern, synergy, score and advice analyzers
//! - `text`: Template rendering and the procedural writer
//! - `narrative`: Narrative assembly, remote generation and shareable summaries
//! - `reading`: Requests, seeded drawing and the reading engine

pub mod analysis;
pub mod cards;
pub mod core;
pub mod layouts;
pub mod narrative;
pub mod reading;
pub mod store;
pub mod text;

// Re-export commonly used types
pub use crate::core::{
    DrawRng, EngineConfig, EngineError, GenerationMode, Orientation, ReadingError,
    Result, ShareConfig, Topic,
};

pub use crate::cards::{Arcana, Card, CardCatalog, CardId, DrawnCard, Element, Suit};

pub use crate::layouts::{Layout, LayoutId, LayoutRegistry, PositionDefinition, PositionRole, ScoreWeights};

pub use crate::store::{
    ContentQuery, ContentSnapshot, ContentStore, ContentTables, InMemoryStore, PatternCondition,
    SectionKind, StoreError,
};

pub use crate::analysis::{
    AdvicePlan, DrawView, PatternOutcome, PositionReading, ScoreBand, ScoreReport, SynergyFinding,
};

pub use crate::narrative::{
    GenerationError, InterpretationResult, Narrative, NarrativeSection, Prompt, PromptScope,
    SectionOrigin, ShareSummary, TextGenerator,
};

pub use crate::reading::{ReadingEngine, ReadingRequest, SpreadDrawer};
