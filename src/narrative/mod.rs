//! Narrative assembly and reading output.
//!
//! ## Key Types
//!
//! - `TextGenerator`: optional async source of remote text
//! - `NarrativeAssembler`: template, procedural and remote text per section
//! - `InterpretationResult`: everything produced for one reading
//! - `ShareSummary`: short plain-text projection of a result

pub mod assembler;
pub mod generator;
pub mod result;
pub mod summary;

pub use assembler::NarrativeAssembler;
pub use generator::{
    parse_document, GenerationError, Prompt, PromptBuilder, PromptScope, TextGenerator,
};
pub use result::{InterpretationResult, Narrative, NarrativeSection, SectionOrigin};
pub use summary::{truncate_chars, ShareSummary};
