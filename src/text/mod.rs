//! Local text generation.
//!
//! - `template`: `{{placeholder}}` rendering for table-driven text
//! - `phrases`: fixed phrase tables keyed by topic and energy
//! - `fallback`: procedural writer used when no template or remote text
//!   is available

pub mod fallback;
pub mod phrases;
pub mod template;

pub use fallback::{procedural_section, ReadingFacts};
pub use template::{TemplateRenderer, TemplateVars};
