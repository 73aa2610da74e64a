//! Draw analysis.
//!
//! Every analyzer reads a `DrawView`, which resolves each drawn card
//! against the catalog and layout once. Analyzers are pure: the same view
//! and snapshot always give the same output.
//!
//! ## Key Types
//!
//! - `DrawView`: resolved draw with aggregate counts
//! - `PositionInterpreter`: meaning of one card in one position
//! - `RelationshipAnalyzer`: findings between positions
//! - `PatternMatcher`: best structural pattern for the whole draw
//! - `SynergyAnalyzer`: notable card combinations
//! - `ScoreEngine`: compatibility score for weighted layouts
//! - `AdvicePlanner`: timeframe-grouped action suggestions

pub mod advice;
pub mod draw;
pub mod keywords;
pub mod pattern;
pub mod position;
pub mod relationship;
pub mod score;
pub mod synergy;

pub use advice::{AdviceItem, AdvicePlan, AdvicePlanner, AdviceSource};
pub use draw::{DrawCounts, DrawSlot, DrawView};
pub use keywords::{extract_keywords, topic_keyword};
pub use pattern::{
    default_ladder, ConditionEvaluator, LadderRung, MatchedPattern, PatternEvidence,
    PatternMatcher, PatternOutcome, PatternSource,
};
pub use position::{card_energy, topic_context, PositionInterpreter, PositionReading};
pub use relationship::{consecutive_runs, PairText, Probe, RelationshipAnalyzer, STANDARD_PROBES};
pub use score::{ScoreBand, ScoreContribution, ScoreEngine, ScoreReport};
pub use synergy::{SynergyAnalyzer, SynergyFinding, SynergySource, DEFAULT_MAX_SYNERGIES};
