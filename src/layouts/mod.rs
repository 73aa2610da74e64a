//! Spread layouts: positions, roles, guiding questions, score weights.
//!
//! ## Built-in Layouts
//!
//! | id | cards |
//! |----|-------|
//! | `one_card` | 1 |
//! | `three_card_timeline` | 3 |
//! | `seven_star` | 7 |
//! | `celtic_cross` | 10 |
//! | `cup_of_relationship` | 11 |
//!
//! Hosts can register more layouts from JSON; nothing in the analyzers is
//! keyed on these ids.

pub mod builtin;
pub mod layout;
pub mod position;
pub mod registry;
pub mod weights;

pub use layout::{Layout, LayoutId, TopicQuestion};
pub use position::{PositionDefinition, PositionRole};
pub use registry::LayoutRegistry;
pub use weights::{PositionWeight, ScoreWeights};
