//! Card system: definitions, drawn cards, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier for a card definition
//! - `Card`: Static card data (arcana, suit, number, element, keywords)
//! - `DrawnCard`: A card placed in a layout position with an orientation
//! - `CardCatalog`: Card definition lookup, with the standard 78-card deck

pub mod attributes;
pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;

pub use attributes::{Arcana, Element, Suit};
pub use definition::{rank_name, Card, CardId, Keywords};
pub use instance::DrawnCard;
pub use registry::CardCatalog;
