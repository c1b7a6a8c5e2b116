// Entity Models
//
// Categories are the only entity the normalizer knows about:
// - Stable identity (slug id) that never changes
// - User-facing values (name, icon, description)
// - Registry for lookups by id, name, and type

pub mod category;

pub use category::{Category, CategoryType, CategoryRegistry};
