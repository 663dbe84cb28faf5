pub mod interaction;

// Re-export the essential types
pub use interaction::{interactions_by_kind, interactions_by_name, Interaction, InteractionKind};
