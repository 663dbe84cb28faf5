//! # maplet-utils
//!
//! Stateless helpers for map applications built on maplet.
//!
//! The crate covers the numeric and search chores that map UIs keep
//! re-implementing: converting between scale and resolution, finding the zoom
//! level closest to a scale, walking and querying nested layer groups,
//! checking layer visibility against the view resolution, building WMS
//! legend URLs and fitting a view to a set of features.

pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    bounds::Bounds,
    geo::Point,
    map::Map,
    scale::{resolution_for_scale, round_scale, scale_for_resolution, zoom_for_scale},
    units::Unit,
    view::View,
};

pub use layers::{
    base::{LayerKind, LayerNode, LayerProperties, LayerType},
    legend::legend_graphic_url,
    query::{all_layers, layer_by_feature, layer_by_name, layer_by_name_param, layers_by_property},
    range::{in_resolution_range, is_in_scale_range, layer_in_resolution_range},
    source::{DataSource, SourceKind},
    tree::{flatten, layers_by_group, position, Container, LayerPositionInfo},
};

pub use data::{feature::Feature, fit::zoom_to_features};

pub use input::interaction::{interactions_by_kind, interactions_by_name, Interaction, InteractionKind};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Feature has no geometry: {0}")]
    MissingGeometry(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger` as the `log` backend, honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
