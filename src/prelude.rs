//! Prelude module for common maplet-utils types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use maplet_utils::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    config::{FitOptions, LegendOptions, ScaleConvention, ScaleOptions},
    geo::Point,
    map::Map,
    scale::{
        parse_scale, resolution_for_scale, round_scale, scale_for_resolution, zoom_for_scale,
        zoom_for_scale_str,
    },
    units::{meters_per_unit, meters_per_unit_for, Unit},
    view::View,
};

pub use crate::layers::{
    base::{LayerKind, LayerNode, LayerProperties, LayerType},
    legend::legend_graphic_url,
    query::{
        all_layers, layer_by_feature, layer_by_name, layer_by_name_param, layers_by_property,
        LayerRoot,
    },
    range::{in_resolution_range, is_in_scale_range, layer_in_resolution_range},
    source::{DataSource, SourceKind},
    tree::{flatten, layers_by_group, position, Container, LayerPositionInfo},
};

pub use crate::data::{feature::Feature, fit::zoom_to_features};

pub use crate::input::interaction::{
    interactions_by_kind, interactions_by_name, Interaction, InteractionKind,
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet, FxHasher};
