//! Fitting the map view to features.

use crate::{
    core::{bounds::Bounds, config::FitOptions, map::Map},
    data::feature::Feature,
    MapError, Result,
};

/// Union of the extents of all features.
///
/// Fails on an empty slice and on any feature without a geometry.
pub fn features_extent(features: &[Feature]) -> Result<Bounds> {
    if features.is_empty() {
        return Err(MapError::InvalidArgument(
            "no features to compute an extent for".to_string(),
        ));
    }

    let mut extent = Bounds::empty();
    for (index, feature) in features.iter().enumerate() {
        let feature_extent = feature.extent().ok_or_else(|| {
            MapError::MissingGeometry(
                feature
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("feature #{}", index)),
            )
        })?;
        extent.extend_bounds(&feature_extent);
    }

    Ok(extent)
}

/// Centers and zooms the map's view so all `features` are visible
pub fn zoom_to_features(map: &mut Map, features: &[Feature]) -> Result<()> {
    zoom_to_features_with(map, features, &FitOptions::default())
}

/// [`zoom_to_features`] with explicit padding and snapping options
pub fn zoom_to_features_with(map: &mut Map, features: &[Feature], options: &FitOptions) -> Result<()> {
    let extent = features_extent(features)?;
    let view = map
        .view_mut()
        .ok_or_else(|| MapError::InvalidArgument("map has no view".to_string()))?;

    view.fit(&extent, options);
    Ok(())
}
