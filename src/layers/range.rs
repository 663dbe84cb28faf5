//! Visibility of layers by view resolution.
//!
//! A layer is visible for `min_resolution <= resolution < max_resolution`.
//! A missing lower bound means 0, a missing upper bound means unbounded.

use crate::{core::map::Map, layers::base::LayerNode};

/// Whether `resolution` falls inside the layer's resolution window
pub fn in_resolution_range(layer: &LayerNode, resolution: f64) -> bool {
    let min = layer.properties.min_resolution.unwrap_or(0.0);
    let max = layer.properties.max_resolution.unwrap_or(f64::INFINITY);

    resolution >= min && resolution < max
}

/// Whether the layer is visible at the map's current view resolution.
///
/// Returns `false` when the layer or map is missing, the map has no view, or
/// the view has no resolution yet.
pub fn layer_in_resolution_range(layer: Option<&LayerNode>, map: Option<&Map>) -> bool {
    let (Some(layer), Some(map)) = (layer, map) else {
        return false;
    };

    match map.view().and_then(|view| view.resolution) {
        Some(resolution) => in_resolution_range(layer, resolution),
        None => false,
    }
}

/// Scale-range check expressed in resolution; same bounds as
/// [`in_resolution_range`]
pub fn is_in_scale_range(layer: &LayerNode, resolution: f64) -> bool {
    in_resolution_range(layer, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{geo::Point, view::View};
    use crate::layers::base::{LayerProperties, LayerType};

    fn layer(min: Option<f64>, max: Option<f64>) -> LayerNode {
        LayerNode::leaf(
            LayerProperties::new("l", LayerType::Tile).with_resolution_range(min, max),
            None,
        )
    }

    fn map_at(resolution: Option<f64>) -> Map {
        let mut view = View::default();
        view.center = Some(Point::new(0.0, 0.0));
        view.resolution = resolution;
        Map::new(Some(view))
    }

    #[test]
    fn test_missing_inputs() {
        let l = layer(None, None);
        assert!(!layer_in_resolution_range(None, None));
        assert!(!layer_in_resolution_range(Some(&l), None));
        assert!(!layer_in_resolution_range(Some(&l), Some(&Map::new(None))));
        assert!(!layer_in_resolution_range(Some(&l), Some(&map_at(None))));
    }

    #[test]
    fn test_unbounded_layer() {
        assert!(layer_in_resolution_range(Some(&layer(None, None)), Some(&map_at(Some(42.0)))));
    }

    #[test]
    fn test_min_only() {
        let l = layer(Some(42.0), None);
        assert!(layer_in_resolution_range(Some(&l), Some(&map_at(Some(43.0)))));
        assert!(layer_in_resolution_range(Some(&l), Some(&map_at(Some(42.0)))));
        assert!(!layer_in_resolution_range(Some(&l), Some(&map_at(Some(41.0)))));
    }

    #[test]
    fn test_max_only() {
        let l = layer(None, Some(42.0));
        assert!(layer_in_resolution_range(Some(&l), Some(&map_at(Some(41.0)))));
        assert!(!layer_in_resolution_range(Some(&l), Some(&map_at(Some(42.0)))));
    }

    #[test]
    fn test_min_and_max() {
        let l = layer(Some(42.0), Some(50.0));
        assert!(in_resolution_range(&l, 42.0));
        assert!(in_resolution_range(&l, 46.0));
        assert!(!in_resolution_range(&l, 38.0));
        assert!(!in_resolution_range(&l, 50.0));
        assert!(!in_resolution_range(&l, 54.0));
    }

    #[test]
    fn test_is_in_scale_range() {
        let mut l = layer(None, None);
        assert!(is_in_scale_range(&l, 5.0));

        l.set("minResolution", 0.0);
        l.set("maxResolution", 10.0);
        assert!(is_in_scale_range(&l, 5.0));
        assert!(!is_in_scale_range(&l, 15.0));
    }
}
