use maplet_utils::prelude::*;
use serde_json::json;

/// Layer tree scenarios the way a map application builds and queries them
#[cfg(test)]
mod layer_tree_tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn vector_layer(name: &str) -> LayerNode {
        LayerNode::leaf(
            LayerProperties::new(name, LayerType::Vector).with_name(name),
            Some(DataSource::new(SourceKind::Vector)),
        )
    }

    fn tile_wms(name: &str) -> LayerNode {
        LayerNode::leaf(
            LayerProperties::new(name, LayerType::Tile).with_name(name),
            Some(DataSource::new(SourceKind::TileWms)),
        )
    }

    fn group(name: Option<&str>, layers: Vec<LayerNode>) -> LayerNode {
        let mut props = LayerProperties::new(name.unwrap_or("group"), LayerType::Group);
        props.name = name.map(str::to_string);
        LayerNode::group(props, layers)
    }

    /// root: layer1, layer2, nestedLayerGroup[subLayer]
    fn nested_map() -> Map {
        let mut map = Map::default();
        map.set_layer_group(group(
            None,
            vec![
                tile_wms("layer1"),
                tile_wms("layer2"),
                group(Some("nestedLayerGroup"), vec![tile_wms("subLayer")]),
            ],
        ));
        map
    }

    #[test]
    fn test_layers_by_group_flattens_leaves() {
        init_logging();
        let layer_group = group(
            None,
            vec![
                vector_layer("Layer 1"),
                vector_layer("Layer 2"),
                group(
                    None,
                    vec![
                        vector_layer("Sublayer 1"),
                        vector_layer("Sublayer 2"),
                        group(
                            None,
                            vec![vector_layer("Subsublayer 1"), vector_layer("Subsublayer 2")],
                        ),
                        vector_layer("Sublayer 3"),
                    ],
                ),
                vector_layer("Layer 3"),
            ],
        );

        let mut map = Map::default();
        map.set_layer_group(layer_group);

        let got = layers_by_group(&map.layer_group);
        assert_eq!(got.len(), 8);
    }

    #[test]
    fn test_all_layers_of_map() {
        let map = nested_map();
        let names: Vec<Option<&str>> = all_layers(&map, None).iter().map(|l| l.name()).collect();

        assert_eq!(
            names,
            [
                Some("layer1"),
                Some("layer2"),
                Some("nestedLayerGroup"),
                Some("subLayer")
            ]
        );
    }

    #[test]
    fn test_all_layers_of_group() {
        let map = nested_map();
        let nested = layer_by_name(&map, "nestedLayerGroup").unwrap();

        let got = all_layers(nested, None);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name(), Some("subLayer"));
    }

    #[test]
    fn test_all_layers_with_filter() {
        let map = nested_map();
        let only_layer1 = |l: &LayerNode| l.name() == Some("layer1");

        let got = all_layers(&map, Some(&only_layer1));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id(), "layer1");
    }

    #[test]
    fn test_position_from_map() {
        let map = nested_map();
        let layer1 = layer_by_name(&map, "layer1").unwrap();

        let info = position(layer1, Container::Map(&map)).unwrap();
        assert_eq!(info.position, 0);
        assert!(std::ptr::eq(info.group_layer, &map.layer_group));
    }

    #[test]
    fn test_position_from_group() {
        let map = nested_map();
        let nested = layer_by_name(&map, "nestedLayerGroup").unwrap();
        let sub_layer = layer_by_name(&map, "subLayer").unwrap();

        let info = position(sub_layer, Container::Group(nested)).unwrap();
        assert_eq!(
            info,
            LayerPositionInfo {
                position: 0,
                group_layer: nested
            }
        );
    }

    #[test]
    fn test_position_is_found_recursively() {
        let map = nested_map();
        let nested = layer_by_name(&map, "nestedLayerGroup").unwrap();
        let sub_layer = layer_by_name(&map, "subLayer").unwrap();

        let info = position(sub_layer, Container::Map(&map)).unwrap();
        assert_eq!(info.position, 0);
        assert!(std::ptr::eq(info.group_layer, nested));
    }

    #[test]
    fn test_position_of_foreign_layer() {
        let map = nested_map();
        let stranger = tile_wms("layer1");

        assert!(position(&stranger, Container::Map(&map)).is_none());
        assert!(position(&stranger, Container::Group(&map.layer_group)).is_none());
    }

    #[test]
    fn test_layer_by_name() {
        let mut map = Map::default();
        map.add_layer(tile_wms("Peter"));

        assert_eq!(layer_by_name(&map, "Peter").map(|l| l.id()), Some("Peter"));
        assert!(layer_by_name(&map, "OSM-WMS").is_none());
    }

    #[test]
    fn test_layer_by_name_param() {
        let mut map = Map::default();
        assert!(layer_by_name_param(&map, "OSM-WMS").is_none());

        let mut layer = LayerNode::leaf(
            LayerProperties::new("osm", LayerType::Tile),
            Some(
                DataSource::wms(SourceKind::TileWms, "https://ows.terrestris.de/osm/service?", "OSM-WMS")
                    .with_param("TILED", true),
            ),
        );
        layer.set("key", "prop");
        map.add_layer(layer);

        let got = layer_by_name_param(&map, "OSM-WMS").unwrap();
        assert_eq!(got.properties.layer_type, LayerType::Tile);
        assert_eq!(got.get("key"), Some(json!("prop")));
    }

    #[test]
    fn test_layers_by_property() {
        let mut map = Map::default();
        let mut layer = tile_wms("l");
        layer.set("key", "prop");
        map.add_layer(layer);

        let got = layers_by_property(&map, "key", &json!("prop"));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].get("key"), Some(json!("prop")));
    }

    #[test]
    fn test_layer_by_feature() {
        let namespace = "BVB_NAMESPACE";
        let mut map = Map::default();
        let mut layer = LayerNode::leaf(
            LayerProperties::new("bvb", LayerType::Tile),
            Some(DataSource::wms(
                SourceKind::TileWms,
                "https://ows.terrestris.de/osm/service?",
                format!("{}:BVB", namespace),
            )),
        );
        layer.set("key", "prop");
        map.add_layer(layer);

        let feature = Feature::point(1909.0, 1909.0).with_id("BVB.1909");
        let got = layer_by_feature(&map, &feature, &[namespace]).unwrap();
        assert_eq!(got.get("key"), Some(json!("prop")));

        let invalid = Feature::point(1909.0, 1909.0).with_id("BVB_INVALID.1909");
        assert!(layer_by_feature(&map, &invalid, &[namespace]).is_none());
    }

    #[test]
    fn test_queries_on_tree_loaded_from_json() -> anyhow::Result<()> {
        let map = Map::from_json(
            &json!({
                "view": {"resolution": 46.0},
                "layerGroup": {
                    "id": "root",
                    "layers": [
                        {"id": "base", "name": "Basemap", "minResolution": 42.0, "maxResolution": 50.0,
                         "source": {"kind": "tileWms", "url": "https://x/wms", "params": {"LAYERS": "ns:base"}}},
                        {"id": "overlays", "layers": [
                            {"id": "pois", "name": "POIs", "maxResolution": 10.0,
                             "properties": {"topic": "tourism"}}
                        ]}
                    ]
                }
            })
            .to_string(),
        )?;

        let base = layer_by_name_param(&map, "ns:base").expect("base layer");
        let pois = layer_by_name(&map, "POIs").expect("pois layer");

        assert!(layer_in_resolution_range(Some(base), Some(&map)));
        assert!(!layer_in_resolution_range(Some(pois), Some(&map)));
        assert_eq!(layers_by_property(&map, "topic", &json!("tourism")).len(), 1);
        Ok(())
    }
}
