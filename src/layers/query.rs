//! Layer lookups on top of the tree walker.
//!
//! `layer_by_name` and `layer_by_name_param` return the first match only,
//! `layers_by_property` returns every match.

use crate::{
    data::feature::Feature,
    layers::{base::LayerNode, tree::flatten},
};
use serde_json::Value;

pub use crate::layers::tree::LayerRoot;

/// Every layer and group below `root` (the root itself excluded), optionally
/// filtered
pub fn all_layers<'a, R>(
    root: &'a R,
    predicate: Option<&dyn Fn(&LayerNode) -> bool>,
) -> Vec<&'a LayerNode>
where
    R: LayerRoot + ?Sized,
{
    flatten(root, predicate)
}

/// First layer whose display name equals `name`
pub fn layer_by_name<'a, R>(root: &'a R, name: &str) -> Option<&'a LayerNode>
where
    R: LayerRoot + ?Sized,
{
    flatten(root, None)
        .into_iter()
        .find(|layer| layer.name() == Some(name))
}

/// First leaf layer whose source requests the service layer `name`
pub fn layer_by_name_param<'a, R>(root: &'a R, name: &str) -> Option<&'a LayerNode>
where
    R: LayerRoot + ?Sized,
{
    flatten(root, None)
        .into_iter()
        .find(|layer| source_layer_name(layer).as_deref() == Some(name))
}

/// All layers whose property `key` equals `value`
pub fn layers_by_property<'a, R>(root: &'a R, key: &str, value: &Value) -> Vec<&'a LayerNode>
where
    R: LayerRoot + ?Sized,
{
    flatten(root, None)
        .into_iter()
        .filter(|layer| layer.get(key).as_ref() == Some(value))
        .collect()
}

/// The layer a feature was requested from.
///
/// The feature id `<localName>.<localId>` is turned into the qualified names
/// `<namespace>:<localName>`; namespaces are tried in the given order and the
/// first layer requesting one of them wins.
pub fn layer_by_feature<'a, R>(
    root: &'a R,
    feature: &Feature,
    namespaces: &[&str],
) -> Option<&'a LayerNode>
where
    R: LayerRoot + ?Sized,
{
    let Some(local_name) = feature.local_name() else {
        log::debug!("layer_by_feature: feature has no id");
        return None;
    };

    let layers = flatten(root, None);
    namespaces.iter().find_map(|namespace| {
        let qualified = format!("{}:{}", namespace, local_name);
        layers
            .iter()
            .copied()
            .find(|layer| source_layer_name(layer).as_deref() == Some(qualified.as_str()))
    })
}

fn source_layer_name(layer: &LayerNode) -> Option<String> {
    layer.source().and_then(|source| source.layer_name())
}
