//! WMS GetLegendGraphic URLs for layers.

use crate::{
    core::config::LegendOptions,
    layers::{base::LayerNode, source::value_to_param_string},
};
use serde_json::{Map as JsonMap, Value};

/// Builds a GetLegendGraphic URL for a WMS layer with the default options.
///
/// See [`legend_graphic_url_with`].
pub fn legend_graphic_url(layer: &LayerNode, extra_params: Option<&JsonMap<String, Value>>) -> Option<String> {
    legend_graphic_url_with(layer, extra_params, &LegendOptions::default())
}

/// Builds a GetLegendGraphic URL for a WMS layer.
///
/// The service URL is the source's `url`, or the first of its `urls`. Any
/// query string already on it is kept as is and exactly one `?` ends up in the
/// result. `extra_params` come last; a key matching a standard parameter
/// (ignoring case) replaces its value, other keys are appended. Keys are
/// written as given, values are percent-encoded.
///
/// Returns `None` if the layer has no WMS source, no URL or no `LAYERS`.
pub fn legend_graphic_url_with(
    layer: &LayerNode,
    extra_params: Option<&JsonMap<String, Value>>,
    options: &LegendOptions,
) -> Option<String> {
    let Some(source) = layer.source().filter(|source| source.kind.is_wms()) else {
        log::warn!("layer '{}' has no WMS source, no legend URL", layer.id());
        return None;
    };
    let Some(base_url) = source.first_url() else {
        log::warn!("WMS source of layer '{}' has no URL", layer.id());
        return None;
    };

    let Some(layer_name) = source.layer_name().filter(|name| !name.is_empty()) else {
        log::warn!("WMS source of layer '{}' names no LAYERS", layer.id());
        return None;
    };

    let mut params: Vec<(String, String)> = vec![
        ("LAYER".to_string(), layer_name),
        ("VERSION".to_string(), options.version.clone()),
        ("SERVICE".to_string(), options.service.clone()),
        ("REQUEST".to_string(), options.request.clone()),
        ("FORMAT".to_string(), options.format.clone()),
    ];

    for (key, value) in extra_params.into_iter().flatten() {
        let value = match value {
            Value::Null => String::new(),
            Value::Object(_) => value.to_string(),
            other => value_to_param_string(other).unwrap_or_default(),
        };

        match params.iter_mut().find(|entry| entry.0.eq_ignore_ascii_case(key)) {
            Some(existing) => existing.1 = value,
            None => params.push((key.clone(), value)),
        }
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode_component(v)))
        .collect::<Vec<_>>()
        .join("&");

    Some(append_query(base_url, &query))
}

/// Appends `query` to `base`, adding `?` or `&` only when needed
fn append_query(base: &str, query: &str) -> String {
    if !base.contains('?') {
        format!("{}?{}", base, query)
    } else if base.ends_with('?') || base.ends_with('&') {
        format!("{}{}", base, query)
    } else {
        format!("{}&{}", base, query)
    }
}

/// Percent-encodes everything but RFC 3986 unreserved characters
fn encode_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
