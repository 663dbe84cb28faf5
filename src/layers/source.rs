use crate::core::constants::LAYERS_PARAM;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value};

/// Kind of service behind a layer's data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    #[default]
    TileWms,
    ImageWms,
    Vector,
    Xyz,
}

impl SourceKind {
    pub fn is_wms(&self) -> bool {
        matches!(self, SourceKind::TileWms | SourceKind::ImageWms)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::TileWms => write!(f, "tile-wms"),
            SourceKind::ImageWms => write!(f, "image-wms"),
            SourceKind::Vector => write!(f, "vector"),
            SourceKind::Xyz => write!(f, "xyz"),
        }
    }
}

/// Where a leaf layer gets its data from: service URL(s) and request parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSource {
    pub kind: SourceKind,
    pub url: Option<String>,
    pub urls: Vec<String>,
    pub params: JsonMap<String, Value>,
}

impl DataSource {
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// A WMS source requesting `layers` from `url`
    pub fn wms(kind: SourceKind, url: impl Into<String>, layers: impl Into<String>) -> Self {
        let layers: String = layers.into();
        Self::new(kind).with_url(url).with_param(LAYERS_PARAM, layers)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = urls.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// The single URL, or the first of the URL list
    pub fn first_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .or_else(|| self.urls.first().map(String::as_str))
            .filter(|url| !url.is_empty())
    }

    /// Request parameter by key; WMS parameter names are case-insensitive
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key).or_else(|| {
            self.params
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
    }

    /// The layer name(s) requested from the service (`LAYERS`)
    pub fn layer_name(&self) -> Option<String> {
        self.param(LAYERS_PARAM).and_then(value_to_param_string)
    }
}

/// Renders a scalar JSON value the way it appears in a query string
pub(crate) fn value_to_param_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_to_param_string).collect();
            Some(parts.join(","))
        }
        Value::Null | Value::Object(_) => None,
    }
}
