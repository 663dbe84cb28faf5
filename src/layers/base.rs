use crate::{layers::source::DataSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerType {
    Tile,
    Image,
    Vector,
    Group,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::Image => write!(f, "image"),
            LayerType::Vector => write!(f, "vector"),
            LayerType::Group => write!(f, "group"),
        }
    }
}

/// Properties shared by leaf layers and groups
#[derive(Debug, Clone, PartialEq)]
pub struct LayerProperties {
    pub id: String,
    /// Display name
    pub name: Option<String>,
    pub layer_type: LayerType,
    pub opacity: f32,
    pub visible: bool,
    /// Lower visibility bound (inclusive), map units per pixel
    pub min_resolution: Option<f64>,
    /// Upper visibility bound (exclusive), map units per pixel
    pub max_resolution: Option<f64>,
    /// Free-form key/value properties set by the application
    pub options: JsonMap<String, Value>,
}

impl LayerProperties {
    pub fn new(id: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            id: id.into(),
            name: None,
            layer_type,
            opacity: 1.0,
            visible: true,
            min_resolution: None,
            max_resolution: None,
            options: JsonMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_resolution_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_resolution = min;
        self.max_resolution = max;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Reads a property by key.
    ///
    /// Built-in keys (`id`, `name`, `layerType`, `opacity`, `visible`,
    /// `minResolution`, `maxResolution`) come from the typed fields, anything
    /// else from the free-form options.
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::from(self.id.clone())),
            "name" => self.name.clone().map(Value::from),
            "layerType" => Some(Value::from(self.layer_type.to_string())),
            "opacity" => Some(Value::from(self.opacity)),
            "visible" => Some(Value::from(self.visible)),
            "minResolution" => self.min_resolution.map(Value::from),
            "maxResolution" => self.max_resolution.map(Value::from),
            _ => self.options.get(key).cloned(),
        }
    }

    /// Writes a property by key, routing built-in keys to the typed fields.
    ///
    /// A value of the wrong type for a built-in key clears optional fields
    /// and leaves required ones untouched.
    pub fn set(&mut self, key: &str, value: Value) {
        match key {
            "id" => {
                if let Some(id) = value.as_str() {
                    self.id = id.to_string();
                }
            }
            "name" => self.name = value.as_str().map(str::to_string),
            "opacity" => {
                if let Some(opacity) = value.as_f64() {
                    self.opacity = (opacity as f32).clamp(0.0, 1.0);
                }
            }
            "visible" => {
                if let Some(visible) = value.as_bool() {
                    self.visible = visible;
                }
            }
            "minResolution" => self.min_resolution = value.as_f64(),
            "maxResolution" => self.max_resolution = value.as_f64(),
            _ => {
                self.options.insert(key.to_string(), value);
            }
        }
    }
}

impl Default for LayerProperties {
    fn default() -> Self {
        Self::new("default", LayerType::Tile)
    }
}

/// Either a group owning ordered children, or a leaf with an optional source
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    Group { children: Vec<LayerNode> },
    Leaf { source: Option<DataSource> },
}

/// A node of the layer tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LayerNodeRepr", into = "LayerNodeRepr")]
pub struct LayerNode {
    pub properties: LayerProperties,
    pub kind: LayerKind,
}

impl LayerNode {
    pub fn group(properties: LayerProperties, children: Vec<LayerNode>) -> Self {
        Self {
            properties,
            kind: LayerKind::Group { children },
        }
    }

    pub fn leaf(properties: LayerProperties, source: Option<DataSource>) -> Self {
        Self {
            properties,
            kind: LayerKind::Leaf { source },
        }
    }

    /// Parses a layer tree description from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn id(&self) -> &str {
        &self.properties.id
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.name.as_deref()
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, LayerKind::Group { .. })
    }

    /// Children of a group; empty for a leaf
    pub fn children(&self) -> &[LayerNode] {
        match &self.kind {
            LayerKind::Group { children } => children,
            LayerKind::Leaf { .. } => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<LayerNode>> {
        match &mut self.kind {
            LayerKind::Group { children } => Some(children),
            LayerKind::Leaf { .. } => None,
        }
    }

    /// Data source of a leaf; always `None` for a group
    pub fn source(&self) -> Option<&DataSource> {
        match &self.kind {
            LayerKind::Leaf { source } => source.as_ref(),
            LayerKind::Group { .. } => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.properties.get(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.properties.set(key, value.into());
    }
}

/// Serialized shape of a layer node: groups carry `layers`, leaves `source`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LayerNodeRepr {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layer_type: Option<LayerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_resolution: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_resolution: Option<f64>,
    #[serde(skip_serializing_if = "JsonMap::is_empty")]
    properties: JsonMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layers: Option<Vec<LayerNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<DataSource>,
}

impl From<LayerNodeRepr> for LayerNode {
    fn from(repr: LayerNodeRepr) -> Self {
        let layer_type = repr.layer_type.unwrap_or(match (&repr.layers, &repr.source) {
            (Some(_), _) => LayerType::Group,
            (None, Some(source)) if source.kind == crate::layers::source::SourceKind::Vector => {
                LayerType::Vector
            }
            (None, Some(source)) if source.kind == crate::layers::source::SourceKind::ImageWms => {
                LayerType::Image
            }
            _ => LayerType::Tile,
        });

        let properties = LayerProperties {
            id: repr.id,
            name: repr.name,
            layer_type,
            opacity: repr.opacity.unwrap_or(1.0).clamp(0.0, 1.0),
            visible: repr.visible.unwrap_or(true),
            min_resolution: repr.min_resolution,
            max_resolution: repr.max_resolution,
            options: repr.properties,
        };

        match repr.layers {
            Some(children) => LayerNode::group(properties, children),
            None => LayerNode::leaf(properties, repr.source),
        }
    }
}

impl From<LayerNode> for LayerNodeRepr {
    fn from(node: LayerNode) -> Self {
        let LayerNode { properties, kind } = node;
        let (layers, source) = match kind {
            LayerKind::Group { children } => (Some(children), None),
            LayerKind::Leaf { source } => (None, source),
        };

        LayerNodeRepr {
            id: properties.id,
            name: properties.name,
            layer_type: Some(properties.layer_type),
            opacity: Some(properties.opacity),
            visible: Some(properties.visible),
            min_resolution: properties.min_resolution,
            max_resolution: properties.max_resolution,
            properties: properties.options,
            layers,
            source,
        }
    }
}
