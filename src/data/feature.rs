use crate::core::bounds::Bounds;
use geo::BoundingRect;
use geo_types::Geometry;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value};

/// A map feature as exposed by the host: an optional service-assigned id,
/// an optional geometry in map projection units and free-form properties
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    /// Id of the form `<localName>.<localId>`, e.g. `roads.42`
    pub id: Option<String>,
    pub geometry: Option<Geometry<f64>>,
    pub properties: JsonMap<String, Value>,
}

impl Feature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_geometry(mut self, geometry: impl Into<Geometry<f64>>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    /// Creates a point feature
    pub fn point(x: f64, y: f64) -> Self {
        Self::new().with_geometry(geo_types::Point::new(x, y))
    }

    /// The part of the id before the last `.`; the whole id if it has none
    pub fn local_name(&self) -> Option<&str> {
        let id = self.id.as_deref()?;
        Some(id.rsplit_once('.').map_or(id, |(name, _)| name))
    }

    /// Bounding box of the geometry, if there is a non-empty one
    pub fn extent(&self) -> Option<Bounds> {
        self.geometry
            .as_ref()
            .and_then(|geometry| geometry.bounding_rect())
            .map(Bounds::from)
    }
}
