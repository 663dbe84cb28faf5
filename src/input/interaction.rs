use crate::core::map::Map;
use serde::{Deserialize, Serialize};

/// Kinds of map interactions a host can register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionKind {
    DragPan,
    DragRotateAndZoom,
    DragZoom,
    MouseWheelZoom,
    DoubleClickZoom,
    KeyboardPan,
    Draw,
    Modify,
    Select,
}

/// An interaction registered on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub kind: InteractionKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Interaction {
    pub fn new(kind: InteractionKind) -> Self {
        Self {
            kind,
            name: None,
            active: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// All interactions of the map carrying the given name
pub fn interactions_by_name<'a>(map: &'a Map, name: &str) -> Vec<&'a Interaction> {
    map.interactions
        .iter()
        .filter(|interaction| interaction.name.as_deref() == Some(name))
        .collect()
}

/// All interactions of the map of the given kind
pub fn interactions_by_kind(map: &Map, kind: InteractionKind) -> Vec<&Interaction> {
    map.interactions
        .iter()
        .filter(|interaction| interaction.kind == kind)
        .collect()
}
