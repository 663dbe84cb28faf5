use crate::{
    core::view::View,
    input::interaction::Interaction,
    layers::base::{LayerNode, LayerProperties, LayerType},
    Result,
};
use serde::{Deserialize, Serialize};

/// Snapshot of the host map: its root layer group, its view and the
/// interactions registered on it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Map {
    /// Synthetic root group; never reported by layer queries itself
    #[serde(default = "Map::default_layer_group")]
    pub layer_group: LayerNode,
    #[serde(default)]
    pub view: Option<View>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl Map {
    /// Creates a map with an empty root group and the given view
    pub fn new(view: Option<View>) -> Self {
        Self {
            layer_group: Self::default_layer_group(),
            view,
            interactions: Vec::new(),
        }
    }

    fn default_layer_group() -> LayerNode {
        LayerNode::group(LayerProperties::new("root", LayerType::Group), Vec::new())
    }

    /// Parses a map description from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replaces the root layer group
    pub fn set_layer_group(&mut self, group: LayerNode) {
        self.layer_group = group;
    }

    /// Appends a layer to the root group
    pub fn add_layer(&mut self, layer: LayerNode) {
        if let Some(children) = self.layer_group.children_mut() {
            children.push(layer);
        }
    }

    pub fn add_interaction(&mut self, interaction: Interaction) {
        self.interactions.push(interaction);
    }

    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut View> {
        self.view.as_mut()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(Some(View::default()))
    }
}
