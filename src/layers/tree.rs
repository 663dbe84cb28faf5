//! Walking the layer tree: flattening and positional lookup.
//!
//! Nodes are compared by identity (`std::ptr::eq`), never by value, so two
//! equal-looking layers in different groups stay distinguishable.

use crate::{core::map::Map, layers::base::LayerNode};

/// Anything whose layer tree can be searched: a map (through its root group)
/// or a layer node itself
pub trait LayerRoot {
    /// The node whose descendants are searched
    fn root_group(&self) -> &LayerNode;
}

impl LayerRoot for Map {
    fn root_group(&self) -> &LayerNode {
        &self.layer_group
    }
}

impl LayerRoot for LayerNode {
    fn root_group(&self) -> &LayerNode {
        self
    }
}

/// Where to look for a node in [`position`]
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    /// Only the direct children of this group
    Group(&'a LayerNode),
    /// The whole tree below the map's root group
    Map(&'a Map),
}

/// Index of a node within its immediate parent group
#[derive(Debug, Clone, Copy)]
pub struct LayerPositionInfo<'a> {
    pub position: usize,
    pub group_layer: &'a LayerNode,
}

impl PartialEq for LayerPositionInfo<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && std::ptr::eq(self.group_layer, other.group_layer)
    }
}

/// All descendants of `root` in pre-order, groups before their children.
///
/// The root node itself is never part of the result. `predicate` filters the
/// output only; children of a rejected group are still visited.
pub fn flatten<'a, R>(root: &'a R, predicate: Option<&dyn Fn(&LayerNode) -> bool>) -> Vec<&'a LayerNode>
where
    R: LayerRoot + ?Sized,
{
    let mut nodes = Vec::new();
    collect_descendants(root.root_group(), &mut nodes);

    match predicate {
        Some(keep) => nodes.into_iter().filter(|node| keep(*node)).collect(),
        None => nodes,
    }
}

fn collect_descendants<'a>(group: &'a LayerNode, out: &mut Vec<&'a LayerNode>) {
    for child in group.children() {
        out.push(child);
        collect_descendants(child, out);
    }
}

/// Leaf layers below `group`, recursively, in tree order; groups are
/// descended into but not reported.
pub fn layers_by_group(group: &LayerNode) -> Vec<&LayerNode> {
    let mut leaves = Vec::new();
    collect_leaves(group, &mut leaves);
    leaves
}

fn collect_leaves<'a>(group: &'a LayerNode, out: &mut Vec<&'a LayerNode>) {
    for child in group.children() {
        if child.is_group() {
            collect_leaves(child, out);
        } else {
            out.push(child);
        }
    }
}

/// Finds the parent group of `node` and its index there.
///
/// With [`Container::Group`] only direct children are considered. With
/// [`Container::Map`] nested groups are searched depth-first until the node
/// turns up as a direct child of one of them.
pub fn position<'a>(node: &LayerNode, container: Container<'a>) -> Option<LayerPositionInfo<'a>> {
    match container {
        Container::Group(group) => direct_position(node, group),
        Container::Map(map) => nested_position(node, &map.layer_group),
    }
}

fn direct_position<'a>(node: &LayerNode, group: &'a LayerNode) -> Option<LayerPositionInfo<'a>> {
    group
        .children()
        .iter()
        .position(|child| std::ptr::eq(child, node))
        .map(|position| LayerPositionInfo {
            position,
            group_layer: group,
        })
}

fn nested_position<'a>(node: &LayerNode, group: &'a LayerNode) -> Option<LayerPositionInfo<'a>> {
    direct_position(node, group).or_else(|| {
        group
            .children()
            .iter()
            .filter(|child| child.is_group())
            .find_map(|child| nested_position(node, child))
    })
}
