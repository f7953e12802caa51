use hashbrown::HashSet;
use indextree::NodeId;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_LAYOUT_HEIGHT, DEFAULT_LAYOUT_WIDTH},
    geometry::{split_rect, Rect, Split},
    layout_manager::{ContainerLayout, LayoutTree, LeafLayout, TreeQuery},
    utils::error::{NavError, NavResult},
};

/// Represents a whole layout file. The top level acts as the root container,
/// covering `width` by `height` cells.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub split: Option<Split>,
    #[serde(default)]
    pub child: Vec<NodeConfig>,
}

/// A node in the layout file. Anything with a `child` list is a container,
/// everything else is a pane.
#[derive(Clone, Debug)]
pub enum NodeConfig {
    Container(ContainerConfig),
    Leaf(LeafConfig),
}

#[derive(Clone, Debug)]
pub struct ContainerConfig {
    pub name: Option<String>,
    pub split: Option<Split>,
    pub ratio: Option<u32>,
    pub rect: Option<[i32; 4]>,
    pub child: Vec<NodeConfig>,
}

#[derive(Clone, Debug)]
pub struct LeafConfig {
    pub name: String,
    pub uuid: Option<Uuid>,
    pub ratio: Option<u32>,
    pub rect: Option<[i32; 4]>,
}

/// Every key a node may have. Used to read a node before deciding what it is,
/// so that mistakes are reported against the actual key.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNodeConfig {
    name: Option<String>,
    uuid: Option<Uuid>,
    split: Option<Split>,
    ratio: Option<u32>,
    rect: Option<[i32; 4]>,
    child: Option<Vec<NodeConfig>>,
}

impl<'de> Deserialize<'de> for NodeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawNodeConfig::deserialize(deserializer)?;

        match raw.child {
            Some(child) => {
                if raw.uuid.is_some() {
                    return Err(serde::de::Error::custom(
                        "a container can't have a 'uuid', only panes can",
                    ));
                }

                Ok(NodeConfig::Container(ContainerConfig {
                    name: raw.name,
                    split: raw.split,
                    ratio: raw.ratio,
                    rect: raw.rect,
                    child,
                }))
            }
            None => {
                if raw.split.is_some() {
                    return Err(serde::de::Error::custom(
                        "a pane can't have a 'split', only containers can",
                    ));
                }
                let Some(name) = raw.name else {
                    return Err(serde::de::Error::custom(
                        "a pane needs a 'name', or a 'child' list to be a container",
                    ));
                };

                Ok(NodeConfig::Leaf(LeafConfig {
                    name,
                    uuid: raw.uuid,
                    ratio: raw.ratio,
                    rect: raw.rect,
                }))
            }
        }
    }
}

impl NodeConfig {
    fn ratio(&self) -> NavResult<u32> {
        let ratio = match self {
            NodeConfig::Container(container) => container.ratio,
            NodeConfig::Leaf(leaf) => leaf.ratio,
        };

        match ratio {
            Some(0) => Err(NavError::layout("'ratio' must be greater than 0.")),
            Some(ratio) => Ok(ratio),
            None => Ok(1),
        }
    }

    fn explicit_rect(&self) -> NavResult<Option<Rect>> {
        let rect = match self {
            NodeConfig::Container(container) => container.rect,
            NodeConfig::Leaf(leaf) => leaf.rect,
        };

        match rect.map(Rect::from) {
            Some(rect) if rect.width < 0 || rect.height < 0 => Err(NavError::layout(format!(
                "'rect' of {rect} must not have a negative width or height."
            ))),
            Some(rect) if !rect.fits() => Err(NavError::layout(format!(
                "'rect' of {rect} reaches past the largest supported coordinate."
            ))),
            rect => Ok(rect),
        }
    }
}

fn dimension(value: Option<u32>, default: u32, name: &str) -> NavResult<i32> {
    match value.unwrap_or(default) {
        0 => Err(NavError::layout(format!("'{name}' must be greater than 0."))),
        value => i32::try_from(value)
            .map_err(|_| NavError::layout(format!("'{name}' of '{value}' is too large."))),
    }
}

impl LayoutConfig {
    /// Builds a [`LayoutTree`] from the layout file, resolving each node's
    /// rectangle from its parent's split.
    pub fn build_tree(&self) -> NavResult<LayoutTree> {
        let width = dimension(self.width, DEFAULT_LAYOUT_WIDTH, "width")?;
        let height = dimension(self.height, DEFAULT_LAYOUT_HEIGHT, "height")?;
        let root_rect = Rect::new(0, 0, width, height);

        if self.child.is_empty() {
            return Err(NavError::layout(
                "the layout must contain at least one pane.",
            ));
        }

        let mut tree = LayoutTree::new(root_rect, self.split);
        let root = tree.root();
        let mut names = HashSet::new();
        add_children(&mut tree, root, root_rect, self.split, &self.child, &mut names)?;

        if names.is_empty() {
            return Err(NavError::layout(
                "the layout must contain at least one pane.",
            ));
        }

        Ok(tree)
    }
}

fn add_children(
    tree: &mut LayoutTree, parent: NodeId, parent_rect: Rect, split: Option<Split>,
    children: &[NodeConfig], names: &mut HashSet<String>,
) -> NavResult<()> {
    let ratios = children
        .iter()
        .map(NodeConfig::ratio)
        .collect::<NavResult<Vec<_>>>()?;
    let allocations = match split {
        Some(split) => split_rect(parent_rect, split, &ratios),
        None => vec![parent_rect; children.len()],
    };

    for (child, allocation) in children.iter().zip(allocations) {
        let rect = child.explicit_rect()?.unwrap_or(allocation);

        match child {
            NodeConfig::Leaf(leaf) => {
                if leaf.name.is_empty() {
                    return Err(NavError::layout("a pane's 'name' must not be empty."));
                }
                if !names.insert(leaf.name.clone()) {
                    return Err(NavError::layout(format!(
                        "the pane name '{}' is used more than once.",
                        leaf.name
                    )));
                }

                tree.insert_leaf(
                    parent,
                    LeafLayout {
                        name: leaf.name.clone(),
                        uuid: leaf.uuid,
                        rect,
                    },
                );
            }
            NodeConfig::Container(container) => {
                if container.child.is_empty() {
                    return Err(NavError::layout(format!(
                        "the container '{}' must contain at least one child.",
                        container.name.as_deref().unwrap_or("<unnamed>")
                    )));
                }

                let id = tree.insert_container(
                    parent,
                    ContainerLayout {
                        name: container.name.clone(),
                        split: container.split,
                        rect,
                    },
                );
                add_children(tree, id, rect, container.split, &container.child, names)?;
            }
        }
    }

    Ok(())
}
