use std::{collections::VecDeque, fmt::Debug};

use indextree::{Arena, NodeId};
use uuid::Uuid;

use crate::{
    geometry::{Rect, Split},
    utils::error::{NavError, NavResult},
};

/// Whether a node groups other nodes or is a navigable region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Leaf,
}

/// Represents a container in the layout tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerLayout {
    pub name: Option<String>,
    pub split: Option<Split>,
    pub rect: Rect,
}

/// Represents a leaf (a pane) in the layout tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafLayout {
    pub name: String,
    pub uuid: Option<Uuid>,
    pub rect: Rect,
}

impl LeafLayout {
    pub fn new<S: Into<String>>(name: S, rect: Rect) -> Self {
        Self {
            name: name.into(),
            uuid: None,
            rect,
        }
    }
}

/// A [`LayoutNode`] represents a single node in the overall pane hierarchy. Each node is one of:
/// - [`LayoutNode::Container`] (a non-leaf that groups its children, and may split its area between them)
/// - [`LayoutNode::Leaf`] (a leaf node that can receive focus)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutNode {
    Container(ContainerLayout),
    Leaf(LeafLayout),
}

impl LayoutNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            LayoutNode::Container(_) => NodeKind::Container,
            LayoutNode::Leaf(_) => NodeKind::Leaf,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            LayoutNode::Container(container) => container.rect,
            LayoutNode::Leaf(leaf) => leaf.rect,
        }
    }
}

/// Read-only access to a tree of rectangular regions.
///
/// This is what navigation needs from whatever owns the layout, so other
/// frameworks can plug in their own widget trees.
pub trait TreeQuery {
    type Id: Copy + Eq + Debug;

    /// The root of the tree.
    fn root(&self) -> Self::Id;

    /// The kind of the node, or [`None`] if it does not exist in the tree.
    fn node_kind(&self, id: Self::Id) -> Option<NodeKind>;

    /// The ordered children of the node. Leaves and missing nodes have none.
    fn children_of(&self, id: Self::Id) -> Vec<Self::Id>;

    /// The node's rectangle, if it has one.
    fn rectangle_of(&self, id: Self::Id) -> Option<Rect>;

    /// The node's parent, or [`None`] for the root or missing nodes.
    fn parent_of(&self, id: Self::Id) -> Option<Self::Id>;
}

/// A layout tree backed by an [`Arena`], rooted at a container.
#[derive(Clone, Debug)]
pub struct LayoutTree {
    arena: Arena<LayoutNode>,
    root: NodeId,
}

impl LayoutTree {
    /// Creates a tree holding only a root container covering `rect`.
    pub fn new(rect: Rect, split: Option<Split>) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(LayoutNode::Container(ContainerLayout {
            name: None,
            split,
            rect,
        }));

        Self { arena, root }
    }

    /// Creates a flat tree where every leaf is a direct child of the root. The
    /// root covers the bounding box of the leaves.
    pub fn from_leaves<S, I>(leaves: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Rect)>,
    {
        let leaves = leaves.into_iter().collect::<Vec<_>>();
        let clamp = |value: i64| i32::try_from(value).unwrap_or(i32::MAX);
        let right = leaves.iter().map(|(_, rect)| clamp(rect.right())).max().unwrap_or(0);
        let bottom = leaves.iter().map(|(_, rect)| clamp(rect.bottom())).max().unwrap_or(0);

        let mut tree = Self::new(Rect::new(0, 0, right, bottom), None);
        let root = tree.root;
        for (name, rect) in leaves {
            tree.add_leaf(root, name, rect);
        }

        tree
    }

    pub fn arena(&self) -> &Arena<LayoutNode> {
        &self.arena
    }

    /// Appends a new container under `parent`, returning its [`NodeId`].
    pub fn add_container(&mut self, parent: NodeId, split: Option<Split>, rect: Rect) -> NodeId {
        self.insert_container(
            parent,
            ContainerLayout {
                name: None,
                split,
                rect,
            },
        )
    }

    pub fn insert_container(&mut self, parent: NodeId, container: ContainerLayout) -> NodeId {
        let id = self.arena.new_node(LayoutNode::Container(container));
        parent.append(id, &mut self.arena);

        id
    }

    /// Appends a new leaf under `parent`, returning its [`NodeId`]. The leaf is
    /// given a fresh UUID.
    pub fn add_leaf<S: Into<String>>(&mut self, parent: NodeId, name: S, rect: Rect) -> NodeId {
        self.insert_leaf(parent, LeafLayout::new(name, rect))
    }

    /// Appends `leaf` under `parent`. A UUID is injected if the leaf has none.
    pub fn insert_leaf(&mut self, parent: NodeId, mut leaf: LeafLayout) -> NodeId {
        inject_uuid(&mut leaf);
        let id = self.arena.new_node(LayoutNode::Leaf(leaf));
        parent.append(id, &mut self.arena);

        id
    }

    fn live_node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .map(|node| node.get())
    }

    pub fn leaf(&self, id: NodeId) -> Option<&LeafLayout> {
        match self.live_node(id) {
            Some(LayoutNode::Leaf(leaf)) => Some(leaf),
            _ => None,
        }
    }

    pub fn container(&self, id: NodeId) -> Option<&ContainerLayout> {
        match self.live_node(id) {
            Some(LayoutNode::Container(container)) => Some(container),
            _ => None,
        }
    }

    /// Finds the first leaf under the root with the given name.
    pub fn find_leaf(&self, name: &str) -> Option<NodeId> {
        self.root
            .descendants(&self.arena)
            .find(|&id| self.leaf(id).is_some_and(|leaf| leaf.name == name))
    }
}

impl TreeQuery for LayoutTree {
    type Id = NodeId;

    fn root(&self) -> NodeId {
        self.root
    }

    fn node_kind(&self, id: NodeId) -> Option<NodeKind> {
        self.live_node(id).map(LayoutNode::kind)
    }

    fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        if self.live_node(id).is_some() {
            id.children(&self.arena).collect()
        } else {
            Vec::new()
        }
    }

    fn rectangle_of(&self, id: NodeId) -> Option<Rect> {
        self.live_node(id).map(LayoutNode::rect)
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .and_then(|node| node.parent())
    }
}

/// Walks everything beneath `parent`, returning all containers and all leaves
/// found (in that order). `parent` itself is not included.
///
/// Each direct child of `parent` is fully explored, breadth-first, before moving
/// on to the next one. Leaves are recorded as soon as they are seen and
/// containers once their children have been queued.
pub fn enumerate_descendants<T: TreeQuery>(
    tree: &T, parent: T::Id,
) -> NavResult<(Vec<T::Id>, Vec<T::Id>)> {
    if tree.node_kind(parent).is_none() {
        return Err(NavError::invalid_argument(format!(
            "no parent node {parent:?} exists in the tree"
        )));
    }

    let mut pending = VecDeque::new();
    let mut containers = Vec::new();
    let mut leaves = Vec::new();

    let mut sort = |id: T::Id, pending: &mut VecDeque<T::Id>| match tree.node_kind(id) {
        Some(NodeKind::Container) => pending.push_back(id),
        Some(NodeKind::Leaf) => leaves.push(id),
        None => {}
    };

    for descendant in tree.children_of(parent) {
        sort(descendant, &mut pending);

        while let Some(child) = pending.pop_front() {
            for descendant in tree.children_of(child) {
                sort(descendant, &mut pending);
            }
            containers.push(child);
        }
    }

    debug!(
        "{} containers and {} leaves fall beneath {parent:?}",
        containers.len(),
        leaves.len()
    );

    Ok((containers, leaves))
}

/// Returns whether any ancestor of `node` (not counting `node` itself)
/// satisfies `predicate`.
pub fn has_ancestor<T, F>(tree: &T, node: T::Id, mut predicate: F) -> bool
where
    T: TreeQuery,
    F: FnMut(T::Id) -> bool,
{
    let mut current = tree.parent_of(node);
    while let Some(id) = current {
        if predicate(id) {
            return true;
        }
        current = tree.parent_of(id);
    }

    false
}

/// Generates a new UUID for a leaf.
pub fn make_uuid() -> Uuid {
    Uuid::new_v4()
}

/// Gives `leaf` a UUID if it does not already have one.
pub fn inject_uuid(leaf: &mut LeafLayout) {
    match leaf.uuid {
        Some(uuid) => {
            debug!("Leaf '{}' already has a UUID: {uuid}", leaf.name);
        }
        None => {
            let uuid = make_uuid();
            debug!("Injecting UUID {uuid} into leaf '{}'", leaf.name);
            leaf.uuid = Some(uuid);
        }
    }
}
