use crate::coords::Origin;
use crate::tween::Value;

use super::arena::NodeArena;
use super::{Node, NodeId, NodeKind, Transform};

/// The node tree rendered each frame.
///
/// Owns every node in an arena. The root is created with the scene and cannot be removed
/// or reparented. Nodes created with [`create_node`](Self::create_node) are detached until
/// they are added under a parent; detached subtrees are neither updated nor rendered.
#[derive(Debug)]
pub struct Scene {
    arena: NodeArena,
    root: NodeId,
    origin: Origin,
}

impl Scene {
    pub fn new(origin: Origin) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.insert(Node {
            name: Some("root".to_string()),
            ..Default::default()
        });
        Self { arena, root, origin }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Changes the coordinate convention. Call between frames only.
    #[inline]
    pub fn set_origin(&mut self, origin: Origin) {
        self.origin = origin;
    }

    /// Creates a detached node from positional transform values
    /// (see [`Transform::from_values`]).
    pub fn create_node(&mut self, kind: NodeKind, values: &[Value]) -> NodeId {
        self.arena.insert(Node::new(kind, Transform::from_values(values)))
    }

    /// Creates a node and appends it under `parent`.
    pub fn spawn(&mut self, parent: NodeId, kind: NodeKind, values: &[Value]) -> NodeId {
        let id = self.create_node(kind, values);
        self.add_child(parent, id);
        id
    }

    /// Appends `child` under `parent`, detaching it from any previous parent.
    ///
    /// Returns `false` without changing anything when `child` is already a direct child of
    /// `parent`, when either handle is stale, when `child` is the root, or when the move
    /// would put `child` under itself or under one of its own descendants.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child {
            log::warn!("add_child: node {child:?} cannot be its own parent");
            return false;
        }
        if child == self.root {
            log::warn!("add_child: the scene root cannot be reparented");
            return false;
        }
        if !self.arena.contains(child) {
            return false;
        }
        let Some(p) = self.arena.get(parent) else { return false };
        if p.children.contains(&child) {
            return false;
        }
        if self.ancestors(parent).any(|a| a == child) {
            log::warn!("add_child: {child:?} is an ancestor of {parent:?}");
            return false;
        }

        self.detach(child);
        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(p) = self.arena.get_mut(parent) {
            p.children.push(child);
        }
        true
    }

    /// Unlinks `node` from its parent. The subtree stays alive but is no longer reachable
    /// from the root.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.arena.get_mut(node).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(p) = self.arena.get_mut(parent) {
            p.children.retain(|&c| c != node);
        }
    }

    /// Discards `node` and its whole subtree. Returns how many nodes were removed.
    ///
    /// Handles into the removed subtree become stale. The root cannot be removed.
    pub fn remove(&mut self, node: NodeId) -> usize {
        if node == self.root {
            log::warn!("remove: the scene root cannot be removed");
            return 0;
        }
        self.detach(node);

        let mut removed = 0;
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(n) = self.arena.remove(id) {
                pending.extend(n.children);
                removed += 1;
            }
        }
        removed
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.arena.get_mut(id)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id)
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent)
    }

    /// Children of `id` in draw order. Empty for stale handles.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Walks from `id`'s parent up to the top of its tree.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// First node (in storage order) with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.arena
            .iter()
            .find(|(_, n)| n.name.as_deref() == Some(name))
            .map(|(id, _)| id)
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.name = Some(name.into());
        }
    }

    /// Number of live nodes, including the root and detached nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Runs every reachable node's visual update hook, parents before children.
    pub fn update(&mut self, interval: f64) {
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            if let Some(node) = self.arena.get_mut(id) {
                node.update(interval);
                pending.extend(node.children.iter().rev());
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Origin::default())
    }
}
