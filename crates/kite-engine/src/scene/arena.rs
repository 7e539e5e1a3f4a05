use super::Node;

/// Stable handle to a node stored in a [`Scene`](super::Scene).
///
/// Handles carry a generation, so a handle to a removed node stays invalid even after its
/// slot is reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    #[inline]
    pub(crate) const fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// Flat node storage with slot reuse.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Option<Node>>,
    generations: Vec<u32>,
    free_indices: Vec<usize>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, reusing a freed slot when one is available.
    pub fn insert(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free_indices.pop() {
            self.nodes[index] = Some(node);
            return NodeId::from_parts(index as u32, self.generations[index]);
        }

        let index = self.nodes.len();
        self.nodes.push(Some(node));
        self.generations.push(0);
        NodeId::from_parts(index as u32, 0)
    }

    #[inline]
    fn slot(&self, id: NodeId) -> Option<usize> {
        let index = id.index as usize;
        (index < self.nodes.len() && self.generations[index] == id.generation).then_some(index)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slot(id).and_then(|i| self.nodes[i].as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slot(id).and_then(|i| self.nodes[i].as_mut())
    }

    /// Removes a node and bumps its slot generation.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let index = self.slot(id)?;
        let removed = self.nodes[index].take();
        if removed.is_some() {
            self.generations[index] = self.generations[index].wrapping_add(1);
            self.free_indices.push(index);
        }
        removed
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().filter_map(|(index, node)| {
            node.as_ref()
                .map(|n| (NodeId::from_parts(index as u32, self.generations[index]), n))
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_handles_do_not_resolve_after_reuse() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Node::default());
        assert!(arena.remove(a).is_some());
        let b = arena.insert(Node::default());

        assert_eq!(a.index(), b.index());
        assert_ne!(a.generation(), b.generation());
        assert!(arena.get(a).is_none());
        assert!(arena.get(b).is_some());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn double_remove_is_harmless() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Node::default());
        assert!(arena.remove(a).is_some());
        assert!(arena.remove(a).is_none());
        assert_eq!(arena.len(), 0);
    }
}
