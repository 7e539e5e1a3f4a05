use crate::scene::{NodeId, ZIndex};

use super::SortKey;

/// A visible node collected by the transform pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderItem {
    pub key: SortKey,
    pub node: NodeId,
}

/// Flat list of visible nodes for one frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct RenderList {
    items: Vec<RenderItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl RenderList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Items in traversal order.
    #[inline]
    pub fn items(&self) -> &[RenderItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `node` with depth `z`; the traversal index is assigned here.
    #[inline]
    pub fn push(&mut self, z: ZIndex, node: NodeId) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(RenderItem { key: SortKey::new(z, order), node });
        self.sorted_dirty = true;
    }

    /// Sorts now if needed. Iteration sorts lazily as well.
    pub fn sort(&mut self) {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
    }

    /// Iterates items in paint order (back-to-front).
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &RenderItem> {
        self.sort();
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // `sort_by_key` is stable, and the key already carries the traversal index.
        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeKind, Scene};

    #[test]
    fn equal_depths_keep_traversal_order() {
        let mut scene = Scene::default();
        let ids: Vec<NodeId> = (0..4).map(|_| scene.create_node(NodeKind::Plain, &[])).collect();

        let mut list = RenderList::new();
        for (&id, z) in ids.iter().zip([3, 1, 2, 1]) {
            list.push(ZIndex::new(z), id);
        }

        let order: Vec<NodeId> = list.iter_in_paint_order().map(|it| it.node).collect();
        assert_eq!(order, vec![ids[1], ids[3], ids[2], ids[0]]);
    }

    #[test]
    fn clear_resets_order_counter() {
        let mut scene = Scene::default();
        let id = scene.create_node(NodeKind::Plain, &[]);
        let mut list = RenderList::new();
        list.push(ZIndex::new(0), id);
        list.push(ZIndex::new(0), id);
        list.clear();
        assert!(list.is_empty());
        list.push(ZIndex::new(0), id);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.iter_in_paint_order().count(), 1);
    }
}
