use crate::scene::ZIndex;

/// Sort key for render-list entries.
///
/// Field order gives the ordering: `z` ascending (back-to-front), then `order`, the
/// traversal index, so entries with equal depth keep the order the tree was walked in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
