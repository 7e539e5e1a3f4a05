use kurbo::Affine;

use crate::tween::{Animatable, Slot, ValueRef};

use super::{NodeId, NodeKind, Transform, ZIndex};

/// One element of the scene tree.
///
/// Nodes live in the scene's arena; `parent` and `children` are handles into it. Tree
/// structure is changed only through [`Scene`](super::Scene) so the two directions stay
/// consistent.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub name: Option<String>,
    pub transform: Transform,
    pub kind: NodeKind,
    /// Depth key for the render list.
    pub z: ZIndex,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Written by the transform pass each frame.
    pub(crate) world: Affine,
}

impl Node {
    pub fn new(kind: NodeKind, transform: Transform) -> Self {
        Self { kind, transform, ..Default::default() }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// World matrix from the most recent render. Identity before the first one.
    #[inline]
    pub fn world(&self) -> Affine {
        self.world
    }

    #[inline]
    pub fn update(&mut self, interval: f64) {
        self.kind.update(interval);
    }
}

impl Animatable for Node {
    fn type_name(&self) -> &'static str {
        "Node"
    }

    fn slot(&mut self, name: &str) -> Option<Slot<'_>> {
        match name {
            "Transformation" => Some(Slot::Object(&mut self.transform)),
            "Z" => Some(Slot::Value(ValueRef::Integer(&mut self.z.0))),
            _ => None,
        }
    }
}
