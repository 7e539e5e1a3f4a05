//! Scene graph.
//!
//! Responsibilities:
//! - own nodes in a flat arena addressed by generational [`NodeId`]s
//! - keep parent/child links consistent (no duplicates, no self-parenting)
//! - hold per-node [`Transform`]s and compute their local matrices
//! - run per-node visual update hooks before rendering

mod arena;
mod graph;
mod kind;
mod node;
mod transform;
mod z_index;

pub use arena::NodeId;
pub use graph::Scene;
pub use kind::{NodeKind, Sprite, TextContent};
pub use node::Node;
pub use transform::Transform;
pub use z_index::ZIndex;
