//! Rendering subsystem.
//!
//! The pipeline walks a `Scene`, sorts visible nodes by depth and issues draw calls to a
//! [`RenderSurface`]. It never owns a drawing backend; hosts implement the surface trait.
//!
//! Convention:
//! - draw geometry is in the node's local space (anchor already applied)
//! - the surface matrix is overwritten before every node

mod draw;
mod key;
mod list;
mod pipeline;
mod recording;
mod surface;

pub use draw::{draw_fn, draw_outline, DrawFn, OUTLINE_COLOR};
pub use key::SortKey;
pub use list::{RenderItem, RenderList};
pub use pipeline::{RenderPhase, RenderPipeline};
pub use recording::{RecordingSurface, SurfaceCmd};
pub use surface::RenderSurface;
