use crate::coords::{Size, Vec2};
use crate::paint::Color;
use crate::scene::{Node, NodeKind};

use super::RenderSurface;

/// Draw routine for one node kind. The surface matrix is already set to the node's world
/// matrix when it runs. Returns whether anything was emitted.
pub type DrawFn = fn(&Node, &mut dyn RenderSurface) -> bool;

/// Color of debug outlines.
pub const OUTLINE_COLOR: Color = Color::rgba(255, 0, 255, 255);

/// Outline thickness in local units.
const OUTLINE_WIDTH: f64 = 1.0;

/// Dispatch table from node kind to draw routine.
pub fn draw_fn(kind: &NodeKind) -> DrawFn {
    match kind {
        NodeKind::Plain => draw_plain,
        NodeKind::Rectangle => draw_rectangle,
        NodeKind::Ellipse => draw_ellipse,
        NodeKind::Text(_) => draw_text,
        NodeKind::Sprite(_) => draw_sprite,
    }
}

fn draw_plain(_node: &Node, _surface: &mut dyn RenderSurface) -> bool {
    false
}

fn draw_rectangle(node: &Node, surface: &mut dyn RenderSurface) -> bool {
    let t = &node.transform;
    surface.draw_rectangle(t.draw_origin(), t.size, t.color);
    true
}

fn draw_ellipse(node: &Node, surface: &mut dyn RenderSurface) -> bool {
    let t = &node.transform;
    surface.draw_ellipse(t.draw_origin(), t.size, t.color);
    true
}

fn draw_text(node: &Node, surface: &mut dyn RenderSurface) -> bool {
    let NodeKind::Text(content) = &node.kind else { return false };
    let t = &node.transform;
    surface.draw_text(t.draw_origin(), &content.text, &content.font.with_color(t.color));
    true
}

fn draw_sprite(node: &Node, surface: &mut dyn RenderSurface) -> bool {
    let NodeKind::Sprite(sprite) = &node.kind else { return false };
    let Some(frame) = sprite.current_frame() else { return false };
    if frame.is_empty() {
        return false;
    }
    let t = &node.transform;
    surface.draw_bitmap(t.draw_origin(), t.size, frame, sprite.bitmap);
    true
}

/// Debug variant: outlines the node's anchored box instead of drawing it.
pub fn draw_outline(node: &Node, surface: &mut dyn RenderSurface) -> bool {
    let t = &node.transform;
    if t.size.is_empty() {
        return false;
    }
    let o = t.draw_origin();
    let (w, h) = (t.size.width, t.size.height);
    let edge = OUTLINE_WIDTH.min(w).min(h);

    surface.draw_rectangle(o, Size::new(w, edge), OUTLINE_COLOR);
    surface.draw_rectangle(Vec2::new(o.x, o.y + h - edge), Size::new(w, edge), OUTLINE_COLOR);
    surface.draw_rectangle(o, Size::new(edge, h), OUTLINE_COLOR);
    surface.draw_rectangle(Vec2::new(o.x + w - edge, o.y), Size::new(edge, h), OUTLINE_COLOR);
    true
}
