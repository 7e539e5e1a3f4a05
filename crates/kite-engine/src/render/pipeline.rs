use kurbo::Affine;

use crate::coords::Origin;
use crate::paint::Color;
use crate::scene::{NodeId, Scene};

use super::draw::{draw_fn, draw_outline};
use super::{RenderList, RenderSurface};

/// Where the pipeline is within a frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RenderPhase {
    #[default]
    Begin,
    TransformPass,
    SortPass,
    DrawPass,
    End,
}

#[derive(Debug)]
enum Visit {
    Enter(NodeId),
    Exit,
}

/// Turns a [`Scene`] into draw calls.
///
/// Each [`render`](Self::render) runs `Begin → TransformPass → SortPass → DrawPass → End`:
/// - transform pass: depth-first pre-order walk computing world matrices; visible nodes
///   are collected (an invisible node still lets its children through)
/// - sort pass: stable sort by depth key, ties in traversal order
/// - draw pass: per node, overwrite the surface matrix, then dispatch on the node kind
///
/// Buffers are kept between frames.
#[derive(Debug, Default)]
pub struct RenderPipeline {
    list: RenderList,
    matrices: Vec<Affine>,
    visits: Vec<Visit>,
    phase: RenderPhase,
    debug_outlines: bool,
    clear_color: Option<Color>,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw outlines instead of node contents.
    pub fn set_debug_outlines(&mut self, on: bool) {
        self.debug_outlines = on;
    }

    #[inline]
    pub fn debug_outlines(&self) -> bool {
        self.debug_outlines
    }

    /// Clear the surface with `color` at the start of every frame. `None` leaves it as is.
    pub fn set_clear_color(&mut self, color: Option<Color>) {
        self.clear_color = color;
    }

    #[inline]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Render list built by the most recent frame.
    #[inline]
    pub fn render_list(&self) -> &RenderList {
        &self.list
    }

    /// Renders one frame and returns the number of nodes that emitted draw calls.
    ///
    /// Listed nodes with nothing to draw, such as `Plain` grouping nodes, are not counted.
    ///
    /// World matrices are written back to the nodes. The scene is borrowed mutably for the
    /// whole frame, so the tree cannot change mid-pass.
    pub fn render(&mut self, scene: &mut Scene, surface: &mut dyn RenderSurface) -> usize {
        self.enter(RenderPhase::Begin);
        if scene.origin() != surface.origin() {
            log::debug!(
                "scene origin {:?} differs from surface origin {:?}; using the scene's",
                scene.origin(),
                surface.origin()
            );
        }
        if let Some(color) = self.clear_color {
            surface.clear(color);
        }

        self.enter(RenderPhase::TransformPass);
        let base = match scene.origin() {
            Origin::UpperLeft => Affine::IDENTITY,
            Origin::LowerLeft => Affine::translate((0.0, surface.size().height)),
        };
        self.transform_pass(scene, base);

        self.enter(RenderPhase::SortPass);
        self.list.sort();

        self.enter(RenderPhase::DrawPass);
        let drawn = self.draw_pass(scene, surface);

        self.enter(RenderPhase::End);
        log::trace!("frame rendered: {drawn} node(s)");
        drawn
    }

    #[inline]
    fn enter(&mut self, phase: RenderPhase) {
        log::trace!("render phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn transform_pass(&mut self, scene: &mut Scene, base: Affine) {
        self.list.clear();
        self.matrices.clear();
        self.visits.clear();

        let origin = scene.origin();
        self.matrices.push(base);
        self.visits.push(Visit::Enter(scene.root()));

        while let Some(visit) = self.visits.pop() {
            let id = match visit {
                Visit::Enter(id) => id,
                Visit::Exit => {
                    self.matrices.pop();
                    continue;
                }
            };
            let Some(node) = scene.node_mut(id) else { continue };

            let parent = self.matrices.last().copied().unwrap_or(base);
            let world = parent * node.transform.matrix(origin);
            node.world = world;
            if node.transform.visible {
                self.list.push(node.z, id);
            }

            // Children see this node's matrix until the matching `Exit` restores the parent's.
            self.matrices.push(world);
            self.visits.push(Visit::Exit);
            self.visits.extend(node.children.iter().rev().map(|&c| Visit::Enter(c)));
        }
    }

    fn draw_pass(&mut self, scene: &Scene, surface: &mut dyn RenderSurface) -> usize {
        let mut drawn = 0;
        for item in self.list.iter_in_paint_order() {
            let Some(node) = scene.node(item.node) else { continue };
            surface.set_matrix(node.world);
            let emitted = if self.debug_outlines {
                draw_outline(node, surface)
            } else {
                draw_fn(&node.kind)(node, surface)
            };
            if emitted {
                drawn += 1;
            }
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Size, Vec2};
    use crate::render::{RecordingSurface, SurfaceCmd};
    use crate::scene::{NodeKind, ZIndex};
    use crate::tween::Value;

    fn surface(origin: Origin) -> RecordingSurface {
        RecordingSurface::new(Size::new(200.0, 100.0), origin)
    }

    fn origin_of(m: Affine) -> Vec2 {
        let p = m * kurbo::Point::ORIGIN;
        Vec2::new(p.x, p.y)
    }

    // ── transform pass ────────────────────────────────────────────────────

    #[test]
    fn empty_scene_lists_root_but_draws_nothing() {
        let mut scene = Scene::default();
        let mut s = surface(Origin::UpperLeft);
        let mut pipeline = RenderPipeline::new();

        assert_eq!(pipeline.render(&mut scene, &mut s), 0);
        assert_eq!(pipeline.phase(), RenderPhase::End);
        assert_eq!(pipeline.render_list().len(), 1);
        assert_eq!(s.draws().count(), 0);

        scene.node_mut(scene.root()).unwrap().transform.visible = false;
        assert_eq!(pipeline.render(&mut scene, &mut s), 0);
        assert!(pipeline.render_list().is_empty());
    }

    #[test]
    fn world_matrices_compose_down_the_tree() {
        let mut scene = Scene::default();
        let root = scene.root();
        let parent = scene.spawn(root, NodeKind::Plain, &[Value::Vector2(10.0, 10.0)]);
        let child = scene.spawn(parent, NodeKind::Plain, &[Value::Vector2(5.0, 0.0)]);
        let sibling = scene.spawn(root, NodeKind::Plain, &[Value::Vector2(1.0, 1.0)]);

        RenderPipeline::new().render(&mut scene, &mut surface(Origin::UpperLeft));

        let world = |id| origin_of(scene.node(id).unwrap().world());
        assert_eq!(world(parent), Vec2::new(10.0, 10.0));
        assert_eq!(world(child), Vec2::new(15.0, 10.0));
        // The sibling sees the root's matrix, not its predecessor's.
        assert_eq!(world(sibling), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn lower_left_flips_y_against_surface_height() {
        let mut scene = Scene::new(Origin::LowerLeft);
        let root = scene.root();
        let child = scene.spawn(root, NodeKind::Rectangle, &[Value::Vector2(10.0, 20.0)]);

        RenderPipeline::new().render(&mut scene, &mut surface(Origin::LowerLeft));

        let p = origin_of(scene.node(child).unwrap().world());
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 80.0).abs() < 1e-9);
    }

    #[test]
    fn invisible_parent_still_lists_children() {
        let mut scene = Scene::default();
        let root = scene.root();
        let hidden = scene.spawn(root, NodeKind::Rectangle, &[]);
        scene.node_mut(hidden).unwrap().transform.visible = false;
        let child = scene.spawn(hidden, NodeKind::Rectangle, &[]);

        let mut pipeline = RenderPipeline::new();
        assert_eq!(pipeline.render(&mut scene, &mut surface(Origin::UpperLeft)), 1);
        let listed: Vec<_> = pipeline.render_list().items().iter().map(|i| i.node).collect();
        assert_eq!(listed, vec![root, child]);
    }

    #[test]
    fn detached_nodes_are_not_rendered() {
        let mut scene = Scene::default();
        scene.create_node(NodeKind::Rectangle, &[]);
        assert_eq!(RenderPipeline::new().render(&mut scene, &mut surface(Origin::UpperLeft)), 0);
    }

    #[test]
    fn drawn_count_skips_grouping_nodes() {
        let mut scene = Scene::default();
        let root = scene.root();
        let group = scene.spawn(root, NodeKind::Plain, &[]);
        scene.spawn(group, NodeKind::Rectangle, &[Value::Vector2(0.0, 0.0), Value::Vector2(2.0, 2.0)]);
        scene.spawn(group, NodeKind::Ellipse, &[Value::Vector2(0.0, 0.0), Value::Vector2(2.0, 2.0)]);

        let mut s = surface(Origin::UpperLeft);
        let mut pipeline = RenderPipeline::new();
        assert_eq!(pipeline.render(&mut scene, &mut s), 2);
        assert_eq!(pipeline.render_list().len(), 4);
        assert_eq!(s.draws().count(), 2);

        // Outlines skip the zero-sized root and group.
        pipeline.set_debug_outlines(true);
        assert_eq!(pipeline.render(&mut scene, &mut s), 2);
    }

    // ── sort pass ─────────────────────────────────────────────────────────

    #[test]
    fn draw_order_follows_depth_then_traversal() {
        let mut scene = Scene::default();
        let root = scene.root();
        scene.node_mut(root).unwrap().transform.visible = false;
        let ids: Vec<_> = [3, 1, 2, 1]
            .into_iter()
            .enumerate()
            .map(|(i, z)| {
                let id = scene.spawn(root, NodeKind::Rectangle, &[Value::Vector2(i as f64, 0.0)]);
                scene.node_mut(id).unwrap().z = ZIndex::new(z);
                id
            })
            .collect();

        let mut s = surface(Origin::UpperLeft);
        let mut pipeline = RenderPipeline::new();
        pipeline.render(&mut scene, &mut s);

        let matrices: Vec<Affine> = s
            .commands()
            .iter()
            .filter_map(|c| match c {
                SurfaceCmd::SetMatrix(m) => Some(*m),
                _ => None,
            })
            .collect();
        let expected: Vec<Affine> =
            [ids[1], ids[3], ids[2], ids[0]].iter().map(|&id| scene.node(id).unwrap().world()).collect();
        assert_eq!(matrices, expected);
    }

    // ── draw pass ─────────────────────────────────────────────────────────

    #[test]
    fn every_draw_is_preceded_by_its_matrix() {
        let mut scene = Scene::default();
        let root = scene.root();
        scene.spawn(root, NodeKind::Rectangle, &[Value::Vector2(1.0, 0.0), Value::Vector2(4.0, 4.0)]);
        scene.spawn(root, NodeKind::Ellipse, &[Value::Vector2(2.0, 0.0), Value::Vector2(4.0, 4.0)]);

        let mut s = surface(Origin::UpperLeft);
        RenderPipeline::new().render(&mut scene, &mut s);

        let cmds = s.commands();
        assert_eq!(cmds.len(), 5);
        assert!(matches!(cmds[0], SurfaceCmd::SetMatrix(_)));
        assert!(matches!(cmds[1], SurfaceCmd::SetMatrix(m) if origin_of(m) == Vec2::new(1.0, 0.0)));
        assert!(matches!(cmds[2], SurfaceCmd::Rectangle { .. }));
        assert!(matches!(cmds[3], SurfaceCmd::SetMatrix(m) if origin_of(m) == Vec2::new(2.0, 0.0)));
        assert!(matches!(cmds[4], SurfaceCmd::Ellipse { .. }));
    }

    #[test]
    fn debug_outlines_replace_contents() {
        let mut scene = Scene::default();
        let root = scene.root();
        scene.spawn(root, NodeKind::Ellipse, &[Value::Vector2(0.0, 0.0), Value::Vector2(4.0, 4.0)]);

        let mut s = surface(Origin::UpperLeft);
        let mut pipeline = RenderPipeline::new();
        pipeline.set_debug_outlines(true);
        pipeline.render(&mut scene, &mut s);

        assert_eq!(s.draws().filter(|c| matches!(c, SurfaceCmd::Rectangle { .. })).count(), 4);
        assert_eq!(s.draws().filter(|c| matches!(c, SurfaceCmd::Ellipse { .. })).count(), 0);
    }

    #[test]
    fn clear_color_is_applied_first() {
        let mut scene = Scene::default();
        let mut s = surface(Origin::UpperLeft);
        let mut pipeline = RenderPipeline::new();
        pipeline.set_clear_color(Some(Color::black()));
        pipeline.render(&mut scene, &mut s);
        assert_eq!(s.commands().first(), Some(&SurfaceCmd::Clear(Color::black())));
    }
}
