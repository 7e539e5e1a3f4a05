use crate::coords::Origin;
use crate::paint::Color;
use crate::render::{RenderPipeline, RenderSurface};
use crate::scene::{NodeId, Scene};
use crate::tween::{Action, ActionId, ActionManager};

/// Stage setup.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct StageConfig {
    pub origin: Origin,
    /// Draw node outlines instead of contents.
    pub debug_outlines: bool,
    /// Surface clear color at the start of each frame; `None` leaves the surface as is.
    pub clear_color: Option<Color>,
}

impl StageConfig {
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_debug_outlines(mut self, on: bool) -> Self {
        self.debug_outlines = on;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = Some(color);
        self
    }
}

/// Frame driver: a scene, the actions animating it and the pipeline drawing it.
///
/// Per frame, call [`update`](Self::update) with the elapsed time, then
/// [`render`](Self::render).
#[derive(Debug)]
pub struct Stage {
    config: StageConfig,
    scene: Scene,
    actions: ActionManager,
    pipeline: RenderPipeline,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        let mut pipeline = RenderPipeline::new();
        pipeline.set_debug_outlines(config.debug_outlines);
        pipeline.set_clear_color(config.clear_color);
        Self { config, scene: Scene::new(config.origin), actions: ActionManager::new(), pipeline }
    }

    #[inline]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[inline]
    pub fn actions(&self) -> &ActionManager {
        &self.actions
    }

    #[inline]
    pub fn actions_mut(&mut self) -> &mut ActionManager {
        &mut self.actions
    }

    pub fn set_debug_outlines(&mut self, on: bool) {
        self.config.debug_outlines = on;
        self.pipeline.set_debug_outlines(on);
    }

    /// Registers `action` against `node`; it starts on the next [`update`](Self::update).
    pub fn run_action(&mut self, node: NodeId, action: impl Action + 'static) -> ActionId {
        self.actions.add_action(node, action)
    }

    /// Removes a subtree together with the actions targeting its root.
    ///
    /// Actions on descendants are dropped by the next update.
    pub fn remove_node(&mut self, node: NodeId) -> usize {
        self.actions.remove_all_actions_for(node);
        self.scene.remove(node)
    }

    /// Advances actions by `dt` seconds, then runs per-node update hooks.
    pub fn update(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.actions.update(&mut self.scene, dt);
        self.scene.update(dt);
    }

    /// Draws the scene into `surface`. Returns the number of nodes that emitted draw calls.
    pub fn render(&mut self, surface: &mut dyn RenderSurface) -> usize {
        self.pipeline.render(&mut self.scene, surface)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}
