use indexmap::IndexMap;

use crate::scene::{NodeId, Scene};

use super::{Action, TweenState};

/// Handle to a registered action. Unique within one [`ActionManager`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ActionId(u64);

struct Entry {
    id: ActionId,
    action: Box<dyn Action>,
}

/// Registry of running actions, keyed by target node.
///
/// Nodes are visited in the order they first received an action, and each node's actions
/// in the order they were added. One [`update`](Self::update) is one tick:
/// - actions that have not started are started first (their start values are taken now)
/// - every action is advanced exactly once
/// - actions that report completion are dropped after the tick
///
/// Actions whose node has been removed from the scene are dropped without being touched.
#[derive(Default)]
pub struct ActionManager {
    targets: IndexMap<NodeId, Vec<Entry>>,
    next_id: u64,
}

impl std::fmt::Debug for ActionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionManager")
            .field("targets", &self.targets.len())
            .field("actions", &self.len())
            .finish()
    }
}

impl ActionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` against `node`. It starts on the next tick.
    pub fn add_action(&mut self, node: NodeId, action: impl Action + 'static) -> ActionId {
        self.add_boxed(node, Box::new(action))
    }

    pub fn add_boxed(&mut self, node: NodeId, action: Box<dyn Action>) -> ActionId {
        let id = ActionId(self.next_id);
        self.next_id += 1;
        self.targets.entry(node).or_default().push(Entry { id, action });
        log::trace!("action {id:?} added to {node:?}");
        id
    }

    /// Cancels one action. Returns `false` if it was not registered (or already finished).
    pub fn remove_action(&mut self, node: NodeId, id: ActionId) -> bool {
        let Some(entries) = self.targets.get_mut(&node) else { return false };
        let before = entries.len();
        entries.retain(|e| e.id != id);
        let removed = entries.len() != before;
        if entries.is_empty() {
            self.targets.shift_remove(&node);
        }
        removed
    }

    /// Cancels every action targeting `node`. Returns how many were removed.
    pub fn remove_all_actions_for(&mut self, node: NodeId) -> usize {
        self.targets.shift_remove(&node).map_or(0, |entries| entries.len())
    }

    pub fn remove_all_actions(&mut self) {
        self.targets.clear();
    }

    pub fn action_count(&self, node: NodeId) -> usize {
        self.targets.get(&node).map_or(0, Vec::len)
    }

    /// Total number of registered actions.
    pub fn len(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Advances every registered action by `interval` seconds.
    pub fn update(&mut self, scene: &mut Scene, interval: f64) {
        self.targets.retain(|&node, entries| {
            let Some(target) = scene.node_mut(node) else {
                log::debug!("dropping {} action(s) for removed node {node:?}", entries.len());
                return false;
            };

            for entry in entries.iter_mut() {
                let action = &mut entry.action;
                if action.state() == TweenState::NotStarted {
                    action.start(target);
                }
                action.update(target, interval);
            }

            entries.retain(|e| {
                let done = e.action.completed();
                if done {
                    log::trace!("action {:?} on {node:?} completed", e.id);
                }
                !done
            });
            !entries.is_empty()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::NodeKind;
    use crate::tween::{Delay, PropertyAction, Value};

    fn scene_with_node() -> (Scene, NodeId) {
        let mut scene = Scene::default();
        let root = scene.root();
        let node = scene.spawn(root, NodeKind::Rectangle, &[Value::Vector2(0.0, 0.0)]);
        (scene, node)
    }

    fn position(scene: &Scene, node: NodeId) -> Vec2 {
        scene.node(node).unwrap().transform.position
    }

    fn move_to(scene: &mut Scene, node: NodeId, x: f64, y: f64, duration: f64) -> PropertyAction {
        let target = scene.node_mut(node).unwrap();
        PropertyAction::to(target, "Transformation.Position", Vec2::new(x, y), duration)
    }

    // ── ticking ───────────────────────────────────────────────────────────

    #[test]
    fn position_tween_reaches_end_and_is_evicted() {
        let (mut scene, node) = scene_with_node();
        let mut manager = ActionManager::new();
        let action = move_to(&mut scene, node, 100.0, 0.0, 1.0);
        manager.add_action(node, action);

        manager.update(&mut scene, 0.5);
        let p = position(&scene, node);
        assert!((p.x - 50.0).abs() < 1e-9);
        assert_eq!(manager.action_count(node), 1);

        manager.update(&mut scene, 0.6);
        assert_eq!(position(&scene, node), Vec2::new(100.0, 0.0));
        assert_eq!(manager.action_count(node), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn unknown_path_is_evicted_without_mutation() {
        let (mut scene, node) = scene_with_node();
        let target = scene.node_mut(node).unwrap();
        let action = PropertyAction::to(target, "Foo.Bar", Vec2::new(5.0, 5.0), 1.0);

        let mut manager = ActionManager::new();
        manager.add_action(node, action);
        manager.update(&mut scene, 0.5);

        assert_eq!(position(&scene, node), Vec2::zero());
        assert!(manager.is_empty());
    }

    #[test]
    fn start_value_is_taken_on_first_tick() {
        let (mut scene, node) = scene_with_node();
        let mut manager = ActionManager::new();
        let action = move_to(&mut scene, node, 100.0, 0.0, 1.0);
        manager.add_action(node, action);

        // Moved after binding but before the first tick.
        scene.node_mut(node).unwrap().transform.position = Vec2::new(50.0, 0.0);
        manager.update(&mut scene, 0.5);
        assert!((position(&scene, node).x - 75.0).abs() < 1e-9);
    }

    #[test]
    fn later_action_wins_on_shared_attribute() {
        let (mut scene, node) = scene_with_node();
        let mut manager = ActionManager::new();
        let a = move_to(&mut scene, node, 100.0, 0.0, 1.0);
        let b = move_to(&mut scene, node, 0.0, 100.0, 1.0);
        manager.add_action(node, a);
        manager.add_action(node, b);

        manager.update(&mut scene, 1.0);
        assert_eq!(position(&scene, node), Vec2::new(0.0, 100.0));
    }

    #[test]
    fn zero_interval_tick_leaves_action_running() {
        let (mut scene, node) = scene_with_node();
        let mut manager = ActionManager::new();
        let action = move_to(&mut scene, node, 10.0, 0.0, 1.0);
        manager.add_action(node, action);

        manager.update(&mut scene, 0.0);
        assert_eq!(manager.action_count(node), 1);
        assert_eq!(position(&scene, node), Vec2::zero());
    }

    // ── registry ──────────────────────────────────────────────────────────

    #[test]
    fn remove_action_cancels_only_that_action() {
        let (mut scene, node) = scene_with_node();
        let mut manager = ActionManager::new();
        let first = manager.add_action(node, Delay::new(1.0));
        let second = manager.add_action(node, Delay::new(1.0));

        assert!(manager.remove_action(node, first));
        assert!(!manager.remove_action(node, first));
        assert_eq!(manager.action_count(node), 1);

        assert!(manager.remove_action(node, second));
        assert!(manager.is_empty());
        manager.update(&mut scene, 1.0);
    }

    #[test]
    fn remove_all_for_node() {
        let (mut scene, node) = scene_with_node();
        let other = scene.spawn(scene.root(), NodeKind::Plain, &[]);
        let mut manager = ActionManager::new();
        manager.add_action(node, Delay::new(1.0));
        manager.add_action(node, Delay::new(1.0));
        manager.add_action(other, Delay::new(1.0));

        assert_eq!(manager.remove_all_actions_for(node), 2);
        assert_eq!(manager.len(), 1);

        manager.remove_all_actions();
        assert!(manager.is_empty());
    }

    #[test]
    fn actions_for_removed_nodes_are_dropped() {
        let (mut scene, node) = scene_with_node();
        let mut manager = ActionManager::new();
        let action = move_to(&mut scene, node, 10.0, 0.0, 1.0);
        manager.add_action(node, action);

        scene.remove(node);
        manager.update(&mut scene, 0.1);
        assert!(manager.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let (_, node) = scene_with_node();
        let mut manager = ActionManager::new();
        let a = manager.add_action(node, Delay::new(1.0));
        let b = manager.add_action(node, Delay::new(1.0));
        assert_ne!(a, b);
    }
}
