//! Hover tooltip state machine.
//!
//! One instance per chart. The controller is driven by whatever pointer
//! abstraction the host provides — pointer events or a polling hit-test —
//! and only ever reads the scene, so moving the pointer never triggers a
//! recompute of the underlying statistics.

use crate::geom::Vec2;
use crate::scene::Scene;

/// Ephemeral hover state. `x`/`y` are chart-local pointer coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub x: f32,
    pub y: f32,
    pub content: String,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to `cursor`. Inside a hit target: show that target's
    /// text at the cursor. Anywhere else: identical to leaving.
    pub fn pointer_move(&mut self, scene: &Scene, cursor: Vec2) {
        match scene.hit_test(cursor) {
            Some(target) => {
                self.visible = true;
                self.x = cursor.x;
                self.y = cursor.y;
                self.content.clear();
                self.content.push_str(&target.tooltip);
            }
            None => self.pointer_leave(),
        }
    }

    /// Pointer left the hovered primitive: reset to the initial state.
    pub fn pointer_leave(&mut self) {
        *self = Tooltip::default();
    }

    /// Where the tooltip box renders: slightly above the pointer,
    /// horizontally centered on it. Pure; does not touch the state.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.x, self.y - 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;
    use crate::scene::{HitShape, HitTarget};

    fn scene_with_bar() -> Scene {
        let mut scene = Scene::new(100.0, 100.0);
        scene.targets.push(HitTarget {
            shape: HitShape::Rect(Rect::new(10.0, 10.0, 20.0, 20.0)),
            tooltip: "Level 3: 3 users".to_string(),
        });
        scene
    }

    #[test]
    fn hover_sets_position_and_content() {
        let scene = scene_with_bar();
        let mut tip = Tooltip::new();
        tip.pointer_move(&scene, Vec2::new(15.0, 12.0));
        assert!(tip.visible);
        assert_eq!((tip.x, tip.y), (15.0, 12.0));
        assert_eq!(tip.content, "Level 3: 3 users");
        assert_eq!(tip.anchor(), Vec2::new(15.0, 2.0));
    }

    #[test]
    fn leave_restores_the_initial_state_exactly() {
        let scene = scene_with_bar();
        let mut tip = Tooltip::new();
        tip.pointer_move(&scene, Vec2::new(15.0, 12.0));
        tip.pointer_leave();
        assert_eq!(tip, Tooltip::default());
    }

    #[test]
    fn moving_off_every_target_clears_the_tooltip() {
        let scene = scene_with_bar();
        let mut tip = Tooltip::new();
        tip.pointer_move(&scene, Vec2::new(15.0, 12.0));
        tip.pointer_move(&scene, Vec2::new(90.0, 90.0));
        assert_eq!(tip, Tooltip::default());
    }
}
