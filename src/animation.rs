//! Idle motion: the furniture group bobs and the selected item sways.

use crate::interaction::SelectionController;
use crate::scene::FurnitureGroup;

const FLOAT_FREQUENCY: f32 = 0.3;
const FLOAT_AMPLITUDE: f32 = 0.05;
const SWAY_FREQUENCY: f32 = 1.5;
const SWAY_AMPLITUDE: f32 = 0.05;

/// Vertical group offset at `t` seconds.
pub fn float_offset(t: f32) -> f32 {
    (t * FLOAT_FREQUENCY).sin() * FLOAT_AMPLITUDE
}

/// Y rotation of the selected item at `t` seconds.
pub fn idle_rotation(t: f32) -> f32 {
    (t * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE
}

#[derive(Debug, Clone)]
pub struct FloatAnimator {
    floating: bool,
}

impl FloatAnimator {
    pub fn new(floating: bool, group: &mut FurnitureGroup) -> Self {
        log::info!("Initializing bedroom animation...");
        group.set_offset_y(0.0);
        Self { floating }
    }

    pub fn floating(&self) -> bool {
        self.floating
    }

    /// Disabling puts the group back at rest immediately.
    pub fn set_floating(&mut self, enabled: bool, group: &mut FurnitureGroup) {
        self.floating = enabled;
        if !enabled {
            group.set_offset_y(0.0);
        }
    }

    pub fn update(&self, t: f32, group: &mut FurnitureGroup, selection: &SelectionController) {
        if self.floating {
            group.set_offset_y(float_offset(t));
        }

        // The click feedback owns the item transform until it finishes.
        if selection.click_animation_in_progress() {
            return;
        }
        if let Some(item) = selection.selected().and_then(|id| group.get_mut(id)) {
            item.transform.rotation.y = idle_rotation(t);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{bedroom_catalog, build_bedroom, ItemId};
    use std::f32::consts::TAU;
    use std::time::Duration;

    fn group() -> FurnitureGroup {
        build_bedroom(&bedroom_catalog(), 0).group
    }

    #[test]
    fn float_offset_starts_at_rest_and_is_periodic() {
        assert_eq!(float_offset(0.0), 0.0);
        let period = TAU / FLOAT_FREQUENCY;
        for t in [0.4f32, 1.7, 5.0, 11.3] {
            assert!((float_offset(t) - float_offset(t + period)).abs() < 1e-4);
            assert!(float_offset(t).abs() <= FLOAT_AMPLITUDE);
        }
    }

    #[test]
    fn update_moves_group_while_floating() {
        let mut group = group();
        let animator = FloatAnimator::new(true, &mut group);
        let selection = SelectionController::new();
        animator.update(2.0, &mut group, &selection);
        assert!((group.transform.position.y - float_offset(2.0)).abs() < 1e-6);
    }

    #[test]
    fn disabling_float_resets_immediately() {
        let mut group = group();
        let mut animator = FloatAnimator::new(true, &mut group);
        let selection = SelectionController::new();
        animator.update(3.0, &mut group, &selection);
        assert!(group.transform.position.y != 0.0);

        animator.set_floating(false, &mut group);
        assert_eq!(group.transform.position.y, 0.0);
        animator.update(4.0, &mut group, &selection);
        assert_eq!(group.transform.position.y, 0.0);
    }

    #[test]
    fn selected_item_sways_only_after_click_feedback() {
        let mut group = group();
        let animator = FloatAnimator::new(true, &mut group);
        let mut selection = SelectionController::new();
        let id = ItemId::new("nightstand");
        selection.click(Some(&id), &mut group, Duration::ZERO);

        animator.update(1.0, &mut group, &selection);
        assert_eq!(group.get(&id).unwrap().transform.rotation.y, 0.0);

        selection.tick(Duration::from_millis(150), &mut group);
        animator.update(1.0, &mut group, &selection);
        let rotation = group.get(&id).unwrap().transform.rotation.y;
        assert!((rotation - idle_rotation(1.0)).abs() < 1e-6);

        // unselected items never sway
        let mattress = group.get(&ItemId::new("mattress")).unwrap();
        assert_eq!(mattress.transform.rotation.y, 0.0);
    }
}
