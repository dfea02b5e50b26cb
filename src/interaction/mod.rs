//! Hover and selection handling for furniture items.
//!
//! The controller never owns scene items. It remembers hovered and selected
//! items by [`ItemId`] and resolves them through the [`FurnitureGroup`] passed
//! into each call. Pointer handling is synchronous; the only deferred work is
//! the click-feedback step, driven by [`SelectionController::tick`].

mod panel;

pub use panel::InfoPanel;

use crate::render::pick::{pick_nearest, PickHit};
use crate::render::OrbitCamera;
use crate::scene::{FurnitureGroup, ItemId};
use glam::{Vec2, Vec3};
use std::time::Duration;

pub const HOVER_COLOR: u32 = 0xff6b35;
pub const HOVER_EMISSIVE: u32 = 0x331100;
pub const HOVER_SCALE: f32 = 1.05;
pub const SELECTED_COLOR: u32 = 0xffd700;
pub const SELECTED_EMISSIVE: u32 = 0x444400;
pub const CLICK_SCALE_UP: f32 = 1.1;
pub const CLICK_SCALE_DOWN: f32 = 0.95;
pub const CLICK_FEEDBACK_DELAY: Duration = Duration::from_millis(150);

/// Pending restore of the selected item's scale after a click.
#[derive(Debug, Clone, PartialEq)]
struct ClickFeedback {
    item: ItemId,
    due: Duration,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    hovered: Option<ItemId>,
    selected: Option<ItemId>,
    click_feedback: Option<ClickFeedback>,
}

#[derive(Debug, Default)]
pub struct SelectionController {
    state: InteractionState,
    panel: InfoPanel,
    pointer_cursor: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        log::info!("Initializing bedroom interaction...");
        Self::default()
    }

    pub fn hovered(&self) -> Option<&ItemId> {
        self.state.hovered.as_ref()
    }

    pub fn selected(&self) -> Option<&ItemId> {
        self.state.selected.as_ref()
    }

    pub fn click_animation_in_progress(&self) -> bool {
        self.state.click_feedback.is_some()
    }

    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    /// Whether the pointer is over something clickable.
    pub fn pointer_cursor(&self) -> bool {
        self.pointer_cursor
    }

    /// Pick under `ndc` and update hover state.
    pub fn pointer_moved(&mut self, ndc: Vec2, camera: &OrbitCamera, group: &mut FurnitureGroup) {
        let hit = pick_nearest(group, &camera.ray_through(ndc));
        self.hover(interactable(hit).as_ref(), group);
    }

    /// Pick under `ndc` and update selection.
    pub fn pointer_clicked(
        &mut self,
        ndc: Vec2,
        camera: &OrbitCamera,
        group: &mut FurnitureGroup,
        now: Duration,
    ) {
        let hit = pick_nearest(group, &camera.ray_through(ndc));
        if let Some(hit) = &hit {
            log::debug!(
                "click hit {} at {:.2} ({:.2} away)",
                hit.item,
                hit.point,
                hit.distance
            );
        }
        self.click(interactable(hit).as_ref(), group, now);
    }

    /// Apply a hover result. `hit` is the nearest item under the pointer.
    pub fn hover(&mut self, hit: Option<&ItemId>, group: &mut FurnitureGroup) {
        let target = hit.filter(|id| is_interactable(group, id)).cloned();

        match target {
            Some(id) if self.state.selected.as_ref() != Some(&id) => {
                self.pointer_cursor = true;
                if self.state.hovered.as_ref() != Some(&id) {
                    self.release_hover(group);
                    log::debug!("hover {}", id);
                }
                if let Some(item) = group.get_mut(&id) {
                    item.material.color = HOVER_COLOR;
                    item.material.emissive = HOVER_EMISSIVE;
                    item.transform.scale = Vec3::splat(HOVER_SCALE);
                }
                self.state.hovered = Some(id);
            }
            // Nothing, or the selected item: selection styling wins.
            _ => {
                self.pointer_cursor = false;
                self.release_hover(group);
            }
        }
    }

    /// Apply a click result. `hit` is the nearest item under the pointer.
    pub fn click(&mut self, hit: Option<&ItemId>, group: &mut FurnitureGroup, now: Duration) {
        let target = hit.filter(|id| is_interactable(group, id)).cloned();
        self.deselect(group);

        let Some(id) = target else {
            self.panel.hide();
            return;
        };

        if self.state.hovered.as_ref() == Some(&id) {
            self.state.hovered = None;
        }
        let Some(item) = group.get_mut(&id) else {
            return;
        };
        log::debug!("select {}", id);

        item.material.color = SELECTED_COLOR;
        item.material.emissive = SELECTED_EMISSIVE;
        item.transform.scale = Vec3::splat(CLICK_SCALE_UP);
        self.panel.show(&item.tag.title, &item.tag.description);

        item.transform.scale = Vec3::splat(CLICK_SCALE_DOWN);
        self.state.click_feedback = Some(ClickFeedback {
            item: id.clone(),
            due: now + CLICK_FEEDBACK_DELAY,
        });
        self.state.selected = Some(id);
    }

    /// Hide the info panel. Also drops the current selection.
    pub fn close_info_panel(&mut self, group: &mut FurnitureGroup) {
        self.panel.hide();
        self.deselect(group);
    }

    /// Run the click-feedback step once its delay has passed.
    pub fn tick(&mut self, now: Duration, group: &mut FurnitureGroup) {
        let due = matches!(&self.state.click_feedback, Some(feedback) if now >= feedback.due);
        if !due {
            return;
        }
        let Some(feedback) = self.state.click_feedback.take() else {
            return;
        };
        if self.state.selected.as_ref() != Some(&feedback.item) {
            return;
        }
        if let Some(item) = group.get_mut(&feedback.item) {
            item.transform.scale = Vec3::splat(CLICK_SCALE_UP);
        }
    }

    fn deselect(&mut self, group: &mut FurnitureGroup) {
        let Some(id) = self.state.selected.take() else {
            return;
        };
        log::debug!("deselect {}", id);
        if self
            .state
            .click_feedback
            .as_ref()
            .is_some_and(|feedback| feedback.item == id)
        {
            self.state.click_feedback = None;
        }
        revert_appearance(group, &id);
    }

    fn release_hover(&mut self, group: &mut FurnitureGroup) {
        let Some(id) = self.state.hovered.take() else {
            return;
        };
        if self.state.selected.as_ref() != Some(&id) {
            revert_appearance(group, &id);
        }
    }
}

fn interactable(hit: Option<PickHit>) -> Option<ItemId> {
    hit.filter(|hit| hit.interactable).map(|hit| hit.item)
}

fn is_interactable(group: &FurnitureGroup, id: &ItemId) -> bool {
    group.get(id).is_some_and(|item| item.tag.interactable)
}

/// Restore tagged color, clear emissive and reset scale.
pub fn revert_appearance(group: &mut FurnitureGroup, id: &ItemId) {
    if let Some(item) = group.get_mut(id) {
        item.material.color = item.tag.original_color;
        item.material.emissive = 0x000000;
        item.transform.scale = item.tag.original_scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OrbitSettings;
    use crate::scene::{bedroom_catalog, build_bedroom, Material, SceneItem};

    const MS: Duration = Duration::from_millis(1);

    fn group() -> FurnitureGroup {
        build_bedroom(&bedroom_catalog(), 0).group
    }

    fn id(name: &str) -> ItemId {
        ItemId::new(name)
    }

    fn item<'a>(group: &'a FurnitureGroup, name: &str) -> &'a SceneItem {
        group.get(&id(name)).unwrap()
    }

    fn assert_original(group: &FurnitureGroup, name: &str) {
        let item = item(group, name);
        assert_eq!(item.material.color, item.tag.original_color);
        assert_eq!(item.material.emissive, 0);
        assert_eq!(item.transform.scale, Vec3::ONE);
    }

    #[test]
    fn hover_styles_item_and_sets_cursor() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.hover(Some(&id("nightstand")), &mut group);

        assert_eq!(controller.hovered(), Some(&id("nightstand")));
        assert!(controller.pointer_cursor());
        let nightstand = item(&group, "nightstand");
        assert_eq!(nightstand.material.color, HOVER_COLOR);
        assert_eq!(nightstand.material.emissive, HOVER_EMISSIVE);
        assert_eq!(nightstand.transform.scale, Vec3::splat(1.05));
    }

    #[test]
    fn moving_to_another_item_reverts_the_previous_one() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.hover(Some(&id("nightstand")), &mut group);
        controller.hover(Some(&id("headboard")), &mut group);

        assert_original(&group, "nightstand");
        assert_eq!(controller.hovered(), Some(&id("headboard")));
        assert_eq!(item(&group, "headboard").material.color, HOVER_COLOR);
    }

    #[test]
    fn move_without_hit_clears_hover_and_cursor() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.hover(Some(&id("mattress")), &mut group);
        controller.hover(None, &mut group);

        assert_eq!(controller.hovered(), None);
        assert!(!controller.pointer_cursor());
        assert_original(&group, "mattress");

        controller.hover(None, &mut group);
        assert_eq!(controller.hovered(), None);
    }

    #[test]
    fn hovering_selected_item_changes_nothing() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.click(Some(&id("lampshade")), &mut group, Duration::ZERO);
        controller.tick(200 * MS, &mut group);
        let before = item(&group, "lampshade").clone();

        controller.hover(Some(&id("lampshade")), &mut group);

        let after = item(&group, "lampshade");
        assert_eq!(after.material, before.material);
        assert_eq!(after.transform.scale, before.transform.scale);
        assert_eq!(controller.hovered(), None);
        assert!(!controller.pointer_cursor());
    }

    #[test]
    fn hover_elsewhere_leaves_selection_styling_alone() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.click(Some(&id("lampshade")), &mut group, Duration::ZERO);
        controller.hover(Some(&id("mattress")), &mut group);
        controller.hover(None, &mut group);

        assert_eq!(item(&group, "lampshade").material.color, SELECTED_COLOR);
        assert_original(&group, "mattress");
    }

    #[test]
    fn clicking_hovered_item_moves_it_from_hover_to_selection() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.hover(Some(&id("headboard")), &mut group);
        controller.click(Some(&id("headboard")), &mut group, Duration::ZERO);

        assert_eq!(controller.hovered(), None);
        assert_eq!(controller.selected(), Some(&id("headboard")));
        let headboard = item(&group, "headboard");
        assert_eq!(headboard.material.color, SELECTED_COLOR);
        assert_eq!(headboard.material.emissive, SELECTED_EMISSIVE);
    }

    #[test]
    fn click_opens_panel_with_item_text() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.click(Some(&id("mattress")), &mut group, Duration::ZERO);

        let panel = controller.panel();
        assert!(panel.is_visible());
        assert_eq!(panel.title(), "Mattress");
        assert!(panel.description().starts_with("Comfortable memory foam"));
    }

    #[test]
    fn click_on_empty_space_clears_selection_and_is_idempotent() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.click(Some(&id("mattress")), &mut group, Duration::ZERO);
        controller.click(None, &mut group, 10 * MS);

        assert_eq!(controller.selected(), None);
        assert!(!controller.panel().is_visible());
        assert_original(&group, "mattress");

        let state = controller.state.clone();
        controller.click(None, &mut group, 20 * MS);
        assert_eq!(controller.state, state);
        assert!(!controller.panel().is_visible());
    }

    #[test]
    fn selecting_b_reverts_a_first() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.click(Some(&id("nightstand")), &mut group, Duration::ZERO);
        controller.click(Some(&id("headboard")), &mut group, 50 * MS);

        assert_original(&group, "nightstand");
        assert_eq!(controller.selected(), Some(&id("headboard")));
        assert_eq!(item(&group, "headboard").material.color, SELECTED_COLOR);
        assert_eq!(controller.panel().title(), "Headboard");
    }

    #[test]
    fn click_feedback_scale_sequence() {
        let mut group = group();
        let mut controller = SelectionController::new();
        let start = Duration::from_secs(3);
        controller.click(Some(&id("nightstand")), &mut group, start);

        assert!(controller.click_animation_in_progress());
        assert_eq!(item(&group, "nightstand").transform.scale, Vec3::splat(0.95));

        controller.tick(start + 149 * MS, &mut group);
        assert!(controller.click_animation_in_progress());
        assert_eq!(item(&group, "nightstand").transform.scale, Vec3::splat(0.95));

        controller.tick(start + 150 * MS, &mut group);
        assert!(!controller.click_animation_in_progress());
        assert_eq!(item(&group, "nightstand").transform.scale, Vec3::splat(1.1));
    }

    #[test]
    fn deselect_cancels_pending_feedback() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.click(Some(&id("nightstand")), &mut group, Duration::ZERO);
        controller.click(None, &mut group, 50 * MS);
        assert!(!controller.click_animation_in_progress());

        controller.tick(500 * MS, &mut group);
        assert_original(&group, "nightstand");
    }

    #[test]
    fn reselect_restarts_feedback_for_new_item() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.click(Some(&id("nightstand")), &mut group, Duration::ZERO);
        controller.click(Some(&id("headboard")), &mut group, 100 * MS);

        // the first item's deadline passes without touching either item
        controller.tick(160 * MS, &mut group);
        assert_original(&group, "nightstand");
        assert_eq!(item(&group, "headboard").transform.scale, Vec3::splat(0.95));
        assert!(controller.click_animation_in_progress());

        controller.tick(250 * MS, &mut group);
        assert_eq!(item(&group, "headboard").transform.scale, Vec3::splat(1.1));
    }

    #[test]
    fn clicking_the_selected_item_again_reapplies_selection() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.click(Some(&id("mattress")), &mut group, Duration::ZERO);
        controller.tick(200 * MS, &mut group);
        controller.click(Some(&id("mattress")), &mut group, 300 * MS);

        assert_eq!(controller.selected(), Some(&id("mattress")));
        assert!(controller.click_animation_in_progress());
        assert_eq!(item(&group, "mattress").transform.scale, Vec3::splat(0.95));
    }

    #[test]
    fn close_panel_round_trip_restores_item() {
        let mut group = group();
        let mut controller = SelectionController::new();
        let before: Material = item(&group, "lamp-base").material;
        controller.click(Some(&id("lamp-base")), &mut group, Duration::ZERO);
        controller.close_info_panel(&mut group);

        assert!(!controller.panel().is_visible());
        assert_eq!(controller.selected(), None);
        assert_eq!(item(&group, "lamp-base").material, before);
        assert_eq!(item(&group, "lamp-base").transform.scale, Vec3::ONE);
        assert!(!controller.click_animation_in_progress());
    }

    #[test]
    fn moving_from_hovered_item_onto_selection_reverts_hover_only() {
        let mut group = group();
        let mut controller = SelectionController::new();
        controller.hover(Some(&id("nightstand")), &mut group);
        controller.click(Some(&id("headboard")), &mut group, Duration::ZERO);
        controller.hover(Some(&id("headboard")), &mut group);

        assert_eq!(controller.hovered(), None);
        assert!(!controller.pointer_cursor());
        assert_original(&group, "nightstand");
        let headboard = item(&group, "headboard");
        assert_eq!(headboard.material.color, SELECTED_COLOR);
        assert_eq!(headboard.material.emissive, SELECTED_EMISSIVE);

        controller.close_info_panel(&mut group);
        controller.close_info_panel(&mut group);
        assert!(!controller.panel().is_visible());
        assert_eq!(controller.selected(), None);

        controller.tick(400 * MS, &mut group);
        assert_original(&group, "headboard");
    }

    #[test]
    fn non_interactable_items_behave_like_empty_space() {
        let mut group = group();
        group.get_mut(&id("headboard")).unwrap().tag.interactable = false;
        let mut controller = SelectionController::new();

        controller.hover(Some(&id("headboard")), &mut group);
        assert_eq!(controller.hovered(), None);
        assert_original(&group, "headboard");

        controller.click(Some(&id("headboard")), &mut group, Duration::ZERO);
        assert_eq!(controller.selected(), None);
        assert!(!controller.panel().is_visible());
    }

    #[test]
    fn pointer_events_pick_through_the_camera() {
        let mut group = group();
        let camera = OrbitCamera::new(
            Vec3::new(8.0, 6.0, 8.0),
            Vec3::ZERO,
            16.0 / 9.0,
            OrbitSettings::default(),
        );
        let mattress_top = camera
            .view_projection()
            .project_point3(Vec3::new(0.0, 0.75, 0.5));
        let ndc = Vec2::new(mattress_top.x, mattress_top.y);
        let mut controller = SelectionController::new();

        controller.pointer_moved(ndc, &camera, &mut group);
        assert_eq!(controller.hovered(), Some(&id("mattress")));

        controller.pointer_clicked(ndc, &camera, &mut group, Duration::ZERO);
        assert_eq!(controller.selected(), Some(&id("mattress")));

        controller.pointer_moved(Vec2::new(0.0, 0.99), &camera, &mut group);
        assert_eq!(controller.hovered(), None);
        assert!(!controller.pointer_cursor());
    }
}
