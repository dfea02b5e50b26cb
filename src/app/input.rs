use glam::Vec2;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pointer travel, in physical pixels, below which a press and release
/// count as a click rather than an orbit drag.
pub const CLICK_SLOP_PX: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    ToggleAutoRotate,
    ToggleFloating,
}

pub fn key_action(key: PhysicalKey) -> InputAction {
    match key {
        PhysicalKey::Code(KeyCode::KeyR) => InputAction::ToggleAutoRotate,
        PhysicalKey::Code(KeyCode::KeyF) => InputAction::ToggleFloating,
        _ => InputAction::None,
    }
}

/// Left-button state for the viewport.
#[derive(Default, Debug, Clone, Copy)]
pub struct PointerState {
    position: Option<Vec2>,
    press_origin: Option<Vec2>,
    travel: f32,
}

impl PointerState {
    pub fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Record a cursor move. Returns the drag delta while the button is held.
    pub fn moved(&mut self, position: Vec2) -> Option<Vec2> {
        let previous = self.position.replace(position);
        self.press_origin?;
        let delta = position - previous?;
        self.travel += delta.length();
        Some(delta)
    }

    pub fn left(&mut self) {
        self.position = None;
    }

    pub fn press(&mut self) {
        self.press_origin = self.position;
        self.travel = 0.0;
    }

    /// Returns the click position if the press never turned into a drag.
    pub fn release(&mut self) -> Option<Vec2> {
        let origin = self.press_origin.take()?;
        (self.travel < CLICK_SLOP_PX).then_some(self.position.unwrap_or(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_release_in_place_is_a_click() {
        let mut pointer = PointerState::default();
        pointer.moved(Vec2::new(100.0, 100.0));
        pointer.press();
        pointer.moved(Vec2::new(102.0, 101.0));
        assert_eq!(pointer.release(), Some(Vec2::new(102.0, 101.0)));
        assert!(!pointer.is_pressed());
    }

    #[test]
    fn drag_is_not_a_click() {
        let mut pointer = PointerState::default();
        pointer.moved(Vec2::new(100.0, 100.0));
        pointer.press();
        let delta = pointer.moved(Vec2::new(140.0, 90.0)).unwrap();
        assert_eq!(delta, Vec2::new(40.0, -10.0));
        assert_eq!(pointer.release(), None);
    }

    #[test]
    fn moves_without_press_report_no_drag() {
        let mut pointer = PointerState::default();
        assert_eq!(pointer.moved(Vec2::new(1.0, 1.0)), None);
        assert_eq!(pointer.moved(Vec2::new(5.0, 1.0)), None);
        assert_eq!(pointer.release(), None);
    }

    #[test]
    fn key_bindings() {
        assert_eq!(
            key_action(PhysicalKey::Code(KeyCode::KeyR)),
            InputAction::ToggleAutoRotate
        );
        assert_eq!(
            key_action(PhysicalKey::Code(KeyCode::KeyF)),
            InputAction::ToggleFloating
        );
        assert_eq!(key_action(PhysicalKey::Code(KeyCode::KeyQ)), InputAction::None);
    }
}
