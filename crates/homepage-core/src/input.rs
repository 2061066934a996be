use crate::constants::POINTER_RADIUS;
use glam::Vec2;

/// Last known pointer position over the page, fed to the particle field
/// every frame. `position` is `None` once the pointer has left the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: None,
            radius: POINTER_RADIUS,
        }
    }
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    #[inline]
    pub fn leave(&mut self) {
        self.position = None;
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }
}
