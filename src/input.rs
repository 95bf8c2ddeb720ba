//! Pointer input tracking.
//!
//! Converts winit cursor and touch positions into normalized device
//! coordinates (`[-1, 1]` each axis, origin at window center, y up) for the
//! particle field. Only the latest sample matters; the field smooths it
//! per tick, so there is no event queue here.

use glam::Vec2;
use winit::event::{TouchPhase, WindowEvent};

/// Tracks the pointer position in normalized device coordinates.
///
/// Mouse movement and touch drags both feed the same sample, matching how
/// an ambient background treats "the pointer".
#[derive(Debug)]
pub struct Pointer {
    ndc: Vec2,
    window_size: (u32, u32),
}

impl Pointer {
    /// Create a tracker. The pointer starts at the window center.
    pub fn new() -> Self {
        Self {
            ndc: Vec2::ZERO,
            window_size: (800, 600),
        }
    }

    /// Latest pointer sample in normalized device coordinates.
    #[inline]
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Update window size for NDC calculations.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Process a winit window event. Returns `true` if the sample moved,
    /// so the caller knows to forward it to the field.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_position(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::Touch(touch)
                if matches!(touch.phase, TouchPhase::Started | TouchPhase::Moved) =>
            {
                self.set_position(touch.location.x as f32, touch.location.y as f32);
                true
            }
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
                false
            }
            _ => false,
        }
    }

    /// Convert a pixel position to NDC. Y is flipped so up is positive.
    fn set_position(&mut self, px: f32, py: f32) {
        let (w, h) = self.window_size;
        if w > 0 && h > 0 {
            self.ndc = Vec2::new(
                (px / w as f32) * 2.0 - 1.0,
                1.0 - (py / h as f32) * 2.0,
            );
        }
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let mut pointer = Pointer::new();
        pointer.set_window_size(800, 600);
        pointer.set_position(400.0, 300.0);

        assert!(pointer.ndc().x.abs() < 0.01);
        assert!(pointer.ndc().y.abs() < 0.01);
    }

    #[test]
    fn test_corners_map_to_unit_square() {
        let mut pointer = Pointer::new();
        pointer.set_window_size(1_000, 500);

        pointer.set_position(0.0, 0.0);
        assert_eq!(pointer.ndc(), Vec2::new(-1.0, 1.0));

        pointer.set_position(1_000.0, 500.0);
        assert_eq!(pointer.ndc(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_zero_size_window_keeps_last_sample() {
        let mut pointer = Pointer::new();
        pointer.set_window_size(800, 600);
        pointer.set_position(600.0, 150.0);
        let before = pointer.ndc();

        pointer.set_window_size(0, 0);
        pointer.set_position(100.0, 100.0);
        assert_eq!(pointer.ndc(), before);
    }
}
