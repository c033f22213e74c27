//! Split position of the before/after comparison.
//!
//! The percentage is the horizontal offset of the pointer inside the
//! container, clamped to [0, 100]. It only follows the pointer while a
//! gesture is active, whatever the input modality.

/// Horizontal extent of the comparison container, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

/// Maps a client x coordinate to a split percentage.
///
/// Returns `None` for a container with no width.
pub fn reveal_percentage(pointer_x: f64, bounds: Bounds) -> Option<f64> {
    if !(bounds.width > 0.0) || !pointer_x.is_finite() || !bounds.left.is_finite() {
        return None;
    }
    let raw = (pointer_x - bounds.left) / bounds.width * 100.0;
    Some(raw.clamp(0.0, 100.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderGesture {
    percentage: f64,
    active: bool,
}

impl Default for SliderGesture {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl SliderGesture {
    pub fn new(percentage: f64) -> Self {
        Self {
            percentage: percentage.clamp(0.0, 100.0),
            active: false,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mouse-down or touch-start inside the container.
    pub fn press(&mut self) {
        self.active = true;
    }

    /// Mouse-up, touch-end or touch-cancel anywhere.
    pub fn release(&mut self) {
        self.active = false;
    }

    /// Pointer movement. Ignored unless a gesture is in progress.
    /// Returns whether the percentage changed.
    pub fn move_to(&mut self, pointer_x: f64, bounds: Bounds) -> bool {
        if !self.active {
            return false;
        }
        match reveal_percentage(pointer_x, bounds) {
            Some(percentage) if percentage != self.percentage => {
                self.percentage = percentage;
                true
            }
            _ => false,
        }
    }

    /// Keyboard step, independent of any pointer gesture.
    pub fn nudge(&mut self, delta: f64) {
        self.percentage = (self.percentage + delta).clamp(0.0, 100.0);
    }

    /// `clip-path` for the top ("before") layer, which shows left of the split.
    pub fn clip_path(&self) -> String {
        format!("inset(0 {:.2}% 0 0)", 100.0 - self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Bounds = Bounds { left: 100.0, width: 400.0 };

    #[test]
    fn test_edges_are_exact() {
        assert_eq!(reveal_percentage(100.0, BOX), Some(0.0));
        assert_eq!(reveal_percentage(500.0, BOX), Some(100.0));
        assert_eq!(reveal_percentage(300.0, BOX), Some(50.0));
    }

    #[test]
    fn test_always_within_range() {
        let mut x = -1000.0;
        while x <= 2000.0 {
            let pct = reveal_percentage(x, BOX).unwrap();
            assert!((0.0..=100.0).contains(&pct), "x={} gave {}", x, pct);
            x += 7.5;
        }
        assert_eq!(reveal_percentage(-5.0, BOX), Some(0.0));
        assert_eq!(reveal_percentage(9000.0, BOX), Some(100.0));
    }

    #[test]
    fn test_zero_width_container() {
        let collapsed = Bounds { left: 10.0, width: 0.0 };
        assert_eq!(reveal_percentage(10.0, collapsed), None);
        assert_eq!(reveal_percentage(10.0, Bounds { left: 0.0, width: -3.0 }), None);
        assert_eq!(reveal_percentage(f64::NAN, BOX), None);
    }

    #[test]
    fn test_unmeasurable_bounds_are_rejected() {
        let nan_left = Bounds { left: f64::NAN, width: 10.0 };
        assert_eq!(reveal_percentage(5.0, nan_left), None);
        let inf_left = Bounds { left: f64::INFINITY, width: 10.0 };
        assert_eq!(reveal_percentage(5.0, inf_left), None);

        let mut gesture = SliderGesture::new(40.0);
        gesture.press();
        assert!(!gesture.move_to(5.0, nan_left));
        assert_eq!(gesture.percentage(), 40.0);
    }

    #[test]
    fn test_mouse_move_without_press_is_ignored() {
        let mut gesture = SliderGesture::default();
        assert!(!gesture.move_to(120.0, BOX));
        assert_eq!(gesture.percentage(), 50.0);
    }

    #[test]
    fn test_touch_move_without_start_is_ignored() {
        let mut gesture = SliderGesture::default();
        gesture.press();
        gesture.release();
        assert!(!gesture.move_to(480.0, BOX));
        assert_eq!(gesture.percentage(), 50.0);
    }

    #[test]
    fn test_drag_follows_pointer_until_release() {
        let mut gesture = SliderGesture::default();
        gesture.press();
        assert!(gesture.is_active());
        assert!(gesture.move_to(200.0, BOX));
        assert_eq!(gesture.percentage(), 25.0);
        assert!(gesture.move_to(700.0, BOX));
        assert_eq!(gesture.percentage(), 100.0);
        gesture.release();
        assert!(!gesture.is_active());
        assert!(!gesture.move_to(100.0, BOX));
        assert_eq!(gesture.percentage(), 100.0);
        gesture.release();
        assert!(!gesture.is_active());
    }

    #[test]
    fn test_collapsed_container_keeps_value() {
        let mut gesture = SliderGesture::new(30.0);
        gesture.press();
        assert!(!gesture.move_to(50.0, Bounds { left: 0.0, width: 0.0 }));
        assert_eq!(gesture.percentage(), 30.0);
    }

    #[test]
    fn test_nudge_stays_in_range() {
        let mut gesture = SliderGesture::new(97.0);
        gesture.nudge(5.0);
        assert_eq!(gesture.percentage(), 100.0);
        gesture.nudge(-30.0);
        assert_eq!(gesture.percentage(), 70.0);
        assert!(!gesture.is_active());
    }

    #[test]
    fn test_clip_path() {
        assert_eq!(SliderGesture::new(50.0).clip_path(), "inset(0 50.00% 0 0)");
        assert_eq!(SliderGesture::new(100.0).clip_path(), "inset(0 0.00% 0 0)");
        assert_eq!(SliderGesture::new(140.0).percentage(), 100.0);
    }
}
