//! Horizontal swipe recognition for the lightbox.
//!
//! Only the start and end coordinates of the terminating touch sequence
//! matter; vertical-dominant or sub-threshold gestures are ignored.

use crate::config::SWIPE_THRESHOLD_PX;

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left (start minus end is positive): show the next item.
    Leftward,
    /// Finger moved right: show the previous item.
    Rightward,
}

/// Tracks one touch sequence from press to release.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Ends the sequence and classifies it. Returns `None` for
    /// sub-threshold or vertical-dominant gestures, or when no sequence
    /// was begun.
    pub fn end(&mut self, x: f32, y: f32) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.start.take()?;
        let dx = start_x - x;
        let dy = start_y - y;
        if dy.abs() >= dx.abs() {
            return None;
        }
        if dx.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if dx > 0.0 {
            Some(SwipeDirection::Leftward)
        } else {
            Some(SwipeDirection::Rightward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: (f32, f32), to: (f32, f32)) -> Option<SwipeDirection> {
        let mut tracker = SwipeTracker::new();
        tracker.begin(from.0, from.1);
        tracker.end(to.0, to.1)
    }

    #[test]
    fn leftward_swipe_past_threshold_is_next() {
        assert_eq!(swipe((200.0, 10.0), (100.0, 12.0)), Some(SwipeDirection::Leftward));
    }

    #[test]
    fn rightward_swipe_past_threshold_is_previous() {
        assert_eq!(swipe((100.0, 10.0), (220.0, 8.0)), Some(SwipeDirection::Rightward));
    }

    #[test]
    fn sub_threshold_displacement_is_ignored() {
        assert_eq!(swipe((100.0, 0.0), (60.0, 0.0)), None);
        assert_eq!(swipe((100.0, 0.0), (150.0, 0.0)), None);
    }

    #[test]
    fn vertical_dominant_gesture_is_ignored() {
        assert_eq!(swipe((200.0, 0.0), (120.0, 300.0)), None);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.end(0.0, 0.0), None);
    }

    #[test]
    fn tracker_resets_after_end() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0, 0.0);
        assert_eq!(tracker.end(100.0, 0.0), Some(SwipeDirection::Leftward));
        assert_eq!(tracker.end(100.0, 0.0), None);
    }
}
