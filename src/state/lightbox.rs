//! Lightbox state: which image is shown, whether the viewer is active, and
//! the focus ring while it is modal.

use crate::state::focus::LightboxControl;
use crate::state::scroll::ScrollLock;
use log::{debug, warn};

/// Modal image viewer state over a fixed item count.
///
/// `current_index` always satisfies `0 <= current_index < item_count` once
/// the gallery is non-empty; an empty gallery never attaches a lightbox.
#[derive(Debug)]
pub struct LightboxState {
    item_count: usize,
    is_open: bool,
    current_index: usize,
    focused: LightboxControl,
    scroll_lock: ScrollLock,
}

impl LightboxState {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            is_open: false,
            current_index: 0,
            focused: LightboxControl::Close,
            scroll_lock: ScrollLock::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The control holding logical focus while the viewer is modal.
    pub fn focused_control(&self) -> LightboxControl {
        self.focused
    }

    /// Opens the viewer at `index`, locking page scroll at `page_offset`
    /// and placing focus on the close control. Returns false (and does
    /// nothing) when `index` is out of range.
    pub fn open(&mut self, index: usize, page_offset: f32) -> bool {
        if index >= self.item_count {
            warn!(
                "Lightbox open rejected: index {} out of range ({} items)",
                index, self.item_count
            );
            return false;
        }
        self.current_index = index;
        self.is_open = true;
        self.focused = LightboxControl::Close;
        self.scroll_lock.lock(page_offset);
        debug!("Lightbox opened at index {}", index);
        true
    }

    /// Closes the viewer and returns the page offset to restore. Idempotent:
    /// closing an already-closed viewer returns `None` and changes nothing.
    pub fn close(&mut self) -> Option<f32> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        debug!("Lightbox closed");
        self.scroll_lock.unlock()
    }

    /// Advances to the next item, wrapping from the last index to 0.
    /// Scroll lock and focus are untouched.
    pub fn show_next(&mut self) {
        if self.item_count == 0 {
            return;
        }
        self.current_index = if self.current_index >= self.item_count - 1 {
            0
        } else {
            self.current_index + 1
        };
    }

    /// Moves to the previous item, wrapping from index 0 to the last index.
    pub fn show_previous(&mut self) {
        if self.item_count == 0 {
            return;
        }
        self.current_index = if self.current_index == 0 {
            self.item_count - 1
        } else {
            self.current_index - 1
        };
    }

    /// Counter text for the displayed item: `"{position+1} / {total}"`.
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.item_count)
    }

    /// Cycles the focus ring one step; Tab wraps from the last control back
    /// to the first and Shift+Tab the other way. Focus never leaves the
    /// modal. No-op while closed.
    pub fn focus_step(&mut self, forward: bool) {
        if !self.is_open {
            return;
        }
        self.focused = if forward {
            self.focused.next()
        } else {
            self.focused.previous()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sets_index_and_locks_scroll() {
        let mut lb = LightboxState::new(3);
        assert!(lb.open(2, 480.0));
        assert!(lb.is_open());
        assert_eq!(lb.current_index(), 2);
        assert_eq!(lb.counter_text(), "3 / 3");
        assert_eq!(lb.focused_control(), LightboxControl::Close);
        assert_eq!(lb.close(), Some(480.0));
    }

    #[test]
    fn open_rejects_out_of_range_index() {
        let mut lb = LightboxState::new(3);
        assert!(!lb.open(3, 0.0));
        assert!(!lb.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut lb = LightboxState::new(2);
        assert_eq!(lb.close(), None);
        lb.open(0, 100.0);
        assert_eq!(lb.close(), Some(100.0));
        assert_eq!(lb.close(), None);
    }

    #[test]
    fn counter_text_matches_position_for_all_indices() {
        let mut lb = LightboxState::new(4);
        for i in 0..4 {
            lb.open(i, 0.0);
            assert_eq!(lb.counter_text(), format!("{} / 4", i + 1));
            lb.close();
        }
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut lb = LightboxState::new(3);
        lb.open(2, 0.0);
        assert_eq!(lb.counter_text(), "3 / 3");
        lb.show_next();
        assert_eq!(lb.current_index(), 0);
        assert_eq!(lb.counter_text(), "1 / 3");
        lb.show_previous();
        assert_eq!(lb.current_index(), 2);
        assert_eq!(lb.counter_text(), "3 / 3");
    }

    #[test]
    fn next_composed_item_count_times_returns_to_start() {
        for count in 1..6 {
            let mut lb = LightboxState::new(count);
            for start in 0..count {
                lb.open(start, 0.0);
                for _ in 0..count {
                    lb.show_next();
                }
                assert_eq!(lb.current_index(), start);
                lb.close();
            }
        }
    }

    #[test]
    fn single_item_navigation_redisplays_same_item() {
        let mut lb = LightboxState::new(1);
        lb.open(0, 0.0);
        lb.show_next();
        assert_eq!(lb.current_index(), 0);
        lb.show_previous();
        assert_eq!(lb.current_index(), 0);
        assert_eq!(lb.counter_text(), "1 / 1");
    }

    #[test]
    fn focus_ring_cycles_within_the_modal() {
        let mut lb = LightboxState::new(2);
        lb.open(0, 0.0);
        assert_eq!(lb.focused_control(), LightboxControl::Close);
        lb.focus_step(true);
        assert_eq!(lb.focused_control(), LightboxControl::Prev);
        lb.focus_step(false);
        lb.focus_step(false);
        assert_eq!(lb.focused_control(), LightboxControl::Download);
        lb.focus_step(true);
        assert_eq!(lb.focused_control(), LightboxControl::Close);
    }

    #[test]
    fn focus_step_is_gated_on_open() {
        let mut lb = LightboxState::new(2);
        lb.focus_step(true);
        assert_eq!(lb.focused_control(), LightboxControl::Close);
    }

    #[test]
    fn reopen_locks_scroll_at_new_offset() {
        let mut lb = LightboxState::new(2);
        lb.open(0, 10.0);
        lb.close();
        lb.open(1, 990.0);
        assert_eq!(lb.close(), Some(990.0));
    }
}
