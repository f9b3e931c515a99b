//! Logical keyboard focus: the lightbox focus-trap ring and dropdown menu
//! focus stepping.
//!
//! The scene renders focus as a projection of these values; Tab order is
//! never delegated to the toolkit while a widget is modal.

/// Interactive controls of the open lightbox, in trap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxControl {
    Close,
    Prev,
    Next,
    Download,
}

impl LightboxControl {
    const RING: [LightboxControl; 4] = [
        LightboxControl::Close,
        LightboxControl::Prev,
        LightboxControl::Next,
        LightboxControl::Download,
    ];

    fn ring_position(self) -> usize {
        Self::RING.iter().position(|&c| c == self).unwrap_or(0)
    }

    /// Next control, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        Self::RING[(self.ring_position() + 1) % Self::RING.len()]
    }

    /// Previous control, wrapping from the first back to the last.
    pub fn previous(self) -> Self {
        let pos = self.ring_position();
        Self::RING[(pos + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// Stable index for projecting into the scene.
    pub fn as_index(self) -> usize {
        self.ring_position()
    }
}

/// Keys that steer focus inside an open dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    ArrowDown,
    ArrowUp,
    Escape,
}

/// Outcome of a key press on a dropdown menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFocusMove {
    /// Move focus to the entry at this index.
    FocusEntry(usize),
    /// Move focus back to the region's trigger control.
    FocusTrigger,
    /// Close the region and return focus to its trigger.
    CloseAndFocusTrigger,
    /// Nothing changes.
    None,
}

/// Steps focus for a key pressed while entry `current` of a menu with
/// `entry_count` entries holds focus.
///
/// ArrowDown stops at the last entry (no wraparound); ArrowUp from the
/// first entry returns to the trigger; Escape closes the region.
pub fn step_menu_focus(current: usize, entry_count: usize, key: MenuKey) -> MenuFocusMove {
    match key {
        MenuKey::ArrowDown => {
            if current + 1 < entry_count {
                MenuFocusMove::FocusEntry(current + 1)
            } else {
                MenuFocusMove::None
            }
        }
        MenuKey::ArrowUp => {
            if current > 0 {
                MenuFocusMove::FocusEntry(current - 1)
            } else {
                MenuFocusMove::FocusTrigger
            }
        }
        MenuKey::Escape => MenuFocusMove::CloseAndFocusTrigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_wraps_forward_and_backward() {
        assert_eq!(LightboxControl::Download.next(), LightboxControl::Close);
        assert_eq!(LightboxControl::Close.previous(), LightboxControl::Download);
        assert_eq!(LightboxControl::Close.next(), LightboxControl::Prev);
        assert_eq!(LightboxControl::Next.previous(), LightboxControl::Prev);
    }

    #[test]
    fn full_cycle_visits_every_control_once() {
        let mut seen = vec![];
        let mut control = LightboxControl::Close;
        for _ in 0..4 {
            seen.push(control);
            control = control.next();
        }
        assert_eq!(control, LightboxControl::Close);
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn arrow_down_stops_at_last_entry() {
        assert_eq!(
            step_menu_focus(0, 3, MenuKey::ArrowDown),
            MenuFocusMove::FocusEntry(1)
        );
        assert_eq!(step_menu_focus(2, 3, MenuKey::ArrowDown), MenuFocusMove::None);
    }

    #[test]
    fn arrow_up_returns_to_trigger_from_first_entry() {
        assert_eq!(
            step_menu_focus(2, 3, MenuKey::ArrowUp),
            MenuFocusMove::FocusEntry(1)
        );
        assert_eq!(step_menu_focus(0, 3, MenuKey::ArrowUp), MenuFocusMove::FocusTrigger);
    }

    #[test]
    fn escape_closes_and_refocuses_trigger() {
        assert_eq!(
            step_menu_focus(1, 3, MenuKey::Escape),
            MenuFocusMove::CloseAndFocusTrigger
        );
    }
}
