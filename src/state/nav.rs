//! Navigation bar state: the mobile full-screen menu, the mobile
//! accordion, the desktop dropdowns, and the scrolled styling flag.
//!
//! The accordion and the dropdowns are two instances of the same exclusive
//! panel machine; the menu owns the page scroll lock while it is open.

use crate::config::SCROLLED_THRESHOLD_PX;
use crate::state::focus::{self, MenuFocusMove, MenuKey};
use crate::state::panels::ExclusivePanelSet;
use crate::state::scroll::ScrollLock;
use log::debug;

/// Result of toggling the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuTransition {
    Opened,
    Closed { restore_to: f32 },
}

/// What a single Escape press did. Overlay closing takes priority; the
/// dropdowns are only considered when the overlay is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeOutcome {
    ClosedOverlay { restore_to: f32 },
    ClosedDropdowns,
    NoChange,
}

/// All state slices of the one navigation bar.
#[derive(Debug)]
pub struct NavState {
    menu_open: bool,
    scroll_lock: ScrollLock,
    accordion: ExclusivePanelSet,
    dropdowns: ExclusivePanelSet,
    scrolled: bool,
    /// Focused entry inside the open dropdown; `None` means the trigger
    /// (or nothing) holds focus.
    menu_focus: Option<usize>,
}

impl NavState {
    pub fn new(section_count: usize) -> Self {
        Self {
            menu_open: false,
            scroll_lock: ScrollLock::new(),
            accordion: ExclusivePanelSet::new(section_count),
            dropdowns: ExclusivePanelSet::new(section_count),
            scrolled: false,
            menu_focus: None,
        }
    }

    // --- Mobile full-screen menu ---

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Dispatches to open or close based on the current state.
    pub fn toggle_menu(&mut self, page_offset: f32) -> MenuTransition {
        if self.menu_open {
            MenuTransition::Closed {
                restore_to: self.close_menu().unwrap_or(page_offset),
            }
        } else {
            self.open_menu(page_offset);
            MenuTransition::Opened
        }
    }

    /// Opens the overlay and locks the page at `page_offset`.
    pub fn open_menu(&mut self, page_offset: f32) {
        if self.menu_open {
            return;
        }
        self.menu_open = true;
        self.scroll_lock.lock(page_offset);
        debug!("Mobile menu opened at offset {}", page_offset);
    }

    /// Closes the overlay, collapses every accordion section so reopening
    /// never resumes with a stale expanded section, and returns the offset
    /// to restore. `None` when the menu was already closed.
    pub fn close_menu(&mut self) -> Option<f32> {
        if !self.menu_open {
            return None;
        }
        self.menu_open = false;
        self.accordion.close_all();
        debug!("Mobile menu closed");
        self.scroll_lock.unlock()
    }

    // --- Mobile accordion ---

    pub fn accordion(&self) -> &ExclusivePanelSet {
        &self.accordion
    }

    /// Accordion toggle with mutual exclusion.
    pub fn toggle_section(&mut self, index: usize) {
        self.accordion.toggle(index);
    }

    // --- Desktop dropdowns ---

    pub fn dropdowns(&self) -> &ExclusivePanelSet {
        &self.dropdowns
    }

    /// Focused entry inside the open dropdown, if any.
    pub fn focused_entry(&self) -> Option<usize> {
        self.menu_focus
    }

    /// Pointer entered a dropdown region: close the others, open this one.
    pub fn dropdown_enter(&mut self, index: usize) {
        self.dropdowns.open_only(index);
        self.menu_focus = None;
    }

    /// Pointer left a dropdown region: close it.
    pub fn dropdown_leave(&mut self, index: usize) {
        self.dropdowns.close(index);
        self.menu_focus = None;
    }

    /// Keyboard open from the region's trigger (ArrowDown, or Enter while
    /// closed): opens the region and focuses its first entry.
    pub fn open_dropdown_via_trigger(&mut self, index: usize) {
        self.dropdowns.open_only(index);
        self.menu_focus = Some(0);
    }

    /// A key pressed while an entry of the open region has focus. Returns
    /// true when focus should return to the trigger control.
    pub fn dropdown_menu_key(&mut self, entry_count: usize, key: MenuKey) -> bool {
        let Some(current) = self.menu_focus else {
            return false;
        };
        match focus::step_menu_focus(current, entry_count, key) {
            MenuFocusMove::FocusEntry(next) => {
                self.menu_focus = Some(next);
                false
            }
            MenuFocusMove::FocusTrigger => {
                self.menu_focus = None;
                true
            }
            MenuFocusMove::CloseAndFocusTrigger => {
                self.dropdowns.close_all();
                self.menu_focus = None;
                true
            }
            MenuFocusMove::None => false,
        }
    }

    /// ArrowDown on a focused menu entry.
    pub fn dropdown_menu_down(&mut self, entry_count: usize) {
        self.dropdown_menu_key(entry_count, MenuKey::ArrowDown);
    }

    /// ArrowUp on a focused menu entry. Returns true when focus moved back
    /// to the trigger.
    pub fn dropdown_menu_up(&mut self) -> bool {
        // Entry count is irrelevant when stepping upward.
        self.dropdown_menu_key(0, MenuKey::ArrowUp)
    }

    /// Escape on a focused menu entry closes the region.
    pub fn dropdown_menu_escape(&mut self) -> bool {
        self.dropdown_menu_key(0, MenuKey::Escape)
    }

    /// A pointer-down outside every dropdown region: global dismiss.
    pub fn outside_pointer_down(&mut self) {
        self.dropdowns.close_all();
        self.menu_focus = None;
    }

    // --- Escape precedence ---

    /// One Escape press: the open overlay wins and stops the evaluation;
    /// only with the overlay closed are the dropdowns closed.
    pub fn handle_escape(&mut self) -> EscapeOutcome {
        if self.menu_open {
            let restore_to = self.close_menu().unwrap_or(0.0);
            return EscapeOutcome::ClosedOverlay { restore_to };
        }
        self.menu_focus = None;
        if self.dropdowns.close_all() {
            EscapeOutcome::ClosedDropdowns
        } else {
            EscapeOutcome::NoChange
        }
    }

    // --- Scroll styling ---

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recomputes the scrolled flag from the current offset. Purely
    /// derived, no hysteresis. Returns the new flag.
    pub fn update_scroll_offset(&mut self, offset: f32) -> bool {
        self.scrolled = offset > SCROLLED_THRESHOLD_PX;
        self.scrolled
    }
}
