//! Exclusive panel set: the shared "at most one open" machine.
//!
//! The mobile accordion and the desktop dropdowns follow the same
//! algorithm and differ only in how they are triggered, so both are
//! instances of this one parameterized machine. Exclusivity is enforced on
//! every mutating call, never assumed.

use log::debug;

/// A set of `len` panels of which at most one is open at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusivePanelSet {
    len: usize,
    open: Option<usize>,
}

impl ExclusivePanelSet {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Index of the open panel, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Accordion-style toggle: closes whatever else is open, then flips
    /// `index`. An already-open panel closes with nothing else open.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        let was_open = self.open == Some(index);
        self.open = if was_open { None } else { Some(index) };
        debug!("Panel {} toggled, open = {:?}", index, self.open);
    }

    /// Hover-style open: closes all others and opens `index`.
    pub fn open_only(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = Some(index);
    }

    /// Closes `index` if it is the open panel; other panels are untouched
    /// (they are closed already, by the invariant).
    pub fn close(&mut self, index: usize) {
        if self.open == Some(index) {
            self.open = None;
        }
    }

    /// Closes every panel. Returns true if anything was open.
    pub fn close_all(&mut self) -> bool {
        self.open.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_open_after_any_toggle_sequence() {
        let mut panels = ExclusivePanelSet::new(5);
        for &i in &[0, 3, 3, 1, 4, 2, 2, 0] {
            panels.toggle(i);
            let open_count = (0..panels.len()).filter(|&j| panels.is_open(j)).count();
            assert!(open_count <= 1);
        }
    }

    #[test]
    fn toggling_other_section_closes_previous() {
        let mut panels = ExclusivePanelSet::new(3);
        panels.toggle(0);
        assert!(panels.is_open(0));
        panels.toggle(2);
        assert!(!panels.is_open(0));
        assert!(panels.is_open(2));
    }

    #[test]
    fn toggling_open_section_closes_it() {
        let mut panels = ExclusivePanelSet::new(3);
        panels.toggle(1);
        panels.toggle(1);
        assert_eq!(panels.open_index(), None);
    }

    #[test]
    fn at_most_one_open_after_any_hover_sequence() {
        let mut panels = ExclusivePanelSet::new(4);
        for &i in &[0, 1, 1, 3, 2, 0] {
            panels.open_only(i);
            assert_eq!(panels.open_index(), Some(i));
        }
    }

    #[test]
    fn hover_leave_closes_only_the_hovered_panel() {
        let mut panels = ExclusivePanelSet::new(4);
        panels.open_only(2);
        // Leaving a panel that is not open changes nothing.
        panels.close(1);
        assert_eq!(panels.open_index(), Some(2));
        panels.close(2);
        assert_eq!(panels.open_index(), None);
    }

    #[test]
    fn close_all_reports_whether_anything_was_open() {
        let mut panels = ExclusivePanelSet::new(2);
        assert!(!panels.close_all());
        panels.toggle(1);
        assert!(panels.close_all());
        assert_eq!(panels.open_index(), None);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut panels = ExclusivePanelSet::new(2);
        panels.toggle(7);
        panels.open_only(7);
        assert_eq!(panels.open_index(), None);
    }
}
