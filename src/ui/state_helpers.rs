//! Projections of the Rust state structs into the Slint view-state
//! globals. State is the source of truth; the scene is write-only from
//! here and never read back.

use crate::gallery::GalleryItem;
use crate::state::forms::FormPhase;
use crate::state::{LightboxState, NavState};
use slint::ComponentHandle;

/// Which signup form a handler or projection addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupFormKind {
    Newsletter,
    Notify,
}

impl SignupFormKind {
    /// The submit control's resting label.
    pub fn idle_label(self) -> &'static str {
        match self {
            SignupFormKind::Newsletter => "Subscribe",
            SignupFormKind::Notify => "Notify me",
        }
    }
}

/// Projects every nav slice at once: scrolled flag, overlay, accordion,
/// dropdowns, and the focused menu entry.
pub fn sync_nav(ui: &crate::AppWindow, nav: &NavState) {
    let view = ui.global::<crate::NavViewState>();
    view.set_scrolled(nav.is_scrolled());
    view.set_menu_open(nav.is_menu_open());
    view.set_open_accordion(index_or_minus_one(nav.accordion().open_index()));
    view.set_open_dropdown(index_or_minus_one(nav.dropdowns().open_index()));
    view.set_focused_entry(index_or_minus_one(nav.focused_entry()));
}

/// Projects the lightbox: visibility, counter, caption, and the focus
/// ring. The displayed image itself goes through `image_display`.
pub fn sync_lightbox(ui: &crate::AppWindow, lightbox: &LightboxState, item: Option<&GalleryItem>) {
    let view = ui.global::<crate::LightboxViewState>();
    view.set_active(lightbox.is_open());
    view.set_counter(lightbox.counter_text().into());
    view.set_caption(item.map(GalleryItem::caption_text).unwrap_or("").into());
    view.set_focused_control(lightbox.focused_control().as_index() as i32);
}

/// Projects one form's phase into its label/enabled/confirmed triple.
pub fn sync_form(ui: &crate::AppWindow, kind: SignupFormKind, phase: FormPhase) {
    let label = match phase {
        FormPhase::Idle => kind.idle_label(),
        FormPhase::Submitting => "Sending...",
        FormPhase::Confirmed => kind.idle_label(),
        FormPhase::Error => "Something went wrong",
    };
    let enabled = phase == FormPhase::Idle;
    let confirmed = phase == FormPhase::Confirmed;

    let view = ui.global::<crate::FormViewState>();
    match kind {
        SignupFormKind::Newsletter => {
            view.set_newsletter_label(label.into());
            view.set_newsletter_enabled(enabled);
            view.set_newsletter_confirmed(confirmed);
        }
        SignupFormKind::Notify => {
            view.set_notify_label(label.into());
            view.set_notify_enabled(enabled);
            view.set_notify_confirmed(confirmed);
        }
    }
}

/// Current page scroll offset in logical pixels.
pub fn page_offset(ui: &crate::AppWindow) -> f32 {
    -ui.global::<crate::PageViewState>().get_viewport_y()
}

/// Restores the page to `offset` (used on scroll unlock).
pub fn set_page_offset(ui: &crate::AppWindow, offset: f32) {
    ui.global::<crate::PageViewState>().set_viewport_y(-offset);
}

fn index_or_minus_one(index: Option<usize>) -> i32 {
    index.map(|i| i as i32).unwrap_or(-1)
}
