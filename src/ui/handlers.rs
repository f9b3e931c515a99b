//! Event handlers for UI callbacks.
//!
//! Registers every `Logic` callback. Each handler mutates exactly one
//! state slice under its lock, then projects the result back into the
//! scene through `state_helpers`. No handler reads state out of the scene.

use crate::services::{FormService, download_service};
use crate::state::focus::LightboxControl;
use crate::state::nav::{EscapeOutcome, MenuTransition};
use crate::state::swipe::{SwipeDirection, SwipeTracker};
use crate::state::{AppState, FormMachine};
use crate::ui::image_display::display_item;
use crate::ui::state_helpers::{
    SignupFormKind, page_offset, set_page_offset, sync_form, sync_lightbox, sync_nav,
};
use async_compat::Compat;
use log::warn;
use slint::ComponentHandle;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, app_state: &AppState) {
    setup_lightbox_handlers(ui, app_state);
    setup_nav_handlers(ui, app_state);
    setup_form_handlers(ui, app_state);

    // Initial projections so the scene starts consistent with the state.
    sync_nav(ui, &app_state.nav.lock().unwrap());
    sync_lightbox(ui, &app_state.lightbox.lock().unwrap(), None);
    sync_form(ui, SignupFormKind::Newsletter, app_state.newsletter.lock().unwrap().phase());
    sync_form(ui, SignupFormKind::Notify, app_state.notify.lock().unwrap().phase());
}

fn setup_lightbox_handlers(ui: &crate::AppWindow, app_state: &AppState) {
    let logic = ui.global::<crate::Logic>();
    let swipe = Arc::new(Mutex::new(SwipeTracker::new()));

    logic.on_open_lightbox({
        let ui_handle = ui.as_weak();
        let lightbox = app_state.lightbox.clone();
        let gallery = app_state.gallery.clone();
        let cache = app_state.image_cache.clone();
        move |index| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let index = index as usize;
            let mut lb = lightbox.lock().unwrap();
            if !lb.open(index, page_offset(&ui)) {
                return;
            }
            sync_lightbox(&ui, &lb, gallery.item(index));
            drop(lb);
            display_item(ui_handle.clone(), gallery.clone(), cache.clone(), index);
        }
    });

    logic.on_close_lightbox({
        let ui_handle = ui.as_weak();
        let lightbox = app_state.lightbox.clone();
        let gallery = app_state.gallery.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut lb = lightbox.lock().unwrap();
            // Idempotent: closing a closed viewer restores nothing.
            if let Some(offset) = lb.close() {
                set_page_offset(&ui, offset);
            }
            sync_lightbox(&ui, &lb, gallery.item(lb.current_index()));
        }
    });

    logic.on_lightbox_next({
        let ui_handle = ui.as_weak();
        let lightbox = app_state.lightbox.clone();
        let gallery = app_state.gallery.clone();
        let cache = app_state.image_cache.clone();
        move || {
            navigate_lightbox(&ui_handle, &lightbox, &gallery, &cache, true);
        }
    });

    logic.on_lightbox_prev({
        let ui_handle = ui.as_weak();
        let lightbox = app_state.lightbox.clone();
        let gallery = app_state.gallery.clone();
        let cache = app_state.image_cache.clone();
        move || {
            navigate_lightbox(&ui_handle, &lightbox, &gallery, &cache, false);
        }
    });

    logic.on_lightbox_focus_step({
        let ui_handle = ui.as_weak();
        let lightbox = app_state.lightbox.clone();
        let gallery = app_state.gallery.clone();
        move |forward| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut lb = lightbox.lock().unwrap();
            lb.focus_step(forward);
            sync_lightbox(&ui, &lb, gallery.item(lb.current_index()));
        }
    });

    logic.on_lightbox_activate_focused({
        let ui_handle = ui.as_weak();
        let lightbox = app_state.lightbox.clone();
        let gallery = app_state.gallery.clone();
        let cache = app_state.image_cache.clone();
        move || {
            let focused = {
                let lb = lightbox.lock().unwrap();
                if !lb.is_open() {
                    return;
                }
                lb.focused_control()
            };
            match focused {
                LightboxControl::Close => {
                    if let Some(ui) = ui_handle.upgrade() {
                        let mut lb = lightbox.lock().unwrap();
                        if let Some(offset) = lb.close() {
                            set_page_offset(&ui, offset);
                        }
                        sync_lightbox(&ui, &lb, gallery.item(lb.current_index()));
                    }
                }
                LightboxControl::Prev => {
                    navigate_lightbox(&ui_handle, &lightbox, &gallery, &cache, false);
                }
                LightboxControl::Next => {
                    navigate_lightbox(&ui_handle, &lightbox, &gallery, &cache, true);
                }
                LightboxControl::Download => {
                    let index = lightbox.lock().unwrap().current_index();
                    if let Some(item) = gallery.item(index) {
                        download_service::save_copy(item.clone());
                    }
                }
            }
        }
    });

    logic.on_lightbox_download({
        let lightbox = app_state.lightbox.clone();
        let gallery = app_state.gallery.clone();
        move || {
            let index = lightbox.lock().unwrap().current_index();
            if let Some(item) = gallery.item(index) {
                download_service::save_copy(item.clone());
            }
        }
    });

    logic.on_tile_download({
        let gallery = app_state.gallery.clone();
        move |index| {
            if let Some(item) = gallery.item(index as usize) {
                download_service::save_copy(item.clone());
            }
        }
    });

    logic.on_lightbox_swipe_begin({
        let swipe = swipe.clone();
        move |x, y| {
            swipe.lock().unwrap().begin(x, y);
        }
    });

    logic.on_lightbox_swipe_end({
        let ui_handle = ui.as_weak();
        let lightbox = app_state.lightbox.clone();
        let gallery = app_state.gallery.clone();
        let cache = app_state.image_cache.clone();
        move |x, y| {
            let direction = swipe.lock().unwrap().end(x, y);
            match direction {
                Some(SwipeDirection::Leftward) => {
                    navigate_lightbox(&ui_handle, &lightbox, &gallery, &cache, true);
                }
                Some(SwipeDirection::Rightward) => {
                    navigate_lightbox(&ui_handle, &lightbox, &gallery, &cache, false);
                }
                None => {}
            }
        }
    });
}

/// Shared advance/retreat path: keyboard, buttons, and swipe all land
/// here. Gated on the open state, so globally attached inputs are inert
/// while the viewer is closed.
fn navigate_lightbox(
    ui_handle: &slint::Weak<crate::AppWindow>,
    lightbox: &Arc<Mutex<crate::state::LightboxState>>,
    gallery: &Arc<crate::gallery::Gallery>,
    cache: &Arc<Mutex<crate::image_cache::ImageCache>>,
    forward: bool,
) {
    let Some(ui) = ui_handle.upgrade() else {
        return;
    };
    let index = {
        let mut lb = lightbox.lock().unwrap();
        if !lb.is_open() {
            return;
        }
        if forward {
            lb.show_next();
        } else {
            lb.show_previous();
        }
        sync_lightbox(&ui, &lb, gallery.item(lb.current_index()));
        lb.current_index()
    };
    display_item(ui_handle.clone(), gallery.clone(), cache.clone(), index);
}

fn setup_nav_handlers(ui: &crate::AppWindow, app_state: &AppState) {
    let logic = ui.global::<crate::Logic>();

    logic.on_toggle_menu({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            if let MenuTransition::Closed { restore_to } = nav.toggle_menu(page_offset(&ui)) {
                set_page_offset(&ui, restore_to);
            }
            sync_nav(&ui, &nav);
        }
    });

    logic.on_overlay_background_clicked({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move || {
            close_menu_and_sync(&ui_handle, &nav);
        }
    });

    logic.on_overlay_link_clicked({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move || {
            close_menu_and_sync(&ui_handle, &nav);
        }
    });

    logic.on_accordion_toggled({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move |index| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            nav.toggle_section(index as usize);
            sync_nav(&ui, &nav);
        }
    });

    logic.on_dropdown_entered({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move |index| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            nav.dropdown_enter(index as usize);
            sync_nav(&ui, &nav);
        }
    });

    logic.on_dropdown_left({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move |index| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            nav.dropdown_leave(index as usize);
            sync_nav(&ui, &nav);
        }
    });

    logic.on_dropdown_trigger_key({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move |index, is_enter| {
            let Some(ui) = ui_handle.upgrade() else {
                return false;
            };
            let mut nav = nav.lock().unwrap();
            // Enter only opens a region that is not yet open; ArrowDown
            // always opens.
            if is_enter && nav.dropdowns().is_open(index as usize) {
                return false;
            }
            nav.open_dropdown_via_trigger(index as usize);
            sync_nav(&ui, &nav);
            true
        }
    });

    logic.on_dropdown_menu_down({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move |entry_count| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            nav.dropdown_menu_down(entry_count as usize);
            sync_nav(&ui, &nav);
        }
    });

    logic.on_dropdown_menu_up({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            nav.dropdown_menu_up();
            sync_nav(&ui, &nav);
        }
    });

    logic.on_dropdown_menu_escape({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            nav.dropdown_menu_escape();
            sync_nav(&ui, &nav);
        }
    });

    logic.on_dropdown_entry_activated({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move |_region, _entry| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            nav.outside_pointer_down();
            sync_nav(&ui, &nav);
        }
    });

    logic.on_outside_click({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            nav.outside_pointer_down();
            sync_nav(&ui, &nav);
        }
    });

    logic.on_escape_pressed({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            if let EscapeOutcome::ClosedOverlay { restore_to } = nav.handle_escape() {
                set_page_offset(&ui, restore_to);
            }
            sync_nav(&ui, &nav);
        }
    });

    logic.on_page_scrolled({
        let ui_handle = ui.as_weak();
        let nav = app_state.nav.clone();
        move |offset| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut nav = nav.lock().unwrap();
            let was = nav.is_scrolled();
            if nav.update_scroll_offset(offset) != was {
                sync_nav(&ui, &nav);
            }
        }
    });
}

fn close_menu_and_sync(
    ui_handle: &slint::Weak<crate::AppWindow>,
    nav: &Arc<Mutex<crate::state::NavState>>,
) {
    let Some(ui) = ui_handle.upgrade() else {
        return;
    };
    let mut nav = nav.lock().unwrap();
    if let Some(offset) = nav.close_menu() {
        set_page_offset(&ui, offset);
    }
    sync_nav(&ui, &nav);
}

fn setup_form_handlers(ui: &crate::AppWindow, app_state: &AppState) {
    let logic = ui.global::<crate::Logic>();

    logic.on_submit_newsletter({
        let ui_handle = ui.as_weak();
        let machine = app_state.newsletter.clone();
        let service = FormService::new(app_state.site_config.forms.newsletter_endpoint.clone());
        move |email| {
            submit_form(
                &ui_handle,
                &machine,
                &service,
                SignupFormKind::Newsletter,
                email.to_string(),
            );
        }
    });

    logic.on_submit_notify({
        let ui_handle = ui.as_weak();
        let machine = app_state.notify.clone();
        let service = FormService::new(app_state.site_config.forms.notify_endpoint.clone());
        move |email| {
            submit_form(
                &ui_handle,
                &machine,
                &service,
                SignupFormKind::Notify,
                email.to_string(),
            );
        }
    });
}

/// Drives one submission: disable the control, post the fields, and
/// resolve into the confirmation or the 3 second error revert. The
/// disabled control is the only double-submit guard.
fn submit_form(
    ui_handle: &slint::Weak<crate::AppWindow>,
    machine: &Arc<Mutex<FormMachine>>,
    service: &FormService,
    kind: SignupFormKind,
    email: String,
) {
    let Some(ui) = ui_handle.upgrade() else {
        return;
    };
    {
        let mut form = machine.lock().unwrap();
        if !form.begin_submit() {
            return;
        }
        sync_form(&ui, kind, form.phase());
    }

    let ui_handle = ui_handle.clone();
    let machine = machine.clone();
    let service = service.clone();
    let _ = slint::spawn_local(Compat::new(async move {
        let result = service.submit(&[("email", email)]).await;

        // Back on the event loop; apply the outcome and project it.
        let phase = {
            let mut form = machine.lock().unwrap();
            match result {
                Ok(()) => form.resolve_success(),
                Err(ref e) => {
                    warn!("{:?} submission failed: {}", kind, e);
                    form.resolve_error();
                }
            }
            form.phase()
        };
        if let Some(ui) = ui_handle.upgrade() {
            sync_form(&ui, kind, phase);
        }

        if result.is_err() {
            let machine = machine.clone();
            let ui_handle = ui_handle.clone();
            slint::Timer::single_shot(
                Duration::from_millis(crate::config::FORM_RESET_DELAY_MS),
                move || {
                    let phase = {
                        let mut form = machine.lock().unwrap();
                        form.reset_after_error();
                        form.phase()
                    };
                    if let Some(ui) = ui_handle.upgrade() {
                        sync_form(&ui, kind, phase);
                    }
                },
            );
        }
    }));
}
