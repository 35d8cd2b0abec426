//! Leptos Motion Utilities
//!
//! Small browser plumbing shared by animated components:
//! - a monotonic millisecond clock
//! - a self-terminating `requestAnimationFrame` loop
//! - window width / scroll signals whose listeners are released with the owner
//! - smooth page scrolling

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Fallback width when the window cannot be measured
const DEFAULT_WIDTH_PX: u32 = 1024;

/// Milliseconds on the same timebase as animation frame timestamps
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Current inner width of the window in CSS pixels
pub fn window_width() -> u32 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(DEFAULT_WIDTH_PX)
}

/// Current inner height of the window in CSS pixels
pub fn window_height() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current vertical scroll offset of the page
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scroll the page to vertical offset `top`
pub fn scroll_page_to(top: f64) {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) {
    if let Some(win) = web_sys::window() {
        let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `on_frame` once per animation frame until it returns `false`.
///
/// The callback receives the frame timestamp (same timebase as [`now_ms`]).
/// The closure frees itself after the last frame.
pub fn run_frame_loop<F>(mut on_frame: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if on_frame(timestamp) {
            if let Some(cb) = next.borrow().as_ref() {
                request_frame(cb);
            }
        } else {
            // Drop our own closure to break the Rc cycle
            let _ = next.borrow_mut().take();
        }
    }));

    if let Some(cb) = slot.borrow().as_ref() {
        request_frame(cb);
    };
}

/// Window width as a signal.
///
/// Subscribes to `resize` on the window; the listener is removed when the
/// calling owner is cleaned up (unmount or navigation away).
pub fn use_window_width() -> ReadSignal<u32> {
    let (width, set_width) = signal(window_width());

    let handle = window_event_listener(ev::resize, move |_| {
        set_width.set(window_width());
    });
    on_cleanup(move || handle.remove());

    width
}

/// Vertical scroll offset as a signal, released with the owner.
pub fn use_window_scroll() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(scroll_y());

    let handle = window_event_listener(ev::scroll, move |_| {
        set_offset.set(scroll_y());
    });
    on_cleanup(move || handle.remove());

    offset
}
