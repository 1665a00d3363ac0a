//! Scroll offset signals.
//!
//! One window listener feeds the whole page; sections derive their own
//! relative offsets from it.

use balanx_motion::relative_offset;
use leptos::ev;
use leptos::html::Section;
use leptos::prelude::*;

/// Page-wide `window.scrollY`, shared through context.
#[derive(Clone, Copy)]
pub struct WindowScroll(pub ReadSignal<f64>);

/// Start tracking `window.scrollY` and share it with descendants.
pub fn provide_window_scroll() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(current_scroll());
    let handle = window_event_listener(ev::scroll, move |_| {
        set_scroll_y.set(current_scroll());
    });
    on_cleanup(move || handle.remove());
    provide_context(WindowScroll(scroll_y));
    scroll_y
}

/// Shared scroll signal, or a private listener when rendered standalone.
pub fn use_window_scroll() -> ReadSignal<f64> {
    match use_context::<WindowScroll>() {
        Some(WindowScroll(scroll_y)) => scroll_y,
        None => provide_window_scroll(),
    }
}

/// Offset of the viewport relative to `section`, zero until it scrolls into view.
pub fn use_section_offset(section: NodeRef<Section>) -> Memo<f64> {
    let scroll_y = use_window_scroll();
    Memo::new(move |_| {
        let scroll = scroll_y.get();
        section
            .get()
            .map(|el| {
                let top = el.get_bounding_client_rect().top() + scroll;
                relative_offset(scroll, top, viewport_height())
            })
            .unwrap_or(0.0)
    })
}

fn current_scroll() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}
