// Balanx Landing Page - Leptos 0.8 Edition

mod logging;
mod scroll;
mod sections;

use balanx_motion::{Tuning, is_section_active};
use leptos::html::{Section, Video};
use leptos::prelude::*;
use sections::*;

const BACKDROP_VIDEO: &str = "/media/backdrop.mp4";

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let tuning = Tuning::default();
    let dark_section = tuning.backdrop.dark_section;
    let video_fade = tuning.backdrop.video_fade;
    provide_context(tuning);

    let scroll_y = scroll::provide_window_scroll();
    let dark = Memo::new(move |_| is_section_active(scroll_y.get(), &dark_section));

    // Document-wide side effect lives here and nowhere else.
    Effect::new(move || {
        let active = dark.get();
        if let Some(body) = document().body() {
            let _ = body.class_list().toggle_with_force("bg-black", active);
        }
        tracing::debug!(active, "dark section toggled");
    });

    let algorithm = NodeRef::<Section>::new();
    let video = NodeRef::<Video>::new();
    Effect::new(move || {
        if let Some(el) = video.get() {
            el.set_loop(true);
        }
    });

    let backdrop_style = move || {
        if dark.get() {
            "display: none;".to_string()
        } else {
            format!("opacity: {:.3};", video_fade.opacity(scroll_y.get()))
        }
    };

    view! {
        <video
            node_ref=video
            class="backdrop-video"
            src=BACKDROP_VIDEO
            autoplay=true
            muted=true
            playsinline=true
            style=backdrop_style
        ></video>
        <div class="backdrop-overlay" style=backdrop_style></div>
        <main>
            <section class="algorithm" data-section="algorithm" node_ref=algorithm>
                <Hero />
                <Story origin=algorithm />
            </section>
            <AiTerminal />
            <Features />
        </main>
        <Footer />
    }
}
