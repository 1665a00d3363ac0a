//! Simulated analysis terminal.
//!
//! The [`Sequencer`] decides what to show and how long to wait; this component
//! only owns the browser timer. At most one timeout is pending at a time, and
//! it is cleared when the component unmounts.

use balanx_motion::{Frame, Jitter, LineStyle, Script, Sequencer, Tuning};
use leptos::prelude::*;
use tracing::{debug, warn};

type Machine = Sequencer<Jitter>;

#[component]
pub fn AiTerminal() -> impl IntoView {
    let terminal = use_context::<Tuning>().unwrap_or_default().terminal;
    let seed = terminal.seed.unwrap_or_else(mount_seed);

    let machine = match Sequencer::new(Script::analysis_demo(), terminal.timings, Jitter::seeded(seed)) {
        Ok(machine) => machine,
        Err(err) => {
            warn!(%err, "terminal timings rejected; typing disabled");
            return view! { <section id="ai" class="ai-terminal-section"></section> }.into_any();
        }
    };
    debug!(seed, "terminal mounted");

    let frame = RwSignal::new(machine.frame());
    let machine = StoredValue::new(machine);
    let pending = StoredValue::new(None::<TimeoutHandle>);

    arm(machine, frame, pending);
    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.clear();
        }
        debug!("terminal unmounted");
    });

    let lines = move || {
        let current = frame.get();
        current
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let caret = current.typing && index == current.active_line;
                let class = format!("terminal-output {}", LineStyle::classify(line).css_class());
                view! {
                    <div class=class>
                        <span class="terminal-prompt">">"</span>
                        {line.clone()}
                        {caret.then(|| view! { <span class="terminal-caret">"▋"</span> })}
                    </div>
                }
            })
            .collect_view()
    };
    let status = move || {
        if frame.with(|f| f.typing) {
            "Analyzing..."
        } else {
            "Complete"
        }
    };
    let progress = move || format!("width: {:.1}%;", frame.with(|f| f.progress) * 100.0);
    let counter = move || frame.with(|f| format!("Processing: {}/{}", f.processed(), f.total));

    view! {
        <section id="ai" class="ai-terminal-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"AI Understanding Their Life"</h2>
                    <p class="section-description">
                        "Advanced algorithms recognize the patterns of modern family stress"
                    </p>
                </div>
                <div class="hero-terminal">
                    <div class="terminal-header">
                        <div class="terminal-dot red"></div>
                        <div class="terminal-dot yellow"></div>
                        <div class="terminal-dot green"></div>
                        <span class="terminal-title">"balanx-ai: microbiome analysis"</span>
                        <span class="terminal-status">{status}</span>
                    </div>
                    <div class="terminal-body">{lines}</div>
                    <div class="terminal-progress">
                        <span class="terminal-counter">{counter}</span>
                        <div class="terminal-progress-bar" style=progress></div>
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

/// Schedule the next transition. Each callback re-arms exactly once after
/// applying its step, so timers never overlap.
fn arm(machine: StoredValue<Machine>, frame: RwSignal<Frame>, pending: StoredValue<Option<TimeoutHandle>>) {
    let Some(delay) = machine.try_update_value(|m| m.next_delay()) else {
        return;
    };

    let scheduled = set_timeout_with_handle(
        move || {
            pending.try_update_value(|p| *p = None);
            // Disposed after unmount: nothing to update.
            let Some(next) = machine.try_update_value(|m| {
                m.step();
                m.frame()
            }) else {
                return;
            };
            if frame.try_update(|f| *f = next).is_some() {
                arm(machine, frame, pending);
            }
        },
        delay,
    );

    match scheduled {
        Ok(handle) => {
            pending.try_update_value(|p| *p = Some(handle));
        }
        Err(err) => warn!(?err, "could not schedule typewriter step"),
    }
}

fn mount_seed() -> u64 {
    js_sys::Date::now() as u64
}
