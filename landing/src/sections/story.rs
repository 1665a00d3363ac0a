//! Narrative section: sentences fade in one by one as the reader scrolls,
//! the two story cards drift apart, and the whole block eases away at the end.

use crate::scroll::use_section_offset;
use balanx_motion::progress::{RevealSlide, SlideFade, SplitFade, sentence_opacity};
use balanx_motion::Tuning;
use leptos::either::Either;
use leptos::html::Section;
use leptos::prelude::*;

#[derive(Clone, Copy)]
enum Segment {
    Plain(&'static str),
    Accent(&'static str, &'static str),
}

const STORIES: [&[Segment]; 3] = [
    &[
        Segment::Plain(
            "Sarah, a working mother striving to balance her career and family. Lately, the pressures of work and the exhaustion from caring for her children have left her ",
        ),
        Segment::Accent("physically and mentally drained", "accent-blue"),
        Segment::Plain("."),
    ],
    &[
        Segment::Plain("Her husband Mark, a "),
        Segment::Accent("type 2 diabetes patient", "accent-blue"),
        Segment::Plain(", is facing the uncertainty of corporate layoffs. An "),
        Segment::Accent("invisible anxiety", "accent-amber"),
        Segment::Plain(" looms over the entire family."),
    ],
    &[
        Segment::Plain("Sarah knows she must stay "),
        Segment::Accent("clear-headed and energized", "accent-blue"),
        Segment::Plain(" to face the challenges ahead. At the recommendation of a friend, she turned to "),
        Segment::Accent("BALANX", "accent-amber"),
        Segment::Plain(
            ", hoping for the first time to truly understand the signals her body is sending through the ",
        ),
        Segment::Accent("power of technology", "accent-cyan"),
        Segment::Plain("."),
    ],
];

struct StressFactor {
    title: &'static str,
    icon: &'static str,
    tone: &'static str,
    items: [&'static str; 3],
}

static STRESS_FACTORS: [StressFactor; 3] = [
    StressFactor {
        title: "Work Stress",
        icon: "/images/sange1.jpg",
        tone: "stress-red",
        items: [
            "Mark facing potential layoff",
            "Sarah's demanding deadlines",
            "Financial uncertainty",
        ],
    },
    StressFactor {
        title: "Family Life",
        icon: "/images/sange2.jpg",
        tone: "stress-blue",
        items: [
            "Two kids under 8 years old",
            "Constant school activities",
            "No time for self-care",
        ],
    },
    StressFactor {
        title: "Health Concerns",
        icon: "/images/sange3.jpg",
        tone: "stress-purple",
        items: [
            "Mark's Type 2 diabetes",
            "Sarah's chronic fatigue",
            "No time for doctor visits",
        ],
    },
];

/// Story block. Scroll windows are measured from `origin`, the section that
/// opens with the hero, so the story starts revealing while the hero is
/// still on screen.
#[component]
pub fn Story(origin: NodeRef<Section>) -> impl IntoView {
    let story = use_context::<Tuning>().unwrap_or_default().story;
    let offset = use_section_offset(origin);

    let exit = story.exit;
    let image_drift = drift_for(&story, 0);
    let text_drift = drift_for(&story, 1);
    let grid_motion = staggered_for(&story, story.stress_grid, "stress grid");
    let familiar_motion = staggered_for(&story, story.familiar_card, "familiar card");
    let rise = RevealSlide {
        max_slide: story.sentence_slide,
    };
    let thresholds = StoredValue::new(story.sentence_thresholds);

    let sentences = STORIES
        .into_iter()
        .enumerate()
        .map(|(index, segments)| {
            let style = move || {
                let y = offset.get();
                let progress = thresholds.with_value(|t| sentence_opacity(index, y, t));
                rise.at(progress).to_style()
            };
            view! {
                <div class="story-sentence" style=style>
                    <p>{render_segments(segments)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="story" class="story">
            <div class="story-inner" style=move || exit.at(offset.get()).to_style()>
                <div class="story-grid">
                    <div class="story-image" style=move || drift_style(image_drift, offset.get())>
                        <img src="/images/hug.jpg" alt="Sarah and Mark hug" />
                    </div>
                    <div class="story-text" style=move || drift_style(text_drift, offset.get())>
                        <h2 class="section-title">"The Real-Life Struggle"</h2>
                        <div class="story-sentences">{sentences}</div>
                    </div>
                </div>
                <div class="stress-grid" style=move || split_style(grid_motion, offset.get())>
                    {STRESS_FACTORS.iter().map(|factor| view! { <StressCard factor=factor /> }).collect_view()}
                </div>
                <div class="familiar-card" style=move || split_style(familiar_motion, offset.get())>
                    <h3>"Sound Familiar?"</h3>
                    <p>
                        "Like millions of working people, Sarah and Mark are caught in the endless cycle of responsibilities. They need a solution that fits into their chaotic schedule - something simple, personalized, and effective."
                    </p>
                </div>
            </div>
        </section>
    }
}

fn drift_for(story: &balanx_motion::tuning::StoryTuning, index: usize) -> Option<SlideFade> {
    match story.card_drift(index) {
        Ok(drift) => Some(drift),
        Err(err) => {
            tracing::warn!(%err, index, "story card drift disabled");
            None
        }
    }
}

fn staggered_for(
    story: &balanx_motion::tuning::StoryTuning,
    delays: balanx_motion::tuning::StaggerDelays,
    what: &'static str,
) -> Option<SplitFade> {
    story
        .staggered(delays)
        .inspect_err(|err| tracing::warn!(%err, what, "story drift disabled"))
        .ok()
}

fn split_style(motion: Option<SplitFade>, scroll_y: f64) -> String {
    motion.map(|m| m.at(scroll_y).to_style()).unwrap_or_default()
}

#[component]
fn StressCard(factor: &'static StressFactor) -> impl IntoView {
    view! {
        <article class=format!("stress-card {}", factor.tone)>
            <div class="stress-card-header">
                <img class="stress-card-icon" src=factor.icon alt=format!("{} icon", factor.title) />
                <h3>{factor.title}</h3>
            </div>
            <ul>
                {factor.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </article>
    }
}

fn drift_style(drift: Option<SlideFade>, scroll_y: f64) -> String {
    drift
        .map(|d| d.at(scroll_y).to_style())
        .unwrap_or_default()
}

fn render_segments(segments: &'static [Segment]) -> impl IntoView {
    segments
        .iter()
        .map(|segment| match *segment {
            Segment::Plain(text) => Either::Left(text),
            Segment::Accent(text, tone) => Either::Right(view! {
                <span class=format!("story-accent {tone}")>{text}</span>
            }),
        })
        .collect_view()
}
