use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "1",
        title: "Selected by AI",
        description: "Every ingredient is selected through AI analysis of your microbiome, stress patterns, and lifestyle needs.",
    },
    Feature {
        icon: "2",
        title: "Beyond Coffee",
        description: "A precision-engineered wellness solution that goes beyond coffee.",
    },
    Feature {
        icon: "3",
        title: "One Morning Ritual",
        description: "One simple morning ritual to address fatigue, stress, gut health, and mental clarity.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Personalize Your Lifestyle"</h2>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <FeatureCard icon=f.icon title=f.title description=f.description />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
