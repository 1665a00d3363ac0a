use super::BRAND;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">{BRAND}</h1>
                    <p class="hero-description">
                        "– Where AI Meet Health, Where You Meet Balance"
                    </p>
                    <div class="hero-actions">
                        <a href="#story" class="btn btn-primary">
                            "Discover"
                        </a>
                        <a href="#contact" class="btn btn-secondary">
                            "Get in touch →"
                        </a>
                    </div>
                </div>
                <div class="scroll-indicator">
                    <span class="scroll-indicator-dot"></span>
                </div>
            </div>
        </section>
    }
}
