use super::BRAND;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{BRAND}</span>
                    <p class="footer-tagline">"Personalized wellness, brewed from your own biology."</p>
                </div>
                <div class="footer-links">
                    <a href="mailto:hello@balanx.health" class="footer-link">"hello@balanx.health"</a>
                    <a href="https://www.instagram.com/balanx.bio" target="_blank" class="footer-link">"Instagram"</a>
                    <a href="https://www.linkedin.com/company/balanx" target="_blank" class="footer-link">"LinkedIn"</a>
                </div>
                <p class="footer-copyright">"© 2025 BALANX. All rights reserved."</p>
            </div>
        </footer>
    }
}
