// Landing page sections
// Balanx landing page - Leptos 0.8 edition

/// Brand mark used across the landing page (single source of truth)
pub const BRAND: &str = "BALANX-BIO";

mod features;
mod footer;
mod hero;
mod story;
mod terminal;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use story::Story;
pub use terminal::AiTerminal;
