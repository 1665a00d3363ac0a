//! # balanx-motion
//!
//! Scroll-driven animation math and the terminal typewriter behind the Balanx
//! landing page.
//!
//! Nothing in here touches the DOM. The landing crate feeds scroll offsets and
//! timer callbacks in, and applies what comes out as inline styles.
//!
//! ## Modules
//!
//! - [`progress`] - scroll offset to opacity/transform mapping
//! - [`typewriter`] - character-by-character script playback
//! - [`highlight`] - cosmetic line colouring for the terminal
//! - [`tuning`] - authored windows, floors and cadences
//! - `runtime` - tokio driver for native hosts (feature `runtime`)
//!
//! ## Quick Start
//!
//! ```rust
//! use balanx_motion::progress::{fade_opacity, sentence_opacity};
//! use balanx_motion::tuning::Tuning;
//!
//! let tuning = Tuning::default();
//! assert_eq!(fade_opacity(150.0, 100.0, 200.0, 0.0), 0.5);
//! assert_eq!(sentence_opacity(0, 1000.0, &tuning.story.sentence_thresholds), 1.0);
//! ```

pub mod error;
pub mod highlight;
pub mod progress;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod tuning;
pub mod typewriter;

pub use error::{MotionError, Result};
pub use highlight::LineStyle;
pub use progress::{
    FadeCurve, RevealSlide, SectionTrigger, SlideFade, SplitFade, Threshold, Transform,
    fade_opacity, is_section_active, relative_offset, reveal_progress, sentence_opacity,
};
pub use tuning::Tuning;
pub use typewriter::{DelaySource, FixedDelay, Frame, Jitter, Phase, Script, Sequencer, Timings, Transition};
