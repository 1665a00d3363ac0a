//! Authored animation tuning.
//!
//! All scroll windows, floors and typing cadences live here instead of as
//! literals in the views. The defaults reproduce the shipped site exactly,
//! including the overlapping sentence windows. A JSON document can override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::progress::{Axis, FadeCurve, SectionTrigger, SlideFade, SplitFade, Threshold};
use crate::typewriter::Timings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub story: StoryTuning,
    pub terminal: TerminalTuning,
    pub backdrop: BackdropTuning,
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.terminal.timings.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| MotionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

/// Narrative section: sentence reveals and drifting cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryTuning {
    /// One window per sentence; sentences beyond the list never appear.
    pub sentence_thresholds: Vec<Threshold>,
    /// How far a sentence rises while it is revealed.
    pub sentence_slide: f64,
    /// Scroll offset at which the story cards start drifting.
    pub drift_origin: f64,
    pub drift_span: f64,
    pub drift_floor: f64,
    /// Extra offset per card, in card order.
    pub card_delays: Vec<f64>,
    pub card_slide: f64,
    /// Stress-factor card grid below the story.
    pub stress_grid: StaggerDelays,
    /// Closing "Sound Familiar?" card.
    pub familiar_card: StaggerDelays,
    /// Whole story block fades and slides down once the reader moves on.
    pub exit: SlideFade,
}

impl Default for StoryTuning {
    fn default() -> Self {
        Self {
            sentence_thresholds: vec![
                Threshold::authored(600.0, 1000.0),
                Threshold::authored(1000.0, 1400.0),
                Threshold::authored(1050.0, 1450.0),
            ],
            sentence_slide: 30.0,
            drift_origin: 1200.0,
            drift_span: 1500.0,
            drift_floor: 0.8,
            card_delays: vec![0.0, 100.0],
            card_slide: 50.0,
            stress_grid: StaggerDelays {
                opacity: 1600.0,
                slide: 1800.0,
            },
            familiar_card: StaggerDelays {
                opacity: 2000.0,
                slide: 1800.0,
            },
            exit: SlideFade {
                curve: FadeCurve::new(Threshold::authored(2400.0, 3000.0), 0.1),
                min_opacity: 0.3,
                max_slide: 50.0,
                axis: Axis::Vertical,
            },
        }
    }
}

impl StoryTuning {
    /// Drift for card `index`. Even cards slide left, odd cards slide right.
    pub fn card_drift(&self, index: usize) -> Result<SlideFade> {
        let delay = self.card_delays.get(index).copied().unwrap_or(0.0);
        let slide = if index % 2 == 0 {
            -self.card_slide
        } else {
            self.card_slide
        };
        Ok(SlideFade {
            curve: FadeCurve::drift(self.drift_origin + delay, self.drift_span, self.drift_floor)?,
            min_opacity: self.drift_floor,
            max_slide: slide,
            axis: Axis::Horizontal,
        })
    }

    /// Vertical drift where dimming and sliding start at their own delays
    /// past `drift_origin`.
    pub fn staggered(&self, delays: StaggerDelays) -> Result<SplitFade> {
        Ok(SplitFade {
            opacity: FadeCurve::drift(self.drift_origin + delays.opacity, self.drift_span, self.drift_floor)?,
            slide: FadeCurve::drift(self.drift_origin + delays.slide, self.drift_span, self.drift_floor)?,
            max_slide: self.card_slide,
            axis: Axis::Vertical,
        })
    }
}

/// Offsets past the story drift origin, one for opacity and one for slide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaggerDelays {
    pub opacity: f64,
    pub slide: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalTuning {
    pub timings: Timings,
    /// Fixed jitter seed; hosts pick one per mount when absent.
    pub seed: Option<u64>,
}

/// Full-page background video and the dark section that replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropTuning {
    /// Video and overlay fade out completely (floor `0`).
    pub video_fade: FadeCurve,
    /// While active, the video is hidden and the body goes dark.
    pub dark_section: SectionTrigger,
}

impl Default for BackdropTuning {
    fn default() -> Self {
        Self {
            video_fade: FadeCurve::new(Threshold::authored(3400.0, 3900.0), 0.0),
            dark_section: SectionTrigger {
                window: Threshold::authored(3900.0, 5200.0),
            },
        }
    }
}
