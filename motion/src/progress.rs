//! Scroll-progress mapping.
//!
//! Every function here is a pure function of the current scroll offset. Views
//! re-derive their values on each scroll tick instead of keeping incremental
//! state, so skipped or repeated scroll events never leave an element stuck
//! half-way.
//!
//! Two families live side by side and must not be confused:
//!
//! - *fades* ([`fade_opacity`], [`FadeCurve`], [`SlideFade`]) start at `1` and
//!   decrease toward a floor as the page scrolls past a window;
//! - *reveals* ([`reveal_progress`], [`sentence_opacity`], [`RevealSlide`]) start
//!   at `0` and increase toward `1`.

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

/// A validated `(start, end)` scroll window in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThreshold")]
pub struct Threshold {
    start: f64,
    end: f64,
}

#[derive(Deserialize)]
struct RawThreshold {
    start: f64,
    end: f64,
}

impl TryFrom<RawThreshold> for Threshold {
    type Error = MotionError;

    fn try_from(raw: RawThreshold) -> Result<Self> {
        Threshold::new(raw.start, raw.end)
    }
}

impl Threshold {
    /// Build a window, rejecting non-finite, negative or empty ranges.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if start.is_finite() && end.is_finite() && start >= 0.0 && start < end {
            Ok(Self { start, end })
        } else {
            Err(MotionError::InvalidThreshold { start, end })
        }
    }

    /// Authored windows baked into [`crate::tuning`] defaults.
    pub(crate) const fn authored(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// True when `scroll_y` lies inside the window, bounds included.
    pub fn contains(&self, scroll_y: f64) -> bool {
        self.start <= scroll_y && scroll_y <= self.end
    }
}

/// Fade-out opacity for a raw window.
///
/// Returns `1` before `start`, `floor` after `end`, and interpolates linearly
/// in between. Any input is accepted: a NaN offset counts as "not scrolled yet",
/// and a degenerate window (`end <= start`) behaves as a step at `start`.
pub fn fade_opacity(scroll_y: f64, start: f64, end: f64, floor: f64) -> f64 {
    if scroll_y.is_nan() || scroll_y < start {
        return 1.0;
    }
    if scroll_y > end || end <= start {
        return floor;
    }
    (1.0 - (scroll_y - start) / (end - start)).max(floor).min(1.0)
}

/// Reveal progress for a raw window: `0` before `start`, `1` after `end`.
pub fn reveal_progress(scroll_y: f64, start: f64, end: f64) -> f64 {
    if scroll_y.is_nan() || scroll_y < start {
        return 0.0;
    }
    if scroll_y > end || end <= start {
        return 1.0;
    }
    ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}

/// Opacity of the `index`-th sentence of a scroll-revealed paragraph.
///
/// Sentences without a threshold never appear, so the threshold list bounds
/// how many sentences a paragraph can reveal.
pub fn sentence_opacity(index: usize, scroll_y: f64, thresholds: &[Threshold]) -> f64 {
    thresholds
        .get(index)
        .map_or(0.0, |t| reveal_progress(scroll_y, t.start, t.end))
}

/// Offset of the viewport relative to a section.
///
/// Zero until the section's top edge enters the bottom of the viewport, then
/// grows one pixel per pixel scrolled.
pub fn relative_offset(window_scroll: f64, section_top: f64, viewport_height: f64) -> f64 {
    (window_scroll - section_top + viewport_height).max(0.0)
}

/// A named fade-out policy: a window plus the floor the element settles at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadeCurve {
    pub window: Threshold,
    /// Opacity kept once the window has been scrolled past. `0` hides the
    /// element entirely; a positive floor keeps it faintly visible.
    pub floor: f64,
}

impl FadeCurve {
    pub fn new(window: Threshold, floor: f64) -> Self {
        Self { window, floor }
    }

    /// Curve that starts at `origin` and reaches its floor `span` pixels later.
    pub fn drift(origin: f64, span: f64, floor: f64) -> Result<Self> {
        Ok(Self::new(Threshold::new(origin, origin + span)?, floor))
    }

    pub fn opacity(&self, scroll_y: f64) -> f64 {
        fade_opacity(
            scroll_y,
            self.window.start,
            self.window.end,
            self.floor.clamp(0.0, 1.0),
        )
    }
}

/// Direction an element slides while it fades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

/// Fade-out combined with a slide that grows as the element fades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideFade {
    pub curve: FadeCurve,
    /// Lower bound applied to the rendered opacity only; the slide still
    /// follows the unclamped curve.
    pub min_opacity: f64,
    /// Slide distance in pixels at full fade. Negative values slide
    /// left/up.
    pub max_slide: f64,
    #[serde(default)]
    pub axis: Axis,
}

impl SlideFade {
    pub fn at(&self, scroll_y: f64) -> Transform {
        let fade = self.curve.opacity(scroll_y);
        let reach = self.max_slide.abs();
        let distance = ((1.0 - fade) * reach).min(reach) * self.max_slide.signum();
        let opacity = fade.max(self.min_opacity);
        match self.axis {
            Axis::Vertical => Transform::new(opacity, 0.0, distance),
            Axis::Horizontal => Transform::new(opacity, distance, 0.0),
        }
    }
}

/// Reveal-side transform: the element rises into place as it appears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealSlide {
    pub max_slide: f64,
}

impl RevealSlide {
    /// Transform for a reveal `progress` in `[0, 1]`.
    pub fn at(&self, progress: f64) -> Transform {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        Transform::new(progress, 0.0, (1.0 - progress) * self.max_slide)
    }
}

/// Fade whose opacity and slide follow separate curves, so an element can
/// start moving before (or after) it starts dimming.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitFade {
    pub opacity: FadeCurve,
    pub slide: FadeCurve,
    /// Slide distance in pixels once `slide` reaches zero.
    pub max_slide: f64,
    #[serde(default)]
    pub axis: Axis,
}

impl SplitFade {
    pub fn at(&self, scroll_y: f64) -> Transform {
        let distance = (1.0 - self.slide.opacity(scroll_y)) * self.max_slide;
        let opacity = self.opacity.opacity(scroll_y);
        match self.axis {
            Axis::Vertical => Transform::new(opacity, 0.0, distance),
            Axis::Horizontal => Transform::new(opacity, distance, 0.0),
        }
    }
}

/// Scroll window during which a page section counts as active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionTrigger {
    pub window: Threshold,
}

/// Whether `trigger` is active at `scroll_y`.
///
/// Meant to be evaluated by the single top-level layout, which applies any
/// document-wide side effect on the result.
pub fn is_section_active(scroll_y: f64, trigger: &SectionTrigger) -> bool {
    trigger.window.contains(scroll_y)
}

/// Computed visual state for one element at one scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    pub fn new(opacity: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            opacity,
            translate_x,
            translate_y,
        }
    }

    /// Inline `style` attribute value.
    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.1}px, {:.1}px);",
            self.opacity, self.translate_x, self.translate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn window(start: f64, end: f64) -> Threshold {
        Threshold::new(start, end).unwrap()
    }

    #[test]
    fn threshold_rejects_bad_windows() {
        assert!(Threshold::new(10.0, 10.0).is_err());
        assert!(Threshold::new(20.0, 10.0).is_err());
        assert!(Threshold::new(-1.0, 10.0).is_err());
        assert!(Threshold::new(0.0, f64::INFINITY).is_err());
        assert!(Threshold::new(f64::NAN, 1.0).is_err());
        assert!(Threshold::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn threshold_deserializes_through_validation() {
        let ok: Threshold = serde_json::from_str(r#"{"start": 600, "end": 1000}"#).unwrap();
        assert_eq!(ok, window(600.0, 1000.0));

        let err = serde_json::from_str::<Threshold>(r#"{"start": 1000, "end": 600}"#);
        assert!(err.is_err());
    }

    #[test]
    fn fade_holds_full_opacity_before_start() {
        assert_eq!(fade_opacity(0.0, 100.0, 200.0, 0.0), 1.0);
        assert_eq!(fade_opacity(99.9, 100.0, 200.0, 0.1), 1.0);
        assert_eq!(fade_opacity(100.0, 100.0, 200.0, 0.1), 1.0);
    }

    #[test]
    fn fade_interpolates_and_settles_at_floor() {
        assert_eq!(fade_opacity(150.0, 100.0, 200.0, 0.0), 0.5);
        assert_eq!(fade_opacity(175.0, 100.0, 200.0, 0.0), 0.25);
        // floor wins over the interpolated value near the end
        assert_eq!(fade_opacity(195.0, 100.0, 200.0, 0.1), 0.1);
        assert_eq!(fade_opacity(200.0, 100.0, 200.0, 0.1), 0.1);
        assert_eq!(fade_opacity(5000.0, 100.0, 200.0, 0.0), 0.0);
    }

    #[test]
    fn fade_tolerates_degenerate_input() {
        assert_eq!(fade_opacity(f64::NAN, 100.0, 200.0, 0.1), 1.0);
        assert_eq!(fade_opacity(99.0, 100.0, 100.0, 0.1), 1.0);
        assert_eq!(fade_opacity(100.0, 100.0, 100.0, 0.1), 0.1);
        assert_eq!(fade_opacity(150.0, 200.0, 100.0, 0.1), 1.0);
    }

    #[test]
    fn reveal_mirrors_fade_direction() {
        assert_eq!(reveal_progress(0.0, 600.0, 1000.0), 0.0);
        assert_eq!(reveal_progress(800.0, 600.0, 1000.0), 0.5);
        assert_eq!(reveal_progress(1000.0, 600.0, 1000.0), 1.0);
        assert_eq!(reveal_progress(1200.0, 600.0, 1000.0), 1.0);
        assert_eq!(reveal_progress(f64::NAN, 600.0, 1000.0), 0.0);
    }

    #[test]
    fn sentence_without_threshold_never_appears() {
        let thresholds = [window(600.0, 1000.0), window(1000.0, 1400.0)];
        assert_eq!(sentence_opacity(0, 800.0, &thresholds), 0.5);
        assert_eq!(sentence_opacity(1, 800.0, &thresholds), 0.0);
        assert_eq!(sentence_opacity(1, 1400.0, &thresholds), 1.0);
        assert_eq!(sentence_opacity(2, 1_000_000.0, &thresholds), 0.0);
    }

    #[test]
    fn relative_offset_starts_when_section_enters_viewport() {
        assert_eq!(relative_offset(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(relative_offset(1200.0, 2000.0, 800.0), 0.0);
        assert_eq!(relative_offset(1500.0, 2000.0, 800.0), 300.0);
    }

    #[test]
    fn fade_curve_clamps_floor() {
        let curve = FadeCurve::new(window(0.0, 100.0), 1.5);
        assert_eq!(curve.opacity(500.0), 1.0);

        let drift = FadeCurve::drift(1200.0, 1500.0, 0.8).unwrap();
        assert_eq!(drift.opacity(1200.0), 1.0);
        assert_eq!(drift.opacity(1350.0), 0.9);
        assert_eq!(drift.opacity(9000.0), 0.8);
    }

    #[test]
    fn slide_fade_caps_slide_and_floors_opacity() {
        let slide = SlideFade {
            curve: FadeCurve::new(window(2400.0, 3000.0), 0.1),
            min_opacity: 0.3,
            max_slide: 50.0,
            axis: Axis::Vertical,
        };

        assert_eq!(slide.at(0.0), Transform::new(1.0, 0.0, 0.0));

        let mid = slide.at(2700.0);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.translate_y, 25.0);

        let past = slide.at(4000.0);
        assert_eq!(past.opacity, 0.3);
        assert!((past.translate_y - 45.0).abs() < 1e-9);
    }

    #[test]
    fn slide_fade_supports_negative_horizontal_slides() {
        let slide = SlideFade {
            curve: FadeCurve::new(window(0.0, 100.0), 0.0),
            min_opacity: 0.0,
            max_slide: -50.0,
            axis: Axis::Horizontal,
        };
        let t = slide.at(50.0);
        assert_eq!(t.translate_x, -25.0);
        assert_eq!(t.translate_y, 0.0);
        assert_eq!(slide.at(500.0).translate_x, -50.0);
    }

    #[test]
    fn reveal_slide_rises_into_place() {
        let rise = RevealSlide { max_slide: 30.0 };
        assert_eq!(rise.at(0.0), Transform::new(0.0, 0.0, 30.0));
        assert_eq!(rise.at(0.5), Transform::new(0.5, 0.0, 15.0));
        assert_eq!(rise.at(2.0), Transform::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn split_fade_slides_and_dims_on_separate_curves() {
        let split = SplitFade {
            opacity: FadeCurve::drift(2800.0, 1500.0, 0.8).unwrap(),
            slide: FadeCurve::drift(3000.0, 1500.0, 0.8).unwrap(),
            max_slide: 50.0,
            axis: Axis::Vertical,
        };
        // dimming has started, sliding has not
        let early = split.at(2900.0);
        assert!(early.opacity < 1.0);
        assert_eq!(early.translate_y, 0.0);
        // both curves bottom out at their floor
        let late = split.at(10_000.0);
        assert_eq!(late.opacity, 0.8);
        assert!((late.translate_y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn section_trigger_is_inclusive() {
        let trigger = SectionTrigger {
            window: window(3200.0, 4200.0),
        };
        assert!(!is_section_active(3199.0, &trigger));
        assert!(is_section_active(3200.0, &trigger));
        assert!(is_section_active(4200.0, &trigger));
        assert!(!is_section_active(f64::NAN, &trigger));
    }

    #[test]
    fn transform_renders_inline_style() {
        assert_eq!(
            Transform::new(0.5, -12.26, 30.0).to_style(),
            "opacity: 0.500; transform: translate(-12.3px, 30.0px);"
        );
    }
}
