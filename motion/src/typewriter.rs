//! Typewriter sequencing for the simulated analysis terminal.
//!
//! A [`Sequencer`] walks a fixed [`Script`] one character at a time. It owns no
//! timer: the host asks [`Sequencer::next_delay`] how long to wait, waits, then
//! calls [`Sequencer::step`]. Keeping the clock outside means the browser
//! (`set_timeout`) and native (`tokio::time::sleep`) hosts drive the same state
//! machine, and tests can step it without waiting at all.
//!
//! ```text
//! Typing(i, c<len) --char delay--> Typing(i, c+1)
//! Typing(i, len)   --line pause--> Typing(i+1, 0) | Finished
//! Finished         --cooldown----> Typing(0, 0)
//! ```

use std::ops::Range;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{MotionError, Result};

/// Immutable list of lines to type. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
    widths: Vec<usize>,
}

impl Script {
    pub fn new<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Err(MotionError::EmptyScript);
        }
        Ok(Self::from_lines(lines))
    }

    /// The walkthrough typed by the landing page terminal.
    pub fn analysis_demo() -> Self {
        Self::from_lines(ANALYSIS_DEMO.iter().map(|line| line.to_string()).collect())
    }

    fn from_lines(lines: Vec<String>) -> Self {
        let widths = lines.iter().map(|line| line.chars().count()).collect();
        Self { lines, widths }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width of line `index` in characters (not bytes).
    pub fn width(&self, index: usize) -> usize {
        self.widths.get(index).copied().unwrap_or(0)
    }

    /// Total characters across all lines.
    pub fn total_chars(&self) -> usize {
        self.widths.iter().sum()
    }

    fn prefix(&self, index: usize, chars: usize) -> &str {
        let line = &self.lines[index];
        match line.char_indices().nth(chars) {
            Some((byte, _)) => &line[..byte],
            None => line,
        }
    }
}

const ANALYSIS_DEMO: [&str; 18] = [
    "Initializing BALANX Microbiome AI...",
    "Loading health profile [Sarah & Mark]...",
    "Parsing gut flora data sample [ID: sm7c3b0d]...",
    "stress_signature_score = 0.89 # Low Bifido & Lacto detected",
    "metabolic_strain_index = 0.76 # Imbalanced F/B Ratio",
    "energy_synthesis_marker = 'LOW' # Low F. prausnitzii",
    "Processing gut-brain axis signals...",
    "Analyzing family lifestyle impact...",
    "if stress_signature_score > 0.8 and metabolic_strain_index > 0.7:",
    "    needs_flags = ['MOOD_SUPPORT', 'ANTI_INFLAMMATION']",
    "    energy_support = True",
    "Calculating personalized nutrient matrix...",
    "module.L-Theanine = calculate_for('MOOD_SUPPORT')",
    "module.Omega3_D3 = calculate_for('ANTI_INFLAMMATION')",
    "module.Adaptogens = calculate_for('ENERGY_SUPPORT')",
    "Generating personalized wellness blend...",
    "final_config = optimize_for_busy_lifestyle(Sarah, Mark)",
    "Analysis Complete.",
];

/// Pacing of the typewriter, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Inclusive lower bound of the per-character delay.
    pub min_char_delay_ms: u64,
    /// Exclusive upper bound of the per-character delay.
    pub max_char_delay_ms: u64,
    pub line_pause_ms: u64,
    pub cooldown_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            min_char_delay_ms: 30,
            max_char_delay_ms: 80,
            line_pause_ms: 800,
            cooldown_ms: 6688,
        }
    }
}

impl Timings {
    pub fn validate(&self) -> Result<()> {
        if self.min_char_delay_ms >= self.max_char_delay_ms {
            return Err(MotionError::InvalidDelayRange {
                min_ms: self.min_char_delay_ms,
                max_ms: self.max_char_delay_ms,
            });
        }
        Ok(())
    }

    pub fn char_delay_range(&self) -> Range<u64> {
        self.min_char_delay_ms..self.max_char_delay_ms
    }
}

/// Supplies the delay before each character reveal.
pub trait DelaySource {
    /// Pick a delay from `range_ms` (half-open, milliseconds).
    fn char_delay(&mut self, range_ms: Range<u64>) -> Duration;
}

/// Uniform random delay from a seedable generator.
#[derive(Debug, Clone)]
pub struct Jitter {
    rng: SmallRng,
}

impl Jitter {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl DelaySource for Jitter {
    fn char_delay(&mut self, range_ms: Range<u64>) -> Duration {
        if range_ms.is_empty() {
            return Duration::from_millis(range_ms.start);
        }
        Duration::from_millis(self.rng.random_range(range_ms))
    }
}

/// Constant delay, for tests and reduced-motion rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl DelaySource for FixedDelay {
    fn char_delay(&mut self, _range_ms: Range<u64>) -> Duration {
        self.0
    }
}

/// Where the sequencer currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Characters `0..chars` of `line` are visible and more remain.
    Typing { line: usize, chars: usize },
    /// `line` is fully typed; the next step moves on after a pause.
    LinePause { line: usize },
    /// Every line is typed; the next step restarts after the cooldown.
    Finished,
}

/// What a call to [`Sequencer::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Revealed { line: usize, chars: usize },
    LineCompleted { line: usize },
    /// The pause after the last line elapsed.
    Finished,
    Restarted,
}

/// Snapshot handed to the view after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Revealed prefixes, up to and including the active line.
    pub lines: Vec<String>,
    /// Line being typed; equals the script length once finished.
    pub active_line: usize,
    /// Whether a caret should blink on `active_line`.
    pub typing: bool,
    /// `min(active_line + 1, total) / total`.
    pub progress: f64,
    /// Number of lines in the script.
    pub total: usize,
}

impl Frame {
    /// Lines counted as processed: the active one included, capped at `total`.
    pub fn processed(&self) -> usize {
        (self.active_line + 1).min(self.total)
    }
}

/// Character-by-character typewriter over a [`Script`], looping forever.
#[derive(Debug, Clone)]
pub struct Sequencer<D = Jitter> {
    script: Script,
    timings: Timings,
    delays: D,
    line: usize,
    chars: usize,
}

impl<D: DelaySource> Sequencer<D> {
    pub fn new(script: Script, timings: Timings, delays: D) -> Result<Self> {
        timings.validate()?;
        Ok(Self {
            script,
            timings,
            delays,
            line: 0,
            chars: 0,
        })
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn phase(&self) -> Phase {
        if self.line >= self.script.len() {
            Phase::Finished
        } else if self.chars < self.script.width(self.line) {
            Phase::Typing {
                line: self.line,
                chars: self.chars,
            }
        } else {
            Phase::LinePause { line: self.line }
        }
    }

    /// Delay to wait before the next [`step`](Self::step).
    ///
    /// Draws from the delay source for character reveals, so call it once per
    /// scheduled step.
    pub fn next_delay(&mut self) -> Duration {
        match self.phase() {
            Phase::Typing { .. } => self.delays.char_delay(self.timings.char_delay_range()),
            Phase::LinePause { .. } => Duration::from_millis(self.timings.line_pause_ms),
            Phase::Finished => Duration::from_millis(self.timings.cooldown_ms),
        }
    }

    /// Apply exactly one transition.
    pub fn step(&mut self) -> Transition {
        match self.phase() {
            Phase::Typing { line, chars } => {
                self.chars = chars + 1;
                trace!(line, chars = self.chars, "revealed character");
                Transition::Revealed {
                    line,
                    chars: self.chars,
                }
            }
            Phase::LinePause { line } => {
                self.line = line + 1;
                self.chars = 0;
                if self.line == self.script.len() {
                    debug!(lines = self.script.len(), "script fully typed");
                    Transition::Finished
                } else {
                    Transition::LineCompleted { line }
                }
            }
            Phase::Finished => {
                self.line = 0;
                self.chars = 0;
                debug!("typewriter restarting");
                Transition::Restarted
            }
        }
    }

    pub fn is_typing(&self) -> bool {
        self.line < self.script.len()
    }

    pub fn progress(&self) -> f64 {
        let total = self.script.len();
        (self.line + 1).min(total) as f64 / total as f64
    }

    /// Revealed prefixes, up to and including the active line.
    pub fn revealed(&self) -> Vec<&str> {
        let total = self.script.len();
        if self.line >= total {
            return self.script.lines.iter().map(String::as_str).collect();
        }
        let mut out: Vec<&str> = self.script.lines[..self.line]
            .iter()
            .map(String::as_str)
            .collect();
        out.push(self.script.prefix(self.line, self.chars));
        out
    }

    pub fn frame(&self) -> Frame {
        Frame {
            lines: self.revealed().into_iter().map(str::to_owned).collect(),
            active_line: self.line,
            typing: self.is_typing(),
            progress: self.progress(),
            total: self.script.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixed(script: &[&str]) -> Sequencer<FixedDelay> {
        Sequencer::new(
            Script::new(script.iter().copied()).unwrap(),
            Timings::default(),
            FixedDelay(Duration::from_millis(50)),
        )
        .unwrap()
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(matches!(
            Script::new(Vec::<String>::new()),
            Err(MotionError::EmptyScript)
        ));
    }

    #[test]
    fn inverted_delay_range_is_rejected() {
        let timings = Timings {
            min_char_delay_ms: 80,
            max_char_delay_ms: 30,
            ..Timings::default()
        };
        let result = Sequencer::new(Script::analysis_demo(), timings, Jitter::seeded(1));
        assert!(matches!(
            result,
            Err(MotionError::InvalidDelayRange { min_ms: 80, max_ms: 30 })
        ));
    }

    #[test]
    fn types_two_lines_then_loops() {
        let mut seq = fixed(&["ab", "c"]);
        let mut seen = vec![seq.revealed().join("|")];
        let mut transitions = Vec::new();
        for _ in 0..6 {
            transitions.push(seq.step());
            seen.push(seq.revealed().join("|"));
        }

        assert_eq!(
            transitions,
            vec![
                Transition::Revealed { line: 0, chars: 1 },
                Transition::Revealed { line: 0, chars: 2 },
                Transition::LineCompleted { line: 0 },
                Transition::Revealed { line: 1, chars: 1 },
                Transition::Finished,
                Transition::Restarted,
            ]
        );
        assert_eq!(seen, vec!["", "a", "ab", "ab|", "ab|c", "ab|c", ""]);
    }

    #[test]
    fn delays_follow_phase() {
        let mut seq = fixed(&["a"]);
        assert_eq!(seq.next_delay(), Duration::from_millis(50));
        seq.step();
        assert_eq!(seq.phase(), Phase::LinePause { line: 0 });
        assert_eq!(seq.next_delay(), Duration::from_millis(800));
        seq.step();
        assert_eq!(seq.phase(), Phase::Finished);
        assert_eq!(seq.next_delay(), Duration::from_millis(6688));
    }

    #[test]
    fn jitter_stays_in_range_and_is_reproducible() {
        let range = Timings::default().char_delay_range();
        let mut a = Jitter::seeded(42);
        let mut b = Jitter::seeded(42);
        for _ in 0..500 {
            let da = a.char_delay(range.clone());
            assert_eq!(da, b.char_delay(range.clone()));
            assert!(da >= Duration::from_millis(30) && da < Duration::from_millis(80));
        }
    }

    #[test]
    fn empty_lines_pause_without_typing() {
        let mut seq = fixed(&["", "x"]);
        assert_eq!(seq.phase(), Phase::LinePause { line: 0 });
        assert_eq!(seq.step(), Transition::LineCompleted { line: 0 });
        assert_eq!(seq.revealed(), vec!["", ""]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut seq = fixed(&["żółw"]);
        seq.step();
        seq.step();
        assert_eq!(seq.revealed(), vec!["żó"]);
        assert_eq!(seq.script().width(0), 4);
    }

    #[test]
    fn frame_reports_caret_and_progress() {
        let mut seq = fixed(&["a", "b", "c", "d"]);
        let first = seq.frame();
        assert!(first.typing);
        assert_eq!(first.active_line, 0);
        assert_eq!(first.progress, 0.25);
        assert_eq!((first.processed(), first.total), (1, 4));

        while seq.phase() != Phase::Finished {
            seq.step();
        }
        let done = seq.frame();
        assert!(!done.typing);
        assert_eq!(done.active_line, 4);
        assert_eq!(done.progress, 1.0);
        assert_eq!(done.processed(), 4);
        assert_eq!(done.lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn analysis_demo_matches_terminal_copy() {
        let script = Script::analysis_demo();
        assert_eq!(script.len(), 18);
        assert_eq!(script.lines()[0], "Initializing BALANX Microbiome AI...");
        assert_eq!(script.lines()[17], "Analysis Complete.");
    }
}
