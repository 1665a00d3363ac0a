//! Native timer driver for a [`Sequencer`].
//!
//! The browser build schedules steps with `set_timeout`; this module does the
//! same on tokio so the terminal can be previewed from a shell and the timing
//! contract can be tested with a paused clock.

use tokio::task::JoinHandle;
use tracing::debug;

use crate::typewriter::{DelaySource, Frame, Sequencer};

/// Handle to a running typewriter. Dropping it stops playback.
#[derive(Debug)]
pub struct Playback {
    task: JoinHandle<()>,
}

/// Start playing `sequencer`, reporting each new frame to `on_frame`.
///
/// Exactly one sleep is outstanding at any time; the next delay is only drawn
/// after the previous step has been applied.
pub fn play<D, F>(mut sequencer: Sequencer<D>, mut on_frame: F) -> Playback
where
    D: DelaySource + Send + 'static,
    F: FnMut(Frame) + Send + 'static,
{
    let task = tokio::spawn(async move {
        loop {
            let delay = sequencer.next_delay();
            tokio::time::sleep(delay).await;
            let transition = sequencer.step();
            debug!(?transition, "typewriter step");
            on_frame(sequencer.frame());
        }
    });
    Playback { task }
}

impl Playback {
    /// Stop playback. The pending step is discarded and `on_frame` is not
    /// called again.
    pub fn cancel(self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        self.task.abort();
    }
}
