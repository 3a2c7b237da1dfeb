use crate::animation::{Easing, TweenHandle, TweenProvider, TweenSpec};
use crate::view::TransformTarget;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Peak vertical displacement in pixels
pub const BOUNCE_AMPLITUDE: f64 = 18.0;
pub const BOUNCE_PERIOD: Duration = Duration::from_millis(3500);

/// Transform for the demo element at `angle` degrees
pub fn bounce_transform(angle: f64) -> String {
    let bounce_y = BOUNCE_AMPLITUDE * (2.0 * angle.to_radians()).sin();
    format!("translateY({bounce_y}px) rotate({angle}deg)")
}

/// Lifecycle of one bounce run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceState {
    Idle,
    Running,
    Stopped,
    /// Stopped because a newer run replaced it
    Superseded,
}

/// Owner of the single live bounce loop
#[derive(Debug, Default)]
pub struct BounceLoop {
    handle: Option<TweenHandle>,
    /// State of every run, oldest first
    runs: Vec<BounceState>,
}

impl BounceLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the most recent run, `Idle` before the first one
    pub fn state(&self) -> BounceState {
        self.runs.last().copied().unwrap_or(BounceState::Idle)
    }

    /// State of run `run` (1-based), if it was ever started
    pub fn run_state(&self, run: u64) -> Option<BounceState> {
        let index = usize::try_from(run.checked_sub(1)?).ok()?;
        self.runs.get(index).copied()
    }

    /// Number of loops started so far
    pub fn starts(&self) -> u64 {
        self.runs.len() as u64
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(TweenHandle::is_active)
    }

    /// (Re)starts the loop, stopping the previous one first
    pub fn start(&mut self, tweens: &dyn TweenProvider, demo: Arc<dyn TransformTarget>) {
        if !tweens.is_available() {
            debug!("animation provider unavailable, skipping bounce loop");
            return;
        }

        if let Some(mut previous) = self.handle.take() {
            previous.stop();
            self.retire(BounceState::Superseded);
            debug!(run = self.starts(), "bounce loop superseded");
        }

        let spec = TweenSpec::new(0.0, 360.0, BOUNCE_PERIOD)
            .ease(Easing::EaseInOut)
            .loop_forever();
        let handle = tweens.start(
            spec,
            Box::new(move |angle| demo.set_transform(&bounce_transform(angle))),
        );

        self.handle = Some(handle);
        self.runs.push(BounceState::Running);
        info!(run = self.starts(), "bounce loop started");
    }

    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
            self.retire(BounceState::Stopped);
            info!(run = self.starts(), "bounce loop stopped");
        }
    }

    fn retire(&mut self, outcome: BounceState) {
        if let Some(last) = self.runs.last_mut() {
            *last = outcome;
        }
    }
}
