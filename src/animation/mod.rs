//! Tween capability used by the visual effects.
//!
//! A [`TweenProvider`] turns a [`TweenSpec`] into a stream of sampled values
//! delivered to a per-frame callback. The returned [`TweenHandle`] is the only
//! way to cancel that subscription.

pub mod engine;

use std::fmt;
use std::time::Duration;

pub use engine::TokioTweens;

pub type FrameCallback = Box<dyn FnMut(f64) + Send + 'static>;
pub type DeferredTask = Box<dyn FnOnce() + Send + 'static>;

/// Interpolation curve applied to linear progress in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in mirrored around the midpoint
    EaseInOut,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseInOut => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    let q = 1.0 - p;
                    1.0 - 2.0 * q * q
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    /// Restart from `from` after each cycle; `None` repeats forever
    Loop(Option<u32>),
    /// Play forward, then reverse direction this many times
    Yoyo(u32),
}

impl Repeat {
    /// Total number of cycles played, `None` if unbounded
    fn cycles(self) -> Option<u64> {
        match self {
            Repeat::Once => Some(1),
            Repeat::Loop(None) => None,
            Repeat::Loop(Some(n)) | Repeat::Yoyo(n) => Some(u64::from(n) + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub ease: Easing,
    pub repeat: Repeat,
}

impl TweenSpec {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self { from, to, duration, ease: Easing::Linear, repeat: Repeat::Once }
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub fn yoyo(mut self, reversals: u32) -> Self {
        self.repeat = Repeat::Yoyo(reversals);
        self
    }

    pub fn loop_forever(mut self) -> Self {
        self.repeat = Repeat::Loop(None);
        self
    }

    /// Value of the tween `elapsed` after it started
    pub fn sample(&self, elapsed: Duration) -> Sample {
        let cycle_secs = self.duration.as_secs_f64();
        if cycle_secs <= 0.0 {
            return Sample { value: self.final_value(), finished: true };
        }

        let position = elapsed.as_secs_f64() / cycle_secs;
        let cycle = position.floor();
        if let Some(total) = self.repeat.cycles() {
            if cycle >= total as f64 {
                return Sample { value: self.final_value(), finished: true };
            }
        }

        let mut progress = position - cycle;
        if matches!(self.repeat, Repeat::Yoyo(_)) && cycle % 2.0 == 1.0 {
            progress = 1.0 - progress;
        }
        Sample { value: self.interpolate(progress), finished: false }
    }

    /// Time until the tween settles, `None` if it never does
    pub fn total_duration(&self) -> Option<Duration> {
        self.repeat
            .cycles()
            .map(|cycles| self.duration.saturating_mul(u32::try_from(cycles).unwrap_or(u32::MAX)))
    }

    fn interpolate(&self, progress: f64) -> f64 {
        self.from + (self.to - self.from) * self.ease.apply(progress)
    }

    fn final_value(&self) -> f64 {
        match self.repeat {
            Repeat::Yoyo(reversals) if reversals % 2 == 1 => self.from,
            _ => self.to,
        }
    }
}

/// Running tween as seen by a [`TweenHandle`]
pub trait Playback: Send + Sync {
    fn stop(&mut self);
    fn is_active(&self) -> bool;
}

/// Cancellation handle for a started tween
pub struct TweenHandle {
    playback: Option<Box<dyn Playback>>,
}

impl TweenHandle {
    pub fn new(playback: impl Playback + 'static) -> Self {
        Self { playback: Some(Box::new(playback)) }
    }

    /// Handle for a tween that never ran
    pub fn inert() -> Self {
        Self { playback: None }
    }

    /// Stops the tween; later calls do nothing
    pub fn stop(&mut self) {
        if let Some(mut playback) = self.playback.take() {
            playback.stop();
        }
    }

    pub fn is_active(&self) -> bool {
        self.playback.as_ref().is_some_and(|p| p.is_active())
    }
}

impl fmt::Debug for TweenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenHandle").field("active", &self.is_active()).finish()
    }
}

/// Source of tweens and delayed tasks
pub trait TweenProvider: Send + Sync {
    /// Effects skip silently when this is false
    fn is_available(&self) -> bool {
        true
    }

    /// Starts sampling `spec`, feeding every frame's value to `on_frame`
    fn start(&self, spec: TweenSpec, on_frame: FrameCallback) -> TweenHandle;

    /// Runs `task` once after `delay`
    fn defer(&self, delay: Duration, task: DeferredTask);
}

/// Stand-in when no animation engine can be loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTweens;

impl TweenProvider for NoopTweens {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&self, _spec: TweenSpec, _on_frame: FrameCallback) -> TweenHandle {
        TweenHandle::inert()
    }

    fn defer(&self, _delay: Duration, _task: DeferredTask) {}
}
