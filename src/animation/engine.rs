use crate::animation::{DeferredTask, FrameCallback, Playback, TweenHandle, TweenProvider, TweenSpec};
use crate::error::{Result, ShowcaseError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, Instant, MissedTickBehavior};
use tracing::debug;

/// Roughly sixty frames per second
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Tween engine driven by tokio timers
#[derive(Debug, Clone)]
pub struct TokioTweens {
    runtime: Handle,
    frame_period: Duration,
}

impl TokioTweens {
    /// Binds to the runtime of the calling context
    pub fn new() -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| ShowcaseError::AnimationUnavailable(e.to_string()))?;
        Ok(Self { runtime, frame_period: DEFAULT_FRAME_PERIOD })
    }

    pub fn with_frame_period(mut self, frame_period: Duration) -> Self {
        self.frame_period = frame_period.max(Duration::from_millis(1));
        self
    }
}

struct TaskPlayback {
    task: JoinHandle<()>,
}

impl Playback for TaskPlayback {
    fn stop(&mut self) {
        self.task.abort();
    }

    fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl TweenProvider for TokioTweens {
    fn start(&self, spec: TweenSpec, mut on_frame: FrameCallback) -> TweenHandle {
        let frame_period = self.frame_period;
        let task = self.runtime.spawn(async move {
            let started = Instant::now();
            let mut ticker = interval(frame_period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let sample = spec.sample(started.elapsed());
                on_frame(sample.value);
                if sample.finished {
                    debug!(from = spec.from, to = spec.to, "tween settled");
                    break;
                }
            }
        });

        TweenHandle::new(TaskPlayback { task })
    }

    fn defer(&self, delay: Duration, task: DeferredTask) {
        self.runtime.spawn(async move {
            sleep(delay).await;
            task();
        });
    }
}
