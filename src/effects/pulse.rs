use crate::animation::{TweenHandle, TweenProvider, TweenSpec};
use crate::view::TransformTarget;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const PULSE_SCALE: f64 = 1.05;
/// Forward and reverse legs together
pub const PULSE_DURATION: Duration = Duration::from_millis(220);
/// Must exceed [`PULSE_DURATION`]
pub const PULSE_RESTORE_DELAY: Duration = Duration::from_millis(260);
const RESTING_TRANSFORM: &str = "scale(1)";

/// One-shot scale pulse on the card.
///
/// Returns `None` when the provider is unavailable. The card's transform is
/// restored to its pre-pulse value after [`PULSE_RESTORE_DELAY`] regardless of
/// where the tween itself ended.
pub fn pulse_card(
    tweens: &dyn TweenProvider,
    card: Arc<dyn TransformTarget>,
) -> Option<TweenHandle> {
    if !tweens.is_available() {
        debug!("animation provider unavailable, skipping card pulse");
        return None;
    }

    let initial = card.transform().unwrap_or_else(|| RESTING_TRANSFORM.to_string());

    let spec = TweenSpec::new(1.0, PULSE_SCALE, PULSE_DURATION / 2).yoyo(1);
    debug_assert!(spec
        .total_duration()
        .is_some_and(|settled| settled < PULSE_RESTORE_DELAY));

    let target = Arc::clone(&card);
    let handle = tweens.start(
        spec,
        Box::new(move |scale| target.set_transform(&format!("scale({scale})"))),
    );

    tweens.defer(
        PULSE_RESTORE_DELAY,
        Box::new(move || card.set_transform(&initial)),
    );

    Some(handle)
}
