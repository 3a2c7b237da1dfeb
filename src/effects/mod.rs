pub mod bounce;
pub mod pulse;

pub use bounce::{bounce_transform, BounceLoop, BounceState};
pub use pulse::pulse_card;
