pub mod animation;
pub mod cli;
pub mod effects;
pub mod error;
pub mod github;
pub mod render;
pub mod showcase;
pub mod types;
pub mod view;

pub use error::{Result, ShowcaseError};
pub use showcase::{LoadOutcome, Showcase, UiEvent};
