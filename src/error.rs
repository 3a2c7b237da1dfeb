use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("GitHub API error: {0}")]
    RemoteApi(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Animation engine unavailable: {0}")]
    AnimationUnavailable(String),

    #[error("Template render failed: {0}")]
    Render(#[from] askama::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ShowcaseError {
    /// Short stable tag for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            ShowcaseError::RemoteApi(_) => "remote_api",
            ShowcaseError::MalformedResponse(_) => "malformed_response",
            ShowcaseError::NetworkError(_) => "network",
            ShowcaseError::InvalidUrl(_) => "invalid_url",
            ShowcaseError::AnimationUnavailable(_) => "animation_unavailable",
            ShowcaseError::Render(_) => "render",
            ShowcaseError::IoError(_) => "io",
        }
    }

    /// HTTP status carried by a remote API failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ShowcaseError::RemoteApi(status) => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
