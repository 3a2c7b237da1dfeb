use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "repo-showcase")]
#[command(about = "Repo Showcase - Lists a GitHub user's most recently updated public repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub username to load on startup
    #[arg(long, env = "GITHUB_USERNAME", default_value = "octocat")]
    pub username: String,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Output format for the repository list
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the HTML page to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Seconds to keep the bounce demo running before exiting
    #[arg(long, env = "BOUNCE_SECS", default_value_t = 0)]
    pub bounce_secs: u64,

    /// Run without the animation engine
    #[arg(long)]
    pub no_animations: bool,
}
