use anyhow::Context;
use clap::Parser;
use colored::*;
use repo_showcase::animation::{NoopTweens, TokioTweens, TweenProvider};
use repo_showcase::cli::{Cli, OutputFormat};
use repo_showcase::github::{GitHubClient, GitHubConfig};
use repo_showcase::render::render_page;
use repo_showcase::view::{
    MemoryListView, RepoListView, StyleSlot, TerminalListView, TextInput, TransformTarget,
};
use repo_showcase::{LoadOutcome, Showcase, UiEvent};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = GitHubClient::new(GitHubConfig::default().with_base_url(cli.api_url.clone()))
        .context("Failed to create GitHub client")?;

    let tweens: Arc<dyn TweenProvider> = if cli.no_animations {
        Arc::new(NoopTweens)
    } else {
        match TokioTweens::new() {
            Ok(engine) => Arc::new(engine),
            Err(e) => {
                warn!(error = %e, "animations disabled");
                Arc::new(NoopTweens)
            }
        }
    };

    let memory = Arc::new(MemoryListView::new());
    let list: Arc<dyn RepoListView> = match cli.format {
        OutputFormat::Text => Arc::new(TerminalListView::new()),
        OutputFormat::Html => memory.clone(),
    };
    let demo = Arc::new(StyleSlot::new("demo-box"));

    let showcase = Showcase::builder(Arc::new(client))
        .list(list)
        .input(Arc::new(TextInput::default()))
        .card(Arc::new(StyleSlot::new("github-card")))
        .demo(demo.clone())
        .tweens(tweens)
        .default_username(cli.username.clone())
        .build();

    if cli.format == OutputFormat::Text {
        println!("{}", "Repo Showcase".bold().green());
        println!("{}\n", "=".repeat(50).dimmed());
    }

    let outcome = showcase.handle(UiEvent::Ready).await;
    if let Some(LoadOutcome::Failed(e)) = &outcome {
        info!(kind = e.kind(), "initial load failed");
    }

    if cli.format == OutputFormat::Html {
        let page = render_page(&cli.username, &memory.entries())?;
        match &cli.output {
            Some(path) => {
                tokio::fs::write(path, page)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("✅ Wrote {}", path.display());
            }
            None => print!("{page}"),
        }
    }

    if cli.bounce_secs > 0 && showcase.bounce().is_running() {
        let show_frames = cli.format == OutputFormat::Text;
        if show_frames {
            println!("\n{}", "Bounce demo (Ctrl+C to stop)".bold());
        }

        let deadline = tokio::time::sleep(Duration::from_secs(cli.bounce_secs));
        tokio::pin!(deadline);
        let mut ticker = tokio::time::interval(Duration::from_millis(250));

        loop {
            tokio::select! {
                _ = &mut deadline => break,
                _ = tokio::signal::ctrl_c() => {
                    println!("\n🛑 Stopping animation...");
                    break;
                }
                _ = ticker.tick() => {
                    if show_frames {
                        if let Some(transform) = demo.transform() {
                            print!("\r{:<60}", transform.cyan());
                            std::io::stdout().flush().ok();
                        }
                    }
                }
            }
        }
        if show_frames {
            println!();
        }
    }

    showcase.stop_bounce();
    Ok(())
}
