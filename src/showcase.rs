use crate::animation::{NoopTweens, TweenProvider};
use crate::effects::{pulse_card, BounceLoop};
use crate::error::ShowcaseError;
use crate::github::RepoSource;
use crate::render::{ListEntry, RepoEntry, ENTER_USERNAME, LOADING, LOAD_FAILED, NO_REPOSITORIES};
use crate::view::{
    lock, MemoryListView, RepoListView, StyleSlot, TextInput, TransformTarget, UsernameInput,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

pub const DEFAULT_USERNAME: &str = "octocat";
pub const MAX_ENTRIES: usize = 5;

/// Result of one repository load
#[derive(Debug)]
pub enum LoadOutcome {
    /// Blank username, nothing was requested
    EmptyInput,
    Rendered(usize),
    NoRepositories,
    /// Shown to the user as the generic error message
    Failed(ShowcaseError),
    /// A newer load started before this one finished
    Superseded,
}

impl LoadOutcome {
    pub fn rendered(&self) -> usize {
        match self {
            LoadOutcome::Rendered(count) => *count,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Environment finished loading
    Ready,
    LoadClicked,
    RestartAnimationClicked,
}

/// Everything the loader and the effects act on
pub struct Showcase {
    source: Arc<dyn RepoSource>,
    list: Arc<dyn RepoListView>,
    input: Arc<dyn UsernameInput>,
    card: Arc<dyn TransformTarget>,
    demo: Arc<dyn TransformTarget>,
    tweens: Arc<dyn TweenProvider>,
    bounce: Mutex<BounceLoop>,
    generation: AtomicU64,
    default_username: String,
}

impl Showcase {
    pub fn builder(source: Arc<dyn RepoSource>) -> ShowcaseBuilder {
        ShowcaseBuilder::new(source)
    }

    /// Bounce loop state; do not hold across an await
    pub fn bounce(&self) -> MutexGuard<'_, BounceLoop> {
        lock(&self.bounce)
    }

    /// Dispatches a UI event; load-triggering events return their outcome.
    ///
    /// Events may interleave while a load is waiting on the network.
    pub async fn handle(&self, event: UiEvent) -> Option<LoadOutcome> {
        match event {
            UiEvent::Ready => {
                self.input.set_value(&self.default_username);
                // The bounce loop must not wait on the fetch
                self.start_bounce();
                Some(self.load_repos(&self.input.value()).await)
            }
            UiEvent::LoadClicked => Some(self.load_repos(&self.input.value()).await),
            UiEvent::RestartAnimationClicked => {
                self.start_bounce();
                None
            }
        }
    }

    /// Replaces the list with `username`'s most recently updated repositories
    pub async fn load_repos(&self, username: &str) -> LoadOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let username = username.trim();

        if username.is_empty() {
            self.list.replace(vec![ListEntry::status(ENTER_USERNAME)]);
            return LoadOutcome::EmptyInput;
        }

        self.list.replace(vec![ListEntry::status(LOADING)]);
        let result = self.source.fetch_recent_repos(username).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            match &result {
                Ok(_) => debug!(username, ticket, "discarding superseded repository load"),
                Err(e) => warn!(
                    username,
                    ticket,
                    kind = e.kind(),
                    status = ?e.status(),
                    error = %e,
                    "superseded repository load failed"
                ),
            }
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(repos) if repos.is_empty() => {
                info!(username, "no public repositories");
                self.list.replace(vec![ListEntry::status(NO_REPOSITORIES)]);
                LoadOutcome::NoRepositories
            }
            Ok(repos) => {
                let entries: Vec<ListEntry> = repos
                    .iter()
                    .take(MAX_ENTRIES)
                    .map(|repo| ListEntry::Repo(RepoEntry::from_repo(repo)))
                    .collect();
                let count = entries.len();
                self.list.replace(entries);
                info!(username, count, "rendered repositories");

                pulse_card(self.tweens.as_ref(), Arc::clone(&self.card));
                LoadOutcome::Rendered(count)
            }
            Err(e) => {
                error!(
                    username,
                    kind = e.kind(),
                    status = ?e.status(),
                    error = %e,
                    "failed to load repositories"
                );
                self.list.replace(vec![ListEntry::status(LOAD_FAILED)]);
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Starts the bounce loop, replacing any running one
    pub fn start_bounce(&self) {
        lock(&self.bounce).start(self.tweens.as_ref(), Arc::clone(&self.demo));
    }

    pub fn stop_bounce(&self) {
        lock(&self.bounce).stop();
    }
}

pub struct ShowcaseBuilder {
    source: Arc<dyn RepoSource>,
    list: Arc<dyn RepoListView>,
    input: Arc<dyn UsernameInput>,
    card: Arc<dyn TransformTarget>,
    demo: Arc<dyn TransformTarget>,
    tweens: Arc<dyn TweenProvider>,
    default_username: String,
}

impl ShowcaseBuilder {
    fn new(source: Arc<dyn RepoSource>) -> Self {
        Self {
            source,
            list: Arc::new(MemoryListView::new()),
            input: Arc::new(TextInput::default()),
            card: Arc::new(StyleSlot::new("github-card")),
            demo: Arc::new(StyleSlot::new("demo-box")),
            tweens: Arc::new(NoopTweens),
            default_username: DEFAULT_USERNAME.to_string(),
        }
    }

    pub fn list(mut self, list: Arc<dyn RepoListView>) -> Self {
        self.list = list;
        self
    }

    pub fn input(mut self, input: Arc<dyn UsernameInput>) -> Self {
        self.input = input;
        self
    }

    pub fn card(mut self, card: Arc<dyn TransformTarget>) -> Self {
        self.card = card;
        self
    }

    pub fn demo(mut self, demo: Arc<dyn TransformTarget>) -> Self {
        self.demo = demo;
        self
    }

    pub fn tweens(mut self, tweens: Arc<dyn TweenProvider>) -> Self {
        self.tweens = tweens;
        self
    }

    pub fn default_username(mut self, username: impl Into<String>) -> Self {
        self.default_username = username.into();
        self
    }

    pub fn build(self) -> Showcase {
        Showcase {
            source: self.source,
            list: self.list,
            input: self.input,
            card: self.card,
            demo: self.demo,
            tweens: self.tweens,
            bounce: Mutex::new(BounceLoop::new()),
            generation: AtomicU64::new(0),
            default_username: self.default_username,
        }
    }
}
