#![allow(dead_code)]

use async_trait::async_trait;
use repo_showcase::animation::{
    DeferredTask, FrameCallback, Playback, TweenHandle, TweenProvider, TweenSpec,
};
use repo_showcase::error::Result;
use repo_showcase::github::{GitHubClient, GitHubConfig, RepoSource};
use repo_showcase::types::GitHubRepo;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

pub fn client_for(server: &mockito::ServerGuard) -> GitHubClient {
    GitHubClient::new(GitHubConfig::default().with_base_url(server.url()))
        .expect("Failed to create client")
}

pub fn repo(name: &str, description: Option<&str>, stars: u64) -> GitHubRepo {
    GitHubRepo {
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{name}"),
        description: description.map(str::to_string),
        stargazers_count: stars,
    }
}

struct FakePlayback {
    stops: Arc<AtomicUsize>,
    active: Arc<AtomicBool>,
}

impl Playback for FakePlayback {
    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        self.active.store(false, Ordering::SeqCst);
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

struct StartedTween {
    spec: TweenSpec,
    on_frame: FrameCallback,
    stops: Arc<AtomicUsize>,
    active: Arc<AtomicBool>,
}

/// Tween provider that records everything and only moves when driven
#[derive(Default)]
pub struct RecordingTweens {
    started: Mutex<Vec<StartedTween>>,
    deferred: Mutex<Vec<(Duration, DeferredTask)>>,
}

impl RecordingTweens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> usize {
        self.started.lock().unwrap().len()
    }

    pub fn spec(&self, index: usize) -> TweenSpec {
        self.started.lock().unwrap()[index].spec
    }

    /// Feeds one frame value to the tween at `index`
    pub fn drive(&self, index: usize, value: f64) {
        let mut started = self.started.lock().unwrap();
        (started[index].on_frame)(value);
    }

    pub fn stop_count(&self, index: usize) -> usize {
        self.started.lock().unwrap()[index].stops.load(Ordering::SeqCst)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.started.lock().unwrap()[index].active.load(Ordering::SeqCst)
    }

    pub fn active_count(&self) -> usize {
        self.started
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.active.load(Ordering::SeqCst))
            .count()
    }

    pub fn deferred_delays(&self) -> Vec<Duration> {
        self.deferred.lock().unwrap().iter().map(|(delay, _)| *delay).collect()
    }

    /// Runs every deferred task as if its delay elapsed
    pub fn run_deferred(&self) {
        let tasks: Vec<_> = self.deferred.lock().unwrap().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl TweenProvider for RecordingTweens {
    fn start(&self, spec: TweenSpec, on_frame: FrameCallback) -> TweenHandle {
        let stops = Arc::new(AtomicUsize::new(0));
        let active = Arc::new(AtomicBool::new(true));
        self.started.lock().unwrap().push(StartedTween {
            spec,
            on_frame,
            stops: stops.clone(),
            active: active.clone(),
        });
        TweenHandle::new(FakePlayback { stops, active })
    }

    fn defer(&self, delay: Duration, task: DeferredTask) {
        self.deferred.lock().unwrap().push((delay, task));
    }
}

/// Repo source whose responses are released by the test
#[derive(Default)]
pub struct GatedSource {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<Vec<GitHubRepo>>>>>,
    calls: AtomicUsize,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self, username: &str) -> oneshot::Sender<Result<Vec<GitHubRepo>>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(username.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepoSource for GatedSource {
    async fn fetch_recent_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self
            .gates
            .lock()
            .unwrap()
            .remove(username)
            .expect("no gate registered for username");
        gate.await.expect("gate dropped")
    }
}
