//! UI surface the showcase drives: the repository list, the username input
//! and the elements whose visual transform the effects animate.

use crate::render::{render_text, ListEntry};
use std::sync::{Mutex, MutexGuard};
use tracing::trace;

/// Container whose contents are replaced wholesale on every update
pub trait RepoListView: Send + Sync {
    fn replace(&self, entries: Vec<ListEntry>);
}

/// Text control holding the username
pub trait UsernameInput: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Element with a mutable visual transform
pub trait TransformTarget: Send + Sync {
    fn transform(&self) -> Option<String>;
    fn set_transform(&self, value: &str);
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// List view kept in memory
#[derive(Debug, Default)]
pub struct MemoryListView {
    state: Mutex<ListState>,
}

#[derive(Debug, Default)]
struct ListState {
    entries: Vec<ListEntry>,
    replacements: usize,
}

impl MemoryListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ListEntry> {
        lock(&self.state).entries.clone()
    }

    /// How many times the contents have been replaced
    pub fn replacements(&self) -> usize {
        lock(&self.state).replacements
    }
}

impl RepoListView for MemoryListView {
    fn replace(&self, entries: Vec<ListEntry>) {
        let mut state = lock(&self.state);
        state.entries = entries;
        state.replacements += 1;
    }
}

/// List view that prints every replacement to stdout
#[derive(Debug, Default)]
pub struct TerminalListView;

impl TerminalListView {
    pub fn new() -> Self {
        Self
    }
}

impl RepoListView for TerminalListView {
    fn replace(&self, entries: Vec<ListEntry>) {
        print!("{}", render_text(&entries));
    }
}

#[derive(Debug, Default)]
pub struct TextInput {
    value: Mutex<String>,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: Mutex::new(value.into()) }
    }
}

impl UsernameInput for TextInput {
    fn value(&self) -> String {
        lock(&self.value).clone()
    }

    fn set_value(&self, value: &str) {
        *lock(&self.value) = value.to_string();
    }
}

/// Named element holding a transform value
#[derive(Debug)]
pub struct StyleSlot {
    name: String,
    transform: Mutex<Option<String>>,
}

impl StyleSlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), transform: Mutex::new(None) }
    }

    pub fn with_transform(self, transform: impl Into<String>) -> Self {
        *lock(&self.transform) = Some(transform.into());
        self
    }
}

impl TransformTarget for StyleSlot {
    fn transform(&self) -> Option<String> {
        lock(&self.transform).clone()
    }

    fn set_transform(&self, value: &str) {
        trace!(element = %self.name, transform = value, "transform updated");
        *lock(&self.transform) = Some(value.to_string());
    }
}
