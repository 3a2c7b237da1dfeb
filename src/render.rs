use crate::error::Result;
use crate::types::GitHubRepo;
use askama::Template;
use colored::*;

pub const ENTER_USERNAME: &str = "Please enter a GitHub username.";
pub const LOADING: &str = "Loading repositories...";
pub const NO_REPOSITORIES: &str = "No public repositories found for this user.";
pub const LOAD_FAILED: &str = "Error loading repos. Please try again later.";
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Hyperlink opened in a new browsing context without an opener reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLink {
    pub text: String,
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    pub link: RepoLink,
    pub caption: String,
}

impl RepoEntry {
    pub fn from_repo(repo: &GitHubRepo) -> Self {
        Self {
            link: RepoLink {
                text: repo.name.clone(),
                href: repo.html_url.clone(),
                target: "_blank",
                rel: "noopener noreferrer",
            },
            caption: caption(repo),
        }
    }
}

/// One item of the repository list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Status(String),
    Repo(RepoEntry),
}

impl ListEntry {
    pub fn status(message: &str) -> Self {
        ListEntry::Status(message.to_string())
    }
}

/// Description (or fallback) followed by the star count
pub fn caption(repo: &GitHubRepo) -> String {
    format!(
        "{} • ⭐ {}",
        repo.description().unwrap_or(NO_DESCRIPTION),
        repo.stargazers_count
    )
}

struct PageItem {
    name: String,
    href: String,
    target: String,
    rel: String,
    text: String,
    is_repo: bool,
}

impl From<&ListEntry> for PageItem {
    fn from(entry: &ListEntry) -> Self {
        match entry {
            ListEntry::Status(message) => PageItem {
                name: String::new(),
                href: String::new(),
                target: String::new(),
                rel: String::new(),
                text: message.clone(),
                is_repo: false,
            },
            ListEntry::Repo(repo) => PageItem {
                name: repo.link.text.clone(),
                href: repo.link.href.clone(),
                target: repo.link.target.to_string(),
                rel: repo.link.rel.to_string(),
                text: repo.caption.clone(),
                is_repo: true,
            },
        }
    }
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ username }} on GitHub</title>
</head>
<body>
<section class="github-card">
<h2>{{ username }}</h2>
<ul id="repo-list">
{% for item in items %}{% if item.is_repo %}<li class="repo-item"><a href="{{ item.href }}" target="{{ item.target }}" rel="{{ item.rel }}">{{ item.name }}</a><div class="repo-meta">{{ item.text }}</div></li>
{% else %}<li class="repo-item">{{ item.text }}</li>
{% endif %}{% endfor %}</ul>
</section>
</body>
</html>
"#
)]
struct RepoPageTemplate<'a> {
    username: &'a str,
    items: Vec<PageItem>,
}

/// Standalone HTML page listing the entries
pub fn render_page(username: &str, entries: &[ListEntry]) -> Result<String> {
    let template = RepoPageTemplate {
        username,
        items: entries.iter().map(PageItem::from).collect(),
    };
    Ok(template.render()?)
}

/// Terminal listing of the entries
pub fn render_text(entries: &[ListEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        match entry {
            ListEntry::Status(message) => {
                out.push_str(&format!("  {}\n", message.dimmed()));
            }
            ListEntry::Repo(repo) => {
                out.push_str(&format!(
                    "• {} {}\n    {}\n",
                    repo.link.text.bold().green(),
                    repo.link.href.blue().underline(),
                    repo.caption
                ));
            }
        }
    }
    out
}
