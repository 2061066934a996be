//! The five data-driven page sections and how each one is located, fetched,
//! decoded and reported while loading or on failure.

use crate::data::{IprRecord, Paper, Profile, Project, Team};
use crate::error::{LoadError, LoadResult};
use crate::markup;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Team,
    Papers,
    Projects,
    Ipr,
}

/// How the loading state is shown before data arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// Append a `div.loading` node; on failure its text becomes the message.
    Appended { text: &'static str },
    /// Replace the container's content; on failure the content is replaced again.
    Replace { html: &'static str },
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Profile,
        Section::Team,
        Section::Papers,
        Section::Projects,
        Section::Ipr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Team => "team",
            Section::Papers => "papers",
            Section::Projects => "projects",
            Section::Ipr => "ipr",
        }
    }

    pub fn json_path(self) -> &'static str {
        match self {
            Section::Profile => "src/jsons/profile.json",
            Section::Team => "src/jsons/team.json",
            Section::Papers => "src/jsons/papers.json",
            Section::Projects => "src/jsons/projects.json",
            Section::Ipr => "src/jsons/ipr.json",
        }
    }

    pub fn container_selector(self) -> &'static str {
        match self {
            Section::Profile => "#home .card",
            Section::Team => "#team .card",
            Section::Papers => "#research .space-y-6",
            Section::Projects => "#projects-container",
            Section::Ipr => "#ipr .grid",
        }
    }

    pub fn placeholder(self) -> Placeholder {
        match self {
            Section::Profile | Section::Team => Placeholder::Appended { text: "加载中..." },
            Section::Papers => Placeholder::Replace {
                html: r#"<p class="text-gray-500">加载论文数据中...</p>"#,
            },
            Section::Projects => Placeholder::Replace {
                html: r#"<div class="text-center py-8"><i class="fas fa-spinner fa-spin text-3xl text-green-600"></i><p class="mt-2">加载中...</p></div>"#,
            },
            Section::Ipr => Placeholder::Replace {
                html: r#"<p class="text-gray-500 col-span-full">加载知识产权数据中...</p>"#,
            },
        }
    }

    /// Failure content. For appended placeholders this is plain text for the
    /// loading node, otherwise markup for the whole container.
    pub fn failure_message(self) -> &'static str {
        match self {
            Section::Profile | Section::Team => "加载失败，请刷新页面重试",
            Section::Papers => r#"<p class="text-red-500">加载论文数据失败</p>"#,
            Section::Projects => r#"<div class="text-center py-8"><p class="text-red-600">加载项目数据失败，请稍后重试。</p></div>"#,
            Section::Ipr => r#"<p class="text-red-500 col-span-full">加载知识产权数据失败</p>"#,
        }
    }

    /// Cache-busted request URL.
    pub fn url(self, timestamp_ms: u64) -> String {
        format!("{}?t={}", self.json_path(), timestamp_ms)
    }
}

/// What the page shows once a section has finished loading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Detach the appended loading node.
    pub remove_placeholder: bool,
    /// Replacement markup for the whole container.
    pub container_html: Option<String>,
    /// New text for the appended loading node, which stays in place.
    pub loading_text: Option<&'static str>,
}

impl Section {
    /// Decide the final page state for a finished load. Errors the reader
    /// should not see leave the page untouched.
    pub fn settle(self, result: &LoadResult<Content>) -> Outcome {
        let appended = matches!(self.placeholder(), Placeholder::Appended { .. });
        match result {
            Ok(content) => Outcome {
                remove_placeholder: appended,
                container_html: Some(content.markup()),
                loading_text: None,
            },
            Err(e) if !e.is_user_visible() => Outcome::default(),
            Err(_) if appended => Outcome {
                loading_text: Some(self.failure_message()),
                ..Outcome::default()
            },
            Err(_) => Outcome {
                container_html: Some(self.failure_message().to_string()),
                ..Outcome::default()
            },
        }
    }
}

/// Map an HTTP status to an error for anything outside 200..=299.
#[inline]
pub fn check_status(status: u16) -> LoadResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Http { status })
    }
}

pub fn decode<T: DeserializeOwned>(body: &str) -> LoadResult<T> {
    Ok(serde_json::from_str(body)?)
}

/// A decoded section document.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Profile(Profile),
    Team(Team),
    Papers(Vec<Paper>),
    Projects(Vec<Project>),
    Ipr(Vec<IprRecord>),
}

impl Content {
    pub fn decode(section: Section, body: &str) -> LoadResult<Self> {
        Ok(match section {
            Section::Profile => Content::Profile(decode(body)?),
            Section::Team => Content::Team(decode(body)?),
            Section::Papers => Content::Papers(decode(body)?),
            Section::Projects => Content::Projects(decode(body)?),
            Section::Ipr => Content::Ipr(decode(body)?),
        })
    }

    pub fn markup(&self) -> String {
        match self {
            Content::Profile(p) => markup::profile(p),
            Content::Team(t) => markup::team(t),
            Content::Papers(v) => markup::papers(v),
            Content::Projects(v) => markup::projects(v),
            Content::Ipr(v) => markup::ipr(v),
        }
    }

    /// Number of records, for logging.
    pub fn record_count(&self) -> usize {
        match self {
            Content::Profile(_) => 1,
            Content::Team(t) => t.members.len(),
            Content::Papers(v) => v.len(),
            Content::Projects(v) => v.len(),
            Content::Ipr(v) => v.len(),
        }
    }
}
