//! Per-page load and save state.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use console_core::net::error::ApiError;

use crate::util::errors::describe_error;

/// Data fetched when a page mounts.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(describe_error(&e)),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Banner shown after a form action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    /// Outcome of a save: `saved` on success, the described error otherwise.
    pub fn from_save(result: &Result<(), ApiError>, saved: &str) -> Self {
        match result {
            Ok(()) => Self::success(saved),
            Err(e) => Self::error(describe_error(e)),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

/// Form submission state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub saving: bool,
    pub notice: Option<Notice>,
}

impl FormState {
    /// Enter the saving phase; `false` if a save is already running.
    pub fn begin(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        self.notice = None;
        true
    }

    pub fn finish(&mut self, notice: Notice) {
        self.saving = false;
        self.notice = Some(notice);
    }

    /// Reject the form before any request is made.
    pub fn invalid(&mut self, message: &str) {
        self.notice = Some(Notice::error(message));
    }
}
