//! User-visible error notices.

use std::fmt;

pub const EMPTY_TITLE: &str = "Todo title cannot be empty!";
pub const LOAD_FAILED: &str = "Could not load todos. Please try again.";
pub const ADD_FAILED: &str = "Could not add todo. Please try again.";
pub const DELETE_FAILED: &str = "Could not delete todo. Please try again.";
pub const UPDATE_FAILED: &str = "Could not update todo. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The user asked for something the client refuses without asking the remote.
    Input,
    /// The remote call failed in any way.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Input,
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Remote,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
