//! Domain DTOs for the todo API.
//!
//! # Design
//! The remote stores completion as a free-form string. `Status` keeps the
//! two canonical values as variants and preserves anything else verbatim in
//! `Unknown`, so a record read from the remote is never silently rewritten.
//! Views treat `Unknown` exactly like `Incomplete`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const STATUS_INCOMPLETE: &str = "incomplete";
pub const STATUS_COMPLETED: &str = "completed";

/// Completion state of a todo, serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Incomplete,
    Completed,
    /// A value the remote sent that is neither `"incomplete"` nor `"completed"`.
    Unknown(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Incomplete => STATUS_INCOMPLETE,
            Status::Completed => STATUS_COMPLETED,
            Status::Unknown(raw) => raw,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }

    /// The status a toggle moves to. Unknown values count as incomplete.
    pub fn toggled(&self) -> Status {
        if self.is_completed() {
            Status::Incomplete
        } else {
            Status::Completed
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            STATUS_INCOMPLETE => Status::Incomplete,
            STATUS_COMPLETED => Status::Completed,
            _ => Status::Unknown(raw),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Status::from(raw.to_string())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Status::from)
    }
}

/// A single todo item as delivered by the remote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: Status,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
}

/// The part of a create response the client relies on. Any other fields the
/// remote echoes back are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedTodo {
    pub id: i64,
}

/// Request payload for changing a todo's completion state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateStatus {
    pub completed: Status,
}
