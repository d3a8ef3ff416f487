//! The four user operations, split at the network boundary.
//!
//! # Design
//! Every operation has a `begin_*` half that validates input and builds the
//! request, and a single [`Controller::complete`] that applies a response to
//! the store. The [`Operation`] carried between the two halves holds all the
//! data needed to apply the result, so several requests may be in flight and
//! each one patches whatever the store looks like when its response lands.
//! The store is only touched on success.

use tracing::{info, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::notice::{self, Notice};
use crate::store::Store;
use crate::types::{CreateTodo, Status, Todo};

/// What to do with the response once it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    LoadAll,
    Add { title: String },
    Delete { id: i64 },
    Toggle { id: i64, status: Status },
}

/// An operation whose request still has to be executed.
#[derive(Debug, Clone)]
pub struct Pending {
    pub operation: Operation,
    pub request: HttpRequest,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    client: TodoClient,
}

impl Controller {
    pub fn new(client: TodoClient) -> Self {
        Self { client }
    }

    /// Input binding for the draft field. Never touches the network.
    pub fn edit_draft(&self, store: &mut Store, text: &str) {
        store.set_draft(text);
    }

    pub fn begin_load_all(&self) -> Pending {
        Pending {
            operation: Operation::LoadAll,
            request: self.client.build_list_todos(),
        }
    }

    /// Fails with an input notice when the trimmed draft is empty.
    pub fn begin_add(&self, store: &Store) -> Result<Pending, Notice> {
        let title = store.draft().trim();
        if title.is_empty() {
            warn!("rejected add with empty title");
            return Err(Notice::input(notice::EMPTY_TITLE));
        }
        let input = CreateTodo {
            title: title.to_string(),
        };
        let request = self
            .client
            .build_create_todo(&input)
            .map_err(|e| remote_failure(notice::ADD_FAILED, &e))?;
        Ok(Pending {
            operation: Operation::Add { title: input.title },
            request,
        })
    }

    pub fn begin_delete(&self, id: i64) -> Pending {
        Pending {
            operation: Operation::Delete { id },
            request: self.client.build_delete_todo(id),
        }
    }

    pub fn begin_toggle(&self, id: i64, current: &Status) -> Result<Pending, Notice> {
        let status = current.toggled();
        let request = self
            .client
            .build_update_status(id, &status)
            .map_err(|e| remote_failure(notice::UPDATE_FAILED, &e))?;
        Ok(Pending {
            operation: Operation::Toggle { id, status },
            request,
        })
    }

    /// Apply the outcome of a request. `response` is `Err` when the transport
    /// produced no response at all.
    pub fn complete(
        &self,
        store: &mut Store,
        operation: Operation,
        response: Result<HttpResponse, ApiError>,
    ) -> Result<(), Notice> {
        match operation {
            Operation::LoadAll => {
                let items = response
                    .and_then(|r| self.client.parse_list_todos(r))
                    .map_err(|e| remote_failure(notice::LOAD_FAILED, &e))?;
                info!(count = items.len(), "loaded todos");
                store.replace_items(items);
            }
            Operation::Add { title } => {
                let created = response
                    .and_then(|r| self.client.parse_create_todo(r))
                    .map_err(|e| remote_failure(notice::ADD_FAILED, &e))?;
                if store.get(created.id).is_some() {
                    warn!(id = created.id, "create returned an id already in the list");
                    return Err(Notice::remote(notice::ADD_FAILED));
                }
                info!(id = created.id, "added todo");
                store.append(Todo {
                    id: created.id,
                    title,
                    completed: Status::Incomplete,
                });
                store.clear_draft();
            }
            Operation::Delete { id } => {
                response
                    .and_then(|r| self.client.parse_delete_todo(r))
                    .map_err(|e| remote_failure(notice::DELETE_FAILED, &e))?;
                let removed = store.remove(id);
                info!(id, removed, "deleted todo");
            }
            Operation::Toggle { id, status } => {
                response
                    .and_then(|r| self.client.parse_update_status(r))
                    .map_err(|e| remote_failure(notice::UPDATE_FAILED, &e))?;
                info!(id, status = %status, "updated todo status");
                store.set_status(id, status);
            }
        }
        Ok(())
    }
}

fn remote_failure(message: &str, err: &ApiError) -> Notice {
    warn!(error = %err, "{message}");
    Notice::remote(message)
}
