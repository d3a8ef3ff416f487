//! Client core for a single-page todo list backed by a remote HTTP service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the client sit an
//! in-memory [`Store`], a [`Controller`] with the four user operations, a pure
//! [`view::render`] function, and an [`App`] that mounts them together over a
//! host-supplied [`Transport`].
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each remote operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The store changes only after a successful response; every failure
//!   becomes exactly one [`Notice`].

pub mod app;
pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod notice;
pub mod store;
pub mod types;
pub mod view;

pub use app::App;
pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use controller::{Controller, Operation, Pending};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use notice::{Notice, NoticeKind};
pub use store::Store;
pub use types::{CreateTodo, CreatedTodo, Status, Todo, UpdateStatus};
pub use view::{Action, Node};
