//! Client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps the list/edit
//! state of a todo front-end in `TodoController`.
//!
//! # Design
//! - `TodoClient` is stateless: base URL and page size only.
//! - Each CRUD operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `TodoController` hands out `PendingRequest`s and reconciles their
//!   outcomes via `apply`; the host decides how and when to run them.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT};
pub use controller::{EditState, Operation, PendingRequest, TodoController};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
