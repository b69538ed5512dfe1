//! Terminal front-end for the todo service.
//!
//! # Overview
//! `shell::run` reads line commands, turns them into controller operations,
//! and prints the list after every change. Requests run concurrently through
//! `session::Session` and are reconciled in the order they complete.

pub mod command;
pub mod config;
pub mod render;
pub mod session;
pub mod shell;
pub mod transport;

pub use config::{AppConfig, Cli};
pub use session::Session;
pub use transport::HttpTransport;
