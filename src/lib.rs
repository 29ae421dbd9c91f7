//! flowboard - task and project dashboard
//!
//! This library provides the core functionality for the flowboard CLI and
//! terminal UI: a small workspace of users, projects and tasks, browsed
//! through a dashboard, project boards and a task detail modal.
//!
//! # Core Concepts
//!
//! - **Dataset**: users, projects and tasks plus the current user, read once
//! - **Queries**: total, order-preserving views over the dataset
//! - **Routes**: paths such as `/dashboard` and `/projects/{id}`
//! - **Page state**: cursor, project view and task modal, reset on navigation
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.flowboard.toml`
//! - `dataset`: Builtin data and JSON dataset files
//! - `error`: Error types and result aliases
//! - `model`: Users, projects, tasks and comments
//! - `output`: Human and JSON output for commands
//! - `query`: Task selection, board columns and dashboard stats
//! - `route`: Path parsing and formatting
//! - `state`: Transient UI state
//! - `ui`: Terminal UI and plain text page rendering

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod output;
pub mod query;
pub mod route;
pub mod state;
pub mod ui;

pub use error::{Error, Result};
