//! Command-line interface for flowboard
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::output::OutputOptions;
use crate::query::DueDateReference;

mod dataset;
mod page;
mod project;
mod stats;
mod task;
mod ui;

/// flowboard - task and project dashboard
///
/// Browse projects, boards and tasks in a terminal UI, or query them from
/// scripts with `--json`.
#[derive(Parser, Debug)]
#[command(name = "flowboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Dataset file (JSON) to use instead of the builtin demo data
    #[arg(long, global = true, env = "FLOWBOARD_DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file (defaults to ./.flowboard.toml)
    #[arg(long, global = true, env = "FLOWBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal dashboard
    Ui {
        /// Route to start at (/, /dashboard, /projects/<id>, /sign-in, /sign-up)
        #[arg(default_value = "/dashboard")]
        path: String,
    },

    /// Render one page as plain text
    Page {
        /// Route to render
        path: String,

        /// Project view: board or list
        #[arg(long, default_value = "board")]
        view: String,

        /// Open the task detail modal on this task
        #[arg(long)]
        open: Option<String>,

        /// Include the sidebar and top bar
        #[arg(long)]
        chrome: bool,

        /// Render the sidebar collapsed (implies --chrome)
        #[arg(long)]
        collapsed: bool,

        /// Line width used for rows and columns
        #[arg(long, default_value_t = 80)]
        width: usize,
    },

    /// List tasks
    Tasks {
        /// Only tasks of this project
        #[arg(short, long)]
        project: Option<String>,

        /// Only tasks with this status (todo, in_progress, done); needs --project
        #[arg(short, long)]
        status: Option<String>,

        /// Only open tasks assigned to the current user
        #[arg(long, conflicts_with_all = ["project", "status"])]
        mine: bool,
    },

    /// Show one task with its comments
    Task {
        /// Task ID
        id: String,
    },

    /// List projects with stored and actual task counts
    Projects,

    /// Dashboard statistics
    Stats,

    /// Print the active dataset as JSON
    Dataset,
}

/// Dataset and configuration resolved for one invocation.
pub(crate) struct Session {
    pub(crate) config: Config,
    pub(crate) data: Dataset,
    pub(crate) due_reference: DueDateReference,
}

impl Session {
    /// `--data` wins over the config file's `data`; otherwise builtin.
    pub(crate) fn load(data: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let config = Config::resolve(config)?;
        let due_reference = config.dashboard.due_date_reference()?;
        let data = match data.or(config.data.as_deref()) {
            Some(path) => Dataset::from_json_path(path)?,
            None => Dataset::builtin(),
        };
        Ok(Self {
            config,
            data,
            due_reference,
        })
    }
}

impl Cli {
    fn output(&self) -> OutputOptions {
        OutputOptions {
            json: self.json,
            quiet: self.quiet,
        }
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = self.output();
        let session = Session::load(self.data.as_deref(), self.config.as_deref())?;
        match self.command {
            Commands::Ui { path } => ui::run(session, ui::UiOptions { path }),
            Commands::Page {
                path,
                view,
                open,
                chrome,
                collapsed,
                width,
            } => page::run(
                session,
                page::PageOptions {
                    path,
                    view,
                    open,
                    chrome: chrome || collapsed,
                    collapsed,
                    width,
                    output,
                },
            ),
            Commands::Tasks {
                project,
                status,
                mine,
            } => task::run_list(
                session,
                task::ListOptions {
                    project,
                    status,
                    mine,
                    output,
                },
            ),
            Commands::Task { id } => task::run_show(session, task::ShowOptions { id, output }),
            Commands::Projects => project::run_list(session, output),
            Commands::Stats => stats::run(session, output),
            Commands::Dataset => dataset::run(session, output),
        }
    }
}
