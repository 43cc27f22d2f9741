// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::ChangeCategory;
use crate::render::ApiDisposition;

/// docsync - keep project documentation in step with code changes
///
/// Analyses git changes and maintains changelogs, API docs and requirement
/// documents.
#[derive(Parser, Debug)]
#[command(name = "docsync")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Documentation sync assistant for git projects", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyse git changes and suggest documentation updates
    Analyze(AnalyzeArgs),

    /// Create or update documentation files
    Update(UpdateArgs),

    /// Print version information
    Version,
}

/// Arguments for the analyze command.
#[derive(Parser, Debug, Default, Clone)]
pub struct AnalyzeArgs {
    /// Compare against this revision instead of the working tree
    #[arg(short, long)]
    pub since: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the update command.
#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    #[command(subcommand)]
    pub action: UpdateAction,
}

/// Documentation update actions.
#[derive(Subcommand, Debug, Clone)]
pub enum UpdateAction {
    /// Create the documentation layout and initial documents
    Init {
        /// Also write an example docsync.toml
        #[arg(long)]
        write_config: bool,
    },

    /// Add an entry to CHANGELOG.md
    Changelog {
        /// Change category
        #[arg(short = 't', long = "type", value_enum)]
        kind: ChangelogKind,

        /// Entry text
        #[arg(short, long)]
        message: String,
    },

    /// Add an entry to the API changelog
    Api {
        /// Kind of API change
        #[arg(short = 't', long = "type", value_enum)]
        kind: ApiKind,

        /// Endpoint, e.g. "POST /api/users"
        #[arg(short, long)]
        endpoint: String,

        /// Description of the change
        #[arg(short = 'D', long)]
        description: String,
    },

    /// Create a requirement document
    Req {
        /// Feature slug, e.g. user-auth
        #[arg(short, long)]
        name: String,

        /// Document title (defaults to the capitalised slug)
        #[arg(short, long)]
        title: Option<String>,

        /// Document author
        #[arg(short, long)]
        author: Option<String>,

        /// Overwrite an existing document
        #[arg(short, long)]
        force: bool,
    },
}

/// Changelog categories accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChangelogKind {
    Added,
    Changed,
    Fixed,
    Removed,
}

impl From<ChangelogKind> for ChangeCategory {
    fn from(kind: ChangelogKind) -> Self {
        match kind {
            ChangelogKind::Added => ChangeCategory::Added,
            ChangelogKind::Changed => ChangeCategory::Changed,
            ChangelogKind::Fixed => ChangeCategory::Fixed,
            ChangelogKind::Removed => ChangeCategory::Removed,
        }
    }
}

/// API change kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ApiKind {
    Add,
    Change,
    Deprecate,
    Remove,
}

impl From<ApiKind> for ApiDisposition {
    fn from(kind: ApiKind) -> Self {
        match kind {
            ApiKind::Add => ApiDisposition::New,
            ApiKind::Change => ApiDisposition::Changed,
            ApiKind::Deprecate => ApiDisposition::Deprecated,
            ApiKind::Remove => ApiDisposition::Removed,
        }
    }
}
