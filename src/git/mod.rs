// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Lists changed files through the `git` binary and reads historical file
//! content through libgit2.

mod changes;
mod commands;
mod repo;

pub use changes::{dedup_by_path, parse_name_status, ChangeRecord, ChangeStatus};
pub use commands::{ChangeSource, GitCli};
pub use repo::Repository;
