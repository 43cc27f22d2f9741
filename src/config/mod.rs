// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for docsync.
//!
//! Pattern sets and directory paths live here instead of in globals, so every
//! component receives the configuration it runs with.

pub mod default;
mod loader;
mod schema;

pub use loader::{find_config_file, load_config, parse_config};
pub use schema::*;
