//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args, drives a [`MediaUi`](crate::session::MediaUi) against a repository
//! and prints the rendered views. `render` returns the same output as a
//! string.

pub mod list;
pub mod show;
pub mod types;

// Re-export execute functions for convenience
pub use list::execute as list;
pub use show::execute as show;
pub use types::execute as types;

use crate::repository::AssetRepository;
use crate::session::MediaUi;
use crate::store::{CommitOutcome, ReloadRequest};
use futures::executor::block_on;

/// Fetch `request` and commit it, blocking the current thread
fn load<R: AssetRepository>(ui: &mut MediaUi, repository: &R, request: ReloadRequest) -> CommitOutcome {
    let response = block_on(request.fetch(repository));
    ui.complete_reload(response)
}
