//! Live config reload manager.
//!
//! Combines the file watcher with selection loading so a running renderer
//! picks up edits to its config file.

mod manager;


pub use manager::{ReloadManager, SharedResolver};
