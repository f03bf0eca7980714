//! muxpeek core — tmux session thumbnails for fuzzy-finder preview panes.
//!
//! A preview enumerates a session's windows, captures the active pane of
//! each, fits every captured line to an exact visible width (escape runs
//! preserved), and lays the resulting boxes out in a grid of at most two
//! columns.

pub mod command;
pub mod infrastructure;
pub mod layout;
pub mod preview;
pub mod render;
pub mod sys;
pub mod text;
pub mod types;
