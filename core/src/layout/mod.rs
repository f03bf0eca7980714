//! Layout — window enumeration, pane capture, and grid planning.
//!
//! The `enumerate` module reads a session's windows from tmux. The `capture`
//! module pulls the trailing meaningful lines of each window's active pane.
//! The `grid` module decides how many columns the preview uses and how large
//! each thumbnail box is.

pub mod capture;
pub mod enumerate;
pub mod grid;
