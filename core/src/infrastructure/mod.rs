//! External collaborators — the tmux query/capture surface.

pub mod tmux;
