//! Window and session snapshots read from tmux.

use serde::{Deserialize, Serialize};


/// One tmux window as seen at query time. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub index: u32,
    pub name: String,
    pub is_active: bool,
    pub pane_count: u32,
}


impl Window {
    /// Thumbnail label: `"<index>: <name>"`, plus `" *"` for the active window
    /// and `" (<n>p)"` when the window is split into several panes.
    pub fn label(&self) -> String {
        let mut label = format!("{}: {}", self.index, self.name);
        if self.is_active {
            label.push_str(" *");
        }
        if self.pane_count > 1 {
            label.push_str(&format!(" ({}p)", self.pane_count));
        }
        label
    }
}


/// Everything the composer needs to know about a session for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub name: String,
    pub attached_clients: u32,
    pub windows: Vec<Window>,
}


impl SessionSnapshot {
    pub fn is_attached(&self) -> bool {
        self.attached_clients > 0
    }
}
