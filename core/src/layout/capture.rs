//! Pane capture — the trailing meaningful output of a window's active pane.
//!
//! tmux pads the visible pane with empty rows below the prompt. Those rows
//! are dropped before the last `height` lines are kept, so a thumbnail shows
//! the most recent output instead of blank space.

use tracing::debug;

use crate::infrastructure::tmux::{CommandRunner, TmuxCommandBuilder};
use crate::text::scanner::is_visually_blank;
use crate::types::window::Window;


/// Raw lines captured from one pane, escape runs intact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapturedContent {
    pub lines: Vec<String>,
}


/// Capture at most `height` lines from the active pane of `window`.
///
/// A pane that disappeared between listing and capture yields empty content.
pub fn capture_window(
    runner: &dyn CommandRunner,
    session: &str,
    window: &Window,
    height: usize,
) -> CapturedContent {
    let args = TmuxCommandBuilder::new().capture_pane(session, window.index);
    match runner.run(&args) {
        Ok(raw) => tail_lines(&raw, height),
        Err(e) => {
            debug!(session, window = window.index, error = %e, "pane capture failed");
            CapturedContent::default()
        }
    }
}


/// Drop trailing blank lines, then keep the last `height` lines.
pub fn tail_lines(raw: &str, height: usize) -> CapturedContent {
    let mut lines: Vec<&str> = raw.lines().collect();
    while lines.last().is_some_and(|l| is_visually_blank(l)) {
        lines.pop();
    }
    let start = lines.len().saturating_sub(height);
    CapturedContent {
        lines: lines[start..].iter().map(|l| l.to_string()).collect(),
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
