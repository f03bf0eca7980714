//! Session preview pipeline — enumerate, capture, fit, box, compose.
//!
//! Every call re-queries tmux; nothing is cached between previews. Any tmux
//! failure degrades to a blank box or the new-session placeholder rather
//! than an error, so the preview pane always has something to show.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::infrastructure::tmux::CommandRunner;
use crate::layout::{capture, enumerate, grid};
use crate::render::boxes::{render_box, RenderedBox};
use crate::render::compose;
use crate::types::config::PreviewSettings;


/// Preview pane size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSize {
    pub cols: u32,
    pub lines: u32,
}


impl Default for PreviewSize {
    fn default() -> Self {
        PreviewSize { cols: 80, lines: 24 }
    }
}


/// Render the thumbnail grid for `session`.
pub fn render_preview(
    runner: &dyn CommandRunner,
    session: &str,
    size: PreviewSize,
    settings: &PreviewSettings,
) -> String {
    let Some(snapshot) = enumerate::snapshot(runner, session) else {
        debug!(session, "no windows; rendering placeholder");
        return compose::placeholder(session);
    };

    let plan = grid::plan(size.cols, size.lines, snapshot.windows.len(), settings);
    debug!(session, ?size, ?plan, "planned preview grid");

    let fitter = settings.fitter();
    let boxes: Vec<RenderedBox> = snapshot
        .windows
        .iter()
        .map(|window| {
            let content =
                capture::capture_window(runner, session, window, plan.inner_height as usize);
            render_box(
                window,
                &content,
                &plan,
                settings.emphasis(window.is_active),
                &fitter,
            )
        })
        .collect();

    compose::compose(&compose::header(&snapshot), &boxes, &plan)
}
