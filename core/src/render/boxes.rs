//! Box rendering — one bordered, labeled thumbnail per window.
//!
//! ```text
//! ┌─1: build * (2p)───┐
//! │                   │
//! │$ cargo test       │
//! │test result: ok.   │
//! └───────────────────┘
//! ```
//!
//! Captured lines sit at the bottom of the box; missing lines are blank rows
//! above them. Border emphasis comes from settings, never from fixed codes.

use crate::layout::capture::CapturedContent;
use crate::layout::grid::GridPlan;
use crate::text::width::WidthPolicy;
use crate::text::{Fitter, RESET};
use crate::types::config::Emphasis;
use crate::types::window::Window;

const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";
const TOP_LEFT: &str = "┌";
const TOP_RIGHT: &str = "┐";
const BOTTOM_LEFT: &str = "└";
const BOTTOM_RIGHT: &str = "┘";


/// A fully drawn thumbnail. `lines` holds `height` strings, each `width`
/// visible columns wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBox {
    pub label: String,
    pub is_active: bool,
    pub width: usize,
    pub height: usize,
    pub lines: Vec<String>,
}


pub fn render_box<P: WidthPolicy>(
    window: &Window,
    content: &CapturedContent,
    plan: &GridPlan,
    emphasis: &Emphasis,
    fitter: &Fitter<P>,
) -> RenderedBox {
    let inner_width = plan.inner_width as usize;
    let inner_height = plan.inner_height as usize;
    let style = emphasis.sgr();
    let label = window.label();

    let mut lines = Vec::with_capacity(inner_height + 2);
    lines.push(top_border(&label, inner_width, &style, fitter));

    let shown = &content.lines[content.lines.len().saturating_sub(inner_height)..];
    let blank = fitter.fit("", inner_width);
    for _ in shown.len()..inner_height {
        lines.push(content_row(&blank, &style));
    }
    for line in shown {
        lines.push(content_row(&fitter.fit(line, inner_width), &style));
    }

    lines.push(format!(
        "{style}{BOTTOM_LEFT}{}{BOTTOM_RIGHT}{RESET}",
        HORIZONTAL.repeat(inner_width)
    ));

    RenderedBox {
        label,
        is_active: window.is_active,
        width: plan.outer_width() as usize,
        height: plan.outer_height() as usize,
        lines,
    }
}


/// `┌─<label>───┐`, with the label cut to leave at least one rule column.
fn top_border<P: WidthPolicy>(
    label: &str,
    inner_width: usize,
    style: &str,
    fitter: &Fitter<P>,
) -> String {
    let room = inner_width.saturating_sub(1);
    let label = fitter.truncate(label, room);
    format!(
        "{style}{TOP_LEFT}{HORIZONTAL}{}{style}{}{TOP_RIGHT}{RESET}",
        label.text,
        HORIZONTAL.repeat(room - label.width)
    )
}


fn content_row(fitted: &str, style: &str) -> String {
    format!("{style}{VERTICAL}{RESET}{fitted}{style}{VERTICAL}{RESET}")
}
