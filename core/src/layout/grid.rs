//! Grid planning — how many columns, and how big each thumbnail box is.
//!
//! The preview never uses more than two columns. Every dimension is clamped
//! to a usable minimum, so any terminal size (down to 1x1) yields a plan.

use serde::{Deserialize, Serialize};

use crate::types::config::PreviewSettings;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPlan {
    pub columns: u32,
    pub rows: u32,
    /// Share of the terminal width given to one box, borders included.
    pub box_width: u32,
    /// Share of the terminal height given to one box, borders included.
    pub box_height: u32,
    pub inner_width: u32,
    pub inner_height: u32,
    /// Blank columns between side-by-side boxes.
    pub gap: u32,
}


impl GridPlan {
    /// Columns actually drawn for one box (content plus two border columns).
    pub fn outer_width(&self) -> u32 {
        self.inner_width + 2
    }

    /// Lines actually drawn for one box (content plus two border lines).
    pub fn outer_height(&self) -> u32 {
        self.inner_height + 2
    }
}


/// Plan a grid for `windows` boxes in a `cols` x `lines` preview area.
/// One line is reserved for the header.
pub fn plan(cols: u32, lines: u32, windows: usize, settings: &PreviewSettings) -> GridPlan {
    let gap = settings.gap;
    let columns: u32 = if windows <= 1 || cols < settings.min_two_column_width {
        1
    } else {
        2
    };
    let windows = u32::try_from(windows).unwrap_or(u32::MAX);
    let rows = windows.div_ceil(columns).max(1);

    let box_width = cols.saturating_sub(gap * (columns - 1)) / columns;
    let inner_width = box_width.saturating_sub(2).max(settings.min_inner_width);

    let box_height = lines.saturating_sub(1) / rows;
    let inner_height = box_height.saturating_sub(2).max(1);

    GridPlan {
        columns,
        rows,
        box_width,
        box_height,
        inner_width,
        inner_height,
        gap,
    }
}
