//! Grid composition — header plus boxes laid out row by row.

use crate::layout::grid::GridPlan;
use crate::render::boxes::RenderedBox;
use crate::types::window::SessionSnapshot;


/// The sole output for a session that does not exist yet.
pub fn placeholder(session: &str) -> String {
    format!("  New session: {}", session)
}


/// `" ── <name> ── <n> windows"`, plus `" · attached"` when a client is
/// attached.
pub fn header(snapshot: &SessionSnapshot) -> String {
    let mut header = format!(
        " ── {} ── {} windows",
        snapshot.name,
        snapshot.windows.len()
    );
    if snapshot.is_attached() {
        header.push_str(" · attached");
    }
    header
}


/// Join the header and the boxes, `plan.columns` boxes per row, side-by-side
/// boxes separated by `plan.gap` spaces. Lines are joined with `\n`.
pub fn compose(header: &str, boxes: &[RenderedBox], plan: &GridPlan) -> String {
    let columns = plan.columns.max(1) as usize;
    let gap = " ".repeat(plan.gap as usize);
    let mut out: Vec<String> = vec![header.to_string()];
    for row in boxes.chunks(columns) {
        let height = row.iter().map(|b| b.lines.len()).max().unwrap_or(0);
        for i in 0..height {
            let line = row
                .iter()
                .filter_map(|b| b.lines.get(i).map(String::as_str))
                .collect::<Vec<_>>()
                .join(&gap);
            out.push(line);
        }
    }
    out.join("\n")
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::window::Window;

    fn snapshot(name: &str, windows: u32, attached: u32) -> SessionSnapshot {
        SessionSnapshot {
            name: name.into(),
            attached_clients: attached,
            windows: (0..windows)
                .map(|i| Window {
                    index: i,
                    name: format!("w{}", i),
                    is_active: i == 0,
                    pane_count: 1,
                })
                .collect(),
        }
    }

    fn stub_box(tag: &str) -> RenderedBox {
        RenderedBox {
            label: tag.into(),
            is_active: false,
            width: 3,
            height: 3,
            lines: vec![format!("{}t", tag), format!("{}c", tag), format!("{}b", tag)],
        }
    }

    fn plan(columns: u32, rows: u32) -> GridPlan {
        GridPlan {
            columns,
            rows,
            box_width: 3,
            box_height: 3,
            inner_width: 1,
            inner_height: 1,
            gap: 2,
        }
    }

    #[test]
    fn placeholder_text() {
        assert_eq!(placeholder("scratch"), "  New session: scratch");
    }

    #[test]
    fn header_detached() {
        assert_eq!(header(&snapshot("work", 1, 0)), " ── work ── 1 windows");
    }

    #[test]
    fn header_attached() {
        assert_eq!(
            header(&snapshot("work", 3, 2)),
            " ── work ── 3 windows · attached"
        );
    }

    #[test]
    fn two_columns_join_with_gap() {
        let boxes = vec![stub_box("A"), stub_box("B"), stub_box("C")];
        let out = compose("H", &boxes, &plan(2, 2));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["H", "At  Bt", "Ac  Bc", "Ab  Bb", "Ct", "Cc", "Cb"]
        );
    }

    #[test]
    fn single_column_stacks() {
        let boxes = vec![stub_box("A"), stub_box("B")];
        let out = compose("H", &boxes, &plan(1, 2));
        assert_eq!(out, "H\nAt\nAc\nAb\nBt\nBc\nBb");
    }

    #[test]
    fn no_boxes_is_header_only() {
        assert_eq!(compose("H", &[], &plan(1, 1)), "H");
    }
}
