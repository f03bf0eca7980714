//! Column-width policies for displayable characters.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;


/// How many terminal columns a displayable character occupies.
pub trait WidthPolicy {
    fn width(&self, c: char) -> usize;
}


/// Every character is one column wide. Matches what most captured shell
/// output needs and never disagrees with a plain character count.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleColumn;

impl WidthPolicy for SingleColumn {
    fn width(&self, _c: char) -> usize {
        1
    }
}


/// East-Asian wide characters take two columns, combining marks take none.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeColumns;

impl WidthPolicy for UnicodeColumns {
    fn width(&self, c: char) -> usize {
        c.width().unwrap_or(0)
    }
}


/// Settings-level selector for a width policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthPolicyKind {
    #[default]
    Single,
    Unicode,
}

impl WidthPolicy for WidthPolicyKind {
    fn width(&self, c: char) -> usize {
        match self {
            WidthPolicyKind::Single => SingleColumn.width(c),
            WidthPolicyKind::Unicode => UnicodeColumns.width(c),
        }
    }
}
