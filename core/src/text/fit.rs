//! Fixed-width fitting of lines that carry embedded escape runs.
//!
//! `fit` makes a line exactly `width` visible columns wide: short lines are
//! padded with spaces, long lines are cut and end in an ellipsis. Escape runs
//! stay where they were and count as zero columns; malformed runs are dropped.
//! Every result ends in exactly one SGR reset so whatever is drawn next
//! starts unstyled.

use super::scanner::{scan, Token};
use super::width::{SingleColumn, WidthPolicy};

/// SGR reset appended to every fitted line.
pub const RESET: &str = "\x1b[0m";


/// A cut line with the columns it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fitted {
    pub text: String,
    pub width: usize,
}


/// Result of cutting a line, before padding and the final reset.
struct Cut {
    text: String,
    width: usize,
    /// The source ended in a reset that was folded away.
    ended_in_reset: bool,
}


#[derive(Debug, Clone)]
pub struct Fitter<P = SingleColumn> {
    policy: P,
    ellipsis: char,
}


impl Default for Fitter<SingleColumn> {
    fn default() -> Self {
        Fitter::new(SingleColumn, '…')
    }
}


impl<P: WidthPolicy> Fitter<P> {
    pub fn new(policy: P, ellipsis: char) -> Self {
        Fitter { policy, ellipsis }
    }

    /// Visible columns of `line`, ignoring escape runs.
    pub fn visible_width(&self, line: &str) -> usize {
        scan(line)
            .map(|t| match t {
                Token::Char(c) => self.policy.width(c),
                Token::Escape(_) | Token::Malformed(_) => 0,
            })
            .sum()
    }

    /// Fit `line` to exactly `width` visible columns, then reset.
    ///
    /// `width` must be at least 1; a zero width yields only the reset.
    pub fn fit(&self, line: &str, width: usize) -> String {
        if width == 0 {
            return RESET.to_string();
        }
        let cut = self.cut(line, width);
        let pad = width - cut.width;
        let mut out = cut.text;
        // Keep the source's reset ahead of the padding.
        if cut.ended_in_reset && pad > 0 {
            out.push_str(RESET);
        }
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(RESET);
        out
    }

    /// Cut `line` to at most `max` visible columns without padding.
    /// The returned text ends in a reset; `width` is the columns it shows.
    pub fn truncate(&self, line: &str, max: usize) -> Fitted {
        let cut = self.cut(line, max);
        let mut text = cut.text;
        text.push_str(RESET);
        Fitted {
            text,
            width: cut.width,
        }
    }

    fn cut(&self, line: &str, width: usize) -> Cut {
        let mut tokens: Vec<Token<'_>> = scan(line)
            .filter(|t| !matches!(t, Token::Malformed(_)))
            .collect();
        // Trailing resets are subsumed by the one the caller appends.
        let mut ended_in_reset = false;
        while tokens.last().is_some_and(Token::is_reset) {
            tokens.pop();
            ended_in_reset = true;
        }

        // remaining[i] = visible columns of tokens[i..]
        let mut remaining = vec![0usize; tokens.len() + 1];
        for (i, token) in tokens.iter().enumerate().rev() {
            let w = match token {
                Token::Char(c) => self.policy.width(*c),
                Token::Escape(_) | Token::Malformed(_) => 0,
            };
            remaining[i] = remaining[i + 1] + w;
        }

        let ellipsis_width = self.policy.width(self.ellipsis);
        let mut out = String::with_capacity(line.len() + width);
        let mut vw = 0;

        for (i, token) in tokens.iter().enumerate() {
            match *token {
                Token::Escape(run) => out.push_str(run),
                Token::Malformed(_) => {}
                Token::Char(c) => {
                    let w = self.policy.width(c);
                    // Everything left fits, or this char still leaves room
                    // for the ellipsis.
                    if vw + remaining[i] <= width || vw + w + ellipsis_width <= width {
                        out.push(c);
                        vw += w;
                        continue;
                    }
                    if vw + ellipsis_width <= width {
                        out.push(self.ellipsis);
                        vw += ellipsis_width;
                    }
                    return Cut {
                        text: out,
                        width: vw,
                        ended_in_reset,
                    };
                }
            }
        }

        Cut {
            text: out,
            width: vw,
            ended_in_reset,
        }
    }
}
