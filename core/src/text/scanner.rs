//! Escape-aware tokenizer for captured pane lines.
//!
//! Splits a line into zero-width escape runs and displayable characters.
//! The scanner is an explicit state machine over the escape grammar tmux
//! emits with `capture-pane -e`:
//!
//! - CSI: `ESC [` parameters/intermediates, final byte `0x40..=0x7E`
//! - strings (OSC, DCS, SOS, PM, APC): `ESC ]` ... terminated by BEL or `ESC \`
//! - nF: `ESC` intermediates `0x20..=0x2F`, final byte `0x30..=0x7E`
//! - two-character `ESC x`
//!
//! A run interrupted by a byte that cannot continue it, or by the end of the
//! line, is yielded as a single zero-width `Malformed` token. Such a run must
//! not be written back out: whatever follows it would continue the sequence.

const ESC: char = '\x1b';
const BEL: char = '\x07';


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A complete zero-width escape run, passed through opaquely.
    Escape(&'a str),
    /// An escape run cut short by an unexpected byte or the end of the line.
    Malformed(&'a str),
    /// A displayable character.
    Char(char),
}


impl Token<'_> {
    /// True for an SGR reset (`ESC[m`, `ESC[0m`, `ESC[0;0m`, ...).
    pub fn is_reset(&self) -> bool {
        let Token::Escape(run) = self else {
            return false;
        };
        let Some(params) = run.strip_prefix("\x1b[").and_then(|r| r.strip_suffix('m')) else {
            return false;
        };
        params.split(';').all(|p| p.chars().all(|c| c == '0'))
    }
}


/// Position inside an escape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Just consumed `ESC`.
    Escape,
    Csi,
    Nf,
    Str,
    /// Saw `ESC` inside a string; expecting `\` to terminate.
    StrEscape,
}


/// Outcome of feeding one character to the escape state machine.
enum Step {
    Continue(State),
    /// The character terminates the run and belongs to it.
    Complete,
    /// The character cannot continue the run and is not part of it.
    Interrupted,
    /// Like `Interrupted`, but the `ESC` just before the character also
    /// belongs to the next token.
    InterruptedAtEsc,
}


fn step(state: State, c: char) -> Step {
    match state {
        State::Escape => match c {
            '[' => Step::Continue(State::Csi),
            ']' | 'P' | 'X' | '^' | '_' => Step::Continue(State::Str),
            '\x20'..='\x2f' => Step::Continue(State::Nf),
            '\x30'..='\x7e' => Step::Complete,
            _ => Step::Interrupted,
        },
        State::Csi => match c {
            '\x20'..='\x3f' => Step::Continue(State::Csi),
            '\x40'..='\x7e' => Step::Complete,
            _ => Step::Interrupted,
        },
        State::Nf => match c {
            '\x20'..='\x2f' => Step::Continue(State::Nf),
            '\x30'..='\x7e' => Step::Complete,
            _ => Step::Interrupted,
        },
        State::Str => match c {
            BEL => Step::Complete,
            ESC => Step::Continue(State::StrEscape),
            _ => Step::Continue(State::Str),
        },
        State::StrEscape => match c {
            '\\' => Step::Complete,
            _ => Step::InterruptedAtEsc,
        },
    }
}


/// Iterator over the tokens of one line.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}


impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0 }
    }

    /// Consume an escape run starting at `self.pos` (which holds `ESC`).
    fn escape_run(&mut self) -> Token<'a> {
        let start = self.pos;
        let rest = &self.src[start..];
        let mut state = State::Escape;
        // Skip the leading ESC itself.
        for (i, c) in rest.char_indices().skip(1) {
            let (end, complete) = match step(state, c) {
                Step::Continue(next) => {
                    state = next;
                    continue;
                }
                Step::Complete => (i + c.len_utf8(), true),
                Step::Interrupted => (i, false),
                Step::InterruptedAtEsc => (i - ESC.len_utf8(), false),
            };
            self.pos = start + end;
            let run = &rest[..end];
            return if complete {
                Token::Escape(run)
            } else {
                Token::Malformed(run)
            };
        }
        self.pos = self.src.len();
        Token::Malformed(rest)
    }
}


impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let c = self.src[self.pos..].chars().next()?;
        if c == ESC {
            return Some(self.escape_run());
        }
        self.pos += c.len_utf8();
        Some(Token::Char(c))
    }
}


/// Tokenize a line.
pub fn scan(line: &str) -> Scanner<'_> {
    Scanner::new(line)
}


/// True when the line shows nothing but whitespace once escapes are ignored.
pub fn is_visually_blank(line: &str) -> bool {
    scan(line).all(|t| match t {
        Token::Escape(_) | Token::Malformed(_) => true,
        Token::Char(c) => c.is_whitespace(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<Token<'_>> {
        scan(line).collect()
    }

    #[test]
    fn plain_text_is_all_chars() {
        assert_eq!(
            tokens("ab"),
            vec![Token::Char('a'), Token::Char('b')]
        );
    }

    #[test]
    fn multibyte_chars_stay_whole() {
        assert_eq!(
            tokens("é─"),
            vec![Token::Char('é'), Token::Char('─')]
        );
    }

    #[test]
    fn sgr_run_is_one_escape() {
        assert_eq!(
            tokens("\x1b[1;31mX\x1b[0m"),
            vec![
                Token::Escape("\x1b[1;31m"),
                Token::Char('X'),
                Token::Escape("\x1b[0m"),
            ]
        );
    }

    #[test]
    fn osc_with_bel_and_st() {
        assert_eq!(
            tokens("\x1b]0;title\x07a\x1b]8;;http://x\x1b\\b"),
            vec![
                Token::Escape("\x1b]0;title\x07"),
                Token::Char('a'),
                Token::Escape("\x1b]8;;http://x\x1b\\"),
                Token::Char('b'),
            ]
        );
    }

    #[test]
    fn charset_designation_is_nf() {
        assert_eq!(
            tokens("\x1b(Bz"),
            vec![Token::Escape("\x1b(B"), Token::Char('z')]
        );
    }

    #[test]
    fn two_char_escape() {
        assert_eq!(
            tokens("\x1b=q"),
            vec![Token::Escape("\x1b="), Token::Char('q')]
        );
    }

    #[test]
    fn unterminated_csi_at_end_is_one_run() {
        assert_eq!(
            tokens("ok\x1b[38;5"),
            vec![
                Token::Char('o'),
                Token::Char('k'),
                Token::Malformed("\x1b[38;5"),
            ]
        );
    }

    #[test]
    fn interrupted_csi_keeps_following_text() {
        assert_eq!(
            tokens("\x1b[3\u{e9}x"),
            vec![
                Token::Malformed("\x1b[3"),
                Token::Char('\u{e9}'),
                Token::Char('x'),
            ]
        );
    }

    #[test]
    fn double_escape_splits() {
        assert_eq!(
            tokens("\x1b\x1b[0m"),
            vec![Token::Malformed("\x1b"), Token::Escape("\x1b[0m")]
        );
    }

    #[test]
    fn string_interrupted_by_other_escape() {
        assert_eq!(
            tokens("\x1b]0;t\x1b[1mA"),
            vec![
                Token::Malformed("\x1b]0;t"),
                Token::Escape("\x1b[1m"),
                Token::Char('A'),
            ]
        );
    }

    #[test]
    fn lone_escape_at_end() {
        assert_eq!(tokens("a\x1b"), vec![Token::Char('a'), Token::Malformed("\x1b")]);
    }

    #[test]
    fn reset_detection() {
        assert!(Token::Escape("\x1b[0m").is_reset());
        assert!(Token::Escape("\x1b[m").is_reset());
        assert!(Token::Escape("\x1b[0;00m").is_reset());
        assert!(!Token::Escape("\x1b[31m").is_reset());
        assert!(!Token::Escape("\x1b[0K").is_reset());
        assert!(!Token::Malformed("\x1b[0").is_reset());
        assert!(!Token::Char('m').is_reset());
    }

    #[test]
    fn blank_detection_ignores_escapes() {
        assert!(is_visually_blank(""));
        assert!(is_visually_blank("   \t"));
        assert!(is_visually_blank("\x1b[41m   \x1b[0m"));
        assert!(!is_visually_blank("\x1b[32m$\x1b[0m "));
        assert!(is_visually_blank("  \x1b[4"));
    }
}
