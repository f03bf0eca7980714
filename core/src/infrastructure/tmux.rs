//! tmux command construction, execution, and output parsing.
//!
//! All queries go through the `CommandRunner` seam so the pipeline can be
//! exercised against canned output. `TmuxRunner` is the real implementation
//! and shells out to the `tmux` binary synchronously.

use std::process::Command;

use tracing::debug;

use crate::types::window::Window;

/// `list-windows` format: index, name, active flag, pane count.
pub const WINDOW_FORMAT: &str =
    "#{window_index}\t#{window_name}\t#{window_active}\t#{window_panes}";


#[derive(Debug, thiserror::Error)]
pub enum MuxError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} {command} exited with status {status}: {stderr}")]
    Failed {
        program: String,
        command: String,
        status: String,
        stderr: String,
    },
}


/// Runs one multiplexer command and returns its stdout.
pub trait CommandRunner {
    fn run(&self, args: &[String]) -> Result<String, MuxError>;
}


/// Runs commands against the real `tmux` binary.
#[derive(Debug, Clone)]
pub struct TmuxRunner {
    program: String,
}


impl TmuxRunner {
    pub fn new() -> Self {
        TmuxRunner {
            program: "tmux".into(),
        }
    }

    /// Use a different binary (e.g. an absolute path to tmux).
    pub fn with_program(program: impl Into<String>) -> Self {
        TmuxRunner {
            program: program.into(),
        }
    }
}


impl Default for TmuxRunner {
    fn default() -> Self {
        Self::new()
    }
}


impl CommandRunner for TmuxRunner {
    fn run(&self, args: &[String]) -> Result<String, MuxError> {
        debug!(program = %self.program, ?args, "running multiplexer command");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| MuxError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(MuxError::Failed {
                program: self.program.clone(),
                command: args.first().cloned().unwrap_or_default(),
                status: output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".into()),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}


// ---------------------------------------------------------------------------
// Command builder
// ---------------------------------------------------------------------------

/// Builds argument vectors for the tmux queries the preview needs.
///
/// Session names are always targeted with the `=` exact-match prefix so that
/// `work` never resolves to `workshop`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TmuxCommandBuilder;


impl TmuxCommandBuilder {
    pub fn new() -> Self {
        TmuxCommandBuilder
    }

    pub fn list_sessions(&self) -> Vec<String> {
        vec!["list-sessions".into(), "-F".into(), "#{session_name}".into()]
    }

    pub fn list_windows(&self, session: &str) -> Vec<String> {
        vec![
            "list-windows".into(),
            "-t".into(),
            session_target(session),
            "-F".into(),
            WINDOW_FORMAT.into(),
        ]
    }

    pub fn session_attached(&self, session: &str) -> Vec<String> {
        vec![
            "display-message".into(),
            "-p".into(),
            "-t".into(),
            session_target(session),
            "#{session_attached}".into(),
        ]
    }

    /// Capture the visible contents of a window's active pane, escapes kept.
    pub fn capture_pane(&self, session: &str, window_index: u32) -> Vec<String> {
        vec![
            "capture-pane".into(),
            "-e".into(),
            "-p".into(),
            "-t".into(),
            format!("{}:{}", session_target(session), window_index),
        ]
    }
}


fn session_target(session: &str) -> String {
    format!("={}", session)
}


// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

/// Parse `list-sessions -F '#{session_name}'` output.
pub fn parse_list_sessions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}


/// Parse `list-windows -F WINDOW_FORMAT` output. Malformed lines are skipped.
pub fn parse_list_windows(raw: &str) -> Vec<Window> {
    raw.lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|line| {
            let window = parse_window_line(line);
            if window.is_none() {
                debug!(line, "skipping malformed list-windows line");
            }
            window
        })
        .collect()
}


/// Parse one `index<TAB>name<TAB>active<TAB>panes` line.
/// The name may itself contain tabs, so the numeric fields are taken from
/// both ends.
fn parse_window_line(line: &str) -> Option<Window> {
    let (index, rest) = line.split_once('\t')?;
    let mut tail = rest.rsplitn(3, '\t');
    let pane_count = tail.next()?.trim().parse().ok()?;
    let active = tail.next()?.trim();
    let name = tail.next()?;
    Some(Window {
        index: index.trim().parse().ok()?,
        name: name.to_string(),
        is_active: active == "1",
        pane_count,
    })
}


/// Parse `#{session_attached}`. Anything unparseable counts as detached.
pub fn parse_attached(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
