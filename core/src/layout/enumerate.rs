//! Window enumeration — the windows of one session, in tmux index order.

use tracing::debug;

use crate::infrastructure::tmux::{
    parse_attached, parse_list_sessions, parse_list_windows, CommandRunner, TmuxCommandBuilder,
};
use crate::types::window::{SessionSnapshot, Window};


/// List a session's windows. A session that does not exist has no windows.
pub fn list_windows(runner: &dyn CommandRunner, session: &str) -> Vec<Window> {
    let args = TmuxCommandBuilder::new().list_windows(session);
    match runner.run(&args) {
        Ok(raw) => parse_list_windows(&raw),
        Err(e) => {
            debug!(session, error = %e, "list-windows failed; treating session as absent");
            Vec::new()
        }
    }
}


/// Number of clients attached to a session; zero when the query fails.
pub fn attached_clients(runner: &dyn CommandRunner, session: &str) -> u32 {
    let args = TmuxCommandBuilder::new().session_attached(session);
    match runner.run(&args) {
        Ok(raw) => parse_attached(&raw),
        Err(e) => {
            debug!(session, error = %e, "session_attached query failed");
            0
        }
    }
}


/// Snapshot a session, or `None` if it has no windows (it does not exist yet).
pub fn snapshot(runner: &dyn CommandRunner, session: &str) -> Option<SessionSnapshot> {
    let windows = list_windows(runner, session);
    if windows.is_empty() {
        return None;
    }
    Some(SessionSnapshot {
        name: session.to_string(),
        attached_clients: attached_clients(runner, session),
        windows,
    })
}


/// Names of all running sessions. No server means no sessions.
pub fn list_sessions(runner: &dyn CommandRunner) -> Vec<String> {
    match runner.run(&TmuxCommandBuilder::new().list_sessions()) {
        Ok(raw) => parse_list_sessions(&raw),
        Err(e) => {
            debug!(error = %e, "list-sessions failed");
            Vec::new()
        }
    }
}
