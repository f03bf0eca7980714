use crate::command::Command;
use crate::infrastructure::tmux::{CommandRunner, TmuxRunner};
use crate::layout::enumerate;
use crate::preview::{render_preview, PreviewSize};
use crate::types::config::PreviewSettings;
use crate::types::response::Response;


/// Central runtime for muxpeek. Dispatches commands against a multiplexer.
pub struct Sys {
    runner: Box<dyn CommandRunner>,
    settings: PreviewSettings,
}


impl Sys {
    /// A runtime talking to the real `tmux` binary.
    pub fn new(settings: PreviewSettings) -> Sys {
        Sys::with_runner(Box::new(TmuxRunner::new()), settings)
    }

    pub fn with_runner(runner: Box<dyn CommandRunner>, settings: PreviewSettings) -> Sys {
        Sys { runner, settings }
    }

    /// The single dispatch method.
    pub fn execute(&self, cmd: Command) -> Response {
        match cmd {
            Command::Preview { session, cols, lines } => self.cmd_preview(session, cols, lines),
            Command::Windows { session, json } => self.cmd_windows(session, json),
            Command::Sessions => self.cmd_sessions(),
        }
    }

    fn cmd_preview(&self, session: String, cols: u32, lines: u32) -> Response {
        let size = PreviewSize { cols, lines };
        Response::Ok {
            output: render_preview(&*self.runner, &session, size, &self.settings),
        }
    }

    fn cmd_windows(&self, session: String, json: bool) -> Response {
        let windows = enumerate::list_windows(&*self.runner, &session);
        if json {
            return match serde_json::to_string(&windows) {
                Ok(output) => Response::Ok { output },
                Err(e) => Response::Error {
                    message: format!("failed to encode windows: {}", e),
                },
            };
        }
        let output = windows
            .iter()
            .map(|w| {
                format!(
                    "{}\t{}\t{}\t{}",
                    w.index,
                    w.name,
                    if w.is_active { "active" } else { "-" },
                    w.pane_count
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        Response::Ok { output }
    }

    fn cmd_sessions(&self) -> Response {
        Response::Ok {
            output: enumerate::list_sessions(&*self.runner).join("\n"),
        }
    }
}
