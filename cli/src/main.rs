//! muxpeek CLI — session thumbnails for fuzzy-finder preview panes.
//!
//! Typical fzf wiring:
//!
//!     muxpeek sessions | fzf --preview 'muxpeek preview {}'
//!
//! fzf exports the preview pane size as `FZF_PREVIEW_COLUMNS` and
//! `FZF_PREVIEW_LINES`; both are picked up automatically.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use muxpeek_core::command::Command;
use muxpeek_core::sys::Sys;
use muxpeek_core::types::config::PreviewSettings;
use muxpeek_core::types::response::Response;


#[derive(Parser, Debug)]
#[command(name = "muxpeek", version, about = "tmux session thumbnails for fzf preview panes")]
struct Cli {
    /// Settings file (YAML). Defaults to <config dir>/muxpeek/preview.yaml
    #[arg(long, env = "MUXPEEK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log filter for stderr output; RUST_LOG takes precedence
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Subcmd,
}


#[derive(Subcommand, Debug)]
enum Subcmd {
    /// Render the window grid of a session
    Preview {
        session: String,

        /// Preview width in columns [default: 80]
        #[arg(long, env = "FZF_PREVIEW_COLUMNS")]
        width: Option<String>,

        /// Preview height in lines [default: 24]
        #[arg(long, env = "FZF_PREVIEW_LINES")]
        height: Option<String>,
    },

    /// List the windows of a session
    Windows {
        session: String,

        /// Print a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// List running session names, one per line
    Sessions,
}


const DEFAULT_WIDTH: u32 = 80;
const DEFAULT_HEIGHT: u32 = 24;


/// Parse a preview dimension. Unset, empty or garbled values fall back to
/// `default`; a bad size must never replace the preview with a usage error.
fn dimension(raw: Option<&str>, default: u32) -> u32 {
    match raw.map(str::trim) {
        None | Some("") => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(value, default, "ignoring unparsable preview size");
            default
        }),
    }
}


impl From<Subcmd> for Command {
    fn from(cmd: Subcmd) -> Command {
        match cmd {
            Subcmd::Preview {
                session,
                width,
                height,
            } => Command::Preview {
                session,
                cols: dimension(width.as_deref(), DEFAULT_WIDTH),
                lines: dimension(height.as_deref(), DEFAULT_HEIGHT),
            },
            Subcmd::Windows { session, json } => Command::Windows { session, json },
            Subcmd::Sessions => Command::Sessions,
        }
    }
}


fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let settings = load_settings(cli.config.clone());
    let sys = Sys::new(settings);

    match sys.execute(cli.command.into()) {
        Response::Ok { output } => {
            if !output.is_empty() {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", output)?;
            }
            Ok(())
        }
        Response::Error { message } => bail!(message),
    }
}


/// Log to stderr so stdout stays clean for the preview pane.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}


fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| dirs::config_dir().map(|dir| dir.join("muxpeek").join("preview.yaml")))
}


/// Load settings, falling back to defaults on any problem.
fn load_settings(explicit: Option<PathBuf>) -> PreviewSettings {
    let Some(path) = resolve_config_path(explicit) else {
        debug!("no config directory; using default settings");
        return PreviewSettings::default();
    };
    match PreviewSettings::from_file(&path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "ignoring settings file");
            PreviewSettings::default()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn preview_args_map_to_command() {
        let cli = Cli::try_parse_from([
            "muxpeek", "preview", "work", "--width", "100", "--height", "30",
        ])
        .unwrap();
        assert_eq!(
            Command::from(cli.command),
            Command::Preview {
                session: "work".into(),
                cols: 100,
                lines: 30,
            }
        );
    }

    #[test]
    fn garbled_size_falls_back_to_defaults() {
        let cli = Cli::try_parse_from([
            "muxpeek", "preview", "work", "--width", "wide", "--height", "",
        ])
        .unwrap();
        assert_eq!(
            Command::from(cli.command),
            Command::Preview {
                session: "work".into(),
                cols: 80,
                lines: 24,
            }
        );
    }

    #[test]
    fn dimension_parsing() {
        assert_eq!(dimension(None, 80), 80);
        assert_eq!(dimension(Some(""), 80), 80);
        assert_eq!(dimension(Some(" 120 "), 80), 120);
        assert_eq!(dimension(Some("-3"), 24), 24);
        assert_eq!(dimension(Some("12.5"), 24), 24);
    }

    #[test]
    fn windows_json_flag() {
        let cli = Cli::try_parse_from(["muxpeek", "windows", "work", "--json"]).unwrap();
        assert_eq!(
            Command::from(cli.command),
            Command::Windows {
                session: "work".into(),
                json: true,
            }
        );
    }

    #[test]
    fn explicit_config_path_wins() {
        let path = PathBuf::from("/tmp/custom.yaml");
        assert_eq!(resolve_config_path(Some(path.clone())), Some(path));
    }

    #[test]
    fn bad_settings_fall_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("muxpeek-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preview.yaml");
        std::fs::write(&path, "gap: [unterminated").unwrap();
        assert_eq!(load_settings(Some(path)), PreviewSettings::default());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
