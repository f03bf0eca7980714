//! Command — the typed interface for all muxpeek operations.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    /// Render the thumbnail grid for a session.
    #[serde(rename = "preview")]
    Preview {
        session: String,
        cols: u32,
        lines: u32,
    },

    /// List a session's windows.
    #[serde(rename = "windows")]
    Windows {
        session: String,
        #[serde(default)]
        json: bool,
    },

    /// List running session names, one per line.
    #[serde(rename = "sessions")]
    Sessions,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_serializes_with_tag() {
        let cmd = Command::Preview {
            session: "work".into(),
            cols: 80,
            lines: 24,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"preview\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn windows_json_flag_defaults_off() {
        let cmd: Command =
            serde_json::from_str(r#"{"command":"windows","session":"work"}"#).unwrap();
        assert_eq!(
            cmd,
            Command::Windows {
                session: "work".into(),
                json: false,
            }
        );
    }
}
