//! Preview settings — grid constants, ellipsis, width policy, border emphasis.
//!
//! Settings are read from a YAML file. Every field has a default, so an empty
//! or partial file is valid and a missing file means "all defaults".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::text::width::WidthPolicyKind;
use crate::text::Fitter;


#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSettings {
    /// Columns between side-by-side boxes. Default: 2.
    #[serde(default = "default_gap")]
    pub gap: u32,
    /// Narrowest preview that still gets two columns. Default: 60.
    #[serde(default = "default_min_two_column_width")]
    pub min_two_column_width: u32,
    /// Floor for a box's content width. Default: 10.
    #[serde(default = "default_min_inner_width")]
    pub min_inner_width: u32,
    /// Marker written where a line is cut short. Default: `…`.
    #[serde(default = "default_ellipsis")]
    pub ellipsis: char,
    #[serde(default)]
    pub width_policy: WidthPolicyKind,
    #[serde(default = "default_active")]
    pub active: Emphasis,
    #[serde(default = "default_inactive")]
    pub inactive: Emphasis,
}

fn default_gap() -> u32 {
    2
}

fn default_min_two_column_width() -> u32 {
    60
}

fn default_min_inner_width() -> u32 {
    10
}

fn default_ellipsis() -> char {
    '…'
}

fn default_active() -> Emphasis {
    Emphasis {
        color: Some(Color::Named("green".into())),
        bold: true,
        dim: false,
    }
}

fn default_inactive() -> Emphasis {
    Emphasis {
        color: Some(Color::Named("bright-black".into())),
        bold: false,
        dim: false,
    }
}

impl Default for PreviewSettings {
    fn default() -> Self {
        PreviewSettings {
            gap: default_gap(),
            min_two_column_width: default_min_two_column_width(),
            min_inner_width: default_min_inner_width(),
            ellipsis: default_ellipsis(),
            width_policy: WidthPolicyKind::default(),
            active: default_active(),
            inactive: default_inactive(),
        }
    }
}


impl PreviewSettings {
    /// Parse settings from YAML text. Empty text yields defaults.
    pub fn from_yaml(input: &str) -> Result<PreviewSettings, serde_yaml::Error> {
        if input.trim().is_empty() {
            return Ok(PreviewSettings::default());
        }
        serde_yaml::from_str(input)
    }

    /// Load settings from a file. A missing file yields defaults.
    pub fn from_file(path: &Path) -> Result<PreviewSettings, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PreviewSettings::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Self::from_yaml(&content).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// A fitter using the configured width policy and ellipsis.
    pub fn fitter(&self) -> Fitter<WidthPolicyKind> {
        Fitter::new(self.width_policy, self.ellipsis)
    }

    /// Emphasis for a box, by whether its window is the active one.
    pub fn emphasis(&self, is_active: bool) -> &Emphasis {
        if is_active {
            &self.active
        } else {
            &self.inactive
        }
    }
}


// ---------------------------------------------------------------------------
// Emphasis
// ---------------------------------------------------------------------------

/// A terminal color: a name from the 16-color palette or a 256-color index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Indexed(u8),
    Named(String),
}


impl Color {
    /// SGR parameter for this color used as a foreground.
    /// Unknown names produce `None` so a typo degrades to "no color".
    fn sgr_param(&self) -> Option<String> {
        match self {
            Color::Indexed(n) => Some(format!("38;5;{}", n)),
            Color::Named(name) => {
                let code = match name.to_ascii_lowercase().replace('_', "-").as_str() {
                    "black" => 30,
                    "red" => 31,
                    "green" => 32,
                    "yellow" => 33,
                    "blue" => 34,
                    "magenta" => 35,
                    "cyan" => 36,
                    "white" => 37,
                    "bright-black" | "gray" | "grey" => 90,
                    "bright-red" => 91,
                    "bright-green" => 92,
                    "bright-yellow" => 93,
                    "bright-blue" => 94,
                    "bright-magenta" => 95,
                    "bright-cyan" => 96,
                    "bright-white" => 97,
                    _ => return None,
                };
                Some(code.to_string())
            }
        }
    }
}


/// Border styling for one class of box (active or inactive).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Emphasis {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub dim: bool,
}


impl Emphasis {
    /// The SGR escape that switches this emphasis on, or an empty string when
    /// the emphasis is plain.
    pub fn sgr(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if self.bold {
            params.push("1".into());
        }
        if self.dim {
            params.push("2".into());
        }
        if let Some(p) = self.color.as_ref().and_then(Color::sgr_param) {
            params.push(p);
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", params.join(";"))
        }
    }
}
