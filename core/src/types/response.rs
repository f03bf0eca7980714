use serde::{Deserialize, Serialize};


/// Result of executing a `Command`. `Ok` output goes to stdout verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}
