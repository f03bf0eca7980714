//! ANSI-aware text handling — tokenizing, width policies, and fitting.
//!
//! The `scanner` module splits captured lines into escape runs and
//! displayable characters. The `width` module decides how many columns a
//! character takes. The `fit` module uses both to cut or pad a line to an
//! exact visible width.

pub mod fit;
pub mod scanner;
pub mod width;

pub use fit::{Fitted, Fitter, RESET};
