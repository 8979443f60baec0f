#![forbid(unsafe_code)]

//! Command-line front end for `liang-hyphen`: hyphenate words against a
//! dictionary file, or check a dictionary against expected hyphenations.

pub mod check;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod hyphenate;
pub mod logging;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{CliError, Result};
