//! # namecols
//!
//! Shows the naming pattern shared by a set of filenames. Filenames come from
//! a directory listing or from stdin; each is split into tokens at delimiter
//! characters and the Nth token of every name lands in column N:
//!
//! ```text
//! $ namecols -d '_.' reports/
//! report    v1      
//! summary _ v2 . txt
//! ```
//!
//! The heavy lifting lives in `namecols-engine` (tokenizing, accumulation,
//! rendering) and `namecols-input` (collecting filenames). This crate wires
//! them to the command line:
//!
//! - [`cli`]: argument parsing
//! - [`config`]: resolving arguments, locale and terminal into a [`Config`](config::Config)
//! - [`logging`]: tracing setup
//! - [`output`]: text and JSON output
//! - [`run`]: the end-to-end pipeline

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod run;

pub use cli::Cli;
pub use config::Config;
pub use output::OutputMode;
pub use run::{run, RunError, RunSummary};
