//! CLI module for coursegen.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - Turning parsed options into a [`ClientConfig`]
//!
//! # Usage
//!
//! ```ignore
//! use coursegen::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     Ok(CliCommand::Create(options)) => { /* run a submission */ }
//!     Ok(other) => { /* version, help or --last */ }
//!     Err(e) => {
//!         eprintln!("coursegen: {}", e);
//!         std::process::exit(2);
//!     }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOptions};
pub use version::{handle_version_command, VERSION};

use std::io::{self, BufRead, Write};

use crate::config::ClientConfig;
use crate::error::CourseResult;
use crate::stream::{TrailingLinePolicy, UnknownEventPolicy};
use crate::traits::ResultStore;

/// Usage text for `--help`.
pub const USAGE: &str = "\
Build a course on a topic and follow its progress.

Usage: coursegen [OPTIONS] [TOPIC]...
       coursegen --last

If no topic is given, one line is read from standard input.

Options:
      --url <URL>            Backend base URL [env: COURSEGEN_URL]
      --no-browser           Print the results page instead of opening it
      --keep-trailing-line   Process a final line that has no newline
      --strict-events        Fail on unrecognized event types
      --last                 Print the most recently stored course
  -v, --verbose              Debug logging (RUST_LOG overrides)
  -h, --help                 Print help
  -V, --version              Print version";

/// Print usage to stdout.
pub fn handle_help_command() {
    println!("{}", USAGE);
}

/// Layer command-line options over `config`.
pub fn apply_options(mut config: ClientConfig, options: &CliOptions) -> ClientConfig {
    if let Some(url) = &options.url {
        config = config.with_base_url(url.as_str());
    }
    if options.no_browser {
        config = config.with_open_browser(false);
    }
    if options.keep_trailing_line {
        config = config.with_trailing_line(TrailingLinePolicy::Emit);
    }
    if options.strict_events {
        config = config.with_unknown_events(UnknownEventPolicy::Fail);
    }
    config
}

/// Read the topic as one line from `input`.
pub fn read_topic<R: BufRead>(mut input: R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Write the stored course to `out`.
///
/// Returns `false` when nothing has been stored under `key` yet.
pub async fn show_last<S, W>(store: &S, key: &str, out: &mut W) -> CourseResult<bool>
where
    S: ResultStore,
    W: Write,
{
    match store.load(key).await? {
        Some(course) => {
            writeln!(out, "{}", course).map_err(crate::error::StorageError::from)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
