//! Command-line argument parsing for coursegen.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::fmt;

/// Options shared by the commands that talk to the backend or the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// Backend base URL override (`--url`)
    pub url: Option<String>,
    /// Print the results page instead of opening a browser
    pub no_browser: bool,
    /// Keep an unterminated final line
    pub keep_trailing_line: bool,
    /// Abort on unrecognized event types
    pub strict_events: bool,
    /// Debug logging
    pub verbose: bool,
    /// Topic words joined with spaces; `None` reads the topic from stdin
    pub topic: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the most recently stored course
    ShowLast(CliOptions),
    /// Build a course (default)
    Create(CliOptions),
}

/// Errors from argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Flag this program does not know
    UnknownFlag(String),
    /// Flag that requires a value was last
    MissingValue(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownFlag(flag) => write!(f, "unknown option '{}'", flag),
            ArgsError::MissingValue(flag) => write!(f, "option '{}' requires a value", flag),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win wherever they appear. Everything that is not
/// a flag is part of the topic; `--` ends flag parsing.
///
/// # Examples
///
/// ```
/// use coursegen::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["coursegen".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut words: Vec<String> = Vec::new();
    let mut show_last = false;
    let mut flags_done = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        if flags_done || !arg.starts_with('-') || arg == "-" {
            words.push(arg);
            continue;
        }

        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--" => flags_done = true,
            "--url" => match args.next() {
                Some(url) => options.url = Some(url),
                None => return Err(ArgsError::MissingValue(arg)),
            },
            "--no-browser" => options.no_browser = true,
            "--keep-trailing-line" => options.keep_trailing_line = true,
            "--strict-events" => options.strict_events = true,
            "--verbose" | "-v" => options.verbose = true,
            "--last" => show_last = true,
            _ => match arg.strip_prefix("--url=") {
                Some(url) => options.url = Some(url.to_string()),
                None => return Err(ArgsError::UnknownFlag(arg)),
            },
        }
    }

    if !words.is_empty() {
        options.topic = Some(words.join(" "));
    }

    if show_last {
        Ok(CliCommand::ShowLast(options))
    } else {
        Ok(CliCommand::Create(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let args: Vec<String> = std::iter::once("coursegen")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    fn create(args: &[&str]) -> CliOptions {
        match parse(args) {
            Ok(CliCommand::Create(options)) => options,
            other => panic!("Expected Create, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["Rust", "-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["--no-browser", "--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Create(CliOptions::default())));
    }

    #[test]
    fn test_topic_words_are_joined() {
        let options = create(&["Introduction", "to", "category", "theory"]);
        assert_eq!(options.topic.as_deref(), Some("Introduction to category theory"));
    }

    #[test]
    fn test_flags_mixed_with_topic() {
        let options = create(&[
            "--url",
            "http://backend:9000",
            "Baroque",
            "--no-browser",
            "music",
            "--keep-trailing-line",
            "--strict-events",
            "-v",
        ]);
        assert_eq!(options.url.as_deref(), Some("http://backend:9000"));
        assert_eq!(options.topic.as_deref(), Some("Baroque music"));
        assert!(options.no_browser);
        assert!(options.keep_trailing_line);
        assert!(options.strict_events);
        assert!(options.verbose);
    }

    #[test]
    fn test_url_equals_form() {
        let options = create(&["--url=http://x:1", "Go"]);
        assert_eq!(options.url.as_deref(), Some("http://x:1"));
    }

    #[test]
    fn test_double_dash_ends_flags() {
        let options = create(&["--", "--not-a-flag", "topic"]);
        assert_eq!(options.topic.as_deref(), Some("--not-a-flag topic"));
    }

    #[test]
    fn test_parse_last() {
        match parse(&["--last", "--no-browser"]) {
            Ok(CliCommand::ShowLast(options)) => assert!(options.no_browser),
            other => panic!("Expected ShowLast, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(ArgsError::UnknownFlag("--unknown".to_string()))
        );
    }

    #[test]
    fn test_url_missing_value() {
        let err = parse(&["Rust", "--url"]).unwrap_err();
        assert_eq!(err, ArgsError::MissingValue("--url".to_string()));
        assert_eq!(err.to_string(), "option '--url' requires a value");
    }
}
