use coursegen::adapters::{
    BrowserNavigator, FileResultStore, PrintNavigator, ReqwestHttpClient, TerminalStatus,
};
use coursegen::cli::{
    apply_options, handle_help_command, handle_version_command, parse_args, read_topic, show_last,
    CliCommand, CliOptions,
};
use coursegen::client::CourseClient;
use coursegen::config::ClientConfig;
use coursegen::flow::{CourseFlow, FlowOutcome};
use coursegen::logging::init_logging;
use coursegen::traits::Navigator;

use color_eyre::Result;
use std::io;

/// Exit status for bad usage.
const EXIT_USAGE: i32 = 2;
/// Exit status for a submission that did not produce a course.
const EXIT_FAILURE: i32 = 1;

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("coursegen: {}", e);
            eprintln!("Try 'coursegen --help' for more information.");
            std::process::exit(EXIT_USAGE);
        }
    };

    // Handle --version and --help before any initialization
    let options = match command {
        CliCommand::Version => {
            handle_version_command();
            return Ok(());
        }
        CliCommand::Help => {
            handle_help_command();
            return Ok(());
        }
        CliCommand::ShowLast(options) => {
            color_eyre::install()?;
            return run_show_last(&options);
        }
        CliCommand::Create(options) => options,
    };

    color_eyre::install()?;
    run_create(options)
}

fn load_config(options: &CliOptions) -> ClientConfig {
    init_logging(options.verbose);
    let config = apply_options(ClientConfig::from_env(), options);
    tracing::debug!(?config, "Resolved configuration");
    config
}

fn open_store(config: &ClientConfig) -> Result<FileResultStore> {
    let store = match &config.storage_dir {
        Some(dir) => FileResultStore::new(dir),
        None => FileResultStore::in_data_dir()?,
    };
    tracing::debug!(dir = %store.dir().display(), "Using result store");
    Ok(store)
}

fn run_show_last(options: &CliOptions) -> Result<()> {
    let config = load_config(options);
    let store = open_store(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let found = runtime.block_on(show_last(&store, &config.result_key, &mut io::stdout()))?;
    if !found {
        eprintln!("No course has been built yet.");
        std::process::exit(EXIT_FAILURE);
    }
    Ok(())
}

fn run_create(options: CliOptions) -> Result<()> {
    let config = load_config(&options);

    let topic = match options.topic {
        Some(topic) => topic,
        None => read_topic(io::stdin().lock())?,
    };

    let store = open_store(&config)?;
    let navigator: Box<dyn Navigator> = if config.open_browser {
        Box::new(BrowserNavigator)
    } else {
        Box::new(PrintNavigator)
    };
    let client = CourseClient::from_config(&config, ReqwestHttpClient::new());
    let mut flow = CourseFlow::new(client, TerminalStatus::stdout(), store, navigator)
        .with_config(&config);

    // One submission, driven to completion on this thread
    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(flow.submit(&topic));

    match outcome {
        FlowOutcome::Completed { .. } => Ok(()),
        FlowOutcome::Skipped => {
            eprintln!("coursegen: no topic given");
            eprintln!("Try 'coursegen --help' for more information.");
            std::process::exit(EXIT_USAGE);
        }
        FlowOutcome::Failed { .. } | FlowOutcome::Aborted { .. } => {
            std::process::exit(EXIT_FAILURE);
        }
    }
}
