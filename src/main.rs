//! Trie Toolkit - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs the demonstration
//! script or one of the ad-hoc trie commands.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use trie_toolkit_lib::config::{ConfigLoader, ConfigResult, LogConfig, ToolkitConfig, ENV_PREFIX};
use trie_toolkit_lib::data_structures::{
    find_longest_common_word, try_find_longest_common_word, CharTrie, SuffixCounter,
};
use trie_toolkit_lib::demo::run_demo;
use trie_toolkit_lib::error::{
    ErrorContext, ErrorReporter, ToolkitError, ToolkitResult, TracingErrorReporter,
};

/// Command line arguments for the Trie Toolkit.
#[derive(Parser, Debug)]
#[clap(name = "Trie Toolkit", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the configured demonstration script
    Demo,

    /// Count the given words that end with a pattern
    Suffix {
        /// Suffix to match
        #[clap(short, long)]
        pattern: String,

        /// Words to insert
        words: Vec<String>,
    },

    /// Check whether any of the given words starts with a prefix
    Prefix {
        /// Prefix to look for
        #[clap(short, long)]
        prefix: String,

        /// Words to insert
        words: Vec<String>,
    },

    /// Find the longest common prefix of a batch of strings
    Lcp {
        /// Batch given as a JSON value instead of positional strings
        #[clap(long, conflicts_with = "strings")]
        json: Option<String>,

        /// Strings to compare
        strings: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> ToolkitResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_thread_names(true),
            )
            .try_init()
    };

    result.map_err(|e| ToolkitError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Writes the default configuration as TOML.
fn gen_config(output: &Path) -> ToolkitResult<()> {
    info!("Generating default configuration");
    let toml = ToolkitConfig::default().to_toml()?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Executes `command`, pulling in the loaded configuration where it is needed.
fn run(command: Command, loaded: ConfigResult<ToolkitConfig>) -> ToolkitResult<()> {
    match command {
        Command::GenConfig { output } => gen_config(&output)?,
        Command::Validate => {
            loaded?;
            info!("Configuration validated successfully");
        }
        Command::Demo => {
            let config = loaded?;
            info!("Running demonstration script");
            let report = run_demo(&config.demo, config.suffix.strategy);
            print!("{report}");
        }
        Command::Suffix { pattern, words } => {
            let mut counter = SuffixCounter::with_strategy(loaded?.suffix.strategy);
            counter.extend(words.iter().enumerate().map(|(i, w)| (w, i)));
            println!("{}", counter.count_words_with_suffix(&pattern));
        }
        Command::Prefix { prefix, words } => {
            let trie: CharTrie<usize> = words.iter().enumerate().map(|(i, w)| (w, i)).collect();
            println!("{}", trie.has_prefix(&prefix));
        }
        Command::Lcp { json, strings } => {
            let prefix = match json {
                Some(json) => {
                    let value: Value = serde_json::from_str(&json)?;
                    try_find_longest_common_word(&value)?
                }
                None => find_longest_common_word(&strings),
            };
            println!("{prefix}");
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Logging settings come from the config, so load it before the subscriber exists
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }

    let command = args.command.unwrap_or(Command::Demo);
    let component = format!("{command:?}");
    let span = tracing::info_span!("command", name = %component);

    if let Err(error) = span.in_scope(|| run(command, loaded)) {
        let context = span.in_scope(|| ErrorContext::new(error, component).with_span_trace());
        TracingErrorReporter.report(context);
        process::exit(1);
    }
}
