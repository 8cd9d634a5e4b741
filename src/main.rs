// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use docsum::app_config::{Config, LogLevel};
use docsum::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a document or every document in a directory (default command)
    Summarize(SummarizeArgs),

    /// Print the extracted text of a document as JSON
    Extract(ExtractArgs),

    /// Generate shell completions for docsum
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Input document or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Overwrite existing summary files when processing a directory
    #[arg(short, long)]
    force_overwrite: bool,

    /// Print the full summary envelope as JSON
    #[arg(short, long)]
    json: bool,

    /// Maximum words per summary
    #[arg(short, long)]
    max_words: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Input document
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// docsum - short extractive summaries of study documents
///
/// Extracts the text of PDF and plain-text documents and keeps the
/// sentences with the densest keywords, within a fixed word budget.
#[derive(Parser, Debug)]
#[command(name = "docsum")]
#[command(version)]
#[command(about = "Extractive document summarizer")]
#[command(long_about = "docsum extracts document text and builds a short extractive summary.

EXAMPLES:
    docsum notes.pdf                      # Summarize a single document
    docsum summarize --json notes.txt     # Print the summary envelope as JSON
    docsum summarize -m 50 notes.txt      # Allow up to 50 words
    docsum summarize -f ~/courses/        # Summarize a folder, overwriting sidecars
    docsum extract slides.pdf             # Print extracted text as JSON
    docsum completions bash > docsum.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

OUTPUT:
    A single document prints its summary to stdout. A directory writes one
    <document>.summary.json file next to each supported document.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input document or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Overwrite existing summary files when processing a directory
    #[arg(short, long)]
    force_overwrite: bool,

    /// Print the full summary envelope as JSON
    #[arg(short, long)]
    json: bool,

    /// Maximum words per summary
    #[arg(short, long)]
    max_words: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set through
    // log::set_max_level once the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "docsum", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        Some(Commands::Extract(args)) => run_extract(args),
        None => {
            // Default behavior - use top-level args
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let summarize_args = SummarizeArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                json: cli.json,
                max_words: cli.max_words,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_summarize(summarize_args).await
        }
    }
}

/// Load the configuration and apply the effective log level
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    // Apply the command line level first so config loading is logged at it
    if let Some(cmd_log_level) = &log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(config_path)?;

    if let Some(cmd_log_level) = log_level {
        config.log_level = cmd_log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

async fn run_summarize(options: SummarizeArgs) -> Result<()> {
    let mut config = load_config(&options.config_path, options.log_level)?;

    if let Some(max_words) = options.max_words {
        config.summary.max_words = max_words;
    }

    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        let summary = controller.run(options.input_path.clone()).await?;
        if options.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", summary.summary_text);
        }
    } else if options.input_path.is_dir() {
        let report = controller
            .run_folder(options.input_path.clone(), options.force_overwrite)
            .await?;
        info!(
            "Summaries written: {}, skipped: {}, failed: {}",
            report.processed, report.skipped, report.failed
        );
        if report.failed > 0 {
            return Err(anyhow!("{} document(s) could not be summarized", report.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

fn run_extract(options: ExtractArgs) -> Result<()> {
    let config = load_config(&options.config_path, options.log_level)?;
    let controller = Controller::with_config(config)?;

    if !options.input_path.is_file() {
        return Err(anyhow!("Input file does not exist: {:?}", options.input_path));
    }

    let response = controller.extract_document(&options.input_path);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
