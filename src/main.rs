// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, OutputFormat};
use crate::engine::{AnalysisRequest, BiasEngine};
use crate::scoring::EngineWeights;

mod app_config;
mod engine;
mod errors;
mod lexicon;
mod scoring;
mod segmenter;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a text file for directional bias (default command)
    #[command(alias = "score")]
    Analyze(AnalyzeArgs),

    /// Generate shell completions for biaslens
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Input text file to analyze ('-' reads from stdin)
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Article title, scored as the headline
    #[arg(short, long)]
    title: Option<String>,

    /// Source URL, recorded in the report but never scored
    #[arg(short, long)]
    url: Option<String>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// biaslens - Integrated news bias analysis
///
/// Scores a piece of text on the -1.000 (left) to +1.000 (right) scale by
/// combining four scoring methodologies into one weighted composite.
#[derive(Parser, Debug)]
#[command(name = "biaslens")]
#[command(version = "1.0.0")]
#[command(about = "News bias analysis engine")]
#[command(long_about = "biaslens scores text for directional bias using four integrated \
methodologies: position/attribution weighting (40%), partisan phrase frequency (35%), \
multi-dimensional indicators (20%) and sentiment (5%).

EXAMPLES:
    biaslens article.txt                        # Analyze a text file
    biaslens -t \"The headline\" article.txt      # Score the title as the headline
    biaslens -p article.txt                     # Pretty-print the JSON report
    biaslens - < article.txt                    # Read the article from stdin
    biaslens --log-level debug article.txt      # Verbose scoring diagnostics
    biaslens completions bash > biaslens.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file to analyze ('-' reads from stdin)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Article title, scored as the headline
    #[arg(short, long)]
    title: Option<String>,

    /// Source URL, recorded in the report but never scored
    #[arg(short, long)]
    url: Option<String>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,

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

    // @returns: Marker for log level
    fn get_marker_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
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
            let marker = Self::get_marker_for_level(record.level());

            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, marker, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "biaslens", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Analyze(args)) => run_analyze(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let analyze_args = AnalyzeArgs {
                input_path,
                title: cli.title,
                url: cli.url,
                pretty: cli.pretty,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_analyze(analyze_args)
        }
    }
}

fn run_analyze(options: AnalyzeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // Override config with CLI options if provided
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    if options.pretty {
        config.output = OutputFormat::Pretty;
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(config.log_level));
    }

    // Read the article content
    let content = read_content(&options.input_path)?;
    debug!("Read {} bytes of content", content.len());

    if content.trim().is_empty() {
        warn!("Input is empty; the report will be neutral");
    }

    // Build the engine from the validated configuration
    let engine = BiasEngine::with_parts(
        crate::lexicon::PhraseLexicon::builtin().clone(),
        EngineWeights::default(),
        config.engine.lead_sentences,
    )
    .map_err(|e| anyhow!("Failed to build analysis engine: {}", e))?;

    let mut request = AnalysisRequest::new(content);
    if let Some(title) = options.title {
        request = request.with_title(title);
    }
    if let Some(url) = options.url {
        request = request.with_url(url);
    }

    let report = engine
        .analyze(&request)
        .map_err(|e| anyhow!("Analysis failed: {}", e))?;

    info!(
        "Bias score {:+.3} ({})",
        report.bias_score, report.bias_label
    );

    let json = match config.output {
        OutputFormat::Pretty => serde_json::to_string_pretty(&report)
            .context("Failed to serialize report to JSON")?,
        OutputFormat::Json => {
            serde_json::to_string(&report).context("Failed to serialize report to JSON")?
        }
    };
    println!("{}", json);

    Ok(())
}

/// Read article content from a file, or from stdin when the path is '-'
fn read_content(input_path: &Path) -> Result<String> {
    if input_path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read content from stdin")?;
        return Ok(content);
    }

    if !input_path.exists() {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input file: {}", input_path.display()))
}
