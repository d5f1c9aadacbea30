// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use lapchapters::app_config::{self, Config};
use lapchapters::file_utils::FileManager;
use lapchapters::lap_sheet::LapSheet;
use lapchapters::render;
use lapchapters::timeline::TimelineBuilder;
use lapchapters::validation;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
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
    /// Generate the chapter-description text block (default command)
    Description(GenerateArgs),

    /// Generate the SRT subtitle track file
    Subtitles(GenerateArgs),

    /// Generate shell completions for lapchapters
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Lap sheet file (JSON) with the raw offset and lap entries per session
    #[arg(value_name = "SHEET")]
    sheet: PathBuf,

    /// Tab identifier selecting which session group to process
    #[arg(short, long)]
    tab: Option<String>,

    /// Directory the subtitle file is written to (defaults to the sheet's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// lapchapters - lap times to video chapters and subtitles
///
/// Converts human-entered lap times from racing sessions into a
/// chapter-description text block and an SRT subtitle track, both anchored
/// to cumulative timestamps.
#[derive(Parser, Debug)]
#[command(name = "lapchapters")]
#[command(version = "1.0.0")]
#[command(about = "Turn racing lap times into video chapters and subtitles")]
#[command(long_about = "lapchapters chains loosely formatted lap times into an absolute timeline
across named sessions and renders it as a chapter description and an SRT file.

EXAMPLES:
    lapchapters weekend.json                     # Chapter description for the default tab
    lapchapters description -t race weekend.json # Explicit subcommand and tab
    lapchapters subtitles -t race weekend.json   # Write subtitles_race_<timestamp>.srt
    lapchapters subtitles -o out/ weekend.json   # Write the .srt into out/
    lapchapters completions bash                 # Generate bash completions

LAP SHEET:
    A JSON document mapping session names to raw entries:
        { \"sessions\": { \"Race\": { \"offset\": \"40\", \"laps\": [\"1:32.500\", \"1:29.800\"] } } }
    A session may carry \"laps_csv\": a CSV file whose \"Lap Time\" column is
    appended to its laps.

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lap sheet file (JSON) with the raw offset and lap entries per session
    #[arg(value_name = "SHEET")]
    sheet: Option<PathBuf>,

    /// Tab identifier selecting which session group to process
    #[arg(short, long)]
    tab: Option<String>,

    /// Directory the subtitle file is written to (defaults to the sheet's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Which of the two projections a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputKind {
    Description,
    Subtitles,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:5} {}\x1B[0m",
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
    // Initialize the logger once with info level by default.
    // We'll update the level after loading the config if needed.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lapchapters", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Description(args)) => run_generate(args, OutputKind::Description).await,
        Some(Commands::Subtitles(args)) => run_generate(args, OutputKind::Subtitles).await,
        None => {
            // Default behavior - top-level args run the description command
            let sheet = cli
                .sheet
                .ok_or_else(|| anyhow!("SHEET is required when no subcommand is specified"))?;

            let args = GenerateArgs {
                sheet,
                tab: cli.tab,
                output_dir: cli.output_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(args, OutputKind::Description).await
        }
    }
}

async fn run_generate(options: GenerateArgs, output: OutputKind) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config = load_or_create_config(&options.config_path)?;
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Select the tab; without an explicit id the first configured tab wins
    let tab = match &options.tab {
        Some(id) => config
            .tab(id)
            .ok_or_else(|| anyhow!("Unknown tab '{}'", id))?,
        None => config
            .tabs
            .first()
            .ok_or_else(|| anyhow!("No tabs configured"))?,
    };

    if !FileManager::file_exists(&options.sheet) {
        return Err(anyhow!("Lap sheet does not exist: {:?}", options.sheet));
    }
    let sheet = LapSheet::from_file(&options.sheet)?;
    let base_dir = options.sheet.parent().unwrap_or(Path::new("."));
    let sessions = sheet
        .resolve(tab, config.generator.enable_csv_import, base_dir)
        .await?;

    if config.generator.enable_inline_validation {
        let validation = validation::validate_sessions(&sessions);
        if !validation.passed() {
            for issue in &validation.issues {
                error!("{}", issue);
            }
            return Err(anyhow!(
                "Lap sheet validation failed with {} issue(s)",
                validation.issues.len()
            ));
        }
    }

    let builder = TimelineBuilder::with_config(config.generator.clone());
    let entries = builder.build(&sessions)?;
    if entries.is_empty() {
        warn!("Tab '{}' produced no timeline entries", tab.id);
    }

    match output {
        OutputKind::Description => {
            let chapters = builder.description_entries(&entries);
            println!("{}", render::render_description(&chapters));
        }
        OutputKind::Subtitles => {
            let content = render::render_subtitles(&entries);
            let file_name = render::subtitle_file_name(&tab.id, chrono::Local::now());
            let output_dir = options
                .output_dir
                .unwrap_or_else(|| base_dir.to_path_buf());
            let output_file = output_dir.join(file_name);
            FileManager::write_to_file(&output_file, &content)?;
            info!("Success: {:?}", output_file);
        }
    }

    Ok(())
}

fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let content = FileManager::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", config_path))?;
        Ok(config)
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}
