//! Command-line interface module

use clap::{Parser, Subcommand};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::conversion::{ConversionConfig, ConversionResult, InputFormat};
use crate::error::{ConversionError, ConversionErrorKind};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "sheetconv")]
#[command(about = "Convert CSV files and XLSX workbooks into per-table JSON files")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Pipeline to run
    #[command(subcommand)]
    pub command: Commands,

    /// Directory scanned for input files
    #[arg(short, long, global = true, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Directory JSON files are written to (created if missing)
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Also scan subdirectories of the input directory
    #[arg(long, global = true)]
    pub recursive: bool,

    /// Spaces per indentation level (0-8, default: 2)
    #[arg(long, global = true)]
    pub indent: Option<u8>,

    /// Print a summary of the batch when it finishes
    #[arg(long, global = true)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// CLI subcommands, one per pipeline
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Convert every .csv file; a failing file is reported and skipped
    Csv,
    /// Convert the first 10 sheets of every .xlsx workbook; the first failure stops the run
    Xlsx,
}

impl Commands {
    pub fn input_format(&self) -> InputFormat {
        match self {
            Commands::Csv => InputFormat::Csv,
            Commands::Xlsx => InputFormat::Xlsx,
        }
    }
}

/// How much console output a batch produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    pub quiet: bool,
    pub verbose: bool,
}

impl Verbosity {
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            verbose: false,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let config = ConversionConfig::new()
            .with_input_dir(args.input.clone())
            .with_output_dir(args.output.clone())
            .with_recursive(args.recursive)
            .with_indent_size(args.indent.unwrap_or(2))
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    pub fn command(&self) -> Commands {
        self.args.command
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity {
            quiet: self.args.quiet,
            verbose: self.args.verbose,
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if the batch summary was requested
    pub fn show_stats(&self) -> bool {
        self.args.stats
    }
}

/// CLI utility functions
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a batch duration: milliseconds under a second, else seconds
    pub fn format_duration(duration: Duration) -> String {
        match duration.as_millis() {
            ms if ms < 1000 => format!("{}ms", ms),
            _ => format!("{:.1}s", duration.as_secs_f64()),
        }
    }

    /// Spinner shown while a workbook is read; hidden off-terminal or when quiet
    pub fn create_spinner(message: String, quiet: bool) -> ProgressBar {
        if quiet || !Self::is_interactive() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Show a plain progress line (if not in quiet mode)
    pub fn show_info(message: &str, quiet: bool) {
        if !quiet {
            println!("{}", message);
        }
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                println!("{} {}", style("✓").green(), message);
            } else {
                println!("✓ {}", message);
            }
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        if Self::should_use_color() {
            eprintln!("{} {}", style("✗").red(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Show a detail line on stderr (verbose mode only)
    pub fn show_detail(message: &str, verbosity: Verbosity) {
        if verbosity.verbose && !verbosity.quiet {
            eprintln!("  {}", style(message).dim());
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        Self::is_interactive() && std::env::var_os("NO_COLOR").is_none()
    }

    fn is_interactive() -> bool {
        Term::stdout().is_term()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    if error.is_no_input() {
        eprintln!("\nTip: Use --input to point at the directory holding your files");
    } else if matches!(
        error.kind(),
        Some(ConversionErrorKind::Configuration { .. })
    ) {
        eprintln!("\nTry 'sheetconv --help' for usage information.");
    }
}
