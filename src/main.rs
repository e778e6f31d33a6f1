use anyhow::Result;
use clap::Parser;

use sheetconv::cli::{handle_error, Args, CliConfig, Commands};
use sheetconv::{convert_csv_directory, convert_workbook_directory};

fn main() -> Result<()> {
    let args = Args::parse();

    // Create conversion configuration
    let config = CliConfig::from_args(args)?;
    let conversion = &config.conversion_config;
    let verbosity = config.verbosity();

    let result = match config.command() {
        Commands::Csv => convert_csv_directory(conversion, verbosity),
        Commands::Xlsx => convert_workbook_directory(conversion, verbosity),
    };

    match result {
        Ok(summary) => {
            if config.show_stats() && !config.is_quiet() {
                println!("\nConversion Statistics:");
                println!("{}", summary.report());
            }
            Ok(())
        }
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    }
}
