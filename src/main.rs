//! Lookup Bench - Main CLI Application
//!
//! Times nested-loop and set-based matching of random identifier lists and
//! saves the running times as `performance_comparison.png`.

use clap::Parser;
use lookup_bench::{
    app::App,
    cli::Cli,
    config::{display_config_summary, load_config, resolve_error_color, EnvManager},
    error::{AppError, ErrorReporter, Result},
    PKG_NAME, VERSION,
};
use std::{error::Error, process};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue together with the command line used.");
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run_application(cli.clone()).await {
        let use_color = resolve_error_color(&cli);
        eprint!("Error: ");
        ErrorReporter::new(use_color, verbose).report_error(&e);

        if let Some(source) = e.source() {
            eprintln!("Caused by: {}", source);
        }

        if !verbose {
            print_error_suggestions(&e);
        }

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Built: {}", option_env!("BUILD_TIME").unwrap_or("unknown"));
        println!("Commit: {}", option_env!("GIT_COMMIT").unwrap_or("unknown"));
        println!("Debug mode enabled");
        println!();
        println!("{}", cli.get_config_summary());
        for warning in EnvManager::validate_current_env() {
            eprintln!("{}", warning);
        }
    }

    let config = load_config(cli)?;

    if config.debug {
        println!("Configuration Summary:");
        println!("{}", display_config_summary(&config));
        println!();
    }

    App::new(config).run().await?;
    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Parse(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - BENCH_SEED must be an unsigned integer");
            eprintln!("  - ENABLE_COLOR and SHOW_CHART must be true or false");
            eprintln!("  - CHART_FONT / --font must point to a readable TTF or OTF file");
        },
        AppError::Validation(_) => {
            eprintln!();
            eprintln!("Usage help:");
            eprintln!("  - --color and --no-color cannot be combined");
            eprintln!("  - Run with --help to list all options");
        },
        AppError::Sampling(_) => {
            eprintln!();
            eprintln!("Sampling help:");
            eprintln!("  - At most 999999 distinct identifiers can be drawn from [1, 1000000)");
        },
        AppError::Io(_) => {
            eprintln!();
            eprintln!("File troubleshooting:");
            eprintln!("  - Make sure the working directory exists and is writable");
            eprintln!("  - Check free disk space");
        },
        AppError::Render(_) => {
            eprintln!();
            eprintln!("Chart troubleshooting:");
            eprintln!("  - Try another font with --font <PATH>");
        },
        AppError::Internal(_) => {}
    }
}
