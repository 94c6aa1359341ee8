//! Gpupick CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gpupick::cli::{Cli, CommandDispatcher};
use gpupick::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gpupick=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gpupick=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gpupick starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = TerminalUI::new(output_mode);
    let dispatcher = CommandDispatcher::new(cli.catalog.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => {
            if result.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(result.exit_code.clamp(0, 255) as u8)
            }
        }
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
