//! i CLI entry point.

use std::process::ExitCode;

use clap::CommandFactory;
use i_installer::catalog::Catalog;
use i_installer::cli::{extract_manager_flags, parse_cli, Cli, Commands};
use i_installer::config::Settings;
use i_installer::detection::{alias_from_program, DetectionContext, PathProbe};
use i_installer::dispatch::Dispatcher;
use i_installer::shell::ProcessExecutor;
use i_installer::ui::{create_ui, OutputMode, Theme};
use i_installer::updates::{HostSelfManager, VERSION};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so list output on stdout stays pipeable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("i_installer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("i_installer=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run(argv: Vec<String>) -> i_installer::Result<u8> {
    let catalog = Catalog::builtin();
    let extracted = extract_manager_flags(argv, &catalog)?;
    let program = extracted.args.first().cloned().unwrap_or_default();

    let Some(cli) = parse_cli(extracted.args)? else {
        return Ok(0);
    };

    let mut settings = Settings::new(OutputMode::from_quiet_flag(cli.quiet));
    settings.debug = cli.debug;
    if let Some(id) = extracted.forced_manager {
        settings = settings.with_forced_manager(id);
    }
    if let Some(id) = alias_from_program(&program, &catalog) {
        settings = settings.with_binary_alias(id);
    }

    init_tracing(settings.debug);
    tracing::debug!("i starting with args: {:?}", cli);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(0);
    };
    if let Commands::Version = command {
        println!("i {}", VERSION);
        return Ok(0);
    }
    let Some(action) = command.into_action() else {
        return Ok(0);
    };

    let mut ui = create_ui(settings.output_mode);
    let context = DetectionContext::from_host(
        settings.forced_manager.clone(),
        settings.binary_alias.clone(),
    );
    let probe = PathProbe::new();
    let mut executor = ProcessExecutor::detect();
    let mut self_manager = HostSelfManager::from_env();

    let mut dispatcher =
        Dispatcher::new(&settings, context, &probe, &mut executor, &mut self_manager)
            .with_catalog(catalog);
    let result = dispatcher.dispatch(&action, ui.as_mut())?;

    Ok(u8::try_from(result.exit_code).unwrap_or(1))
}

fn main() -> ExitCode {
    match run(std::env::args().collect()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::debug!("{:?} error: {:?}", e.kind(), e);
            eprintln!("{}", Theme::detect().format_error(&e.to_string()));
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
