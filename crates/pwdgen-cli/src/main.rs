//! pwdgen CLI - generate passwords, keep them sealed, copy them to the clipboard
//!
//! This is the command-line interface for pwdgen. Plaintext passwords only
//! ever leave the process through the clipboard program.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pwdgen_core::PwdgenError;

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod ui;

use app::AppContext;
use cli::{Cli, Commands};
use constants::exit_codes;
use ui::{badge, Badge, UiContext};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let code = match run(&cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => report(&cli, &err),
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!(command = cli.command.name(), "dispatching");
    let ctx = AppContext::new(cli);

    match &cli.command {
        Commands::Init => commands::handle_init(&ctx),
        Commands::Gen(args) => commands::handle_gen(&ctx, args),
        Commands::Get(args) => commands::handle_get(&ctx, args),
        Commands::Completions(args) => commands::handle_completions(args.shell),
    }
}

/// Print `err` and pick the exit code.
///
/// A missing entry is reported on stdout and is not a failure.
fn report(cli: &Cli, err: &anyhow::Error) -> i32 {
    let not_found = err
        .chain()
        .find_map(|e| e.downcast_ref::<PwdgenError>())
        .filter(|e| e.is_not_found());
    if let Some(not_found) = not_found {
        if !cli.quiet {
            println!("{}", not_found);
        }
        return exit_codes::SUCCESS;
    }

    let ui = UiContext::from_env();
    eprintln!("{}", badge(&ui, Badge::Err, &err.to_string()));
    if cli.debug {
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
    }
    exit_codes::FAILURE
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `--debug` default.
fn init_tracing(debug: bool) {
    let default = if debug {
        "warn,pwdgen=debug,pwdgen_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
