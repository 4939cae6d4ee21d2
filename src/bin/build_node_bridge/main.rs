//! build_node_bridge - builds the libsignal Node addon and installs it

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use node_bridge_builder::util::args::{self, ArgSource};
use node_bridge_builder::util::diagnostic::{BridgeError, FAILURE_EXIT_CODE};
use node_bridge_builder::util::shell::{Shell, Status};

mod cli;
mod commands;

use cli::Cli;

fn main() {
    let source = args::from_env_args(std::env::args_os());
    std::process::exit(run(source.as_ref()));
}

fn run(source: &dyn ArgSource) -> i32 {
    let tokens = match source.args() {
        Ok(tokens) => tokens,
        Err(e) => return report(&Shell::default(), &e.into()),
    };

    let parsed = Cli::try_parse_from(&tokens);
    let shell = match &parsed {
        Ok(cli) => cli.shell(),
        Err(_) => Shell::default(),
    };

    shell.status(Status::Invoked, format!("'{}'", tokens.join(" ")));

    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            let _ = e.print();
            return 0;
        }
        Err(e) => return report(&shell, &usage_error(&e).into()),
    };

    init_logging(cli.verbose);
    tracing::debug!("arguments read from {} source", source.name());
    if !cli.leftovers.is_empty() {
        tracing::debug!("ignoring positional arguments {:?}", cli.leftovers);
    }

    match commands::build::execute(cli, &shell) {
        Ok(()) => 0,
        Err(e) => report(&shell, &e),
    }
}

/// Log to stderr so stdout stays the build log. `RUST_LOG` overrides.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "node_bridge_builder=debug,build_node_bridge=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Turn a clap parse failure into a one-line usage error.
fn usage_error(e: &clap::Error) -> BridgeError {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    BridgeError::InvalidArguments {
        message: first.trim_start_matches("error: ").to_string(),
    }
}

/// Print a failure and any help that goes with it, returning the exit code.
fn report(shell: &Shell, err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BridgeError>() {
        Some(bridge) => {
            tracing::debug!("{:?} failure: {:?}", bridge.kind(), bridge);
            shell.error(bridge);
            if let Some(help) = bridge.help_text() {
                shell.help(help);
            }
            bridge.exit_code()
        }
        None => {
            shell.error(format!("{:#}", err));
            FAILURE_EXIT_CODE
        }
    }
}
