//! `build_node_bridge` command

use anyhow::Result;

use node_bridge_builder::ops::build_bridge::build_bridge;
use node_bridge_builder::util::process::ProcessRunner;
use node_bridge_builder::util::shell::{Shell, Status};
use node_bridge_builder::BridgeOptions;

use crate::cli::Cli;

pub fn execute(cli: Cli, shell: &Shell) -> Result<()> {
    let opts = BridgeOptions::from_raw(cli.into_raw())?;

    tracing::info!(
        "building {} addon for {}",
        opts.configuration(),
        opts.os_name()
    );

    let output = build_bridge(&opts, &ProcessRunner, shell)?;

    shell.status(
        Status::Finished,
        format!("{} ({} bytes)", output.destination.display(), output.size),
    );

    Ok(())
}
