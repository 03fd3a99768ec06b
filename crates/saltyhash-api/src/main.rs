//! saltyhash CLI entry point.
//!
//! Binary name: `saltyhash`
//!
//! Parses CLI arguments, initializes tracing, the database and services, then
//! dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    saltyhash_observe::tracing_setup::init_tracing(cli.log_filter(), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;

    saltyhash_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let output = cli.output();

    // Commands that don't need app state
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "saltyhash", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Algorithms => return cli::hash::algorithms(output),
        _ => {}
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Role { action } => {
            cli::role::handle_role_command(action, &state, output).await?;
        }

        Commands::Hash {
            role,
            algorithm,
            input,
            text,
        } => {
            cli::hash::hash(&state, &role, &algorithm, &input, text, output).await?;
        }

        Commands::HashBatch {
            role,
            algorithm,
            inputs,
            text,
        } => {
            cli::hash::hash_batch(&state, &role, &algorithm, &inputs, text, output).await?;
        }

        Commands::Algorithms | Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
