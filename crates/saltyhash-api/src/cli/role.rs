//! Role management subcommands.

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use super::Output;
use crate::state::AppState;

#[derive(Subcommand)]
pub enum RoleCommand {
    /// Create or update a role. Omitted options keep their stored value.
    Write {
        /// Role name.
        name: String,

        /// Salt, base64-encoded.
        #[arg(long)]
        salt: Option<String>,

        /// Combination mode: append, prepend, or "" for none.
        #[arg(long)]
        mode: Option<String>,
    },

    /// Show a role's salt.
    Read {
        /// Role name.
        name: String,
    },

    /// Delete a role.
    #[command(alias = "rm")]
    Delete {
        /// Role name.
        name: String,
    },

    /// List role names.
    #[command(alias = "ls")]
    List,
}

/// Handle a role subcommand.
pub async fn handle_role_command(cmd: RoleCommand, state: &AppState, output: Output) -> Result<()> {
    match cmd {
        RoleCommand::Write { name, salt, mode } => {
            write_role(state, &name, salt.as_deref(), mode.as_deref(), output).await
        }
        RoleCommand::Read { name } => read_role(state, &name, output).await,
        RoleCommand::Delete { name } => delete_role(state, &name, output).await,
        RoleCommand::List => list_roles(state, output).await,
    }
}

async fn write_role(
    state: &AppState,
    name: &str,
    salt: Option<&str>,
    mode: Option<&str>,
    output: Output,
) -> Result<()> {
    state.role_service.write_role(name, salt, mode).await?;

    match output {
        Output::Json => {
            let result = serde_json::json!({ "written": name });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Output::Quiet => {}
        Output::Styled => {
            println!();
            println!("  {} Wrote role '{}'", style("ok").green(), style(name).cyan());
            println!();
        }
    }

    Ok(())
}

async fn read_role(state: &AppState, name: &str, output: Output) -> Result<()> {
    let role = state.role_service.read_role(name).await?;

    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&role)?),
        Output::Quiet => println!("{}", role.salt),
        Output::Styled => {
            println!();
            println!(
                "  {} salt = {}",
                style(name).cyan().bold(),
                style(&role.salt).white()
            );
            println!();
        }
    }

    Ok(())
}

async fn delete_role(state: &AppState, name: &str, output: Output) -> Result<()> {
    state.role_service.delete_role(name).await?;

    match output {
        Output::Json => {
            let result = serde_json::json!({ "deleted": name });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Output::Quiet => {}
        Output::Styled => {
            println!();
            println!("  {} Deleted role '{}'", style("ok").green(), style(name).cyan());
            println!();
        }
    }

    Ok(())
}

async fn list_roles(state: &AppState, output: Output) -> Result<()> {
    let roles = state.role_service.list_roles().await?;

    match output {
        Output::Json => {
            println!("{}", serde_json::to_string_pretty(&roles)?);
            return Ok(());
        }
        Output::Quiet => {
            for key in &roles.keys {
                println!("{key}");
            }
            return Ok(());
        }
        Output::Styled => {}
    }

    if roles.keys.is_empty() {
        println!();
        println!("  {} No roles yet.", style("i").blue().bold());
        println!("     Create one with: saltyhash role write <name> --salt <base64>");
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Role").fg(Color::White)]);
    for key in &roles.keys {
        table.add_row(vec![Cell::new(key).fg(Color::Cyan)]);
    }

    println!();
    println!("  Roles ({})", roles.keys.len());
    println!();
    println!("{table}");
    println!();

    Ok(())
}
