//! Hashing subcommands.

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use saltyhash_types::algorithm::HashAlgorithm;
use saltyhash_types::response::{HashBatchResponse, HashResponse};

use super::Output;
use crate::state::AppState;

/// Base64-encode `input` when it was given as plain text.
pub fn prepare_input(input: &str, text: bool) -> String {
    if text {
        STANDARD.encode(input)
    } else {
        input.to_string()
    }
}

pub async fn hash(
    state: &AppState,
    role: &str,
    algorithm: &str,
    input: &str,
    text: bool,
    output: Output,
) -> Result<()> {
    let input = prepare_input(input, text);
    let sum = state.hash_engine.hash(role, algorithm, &input).await?;

    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&HashResponse { sum })?),
        Output::Quiet => println!("{sum}"),
        Output::Styled => {
            println!();
            println!(
                "  {} {}",
                style(format!("{role}/{algorithm}")).cyan(),
                style(&sum).white().bold()
            );
            println!();
        }
    }

    Ok(())
}

pub async fn hash_batch(
    state: &AppState,
    role: &str,
    algorithm: &str,
    inputs: &[String],
    text: bool,
    output: Output,
) -> Result<()> {
    let inputs: Vec<String> = inputs.iter().map(|i| prepare_input(i, text)).collect();
    let sums = state.hash_engine.hash_batch(role, algorithm, &inputs).await?;

    match output {
        Output::Json => {
            println!("{}", serde_json::to_string_pretty(&HashBatchResponse { sums })?);
        }
        Output::Quiet => {
            for sum in &sums {
                println!("{sum}");
            }
        }
        Output::Styled => {
            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                Cell::new("#").fg(Color::White),
                Cell::new("Sum").fg(Color::White),
            ]);
            for (index, sum) in sums.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(index).fg(Color::DarkGrey),
                    Cell::new(sum).fg(Color::Cyan),
                ]);
            }

            println!();
            println!(
                "  {} {} inputs",
                style(format!("{role}/{algorithm}")).cyan(),
                sums.len()
            );
            println!();
            println!("{table}");
            println!();
        }
    }

    Ok(())
}

/// Print the supported algorithms with their digest sizes.
pub fn algorithms(output: Output) -> Result<()> {
    match output {
        Output::Json => {
            let list: Vec<_> = HashAlgorithm::ALL
                .iter()
                .map(|a| serde_json::json!({ "name": a.as_str(), "digest_bytes": a.digest_len() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        Output::Quiet => {
            for algorithm in HashAlgorithm::ALL {
                println!("{algorithm}");
            }
        }
        Output::Styled => {
            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL_CONDENSED);
            table.set_header(vec![
                Cell::new("Algorithm").fg(Color::White),
                Cell::new("Digest bytes").fg(Color::White),
            ]);
            for algorithm in HashAlgorithm::ALL {
                table.add_row(vec![
                    Cell::new(algorithm.as_str()).fg(Color::Cyan),
                    Cell::new(algorithm.digest_len()),
                ]);
            }
            println!();
            println!("{table}");
            println!();
        }
    }

    Ok(())
}
