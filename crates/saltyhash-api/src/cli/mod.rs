//! CLI command definitions for the `saltyhash` binary.
//!
//! Uses clap derive macros for argument parsing. Role management lives under
//! `saltyhash role ...`; hashing is a top-level verb.

pub mod hash;
pub mod role;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Salted hashing keyed by named roles.
#[derive(Parser)]
#[command(name = "saltyhash", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors and bare results.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output(&self) -> Output {
        if self.json {
            Output::Json
        } else if self.quiet {
            Output::Quiet
        } else {
            Output::Styled
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,saltyhash_core=debug,saltyhash_infra=debug",
            _ => "trace",
        }
    }
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Styled,
    Json,
    /// Bare values only (one digest per line), nothing for writes.
    Quiet,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage roles (write, read, delete, list).
    Role {
        #[command(subcommand)]
        action: role::RoleCommand,
    },

    /// Hash one base64 input under a role.
    Hash {
        /// Role name.
        role: String,

        /// Algorithm: sha1, sha2-256, sha2-512, sha3-256 or sha3-512.
        algorithm: String,

        /// Input, base64-encoded (or plain text with --text).
        input: String,

        /// Treat the input as plain text and base64-encode it first.
        #[arg(long)]
        text: bool,
    },

    /// Hash several inputs under one role in a single pass.
    #[command(name = "hash-batch")]
    HashBatch {
        /// Role name.
        role: String,

        /// Algorithm: sha1, sha2-256, sha2-512, sha3-256 or sha3-512.
        algorithm: String,

        /// Inputs, base64-encoded (or plain text with --text).
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<String>,

        /// Treat the inputs as plain text and base64-encode them first.
        #[arg(long)]
        text: bool,
    },

    /// List supported hash algorithms.
    Algorithms,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
