// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! amqp-inspect - decode and encode AMQP 1.0 delivery states
//!
//! `decode` reads hex (argument or stdin) and prints the decoded value;
//! `encode` builds a delivery state from flags and prints its hex encoding.

mod input;

use amqp_wire::{
    condition, AmqpError, CodecLimits, Cursor, DeliveryState, Modified, Received, Rejected,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "amqp-inspect")]
#[command(version)]
#[command(about = "Decode and encode AMQP 1.0 delivery states")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a hex-encoded delivery state
    Decode {
        /// Hex bytes, or `-` to read them from stdin
        #[arg(value_name = "HEX")]
        input: String,

        /// YAML file with decode limits
        #[arg(long, value_name = "FILE")]
        limits: Option<PathBuf>,
    },
    /// Encode a delivery state and print it as hex
    Encode {
        #[command(subcommand)]
        state: StateArgs,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum StateArgs {
    /// Partial transfer position
    Received {
        #[arg(long)]
        section_number: Option<u32>,
        #[arg(long)]
        section_offset: Option<u64>,
    },
    Accepted,
    Released,
    /// Rejected with an optional error
    Rejected {
        /// Error condition symbol (defaults to amqp:internal-error when a
        /// description is given)
        #[arg(long)]
        condition: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Modified {
        #[arg(long)]
        delivery_failed: bool,
        #[arg(long)]
        undeliverable_here: bool,
    },
}

impl StateArgs {
    fn build(&self) -> DeliveryState {
        match self {
            StateArgs::Received {
                section_number,
                section_offset,
            } => Received {
                section_number: *section_number,
                section_offset: *section_offset,
            }
            .into(),
            StateArgs::Accepted => amqp_wire::Accepted.into(),
            StateArgs::Released => amqp_wire::Released.into(),
            StateArgs::Rejected {
                condition: cond,
                description,
            } => {
                let error = match (cond, description) {
                    (None, None) => None,
                    (cond, description) => Some(AmqpError {
                        condition: Some(
                            cond.as_deref()
                                .unwrap_or(condition::INTERNAL_ERROR)
                                .into(),
                        ),
                        description: description.clone(),
                        info: None,
                    }),
                };
                Rejected { error }.into()
            }
            StateArgs::Modified {
                delivery_failed,
                undeliverable_here,
            } => Modified {
                delivery_failed: delivery_failed.then_some(true),
                undeliverable_here: undeliverable_here.then_some(true),
                message_annotations: None,
            }
            .into(),
        }
    }
}

fn main() {
    // Initialize logger for RUST_LOG-based debug output
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Decode { input, limits } => cmd_decode(&input, limits.as_deref()),
        Command::Encode { state } => {
            let state = state.build();
            log::debug!("encoding {}", state);
            println!("{}", hex::encode(state.encode_to_vec()));
            Ok(())
        }
    }
}

fn cmd_decode(input: &str, limits: Option<&std::path::Path>) -> anyhow::Result<()> {
    let limits = match limits {
        Some(path) => CodecLimits::from_yaml_file(path)
            .with_context(|| format!("loading limits from {}", path.display()))?,
        None => CodecLimits::default(),
    };
    let bytes = input::read_hex(input)?;

    let mut cursor = Cursor::with_limits(&bytes, limits);
    let state = DeliveryState::decode(&mut cursor)
        .with_context(|| format!("decoding {} byte(s)", bytes.len()))?;
    let consumed = cursor.offset();

    println!("{}", state.to_string().bold());
    println!("{} {} byte(s)", "consumed:".cyan(), consumed);
    if consumed < bytes.len() {
        println!(
            "{} {} byte(s): {}",
            "trailing:".yellow(),
            bytes.len() - consumed,
            hex::encode(&bytes[consumed..])
        );
    }
    Ok(())
}
