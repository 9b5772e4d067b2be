// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Comp Trie - Main entrypoint.
//!
//! Loads configuration, initializes the logging system and runs the
//! requested subcommand.

use anyhow::Context;
use clap::{Parser, Subcommand};
use comp_trie_lib::config::{self, LogConfig};
use comp_trie_lib::demo;
use std::path::PathBuf;
use tracing::info;

/// Command line arguments for Comp Trie.
#[derive(Parser, Debug)]
#[clap(name = "Comp Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the demonstration scenario
    Demo {
        /// Words to insert, overriding the configured list
        #[clap(value_parser)]
        words: Vec<String>,

        /// Prefix to enumerate
        #[clap(short, long, value_parser)]
        prefix: Option<String>,

        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.context("Failed to set global tracing subscriber")
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let loaded = config::load_config(args.config.as_deref());
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    let command = args.command.unwrap_or(Command::Demo {
        words: Vec::new(),
        prefix: None,
        json: false,
    });

    match command {
        Command::Demo {
            words,
            prefix,
            json,
        } => {
            let mut config = loaded.context("Failed to load configuration")?;
            if !words.is_empty() {
                config.demo.words = words;
            }
            if let Some(prefix) = prefix {
                config.demo.prefix = prefix;
            }
            if json {
                config.demo.output = config::OutputFormat::Json;
            }

            info!(words = config.demo.words.len(), "Running demonstration");
            let report = demo::run(&config.demo, &config.trie);
            println!("{}", report.render(config.demo.output)?);
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded.context("Configuration validation failed")?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            config::write_default_config(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
