//! # netinv Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the netinv CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and applying command-line overrides
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`device`, `subnet`, etc.) is a variant in the `Commands` enum
//! - With no command, the interactive menu is opened
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Open the interactive menu
//! netinv
//!
//! # Analyze a subnet with extra logging
//! netinv -v subnet 10.0.10.0/24
//!
//! # Use a specific inventory file
//! netinv --data-file ~/net/inventory.json device list --active
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (user file, project file, CLI overrides)
//! 4. Route to appropriate command handler
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (device, subnet, menu, etc.)
mod common; // Shared utilities (fs, network, ui)
mod core; // Inventory, storage, config, errors

use crate::core::config::{self, Overrides};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "netinv",
    about = "Network inventory & subnet planner",
    long_about = "Track network devices (add, search, update, retire), analyze IPv4/IPv6\n\
                  subnets, report on the inventory and export it to CSV.\n\
                  Run without a command to open the interactive menu.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Inventory JSON file (overrides storage.data_file).
    #[arg(long, global = true, env = "NETINV_DATA_FILE", value_name = "PATH")]
    data_file: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "m")]
    Menu(commands::menu::MenuArgs),
    #[command(alias = "d")]
    Device(commands::device::DeviceArgs),
    #[command(alias = "s")]
    Subnet(commands::subnet::SubnetArgs),
    Report(commands::report::ReportArgs),
    Export(commands::export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Collects the command-line values that take precedence over config files.
fn overrides_for(cli: &Cli) -> Overrides {
    let mut overrides = Overrides {
        data_file: cli.data_file.clone(),
        ..Default::default()
    };
    match &cli.command {
        Some(Commands::Subnet(args)) => overrides.sample_size = args.samples(),
        Some(Commands::Export(args)) => {
            overrides.export_file = args.output().map(Path::to_path_buf)
        }
        _ => {}
    }
    overrides
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config(&overrides_for(&cli))?;

    match cli.command {
        None => commands::menu::handle_menu(commands::menu::MenuArgs {}, &config),
        Some(Commands::Menu(args)) => commands::menu::handle_menu(args, &config),
        Some(Commands::Device(args)) => commands::device::handle_device(args, &config),
        Some(Commands::Subnet(args)) => commands::subnet::handle_subnet(args, &config),
        Some(Commands::Report(args)) => commands::report::handle_report(args, &config),
        Some(Commands::Export(args)) => commands::export::handle_export(args, &config),
    }
}
