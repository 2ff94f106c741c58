//! # netinv Subnet Command
//!
//! File: cli/src/commands/subnet.rs
//!
//! ## Overview
//!
//! Analyzes one CIDR network and prints its derived fields: network address,
//! prefix length, total addresses, and for IPv4 the netmask, broadcast,
//! usable host count, first/last usable host and a few sample hosts. IPv6
//! networks get a handful of sample addresses instead.
//!
//! The sample count is `planner.sample_size` from the configuration; `--samples`
//! overrides it through `config::Overrides`.
//!
//! ## Examples
//!
//! ```bash
//! netinv subnet 10.0.10.0/24
//! netinv subnet 2001:db8::/64 --samples 3
//! ```
//!
use crate::common::network::subnet::SubnetPlanner;
use crate::common::ui::tables;
use crate::core::{
    config::{Config, MAX_SAMPLE_SIZE},
    error::Result,
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Analyze a CIDR network (IPv4 or IPv6)")]
pub struct SubnetArgs {
    /// Network in CIDR form, e.g. 192.168.1.0/24 or 2001:db8::/64.
    cidr: String,

    /// Number of sample addresses to list (overrides planner.sample_size).
    #[arg(long, short, value_parser = clap::value_parser!(u16).range(1..=MAX_SAMPLE_SIZE as i64))]
    samples: Option<u16>,
}

impl SubnetArgs {
    /// The `--samples` value, applied as a configuration override.
    pub fn samples(&self) -> Option<usize> {
        self.samples.map(usize::from)
    }
}

pub fn handle_subnet(args: SubnetArgs, config: &Config) -> Result<()> {
    let planner = SubnetPlanner::new(config.planner.sample_size);
    info!(
        "Analyzing {} with up to {} samples",
        args.cidr,
        planner.sample_size()
    );
    let result = planner.analyze(&args.cidr)?;
    println!("{}", tables::subnet_summary(&result));
    Ok(())
}
