pub mod generate;
pub mod inspect;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use topogen_common::catalog::DeviceType;

#[derive(Parser)]
#[command(name = "topogen")]
#[command(version, about = "Generates synthetic network topologies.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat to keep only the summary and warnings
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug messages
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a topology and save it as CSV
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Summarise a previously generated topology file
    #[command(alias = "i")]
    Inspect {
        file: PathBuf,

        /// Only list devices of this type in the segment tree
        #[arg(short = 't', long = "type")]
        device_type: Option<DeviceType>,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of subnets to create, asked for when omitted
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub subnets: Option<i64>,

    /// Number of systems per subnet, asked for when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub systems: Option<i64>,

    /// Seed for the random generator, makes the output reproducible
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory the topology file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
