use std::path::Path;

use chrono::Local;
use colored::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::commands::GenerateArgs;
use crate::terminal::{colors, print, prompt, topology_fmt};
use topogen_common::config::{Config, GenerationParams};
use topogen_common::error::{validate_count, validate_total};
use topogen_common::network::device::DeviceRecord;
use topogen_common::network::subnet::{MAX_ADDRESSABLE_SUBNETS, MAX_ADDRESSABLE_SYSTEMS};
use topogen_core::topology::TopologySummary;
use topogen_core::{export, generator, output};

const SUBNETS_FIELD: &str = "subnet count";
const SYSTEMS_FIELD: &str = "systems per subnet";
const DEFAULT_OUTPUT_DIR: &str = ".";
const NO_FILE_WARNING: &str = "No devices generated, no file written";

pub fn generate(args: GenerateArgs, cfg: &Config) -> anyhow::Result<()> {
    let params: GenerationParams = resolve_params(args)?;
    warn_unaddressable(&params);

    let records: Vec<DeviceRecord> = match params.seed {
        Some(seed) => {
            debug!("Using seed {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            generator::generate_network(params.num_subnets, params.systems_per_subnet, &mut rng)
        }
        None => generator::generate_network(
            params.num_subnets,
            params.systems_per_subnet,
            &mut rand::rng(),
        ),
    };

    let path = output::topology_path(&params.output_dir, &Local::now());
    let written: usize = export::save_to_csv(&records, &path)?;

    print_summary(records.len(), params.num_subnets, cfg);
    match saved_line(written, &path, &params.output_dir) {
        Some(line) => print::print_status(line.color(colors::FILE_PATH).to_string()),
        None => warn!("{NO_FILE_WARNING}"),
    }

    if cfg.quiet == 0 && !records.is_empty() {
        topology_fmt::print_type_counts(&TopologySummary::from_records(&records));
    }

    Ok(())
}

/// Takes counts from the command line, prompting for whichever is missing.
///
/// Fails when either count is negative or their record total overflows.
fn resolve_params(args: GenerateArgs) -> anyhow::Result<GenerationParams> {
    let num_subnets: usize = match args.subnets {
        Some(value) => validate_count(SUBNETS_FIELD, value)?,
        None => prompt::ask_count("How many subnets do you want to create? ", SUBNETS_FIELD)?,
    };

    let systems_per_subnet: usize = match args.systems {
        Some(value) => validate_count(SYSTEMS_FIELD, value)?,
        None => prompt::ask_count("How many systems per subnet? ", SYSTEMS_FIELD)?,
    };

    let total: usize = validate_total(num_subnets, systems_per_subnet)?;
    debug!("Generating {total} records");

    Ok(GenerationParams {
        num_subnets,
        systems_per_subnet,
        seed: args.seed,
        output_dir: args.output_dir,
    })
}

fn warn_unaddressable(params: &GenerationParams) {
    if params.num_subnets > MAX_ADDRESSABLE_SUBNETS {
        warn!(
            "Subnets beyond {} will not have valid IPv4 addresses",
            MAX_ADDRESSABLE_SUBNETS
        );
    }
    if params.systems_per_subnet > MAX_ADDRESSABLE_SYSTEMS {
        warn!(
            "Systems beyond {} per subnet will not have valid IPv4 addresses",
            MAX_ADDRESSABLE_SYSTEMS
        );
    }
}

fn summary_line(devices: usize, subnets: usize) -> String {
    format!("Generated {devices} devices across {subnets} subnets")
}

/// `Data saved to: ...`, or `None` when nothing was written.
///
/// Files in the default directory are shown by name only.
fn saved_line(written: usize, path: &Path, output_dir: &Path) -> Option<String> {
    if written == 0 {
        return None;
    }

    let shown = match path.file_name() {
        Some(name) if output_dir == Path::new(DEFAULT_OUTPUT_DIR) => Path::new(name).display(),
        _ => path.display(),
    };
    Some(format!("Data saved to: {shown}"))
}

fn print_summary(devices: usize, subnets: usize, cfg: &Config) {
    let output: String = summary_line(devices, subnets).bold().green().to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::fat_separator();
        }
        _ => print::print_status(output),
    }
}
