use std::path::Path;

use colored::*;
use tracing::warn;

use crate::terminal::{print, topology_fmt};
use topogen_common::catalog::DeviceType;
use topogen_common::config::Config;
use topogen_core::export;
use topogen_core::topology::{self, Segment, TopologySummary};

/// Prints the summary of `file`. With `device_type` set, the segment tree lists only that type.
pub fn inspect(file: &Path, device_type: Option<DeviceType>, cfg: &Config) -> anyhow::Result<()> {
    let records = export::load_from_csv(file)?;
    let summary = TopologySummary::from_records(&records);

    if summary.total == 0 {
        warn!("{} contains no devices", file.display());
        return Ok(());
    }

    print::print_status(format!(
        "{} devices in {} segments",
        summary.total.to_string().bold().green(),
        summary.segments.len().to_string().bold().yellow()
    ));

    if cfg.quiet == 0 {
        topology_fmt::print_type_counts(&summary);
        let segments: Vec<Segment> = match device_type {
            Some(device_type) => topology::segments_of_type(&records, device_type),
            None => summary.segments.clone(),
        };

        if !segments.is_empty() {
            topology_fmt::print_segments(&segments);
        } else if let Some(device_type) = device_type {
            warn!("No {device_type} devices in {}", file.display());
        }
    }

    for link in summary.unresolved_links() {
        warn!("{} has no gateway device in this file", link.from);
    }

    Ok(())
}
