use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

const FILENAME_PREFIX: &str = "network_topology_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `network_topology_{YYYYMMDD_HHMMSS}.csv` for the given generation time.
pub fn topology_filename(generated_at: &DateTime<Local>) -> String {
    format!(
        "{FILENAME_PREFIX}{}.csv",
        generated_at.format(TIMESTAMP_FORMAT)
    )
}

pub fn topology_path(dir: &Path, generated_at: &DateTime<Local>) -> PathBuf {
    dir.join(topology_filename(generated_at))
}
