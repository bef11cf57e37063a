use std::path::PathBuf;

/// Terminal behaviour for a run, taken from the global command line flags.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `0` prints everything, `1` drops headers and decoration,
    /// `2` and above leaves only warnings and errors.
    pub quiet: u8,
    /// Enables debug events.
    pub verbose: bool,
    pub no_banner: bool,
}

/// Everything a single generation run needs.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub num_subnets: usize,
    pub systems_per_subnet: usize,
    /// Fixes the random source so a run can be reproduced.
    pub seed: Option<u64>,
    /// Directory the topology file is written to.
    pub output_dir: PathBuf,
}

impl GenerationParams {
    /// Number of records a run with these counts produces: one router per subnet plus its hosts.
    ///
    /// `None` when the total does not fit in a `usize`.
    pub fn expected_records(&self) -> Option<usize> {
        crate::error::record_total(self.num_subnets, self.systems_per_subnet)
    }
}
