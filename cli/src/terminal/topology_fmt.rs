use colored::*;
use topogen_core::topology::{Segment, TopologySummary};

use crate::mprint;
use crate::terminal::{colors, print};

pub fn print_type_counts(summary: &TopologySummary) {
    mprint!();
    print::header("device types", 0);

    let key_width: usize = summary
        .counts
        .keys()
        .map(|t| t.as_str().len())
        .max()
        .unwrap_or(0);

    for (device_type, count) in &summary.counts {
        print::aligned_line(
            device_type.as_str(),
            count.to_string().color(colors::ACCENT),
            key_width,
        );
    }
}

pub fn print_segments(segments: &[Segment]) {
    mprint!();
    print::header("segments", 0);

    for (idx, segment) in segments.iter().enumerate() {
        print::tree_head(idx, &segment.cidr());
        print::as_tree_one_level(&segment.hostnames);
        if idx + 1 != segments.len() {
            mprint!();
        }
    }
}
