//! # Topology File Export
//!
//! Writes device records as a comma-separated file with a header row and
//! reads such files back. Fields containing commas or quotes are quoted.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::Context;
use csv::{Reader, Writer};
use tracing::{debug, info};

use topogen_common::network::device::DeviceRecord;

/// Writes `records` to `path`, replacing any existing file.
///
/// An empty slice is a no-op: no file is created. Returns the number of rows written.
pub fn save_to_csv(records: &[DeviceRecord], path: &Path) -> anyhow::Result<usize> {
    if records.is_empty() {
        debug!("No records to write, skipping {}", path.display());
        return Ok(0);
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create topology file {}", path.display()))?;

    let written = write_records(records, file)
        .with_context(|| format!("Failed to write topology file {}", path.display()))?;

    info!("Wrote {} records to {}", written, path.display());
    Ok(written)
}

/// Serialises `records` with a header row into any writer.
///
/// The writer is flushed before returning and dropped with the `csv::Writer`.
pub fn write_records<W: io::Write>(records: &[DeviceRecord], sink: W) -> anyhow::Result<usize> {
    let mut writer = Writer::from_writer(sink);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Renders `records` as an in-memory CSV document.
pub fn export_records_csv(records: &[DeviceRecord]) -> anyhow::Result<String> {
    let mut buffer: Vec<u8> = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Reads a topology file written by [`save_to_csv`].
pub fn load_from_csv(path: &Path) -> anyhow::Result<Vec<DeviceRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open topology file {}", path.display()))?;

    let records = read_records(file)
        .with_context(|| format!("Failed to parse topology file {}", path.display()))?;

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Deserialises header-led CSV into records. Columns are matched by name.
pub fn read_records<R: io::Read>(source: R) -> anyhow::Result<Vec<DeviceRecord>> {
    let mut reader = Reader::from_reader(source);
    let mut records = Vec::new();

    for (row, result) in reader.deserialize::<DeviceRecord>().enumerate() {
        let record = result.with_context(|| format!("Invalid record at row {}", row + 1))?;
        records.push(record);
    }

    Ok(records)
}
