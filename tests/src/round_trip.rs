#![cfg(test)]
use crate::util::{Cleanup, unique_path};
use rand::SeedableRng;
use rand::rngs::StdRng;
use topogen_common::network::device::{COLUMNS, DeviceRecord};
use topogen_core::export::{load_from_csv, save_to_csv};
use topogen_core::generator::generate_network;

#[test]
fn written_file_reads_back_identically() -> anyhow::Result<()> {
    let path = unique_path("round-trip");
    let _cleanup = Cleanup(path.clone());

    let records: Vec<DeviceRecord> = generate_network(3, 6, &mut StdRng::seed_from_u64(11));
    let written = save_to_csv(&records, &path)?;
    assert_eq!(written, 21);

    let loaded = load_from_csv(&path)?;
    assert_eq!(loaded, records);
    Ok(())
}

#[test]
fn file_has_header_and_one_row_per_record() {
    let path = unique_path("layout");
    let _cleanup = Cleanup(path.clone());

    let records: Vec<DeviceRecord> = generate_network(2, 3, &mut StdRng::seed_from_u64(5));
    save_to_csv(&records, &path).expect("write failed");

    let mut reader = csv::Reader::from_path(&path).expect("open failed");
    let headers: Vec<String> = reader
        .headers()
        .expect("missing header")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, COLUMNS);

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), records.len());
    assert_eq!(&rows[0][0], "router-subnet-1");
    assert_eq!(&rows[0][7], "8.8.8.8,8.8.4.4");
    assert_eq!(&rows[0][9], records[0].running_services);
}

#[test]
fn existing_file_is_overwritten() -> anyhow::Result<()> {
    let path = unique_path("overwrite");
    let _cleanup = Cleanup(path.clone());

    save_to_csv(&generate_network(4, 4, &mut StdRng::seed_from_u64(1)), &path)?;
    let smaller = generate_network(1, 1, &mut StdRng::seed_from_u64(2));
    save_to_csv(&smaller, &path)?;

    assert_eq!(load_from_csv(&path)?, smaller);
    Ok(())
}

#[test]
fn empty_network_writes_nothing() -> anyhow::Result<()> {
    let path = unique_path("empty");
    let _cleanup = Cleanup(path.clone());

    let records = generate_network(0, 10, &mut StdRng::seed_from_u64(0));
    assert_eq!(save_to_csv(&records, &path)?, 0);
    assert!(!path.exists());
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let path = unique_path("missing");
    let err = load_from_csv(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to open topology file"));
}
