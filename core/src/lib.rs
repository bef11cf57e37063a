//! # Topogen Core
//!
//! Generation and persistence of synthetic network inventories.
//!
//! * **[`generator`]**: Builds the ordered device records for a run.
//! * **[`export`]**: Writes records to a topology file and reads them back.
//! * **[`output`]**: Names the topology file.
//! * **[`topology`]**: Summarises a set of records by type, segment and gateway.

pub mod export;
pub mod generator;
pub mod output;
pub mod topology;
