//! # Topogen Common
//!
//! Shared model for the topology generator.
//!
//! * **[`catalog`]**: Device types and the OS/service catalog sampled for each of them.
//! * **[`network`]**: Subnets, MAC addresses and the [`network::device::DeviceRecord`] row.
//! * **[`config`]**: Run configuration built from the command line.
//! * **[`error`]**: Input validation errors.

pub mod catalog;
pub mod config;
pub mod error;
pub mod network;
