//! # Network Generator
//!
//! Produces a synthetic inventory: every subnet gets one router at `.1`
//! followed by `systems_per_subnet` devices of random type from `.10` upwards.
//!
//! The random source is passed in by the caller. Seeding it makes a run reproducible.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use topogen_common::catalog::DeviceType;
use topogen_common::network::device::DeviceRecord;
use topogen_common::network::mac::MacAddress;
use topogen_common::network::subnet::{self, Subnet};

/// Services sampled for a subnet router.
const ROUTER_SERVICE_COUNT: usize = 2;
/// Upper bound on services sampled for any other device.
const MAX_SERVICE_COUNT: usize = 3;

/// Generates the records for `num_subnets` subnets of `systems_per_subnet` hosts each.
///
/// Records come out in subnet order; within a subnet the router is first,
/// then hosts by position. A zero subnet count yields no records.
pub fn generate_network<R>(
    num_subnets: usize,
    systems_per_subnet: usize,
    rng: &mut R,
) -> Vec<DeviceRecord>
where
    R: Rng + ?Sized,
{
    let mut records: Vec<DeviceRecord> = Vec::new();

    for subnet in subnet::subnets(num_subnets) {
        debug!(
            "Generating subnet {} with {} systems",
            subnet.base(),
            systems_per_subnet
        );

        records.push(router(&subnet, rng));

        for position in 0..systems_per_subnet {
            let device_type: DeviceType = rng.random();
            records.push(system(&subnet, position, device_type, rng));
        }
    }

    records
}

/// The gateway of `subnet`.
fn router<R: Rng + ?Sized>(subnet: &Subnet, rng: &mut R) -> DeviceRecord {
    let device_type = DeviceType::Router;
    let services = sample_services(device_type, ROUTER_SERVICE_COUNT, rng);

    DeviceRecord::in_subnet(
        subnet,
        format!("router-subnet-{}", subnet.number()),
        subnet.gateway(),
        device_type,
        pick_os(device_type, rng),
        random_mac(rng),
        &services,
    )
}

/// The host at zero-based `position` of `subnet`.
fn system<R: Rng + ?Sized>(
    subnet: &Subnet,
    position: usize,
    device_type: DeviceType,
    rng: &mut R,
) -> DeviceRecord {
    let services = sample_services(device_type, MAX_SERVICE_COUNT, rng);

    DeviceRecord::in_subnet(
        subnet,
        format!("{}-{}-{}", device_type, subnet.number(), position + 1),
        subnet.host_address(position),
        device_type,
        pick_os(device_type, rng),
        random_mac(rng),
        &services,
    )
}

fn pick_os<R: Rng + ?Sized>(device_type: DeviceType, rng: &mut R) -> &'static str {
    device_type
        .os_versions()
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

/// Draws up to `amount` distinct services from the type's catalog.
fn sample_services<R: Rng + ?Sized>(
    device_type: DeviceType,
    amount: usize,
    rng: &mut R,
) -> Vec<&'static str> {
    let catalog = device_type.services();
    catalog
        .choose_multiple(rng, amount.min(catalog.len()))
        .copied()
        .collect()
}

fn random_mac<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random::<MacAddress>().to_string()
}
