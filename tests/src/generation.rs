#![cfg(test)]
use rand::SeedableRng;
use rand::rngs::StdRng;
use topogen_common::catalog::DeviceType;
use topogen_common::network::device::DeviceRecord;
use topogen_common::network::mac;
use topogen_core::generator::generate_network;

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn zero_subnets_is_empty() {
    assert!(generate_network(0, 0, &mut rng()).is_empty());
    assert!(generate_network(0, 50, &mut rng()).is_empty());
}

#[test]
fn one_subnet_without_systems_is_its_router() {
    let records: Vec<DeviceRecord> = generate_network(1, 0, &mut rng());

    assert_eq!(records.len(), 1, "Expected only the router, got {records:?}");
    assert_eq!(records[0].device_type, DeviceType::Router);
    assert_eq!(records[0].ip_address, "192.168.1.1");
}

#[test]
fn two_subnets_three_systems() {
    let records: Vec<DeviceRecord> = generate_network(2, 3, &mut rng());
    assert_eq!(records.len(), 8);

    let routers = records
        .iter()
        .filter(|r| r.hostname.starts_with("router-subnet-"))
        .count();
    assert_eq!(routers, 2);

    let subnet_two: Vec<&str> = records
        .iter()
        .filter(|r| r.ip_address.starts_with("192.168.2."))
        .map(|r| r.ip_address.as_str())
        .collect();
    assert_eq!(subnet_two, ["192.168.2.1", "192.168.2.10", "192.168.2.11", "192.168.2.12"]);
}

#[test]
fn every_record_is_plausible() {
    let records: Vec<DeviceRecord> = generate_network(5, 25, &mut rng());
    assert_eq!(records.len(), 5 + 5 * 25);

    for record in &records {
        assert_eq!(record.subnet_mask, "255.255.255.0");
        assert_eq!(record.dns_servers, "8.8.8.8,8.8.4.4");
        assert_eq!(record.domain, "example.com");
        assert!(
            mac::is_well_formed(&record.mac_address),
            "Malformed MAC address: {}",
            record.mac_address
        );
        assert!(record.ip_address.starts_with(&record.gateway[..record.gateway.len() - 1]));
    }

    let gateways: Vec<&DeviceRecord> = records.iter().filter(|r| r.is_gateway()).collect();
    assert_eq!(gateways.len(), 5);
    assert!(gateways.iter().all(|r| r.device_type == DeviceType::Router));
}

#[test]
fn unseeded_generation_still_holds_shape() {
    let records: Vec<DeviceRecord> = generate_network(3, 4, &mut rand::rng());
    assert_eq!(records.len(), 15);
    assert_eq!(records[5].hostname, "router-subnet-2");
}
