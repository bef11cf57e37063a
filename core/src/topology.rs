//! # Topology Summary
//!
//! Aggregates a record set the way the topology viewer presents it:
//! device counts per type, `/24` segments and links from each device to its gateway.

use std::collections::{BTreeMap, HashMap};

use topogen_common::catalog::DeviceType;
use topogen_common::network::device::DeviceRecord;
use topogen_common::network::subnet;

/// Placeholder link target when no record owns a device's gateway address.
pub const UNKNOWN_GATEWAY: &str = "Unknown Gateway";

/// Hosts sharing the first three address octets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub prefix: String,
    pub hostnames: Vec<String>,
}

impl Segment {
    pub fn cidr(&self) -> String {
        format!("{}.0/24", self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayLink {
    pub from: String,
    pub to: String,
}

impl GatewayLink {
    pub fn is_resolved(&self) -> bool {
        self.to != UNKNOWN_GATEWAY
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologySummary {
    pub total: usize,
    pub counts: BTreeMap<DeviceType, usize>,
    pub segments: Vec<Segment>,
    pub links: Vec<GatewayLink>,
}

impl TopologySummary {
    pub fn from_records(records: &[DeviceRecord]) -> Self {
        let mut counts: BTreeMap<DeviceType, usize> =
            DeviceType::ALL.into_iter().map(|t| (t, 0)).collect();
        for record in records {
            *counts.entry(record.device_type).or_default() += 1;
        }

        Self {
            total: records.len(),
            counts,
            segments: segments(records),
            links: gateway_links(records),
        }
    }

    pub fn count(&self, device_type: DeviceType) -> usize {
        self.counts.get(&device_type).copied().unwrap_or(0)
    }

    pub fn unresolved_links(&self) -> impl Iterator<Item = &GatewayLink> {
        self.links.iter().filter(|link| !link.is_resolved())
    }
}

/// Segments holding only the devices of `device_type`; segments left empty are dropped.
pub fn segments_of_type(records: &[DeviceRecord], device_type: DeviceType) -> Vec<Segment> {
    let matching: Vec<DeviceRecord> = records
        .iter()
        .filter(|record| record.device_type == device_type)
        .cloned()
        .collect();
    segments(&matching)
}

/// Groups hostnames by address prefix, segments ordered by prefix octets.
/// Records without a dotted-quad address are left out.
fn segments(records: &[DeviceRecord]) -> Vec<Segment> {
    let mut grouped: BTreeMap<Vec<u32>, Segment> = BTreeMap::new();

    for record in records {
        let Some(prefix) = subnet::prefix_of(&record.ip_address) else {
            continue;
        };

        grouped
            .entry(sort_key(prefix))
            .or_insert_with(|| Segment {
                prefix: prefix.to_string(),
                hostnames: Vec::new(),
            })
            .hostnames
            .push(record.hostname.clone());
    }

    grouped.into_values().collect()
}

/// Numeric octets so `192.168.10` sorts after `192.168.9`.
fn sort_key(prefix: &str) -> Vec<u32> {
    prefix
        .split('.')
        .map(|octet| octet.parse().unwrap_or(u32::MAX))
        .collect()
}

fn gateway_links(records: &[DeviceRecord]) -> Vec<GatewayLink> {
    let mut by_address: HashMap<&str, &str> = HashMap::with_capacity(records.len());
    for record in records {
        by_address
            .entry(record.ip_address.as_str())
            .or_insert(record.hostname.as_str());
    }

    records
        .iter()
        .filter(|record| !record.gateway.is_empty())
        .map(|record| GatewayLink {
            from: record.hostname.clone(),
            to: by_address
                .get(record.gateway.as_str())
                .copied()
                .unwrap_or(UNKNOWN_GATEWAY)
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_network;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_summary_of_generated_network() {
        let records = generate_network(12, 2, &mut StdRng::seed_from_u64(3));
        let summary = TopologySummary::from_records(&records);

        assert_eq!(summary.total, 36);
        assert_eq!(summary.counts.values().sum::<usize>(), 36);
        assert!(summary.count(DeviceType::Router) >= 12);
        assert_eq!(summary.counts.len(), DeviceType::ALL.len());

        let prefixes: Vec<&str> = summary.segments.iter().map(|s| s.prefix.as_str()).collect();
        assert_eq!(prefixes.len(), 12);
        assert_eq!(prefixes[8], "192.168.9");
        assert_eq!(prefixes[9], "192.168.10");
        assert_eq!(summary.segments[0].cidr(), "192.168.1.0/24");
        assert_eq!(summary.segments[0].hostnames[0], "router-subnet-1");
        assert_eq!(summary.segments[0].hostnames.len(), 3);

        assert_eq!(summary.links.len(), 36);
        assert_eq!(summary.unresolved_links().count(), 0);
        assert_eq!(summary.links[1].to, "router-subnet-1");
    }

    #[test]
    fn test_missing_gateway_is_unknown() {
        let mut records = generate_network(1, 1, &mut StdRng::seed_from_u64(3));
        records.remove(0);

        let summary = TopologySummary::from_records(&records);
        let unresolved: Vec<&GatewayLink> = summary.unresolved_links().collect();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].to, UNKNOWN_GATEWAY);
    }

    #[test]
    fn test_segments_of_type() {
        let records = generate_network(3, 4, &mut StdRng::seed_from_u64(8));

        let routers = segments_of_type(&records, DeviceType::Router);
        assert_eq!(routers.len(), 3);
        assert_eq!(routers[2].hostnames[0], "router-subnet-3");

        for device_type in DeviceType::ALL {
            let segments = segments_of_type(&records, device_type);
            let listed: usize = segments.iter().map(|s| s.hostnames.len()).sum();
            let expected = records.iter().filter(|r| r.device_type == device_type).count();
            assert_eq!(listed, expected, "{device_type}");
            assert!(segments.iter().all(|s| !s.hostnames.is_empty()));
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = TopologySummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.segments.is_empty());
        assert!(summary.links.is_empty());
        assert_eq!(summary.count(DeviceType::Switch), 0);
    }
}
