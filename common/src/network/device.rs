use serde::{Deserialize, Serialize};

use crate::catalog::DeviceType;
use crate::network::subnet::{DNS_SERVERS, DOMAIN, SUBNET_MASK, Subnet};

/// Column names of the output file, in field order.
pub const COLUMNS: [&str; 10] = [
    "hostname",
    "ip_address",
    "subnet_mask",
    "device_type",
    "os_version",
    "mac_address",
    "gateway",
    "dns_servers",
    "domain",
    "running_services",
];

/// One row of the generated inventory.
///
/// Field order is the column order of the written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub hostname: String,
    pub ip_address: String,
    pub subnet_mask: String,
    pub device_type: DeviceType,
    pub os_version: String,
    pub mac_address: String,
    pub gateway: String,
    pub dns_servers: String,
    pub domain: String,
    /// Comma-joined service names.
    pub running_services: String,
}

impl DeviceRecord {
    /// Builds a record inside `subnet`, filling in the values shared by every device.
    pub fn in_subnet(
        subnet: &Subnet,
        hostname: String,
        ip_address: String,
        device_type: DeviceType,
        os_version: &str,
        mac_address: String,
        services: &[&str],
    ) -> Self {
        Self {
            hostname,
            ip_address,
            subnet_mask: SUBNET_MASK.to_string(),
            device_type,
            os_version: os_version.to_string(),
            mac_address,
            gateway: subnet.gateway(),
            dns_servers: DNS_SERVERS.to_string(),
            domain: DOMAIN.to_string(),
            running_services: services.join(","),
        }
    }

    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.running_services
            .split(',')
            .filter(|service| !service.is_empty())
    }

    pub fn is_gateway(&self) -> bool {
        self.ip_address == self.gateway
    }
}
