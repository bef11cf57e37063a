//! # Device Catalog
//!
//! The fixed mapping from device type to its valid OS versions and services.
//! Every randomized attribute of a generated device is drawn from here.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

/// The kind of device a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Windows,
    Linux,
    Router,
    Firewall,
    Switch,
}

impl DeviceType {
    pub const ALL: [DeviceType; 5] = [
        DeviceType::Windows,
        DeviceType::Linux,
        DeviceType::Router,
        DeviceType::Firewall,
        DeviceType::Switch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Windows => "windows",
            DeviceType::Linux => "linux",
            DeviceType::Router => "router",
            DeviceType::Firewall => "firewall",
            DeviceType::Switch => "switch",
        }
    }

    /// Operating systems a device of this type may run.
    pub fn os_versions(&self) -> &'static [&'static str] {
        match self {
            DeviceType::Windows => &[
                "Windows Server 2019",
                "Windows Server 2022",
                "Windows 10",
                "Windows 11",
            ],
            DeviceType::Linux => &["Ubuntu 20.04", "CentOS 7", "RHEL 8", "Debian 11"],
            DeviceType::Router => &["Cisco IOS 15.1", "Juniper JunOS 21.1"],
            DeviceType::Firewall => &["PFSense 2.6", "FortiOS 7.0"],
            DeviceType::Switch => &["Cisco IOS 17.3", "HPE OS 16.04"],
        }
    }

    /// Services a device of this type may expose.
    pub fn services(&self) -> &'static [&'static str] {
        match self {
            DeviceType::Windows => &["rdp", "smb", "dns", "dhcp", "http", "https"],
            DeviceType::Linux => &["ssh", "http", "https", "ftp", "smtp", "dns"],
            DeviceType::Router => &["snmp", "ssh", "telnet"],
            DeviceType::Firewall => &["https", "ssh", "ipsec"],
            DeviceType::Switch => &["snmp", "ssh", "telnet"],
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = String;

    /// Case-insensitive, accepts the lowercase names written to the output file.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DeviceType::ALL
            .into_iter()
            .find(|device_type| device_type.as_str() == lower)
            .ok_or_else(|| format!("unknown device type: {s}"))
    }
}

/// Uniform pick over the five device types, routers included.
impl Distribution<DeviceType> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DeviceType {
        DeviceType::ALL[rng.random_range(0..DeviceType::ALL.len())]
    }
}
