//! # Subnet Model
//!
//! A generated subnet is a `/24` under `192.168.0.0/16`, addressed by its
//! zero-based position in the run. The router sits at `.1` and hosts start at `.10`.
//!
//! Addresses are plain strings: counts large enough to push an octet past 255
//! produce text that is not a valid IPv4 address, and that is left to the caller.

pub const SUBNET_MASK: &str = "255.255.255.0";
pub const DNS_SERVERS: &str = "8.8.8.8,8.8.4.4";
pub const DOMAIN: &str = "example.com";

/// Final octet of the subnet's router.
pub const GATEWAY_OFFSET: usize = 1;
/// Final octet of the first host in a subnet.
pub const FIRST_HOST_OFFSET: usize = 10;

/// Largest subnet count whose third octet still fits in a byte.
pub const MAX_ADDRESSABLE_SUBNETS: usize = 255;
/// Largest host count whose last address still fits in a byte.
pub const MAX_ADDRESSABLE_SYSTEMS: usize = 256 - FIRST_HOST_OFFSET;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subnet {
    index: usize,
}

impl Subnet {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// One-based number used in hostnames and in the third octet.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// The first three octets, e.g. `192.168.3`.
    pub fn base(&self) -> String {
        format!("192.168.{}", self.number())
    }

    pub fn address(&self, offset: usize) -> String {
        format!("{}.{}", self.base(), offset)
    }

    pub fn gateway(&self) -> String {
        self.address(GATEWAY_OFFSET)
    }

    /// Address of the `position`-th (zero-based) host.
    pub fn host_address(&self, position: usize) -> String {
        self.address(FIRST_HOST_OFFSET + position)
    }
}

/// Iterates the first `count` subnets in index order.
pub fn subnets(count: usize) -> impl Iterator<Item = Subnet> {
    (0..count).map(Subnet::new)
}

/// Returns the `a.b.c` prefix of a dotted quad, if it has one.
pub fn prefix_of(address: &str) -> Option<&str> {
    let (prefix, last) = address.rsplit_once('.')?;
    if prefix.split('.').count() == 3 && !last.is_empty() {
        Some(prefix)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_addresses() {
        let subnet = Subnet::new(1);
        assert_eq!(subnet.number(), 2);
        assert_eq!(subnet.base(), "192.168.2");
        assert_eq!(subnet.gateway(), "192.168.2.1");
        assert_eq!(subnet.host_address(0), "192.168.2.10");
        assert_eq!(subnet.host_address(2), "192.168.2.12");
    }

    #[test]
    fn test_subnets_iterates_in_order() {
        let bases: Vec<String> = subnets(3).map(|s| s.base()).collect();
        assert_eq!(bases, ["192.168.1", "192.168.2", "192.168.3"]);
        assert_eq!(subnets(0).count(), 0);
    }

    #[test]
    fn test_prefix_of() {
        assert_eq!(prefix_of("192.168.4.17"), Some("192.168.4"));
        assert_eq!(prefix_of("10.0.0."), None);
        assert_eq!(prefix_of("localhost"), None);
        assert_eq!(prefix_of("1.2.3.4.5"), None);
    }
}
