use std::fmt;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

/// A hardware address, rendered as six lowercase hex octets (`0a:1b:2c:3d:4e:5f`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Every octet is uniform over `0..=255`; no OUI or locally-administered bit is enforced.
impl Distribution<MacAddress> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MacAddress {
        let mut octets = [0u8; 6];
        rng.fill(&mut octets);
        MacAddress(octets)
    }
}

/// Checks the textual form produced by [`MacAddress`]'s `Display`.
pub fn is_well_formed(mac: &str) -> bool {
    let octets: Vec<&str> = mac.split(':').collect();
    octets.len() == 6
        && octets.iter().all(|octet| {
            octet.len() == 2
                && octet
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}
