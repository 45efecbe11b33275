//! CIDR network block.
//!
//! Provides [`Network`], an address plus prefix length for either address
//! family, with CIDR text parsing and string serialization.

use super::integer::{
    family_max, hostmask, ip_to_integer, ip_with_family, to_integer, IPV4_BITS, IPV6_BITS,
};
use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An address block in CIDR notation.
///
/// The address may carry host bits; every range computation clears them
/// first. Ordering is by family, then address, then prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: IpAddr,
    mask: u8,
}

impl Network {
    /// Create a network, failing if `mask` is longer than the address.
    pub fn new(addr: IpAddr, mask: u8) -> Result<Network> {
        let bits = bits_of(addr);
        if mask > bits {
            return Err(Error::PrefixOverflow { prefix: mask, bits });
        }
        Ok(Network { addr, mask })
    }

    /// Create a network from a 4 or 16 byte big-endian address.
    pub fn from_bytes(addr: &[u8], mask: u8) -> Result<Network> {
        let (value, bits) = to_integer(addr)?;
        let addr = if bits == IPV4_BITS {
            IpAddr::V4(Ipv4Addr::from(value as u32))
        } else {
            IpAddr::V6(Ipv6Addr::from(value))
        };
        Network::new(addr, mask)
    }

    /// Parse a CIDR literal such as `"10.0.0.0/24"` or `"2001:db8::/32"`.
    ///
    /// # Examples
    /// ```
    /// use cidr_split::Network;
    /// let net = Network::parse("10.0.0.0/24").unwrap();
    /// assert_eq!(net.mask(), 24);
    /// assert_eq!(net.to_string(), "10.0.0.0/24");
    /// ```
    pub fn parse(cidr: &str) -> Result<Network> {
        cidr.parse()
    }

    /// Same family network built from an integer address.
    pub(crate) fn with_integer(&self, value: u128, mask: u8) -> Network {
        Network {
            addr: ip_with_family(value, self.addr),
            mask,
        }
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Prefix length.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Bit width of the address family (32 or 128).
    pub fn bits(&self) -> u8 {
        bits_of(self.addr)
    }

    /// Address as big-endian bytes.
    pub fn octets(&self) -> Vec<u8> {
        match self.addr {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }

    /// Address value as an integer.
    pub fn to_integer(&self) -> u128 {
        ip_to_integer(self.addr).0
    }

    /// True when the prefix covers the whole address.
    pub fn is_host_route(&self) -> bool {
        self.mask == self.bits()
    }

    /// The canonical block: host bits cleared.
    pub fn trunc(&self) -> Network {
        let bits = self.bits();
        let net_bits = self.to_integer() & family_max(bits) & !hostmask(bits, self.mask);
        self.with_integer(net_bits, self.mask)
    }

    /// Lowest address in the block.
    pub fn lo(&self) -> IpAddr {
        crate::processing::address_range(self).0
    }

    /// Highest address in the block.
    pub fn hi(&self) -> IpAddr {
        crate::processing::address_range(self).1
    }

    /// Check if an address is contained within this block.
    pub fn contains(&self, ip: IpAddr) -> bool {
        if bits_of(ip) != self.bits() {
            return false;
        }
        ip >= self.lo() && ip <= self.hi()
    }
}

fn bits_of(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_BITS,
        IpAddr::V6(_) => IPV6_BITS,
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Network> {
        let cidr = s.trim();
        let (addr, mask) = cidr
            .split_once('/')
            .ok_or_else(|| Error::parse(s, "missing prefix length"))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| Error::parse(s, format!("invalid address {addr}")))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| Error::parse(s, format!("invalid prefix length {mask}")))?;
        Network::new(addr, mask)
            .map_err(|_| Error::parse(s, format!("prefix length /{mask} is too long")))
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(de::Error::custom)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
