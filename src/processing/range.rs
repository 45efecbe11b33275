//! Address range and cardinality of a block.

use crate::models::{hostmask, Network};
use std::net::IpAddr;

/// First and last address of `network`, host bits of the input ignored.
///
/// # Examples
/// ```
/// use cidr_split::{processing::address_range, Network};
/// let (first, last) = address_range(&Network::parse("192.168.1.0/24").unwrap());
/// assert_eq!(first.to_string(), "192.168.1.0");
/// assert_eq!(last.to_string(), "192.168.1.255");
/// ```
pub fn address_range(network: &Network) -> (IpAddr, IpAddr) {
    if network.is_host_route() {
        return (network.addr(), network.addr());
    }
    let (first, last) = integer_range(network);
    (
        network.with_integer(first, network.mask()).addr(),
        network.with_integer(last, network.mask()).addr(),
    )
}

/// First and last address of `network` as integers.
pub(crate) fn integer_range(network: &Network) -> (u128, u128) {
    let host_bits = hostmask(network.bits(), network.mask());
    let first = network.to_integer() & !host_bits;
    (first, first | host_bits)
}

/// Number of addresses in `network`.
///
/// Exact for every block except `::/0`, whose 2^128 addresses saturate to
/// `u128::MAX`.
pub fn address_count(network: &Network) -> u128 {
    let host_len = u32::from(network.bits() - network.mask());
    1u128.checked_shl(host_len).unwrap_or(u128::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn test_address_range() {
        let net = Network::parse("192.168.1.0/24").unwrap();
        assert_eq!(address_range(&net), (v4(192, 168, 1, 0), v4(192, 168, 1, 255)));

        let net = Network::parse("192.168.1.0/8").unwrap();
        assert_eq!(address_range(&net), (v4(192, 0, 0, 0), v4(192, 255, 255, 255)));

        let net = Network::parse("0.0.0.0/0").unwrap();
        assert_eq!(address_range(&net), (v4(0, 0, 0, 0), v4(255, 255, 255, 255)));

        let net = Network::parse("10.1.1.0/31").unwrap();
        assert_eq!(address_range(&net), (v4(10, 1, 1, 0), v4(10, 1, 1, 1)));
    }

    #[test]
    fn test_address_range_host_route() {
        let net = Network::parse("192.168.1.42/32").unwrap();
        assert_eq!(address_range(&net), (v4(192, 168, 1, 42), v4(192, 168, 1, 42)));

        let net = Network::parse("2001:db8::7/128").unwrap();
        let (first, last) = address_range(&net);
        assert_eq!(first, net.addr());
        assert_eq!(last, net.addr());
    }

    #[test]
    fn test_address_range_non_canonical() {
        let net = Network::parse("10.0.0.77/24").unwrap();
        assert_eq!(address_range(&net), (v4(10, 0, 0, 0), v4(10, 0, 0, 255)));
    }

    #[test]
    fn test_address_range_ipv6() {
        let net = Network::parse("2001:db8::/32").unwrap();
        let (first, last) = address_range(&net);
        assert_eq!(first.to_string(), "2001:db8::");
        assert_eq!(last.to_string(), "2001:db8:ffff:ffff:ffff:ffff:ffff:ffff");

        let net = Network::parse("::/0").unwrap();
        let (first, last) = address_range(&net);
        assert_eq!(first.to_string(), "::");
        assert_eq!(last.to_string(), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
    }

    #[test]
    fn test_address_count() {
        assert_eq!(address_count(&Network::parse("10.0.0.0/24").unwrap()), 256);
        assert_eq!(address_count(&Network::parse("10.0.0.0/32").unwrap()), 1);
        assert_eq!(address_count(&Network::parse("10.0.0.0/31").unwrap()), 2);
        assert_eq!(
            address_count(&Network::parse("0.0.0.0/0").unwrap()),
            4_294_967_296
        );
        assert_eq!(
            address_count(&Network::parse("2001:db8::/64").unwrap()),
            1u128 << 64
        );
        assert_eq!(
            address_count(&Network::parse("::/1").unwrap()),
            1u128 << 127
        );
        assert_eq!(address_count(&Network::parse("::/0").unwrap()), u128::MAX);
    }
}
