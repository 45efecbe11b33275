//! Aligned sub-blocks and sibling blocks.
//!
//! Navigation narrows or widens a block to a target prefix and steps to the
//! adjacent block of the same size. Stepping past either end of the address
//! space wraps around and is reported with a `wrapped` flag.

use super::range::integer_range;
use crate::error::Result;
use crate::models::{family_max, netmask, Network};

/// The `prefix` sized block holding the first address of `network`.
pub fn current_subnet(network: &Network, prefix: u8) -> Result<Network> {
    let mask = netmask(network.bits(), prefix)?;
    let (first, _) = integer_range(network);
    Ok(network.with_integer(first & mask, prefix))
}

/// The `prefix` sized block following the last one inside `network`.
///
/// Returns the block and `true` when stepping past the top of the address
/// space wrapped around to the zero address.
pub fn next_subnet(network: &Network, prefix: u8) -> Result<(Network, bool)> {
    let bits = network.bits();
    let mask = netmask(bits, prefix)?;
    let (_, last) = integer_range(network);
    let block_last = (last & mask) | (family_max(bits) & !mask);
    let next = block_last.wrapping_add(1) & family_max(bits);
    let wrapped = next == 0;
    if wrapped {
        log::trace!("next_subnet({network}, /{prefix}) wrapped around");
    }
    Ok((network.with_integer(next & mask, prefix), wrapped))
}

/// The `prefix` sized block preceding the first address of `network`.
///
/// Returns the block and `true` when `network` already started at the zero
/// address, in which case the block is taken from the top of the space.
pub fn previous_subnet(network: &Network, prefix: u8) -> Result<(Network, bool)> {
    let bits = network.bits();
    let mask = netmask(bits, prefix)?;
    let (first, _) = integer_range(network);
    let previous = first.wrapping_sub(1) & family_max(bits);
    let wrapped = first == 0;
    if wrapped {
        log::trace!("previous_subnet({network}, /{prefix}) wrapped around");
    }
    Ok((network.with_integer(previous & mask, prefix), wrapped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn net(cidr: &str) -> Network {
        Network::parse(cidr).unwrap()
    }

    #[test]
    fn test_current_subnet() {
        assert_eq!(current_subnet(&net("10.0.0.0/24"), 26).unwrap(), net("10.0.0.0/26"));
        assert_eq!(current_subnet(&net("10.0.0.77/24"), 26).unwrap(), net("10.0.0.0/26"));
        // widening the prefix aligns to the bigger block
        assert_eq!(current_subnet(&net("10.0.5.0/24"), 16).unwrap(), net("10.0.0.0/16"));
        assert_eq!(
            current_subnet(&net("2001:db8:1234::/48"), 33).unwrap(),
            net("2001:db8::/33")
        );
        assert_eq!(
            current_subnet(&net("10.0.0.0/24"), 33).unwrap_err(),
            Error::PrefixOverflow {
                prefix: 33,
                bits: 32
            }
        );
    }

    #[test]
    fn test_next_subnet() {
        assert_eq!(
            next_subnet(&net("10.1.1.0/28"), 28).unwrap(),
            (net("10.1.1.16/28"), false)
        );
        assert_eq!(
            next_subnet(&net("10.0.0.0/26"), 26).unwrap(),
            (net("10.0.0.64/26"), false)
        );
        // narrowing steps past the last aligned block inside the network
        assert_eq!(
            next_subnet(&net("10.18.126.0/24"), 28).unwrap(),
            (net("10.18.127.0/28"), false)
        );
        // widening steps past the enclosing block
        assert_eq!(
            next_subnet(&net("10.2.3.0/24"), 16).unwrap(),
            (net("10.3.0.0/16"), false)
        );
        assert_eq!(
            next_subnet(&net("10.0.0.7/32"), 32).unwrap(),
            (net("10.0.0.8/32"), false)
        );
        assert_eq!(
            next_subnet(&net("2001:db8::/33"), 33).unwrap(),
            (net("2001:db8:8000::/33"), false)
        );
    }

    #[test]
    fn test_next_subnet_wraps() {
        assert_eq!(
            next_subnet(&net("255.255.255.0/24"), 24).unwrap(),
            (net("0.0.0.0/24"), true)
        );
        assert_eq!(
            next_subnet(&net("255.255.255.255/32"), 32).unwrap(),
            (net("0.0.0.0/32"), true)
        );
        assert_eq!(
            next_subnet(&net("0.0.0.0/0"), 0).unwrap(),
            (net("0.0.0.0/0"), true)
        );
        assert_eq!(
            next_subnet(&net("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ff00/120"), 120).unwrap(),
            (net("::/120"), true)
        );
        assert!(next_subnet(&net("10.0.0.0/8"), 40).is_err());
    }

    #[test]
    fn test_previous_subnet() {
        assert_eq!(
            previous_subnet(&net("10.1.1.16/28"), 28).unwrap(),
            (net("10.1.1.0/28"), false)
        );
        assert_eq!(
            previous_subnet(&net("10.1.0.0/24"), 24).unwrap(),
            (net("10.0.255.0/24"), false)
        );
        assert_eq!(
            previous_subnet(&net("10.1.0.0/24"), 16).unwrap(),
            (net("10.0.0.0/16"), false)
        );
        assert_eq!(
            previous_subnet(&net("2001:db8:8000::/33"), 33).unwrap(),
            (net("2001:db8::/33"), false)
        );
    }

    #[test]
    fn test_previous_subnet_wraps() {
        assert_eq!(
            previous_subnet(&net("0.0.0.0/24"), 24).unwrap(),
            (net("255.255.255.0/24"), true)
        );
        assert_eq!(
            previous_subnet(&net("::/64"), 64).unwrap(),
            (net("ffff:ffff:ffff:ffff::/64"), true)
        );
        assert!(previous_subnet(&net("::/64"), 129).is_err());
    }
}
