//! Address to integer conversion.
//!
//! Addresses are handled as big-endian `u128` values together with the bit
//! width of their family, so one code path serves both IPv4 and IPv6.

use crate::error::{Error, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Bit width of an IPv4 address.
pub const IPV4_BITS: u8 = 32;
/// Bit width of an IPv6 address.
pub const IPV6_BITS: u8 = 128;
/// Byte length of an IPv4 address.
pub const IPV4_LEN: usize = 4;
/// Byte length of an IPv6 address.
pub const IPV6_LEN: usize = 16;

/// Interpret `addr` as an unsigned big-endian integer.
///
/// Returns the value and the bit width of the family (32 for 4 bytes, 128
/// for 16 bytes).
///
/// # Examples
/// ```
/// use cidr_split::models::to_integer;
/// assert_eq!(to_integer(&[10, 0, 0, 1]).unwrap(), (0x0A00_0001, 32));
/// ```
pub fn to_integer(addr: &[u8]) -> Result<(u128, u8)> {
    let bits = match addr.len() {
        IPV4_LEN => IPV4_BITS,
        IPV6_LEN => IPV6_BITS,
        len => return Err(Error::UnsupportedAddressLength(len)),
    };
    let value = addr
        .iter()
        .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte));
    Ok((value, bits))
}

/// Render `value` as a `bits / 8` byte big-endian address.
///
/// Bits above the family width are dropped.
pub fn from_integer(value: u128, bits: u8) -> Result<Vec<u8>> {
    let len = byte_len(bits)?;
    let bytes = value.to_be_bytes();
    Ok(bytes[IPV6_LEN - len..].to_vec())
}

/// Network mask with the top `prefix` bits of a `bits` wide address set.
pub fn netmask(bits: u8, prefix: u8) -> Result<u128> {
    if prefix > bits {
        return Err(Error::PrefixOverflow { prefix, bits });
    }
    Ok(family_max(bits) & !hostmask(bits, prefix))
}

/// Host mask: the low `bits - prefix` bits set.
///
/// `prefix` must not exceed `bits`.
pub fn hostmask(bits: u8, prefix: u8) -> u128 {
    let host_len = u32::from(bits.saturating_sub(prefix));
    if host_len == 0 {
        0
    } else {
        u128::MAX >> (128 - host_len)
    }
}

/// Largest address value of a `bits` wide family.
pub fn family_max(bits: u8) -> u128 {
    hostmask(bits, 0)
}

/// Integer value and bit width of a std address.
pub(crate) fn ip_to_integer(addr: IpAddr) -> (u128, u8) {
    match addr {
        IpAddr::V4(v4) => (u128::from(u32::from(v4)), IPV4_BITS),
        IpAddr::V6(v6) => (u128::from(v6), IPV6_BITS),
    }
}

/// Address of the same family as `family` holding `value`.
///
/// Bits above the family width are dropped.
pub(crate) fn ip_with_family(value: u128, family: IpAddr) -> IpAddr {
    match family {
        IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::from((value & family_max(IPV4_BITS)) as u32)),
        IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::from(value)),
    }
}

fn byte_len(bits: u8) -> Result<usize> {
    match bits {
        IPV4_BITS => Ok(IPV4_LEN),
        IPV6_BITS => Ok(IPV6_LEN),
        _ => Err(Error::UnsupportedAddressLength(usize::from(bits / 8))),
    }
}
