//! Listing every address of an IPv4 block.

use super::range::integer_range;
use crate::error::{Error, Result};
use crate::models::{Network, IPV4_BITS, IPV6_LEN};

/// Every address of `network` as a string, lowest first.
///
/// IPv4 only: a 128-bit block fails with
/// [`Error::UnsupportedAddressLength`]. Time and memory grow with the block
/// size, a `/0` yields four billion strings.
pub fn enumerate_addresses(network: &Network) -> Result<Vec<String>> {
    if network.bits() != IPV4_BITS {
        return Err(Error::UnsupportedAddressLength(IPV6_LEN));
    }
    let (first, last) = integer_range(network);
    log::debug!(
        "enumerate_addresses({network}) listing {} addresses",
        last - first + 1
    );
    Ok((first..=last)
        .map(|value| network.with_integer(value, IPV4_BITS).addr().to_string())
        .collect())
}
