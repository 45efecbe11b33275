//! Binary division and power-of-two splitting.

use super::navigation::{current_subnet, next_subnet};
use crate::error::{Error, Result};
use crate::models::Network;

/// Split `network` into its two halves, one bit longer prefix each.
///
/// Fails with [`Error::PrefixOverflow`] for a host route.
pub fn divide(network: &Network) -> Result<[Network; 2]> {
    let prefix = network.mask() + 1;
    if prefix > network.bits() {
        return Err(Error::PrefixOverflow {
            prefix,
            bits: network.bits(),
        });
    }
    let left = current_subnet(network, prefix)?;
    let (right, _) = next_subnet(&left, prefix)?;
    Ok([left, right])
}

/// Split `network` into the power of two closest to `n` equal blocks.
///
/// When that power of two is smaller than `n`, the last block is divided
/// once more, giving one extra (half sized) block at the end.
pub fn split_pow2(network: &Network, n: usize) -> Result<Vec<Network>> {
    let count = closest_power_of_two(n).max(1);
    // at most 128 + 63, current_subnet rejects anything past the family width
    let prefix = network.mask() + count.trailing_zeros() as u8;
    log::debug!("split_pow2({network}, {n}) into {count} x /{prefix}");

    let mut subnet = current_subnet(network, prefix)?;
    let mut subnets = Vec::with_capacity(count + 1);
    subnets.push(subnet);
    for _ in 1..count {
        (subnet, _) = next_subnet(&subnet, prefix)?;
        subnets.push(subnet);
    }

    if subnets.len() < n {
        if let Some(last) = subnets.pop() {
            subnets.extend(divide(&last)?);
        }
    }
    Ok(subnets)
}

/// True for 1, 2, 4, 8, ...
pub fn is_power_of_two(x: usize) -> bool {
    x != 0 && (x & (x - 1)) == 0
}

/// Smallest power of two not below `v`; zero for zero.
///
/// Saturates at the top bit of `usize`.
pub fn next_power_of_two(v: usize) -> usize {
    if v == 0 {
        return 0;
    }
    v.checked_next_power_of_two()
        .unwrap_or(1 << (usize::BITS - 1))
}

/// Power of two nearest to `v`, ties going to the larger one.
///
/// # Examples
/// ```
/// use cidr_split::processing::closest_power_of_two;
/// assert_eq!(closest_power_of_two(5), 4);
/// assert_eq!(closest_power_of_two(6), 8);
/// ```
pub fn closest_power_of_two(v: usize) -> usize {
    let next = next_power_of_two(v);
    let prev = next / 2;
    if v.saturating_sub(prev) < next.saturating_sub(v) {
        prev
    } else {
        next
    }
}
