//! Splitting a block into an exact number of subnets.
//!
//! [`split_exact_n`] first splits into the largest power of two below the
//! request, then divides blocks from the tail towards the head until the
//! count is reached. The blocks near the end of the range are the ones that
//! end up smaller.

use super::divide::{closest_power_of_two, divide, is_power_of_two, split_pow2};
use super::range::{address_count, integer_range};
use crate::error::{Error, Result};
use crate::models::Network;
use itertools::Itertools;

/// Split `network` into exactly `n` contiguous, non overlapping subnets in
/// ascending order.
///
/// `n <= 1` or `n` larger than the number of addresses in the block returns
/// the block unchanged as the only element.
///
/// # Examples
/// ```
/// use cidr_split::{processing::split_exact_n, Network};
/// let net = Network::parse("10.0.0.0/24").unwrap();
/// let subnets: Vec<String> = split_exact_n(&net, 3)
///     .unwrap()
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(subnets, ["10.0.0.0/25", "10.0.0.128/26", "10.0.0.192/26"]);
/// ```
pub fn split_exact_n(network: &Network, n: usize) -> Result<Vec<Network>> {
    let available = address_count(network);
    if n <= 1 || u128::try_from(n).map_or(true, |n| n > available) {
        log::debug!(
            "split_exact_n({network}, {n}) returns the block unchanged, {available} addresses"
        );
        return Ok(vec![*network]);
    }

    // 3 rounds up to 4 in split_pow2, so it takes the refining path
    if is_power_of_two(n) || (is_power_of_two(n - 1) && closest_power_of_two(n) < n) {
        return split_pow2(network, n);
    }

    let lower = prev_power_of_two(n);
    let mut subnets = split_pow2(network, lower)?;
    log::debug!("split_exact_n({network}, {n}) refining {lower} subnets");

    while subnets.len() < n {
        let mut pairs: Vec<[Network; 2]> = Vec::new();
        for (level, subnet) in subnets.iter().rev().enumerate() {
            pairs.push(divide(subnet)?);
            let kept = subnets.len() - (level + 1);
            if kept + 2 * pairs.len() == n {
                log::trace!(
                    "split_exact_n({network}, {n}) divided the last {} subnets",
                    pairs.len()
                );
                let mut refined = subnets[..kept].to_vec();
                refined.extend(pairs.iter().rev().flatten());
                return Ok(refined);
            }
        }
        subnets = pairs.iter().rev().flatten().copied().collect();
    }
    Ok(subnets)
}

/// Split `network` into subnets of about `hosts_per_subnet` addresses each.
///
/// The subnet count is the block size divided by `hosts_per_subnet`,
/// rounded down, and the split is done by [`split_exact_n`].
pub fn split_by_host_count(network: &Network, hosts_per_subnet: u128) -> Result<Vec<Network>> {
    if hosts_per_subnet == 0 {
        log::warn!("split_by_host_count({network}, 0) returns the block unchanged");
        return Ok(vec![*network]);
    }
    let n = address_count(network) / hosts_per_subnet;
    split_exact_n(network, usize::try_from(n).unwrap_or(usize::MAX))
}

/// Check that `subnets` exactly covers `parent`: same family, ascending,
/// no overlap and no gap.
pub fn check_partition(parent: &Network, subnets: &[Network]) -> Result<()> {
    let (first, last) = match (subnets.first(), subnets.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(Error::InvalidPartition(format!("no subnets for {parent}"))),
    };
    if let Some(other) = subnets.iter().find(|s| s.bits() != parent.bits()) {
        return Err(Error::InvalidPartition(format!(
            "{other} is not in the address family of {parent}"
        )));
    }

    let (parent_first, parent_last) = integer_range(parent);
    if integer_range(first).0 != parent_first {
        return Err(Error::InvalidPartition(format!(
            "{first} does not start at {}",
            parent.lo()
        )));
    }
    if integer_range(last).1 != parent_last {
        return Err(Error::InvalidPartition(format!(
            "{last} does not end at {}",
            parent.hi()
        )));
    }

    for (a, b) in subnets.iter().tuple_windows() {
        let (_, a_last) = integer_range(a);
        let (b_first, _) = integer_range(b);
        match a_last.checked_add(1) {
            Some(next) if next == b_first => {}
            Some(next) if next < b_first => {
                return Err(Error::InvalidPartition(format!("gap between {a} and {b}")));
            }
            _ => {
                return Err(Error::InvalidPartition(format!(
                    "{b} overlaps or precedes {a}"
                )));
            }
        }
    }
    Ok(())
}

/// Largest power of two not above `n`, `n > 0`.
fn prev_power_of_two(n: usize) -> usize {
    1 << (usize::BITS - 1 - n.leading_zeros())
}
