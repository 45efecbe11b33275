// cargo watch -x 'fmt' -x 'test'

//! CIDR block arithmetic: address ranges, counts and splitting a block into
//! an exact number of contiguous subnets, for IPv4 and IPv6.
//!
//! The functions taking `&str` parse the CIDR first and return
//! [`Error::Parse`] for malformed text; everything else works on [`Network`].

mod error;
pub mod models;
pub mod processing;

pub use error::{Error, Result};
pub use models::Network;

/// Split a CIDR literal into exactly `n` subnets.
///
/// # Examples
/// ```
/// let subnets = cidr_split::split_n("10.0.0.0/24", 4).unwrap();
/// assert_eq!(subnets[1].to_string(), "10.0.0.64/26");
/// ```
pub fn split_n(cidr: &str, n: usize) -> Result<Vec<Network>> {
    let network = Network::parse(cidr)?;
    processing::split_exact_n(&network, n)
}

/// Split a CIDR literal into subnets of about `hosts_per_subnet` addresses.
pub fn split_by_number(cidr: &str, hosts_per_subnet: u128) -> Result<Vec<Network>> {
    let network = Network::parse(cidr)?;
    processing::split_by_host_count(&network, hosts_per_subnet)
}

/// Number of addresses in a CIDR literal.
pub fn address_count_cidr(cidr: &str) -> Result<u128> {
    Ok(processing::address_count(&Network::parse(cidr)?))
}

/// Every address of an IPv4 CIDR literal.
pub fn ip_addresses(cidr: &str) -> Result<Vec<String>> {
    processing::enumerate_addresses(&Network::parse(cidr)?)
}
