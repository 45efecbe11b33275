//! Domain models for CIDR arithmetic.
//!
//! This module contains the core data structures and conversions:
//! - [`Network`] - address block in CIDR notation, IPv4 or IPv6
//! - [`to_integer`] / [`from_integer`] - byte address to `u128` and back

mod integer;
mod network;

// Re-export public types
pub use integer::{
    family_max, from_integer, hostmask, netmask, to_integer, IPV4_BITS, IPV4_LEN, IPV6_BITS,
    IPV6_LEN,
};
pub use network::Network;
