//! Block arithmetic and subnet splitting.
//!
//! This module contains the operations on [`Network`](crate::Network) values:
//! - [`range`] - first/last address and address count
//! - [`navigation`] - aligned, next and previous blocks
//! - [`divide`] - halving and power-of-two splits
//! - [`split`] - exact count splits and partition checks
//! - [`enumerate`] - listing IPv4 addresses

mod divide;
mod enumerate;
mod navigation;
mod range;
mod split;

// Re-export public functions
pub use divide::{closest_power_of_two, divide, is_power_of_two, next_power_of_two, split_pow2};
pub use enumerate::enumerate_addresses;
pub use navigation::{current_subnet, next_subnet, previous_subnet};
pub use range::{address_count, address_range};
pub use split::{check_partition, split_by_host_count, split_exact_n};
