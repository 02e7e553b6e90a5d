//! VLSM processing logic.
//!
//! - [`allocator`] - sizing and packing subnets
//! - [`hosts`] - host list expansion
//! - [`lookup`] - reverse lookup of a single CIDR
//! - [`validate`] - base network checks

mod allocator;
mod hosts;
mod lookup;
mod validate;

// Re-export public functions
pub use allocator::{allocate, fit_prefix, next_network};
pub use hosts::expand_hosts;
pub use lookup::{reverse_lookup, LookupResult};
pub use validate::validate_network;
