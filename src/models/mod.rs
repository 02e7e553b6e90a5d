//! Domain models for VLSM calculation.
//!
//! - [`Ipv4`] and the address arithmetic helpers
//! - [`SubnetRecord`] - one allocated subnet, as handed to output

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    add_offset_to_octet, block_size, decrement_address, increment_address, mask_for_prefix,
    parse_address, wildcard, Ipv4, MAX_LENGTH, PREFIX_MASKS,
};
pub use subnet::{SubnetRecord, COLUMNS};
