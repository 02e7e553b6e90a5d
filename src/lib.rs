//! VLSM calculator.
//!
//! Given a base network and a list of host counts, [`allocate_subnets`]
//! sizes each subnet to the smallest fitting prefix and packs the blocks,
//! largest first, into contiguous address ranges.
//!
//! - [`models`] - address arithmetic and the [`SubnetRecord`] result
//! - [`processing`] - allocation, host list expansion, validation, lookup
//! - [`output`] - console tables and file exports

mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod output;
pub mod processing;

pub use app::{calculate, run};
pub use error::{Result, VlsmError};
pub use models::SubnetRecord;

/// Allocate subnets for `requirements` starting at the dotted-quad `base_address`.
///
/// # Examples
/// ```
/// let records = vlsm_calculator::allocate_subnets("172.16.0.0", &[120, 2, 23, 8]).unwrap();
/// assert_eq!(records[0].cidr().to_string(), "172.16.0.0/25");
/// assert_eq!(records[1].cidr().to_string(), "172.16.0.128/27");
/// ```
pub fn allocate_subnets(base_address: &str, requirements: &[i64]) -> Result<Vec<SubnetRecord>> {
    let base = models::parse_address(base_address)?;
    processing::allocate(base, requirements)
}
