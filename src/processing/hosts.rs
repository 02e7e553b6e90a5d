//! Host list parsing.
//!
//! Turns `120,2,23,8,2x10` into individual host requirements. `NxM` means
//! M subnets of N hosts each.

use crate::error::{Result, VlsmError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref REPEAT_RE: Regex =
        Regex::new(r"^\s*(-?\d+)\s*[xX]\s*(-?\d+)\s*$").expect("Invalid Regex?");
}

/// Upper bound on expanded subnets; the smallest block is a /30, so no
/// more than 2^30 of them fit in the address space.
const MAX_SUBNETS: usize = 1 << 30;

/// Expand a comma separated host list, supporting `NxM` repetition.
pub fn expand_hosts(hosts: &str) -> Result<Vec<i64>> {
    let mut expanded = Vec::new();

    for token in hosts.split(',') {
        if let Some(caps) = REPEAT_RE.captures(token) {
            let number = parse_count(token, &caps[1])?;
            let repetitions = parse_count(token, &caps[2])?;
            if number <= 0 || repetitions <= 0 {
                return Err(VlsmError::host_count(
                    token.trim(),
                    "host values must be greater than zero in 'NxM'",
                ));
            }
            let repetitions = repetitions as usize;
            if repetitions > MAX_SUBNETS - expanded.len() {
                return Err(VlsmError::host_count(
                    token.trim(),
                    format!("expands past the limit of {MAX_SUBNETS} subnets"),
                ));
            }
            log::trace!("expand {token} -> {repetitions} x {number}");
            expanded.extend(std::iter::repeat(number).take(repetitions));
        } else if token.contains(['x', 'X']) {
            return Err(VlsmError::host_count(
                token.trim(),
                "invalid host range, use 'NxM' with positive integers",
            ));
        } else {
            let value = parse_count(token, token.trim())?;
            if value <= 0 {
                return Err(VlsmError::host_count(
                    token.trim(),
                    "must be greater than zero",
                ));
            }
            if expanded.len() >= MAX_SUBNETS {
                return Err(VlsmError::host_count(
                    token.trim(),
                    format!("expands past the limit of {MAX_SUBNETS} subnets"),
                ));
            }
            expanded.push(value);
        }
    }

    log::debug!("Expanded host list '{hosts}' to {} subnets", expanded.len());
    Ok(expanded)
}

fn parse_count(token: &str, digits: &str) -> Result<i64> {
    digits
        .parse()
        .map_err(|_| VlsmError::host_count(token.trim(), "is not a valid number"))
}
