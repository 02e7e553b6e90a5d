//! VLSM allocation.
//!
//! Requirements are sorted largest first and packed into contiguous blocks
//! starting at the base address. Each block gets the smallest prefix whose
//! usable host count covers the requirement.

use crate::error::{Result, VlsmError};
use crate::models::{
    add_offset_to_octet, block_size, decrement_address, increment_address, mask_for_prefix,
    wildcard, SubnetRecord, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Network and broadcast addresses are reserved in every block, so the
/// smallest block handed out is a /30.
const MIN_HOST_BITS: u32 = 2;

/// Smallest prefix (and its usable host capacity) that fits `hosts`.
///
/// Never returns /31 or /32: one or two hosts get a /30 with capacity 2.
pub fn fit_prefix(hosts: i64) -> Result<(u8, u32)> {
    if hosts <= 0 {
        return Err(VlsmError::host_count(hosts, "must be greater than zero"));
    }
    if hosts > i64::from(u32::MAX) {
        return Err(VlsmError::PrefixUnderflow { hosts });
    }
    // ceil(log2(hosts + 2))
    let needed = (hosts as u64 + 2).next_power_of_two();
    let host_bits = needed.trailing_zeros().max(MIN_HOST_BITS);
    if host_bits >= MAX_LENGTH as u32 {
        return Err(VlsmError::PrefixUnderflow { hosts });
    }

    let prefix = MAX_LENGTH - host_bits as u8;
    let capacity = (1u32 << host_bits) - 2;
    Ok((prefix, capacity))
}

/// Address of the block following the `prefix` block at `network`.
///
/// The block size is added at the octet holding the prefix's last network
/// bit, carrying into higher octets as needed.
pub fn next_network(network: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr> {
    let octet_index = (prefix as usize - 1) / 8;
    let shift = 8 * (3 - octet_index);
    let increment = (block_size(prefix) >> shift) as u32;
    add_offset_to_octet(network, octet_index, increment)
}

/// True when the `prefix` block at `network` ends exactly at 255.255.255.255.
fn ends_at_top(network: Ipv4Addr, prefix: u8) -> bool {
    u64::from(u32::from(network)) + block_size(prefix) == 1u64 << MAX_LENGTH
}

/// Allocate one subnet per requirement, largest requirement first.
///
/// Records come back in allocation order (descending requirement), not the
/// caller's order. Every requirement is checked before anything is allocated.
pub fn allocate(base: Ipv4Addr, requirements: &[i64]) -> Result<Vec<SubnetRecord>> {
    log::info!(
        "#Start allocate() base={base} requirements={}",
        requirements.len()
    );

    if let Some(&bad) = requirements.iter().find(|&&r| r <= 0) {
        return Err(VlsmError::host_count(bad, "must be greater than zero"));
    }

    let mut sorted = requirements.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    // None once a block has ended at 255.255.255.255.
    let mut cursor = Some(base);
    let mut records = Vec::with_capacity(sorted.len());

    for hosts in sorted {
        let (prefix, usable_hosts) = fit_prefix(hosts)?;
        let network = cursor.ok_or(VlsmError::AddressSpaceExhausted {
            address: Ipv4Addr::BROADCAST,
        })?;
        let mask = mask_for_prefix(prefix)?;

        if u32::from(network) & !u32::from(mask) != 0 {
            log::warn!("Block {network}/{prefix} is not aligned to its prefix");
        }

        let broadcast = match next_network(network, prefix) {
            Ok(next) => {
                cursor = Some(next);
                decrement_address(next)
                    .ok_or(VlsmError::AddressSpaceExhausted { address: network })?
            }
            Err(VlsmError::AddressSpaceExhausted { .. }) if ends_at_top(network, prefix) => {
                cursor = None;
                Ipv4Addr::BROADCAST
            }
            Err(e) => return Err(e),
        };

        let first_host = increment_address(network)?;
        let last_host =
            decrement_address(broadcast).ok_or(VlsmError::AddressSpaceExhausted { address: network })?;

        log::debug!(
            "Allocated {network}/{prefix} for {hosts} hosts (capacity {usable_hosts}), broadcast {broadcast}"
        );

        records.push(SubnetRecord {
            requested_hosts: hosts as u32,
            usable_hosts,
            network,
            prefix,
            mask,
            first_host,
            last_host,
            broadcast,
            wildcard: wildcard(mask),
        });
    }

    log::info!("Allocated {} subnets", records.len());
    Ok(records)
}
