//! Reverse lookup: describe the network a single CIDR address belongs to.

use crate::error::Result;
use crate::models::{decrement_address, increment_address, Ipv4};
use std::net::Ipv4Addr;

/// Properties of the network containing a CIDR input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// The input as given, host bits included.
    pub input: Ipv4,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub mask: Ipv4Addr,
    /// First and last usable host; `None` for /31 and /32.
    pub host_range: Option<(Ipv4Addr, Ipv4Addr)>,
    /// Usable hosts (addresses minus network and broadcast).
    pub total_hosts: u64,
}

impl LookupResult {
    /// Property/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let host_range = match self.host_range {
            Some((first, last)) => format!("{first} - {last}"),
            None => "n/a".to_string(),
        };
        vec![
            ("Network Address", self.network.to_string()),
            ("Broadcast Address", self.broadcast.to_string()),
            ("Subnet Mask", self.mask.to_string()),
            ("Host Range", host_range),
            ("Total Hosts", self.total_hosts.to_string()),
        ]
    }
}

/// Look up network, broadcast, mask and host range for `cidr`.
///
/// Host bits in the input are allowed; `10.1.2.3/8` describes `10.0.0.0/8`.
pub fn reverse_lookup(cidr: &str) -> Result<LookupResult> {
    let input = Ipv4::new(cidr)?;
    let network = input.lo();
    let broadcast = input.hi();
    let addresses = 1u64 << (32 - u32::from(input.mask));

    let host_range = if input.mask < 31 {
        let first = increment_address(network)?;
        decrement_address(broadcast).map(|last| (first, last))
    } else {
        None
    };

    log::debug!("Reverse lookup {input} -> {network}/{}", input.mask);
    Ok(LookupResult {
        input,
        network,
        broadcast,
        mask: input.netmask(),
        host_range,
        total_hosts: addresses.saturating_sub(2),
    })
}
