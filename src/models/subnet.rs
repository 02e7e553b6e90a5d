//! Allocated subnet data model.

use super::Ipv4;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Column headers, in presentation order.
pub const COLUMNS: [&str; 10] = [
    "#",
    "Hosts",
    "Total Hosts",
    "Subnet",
    "Prefix",
    "Mask",
    "First Host",
    "Last Host",
    "Broadcast",
    "Wildcard",
];

/// One allocated subnet. Fields follow the [`COLUMNS`] order after `#`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetRecord {
    /// Number of hosts that were requested.
    #[serde(rename = "Hosts")]
    pub requested_hosts: u32,
    /// Usable host addresses in the allocated block.
    #[serde(rename = "Total Hosts")]
    pub usable_hosts: u32,
    /// Network address of the block.
    #[serde(rename = "Subnet")]
    pub network: Ipv4Addr,
    /// CIDR prefix length.
    #[serde(rename = "Prefix", serialize_with = "serialize_prefix")]
    pub prefix: u8,
    #[serde(rename = "Mask")]
    pub mask: Ipv4Addr,
    #[serde(rename = "First Host")]
    pub first_host: Ipv4Addr,
    #[serde(rename = "Last Host")]
    pub last_host: Ipv4Addr,
    #[serde(rename = "Broadcast")]
    pub broadcast: Ipv4Addr,
    #[serde(rename = "Wildcard")]
    pub wildcard: Ipv4Addr,
}

fn serialize_prefix<S: Serializer>(prefix: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("/{prefix}"))
}

impl SubnetRecord {
    /// The block in CIDR notation.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network,
            mask: self.prefix,
        }
    }

    /// Display cells for this record at 1-based position `index`.
    pub fn cells(&self, index: usize) -> [String; 10] {
        [
            index.to_string(),
            self.requested_hosts.to_string(),
            self.usable_hosts.to_string(),
            self.network.to_string(),
            format!("/{}", self.prefix),
            self.mask.to_string(),
            self.first_host.to_string(),
            self.last_host.to_string(),
            self.broadcast.to_string(),
            self.wildcard.to_string(),
        ]
    }
}

impl fmt::Display for SubnetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {} hosts, {} - {})",
            self.cidr(),
            self.requested_hosts,
            self.usable_hosts,
            self.first_host,
            self.last_host
        )
    }
}
