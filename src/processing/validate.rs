//! Base network validation.
//!
//! The base network for an allocation must be given in CIDR form and be a
//! usable network address.

use crate::error::{Result, VlsmError};
use crate::models::Ipv4;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CIDR_RE: Regex = Regex::new(r"^\d{1,3}(\.\d{1,3}){3}/\d{1,2}$").expect("Invalid Regex?");
}

/// Check that `net_id` (e.g. `172.16.0.0/24`) can seed an allocation.
pub fn validate_network(net_id: &str) -> Result<Ipv4> {
    let net_id = net_id.trim();
    if !CIDR_RE.is_match(net_id) {
        return Err(VlsmError::network(
            net_id,
            "not in CIDR notation (e.g. 192.168.1.0/24)",
        ));
    }
    let network = Ipv4::new(net_id)
        .map_err(|e| VlsmError::network(net_id, format!("not a valid IPv4 network ({e})")))?;

    if network.addr == network.hi() {
        return Err(VlsmError::network(
            net_id,
            "is the broadcast address of the network",
        ));
    }
    if network.addr != network.lo() {
        return Err(VlsmError::network(
            net_id,
            format!("is not a network address, did you mean {}/{}?", network.lo(), network.mask),
        ));
    }
    if network.addr.is_loopback() {
        return Err(VlsmError::network(
            net_id,
            "is a loopback address (127.0.0.0/8), reserved for internal host communication",
        ));
    }
    if network.addr.is_link_local() {
        return Err(VlsmError::network(
            net_id,
            "is a link-local address (169.254.0.0/16), used for auto-configuration and not routable",
        ));
    }
    if network.addr.is_unspecified() {
        return Err(VlsmError::network(
            net_id,
            "is the unspecified address (0.0.0.0) and cannot be assigned to any device",
        ));
    }

    log::debug!("Validated base network {network}");
    Ok(network)
}
