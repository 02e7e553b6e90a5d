//! IPv4 address arithmetic.
//!
//! Octet-level helpers used by the allocator: mask derivation from a prefix
//! length, dotted-quad parsing, offset addition with carry propagation and
//! single-step increment/decrement. [`Ipv4`] pairs an address with a prefix
//! length for CIDR input such as `172.16.0.0/24`.

use crate::error::{Result, VlsmError};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

const fn build_prefix_masks() -> [u32; 33] {
    let mut masks = [0u32; 33];
    let mut prefix = 1;
    while prefix <= MAX_LENGTH as usize {
        masks[prefix] = u32::MAX << (MAX_LENGTH as usize - prefix);
        prefix += 1;
    }
    masks
}

/// Subnet mask bits indexed by prefix length; entry 0 is the empty mask.
pub static PREFIX_MASKS: [u32; 33] = build_prefix_masks();

/// Subnet mask for a prefix length in `1..=32`.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use vlsm_calculator::models::mask_for_prefix;
/// assert_eq!(mask_for_prefix(26).unwrap(), Ipv4Addr::new(255, 255, 255, 192));
/// ```
pub fn mask_for_prefix(prefix: u8) -> Result<Ipv4Addr> {
    if !(1..=MAX_LENGTH).contains(&prefix) {
        return Err(VlsmError::InvalidPrefix(prefix));
    }
    Ok(Ipv4Addr::from(PREFIX_MASKS[prefix as usize]))
}

/// Parse a strict dotted-quad address: four `.` separated integers in `0..=255`.
pub fn parse_address(dotted: &str) -> Result<Ipv4Addr> {
    let malformed = || VlsmError::MalformedAddress(dotted.to_string());

    let tokens: Vec<&str> = dotted.trim().split('.').collect();
    if tokens.len() != 4 {
        return Err(malformed());
    }

    let mut octets = [0u8; 4];
    for (octet, token) in octets.iter_mut().zip(tokens) {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        *octet = token.parse().map_err(|_| malformed())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Add `amount` to the octet at `octet_index` (0 = most significant).
///
/// Overflow carries into the next more significant octet, each carried
/// octet keeping its value mod 256. A carry out of octet 0 fails with
/// [`VlsmError::AddressSpaceExhausted`], as does an `amount` too large to
/// add without wrapping.
pub fn add_offset_to_octet(address: Ipv4Addr, octet_index: usize, amount: u32) -> Result<Ipv4Addr> {
    if octet_index > 3 {
        return Err(VlsmError::InvalidOctetIndex(octet_index));
    }
    let exhausted = || VlsmError::AddressSpaceExhausted { address };

    let mut octets = address.octets().map(u32::from);
    let mut index = octet_index;
    let mut sum = octets[index].checked_add(amount).ok_or_else(exhausted)?;

    while sum > 255 {
        octets[index] = sum % 256;
        let carry = sum / 256;
        if index == 0 {
            return Err(exhausted());
        }
        index -= 1;
        sum = octets[index] + carry;
    }
    octets[index] = sum;

    Ok(Ipv4Addr::from(octets.map(|o| o as u8)))
}

/// The address directly after `address`.
pub fn increment_address(address: Ipv4Addr) -> Result<Ipv4Addr> {
    add_offset_to_octet(address, 3, 1)
}

/// The address directly before `address`, borrowing across octets.
///
/// Returns `None` for `0.0.0.0`.
pub fn decrement_address(address: Ipv4Addr) -> Option<Ipv4Addr> {
    let mut octets = address.octets();
    let lowest = octets.iter().rposition(|&o| o != 0)?;
    octets[lowest] -= 1;
    for octet in octets.iter_mut().skip(lowest + 1) {
        *octet = 255;
    }
    Some(Ipv4Addr::from(octets))
}

/// Wildcard mask: every mask octet complemented (`255 - octet`).
pub fn wildcard(mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(mask.octets().map(|o| 255 - o))
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash, PartialEq, PartialOrd)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| VlsmError::MalformedAddress(addr_cidr.to_string()))?;
        let addr = parse_address(addr)?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| VlsmError::MalformedAddress(addr_cidr.to_string()))?;
        if mask > MAX_LENGTH {
            return Err(VlsmError::InvalidPrefix(mask));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Subnet mask of this prefix as an address.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(PREFIX_MASKS[self.mask as usize])
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & PREFIX_MASKS[self.mask as usize])
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = PREFIX_MASKS[self.mask as usize];
        Ipv4Addr::from((u32::from(self.addr) & mask) | !mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_for_prefix() {
        assert_eq!(mask_for_prefix(1).unwrap(), Ipv4Addr::new(128, 0, 0, 0));
        assert_eq!(mask_for_prefix(8).unwrap(), Ipv4Addr::new(255, 0, 0, 0));
        assert_eq!(mask_for_prefix(16).unwrap(), Ipv4Addr::new(255, 255, 0, 0));
        assert_eq!(mask_for_prefix(23).unwrap(), Ipv4Addr::new(255, 255, 254, 0));
        assert_eq!(mask_for_prefix(26).unwrap(), Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(mask_for_prefix(30).unwrap(), Ipv4Addr::new(255, 255, 255, 252));
        assert_eq!(mask_for_prefix(32).unwrap(), Ipv4Addr::BROADCAST);
        assert!(matches!(mask_for_prefix(0), Err(VlsmError::InvalidPrefix(0))));
        assert!(matches!(mask_for_prefix(33), Err(VlsmError::InvalidPrefix(33))));
    }

    #[test]
    fn test_mask_has_exactly_prefix_leading_bits() {
        for p in 1..=32u8 {
            let bits = u32::from(mask_for_prefix(p).unwrap());
            assert_eq!(bits.leading_ones(), p as u32, "prefix /{p}");
            assert_eq!(bits.count_ones(), p as u32, "prefix /{p}");
        }
    }

    #[test]
    fn test_mask_and_wildcard_disjoint() {
        for p in 1..=32u8 {
            let mask = mask_for_prefix(p).unwrap();
            let wild = wildcard(mask);
            assert_eq!(u32::from(mask) & u32::from(wild), 0, "prefix /{p}");
            assert_eq!(u32::from(mask) | u32::from(wild), u32::MAX, "prefix /{p}");
        }
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(
            wildcard(Ipv4Addr::new(255, 255, 255, 192)),
            Ipv4Addr::new(0, 0, 0, 63)
        );
        // Complement per octet, even for a non-contiguous value.
        assert_eq!(
            wildcard(Ipv4Addr::new(255, 0, 255, 0)),
            Ipv4Addr::new(0, 255, 0, 255)
        );
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("172.16.0.0").unwrap(),
            Ipv4Addr::new(172, 16, 0, 0)
        );
        assert_eq!(
            parse_address(" 10.1.2.3 ").unwrap(),
            Ipv4Addr::new(10, 1, 2, 3)
        );
        for bad in [
            "999.1.1.1",
            "1.2.3",
            "1.2.3.4.5",
            "1..3.4",
            "a.b.c.d",
            "1.2.3.-4",
            "1.2.3.+4",
            "256.0.0.0",
            "",
        ] {
            assert!(
                matches!(parse_address(bad), Err(VlsmError::MalformedAddress(_))),
                "'{bad}' should be malformed"
            );
        }
    }

    #[test]
    fn test_add_offset_to_octet() {
        let ip = Ipv4Addr::new(172, 16, 0, 0);
        assert_eq!(
            add_offset_to_octet(ip, 3, 128).unwrap(),
            Ipv4Addr::new(172, 16, 0, 128)
        );
        assert_eq!(
            add_offset_to_octet(Ipv4Addr::new(172, 16, 0, 128), 3, 128).unwrap(),
            Ipv4Addr::new(172, 16, 1, 0)
        );
        assert_eq!(
            add_offset_to_octet(ip, 2, 4).unwrap(),
            Ipv4Addr::new(172, 16, 4, 0)
        );
    }

    #[test]
    fn test_add_offset_carries_through_every_octet() {
        assert_eq!(
            add_offset_to_octet(Ipv4Addr::new(10, 0, 255, 192), 3, 64).unwrap(),
            Ipv4Addr::new(10, 1, 0, 0)
        );
        assert_eq!(
            add_offset_to_octet(Ipv4Addr::new(10, 255, 255, 252), 3, 4).unwrap(),
            Ipv4Addr::new(11, 0, 0, 0)
        );
        assert_eq!(
            add_offset_to_octet(Ipv4Addr::new(10, 255, 255, 0), 2, 1).unwrap(),
            Ipv4Addr::new(11, 0, 0, 0)
        );
    }

    #[test]
    fn test_add_offset_past_first_octet_fails() {
        let top = Ipv4Addr::new(255, 255, 255, 252);
        assert!(matches!(
            add_offset_to_octet(top, 3, 4),
            Err(VlsmError::AddressSpaceExhausted { address }) if address == top
        ));
        assert!(add_offset_to_octet(Ipv4Addr::new(255, 0, 0, 0), 0, 1).is_err());
        assert!(increment_address(Ipv4Addr::BROADCAST).is_err());
    }

    #[test]
    fn test_add_offset_never_wraps() {
        let ip = Ipv4Addr::new(10, 0, 0, 255);
        assert!(matches!(
            add_offset_to_octet(ip, 3, u32::MAX),
            Err(VlsmError::AddressSpaceExhausted { address }) if address == ip
        ));
        assert!(matches!(
            add_offset_to_octet(Ipv4Addr::UNSPECIFIED, 0, 256),
            Err(VlsmError::AddressSpaceExhausted { .. })
        ));
        assert_eq!(
            add_offset_to_octet(Ipv4Addr::UNSPECIFIED, 3, 65_536).unwrap(),
            Ipv4Addr::new(0, 1, 0, 0)
        );
    }

    #[test]
    fn test_add_offset_rejects_octet_index_out_of_range() {
        assert!(matches!(
            add_offset_to_octet(Ipv4Addr::new(10, 0, 0, 0), 4, 1),
            Err(VlsmError::InvalidOctetIndex(4))
        ));
        assert!(matches!(
            add_offset_to_octet(Ipv4Addr::new(10, 0, 0, 0), usize::MAX, 1),
            Err(VlsmError::InvalidOctetIndex(usize::MAX))
        ));
    }

    #[test]
    fn test_decrement_address() {
        assert_eq!(
            decrement_address(Ipv4Addr::new(172, 16, 0, 128)),
            Some(Ipv4Addr::new(172, 16, 0, 127))
        );
        assert_eq!(
            decrement_address(Ipv4Addr::new(172, 16, 1, 0)),
            Some(Ipv4Addr::new(172, 16, 0, 255))
        );
        assert_eq!(
            decrement_address(Ipv4Addr::new(11, 0, 0, 0)),
            Some(Ipv4Addr::new(10, 255, 255, 255))
        );
        assert_eq!(decrement_address(Ipv4Addr::new(0, 0, 0, 1)), Some(Ipv4Addr::UNSPECIFIED));
        assert_eq!(decrement_address(Ipv4Addr::UNSPECIFIED), None);
    }

    #[test]
    fn test_increment_decrement_round_trip() {
        for ip in [
            Ipv4Addr::new(0, 0, 0, 0),
            Ipv4Addr::new(10, 0, 0, 255),
            Ipv4Addr::new(10, 0, 255, 255),
            Ipv4Addr::new(172, 16, 33, 7),
            Ipv4Addr::new(254, 255, 255, 255),
            Ipv4Addr::new(255, 255, 255, 254),
        ] {
            let next = increment_address(ip).unwrap();
            assert_eq!(u32::from(next), u32::from(ip) + 1);
            assert_eq!(decrement_address(next), Some(ip));
        }
    }

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(32), 1);
        assert_eq!(block_size(30), 4);
        assert_eq!(block_size(24), 256);
        assert_eq!(block_size(0), 1u64 << 32);
    }

    #[test]
    fn test_ipv4_new() {
        let net = Ipv4::new("172.16.0.0/24").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(net.mask, 24);
        assert_eq!(net.to_string(), "172.16.0.0/24");

        assert!(matches!(Ipv4::new("10.0.0.0"), Err(VlsmError::MalformedAddress(_))));
        assert!(matches!(Ipv4::new("10.0.0.0/x"), Err(VlsmError::MalformedAddress(_))));
        assert!(matches!(Ipv4::new("10.0.0.0/33"), Err(VlsmError::InvalidPrefix(33))));
        assert!(matches!(Ipv4::new("10.0.0.300/8"), Err(VlsmError::MalformedAddress(_))));
    }

    #[test]
    fn test_ipv4_lo_hi() {
        let net = Ipv4::new("10.6.2.80/22").unwrap();
        assert_eq!(net.lo(), Ipv4Addr::new(10, 6, 0, 0));
        assert_eq!(net.hi(), Ipv4Addr::new(10, 6, 3, 255));
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 252, 0));

        let all = Ipv4::new("0.0.0.0/0").unwrap();
        assert_eq!(all.hi(), Ipv4Addr::BROADCAST);
        assert_eq!(all.netmask(), Ipv4Addr::UNSPECIFIED);
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 >= ip3);
    }
}
