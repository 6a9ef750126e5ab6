//! System ID derivation.

use crate::stack::BdAddr;

/// Length of the System ID attribute value.
pub const SYSTEM_ID_LEN: usize = 8;

/// Derive the 8-byte EUI-64 style System ID from the 6-byte device address.
///
/// The address bytes are reversed and the fixed `0xFF 0xFE` pair is
/// inserted in the middle (OUI to EUI-64 expansion):
/// `[a5, a4, a3, 0xFF, 0xFE, a2, a1, a0]`.
pub fn from_address(address: &BdAddr) -> [u8; SYSTEM_ID_LEN] {
    let a = &address.0;
    [a[5], a[4], a[3], 0xFF, 0xFE, a[2], a[1], a[0]]
}
