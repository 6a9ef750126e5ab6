//! Static configuration: connection limits and attribute database handles.
//!
//! The attribute handles mirror the generated attribute database of the
//! hosting application; only the slots this core touches are listed.

/// Maximum number of simultaneous connections the stack is configured for.
/// The session table holds exactly this many slots.
pub const MAX_CONNECTIONS: usize = 4;

/// Attribute handle of the 8-byte System ID characteristic value, written
/// once at boot.
pub const GATTDB_SYSTEM_ID: u16 = 18;
