//! Per-connection session bookkeeping.

use heapless::Vec;

use crate::config::MAX_CONNECTIONS;

/// Connection handle 0 is reserved by the stack and marks an unused slot.
pub const INVALID_CONNECTION: u16 = 0;

/// Subscription state of one BLE link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    pub connection_handle: u16,
    /// Handle of the characteristic whose subscription status changed most
    /// recently on this link. 0 until the first status-change event.
    pub characteristic_handle: u16,
}

/// Session table errors. Only the connect path can fail; status-change
/// bookkeeping never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// Connection handle 0 is reserved.
    InvalidHandle,
    /// All [`MAX_CONNECTIONS`] slots are in use.
    TableFull,
}

/// Fixed-capacity map from connection handle to session state.
///
/// Capacity equals the stack's configured maximum number of simultaneous
/// connections and lookups are linear scans. Slots are claimed by the
/// connect path via [`bind`](SessionTable::bind) and never removed: a
/// disconnect does not clear `characteristic_handle`, so a later link
/// reusing the same connection handle observes the stale value until the
/// next status-change event overwrites it.
pub struct SessionTable {
    slots: Vec<Session, MAX_CONNECTIONS>,
}

impl SessionTable {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Claim a slot for a newly opened link. Idempotent when the handle is
    /// already bound.
    pub fn bind(&mut self, connection_handle: u16) -> Result<(), SessionError> {
        if connection_handle == INVALID_CONNECTION {
            error!("SESSION: refusing to bind reserved handle 0");
            return Err(SessionError::InvalidHandle);
        }
        if self.find(connection_handle).is_some() {
            return Ok(());
        }
        let session = Session {
            connection_handle,
            characteristic_handle: 0,
        };
        if self.slots.push(session).is_err() {
            error!(
                "SESSION: table full, cannot bind connection {}",
                connection_handle
            );
            return Err(SessionError::TableFull);
        }
        debug!("SESSION: bound connection {}", connection_handle);
        Ok(())
    }

    /// Linear scan by connection handle.
    pub fn find(&self, connection_handle: u16) -> Option<&Session> {
        self.slots
            .iter()
            .find(|s| s.connection_handle == connection_handle)
    }

    /// Record the characteristic whose subscription status changed last.
    ///
    /// Status events may race session bookkeeping, so an unknown connection
    /// handle is a silent no-op rather than an error.
    pub fn update_characteristic(&mut self, connection_handle: u16, new_handle: u16) {
        if let Some(session) = self
            .slots
            .iter_mut()
            .find(|s| s.connection_handle == connection_handle)
        {
            session.characteristic_handle = new_handle;
        }
    }

    /// Number of bound sessions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over bound sessions.
    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.slots.iter()
    }
}

impl Default for SessionTable {
    fn default() -> Self {
        Self::new()
    }
}
