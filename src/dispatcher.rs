//! Stack event consumption and advertising lifecycle.
//!
//! The dispatcher is the sole consumer of the stack's event stream. The
//! hosting runtime invokes [`Dispatcher::handle_event`] synchronously once
//! per delivered event; each event is processed to completion without
//! blocking. The dispatcher owns the session table and the advertising set,
//! normalizes attribute writes into [`AppEvent`]s for the application
//! callback, and keeps the peripheral connectable by restarting advertising
//! after every disconnect.
//!
//! Stack command failures during boot setup and the disconnect restart are
//! fatal: they mean the stack is in an unexpected state with no fallback
//! path, so `unwrap!` aborts.

use crate::advertising::{AdvHandle, AdvertisingConfig};
use crate::config;
use crate::session::SessionTable;
use crate::stack::{RawEvent, StackCommands};
use crate::system_id;

/// Normalized event delivered to the application callback.
///
/// Every variant carries the originating connection handle. `Write` borrows
/// its payload from the stack's event buffer; the slice is valid only for
/// the duration of the callback invocation and must be copied if the
/// application needs to retain it. Only `Write` is emitted by the current
/// flow; the remaining variants define the delivery contract for future
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppEvent<'a> {
    Connect {
        connection: u16,
    },
    MtuExchange {
        connection: u16,
        client_rx_mtu: u16,
    },
    Disconnect {
        connection: u16,
    },
    Write {
        connection: u16,
        attribute: u16,
        offset: u16,
        data: &'a [u8],
    },
    TxComplete {
        connection: u16,
    },
}

/// The event dispatcher. One instance per process, constructed at startup
/// before the stack delivers its first event.
pub struct Dispatcher<C, F>
where
    C: StackCommands,
    F: for<'a> FnMut(&AppEvent<'a>),
{
    stack: C,
    sessions: SessionTable,
    adv_config: AdvertisingConfig,
    adv_handle: Option<AdvHandle>,
    callback: F,
}

impl<C, F> Dispatcher<C, F>
where
    C: StackCommands,
    F: for<'a> FnMut(&AppEvent<'a>),
{
    /// `callback` is invoked synchronously from [`handle_event`] and takes
    /// the place of an opaque context pointer: capture whatever application
    /// state it needs.
    ///
    /// [`handle_event`]: Dispatcher::handle_event
    pub fn new(stack: C, adv_config: AdvertisingConfig, callback: F) -> Self {
        Self {
            stack,
            sessions: SessionTable::new(),
            adv_config,
            adv_handle: None,
            callback,
        }
    }

    /// Single entry point for the stack's event stream.
    pub fn handle_event(&mut self, event: &RawEvent<'_>) {
        match *event {
            RawEvent::SystemBoot => self.on_boot(),
            // Reserved extension points, no state change required here.
            RawEvent::ConnectionOpened { connection } => {
                trace!("DISPATCH: connection {} opened", connection);
            }
            RawEvent::ConnectionParameters { connection } => {
                trace!("DISPATCH: connection {} parameters updated", connection);
            }
            RawEvent::AttributeValue {
                connection,
                attribute,
                offset,
                value,
            } => {
                let evt = AppEvent::Write {
                    connection,
                    attribute,
                    offset,
                    data: value,
                };
                (self.callback)(&evt);
            }
            RawEvent::CharacteristicStatus {
                connection,
                characteristic,
                ..
            } => {
                // Bookkeeping only, nothing is emitted to the application.
                self.sessions.update_characteristic(connection, characteristic);
            }
            RawEvent::ConnectionClosed { connection, reason } => {
                debug!("DISPATCH: connection {} closed, reason {}", connection, reason);
                self.restart_advertising();
            }
            RawEvent::Unknown { id } => {
                trace!("DISPATCH: ignoring event kind {}", id);
            }
        }
    }

    /// Boot-time setup, run exactly once per process lifetime. A duplicate
    /// boot event is ignored.
    fn on_boot(&mut self) {
        if self.adv_handle.is_some() {
            warn!("DISPATCH: duplicate boot event ignored");
            return;
        }

        // Extract the unique ID from the device address and publish it.
        let (address, _address_type) = unwrap!(self.stack.identity_address());
        let system_id = system_id::from_address(&address);
        unwrap!(self
            .stack
            .write_attribute(config::GATTDB_SYSTEM_ID, 0, &system_id));

        let handle = unwrap!(self.stack.create_advertising_set());
        unwrap!(self.stack.set_advertising_timing(
            handle,
            self.adv_config.interval_min,
            self.adv_config.interval_max,
            self.adv_config.duration,
            self.adv_config.max_events,
        ));
        unwrap!(self.stack.start_advertising(
            handle,
            self.adv_config.discoverable,
            self.adv_config.connectable
        ));
        self.adv_handle = Some(handle);
        info!("ADV: advertising started on set {}", handle.0);
    }

    /// Restart advertising with the boot parameters so the peripheral
    /// becomes connectable again after a client disconnects.
    fn restart_advertising(&mut self) {
        let handle = unwrap!(self.adv_handle, "disconnect before boot");
        unwrap!(self.stack.start_advertising(
            handle,
            self.adv_config.discoverable,
            self.adv_config.connectable
        ));
        info!("ADV: advertising restarted on set {}", handle.0);
    }

    pub fn sessions(&self) -> &SessionTable {
        &self.sessions
    }

    /// Connect-path access to session bookkeeping. The dispatcher itself
    /// leaves connection-opened events to the hosting application.
    pub fn sessions_mut(&mut self) -> &mut SessionTable {
        &mut self.sessions
    }

    /// Handle of the advertising set, `None` until the boot event.
    pub fn advertising_handle(&self) -> Option<AdvHandle> {
        self.adv_handle
    }

    pub fn stack(&self) -> &C {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut C {
        &mut self.stack
    }
}
