//! Abstract boundary to the vendor BLE stack.
//!
//! The stack is a black box that delivers discriminated [`RawEvent`]
//! records and accepts the imperative commands of [`StackCommands`]. Radio
//! timing, encryption and L2CAP stay behind this boundary; the core only
//! consumes the event stream and issues commands.

use crate::advertising::{AdvHandle, Connectable, Discoverable};

/// Vendor status word returned by every stack command. Zero is success,
/// anything else is command-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u16);

impl Status {
    pub const OK: Status = Status(0);

    pub fn is_ok(self) -> bool {
        self == Status::OK
    }
}

/// Device address, index 0 holding the least significant byte (the stack's
/// address-array convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BdAddr(pub [u8; 6]);

/// Address type reported alongside the identity address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressType {
    Public,
    Random,
}

/// Raw stack events consumed by the dispatcher.
///
/// Payload-carrying variants borrow from the stack's event buffer and are
/// valid only for the duration of one dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawEvent<'a> {
    /// The device has started and the radio is ready. No stack command may
    /// be issued before this event.
    SystemBoot,
    /// A new connection was opened.
    ConnectionOpened { connection: u16 },
    /// Connection parameters were (re)negotiated.
    ConnectionParameters { connection: u16 },
    /// A remote GATT client wrote an attribute value.
    AttributeValue {
        connection: u16,
        attribute: u16,
        offset: u16,
        value: &'a [u8],
    },
    /// Notification/indication subscription state changed (CCCD write).
    /// The flag fields mirror the vendor record; this core only consumes
    /// `characteristic`.
    CharacteristicStatus {
        connection: u16,
        characteristic: u16,
        status_flags: u8,
        client_config_flags: u16,
    },
    /// A connection was closed.
    ConnectionClosed { connection: u16, reason: u16 },
    /// Any vendor event kind this core does not consume.
    Unknown { id: u32 },
}

/// Imperative commands the core issues to the stack.
///
/// Every command returns the vendor status. The dispatcher treats any
/// non-success during boot setup or the disconnect restart as fatal; see
/// the [`crate::dispatcher`] module docs.
pub trait StackCommands {
    /// Identity (link-layer) address of the local device.
    fn identity_address(&mut self) -> Result<(BdAddr, AddressType), Status>;

    /// Write `value` into the attribute database at `attribute`, starting
    /// at `offset`.
    fn write_attribute(&mut self, attribute: u16, offset: u16, value: &[u8]) -> Result<(), Status>;

    /// Allocate an advertising set.
    fn create_advertising_set(&mut self) -> Result<AdvHandle, Status>;

    /// Configure advertising timing. Intervals are in 0.625 ms units,
    /// `duration` in 10 ms units with 0 meaning indefinite, `max_events`
    /// 0 meaning unlimited.
    fn set_advertising_timing(
        &mut self,
        handle: AdvHandle,
        interval_min: u32,
        interval_max: u32,
        duration: u16,
        max_events: u8,
    ) -> Result<(), Status>;

    /// Start advertising on a previously created set.
    fn start_advertising(
        &mut self,
        handle: AdvHandle,
        discoverable: Discoverable,
        connectable: Connectable,
    ) -> Result<(), Status>;
}
