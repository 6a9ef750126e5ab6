//! Shared test fixtures: a stack double that records every issued command.

#![allow(dead_code)]

use acp_ble_core::advertising::{AdvHandle, Connectable, Discoverable};
use acp_ble_core::stack::{AddressType, BdAddr, StackCommands, Status};

/// Address used by most scenarios, index 0 = least significant byte.
pub const TEST_ADDRESS: [u8; 6] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];

/// One recorded stack command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    WriteAttribute {
        attribute: u16,
        offset: u16,
        value: Vec<u8>,
    },
    CreateAdvertisingSet,
    SetAdvertisingTiming {
        handle: u8,
        interval_min: u32,
        interval_max: u32,
        duration: u16,
        max_events: u8,
    },
    StartAdvertising {
        handle: u8,
        discoverable: Discoverable,
        connectable: Connectable,
    },
}

/// Test double for the vendor stack: answers every command successfully
/// (unless told to fail) and keeps a log of everything issued.
pub struct MockStack {
    pub address: BdAddr,
    pub commands: Vec<Command>,
    /// When set, the next command returns this status instead of succeeding.
    pub fail_next: Option<Status>,
    next_adv_handle: u8,
}

impl MockStack {
    pub fn new(address: [u8; 6]) -> Self {
        Self {
            address: BdAddr(address),
            commands: Vec::new(),
            fail_next: None,
            next_adv_handle: 0,
        }
    }

    fn check_fail(&mut self) -> Result<(), Status> {
        match self.fail_next.take() {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }

    /// All recorded advertising-start commands, in order.
    pub fn advertising_starts(&self) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::StartAdvertising { .. }))
            .collect()
    }
}

impl StackCommands for MockStack {
    fn identity_address(&mut self) -> Result<(BdAddr, AddressType), Status> {
        self.check_fail()?;
        Ok((self.address, AddressType::Public))
    }

    fn write_attribute(&mut self, attribute: u16, offset: u16, value: &[u8]) -> Result<(), Status> {
        self.check_fail()?;
        self.commands.push(Command::WriteAttribute {
            attribute,
            offset,
            value: value.to_vec(),
        });
        Ok(())
    }

    fn create_advertising_set(&mut self) -> Result<AdvHandle, Status> {
        self.check_fail()?;
        self.commands.push(Command::CreateAdvertisingSet);
        let handle = self.next_adv_handle;
        self.next_adv_handle += 1;
        Ok(AdvHandle(handle))
    }

    fn set_advertising_timing(
        &mut self,
        handle: AdvHandle,
        interval_min: u32,
        interval_max: u32,
        duration: u16,
        max_events: u8,
    ) -> Result<(), Status> {
        self.check_fail()?;
        self.commands.push(Command::SetAdvertisingTiming {
            handle: handle.0,
            interval_min,
            interval_max,
            duration,
            max_events,
        });
        Ok(())
    }

    fn start_advertising(
        &mut self,
        handle: AdvHandle,
        discoverable: Discoverable,
        connectable: Connectable,
    ) -> Result<(), Status> {
        self.check_fail()?;
        self.commands.push(Command::StartAdvertising {
            handle: handle.0,
            discoverable,
            connectable,
        });
        Ok(())
    }
}

/// Owned copy of a delivered `Write` event, for inspection after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub connection: u16,
    pub attribute: u16,
    pub offset: u16,
    pub data: Vec<u8>,
}
