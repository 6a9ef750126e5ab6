#![no_std]

//! BLE peripheral session and event core.
//!
//! This library is the layer between a vendor BLE stack and the application
//! logic of a peripheral: it tracks per-connection session state, normalizes
//! the stack's heterogeneous event stream into one application event
//! contract, and drives the advertising lifecycle (start at boot, restart
//! after every disconnect).
//!
//! Modules:
//!
//! - `stack`: the abstract stack boundary (raw events, commands, status)
//! - `session`: per-connection subscription bookkeeping
//! - `advertising`: advertising set configuration and modes
//! - `dispatcher`: the event consumer and advertising state machine
//! - `system_id`: EUI-64 System ID derivation
//! - `config`: connection limits and attribute database handles

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod advertising;
pub mod config;
pub mod dispatcher;
pub mod session;
pub mod stack;
pub mod system_id;
