//! Advertising set configuration.
//!
//! One advertising set is allocated at boot and reused for every restart;
//! the timing and mode values below are applied unchanged each time.

/// Handle of an advertising set allocated from the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdvHandle(pub u8);

/// Discoverability mode, mirroring the vendor advertiser modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Discoverable {
    NonDiscoverable,
    LimitedDiscoverable,
    GeneralDiscoverable,
}

/// Connectability mode, mirroring the vendor advertiser modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Connectable {
    NonConnectable,
    Scannable,
    ConnectableScannable,
}

/// 100 ms advertising interval, in 0.625 ms units.
pub const ADV_INTERVAL_100MS: u32 = 160;

/// Timing and mode configuration applied at boot and on every restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdvertisingConfig {
    /// Minimum advertising interval (0.625 ms units)
    pub interval_min: u32,
    /// Maximum advertising interval (0.625 ms units)
    pub interval_max: u32,
    /// Advertising duration (10 ms units, 0 = no timeout)
    pub duration: u16,
    /// Maximum number of advertising events (0 = no limit)
    pub max_events: u8,
    pub discoverable: Discoverable,
    pub connectable: Connectable,
}

impl Default for AdvertisingConfig {
    fn default() -> Self {
        Self {
            interval_min: ADV_INTERVAL_100MS,
            interval_max: ADV_INTERVAL_100MS,
            duration: 0,
            max_events: 0,
            discoverable: Discoverable::GeneralDiscoverable,
            connectable: Connectable::ConnectableScannable,
        }
    }
}
