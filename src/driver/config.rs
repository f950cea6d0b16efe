//! Configuration types for the raw frame transmitter

use super::error::ArgumentError;
use crate::internal::constants::{WIFI_IF_AP, WIFI_IF_STA};

/// WiFi interface a frame is queued on
///
/// The discriminants are the driver's `wifi_interface_t` values and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum WifiInterface {
    /// Station interface (`WIFI_IF_STA`)
    #[default]
    Station = WIFI_IF_STA,
    /// Access-point interface (`WIFI_IF_AP`)
    AccessPoint = WIFI_IF_AP,
}

impl WifiInterface {
    /// Both interfaces, in identifier order
    pub const ALL: [WifiInterface; 2] = [WifiInterface::Station, WifiInterface::AccessPoint];

    /// Map a raw interface identifier.
    ///
    /// # Errors
    /// - `InvalidInterface` - the id is neither [`WIFI_IF_STA`] nor [`WIFI_IF_AP`]
    pub const fn from_raw(id: i32) -> Result<Self, ArgumentError> {
        match id {
            WIFI_IF_STA => Ok(WifiInterface::Station),
            WIFI_IF_AP => Ok(WifiInterface::AccessPoint),
            other => Err(ArgumentError::InvalidInterface(other)),
        }
    }

    /// The driver identifier for this interface
    #[must_use]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Short name, as used in log output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WifiInterface::Station => "STA",
            WifiInterface::AccessPoint => "AP",
        }
    }
}

impl TryFrom<i32> for WifiInterface {
    type Error = ArgumentError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_raw(id)
    }
}

impl From<WifiInterface> for i32 {
    fn from(interface: WifiInterface) -> Self {
        interface.id()
    }
}

impl core::fmt::Display for WifiInterface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default transmit options
///
/// Held by the transmitter and applied by
/// [`RawFrameTransmitter::transmit`](crate::RawFrameTransmitter::transmit).
///
/// # Example
///
/// ```ignore
/// let config = TxConfig::new().with_system_sequence(false);
/// let mut tx = RawFrameTransmitter::with_config(radio, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxConfig {
    /// Let the driver overwrite the sequence-control field with its own
    /// counter. When `false` the frame's field is sent verbatim.
    pub use_system_sequence: bool,
}

impl TxConfig {
    /// Create the default configuration (system sequence numbers on)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            use_system_sequence: true,
        }
    }

    /// Set whether the driver assigns sequence numbers
    #[must_use]
    pub const fn with_system_sequence(mut self, enabled: bool) -> Self {
        self.use_system_sequence = enabled;
        self
    }
}

impl Default for TxConfig {
    fn default() -> Self {
        Self::new()
    }
}
