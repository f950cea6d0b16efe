//! Raw Frame Transmitter
//!
//! Validates the arguments of a raw transmit request locally and hands the
//! frame to the radio driver exactly once.
//!
//! # Guarantees
//!
//! - The frame is borrowed immutably and never retained.
//! - One driver call per validated request: no retry, no buffering.
//! - The driver's status code is returned unchanged inside [`TxStatus`].
//! - Invalid interface ids and empty frames never reach the driver.
//!
//! The call returns once the driver has accepted (or refused) the frame; it
//! does not wait for the frame to go out over the air.
//!
//! # Preconditions
//!
//! The interface must have been activated through the host's WiFi lifecycle
//! API before transmitting. The transmitter does not check or change
//! activation state; an inactive interface is reported by the driver through
//! its status code.

#[cfg(feature = "log")]
use log::trace;

use super::config::{TxConfig, WifiInterface};
use super::error::{ArgumentError, DriverError, TxError, TxResult};
use crate::radio::RadioTransmitter;

// =============================================================================
// Status
// =============================================================================

/// Status code reported by the driver for a dispatched frame
///
/// Zero means the frame was accepted for transmission. Any other value is
/// driver-defined and carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct TxStatus(i32);

impl TxStatus {
    /// The driver accepted the frame
    pub const ACCEPTED: TxStatus = TxStatus(0);

    /// Wrap a raw driver status
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// The raw status code
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Check if the driver accepted the frame
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        self.0 == 0
    }

    /// Convert a non-zero status into [`TxError::Driver`].
    ///
    /// # Errors
    /// - `Driver` - the driver reported a non-zero status
    pub fn check(self) -> TxResult<()> {
        match DriverError::new(self.0) {
            None => Ok(()),
            Some(e) => Err(TxError::Driver(e)),
        }
    }
}

impl From<TxStatus> for i32 {
    fn from(status: TxStatus) -> Self {
        status.0
    }
}

impl core::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_accepted() {
            f.write_str("accepted")
        } else {
            write!(f, "status {:#x}", self.0)
        }
    }
}

// =============================================================================
// Transmitter
// =============================================================================

/// Raw 802.11 frame transmitter
///
/// Owns no state beyond the radio handle and its default [`TxConfig`].
///
/// # Example
///
/// ```ignore
/// use ph_esp32_wifi_tx::{RawFrameTransmitter, WifiInterface};
///
/// let mut tx = RawFrameTransmitter::new(radio);
///
/// let status = tx.transmit(WifiInterface::Station, &beacon)?;
/// if !status.is_accepted() {
///     log::warn!("driver refused beacon: {}", status);
/// }
/// ```
#[derive(Debug)]
pub struct RawFrameTransmitter<R> {
    radio: R,
    config: TxConfig,
}

impl<R> RawFrameTransmitter<R> {
    /// Create a transmitter with the default configuration
    pub const fn new(radio: R) -> Self {
        Self::with_config(radio, TxConfig::new())
    }

    /// Create a transmitter with an explicit default configuration
    pub const fn with_config(radio: R, config: TxConfig) -> Self {
        Self { radio, config }
    }

    /// Get the default configuration
    pub fn config(&self) -> &TxConfig {
        &self.config
    }

    /// Replace the default configuration
    pub fn set_config(&mut self, config: TxConfig) {
        self.config = config;
    }

    /// Borrow the radio
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Mutably borrow the radio
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Release the radio
    pub fn into_radio(self) -> R {
        self.radio
    }
}

impl<R: RadioTransmitter> RawFrameTransmitter<R> {
    /// Transmit `frame` with the configured sequence-number behaviour.
    ///
    /// # Errors
    /// - `InvalidArgument(EmptyFrame)` - `frame` is empty
    pub fn transmit(&mut self, interface: WifiInterface, frame: &[u8]) -> TxResult<TxStatus> {
        let use_system_sequence = self.config.use_system_sequence;
        self.transmit_with_sequence(interface, frame, use_system_sequence)
    }

    /// Transmit `frame`, choosing whether the driver assigns the sequence
    /// number.
    ///
    /// The flag never causes a rejection on its own.
    ///
    /// # Errors
    /// - `InvalidArgument(EmptyFrame)` - `frame` is empty
    pub fn transmit_with_sequence(
        &mut self,
        interface: WifiInterface,
        frame: &[u8],
        use_system_sequence: bool,
    ) -> TxResult<TxStatus> {
        if frame.is_empty() {
            return Err(ArgumentError::EmptyFrame.into());
        }

        #[cfg(feature = "log")]
        trace!(
            "raw tx: {} bytes on {} (sys_seq={})",
            frame.len(),
            interface,
            use_system_sequence
        );

        let code = self.radio.raw_tx(interface, frame, use_system_sequence);
        Ok(TxStatus(code))
    }

    /// Transmit with a raw interface identifier.
    ///
    /// Same shape as the native entry point: the id is validated before
    /// anything else, so an invalid id is reported even for an empty frame.
    ///
    /// # Errors
    /// - `InvalidArgument(InvalidInterface)` - `interface_id` is not 0 or 1
    /// - `InvalidArgument(EmptyFrame)` - `frame` is empty
    pub fn transmit_raw(
        &mut self,
        interface_id: i32,
        frame: &[u8],
        use_system_sequence: bool,
    ) -> TxResult<TxStatus> {
        let interface = WifiInterface::from_raw(interface_id)?;
        self.transmit_with_sequence(interface, frame, use_system_sequence)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
