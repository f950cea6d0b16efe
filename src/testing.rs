//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the transmitter
//! on the host without a radio.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::vec::Vec;

use crate::driver::config::WifiInterface;
use crate::radio::{InterfaceState, RadioTransmitter};

/// Status the mock reports for an inactive interface when driver checks are
/// enabled (`ESP_ERR_WIFI_NOT_STARTED`).
pub const MOCK_NOT_STARTED: i32 = 0x3002;

// =============================================================================
// Mock Radio
// =============================================================================

/// One call recorded by [`MockRadio`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxCall {
    pub interface: WifiInterface,
    pub frame: Vec<u8>,
    pub use_system_sequence: bool,
}

/// Mock radio driver for testing the transmit path without hardware
///
/// Records every dispatched frame and answers with scripted status codes.
///
/// # Example
///
/// ```ignore
/// let radio = MockRadio::new().with_status(0x3016);
/// let mut tx = RawFrameTransmitter::new(radio);
/// let status = tx.transmit(WifiInterface::Station, &frame).unwrap();
/// assert_eq!(status.code(), 0x3016);
/// ```
#[derive(Debug, Default)]
pub struct MockRadio {
    /// Status returned once the script is exhausted
    default_status: i32,
    /// Statuses returned by the next calls, in order
    script: RefCell<VecDeque<i32>>,
    /// Record of calls
    calls: RefCell<Vec<TxCall>>,
    /// Activation state per interface id
    active: Cell<[bool; 2]>,
    /// Remaining `is_active` polls before an interface comes up
    polls_until_active: Cell<[Option<u32>; 2]>,
    /// Report `MOCK_NOT_STARTED` for inactive interfaces
    driver_checks: bool,
}

impl MockRadio {
    /// Create a mock that accepts every frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Status returned when no scripted status is pending
    pub fn with_status(mut self, status: i32) -> Self {
        self.default_status = status;
        self
    }

    /// Queue statuses for the next calls
    pub fn with_script(self, statuses: &[i32]) -> Self {
        self.script.borrow_mut().extend(statuses.iter().copied());
        self
    }

    /// Set the activation state of an interface
    pub fn with_active(self, interface: WifiInterface, active: bool) -> Self {
        self.set_active(interface, active);
        self
    }

    /// Reject frames for inactive interfaces like the real driver does
    pub fn with_driver_checks(mut self) -> Self {
        self.driver_checks = true;
        self
    }

    /// Bring `interface` up after it has been polled `polls` times
    pub fn activate_after_polls(self, interface: WifiInterface, polls: u32) -> Self {
        let mut pending = self.polls_until_active.get();
        pending[interface.id() as usize] = Some(polls);
        self.polls_until_active.set(pending);
        self
    }

    /// Change the activation state of an interface
    pub fn set_active(&self, interface: WifiInterface, active: bool) {
        let mut state = self.active.get();
        state[interface.id() as usize] = active;
        self.active.set(state);
    }

    /// All calls made so far
    pub fn calls(&self) -> Vec<TxCall> {
        self.calls.borrow().clone()
    }

    /// The most recent call
    pub fn last_call(&self) -> Option<TxCall> {
        self.calls.borrow().last().cloned()
    }

    /// Clear the call log
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl RadioTransmitter for MockRadio {
    fn raw_tx(
        &mut self,
        interface: WifiInterface,
        frame: &[u8],
        use_system_sequence: bool,
    ) -> i32 {
        self.calls.borrow_mut().push(TxCall {
            interface,
            frame: frame.to_vec(),
            use_system_sequence,
        });

        let scripted = self.script.borrow_mut().pop_front();
        if let Some(status) = scripted {
            return status;
        }
        if self.driver_checks && !self.active.get()[interface.id() as usize] {
            return MOCK_NOT_STARTED;
        }
        self.default_status
    }
}

impl InterfaceState for MockRadio {
    fn is_active(&self, interface: WifiInterface) -> bool {
        let idx = interface.id() as usize;
        let mut pending = self.polls_until_active.get();
        if let Some(remaining) = pending[idx] {
            if remaining == 0 {
                pending[idx] = None;
                self.set_active(interface, true);
            } else {
                pending[idx] = Some(remaining - 1);
            }
            self.polls_until_active.set(pending);
        }
        self.active.get()[idx]
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        *self.total_ns.borrow_mut() += ms as u64 * 1_000_000;
    }
}

// =============================================================================
// Test Frames
// =============================================================================

/// 24-byte management header: beacon, broadcast destination, sequence 0
pub const MINIMAL_FRAME: [u8; 24] = [
    0x80, 0x00, // Frame control
    0x00, 0x00, // Duration/ID
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // Destination address
    0x11, 0x22, 0x33, 0x44, 0x55, 0x66, // Source address
    0x11, 0x22, 0x33, 0x44, 0x55, 0x66, // BSSID
    0x00, 0x00, // Sequence/Fragment
];

/// Minimal header followed by two payload bytes
pub const FRAME_26: [u8; 26] = [
    0x80, 0x00, 0x00, 0x00, //
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0x11, 0x22, 0x33, 0x44, 0x55, 0x66, //
    0x11, 0x22, 0x33, 0x44, 0x55, 0x66, //
    0x00, 0x00, 0x00, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;

    #[test]
    fn mock_radio_records_calls() {
        let mut radio = MockRadio::new();
        assert_eq!(radio.raw_tx(WifiInterface::AccessPoint, &[1, 2], false), 0);

        let call = radio.last_call().unwrap();
        assert_eq!(call.interface, WifiInterface::AccessPoint);
        assert_eq!(call.frame, [1, 2]);
        assert!(!call.use_system_sequence);

        radio.clear_calls();
        assert!(radio.calls().is_empty());
    }

    #[test]
    fn mock_radio_script_then_default() {
        let mut radio = MockRadio::new().with_status(5).with_script(&[-1, 0]);
        assert_eq!(radio.raw_tx(WifiInterface::Station, &[0], true), -1);
        assert_eq!(radio.raw_tx(WifiInterface::Station, &[0], true), 0);
        assert_eq!(radio.raw_tx(WifiInterface::Station, &[0], true), 5);
    }

    #[test]
    fn mock_radio_driver_checks() {
        let mut radio = MockRadio::new()
            .with_driver_checks()
            .with_active(WifiInterface::Station, true);
        assert_eq!(radio.raw_tx(WifiInterface::Station, &[0], true), 0);
        assert_eq!(
            radio.raw_tx(WifiInterface::AccessPoint, &[0], true),
            MOCK_NOT_STARTED
        );
    }

    #[test]
    fn mock_radio_activation_countdown() {
        let radio = MockRadio::new().activate_after_polls(WifiInterface::AccessPoint, 2);
        assert!(!radio.is_active(WifiInterface::AccessPoint));
        assert!(!radio.is_active(WifiInterface::AccessPoint));
        assert!(radio.is_active(WifiInterface::AccessPoint));
        assert!(!radio.is_active(WifiInterface::Station));
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        delay.delay_ns(1000);
        delay.delay_ns(2000);
        assert_eq!(delay.total_ns(), 3000);
        assert_eq!(delay.total_ms(), 0);

        delay.delay_ms(2);
        assert_eq!(delay.total_ms(), 2);
    }

    #[test]
    fn test_frames_have_header_length() {
        assert_eq!(MINIMAL_FRAME.len(), 24);
        assert_eq!(FRAME_26.len(), 26);
        assert_eq!(&FRAME_26[..24], &MINIMAL_FRAME[..]);
    }
}
