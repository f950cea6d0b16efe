//! Radio Driver Capabilities
//!
//! The radio driver is an external collaborator. This module describes the
//! two things the transmitter needs from it as traits, so the core can be
//! exercised against a mock on the host and against ESP-IDF on the device.
//!
//! - [`RadioTransmitter`]: the raw transmit entry point (`esp_wifi_80211_tx`)
//! - [`InterfaceState`]: whether the host network stack has brought an
//!   interface up
//! - [`ActivationFlags`]: per-interface started flags, set from the host's
//!   start/stop events
//!
//! # Activation
//!
//! Interfaces are activated by the host's WiFi lifecycle API, never by this
//! crate. Callers that want to wait for activation after starting the host
//! stack can poll with [`wait_until_active`]:
//!
//! ```ignore
//! use embedded_hal::delay::DelayNs;
//! use ph_esp32_wifi_tx::radio::{wait_until_active, InterfaceState};
//!
//! wifi.start()?;
//! match wait_until_active(&radio, WifiInterface::Station, &mut delay, 500) {
//!     Some(ms) => log::info!("STA up after {} ms", ms),
//!     None => log::warn!("STA still inactive"),
//! }
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

use crate::driver::config::WifiInterface;
use crate::internal::constants::ACTIVATION_POLL_MS;

// =============================================================================
// Capability Traits
// =============================================================================

/// Raw 802.11 transmit entry point of a radio driver
///
/// Implementations hand the buffer to the driver and return its status code
/// unchanged: zero when the frame was accepted for transmission, a
/// driver-defined non-zero value otherwise. They must not retain `frame`
/// after returning.
///
/// # Example Implementation
///
/// ```ignore
/// struct LoopbackRadio;
///
/// impl RadioTransmitter for LoopbackRadio {
///     fn raw_tx(&mut self, _: WifiInterface, _: &[u8], _: bool) -> i32 {
///         0
///     }
/// }
/// ```
pub trait RadioTransmitter {
    /// Queue `frame` on `interface`.
    ///
    /// With `use_system_sequence` set, the driver overwrites the frame's
    /// sequence-control field with its own counter.
    fn raw_tx(&mut self, interface: WifiInterface, frame: &[u8], use_system_sequence: bool)
    -> i32;
}

impl<T: RadioTransmitter + ?Sized> RadioTransmitter for &mut T {
    #[inline]
    fn raw_tx(
        &mut self,
        interface: WifiInterface,
        frame: &[u8],
        use_system_sequence: bool,
    ) -> i32 {
        (**self).raw_tx(interface, frame, use_system_sequence)
    }
}

/// Activation state of the WiFi interfaces, as owned by the host network stack
pub trait InterfaceState {
    /// Check whether `interface` is currently active
    fn is_active(&self, interface: WifiInterface) -> bool;
}

impl<T: InterfaceState + ?Sized> InterfaceState for &T {
    #[inline]
    fn is_active(&self, interface: WifiInterface) -> bool {
        (**self).is_active(interface)
    }
}

impl<T: InterfaceState + ?Sized> InterfaceState for &mut T {
    #[inline]
    fn is_active(&self, interface: WifiInterface) -> bool {
        (**self).is_active(interface)
    }
}

// =============================================================================
// Activation Flags
// =============================================================================

/// Started state of each interface, as reported by host lifecycle events
///
/// Written from the host's event context, read by [`InterfaceState`] pollers.
/// Const-constructible so a backend can keep one in a `static`.
#[derive(Debug, Default)]
pub struct ActivationFlags {
    station: AtomicBool,
    access_point: AtomicBool,
}

impl ActivationFlags {
    /// Create flags with both interfaces stopped.
    pub const fn new() -> Self {
        Self {
            station: AtomicBool::new(false),
            access_point: AtomicBool::new(false),
        }
    }

    const fn flag(&self, interface: WifiInterface) -> &AtomicBool {
        match interface {
            WifiInterface::Station => &self.station,
            WifiInterface::AccessPoint => &self.access_point,
        }
    }

    /// Record a start (`true`) or stop (`false`) event for `interface`.
    pub fn set_started(&self, interface: WifiInterface, started: bool) {
        self.flag(interface).store(started, Ordering::Release);
    }

    /// Whether the last event seen for `interface` was a start.
    pub fn is_started(&self, interface: WifiInterface) -> bool {
        self.flag(interface).load(Ordering::Acquire)
    }

    /// Mark both interfaces stopped.
    pub fn clear(&self) {
        self.set_started(WifiInterface::Station, false);
        self.set_started(WifiInterface::AccessPoint, false);
    }
}

impl InterfaceState for ActivationFlags {
    #[inline]
    fn is_active(&self, interface: WifiInterface) -> bool {
        self.is_started(interface)
    }
}

// =============================================================================
// Activation Wait
// =============================================================================

/// Poll `state` until `interface` is active.
///
/// Checks immediately, then every [`ACTIVATION_POLL_MS`] milliseconds.
/// Returns the elapsed time in milliseconds once the interface is active,
/// or `None` if it is still inactive after `timeout_ms`.
pub fn wait_until_active<S, D>(
    state: &S,
    interface: WifiInterface,
    delay: &mut D,
    timeout_ms: u32,
) -> Option<u32>
where
    S: InterfaceState + ?Sized,
    D: DelayNs,
{
    let mut elapsed_ms = 0u32;
    loop {
        if state.is_active(interface) {
            return Some(elapsed_ms);
        }
        if elapsed_ms >= timeout_ms {
            return None;
        }
        let step = ACTIVATION_POLL_MS.min(timeout_ms - elapsed_ms);
        delay.delay_ms(step);
        elapsed_ms += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::constants::DEFAULT_ACTIVATION_TIMEOUT_MS;
    use crate::testing::{MockDelay, MockRadio};

    #[test]
    fn wait_returns_immediately_when_active() {
        let radio = MockRadio::new().with_active(WifiInterface::Station, true);
        let mut delay = MockDelay::new();

        let elapsed = wait_until_active(&radio, WifiInterface::Station, &mut delay, 500);
        assert_eq!(elapsed, Some(0));
        assert_eq!(delay.total_ms(), 0);
    }

    #[test]
    fn wait_times_out_when_inactive() {
        let radio = MockRadio::new();
        let mut delay = MockDelay::new();

        let elapsed = wait_until_active(&radio, WifiInterface::AccessPoint, &mut delay, 95);
        assert_eq!(elapsed, None);
        assert_eq!(delay.total_ms(), 95);
    }

    #[test]
    fn wait_sees_activation_after_polls() {
        let radio = MockRadio::new().activate_after_polls(WifiInterface::Station, 3);
        let mut delay = MockDelay::new();

        let elapsed = wait_until_active(&radio, WifiInterface::Station, &mut delay, 500);
        assert_eq!(elapsed, Some(3 * ACTIVATION_POLL_MS));
    }

    #[test]
    fn wait_zero_timeout_checks_once() {
        let radio = MockRadio::new();
        let mut delay = MockDelay::new();

        assert_eq!(
            wait_until_active(&radio, WifiInterface::Station, &mut delay, 0),
            None
        );
        assert_eq!(delay.total_ns(), 0);
    }

    #[test]
    fn wait_does_not_transmit() {
        let radio = MockRadio::new().with_active(WifiInterface::Station, true);
        let mut delay = MockDelay::new();
        let _ = wait_until_active(&radio, WifiInterface::Station, &mut delay, 10);
        assert!(radio.calls().is_empty());
    }

    #[test]
    fn mut_ref_forwards_raw_tx() {
        fn send<R: RadioTransmitter>(mut radio: R) -> i32 {
            radio.raw_tx(WifiInterface::Station, &[1, 2, 3], true)
        }

        let mut radio = MockRadio::new();
        assert_eq!(send(&mut radio), 0);
        assert_eq!(radio.calls().len(), 1);
    }

    #[test]
    fn activation_flags_start_stopped() {
        let flags = ActivationFlags::new();
        assert!(!flags.is_started(WifiInterface::Station));
        assert!(!flags.is_active(WifiInterface::AccessPoint));
    }

    #[test]
    fn activation_flags_track_each_interface() {
        let flags = ActivationFlags::new();

        flags.set_started(WifiInterface::Station, true);
        assert!(flags.is_active(WifiInterface::Station));
        assert!(!flags.is_active(WifiInterface::AccessPoint));

        flags.set_started(WifiInterface::AccessPoint, true);
        flags.set_started(WifiInterface::Station, false);
        assert!(!flags.is_active(WifiInterface::Station));
        assert!(flags.is_active(WifiInterface::AccessPoint));

        flags.clear();
        assert!(!flags.is_active(WifiInterface::AccessPoint));
    }

    #[test]
    fn wait_on_unstarted_flags_times_out() {
        static FLAGS: ActivationFlags = ActivationFlags::new();
        let mut delay = MockDelay::new();

        let elapsed = wait_until_active(
            &FLAGS,
            WifiInterface::Station,
            &mut delay,
            DEFAULT_ACTIVATION_TIMEOUT_MS,
        );
        assert_eq!(elapsed, None);
        assert_eq!(delay.total_ms(), u64::from(DEFAULT_ACTIVATION_TIMEOUT_MS));
    }

    #[test]
    fn wait_on_started_flags_succeeds() {
        let flags = ActivationFlags::new();
        flags.set_started(WifiInterface::AccessPoint, true);
        let mut delay = MockDelay::new();

        assert_eq!(
            wait_until_active(
                &flags,
                WifiInterface::AccessPoint,
                &mut delay,
                DEFAULT_ACTIVATION_TIMEOUT_MS
            ),
            Some(0)
        );
    }
}
