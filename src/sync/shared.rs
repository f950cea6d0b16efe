//! Transmitter wrapper using critical sections.

use super::primitives::CriticalSectionCell;
use crate::driver::config::{TxConfig, WifiInterface};
use crate::driver::error::TxResult;
use crate::driver::transmitter::{RawFrameTransmitter, TxStatus};
use crate::radio::RadioTransmitter;

/// Transmitter wrapper using critical sections.
///
/// All access goes through `critical_section::with()`. The radio's
/// [`raw_tx`](RadioTransmitter::raw_tx) runs inside the critical section,
/// which masks interrupts on single-core targets and on ESP-IDF. Only use
/// this with radios whose `raw_tx` is safe to call with interrupts masked.
/// `EspIdfRadio` is not one of them: the ESP-IDF WiFi driver may block.
///
/// # Example
///
/// ```ignore
/// static TX: SharedTransmitter<QueueRadio> = SharedTransmitter::new(QueueRadio::new());
///
/// TX.transmit(WifiInterface::Station, &frame).ok();
/// ```
pub struct SharedTransmitter<R> {
    inner: CriticalSectionCell<RawFrameTransmitter<R>>,
}

impl<R> SharedTransmitter<R> {
    /// Create a shared transmitter (const, suitable for static initialization).
    pub const fn new(radio: R) -> Self {
        Self::with_config(radio, TxConfig::new())
    }

    /// Create a shared transmitter with an explicit default configuration.
    pub const fn with_config(radio: R, config: TxConfig) -> Self {
        Self {
            inner: CriticalSectionCell::new(RawFrameTransmitter::with_config(radio, config)),
        }
    }

    /// Execute a closure with exclusive access to the transmitter.
    ///
    /// The closure runs inside the critical section.
    #[inline]
    pub fn with<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut RawFrameTransmitter<R>) -> T,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<T, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&mut RawFrameTransmitter<R>) -> T,
    {
        self.inner.try_with(f)
    }
}

impl<R: RadioTransmitter> SharedTransmitter<R> {
    /// Transmit `frame` with the configured sequence-number behaviour.
    ///
    /// The radio is called while the critical section is held.
    /// See [`RawFrameTransmitter::transmit`].
    pub fn transmit(&self, interface: WifiInterface, frame: &[u8]) -> TxResult<TxStatus> {
        self.with(|tx| tx.transmit(interface, frame))
    }

    /// Transmit `frame` with an explicit sequence-number choice.
    ///
    /// See [`RawFrameTransmitter::transmit_with_sequence`].
    pub fn transmit_with_sequence(
        &self,
        interface: WifiInterface,
        frame: &[u8],
        use_system_sequence: bool,
    ) -> TxResult<TxStatus> {
        self.with(|tx| tx.transmit_with_sequence(interface, frame, use_system_sequence))
    }
}

impl<R: Default> Default for SharedTransmitter<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}
