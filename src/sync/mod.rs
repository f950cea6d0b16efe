//! Synchronization Support
//!
//! Static storage for a transmitter behind a critical section:
//!
//! - **Primitives** (`primitives`): [`CriticalSectionCell`], critical-section
//!   protected interior mutability
//! - **Shared Wrapper** (`shared`): [`SharedTransmitter`], a
//!   critical-section protected [`RawFrameTransmitter`](crate::RawFrameTransmitter)
//!
//! The radio call runs inside the critical section. On ESP-IDF the
//! `critical-section` implementation masks interrupts, and the WiFi driver
//! must not be called in that state, so `EspIdfRadio` callers own a plain
//! [`RawFrameTransmitter`](crate::RawFrameTransmitter) instead. This module
//! suits radios whose `raw_tx` only touches memory, such as queues and mocks.
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use ph_esp32_wifi_tx::sync::SharedTransmitter;
//!
//! static TX: SharedTransmitter<QueueRadio> = SharedTransmitter::new(QueueRadio::new());
//!
//! fn enqueue_beacon() {
//!     let _ = TX.transmit(WifiInterface::AccessPoint, &BEACON);
//! }
//! ```

mod primitives;

pub use primitives::CriticalSectionCell;

mod shared;

pub use shared::SharedTransmitter;
