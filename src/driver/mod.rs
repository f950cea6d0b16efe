//! Core driver components for raw frame transmission.
//!
//! - [`config`] - Interface selector and transmit configuration
//! - [`error`] - Error types and result aliases
//! - [`transmitter`] - The raw frame transmitter and its status type
//!
//! # Example
//!
//! ```ignore
//! use ph_esp32_wifi_tx::driver::{RawFrameTransmitter, TxConfig, WifiInterface};
//!
//! let mut tx = RawFrameTransmitter::with_config(radio, TxConfig::new());
//! let status = tx.transmit_raw(0, &frame, true)?;
//! ```

// Submodules
pub mod config;
pub mod error;
pub mod transmitter;

// Re-exports for convenience
pub use config::{TxConfig, WifiInterface};
pub use error::{
    ArgumentError, DriverError, FrameError, FrameResult, INVALID_ARGUMENT_CODE, TxError, TxResult,
};
pub use transmitter::{RawFrameTransmitter, TxStatus};
