//! ESP32 Raw 802.11 Frame Transmitter
//!
//! A `no_std`, `no_alloc` shim for injecting raw IEEE 802.11 frames through
//! the ESP32 WiFi driver on the station (STA) or access-point (AP) interface.
//!
//! The crate owns the argument checks in front of the driver's raw transmit
//! entry point and nothing else: the frame bytes are handed to the driver
//! unchanged, and the driver's status code is handed back unchanged.
//!
//! # Architecture
//!
//! 1. **Driver Layer** ([`driver`]): [`RawFrameTransmitter`], interface
//!    selection, status codes and errors
//! 2. **Radio Layer** ([`radio`]): capability traits for the WiFi driver
//!    ([`RadioTransmitter`], [`InterfaceState`])
//! 3. **Frame Layer** ([`frame`]): beacon and probe-request builders
//! 4. **Integration** (`integration`): the ESP-IDF radio backend
//!
//! # Interfaces
//!
//! | Id | Interface | Constant |
//! |----|-----------|----------|
//! | 0  | Station   | [`constants::WIFI_IF_STA`] |
//! | 1  | AP        | [`constants::WIFI_IF_AP`] |
//!
//! Any other id is rejected with [`TxError::InvalidArgument`] before the
//! driver is called. So is an empty frame.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for error and status types
//! - `log`: Trace each dispatched frame through the `log` facade
//! - `critical-section`: Enable the static [`sync::SharedTransmitter`]
//! - `esp-idf`: Enable the ESP-IDF radio backend
//!
//! # Example
//!
//! ```ignore
//! use ph_esp32_wifi_tx::{RawFrameTransmitter, WifiInterface, TxError};
//! use ph_esp32_wifi_tx::integration::esp_idf::EspIdfRadio;
//!
//! // WiFi must already be started through esp-idf-svc
//! let mut tx = RawFrameTransmitter::new(EspIdfRadio::new());
//!
//! match tx.transmit(WifiInterface::Station, &frame) {
//!     Ok(status) if status.is_accepted() => log::info!("queued"),
//!     Ok(status) => log::warn!("driver refused frame: {}", status),
//!     Err(TxError::InvalidArgument(e)) => log::error!("{}", e),
//!     Err(e) => log::error!("{}", e),
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels mirror the [lints] table in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod frame;
pub mod radio;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "esp-idf")]
#[cfg_attr(docsrs, doc(cfg(feature = "esp-idf")))]
pub mod integration;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{TxConfig, WifiInterface};
pub use driver::error::{
    ArgumentError, DriverError, FrameError, FrameResult, INVALID_ARGUMENT_CODE, TxError, TxResult,
};
pub use driver::transmitter::{RawFrameTransmitter, TxStatus};
pub use frame::{BeaconFrame, MacAddress, MacHeader, ProbeRequest};
pub use radio::{ActivationFlags, InterfaceState, RadioTransmitter, wait_until_active};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedTransmitter;

// Re-export the radio backend when esp-idf is enabled
#[cfg(feature = "esp-idf")]
#[cfg_attr(docsrs, doc(cfg(feature = "esp-idf")))]
pub use integration::esp_idf::EspIdfRadio;

/// Shared constants.
///
/// Grouped into a dedicated module to keep the top-level facade focused on
/// the transmitter types.
pub mod constants {
    pub use crate::internal::constants::{
        // Timing
        ACTIVATION_POLL_MS,
        BROADCAST_ADDR,
        DEFAULT_ACTIVATION_TIMEOUT_MS,
        // Frame sizes
        MAC_ADDR_LEN,
        MAC_HEADER_LEN,
        MAX_FRAME_LEN,
        MAX_SSID_LEN,
        MAX_SUPPORTED_RATES,
        // Interface identifiers
        WIFI_IF_AP,
        WIFI_IF_STA,
    };
}

// =============================================================================
// Macro Helpers
// =============================================================================

/// Declare a static transmitter behind a critical section.
///
/// Expands to a [`sync::SharedTransmitter`] static wrapping the given radio
/// expression, which must be usable in a `const` context. The radio is
/// called with the critical section held, see [`sync::SharedTransmitter`].
///
/// # Examples
///
/// ```ignore
/// ph_esp32_wifi_tx::transmitter_static!(TX, QueueRadio, QueueRadio::new());
///
/// TX.transmit(WifiInterface::AccessPoint, &frame)?;
/// ```
#[cfg(feature = "critical-section")]
#[macro_export]
macro_rules! transmitter_static {
    ($name:ident, $radio:ty, $init:expr) => {
        static $name: $crate::sync::SharedTransmitter<$radio> =
            $crate::sync::SharedTransmitter::new($init);
    };
}
