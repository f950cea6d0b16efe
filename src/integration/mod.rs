//! Host Stack Integrations
//!
//! - **ESP-IDF** (`esp_idf`): radio backend over the ESP-IDF WiFi driver
//!   - Implements [`RadioTransmitter`](crate::radio::RadioTransmitter) with
//!     `esp_wifi_80211_tx`
//!   - Implements [`InterfaceState`](crate::radio::InterfaceState) from the
//!     driver's start/stop events and WiFi mode
//!   - Requires `esp-idf` feature
//!
//! # Feature Flags
//!
//! - `esp-idf`: Enables the ESP-IDF backend (`esp_idf` submodule)
//!
//! # Example
//!
//! ```ignore
//! use ph_esp32_wifi_tx::integration::esp_idf::EspIdfRadio;
//!
//! EspIdfRadio::track_lifecycle()?;
//! wifi.start()?;
//! let mut tx = RawFrameTransmitter::new(EspIdfRadio::new());
//! ```

pub mod esp_idf;
