//! ESP-IDF Radio Backend
//!
//! Binds the transmitter to the ESP-IDF WiFi driver through `esp-idf-svc`.
//! WiFi bring-up (driver init, mode selection, `start`) stays with the
//! application, usually via `esp_idf_svc::wifi::EspWifi`. This backend
//! transmits, reads the current mode and records the driver's interface
//! start/stop events.
//!
//! # Usage
//!
//! ```ignore
//! use esp_idf_svc::wifi::{BlockingWifi, EspWifi};
//! use ph_esp32_wifi_tx::{RawFrameTransmitter, WifiInterface};
//! use ph_esp32_wifi_tx::integration::esp_idf::EspIdfRadio;
//!
//! let sysloop = EspSystemEventLoop::take()?;
//! EspIdfRadio::track_lifecycle()?;
//!
//! let mut wifi = BlockingWifi::wrap(EspWifi::new(modem, sysloop.clone(), Some(nvs))?, sysloop)?;
//! wifi.set_configuration(&config)?;
//! wifi.start()?;
//!
//! let mut tx = RawFrameTransmitter::new(EspIdfRadio::new());
//! tx.transmit(WifiInterface::Station, &frame)?;
//! ```

use core::ffi::c_void;
use core::sync::atomic::{AtomicBool, Ordering};

use esp_idf_svc::sys::{
    ESP_EVENT_ANY_ID, EspError, WIFI_EVENT, esp, esp_event_base_t, esp_event_handler_register,
    esp_wifi_80211_tx, esp_wifi_get_mode, wifi_event_t, wifi_event_t_WIFI_EVENT_AP_START,
    wifi_event_t_WIFI_EVENT_AP_STOP, wifi_event_t_WIFI_EVENT_STA_START,
    wifi_event_t_WIFI_EVENT_STA_STOP, wifi_interface_t, wifi_interface_t_WIFI_IF_AP,
    wifi_interface_t_WIFI_IF_STA, wifi_mode_t, wifi_mode_t_WIFI_MODE_AP,
    wifi_mode_t_WIFI_MODE_APSTA, wifi_mode_t_WIFI_MODE_NULL, wifi_mode_t_WIFI_MODE_STA,
};

use crate::driver::config::WifiInterface;
use crate::radio::{ActivationFlags, InterfaceState, RadioTransmitter};

/// Started flags, written by [`on_wifi_event`]
static STARTED: ActivationFlags = ActivationFlags::new();
static LIFECYCLE_TRACKED: AtomicBool = AtomicBool::new(false);

/// Radio driver backed by the ESP-IDF WiFi stack
///
/// Zero-sized; every instance talks to the same driver. Transmissions before
/// the WiFi driver has been started are refused with the driver's
/// "not started" status.
#[derive(Debug, Clone, Copy, Default)]
pub struct EspIdfRadio {
    _private: (),
}

impl EspIdfRadio {
    /// Create a handle to the ESP-IDF WiFi driver (const, suitable for statics).
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Current WiFi mode, or `None` if the driver is not initialized.
    pub fn mode(&self) -> Option<wifi_mode_t> {
        let mut mode: wifi_mode_t = wifi_mode_t_WIFI_MODE_NULL;
        // SAFETY: `mode` is a valid, writable `wifi_mode_t` for the duration
        // of the call.
        esp!(unsafe { esp_wifi_get_mode(&mut mode) }).ok()?;
        Some(mode)
    }

    /// Record STA/AP start and stop events from the default event loop.
    ///
    /// Must run after the default event loop exists (`EspSystemEventLoop::take`)
    /// and before `start`, or [`InterfaceState::is_active`] misses the start
    /// event. The handler stays registered for the life of the program; later
    /// calls return `Ok(())` without registering again.
    pub fn track_lifecycle() -> Result<(), EspError> {
        if LIFECYCLE_TRACKED.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        STARTED.clear();

        // SAFETY: `WIFI_EVENT` is an immutable base pointer exported by the
        // driver, and `on_wifi_event` is a `'static` handler that ignores its
        // argument and event data.
        let result = esp!(unsafe {
            esp_event_handler_register(
                WIFI_EVENT,
                ESP_EVENT_ANY_ID,
                Some(on_wifi_event),
                core::ptr::null_mut(),
            )
        });
        if result.is_err() {
            LIFECYCLE_TRACKED.store(false, Ordering::Release);
        }
        result
    }

    /// Whether [`track_lifecycle`](Self::track_lifecycle) has registered its handler.
    pub fn is_lifecycle_tracked() -> bool {
        LIFECYCLE_TRACKED.load(Ordering::Acquire)
    }
}

unsafe extern "C" fn on_wifi_event(
    _arg: *mut c_void,
    _base: esp_event_base_t,
    id: i32,
    _data: *mut c_void,
) {
    match id as wifi_event_t {
        wifi_event_t_WIFI_EVENT_STA_START => STARTED.set_started(WifiInterface::Station, true),
        wifi_event_t_WIFI_EVENT_STA_STOP => STARTED.set_started(WifiInterface::Station, false),
        wifi_event_t_WIFI_EVENT_AP_START => STARTED.set_started(WifiInterface::AccessPoint, true),
        wifi_event_t_WIFI_EVENT_AP_STOP => STARTED.set_started(WifiInterface::AccessPoint, false),
        _ => {}
    }
}

const fn to_native(interface: WifiInterface) -> wifi_interface_t {
    match interface {
        WifiInterface::Station => wifi_interface_t_WIFI_IF_STA,
        WifiInterface::AccessPoint => wifi_interface_t_WIFI_IF_AP,
    }
}

impl RadioTransmitter for EspIdfRadio {
    fn raw_tx(
        &mut self,
        interface: WifiInterface,
        frame: &[u8],
        use_system_sequence: bool,
    ) -> i32 {
        // Lengths past i32::MAX cannot be expressed to the driver; saturate
        // and let it refuse the frame.
        let len = i32::try_from(frame.len()).unwrap_or(i32::MAX);

        // SAFETY: `frame` is valid for reads of `len` bytes for the duration
        // of the call, and the driver copies the buffer before returning.
        unsafe {
            esp_wifi_80211_tx(
                to_native(interface),
                frame.as_ptr().cast(),
                len,
                use_system_sequence,
            )
        }
    }
}

/// An interface counts as active once the driver has reported its start event
/// and the current mode still enables it: STA in `STA`/`APSTA`, AP in
/// `AP`/`APSTA`. Without [`EspIdfRadio::track_lifecycle`] no start event is
/// seen and every interface reads as inactive.
impl InterfaceState for EspIdfRadio {
    fn is_active(&self, interface: WifiInterface) -> bool {
        if !STARTED.is_started(interface) {
            return false;
        }
        let Some(mode) = self.mode() else {
            return false;
        };
        match interface {
            WifiInterface::Station => {
                mode == wifi_mode_t_WIFI_MODE_STA || mode == wifi_mode_t_WIFI_MODE_APSTA
            }
            WifiInterface::AccessPoint => {
                mode == wifi_mode_t_WIFI_MODE_AP || mode == wifi_mode_t_WIFI_MODE_APSTA
            }
        }
    }
}
