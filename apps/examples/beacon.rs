//! Beacon Example
//!
//! Broadcasts a beacon for the SSID `TEST` from the station interface once
//! per beacon interval, letting the driver stamp sequence numbers.
//!
//! # Features Demonstrated
//!
//! - WiFi bring-up through esp-idf-svc, start tracking, activation wait
//! - `BeaconFrame` encoding into a stack buffer
//! - A task-owned `RawFrameTransmitter` driving a periodic send loop
//!
//! # Building
//!
//! ```bash
//! cargo xtask run ex-beacon --chip esp32s3
//! ```

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

use ph_esp32_wifi_tx::constants::DEFAULT_ACTIVATION_TIMEOUT_MS;
use ph_esp32_wifi_tx::integration::esp_idf::EspIdfRadio;
use ph_esp32_wifi_tx::{
    BeaconFrame, MacAddress, RawFrameTransmitter, WifiInterface, wait_until_active,
};

// =============================================================================
// Configuration
// =============================================================================

const SOURCE: MacAddress = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
const SSID: &[u8] = b"TEST";
/// Beacon interval in TU (1 TU = 1024 us)
const INTERVAL_TU: u16 = 100;

fn main() -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("ph-esp32-wifi-tx beacon example");

    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    EspIdfRadio::track_lifecycle()?;

    let mut wifi = BlockingWifi::wrap(
        EspWifi::new(peripherals.modem, sysloop.clone(), Some(nvs))?,
        sysloop,
    )?;
    wifi.set_configuration(&Configuration::Client(ClientConfiguration::default()))?;
    wifi.start()?;

    let mut delay = FreeRtos;
    let mut tx = RawFrameTransmitter::new(EspIdfRadio::new());
    match wait_until_active(tx.radio(), WifiInterface::Station, &mut delay, DEFAULT_ACTIVATION_TIMEOUT_MS) {
        Some(ms) => info!("STA active after {} ms", ms),
        None => warn!(
            "STA not active after {} ms, sending anyway",
            DEFAULT_ACTIVATION_TIMEOUT_MS
        ),
    }

    let mut buf = [0u8; 64];
    let len = BeaconFrame::new(SOURCE, SSID)
        .with_interval(INTERVAL_TU)
        .encode(&mut buf)?;
    let frame = &buf[..len];
    info!("Beacon: {} bytes, SSID {:?}", len, core::str::from_utf8(SSID));

    let period_ms = u32::from(INTERVAL_TU) * 1024 / 1000;
    let mut sent = 0u32;
    loop {
        match tx.transmit(WifiInterface::Station, frame) {
            Ok(status) if status.is_accepted() => {
                sent += 1;
                if sent % 100 == 0 {
                    info!("{} beacons sent", sent);
                }
            }
            Ok(status) => warn!("Error sending beacon frame: {}", status),
            Err(e) => error!("Beacon rejected: {}", e),
        }
        delay.delay_ms(period_ms);
    }
}
