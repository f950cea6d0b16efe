//! Probe Request Injection Example
//!
//! Injects a broadcast probe request from a fixed source address on the
//! station interface. The sequence-control field is sent as written, so
//! the example stamps its own sequence numbers.
//!
//! # Building
//!
//! ```bash
//! cargo xtask run ex-probe --chip esp32s3
//! ```

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use embedded_hal::delay::DelayNs;
use log::{info, warn};

use ph_esp32_wifi_tx::constants::DEFAULT_ACTIVATION_TIMEOUT_MS;
use ph_esp32_wifi_tx::frame::sequence_control;
use ph_esp32_wifi_tx::integration::esp_idf::EspIdfRadio;
use ph_esp32_wifi_tx::{
    MacAddress, MacHeader, ProbeRequest, RadioTransmitter, RawFrameTransmitter, TxResult,
    TxStatus, WifiInterface, wait_until_active,
};

// =============================================================================
// Configuration
// =============================================================================

const SOURCE: MacAddress = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
const BURST: u16 = 16;
const GAP_MS: u32 = 100;

/// Send any management frame on the station interface.
fn send_management_frame<R: RadioTransmitter>(
    tx: &mut RawFrameTransmitter<R>,
    frame: &[u8],
    use_system_sequence: bool,
) -> TxResult<TxStatus> {
    tx.transmit_with_sequence(WifiInterface::Station, frame, use_system_sequence)
}

fn main() -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("ph-esp32-wifi-tx probe injection example");

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
    if wait_until_active(tx.radio(), WifiInterface::Station, &mut delay, DEFAULT_ACTIVATION_TIMEOUT_MS)
        .is_none()
    {
        warn!("STA not active after {} ms", DEFAULT_ACTIVATION_TIMEOUT_MS);
    }

    let mut buf = [0u8; 24];
    for seq in 0..BURST {
        let probe = ProbeRequest {
            header: MacHeader::probe_request(SOURCE).with_sequence_number(seq),
            ssid: None,
        };
        let len = probe.encode(&mut buf)?;
        let frame = &buf[..len];

        let status = send_management_frame(&mut tx, frame, false)?;
        info!(
            "probe seq {} (ctrl {:#06x}): {}",
            seq,
            sequence_control(frame).unwrap_or_default(),
            status
        );
        delay.delay_ms(GAP_MS);
    }

    wifi.stop()?;
    info!("done");
    Ok(())
}
