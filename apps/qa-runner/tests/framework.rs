//! Test Framework
//!
//! Common types and shared state for the on-device checks.

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::modem::Modem;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, EspWifi};

use ph_esp32_wifi_tx::integration::esp_idf::EspIdfRadio;
use ph_esp32_wifi_tx::{MacAddress, MacHeader, RawFrameTransmitter};

// =============================================================================
// Test Result
// =============================================================================

/// Test result type
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
}

impl TestResult {
    pub fn symbol(&self) -> &'static str {
        match self {
            TestResult::Pass => "✓",
            TestResult::Fail => "✗",
            TestResult::Skip => "○",
        }
    }
}

// =============================================================================
// Test Statistics
// =============================================================================

/// Accumulated test statistics
pub struct TestStats {
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl TestStats {
    pub const fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    pub fn record(&mut self, result: TestResult) {
        match result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail => self.failed += 1,
            TestResult::Skip => self.skipped += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed + self.skipped
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

// =============================================================================
// Test Context
// =============================================================================

/// Shared state across tests
pub struct TestContext {
    pub wifi: BlockingWifi<EspWifi<'static>>,
    pub tx: RawFrameTransmitter<EspIdfRadio>,
    pub delay: FreeRtos,
    pub sta_active: bool,
    pub ap_active: bool,
}

impl TestContext {
    /// Create the WiFi driver (not started) and a transmitter over it
    ///
    /// Start/stop tracking is registered first, so every later `start` is seen.
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        nvs: EspDefaultNvsPartition,
    ) -> anyhow::Result<Self> {
        EspIdfRadio::track_lifecycle()?;
        let wifi = BlockingWifi::wrap(EspWifi::new(modem, sysloop.clone(), Some(nvs))?, sysloop)?;

        Ok(Self {
            wifi,
            tx: RawFrameTransmitter::new(EspIdfRadio::new()),
            delay: FreeRtos,
            sta_active: false,
            ap_active: false,
        })
    }

    /// Stop the WiFi driver, deactivating both interfaces
    pub fn deactivate_all(&mut self) -> anyhow::Result<()> {
        if self.wifi.is_started()? {
            self.wifi.stop()?;
        }
        self.sta_active = false;
        self.ap_active = false;
        Ok(())
    }
}

// =============================================================================
// Test Frames
// =============================================================================

/// Source address used by every test frame
pub const TEST_SOURCE: MacAddress = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];

/// Broadcast beacon header followed by `N - 24` zero payload bytes
pub fn test_frame<const N: usize>() -> [u8; N] {
    let mut frame = [0u8; N];
    let header = MacHeader::beacon(TEST_SOURCE).to_bytes();
    frame[..header.len()].copy_from_slice(&header);
    frame
}
