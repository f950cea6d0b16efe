//! Group 1: API Surface Tests
//!
//! Constants and the raw transmit entry point, checked before WiFi starts.
//!
//! | Test ID | Name | Description |
//! |---------|------|-------------|
//! | IT-1-001 | Interface constants | STA = 0, AP = 1, matching ESP-IDF |
//! | IT-1-002 | Entry point present | `esp_wifi_80211_tx` is linked |

use esp_idf_svc::sys::{esp_wifi_80211_tx, wifi_interface_t_WIFI_IF_AP, wifi_interface_t_WIFI_IF_STA};
use log::{error, info};

use ph_esp32_wifi_tx::WifiInterface;
use ph_esp32_wifi_tx::constants::{WIFI_IF_AP, WIFI_IF_STA};

use super::framework::TestResult;

/// IT-1-001: Interface identifiers match the driver's
pub fn test_interface_constants() -> TestResult {
    let checks = [
        ("WIFI_IF_STA == 0", WIFI_IF_STA == 0),
        ("WIFI_IF_AP == 1", WIFI_IF_AP == 1),
        (
            "STA matches ESP-IDF",
            WIFI_IF_STA == wifi_interface_t_WIFI_IF_STA as i32,
        ),
        (
            "AP matches ESP-IDF",
            WIFI_IF_AP == wifi_interface_t_WIFI_IF_AP as i32,
        ),
        (
            "WifiInterface ids",
            WifiInterface::Station.id() == WIFI_IF_STA
                && WifiInterface::AccessPoint.id() == WIFI_IF_AP,
        ),
    ];

    let mut result = TestResult::Pass;
    for (name, ok) in checks {
        if ok {
            info!("  {}: ok", name);
        } else {
            error!("  {}: mismatch", name);
            result = TestResult::Fail;
        }
    }
    result
}

/// IT-1-002: The raw transmit entry point is linked into the image
pub fn test_entry_point_present() -> TestResult {
    let entry = esp_wifi_80211_tx as usize;
    if entry != 0 {
        info!("  esp_wifi_80211_tx @ {:#010x}", entry);
        TestResult::Pass
    } else {
        error!("  esp_wifi_80211_tx not linked");
        TestResult::Fail
    }
}
