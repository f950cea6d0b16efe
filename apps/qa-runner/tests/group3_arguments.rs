//! Group 3: Argument Validation Tests
//!
//! Rejected requests must never reach the driver, so these pass even when
//! the WiFi driver is not started.
//!
//! | Test ID | Name | Description |
//! |---------|------|-------------|
//! | IT-3-001 | Invalid interface | Ids other than 0 and 1 are rejected |
//! | IT-3-002 | Empty frame | Zero-length frames are rejected |

use log::{error, info};

use ph_esp32_wifi_tx::{ArgumentError, TxError, WifiInterface};

use super::framework::{TestContext, TestResult, test_frame};

/// IT-3-001: Invalid interface ids are rejected before the driver
pub fn test_invalid_interface(ctx: &mut TestContext) -> TestResult {
    let frame = test_frame::<128>();
    let mut result = TestResult::Pass;

    for id in [99, 2, -1] {
        match ctx.tx.transmit_raw(id, &frame, true) {
            Err(e @ TxError::InvalidArgument(ArgumentError::InvalidInterface(got))) if got == id => {
                info!("  id {}: rejected ({}, code {:#x})", id, e, e.status_code());
            }
            Err(e) => {
                error!("  id {}: wrong error: {}", id, e);
                result = TestResult::Fail;
            }
            Ok(status) => {
                error!("  id {}: reached the driver ({})", id, status);
                result = TestResult::Fail;
            }
        }
    }
    result
}

/// IT-3-002: Empty frames are rejected before the driver
pub fn test_empty_frame(ctx: &mut TestContext) -> TestResult {
    match ctx.tx.transmit(WifiInterface::Station, &[]) {
        Err(TxError::InvalidArgument(ArgumentError::EmptyFrame)) => {
            info!("  empty frame rejected");
            TestResult::Pass
        }
        Err(e) => {
            error!("  wrong error: {}", e);
            TestResult::Fail
        }
        Ok(status) => {
            error!("  empty frame reached the driver ({})", status);
            TestResult::Fail
        }
    }
}
