//! Centralized Constants
//!
//! Single source of truth for the numeric values used throughout the crate.
//!
//! # Organization
//!
//! - **Interface identifiers**: values consumed by the radio driver
//! - **Frame sizes**: IEEE 802.11 header and element dimensions
//! - **Frame control**: type/subtype values for the frames we build
//! - **Timing**: activation polling

// =============================================================================
// Interface Identifiers
// =============================================================================

/// Station interface identifier (`wifi_interface_t::WIFI_IF_STA`)
pub const WIFI_IF_STA: i32 = 0;

/// Access-point interface identifier (`wifi_interface_t::WIFI_IF_AP`)
pub const WIFI_IF_AP: i32 = 1;

// =============================================================================
// Frame Sizes
// =============================================================================

/// 802.11 MAC header length for management frames (no HT control, no addr4)
pub const MAC_HEADER_LEN: usize = 24;

/// Largest frame the ESP-IDF raw transmit path documents as accepted.
///
/// Informational only: oversized frames are handed to the driver, which
/// reports its own status code.
pub const MAX_FRAME_LEN: usize = 1500;

/// MAC address length
pub const MAC_ADDR_LEN: usize = 6;

/// Offset of the sequence-control field inside the MAC header
pub const SEQUENCE_CONTROL_OFFSET: usize = 22;

/// Beacon fixed parameters: timestamp (8) + interval (2) + capability (2)
pub const BEACON_FIXED_LEN: usize = 12;

/// Information element header: element id (1) + length (1)
pub const IE_HEADER_LEN: usize = 2;

/// Maximum SSID length in octets
pub const MAX_SSID_LEN: usize = 32;

/// Maximum entries in a Supported Rates element
pub const MAX_SUPPORTED_RATES: usize = 8;

/// Broadcast address
pub const BROADCAST_ADDR: [u8; MAC_ADDR_LEN] = [0xFF; MAC_ADDR_LEN];

// =============================================================================
// Frame Control
// =============================================================================

/// Frame control field for a beacon (type 0, subtype 8)
pub const FC_BEACON: u16 = 0x0080;

/// Frame control field for a probe request (type 0, subtype 4)
pub const FC_PROBE_REQUEST: u16 = 0x0040;

/// SSID element id
pub const IE_SSID: u8 = 0x00;

/// Supported Rates element id
pub const IE_SUPPORTED_RATES: u8 = 0x01;

/// Default beacon interval in time units (102.4 ms)
pub const DEFAULT_BEACON_INTERVAL: u16 = 0x0064;

/// Default capability info: ESS + short preamble
pub const DEFAULT_CAPABILITY: u16 = 0x0011;

/// 1, 2, 5.5 and 11 Mbps, all marked basic
pub const DEFAULT_RATES: [u8; 4] = [0x82, 0x84, 0x8B, 0x96];

// =============================================================================
// Timing
// =============================================================================

/// Interval between activation state polls in milliseconds
pub const ACTIVATION_POLL_MS: u32 = 10;

/// Default time allowed for an interface to come up in milliseconds
pub const DEFAULT_ACTIVATION_TIMEOUT_MS: u32 = 500;
