//! IEEE 802.11 management frame builders
//!
//! Just enough framing to produce beacons and probe requests for the raw
//! transmit path. Frames are encoded into a caller-provided buffer; nothing
//! is allocated. The FCS is appended by the hardware and is not part of the
//! encoded frame.
//!
//! This is not a parser: apart from [`sequence_control`], nothing here looks
//! at frames it did not build.
//!
//! # Example
//!
//! ```ignore
//! let mut buf = [0u8; 64];
//! let len = BeaconFrame::new(MAC, b"TEST").encode(&mut buf)?;
//! tx.transmit(WifiInterface::Station, &buf[..len])?;
//! ```

use crate::driver::error::{FrameError, FrameResult};
use crate::internal::constants::{
    BEACON_FIXED_LEN, BROADCAST_ADDR, DEFAULT_BEACON_INTERVAL, DEFAULT_CAPABILITY, DEFAULT_RATES,
    FC_BEACON, FC_PROBE_REQUEST, IE_HEADER_LEN, IE_SSID, IE_SUPPORTED_RATES, MAC_ADDR_LEN,
    MAC_HEADER_LEN, MAX_SSID_LEN, MAX_SUPPORTED_RATES, SEQUENCE_CONTROL_OFFSET,
};

/// A 48-bit MAC address
pub type MacAddress = [u8; MAC_ADDR_LEN];

// =============================================================================
// MAC Header
// =============================================================================

/// Three-address management frame header
///
/// Multi-byte fields are encoded little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacHeader {
    /// Frame control field
    pub frame_control: u16,
    /// Duration/ID field
    pub duration: u16,
    /// Receiver address
    pub addr1: MacAddress,
    /// Transmitter address
    pub addr2: MacAddress,
    /// BSSID
    pub addr3: MacAddress,
    /// Sequence control (sequence number << 4 | fragment number)
    pub sequence_control: u16,
}

impl MacHeader {
    /// Beacon header: broadcast receiver, `source` as transmitter and BSSID
    #[must_use]
    pub const fn beacon(source: MacAddress) -> Self {
        Self {
            frame_control: FC_BEACON,
            duration: 0,
            addr1: BROADCAST_ADDR,
            addr2: source,
            addr3: source,
            sequence_control: 0,
        }
    }

    /// Probe request header: broadcast receiver and BSSID
    #[must_use]
    pub const fn probe_request(source: MacAddress) -> Self {
        Self {
            frame_control: FC_PROBE_REQUEST,
            duration: 0,
            addr1: BROADCAST_ADDR,
            addr2: source,
            addr3: BROADCAST_ADDR,
            sequence_control: 0,
        }
    }

    /// Set the 12-bit sequence number (fragment number 0).
    ///
    /// Only meaningful when the frame is sent with system sequence numbers
    /// disabled; otherwise the driver overwrites it.
    #[must_use]
    pub const fn with_sequence_number(mut self, sequence: u16) -> Self {
        self.sequence_control = (sequence & 0x0FFF) << 4;
        self
    }

    /// Encode into a fixed-size array
    #[must_use]
    pub fn to_bytes(&self) -> [u8; MAC_HEADER_LEN] {
        let mut out = [0u8; MAC_HEADER_LEN];
        out[0..2].copy_from_slice(&self.frame_control.to_le_bytes());
        out[2..4].copy_from_slice(&self.duration.to_le_bytes());
        out[4..10].copy_from_slice(&self.addr1);
        out[10..16].copy_from_slice(&self.addr2);
        out[16..22].copy_from_slice(&self.addr3);
        out[SEQUENCE_CONTROL_OFFSET..].copy_from_slice(&self.sequence_control.to_le_bytes());
        out
    }

    /// Encode into `buf`, returning the number of bytes written.
    ///
    /// # Errors
    /// - `BufferTooSmall` - `buf` is shorter than the header
    pub fn write_to(&self, buf: &mut [u8]) -> FrameResult<usize> {
        let mut writer = Writer::new(buf, MAC_HEADER_LEN)?;
        writer.put(&self.to_bytes());
        Ok(writer.finish())
    }
}

// =============================================================================
// Beacon
// =============================================================================

/// Beacon frame with SSID and Supported Rates elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeaconFrame<'a> {
    /// MAC header
    pub header: MacHeader,
    /// TSF timestamp (the hardware may overwrite it)
    pub timestamp: u64,
    /// Beacon interval in time units
    pub interval: u16,
    /// Capability information
    pub capability: u16,
    /// SSID, at most 32 octets
    pub ssid: &'a [u8],
    /// Supported rates in 500 kbps units, basic rates with bit 7 set
    pub rates: &'a [u8],
}

impl<'a> BeaconFrame<'a> {
    /// Beacon from `source` advertising `ssid` with the default interval,
    /// capability and 802.11b rates
    #[must_use]
    pub const fn new(source: MacAddress, ssid: &'a [u8]) -> Self {
        Self {
            header: MacHeader::beacon(source),
            timestamp: 0,
            interval: DEFAULT_BEACON_INTERVAL,
            capability: DEFAULT_CAPABILITY,
            ssid,
            rates: &DEFAULT_RATES,
        }
    }

    /// Set the beacon interval
    #[must_use]
    pub const fn with_interval(mut self, interval: u16) -> Self {
        self.interval = interval;
        self
    }

    /// Set the capability information
    #[must_use]
    pub const fn with_capability(mut self, capability: u16) -> Self {
        self.capability = capability;
        self
    }

    /// Set the supported rates
    #[must_use]
    pub const fn with_rates(mut self, rates: &'a [u8]) -> Self {
        self.rates = rates;
        self
    }

    /// Encoded length in bytes
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        MAC_HEADER_LEN
            + BEACON_FIXED_LEN
            + IE_HEADER_LEN
            + self.ssid.len()
            + IE_HEADER_LEN
            + self.rates.len()
    }

    /// Encode into `buf`, returning the frame length.
    ///
    /// # Errors
    /// - `SsidTooLong` - SSID exceeds 32 octets
    /// - `TooManyRates` - more than 8 rates
    /// - `BufferTooSmall` - `buf` cannot hold the frame
    pub fn encode(&self, buf: &mut [u8]) -> FrameResult<usize> {
        if self.ssid.len() > MAX_SSID_LEN {
            return Err(FrameError::SsidTooLong);
        }
        if self.rates.len() > MAX_SUPPORTED_RATES {
            return Err(FrameError::TooManyRates);
        }

        let mut writer = Writer::new(buf, self.encoded_len())?;
        writer.put(&self.header.to_bytes());
        writer.put(&self.timestamp.to_le_bytes());
        writer.put(&self.interval.to_le_bytes());
        writer.put(&self.capability.to_le_bytes());
        writer.element(IE_SSID, self.ssid);
        writer.element(IE_SUPPORTED_RATES, self.rates);
        Ok(writer.finish())
    }
}

// =============================================================================
// Probe Request
// =============================================================================

/// Probe request, optionally carrying an SSID element
///
/// Without an SSID the frame is a bare header, which is what most injection
/// tests send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRequest<'a> {
    /// MAC header
    pub header: MacHeader,
    /// SSID element contents; `Some(b"")` is the wildcard SSID
    pub ssid: Option<&'a [u8]>,
}

impl<'a> ProbeRequest<'a> {
    /// Bare probe request from `source`
    #[must_use]
    pub const fn new(source: MacAddress) -> Self {
        Self {
            header: MacHeader::probe_request(source),
            ssid: None,
        }
    }

    /// Include an SSID element
    #[must_use]
    pub const fn with_ssid(mut self, ssid: &'a [u8]) -> Self {
        self.ssid = Some(ssid);
        self
    }

    /// Encoded length in bytes
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        match self.ssid {
            Some(ssid) => MAC_HEADER_LEN + IE_HEADER_LEN + ssid.len(),
            None => MAC_HEADER_LEN,
        }
    }

    /// Encode into `buf`, returning the frame length.
    ///
    /// # Errors
    /// - `SsidTooLong` - SSID exceeds 32 octets
    /// - `BufferTooSmall` - `buf` cannot hold the frame
    pub fn encode(&self, buf: &mut [u8]) -> FrameResult<usize> {
        if self.ssid.is_some_and(|ssid| ssid.len() > MAX_SSID_LEN) {
            return Err(FrameError::SsidTooLong);
        }

        let mut writer = Writer::new(buf, self.encoded_len())?;
        writer.put(&self.header.to_bytes());
        if let Some(ssid) = self.ssid {
            writer.element(IE_SSID, ssid);
        }
        Ok(writer.finish())
    }
}

// =============================================================================
// Accessors
// =============================================================================

/// Read the sequence-control field of a frame.
///
/// Returns `None` if the frame is shorter than a MAC header. No other
/// validation is done.
#[must_use]
pub fn sequence_control(frame: &[u8]) -> Option<u16> {
    let bytes = frame.get(SEQUENCE_CONTROL_OFFSET..SEQUENCE_CONTROL_OFFSET + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

// =============================================================================
// Writer
// =============================================================================

/// Sequential writer over a buffer whose capacity was checked up front
struct Writer<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl<'b> Writer<'b> {
    fn new(buf: &'b mut [u8], required: usize) -> FrameResult<Self> {
        if buf.len() < required {
            return Err(FrameError::BufferTooSmall);
        }
        Ok(Self { buf, pos: 0 })
    }

    fn put(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    // Callers bound `body` to 32 bytes, so the length fits the octet.
    fn element(&mut self, id: u8, body: &[u8]) {
        self.put(&[id, body.len() as u8]);
        self.put(body);
    }

    fn finish(self) -> usize {
        self.pos
    }
}
