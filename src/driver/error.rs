//! Error types for the raw frame transmitter
//!
//! Errors are organized by where they are detected:
//! - [`ArgumentError`]: Local validation failures, caught before the driver is called
//! - [`DriverError`]: Non-zero status codes reported by the radio driver
//! - [`FrameError`]: Failures while building a management frame
//!
//! The unified [`TxError`] enum wraps the transmit-path errors.

// =============================================================================
// Argument Errors
// =============================================================================

/// Local argument validation errors
///
/// These are contract violations detected without invoking the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// Interface identifier is neither station (0) nor access point (1)
    InvalidInterface(i32),
    /// Frame buffer is empty
    EmptyFrame,
}

impl core::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArgumentError::InvalidInterface(id) => write!(f, "{} ({id})", self.as_str()),
            ArgumentError::EmptyFrame => f.write_str(self.as_str()),
        }
    }
}

impl ArgumentError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArgumentError::InvalidInterface(_) => "invalid WiFi interface (0 for STA, 1 for AP)",
            ArgumentError::EmptyFrame => "frame data cannot be empty",
        }
    }
}

// =============================================================================
// Driver Errors
// =============================================================================

/// Opaque non-zero status code returned by the radio driver
///
/// The meaning of the code is defined by the driver (radio not started,
/// interface inactive, oversized buffer, allocation failure, ...). It is
/// carried verbatim and never reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverError(i32);

impl DriverError {
    /// Wrap a driver status code.
    ///
    /// Returns `None` for zero, which is not an error.
    #[must_use]
    pub const fn new(code: i32) -> Option<Self> {
        if code == 0 { None } else { Some(Self(code)) }
    }

    /// The raw status code as reported by the driver
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "driver status {:#x}", self.0)
    }
}

// =============================================================================
// Frame Errors
// =============================================================================

/// Errors building an 802.11 management frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Output buffer cannot hold the encoded frame
    BufferTooSmall,
    /// SSID longer than 32 octets
    SsidTooLong,
    /// More than 8 entries for the Supported Rates element
    TooManyRates,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FrameError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FrameError::BufferTooSmall => "buffer too small for frame",
            FrameError::SsidTooLong => "SSID longer than 32 bytes",
            FrameError::TooManyRates => "more than 8 supported rates",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// Transmit-path error.
///
/// ```ignore
/// match tx.transmit(WifiInterface::Station, &frame)?.check() {
///     Ok(()) => { /* accepted */ }
///     Err(TxError::Driver(e)) => { /* e.code() is driver-defined */ }
///     Err(TxError::InvalidArgument(_)) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxError {
    /// Local validation failure, the driver was not called
    InvalidArgument(ArgumentError),
    /// The driver rejected the frame
    Driver(DriverError),
}

impl TxError {
    /// Status code equivalent of this error.
    ///
    /// Driver errors yield their own code. Argument errors yield
    /// [`INVALID_ARGUMENT_CODE`], mirroring `ESP_ERR_INVALID_ARG`.
    #[must_use]
    pub const fn status_code(&self) -> i32 {
        match self {
            TxError::InvalidArgument(_) => INVALID_ARGUMENT_CODE,
            TxError::Driver(e) => e.code(),
        }
    }
}

/// Status code reported for local argument errors (`ESP_ERR_INVALID_ARG`)
pub const INVALID_ARGUMENT_CODE: i32 = 0x102;

impl core::fmt::Display for TxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TxError::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            TxError::Driver(e) => write!(f, "driver: {e}"),
        }
    }
}

impl core::error::Error for ArgumentError {}
impl core::error::Error for DriverError {}
impl core::error::Error for FrameError {}

impl core::error::Error for TxError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            TxError::InvalidArgument(e) => Some(e),
            TxError::Driver(e) => Some(e),
        }
    }
}

impl From<ArgumentError> for TxError {
    fn from(e: ArgumentError) -> Self {
        TxError::InvalidArgument(e)
    }
}

impl From<DriverError> for TxError {
    fn from(e: DriverError) -> Self {
        TxError::Driver(e)
    }
}

/// Result type alias for transmit operations
pub type TxResult<T> = core::result::Result<T, TxError>;

/// Result type alias for frame building
pub type FrameResult<T> = core::result::Result<T, FrameError>;

// =============================================================================
// Unit Tests
// =============================================================================
