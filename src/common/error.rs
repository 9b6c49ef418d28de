// src/common/error.rs

/// Errors produced by a single read attempt.
///
/// Every variant is terminal for the call that produced it: the driver
/// abandons the in-progress read and never retries on its own. Callers
/// that want retry/backoff implement it themselves.
#[derive(Debug, thiserror::Error)]
pub enum Dht22Error<E = ()>
where
    E: core::fmt::Debug, // Need Debug for the generic Io error
{
    /// Underlying GPIO error from the HAL implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// The line never returned to its idle-high state before a wake
    /// pulse could be sent. Usually a wiring fault or a missing pull-up.
    #[error("Bus hung, line never idled high")]
    BusHung,

    /// The sensor did not begin its acknowledgment in time. Likely
    /// disconnected or unpowered.
    #[error("Sensor not present on the line")]
    NotPresent,

    /// The acknowledgment pulse exceeded its expected duration
    /// (electrical/timing fault).
    #[error("Acknowledgment pulse too long")]
    AckTooLong,

    /// A bit's sync pulse did not arrive in time; the partial stream is
    /// discarded.
    #[error("Sync pulse timeout mid-stream")]
    SyncTimeout,

    /// A bit's data pulse did not end in time.
    #[error("Data pulse timeout mid-stream")]
    DataTimeout,

    /// The full stream was acquired but the transmitted checksum does not
    /// match the one calculated from the payload bytes.
    #[error("Checksum mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },
}

// Allow mapping from the underlying HAL error if From is implemented
impl<E: core::fmt::Debug> From<E> for Dht22Error<E> {
    fn from(e: E) -> Self {
        Dht22Error::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
