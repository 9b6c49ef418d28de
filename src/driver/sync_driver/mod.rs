// src/driver/sync_driver/mod.rs

mod io_helpers;

use crate::common::{
    decode::{decode_samples, SAMPLE_COUNT},
    error::Dht22Error,
    hal_traits::{Dht22Line, Dht22Timer, Level},
    timing,
    types::Reading,
};
use core::fmt::Debug;

/// Blocking driver for a single DHT22 on a single data line.
///
/// The driver is stateless between calls: each `read` runs the whole
/// protocol from bus idle-wait to checksum verification and either returns
/// a fully validated [`Reading`] or one terminal [`Dht22Error`]. It holds
/// exclusive, synchronous control of the line for the duration of a call
/// and performs no locking; concurrent callers must serialize access
/// themselves.
#[derive(Debug)]
pub struct SyncDriver<IF>
where
    IF: Dht22Line + Dht22Timer,
    IF::Error: Debug,
{
    interface: IF,
}

impl<IF> SyncDriver<IF>
where
    IF: Dht22Line + Dht22Timer,
    IF::Error: Debug,
{
    pub fn new(interface: IF) -> Self {
        SyncDriver { interface }
    }

    /// Releases the wrapped interface.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Public Blocking Methods ---

    /// Performs one complete reading.
    ///
    /// Blocks the calling thread for the whole transaction (worst case
    /// ~270 ms, dominated by the sensor's sampling settle time). The error
    /// taxonomy distinguishes where in the handshake the sensor stopped
    /// responding; none of the errors is retried internally.
    pub fn read(&mut self) -> Result<Reading, Dht22Error<IF::Error>> {
        let samples = self.acquire_samples()?;
        decode_samples(&samples)
    }

    // --- Acquisition State Machine (Private) ---

    /// Runs the wake handshake and records the 41 pulse widths.
    fn acquire_samples(&mut self) -> Result<[u8; SAMPLE_COUNT], Dht22Error<IF::Error>> {
        // The line must be idle-high (pull-up) before the sensor can be
        // addressed at all.
        self.interface.set_input()?;
        self.poll_until(Level::High, timing::BUS_IDLE_POLL_LIMIT)?
            .ok_or(Dht22Error::BusHung)?;

        // Let the sensor finish its internal sampling cycle.
        self.interface
            .delay_ms(timing::PRE_WAKE_SETTLE.as_millis() as u32);

        self.send_wake_pulse()?;

        // The sensor acknowledges the wake pulse with low-then-high before
        // the bit stream starts.
        self.poll_until(Level::High, timing::ACK_START_POLL_LIMIT)?
            .ok_or(Dht22Error::NotPresent)?;
        self.poll_until(Level::Low, timing::ACK_END_POLL_LIMIT)?
            .ok_or(Dht22Error::AckTooLong)?;

        // Each bit is a sync pulse followed by a data pulse whose width
        // encodes the bit value. Widths are stored positionally; any
        // timeout abandons the whole read.
        let mut samples = [0u8; SAMPLE_COUNT];
        for sample in samples.iter_mut() {
            self.poll_until(Level::High, timing::SYNC_POLL_LIMIT)?
                .ok_or(Dht22Error::SyncTimeout)?;
            *sample = self
                .poll_until(Level::Low, timing::DATA_POLL_LIMIT)?
                .ok_or(Dht22Error::DataTimeout)?;
        }

        Ok(samples)
    }
}
