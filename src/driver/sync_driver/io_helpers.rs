// src/driver/sync_driver/io_helpers.rs

use super::SyncDriver; // Access SyncDriver definition
use crate::common::{
    error::Dht22Error,
    hal_traits::{Dht22Line, Dht22Timer, Level},
    timing,
};
use core::fmt::Debug;

// Implementation block for the low-level line helpers
impl<IF> SyncDriver<IF>
where
    IF: Dht22Line + Dht22Timer,
    IF::Error: Debug,
{
    /// Polls the line every [`timing::POLL_INTERVAL_US`] until it reads
    /// `target`, returning the number of polls taken (the pulse width in
    /// ticks), or `None` once the count exceeds `limit`.
    ///
    /// The loop shape matters: the bound is checked first, then the counter
    /// is incremented, one tick elapses and the line is sampled. A limit of
    /// N therefore allows N + 1 polls, and the recorded width counts the
    /// final, matching poll. The bit classification threshold is calibrated
    /// against exactly this accounting.
    pub(super) fn poll_until(
        &mut self,
        target: Level,
        limit: u8,
    ) -> Result<Option<u8>, Dht22Error<IF::Error>> {
        let mut polls: u8 = 0;
        loop {
            if polls > limit {
                return Ok(None);
            }
            polls += 1;
            self.interface.delay_us(timing::POLL_INTERVAL_US);
            if self.interface.read_level()? == target {
                return Ok(Some(polls));
            }
        }
    }

    /// Wakes the sensor: holds the line low for [`timing::WAKE_PULSE`],
    /// then releases it to input mode so the sensor can take over.
    pub(super) fn send_wake_pulse(&mut self) -> Result<(), Dht22Error<IF::Error>> {
        self.interface.drive_low()?;
        self.interface.set_output()?;
        self.interface
            .delay_ms(timing::WAKE_PULSE.as_millis() as u32);
        self.interface.set_input()?;
        Ok(())
    }
}
