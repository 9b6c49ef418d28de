// src/common/timing.rs

use core::time::Duration;

// Note: All bounds below are fixed by the sensor's datasheet timing
// tolerances and must be reproduced exactly; they are protocol constants,
// not tunables. A poll loop checks its bound first, then increments its
// counter, delays one tick and samples the line, so a limit of N allows
// N + 1 polls before the phase fails.

// === Polling Tick ===

/// Interval between line samples inside every bounded poll loop.
pub const POLL_INTERVAL_US: u32 = 2;

// === Wake Handshake ===

/// Bound for the initial idle-high wait (126 polls, ~252 us).
pub const BUS_IDLE_POLL_LIMIT: u8 = 125;
/// The sensor needs to finish its internal sampling cycle after the bus
/// idles high, before it can be woken for a readout.
pub const PRE_WAKE_SETTLE: Duration = Duration::from_millis(250);
/// Duration the line is held low to wake the sensor (datasheet: >= 1 ms,
/// 20 ms gives plenty of margin on slow hosts).
pub const WAKE_PULSE: Duration = Duration::from_millis(20);
/// Bound for the start of the acknowledgment pulse
/// (datasheet 20-40 us; 26 polls, ~52 us).
pub const ACK_START_POLL_LIMIT: u8 = 25;
/// Bound for the end of the acknowledgment pulse
/// (datasheet 80 us; 51 polls, ~102 us).
pub const ACK_END_POLL_LIMIT: u8 = 50;

// === Bit Stream ===

/// Bound for each bit's sync pulse (datasheet 50 us; 36 polls, ~72 us).
pub const SYNC_POLL_LIMIT: u8 = 35;
/// Bound for each bit's data pulse (datasheet 80 us max; 51 polls, ~102 us).
pub const DATA_POLL_LIMIT: u8 = 50;
/// Widest data pulse still classified as a logical 0. Short pulses
/// (~26-28 us) encode 0, long pulses (~70 us) encode 1; loop overhead makes
/// each recorded poll worth well over its nominal 2 us, so the observed
/// cutover sits at 5 polls.
pub const ZERO_BIT_MAX_POLLS: u8 = 5;
