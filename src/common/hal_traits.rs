// src/common/hal_traits.rs

use core::fmt::Debug;

/// Logic level observed on the data line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

/// Abstraction for the single data line shared by driver and sensor.
///
/// The line is bidirectional: the driver holds it low to wake the sensor,
/// then releases it to input mode and samples the levels the sensor drives.
/// `drive_high` is never used by the current protocol (the driver only ever
/// drives low, then releases), but it is part of the capability set so
/// implementations can expose the full pin.
pub trait Dht22Line {
    /// Associated error type for pin operations.
    type Error: Debug;

    /// Configures the line as a floating input so the sensor can drive it.
    fn set_input(&mut self) -> Result<(), Self::Error>;

    /// Configures the line as an output at its currently latched level.
    fn set_output(&mut self) -> Result<(), Self::Error>;

    /// Latches the output level low.
    fn drive_low(&mut self) -> Result<(), Self::Error>;

    /// Latches the output level high.
    fn drive_high(&mut self) -> Result<(), Self::Error>;

    /// Samples the current level of the line.
    fn read_level(&mut self) -> Result<Level, Self::Error>;
}

/// Abstraction for the busy-wait delays required by the DHT22 timings.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::delay::DelayNs` if embedded-hal v1 is mandated.
pub trait Dht22Timer {
    /// Busy-wait for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Bundles an `embedded-hal` pin and delay as the driver interface.
///
/// The DHT22 data line is open-drain with an external pull-up, so a pin
/// implementing both `InputPin` and `OutputPin` covers the whole capability
/// set: releasing the line to input mode is modeled as driving high (the
/// pull-up takes over) and `set_output` needs no hardware action.
///
/// Requires `embedded-hal` v1.0 traits.
#[cfg(feature = "impl-hal")]
pub struct OpenDrainLine<P, D> {
    pin: P,
    delay: D,
}

#[cfg(feature = "impl-hal")]
impl<P, D> OpenDrainLine<P, D>
where
    P: embedded_hal::digital::InputPin + embedded_hal::digital::OutputPin,
    D: embedded_hal::delay::DelayNs,
{
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Releases the wrapped pin and delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

#[cfg(feature = "impl-hal")]
impl<P, D> Dht22Line for OpenDrainLine<P, D>
where
    P: embedded_hal::digital::InputPin + embedded_hal::digital::OutputPin,
    D: embedded_hal::delay::DelayNs,
{
    type Error = P::Error;

    fn set_input(&mut self) -> Result<(), Self::Error> {
        // Release the line; the external pull-up restores idle-high.
        self.pin.set_high()
    }

    fn set_output(&mut self) -> Result<(), Self::Error> {
        // Open-drain: the latched level is already in effect.
        Ok(())
    }

    fn drive_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn drive_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }

    fn read_level(&mut self) -> Result<Level, Self::Error> {
        self.pin
            .is_high()
            .map(|high| if high { Level::High } else { Level::Low })
    }
}

#[cfg(feature = "impl-hal")]
impl<P, D> Dht22Timer for OpenDrainLine<P, D>
where
    P: embedded_hal::digital::InputPin + embedded_hal::digital::OutputPin,
    D: embedded_hal::delay::DelayNs,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
