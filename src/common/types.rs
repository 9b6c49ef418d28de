// src/common/types.rs

/// Sign flag in the transmitted temperature word. The DHT22 does not use
/// two's complement: bit 15 flags a negative value and bits 14..0 carry
/// the magnitude.
const SIGN_BIT: u16 = 0x8000;
/// Magnitude portion of a transmitted 16-bit word.
const MAGNITUDE_MASK: u16 = 0x7FFF;
/// Transmitted values are tenths of a unit.
const SCALE: f32 = 10.0;

/// A validated humidity/temperature reading.
///
/// Stores the two 16-bit words exactly as transmitted; the converted
/// values are derived on access. Humidity is always non-negative,
/// temperature may be negative.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Reading {
    humidity_raw: u16,
    temperature_raw: u16,
}

impl Reading {
    /// Builds a reading from the raw transmitted words. No range checks are
    /// applied; the sensor's nominal ranges (0-100 %RH, -40..+80 C) are not
    /// enforced here.
    pub fn from_raw(humidity_raw: u16, temperature_raw: u16) -> Self {
        Self {
            humidity_raw,
            temperature_raw,
        }
    }

    /// Relative humidity in percent, one decimal of precision.
    pub fn humidity(&self) -> f32 {
        f32::from(self.humidity_raw & MAGNITUDE_MASK) / SCALE
    }

    /// Temperature in degrees Celsius, one decimal of precision.
    pub fn temperature(&self) -> f32 {
        let magnitude = f32::from(self.temperature_raw & MAGNITUDE_MASK) / SCALE;
        if self.temperature_raw & SIGN_BIT != 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// The humidity word exactly as transmitted.
    pub fn humidity_raw(&self) -> u16 {
        self.humidity_raw
    }

    /// The temperature word exactly as transmitted (sign flag included).
    pub fn temperature_raw(&self) -> u16 {
        self.temperature_raw
    }
}
