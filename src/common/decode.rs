// src/common/decode.rs

use super::error::Dht22Error;
use super::timing::ZERO_BIT_MAX_POLLS;
use super::types::Reading;

/// Number of pulse-width samples acquired per reading. The datasheet
/// describes a 40-bit stream, but the sensor sends an extra bit at the
/// start; sample 0 is discarded and the payload sits at samples 1..41.
pub const SAMPLE_COUNT: usize = 41;

// Positions of the payload fields within the 41-sample stream, each
// transmitted most-significant bit first.
const HUMIDITY_SAMPLES: core::ops::Range<usize> = 1..17;
const TEMPERATURE_SAMPLES: core::ops::Range<usize> = 17..33;
const CHECKSUM_SAMPLES: core::ops::Range<usize> = 33..41;

/// Classifies one pulse-width sample as a logical bit.
#[inline]
fn is_one(polls: u8) -> bool {
    polls > ZERO_BIT_MAX_POLLS
}

/// Assembles a group of samples into an integer, MSB first.
fn assemble(samples: &[u8]) -> u16 {
    samples
        .iter()
        .fold(0u16, |word, &polls| (word << 1) | u16::from(is_one(polls)))
}

/// Calculates the checksum the sensor is expected to transmit: the
/// truncated sum of the four payload bytes, taken from the words exactly
/// as transmitted (temperature sign flag included).
pub fn transmitted_checksum(humidity_raw: u16, temperature_raw: u16) -> u8 {
    let [humidity_high, humidity_low] = humidity_raw.to_be_bytes();
    let [temperature_high, temperature_low] = temperature_raw.to_be_bytes();
    humidity_high
        .wrapping_add(humidity_low)
        .wrapping_add(temperature_high)
        .wrapping_add(temperature_low)
}

/// Decodes a full stream of pulse-width samples into a validated reading.
///
/// Classifies each sample, extracts the humidity, temperature and checksum
/// fields, and verifies the checksum before converting anything. Returns
/// `ChecksumMismatch` if the transmitted checksum disagrees with the one
/// calculated from the payload; no partial result is produced.
pub fn decode_samples<E>(samples: &[u8; SAMPLE_COUNT]) -> Result<Reading, Dht22Error<E>>
where
    E: core::fmt::Debug,
{
    let humidity_raw = assemble(&samples[HUMIDITY_SAMPLES]);
    let temperature_raw = assemble(&samples[TEMPERATURE_SAMPLES]);
    let expected = assemble(&samples[CHECKSUM_SAMPLES]) as u8;

    let calculated = transmitted_checksum(humidity_raw, temperature_raw);
    if calculated != expected {
        return Err(Dht22Error::ChecksumMismatch {
            expected,
            calculated,
        });
    }

    Ok(Reading::from_raw(humidity_raw, temperature_raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Widths comfortably on each side of the classification threshold
    const ZERO_WIDTH: u8 = 1;
    const ONE_WIDTH: u8 = 6;

    /// Builds a sample stream for the given raw words and checksum byte.
    fn samples_for(humidity_raw: u16, temperature_raw: u16, checksum: u8) -> [u8; SAMPLE_COUNT] {
        let mut samples = [ZERO_WIDTH; SAMPLE_COUNT];
        for bit in 0..16 {
            if humidity_raw & (1 << (15 - bit)) != 0 {
                samples[1 + bit] = ONE_WIDTH;
            }
            if temperature_raw & (1 << (15 - bit)) != 0 {
                samples[17 + bit] = ONE_WIDTH;
            }
        }
        for bit in 0..8 {
            if checksum & (1 << (7 - bit)) != 0 {
                samples[33 + bit] = ONE_WIDTH;
            }
        }
        samples
    }

    #[test]
    fn test_round_trip_known_vector() {
        let checksum = transmitted_checksum(0x01F4, 0x00C8);
        let samples = samples_for(0x01F4, 0x00C8, checksum);

        let reading = decode_samples::<()>(&samples).unwrap();
        assert_eq!(reading.humidity(), 50.0);
        assert_eq!(reading.temperature(), 20.0);
    }

    #[test]
    fn test_negative_temperature_vector() {
        let checksum = transmitted_checksum(0x01F4, 0x80C8);
        let samples = samples_for(0x01F4, 0x80C8, checksum);

        let reading = decode_samples::<()>(&samples).unwrap();
        assert_eq!(reading.temperature(), -20.0);
    }

    #[test]
    fn test_checksum_covers_sign_flag() {
        // 0x01 + 0xF4 + 0x80 + 0xC8 = 0x23D, truncated to 0x3D
        assert_eq!(transmitted_checksum(0x01F4, 0x80C8), 0x3D);
        // Same magnitude without the sign flag sums differently
        assert_eq!(transmitted_checksum(0x01F4, 0x00C8), 0xBD);
    }

    #[test]
    fn test_checksum_mismatch_rejected() {
        let checksum = transmitted_checksum(0x01F4, 0x00C8);
        let samples = samples_for(0x01F4, 0x00C8, checksum ^ 0x01);

        let result = decode_samples::<()>(&samples);
        assert!(matches!(
            result,
            Err(Dht22Error::ChecksumMismatch {
                expected,
                calculated,
            }) if expected == (checksum ^ 0x01) && calculated == checksum
        ));
    }

    #[test]
    fn test_classification_boundary() {
        // Threshold is "> 5": exactly 5 polls is a 0, 6 polls is a 1
        assert!(!is_one(5));
        assert!(is_one(6));

        let checksum = transmitted_checksum(0x0001, 0x0000);
        let mut samples = samples_for(0x0001, 0x0000, checksum);
        samples[16] = 5; // humidity LSB back to 0
        let reading = decode_samples::<()>(&samples);
        assert!(matches!(
            reading,
            Err(Dht22Error::ChecksumMismatch { .. })
        ));

        samples[16] = 6;
        let reading = decode_samples::<()>(&samples).unwrap();
        assert_eq!(reading.humidity_raw(), 0x0001);
    }

    #[test]
    fn test_leading_sample_ignored() {
        let checksum = transmitted_checksum(0x0102, 0x0304);
        let mut samples = samples_for(0x0102, 0x0304, checksum);

        let baseline = decode_samples::<()>(&samples).unwrap();
        samples[0] = u8::MAX; // the quirk leading bit carries no payload
        let widened = decode_samples::<()>(&samples).unwrap();
        assert_eq!(baseline, widened);
    }

    #[test]
    fn test_assemble_is_msb_first() {
        let mut samples = [ZERO_WIDTH; 16];
        samples[0] = ONE_WIDTH;
        assert_eq!(assemble(&samples), 0x8000);
        samples[0] = ZERO_WIDTH;
        samples[15] = ONE_WIDTH;
        assert_eq!(assemble(&samples), 0x0001);
    }
}
