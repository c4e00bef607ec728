use std::borrow::Cow;

use super::layout;
use crate::formats::common::reader::PayloadReader;
use crate::formats::error::{DecodeError, Field};

/// Decoder for the fixed 14-byte RAWv1 layout.
///
/// Construction validates the format tag and minimum length; accessors are
/// pure functions of the underlying bytes.
#[derive(Debug, Clone)]
pub struct RawV1<'a> {
    data: Cow<'a, [u8]>,
}

impl<'a> RawV1<'a> {
    /// Borrows `payload` for the lifetime of the decoder. Valid only while
    /// the caller keeps the buffer alive; use [`RawV1::into_owned`] before
    /// retaining the decoder past the current scan cycle.
    pub fn new(payload: &'a [u8]) -> Result<Self, DecodeError> {
        validate(payload)?;
        Ok(Self {
            data: Cow::Borrowed(payload),
        })
    }

    /// Adopts an already-copied buffer; the decoder owns it outright.
    pub fn from_vec(payload: Vec<u8>) -> Result<RawV1<'static>, DecodeError> {
        validate(&payload)?;
        Ok(RawV1 {
            data: Cow::Owned(payload),
        })
    }

    /// Deep-copies the underlying bytes so the decoder no longer aliases the
    /// caller's buffer.
    pub fn into_owned(self) -> RawV1<'static> {
        RawV1 {
            data: Cow::Owned(self.data.into_owned()),
        }
    }

    pub fn data_format(&self) -> u8 {
        layout::FORMAT
    }

    /// The undecoded payload bytes backing this decoder.
    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }

    /// Temperature in degrees Celsius. Sign bit plus integer degrees in one
    /// byte, two-digit decimal fraction in the next.
    pub fn temperature(&self) -> Result<f64, DecodeError> {
        let reader = self.reader();
        let whole = reader.read_u8(layout::TEMPERATURE_OFFSET)?;
        let fraction = reader.read_u8(layout::TEMPERATURE_FRACTION_OFFSET)?;
        if fraction > layout::TEMPERATURE_FRACTION_MAX {
            return Err(DecodeError::OutOfRange {
                field: Field::Temperature,
                value: u32::from(fraction),
            });
        }

        let magnitude =
            f64::from(whole & layout::TEMPERATURE_INTEGER_MASK) + f64::from(fraction) / 100.0;
        if whole & layout::TEMPERATURE_SIGN_BIT != 0 {
            Ok(-magnitude)
        } else {
            Ok(magnitude)
        }
    }

    /// Relative humidity in percent, half-percent resolution.
    pub fn humidity(&self) -> Result<f64, DecodeError> {
        let raw = self.reader().read_u8(layout::HUMIDITY_OFFSET)?;
        Ok(f64::from(raw) * layout::HUMIDITY_SCALE_PCT)
    }

    /// Atmospheric pressure in pascals.
    pub fn pressure(&self) -> Result<u32, DecodeError> {
        let raw = self.reader().read_u16_be(layout::PRESSURE_RANGE)?;
        Ok(u32::from(raw) + layout::PRESSURE_OFFSET_PA)
    }

    /// Acceleration along the X axis in g.
    pub fn acceleration_x(&self) -> Result<f64, DecodeError> {
        self.acceleration(layout::ACCELERATION_X_RANGE)
    }

    /// Acceleration along the Y axis in g.
    pub fn acceleration_y(&self) -> Result<f64, DecodeError> {
        self.acceleration(layout::ACCELERATION_Y_RANGE)
    }

    /// Acceleration along the Z axis in g.
    pub fn acceleration_z(&self) -> Result<f64, DecodeError> {
        self.acceleration(layout::ACCELERATION_Z_RANGE)
    }

    /// Battery voltage in volts, millivolt resolution.
    pub fn battery_voltage(&self) -> Result<f64, DecodeError> {
        let millivolts = self.reader().read_u16_be(layout::VOLTAGE_RANGE)?;
        Ok(f64::from(millivolts) / 1000.0)
    }

    /// RAWv1 has no bit allocation for tx power.
    pub fn transmission_power(&self) -> Result<f64, DecodeError> {
        Err(not_available(Field::TransmissionPower))
    }

    /// RAWv1 has no bit allocation for the movement counter.
    pub fn movement_counter(&self) -> Result<u8, DecodeError> {
        Err(not_available(Field::MovementCounter))
    }

    /// RAWv1 has no bit allocation for the measurement sequence number.
    pub fn measurement_sequence_number(&self) -> Result<u16, DecodeError> {
        Err(not_available(Field::MeasurementSequence))
    }

    /// RAWv1 has no bit allocation for the MAC address.
    pub fn mac_address(&self) -> Result<crate::formats::MacAddress, DecodeError> {
        Err(not_available(Field::MacAddress))
    }

    fn acceleration(&self, range: std::ops::Range<usize>) -> Result<f64, DecodeError> {
        let raw = self.reader().read_i16_be(range)?;
        Ok(f64::from(raw) / 1000.0)
    }

    fn reader(&self) -> PayloadReader<'_> {
        PayloadReader::new(&self.data)
    }
}

fn validate(payload: &[u8]) -> Result<(), DecodeError> {
    let reader = PayloadReader::new(payload);
    let tag = reader.read_u8(layout::FORMAT_OFFSET)?;
    if tag != layout::FORMAT {
        return Err(DecodeError::InvalidFormat {
            expected: layout::FORMAT,
            actual: tag,
        });
    }
    reader.require_len(layout::MIN_LEN)
}

fn not_available(field: Field) -> DecodeError {
    DecodeError::NotAvailableInFormat {
        field,
        format: layout::FORMAT,
    }
}
