use std::borrow::Cow;

use super::layout;
use crate::formats::MacAddress;
use crate::formats::common::reader::PayloadReader;
use crate::formats::error::{DecodeError, Field};

/// Decoder for the fixed 24-byte RAWv2 layout.
///
/// Construction validates the format tag and minimum length. Every accessor
/// checks its own "not available" sentinel, so one unmeasured field never
/// affects another.
#[derive(Debug, Clone)]
pub struct RawV2<'a> {
    data: Cow<'a, [u8]>,
}

impl<'a> RawV2<'a> {
    /// Borrows `payload` for the lifetime of the decoder. Valid only while
    /// the caller keeps the buffer alive; use [`RawV2::into_owned`] before
    /// retaining the decoder past the current scan cycle.
    pub fn new(payload: &'a [u8]) -> Result<Self, DecodeError> {
        validate(payload)?;
        Ok(Self {
            data: Cow::Borrowed(payload),
        })
    }

    /// Adopts an already-copied buffer; the decoder owns it outright.
    pub fn from_vec(payload: Vec<u8>) -> Result<RawV2<'static>, DecodeError> {
        validate(&payload)?;
        Ok(RawV2 {
            data: Cow::Owned(payload),
        })
    }

    /// Deep-copies the underlying bytes so the decoder no longer aliases the
    /// caller's buffer.
    pub fn into_owned(self) -> RawV2<'static> {
        RawV2 {
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

    /// Temperature in degrees Celsius, 0.005 degree resolution.
    pub fn temperature(&self) -> Result<f64, DecodeError> {
        let raw = self.available_i16(layout::TEMPERATURE_RANGE, Field::Temperature)?;
        Ok(f64::from(raw) * layout::TEMPERATURE_SCALE_C)
    }

    /// Relative humidity in percent, 0.0025 percent resolution.
    pub fn humidity(&self) -> Result<f64, DecodeError> {
        let raw = self.available_u16(layout::HUMIDITY_RANGE, Field::Humidity)?;
        Ok(f64::from(raw) * layout::HUMIDITY_SCALE_PCT)
    }

    /// Atmospheric pressure in pascals.
    pub fn pressure(&self) -> Result<u32, DecodeError> {
        let raw = self.available_u16(layout::PRESSURE_RANGE, Field::Pressure)?;
        Ok(u32::from(raw) + layout::PRESSURE_OFFSET_PA)
    }

    /// Acceleration along the X axis in g.
    pub fn acceleration_x(&self) -> Result<f64, DecodeError> {
        self.acceleration(layout::ACCELERATION_X_RANGE, Field::AccelerationX)
    }

    /// Acceleration along the Y axis in g.
    pub fn acceleration_y(&self) -> Result<f64, DecodeError> {
        self.acceleration(layout::ACCELERATION_Y_RANGE, Field::AccelerationY)
    }

    /// Acceleration along the Z axis in g.
    pub fn acceleration_z(&self) -> Result<f64, DecodeError> {
        self.acceleration(layout::ACCELERATION_Z_RANGE, Field::AccelerationZ)
    }

    /// Battery voltage in volts, from the top 11 bits of the power-info
    /// word. The word's 0xFFFF sentinel invalidates tx power as well.
    pub fn battery_voltage(&self) -> Result<f64, DecodeError> {
        let word = self.power_info(Field::BatteryVoltage)?;
        let millivolts = word >> layout::VOLTAGE_SHIFT;
        Ok(f64::from(millivolts) / 1000.0 + layout::VOLTAGE_OFFSET_V)
    }

    /// Transmission power in dBm, from the bottom 5 bits of the power-info
    /// word. The word's 0xFFFF sentinel invalidates battery voltage as well.
    pub fn transmission_power(&self) -> Result<f64, DecodeError> {
        let word = self.power_info(Field::TransmissionPower)?;
        let steps = word & layout::TX_POWER_MASK;
        Ok(f64::from(steps) * layout::TX_POWER_STEP_DBM + layout::TX_POWER_OFFSET_DBM)
    }

    /// Movement counter incremented by the accelerometer interrupt.
    pub fn movement_counter(&self) -> Result<u8, DecodeError> {
        let raw = self.reader().read_u8(layout::MOVEMENT_COUNTER_OFFSET)?;
        if raw == layout::UNAVAILABLE_U8 {
            return Err(not_measured(Field::MovementCounter));
        }
        Ok(raw)
    }

    /// Measurement sequence number, incremented once per measurement cycle.
    pub fn measurement_sequence_number(&self) -> Result<u16, DecodeError> {
        self.available_u16(layout::SEQUENCE_RANGE, Field::MeasurementSequence)
    }

    /// MAC address of the broadcasting tag.
    pub fn mac_address(&self) -> Result<MacAddress, DecodeError> {
        let bytes = self.reader().read_slice(layout::MAC_RANGE)?;
        if bytes.iter().all(|&b| b == layout::UNAVAILABLE_U8) {
            return Err(not_measured(Field::MacAddress));
        }
        let mut octets = [0u8; 6];
        octets.copy_from_slice(bytes);
        Ok(MacAddress::from(octets))
    }

    fn acceleration(
        &self,
        range: std::ops::Range<usize>,
        field: Field,
    ) -> Result<f64, DecodeError> {
        let raw = self.available_i16(range, field)?;
        Ok(f64::from(raw) / 1000.0)
    }

    fn available_u16(
        &self,
        range: std::ops::Range<usize>,
        field: Field,
    ) -> Result<u16, DecodeError> {
        let raw = self.reader().read_u16_be(range)?;
        if raw == layout::UNAVAILABLE_U16 {
            return Err(not_measured(field));
        }
        Ok(raw)
    }

    fn available_i16(
        &self,
        range: std::ops::Range<usize>,
        field: Field,
    ) -> Result<i16, DecodeError> {
        let raw = self.reader().read_u16_be(range)?;
        if raw == layout::UNAVAILABLE_I16 {
            return Err(not_measured(field));
        }
        Ok(raw as i16)
    }

    fn power_info(&self, field: Field) -> Result<u16, DecodeError> {
        let word = self.reader().read_u16_be(layout::POWER_INFO_RANGE)?;
        if word == layout::UNAVAILABLE_U16 {
            return Err(not_measured(field));
        }
        Ok(word)
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

fn not_measured(field: Field) -> DecodeError {
    DecodeError::ValueNotAvailable { field }
}
