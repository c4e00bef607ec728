//! Format dispatch and the polymorphic advertisement handle.
//!
//! The dispatcher reads the leading data-format tag and constructs the one
//! matching decoder; callers work against the accessor union and never
//! branch on the concrete layout. The format set is closed (two members),
//! so dispatch is an enum match rather than trait objects.

use crate::AdvertisementRecord;
use crate::formats::MacAddress;
use crate::formats::error::DecodeError;
use crate::formats::rawv1::{self, RawV1};
use crate::formats::rawv2::{self, RawV2};

/// Bluetooth SIG company identifier assigned to Ruuvi Innovations,
/// little-endian in manufacturer-specific advertisement data.
pub const RUUVI_COMPANY_ID: u16 = 0x0499;

/// True when `data` starts with the Ruuvi company identifier.
///
/// # Examples
/// ```
/// use ruuvilens_core::is_ruuvi_manufacturer_data;
///
/// assert!(is_ruuvi_manufacturer_data(&[0x99, 0x04, 0x05]));
/// assert!(!is_ruuvi_manufacturer_data(&[0x4C, 0x00, 0x02]));
/// ```
pub fn is_ruuvi_manufacturer_data(data: &[u8]) -> bool {
    matches!(data, [lo, hi, ..] if u16::from_le_bytes([*lo, *hi]) == RUUVI_COMPANY_ID)
}

/// One decoded RuuviTag advertisement, behind a format-independent
/// accessor contract.
///
/// Construction via [`Advertisement::decode`] borrows the caller's buffer;
/// call [`Advertisement::into_owned`] (or start from
/// [`Advertisement::decode_owned`]) before retaining the handle past the
/// scope the buffer is valid in, e.g. beyond one scan callback.
///
/// # Examples
/// ```
/// use ruuvilens_core::Advertisement;
///
/// let payload = [
///     0x05, 0x12, 0xFC, 0x53, 0x94, 0xC3, 0x7C, 0x00, 0x04, 0xFF, 0xFC, 0x04,
///     0x0C, 0xAC, 0x36, 0x42, 0x00, 0xCD, 0xCB, 0xB8, 0x33, 0x4C, 0x88, 0x4F,
/// ];
/// let advert = Advertisement::decode(&payload)?;
/// assert_eq!(advert.data_format(), 5);
/// assert_eq!(advert.movement_counter()?, 66);
/// assert_eq!(advert.mac_address()?.to_string(), "cb:b8:33:4c:88:4f");
/// # Ok::<(), ruuvilens_core::DecodeError>(())
/// ```
#[derive(Debug, Clone)]
pub enum Advertisement<'a> {
    RawV1(RawV1<'a>),
    RawV2(RawV2<'a>),
}

impl<'a> Advertisement<'a> {
    /// Dispatches on the leading format tag and constructs the matching
    /// decoder, borrowing `payload`. Unknown tags and empty input fail with
    /// `UnsupportedFormat`.
    pub fn decode(payload: &'a [u8]) -> Result<Self, DecodeError> {
        match payload.first().copied() {
            Some(rawv1::layout::FORMAT) => Ok(Advertisement::RawV1(RawV1::new(payload)?)),
            Some(rawv2::layout::FORMAT) => Ok(Advertisement::RawV2(RawV2::new(payload)?)),
            other => Err(DecodeError::UnsupportedFormat { format: other }),
        }
    }

    /// Like [`Advertisement::decode`], but adopts an already-copied buffer
    /// so the handle is safe to retain indefinitely.
    pub fn decode_owned(payload: Vec<u8>) -> Result<Advertisement<'static>, DecodeError> {
        match payload.first().copied() {
            Some(rawv1::layout::FORMAT) => Ok(Advertisement::RawV1(RawV1::from_vec(payload)?)),
            Some(rawv2::layout::FORMAT) => Ok(Advertisement::RawV2(RawV2::from_vec(payload)?)),
            other => Err(DecodeError::UnsupportedFormat { format: other }),
        }
    }

    /// Decodes a full manufacturer-specific data field: the 2-byte
    /// little-endian company identifier followed by the payload.
    pub fn from_manufacturer_data(data: &'a [u8]) -> Result<Self, DecodeError> {
        let id = data.get(0..2).ok_or(DecodeError::TooShort {
            needed: 2,
            actual: data.len(),
        })?;
        let company_id = u16::from_le_bytes([id[0], id[1]]);
        if company_id != RUUVI_COMPANY_ID {
            return Err(DecodeError::UnknownManufacturer { company_id });
        }
        Self::decode(&data[2..])
    }

    /// Deep-copies the underlying bytes so the handle no longer aliases the
    /// caller's buffer.
    pub fn into_owned(self) -> Advertisement<'static> {
        match self {
            Advertisement::RawV1(inner) => Advertisement::RawV1(inner.into_owned()),
            Advertisement::RawV2(inner) => Advertisement::RawV2(inner.into_owned()),
        }
    }

    /// Data-format tag of the underlying layout (3 or 5).
    pub fn data_format(&self) -> u8 {
        match self {
            Advertisement::RawV1(inner) => inner.data_format(),
            Advertisement::RawV2(inner) => inner.data_format(),
        }
    }

    /// The undecoded payload bytes backing this handle.
    pub fn raw_data(&self) -> &[u8] {
        match self {
            Advertisement::RawV1(inner) => inner.raw_data(),
            Advertisement::RawV2(inner) => inner.raw_data(),
        }
    }

    /// Temperature in degrees Celsius.
    pub fn temperature(&self) -> Result<f64, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.temperature(),
            Advertisement::RawV2(inner) => inner.temperature(),
        }
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> Result<f64, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.humidity(),
            Advertisement::RawV2(inner) => inner.humidity(),
        }
    }

    /// Atmospheric pressure in pascals.
    pub fn pressure(&self) -> Result<u32, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.pressure(),
            Advertisement::RawV2(inner) => inner.pressure(),
        }
    }

    /// Acceleration along the X axis in g.
    pub fn acceleration_x(&self) -> Result<f64, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.acceleration_x(),
            Advertisement::RawV2(inner) => inner.acceleration_x(),
        }
    }

    /// Acceleration along the Y axis in g.
    pub fn acceleration_y(&self) -> Result<f64, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.acceleration_y(),
            Advertisement::RawV2(inner) => inner.acceleration_y(),
        }
    }

    /// Acceleration along the Z axis in g.
    pub fn acceleration_z(&self) -> Result<f64, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.acceleration_z(),
            Advertisement::RawV2(inner) => inner.acceleration_z(),
        }
    }

    /// Battery voltage in volts.
    pub fn battery_voltage(&self) -> Result<f64, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.battery_voltage(),
            Advertisement::RawV2(inner) => inner.battery_voltage(),
        }
    }

    /// Transmission power in dBm.
    pub fn transmission_power(&self) -> Result<f64, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.transmission_power(),
            Advertisement::RawV2(inner) => inner.transmission_power(),
        }
    }

    /// Movement counter incremented by the accelerometer interrupt.
    pub fn movement_counter(&self) -> Result<u8, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.movement_counter(),
            Advertisement::RawV2(inner) => inner.movement_counter(),
        }
    }

    /// Measurement sequence number.
    pub fn measurement_sequence_number(&self) -> Result<u16, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.measurement_sequence_number(),
            Advertisement::RawV2(inner) => inner.measurement_sequence_number(),
        }
    }

    /// MAC address of the broadcasting tag.
    pub fn mac_address(&self) -> Result<MacAddress, DecodeError> {
        match self {
            Advertisement::RawV1(inner) => inner.mac_address(),
            Advertisement::RawV2(inner) => inner.mac_address(),
        }
    }

    /// Flattens the handle into the serialization record: every accessor is
    /// sampled once and absent fields (structural or sentinel) become
    /// `None`, which the record omits from JSON entirely.
    ///
    /// # Examples
    /// ```
    /// use ruuvilens_core::Advertisement;
    ///
    /// let payload = [
    ///     0x03, 0x29, 0x1A, 0x1E, 0xCE, 0x1E, 0xFC, 0x18, 0xF9, 0x42, 0x02,
    ///     0xCA, 0x0B, 0x53,
    /// ];
    /// let record = Advertisement::decode(&payload)?.to_record();
    /// assert_eq!(record.format, 3);
    /// assert!(record.tx_power.is_none());
    /// # Ok::<(), ruuvilens_core::DecodeError>(())
    /// ```
    pub fn to_record(&self) -> AdvertisementRecord {
        AdvertisementRecord {
            raw: encode_hex(self.raw_data()),
            format: self.data_format(),
            temperature: self.temperature().ok(),
            humidity: self.humidity().ok(),
            pressure: self.pressure().ok(),
            accel_x: self.acceleration_x().ok(),
            accel_y: self.acceleration_y().ok(),
            accel_z: self.acceleration_z().ok(),
            voltage: self.battery_voltage().ok(),
            tx_power: self.transmission_power().ok(),
            meas_seq: self.measurement_sequence_number().ok(),
            movement_count: self.movement_counter().ok(),
            mac: self.mac_address().ok().map(|mac| mac.to_string()),
        }
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
