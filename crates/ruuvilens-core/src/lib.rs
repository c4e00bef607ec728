//! RuuviLens core library for decoding RuuviTag sensor advertisements.
//!
//! This crate implements the pure decoding pipeline used by the CLI: a
//! dispatcher inspects the leading data-format tag of a manufacturer
//! payload and hands the bytes to the matching layout decoder
//! (layout/reader/parser). Accessors extract one field at a time with
//! correct scaling and sign handling, and keep "this layout never carries
//! the field" distinguishable from "the sender marked the field invalid".
//! Decoding is byte-oriented and side-effect free; all I/O and logging
//! belong to front ends.
//!
//! Invariants:
//! - A decoder is only constructed over a tag- and length-validated payload.
//! - Accessors are deterministic pure functions of the underlying bytes.
//! - Record serialization omits absent fields entirely, never null/zero.
//!
//! References (normative):
//! - <https://docs.ruuvi.com/communication/bluetooth-advertisements/data-format-3-rawv1>
//! - <https://docs.ruuvi.com/communication/bluetooth-advertisements/data-format-5-rawv2>
//!
//! # Examples
//! ```
//! use ruuvilens_core::Advertisement;
//!
//! let payload = [
//!     0x03, 0x29, 0x1A, 0x1E, 0xCE, 0x1E, 0xFC, 0x18, 0xF9, 0x42, 0x02,
//!     0xCA, 0x0B, 0x53,
//! ];
//! let advert = Advertisement::decode(&payload)?;
//! assert_eq!(advert.data_format(), 3);
//! assert_eq!(advert.humidity()?, 20.5);
//! # Ok::<(), ruuvilens_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod advertisement;
mod formats;

pub use advertisement::{Advertisement, RUUVI_COMPANY_ID, is_ruuvi_manufacturer_data};
pub use formats::MacAddress;
pub use formats::error::{DecodeError, Field};
pub use formats::rawv1::RawV1;
pub use formats::rawv2::RawV2;

/// Flattened, serialization-friendly view of one decoded advertisement.
///
/// Fields the payload does not carry (either the layout has no bit
/// allocation for them, or the sender used the reserved "not available"
/// pattern) are `None` and omitted from the JSON output entirely.
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
/// let json = serde_json::to_value(&record).expect("record json");
/// assert_eq!(json["format"], 3);
/// assert!(json.get("tx-power").is_none());
/// # Ok::<(), ruuvilens_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvertisementRecord {
    /// Lowercase hex encoding of the original payload bytes.
    pub raw: String,
    /// Data-format tag (3 or 5).
    pub format: u8,
    /// Temperature in degrees Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Relative humidity in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Atmospheric pressure in pascals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<u32>,
    /// Acceleration along the X axis in g.
    #[serde(rename = "accel-x", skip_serializing_if = "Option::is_none")]
    pub accel_x: Option<f64>,
    /// Acceleration along the Y axis in g.
    #[serde(rename = "accel-y", skip_serializing_if = "Option::is_none")]
    pub accel_y: Option<f64>,
    /// Acceleration along the Z axis in g.
    #[serde(rename = "accel-z", skip_serializing_if = "Option::is_none")]
    pub accel_z: Option<f64>,
    /// Battery voltage in volts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,
    /// Transmission power in dBm.
    #[serde(rename = "tx-power", skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<f64>,
    /// Measurement sequence number.
    #[serde(rename = "meas-seq", skip_serializing_if = "Option::is_none")]
    pub meas_seq: Option<u16>,
    /// Movement counter incremented by the accelerometer interrupt.
    #[serde(rename = "movement-count", skip_serializing_if = "Option::is_none")]
    pub movement_count: Option<u8>,
    /// MAC address as lowercase `xx:xx:xx:xx:xx:xx`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
}
