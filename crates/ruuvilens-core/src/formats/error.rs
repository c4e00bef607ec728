use std::fmt;

use thiserror::Error;

/// Measured quantity named in accessor errors and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Temperature,
    Humidity,
    Pressure,
    AccelerationX,
    AccelerationY,
    AccelerationZ,
    BatteryVoltage,
    TransmissionPower,
    MovementCounter,
    MeasurementSequence,
    MacAddress,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::Humidity => "humidity",
            Field::Pressure => "pressure",
            Field::AccelerationX => "acceleration-x",
            Field::AccelerationY => "acceleration-y",
            Field::AccelerationZ => "acceleration-z",
            Field::BatteryVoltage => "battery voltage",
            Field::TransmissionPower => "tx power",
            Field::MovementCounter => "movement counter",
            Field::MeasurementSequence => "measurement sequence number",
            Field::MacAddress => "MAC address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by decoder construction, dispatch, and field accessors.
///
/// `NotAvailableInFormat` and `ValueNotAvailable` both mean "no value", but
/// stay distinct: the former is a permanent property of the layout, the
/// latter a per-payload condition the sender signalled with a reserved
/// bit pattern.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("wrong data format for decoder: expected {expected}, got {actual}")]
    InvalidFormat { expected: u8, actual: u8 },
    #[error("unsupported data format: {}", unsupported_tag(.format))]
    UnsupportedFormat { format: Option<u8> },
    #[error("manufacturer id {company_id:#06x} is not a RuuviTag")]
    UnknownManufacturer { company_id: u16 },
    #[error("{field} raw value {value} is outside its encoding")]
    OutOfRange { field: Field, value: u32 },
    #[error("{field} is not available in data format {format}")]
    NotAvailableInFormat { field: Field, format: u8 },
    #[error("{field} was not measured by the sender")]
    ValueNotAvailable { field: Field },
}

fn unsupported_tag(format: &Option<u8>) -> String {
    match format {
        Some(tag) => tag.to_string(),
        None => "empty payload".to_string(),
    }
}
