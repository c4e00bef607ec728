pub const FORMAT: u8 = 3;
pub const MIN_LEN: usize = 14;

pub const FORMAT_OFFSET: usize = 0;
pub const HUMIDITY_OFFSET: usize = 1;
pub const TEMPERATURE_OFFSET: usize = 2;
pub const TEMPERATURE_FRACTION_OFFSET: usize = 3;
pub const PRESSURE_RANGE: std::ops::Range<usize> = 4..6;
pub const ACCELERATION_X_RANGE: std::ops::Range<usize> = 6..8;
pub const ACCELERATION_Y_RANGE: std::ops::Range<usize> = 8..10;
pub const ACCELERATION_Z_RANGE: std::ops::Range<usize> = 10..12;
pub const VOLTAGE_RANGE: std::ops::Range<usize> = 12..14;

pub const TEMPERATURE_SIGN_BIT: u8 = 0b1000_0000;
pub const TEMPERATURE_INTEGER_MASK: u8 = 0b0111_1111;
pub const TEMPERATURE_FRACTION_MAX: u8 = 99;

pub const HUMIDITY_SCALE_PCT: f64 = 0.5;
pub const PRESSURE_OFFSET_PA: u32 = 50_000;
