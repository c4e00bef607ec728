pub const FORMAT: u8 = 5;
pub const MIN_LEN: usize = 24;

pub const FORMAT_OFFSET: usize = 0;
pub const TEMPERATURE_RANGE: std::ops::Range<usize> = 1..3;
pub const HUMIDITY_RANGE: std::ops::Range<usize> = 3..5;
pub const PRESSURE_RANGE: std::ops::Range<usize> = 5..7;
pub const ACCELERATION_X_RANGE: std::ops::Range<usize> = 7..9;
pub const ACCELERATION_Y_RANGE: std::ops::Range<usize> = 9..11;
pub const ACCELERATION_Z_RANGE: std::ops::Range<usize> = 11..13;
pub const POWER_INFO_RANGE: std::ops::Range<usize> = 13..15;
pub const MOVEMENT_COUNTER_OFFSET: usize = 15;
pub const SEQUENCE_RANGE: std::ops::Range<usize> = 16..18;
pub const MAC_RANGE: std::ops::Range<usize> = 18..24;

// Reserved "not available" patterns, one per field encoding.
pub const UNAVAILABLE_U16: u16 = 0xFFFF;
pub const UNAVAILABLE_I16: u16 = 0x8000;
pub const UNAVAILABLE_U8: u8 = 0xFF;

pub const TEMPERATURE_SCALE_C: f64 = 0.005;
pub const HUMIDITY_SCALE_PCT: f64 = 0.0025;
pub const PRESSURE_OFFSET_PA: u32 = 50_000;

// Battery voltage and tx power share the power-info word: top 11 bits are
// millivolts above 1.6 V, bottom 5 bits are 2 dBm steps above -40 dBm.
pub const VOLTAGE_SHIFT: u32 = 5;
pub const VOLTAGE_OFFSET_V: f64 = 1.6;
pub const TX_POWER_MASK: u16 = 0b0000_0000_0001_1111;
pub const TX_POWER_STEP_DBM: f64 = 2.0;
pub const TX_POWER_OFFSET_DBM: f64 = -40.0;
