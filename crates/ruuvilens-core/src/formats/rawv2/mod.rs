//! RAWv2 (data format 5) decoding.
//!
//! A fixed 24-byte layout where nearly every field reserves one bit pattern
//! to mean "the sender could not measure this": 0x8000 for signed words,
//! 0xFFFF for unsigned words, 0xFF for the movement counter, all-FF for the
//! MAC address. Accessors detect their own sentinel independently and fail
//! with `ValueNotAvailable` instead of returning the literal value.
//!
//! Battery voltage and tx power share one 16-bit word; its 0xFFFF sentinel
//! invalidates both derived fields at once, exactly as on the wire.
//!
//! Byte offsets live in `layout`, domain decoding in `parser`.

pub mod layout;
pub mod parser;

pub use parser::RawV2;
