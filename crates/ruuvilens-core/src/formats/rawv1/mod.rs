//! RAWv1 (data format 3) decoding.
//!
//! A fixed 14-byte layout with no "not available" sentinels: every encoded
//! quantity is always present, and quantities the layout has no bit
//! allocation for (tx power, movement counter, measurement sequence number,
//! MAC address) fail with `NotAvailableInFormat`. Temperature uses a
//! sign-bit plus two-digit decimal fraction encoding; the fraction byte is
//! validated against its 0..=99 range.
//!
//! Byte offsets live in `layout`, domain decoding in `parser`.

pub mod layout;
pub mod parser;

pub use parser::RawV1;
