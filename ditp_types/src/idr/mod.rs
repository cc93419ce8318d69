//! # Information Data Representation (IDR)
//!
//! A compact binary encoding of primitive values. The low level [`Encoder`]
//! and [`Decoder`] write and read bare values: the reader must know what comes
//! next. A [`Value`] additionally carries its [`Tag`], encoded as a VarUint,
//! which makes a stream self-describing.
//!
//! Fixed width integers and floats are little-endian. The variable width
//! members all reduce to VarUint.
//!
//! ```text
//! VarUint:    7 bits per byte, low group first, high bit set when more follow.
//!             The 9th byte, if reached, holds 8 bits.
//! VarInt:     VarUint(zigzag(v))
//! VarFloat:   VarUint(byte_swap(bits(v)))     // short when the mantissa is short
//!
//! Time {
//!     secs:       i64,
//!     nanos:      u32,
//!     offset:     i32,                        // seconds east of UTC, 0 is UTC
//! }
//!
//! Blob or String {
//!     len:        VarUint,
//!     body:       [u8; len],
//! }
//!
//! Dir {
//!     len:        u8,                         // at most 63
//!     body:       [u8; len],                  // binary form of the path
//! }
//!
//! VarTime {
//!     len:        u8,
//!     secs:       VarInt,
//!     nanos:      u32,
//!     // Only when the zone is not UTC:
//!     offset:     VarInt,
//!     name:       String,
//! }
//! ```
//!
//! Decoding never panics on malformed input. Every get and skip either
//! consumes exactly one value or fails and leaves the cursor unmoved.

mod decoder;
mod encoder;
mod error;
mod limits;
mod skip;
mod tag;
mod time;
mod value;

mod codec_test;

pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use limits::*;
pub use tag::*;
pub use time::*;
pub use value::*;
