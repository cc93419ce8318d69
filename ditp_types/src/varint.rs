//! Variable-length encodings shared by identifier paths and the IDR codec.
//!
//! A VarUint is a LEB128 variant: each byte carries 7 bits, low group first,
//! with the high bit flagging continuation. At most 8 continuation bytes are
//! written; a 9th byte, when needed, carries the remaining 8 bits unmasked.
//!
//! ```text
//! 0x7F                 => [0x7F]
//! 0x80                 => [0x80, 0x01]
//! 0xFFFF_FFFF_FFFF_FFFF => [0xFF; 9]
//! ```

/// Maximum byte length of a VarUint encoded `u64`.
pub const MAX_VAR_UINT_LEN: usize = 9;

const MAX_CONTINUATIONS: usize = MAX_VAR_UINT_LEN - 1;

pub fn put_var_uint(buf: &mut Vec<u8>, mut v: u64) -> usize {
    let mut w_len = 0;
    while v >= 0x80 && w_len < MAX_CONTINUATIONS {
        buf.push(v as u8 | 0x80);
        v >>= 7;
        w_len += 1;
    }
    buf.push(v as u8);
    w_len + 1
}

/// Decodes the VarUint at the front of `buf`.
///
/// Returns the value and the number of bytes consumed, or `None` when `buf`
/// ends before the terminating byte.
pub fn decode_var_uint(buf: &[u8]) -> Option<(u64, usize)> {
    let mut v = 0u64;
    let mut shift = 0;
    for i in 0..MAX_CONTINUATIONS {
        let byte = *buf.get(i)?;
        if byte < 0x80 {
            return Some((v | ((byte as u64) << shift), i + 1));
        }
        v |= ((byte & 0x7F) as u64) << shift;
        shift += 7;
    }
    let last = *buf.get(MAX_CONTINUATIONS)?;
    Some((v | ((last as u64) << shift), MAX_VAR_UINT_LEN))
}

/// Byte length of the VarUint at the front of `buf`, without decoding it.
pub fn var_uint_len(buf: &[u8]) -> Option<usize> {
    for i in 0..MAX_CONTINUATIONS {
        if *buf.get(i)? < 0x80 {
            return Some(i + 1);
        }
    }
    buf.get(MAX_CONTINUATIONS).map(|_| MAX_VAR_UINT_LEN)
}

/// Zigzag mapping: `0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...`
#[inline]
pub fn zigzag_encode(v: i64) -> u64 {
    let x = (v as u64) << 1;
    if v < 0 {
        !x
    } else {
        x
    }
}

#[inline]
pub fn zigzag_decode(x: u64) -> i64 {
    if x & 1 != 0 {
        !(x >> 1) as i64
    } else {
        (x >> 1) as i64
    }
}

pub fn put_var_int(buf: &mut Vec<u8>, v: i64) -> usize {
    put_var_uint(buf, zigzag_encode(v))
}

pub fn decode_var_int(buf: &[u8]) -> Option<(i64, usize)> {
    let (x, r_len) = decode_var_uint(buf)?;
    Some((zigzag_decode(x), r_len))
}

/* The byte reversal moves sign, exponent and high mantissa bits to the low
 * groups, so round values end in zero groups. */
#[inline]
pub fn float_to_var_bits(f: f64) -> u64 {
    f.to_bits().swap_bytes()
}

#[inline]
pub fn float_from_var_bits(x: u64) -> f64 {
    f64::from_bits(x.swap_bytes())
}

pub fn put_var_float(buf: &mut Vec<u8>, f: f64) -> usize {
    put_var_uint(buf, float_to_var_bits(f))
}

pub fn decode_var_float(buf: &[u8]) -> Option<(f64, usize)> {
    let (x, r_len) = decode_var_uint(buf)?;
    Some((float_from_var_bits(x), r_len))
}
