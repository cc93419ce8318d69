//! Skips advance the cursor past one encoded value without materializing it.
//!
//! Each skip returns the number of bytes it advanced, which always equals what
//! the matching get consumes. A skip fails wherever the matching get would fail
//! on framing: truncation and oversized length prefixes. A string skip also
//! validates UTF-8. Skips over an embedded [`crate::dir::Dir`] or a VarTime
//! record check their length byte and do not decode the body.

use crate::dir::MAX_BINARY_LEN;
use crate::idr::decoder::check_len;
use crate::idr::{DecodeError, Decoder};
use crate::varint;
use std::mem;
use std::str;

impl<'a> Decoder<'a> {
    pub fn skip_bytes(&mut self, n: usize) -> Result<usize, DecodeError> {
        self.take(n)?;
        Ok(n)
    }

    pub fn skip_byte(&mut self) -> Result<usize, DecodeError> {
        self.skip_bytes(1)
    }

    pub fn skip_bool(&mut self) -> Result<usize, DecodeError> {
        self.skip_byte()
    }
}

/* Variable width. */
impl<'a> Decoder<'a> {
    pub fn skip_var_uint(&mut self) -> Result<usize, DecodeError> {
        let r_len = varint::var_uint_len(self.remaining()).ok_or_else(|| self.eof())?;
        self.skip_bytes(r_len)
    }

    pub fn skip_tag(&mut self) -> Result<usize, DecodeError> {
        self.skip_var_uint()
    }

    pub fn skip_size(&mut self) -> Result<usize, DecodeError> {
        self.skip_var_uint()
    }

    pub fn skip_var_int(&mut self) -> Result<usize, DecodeError> {
        self.skip_var_uint()
    }

    pub fn skip_var_float(&mut self) -> Result<usize, DecodeError> {
        self.skip_var_uint()
    }

    pub fn skip_var_complex(&mut self) -> Result<usize, DecodeError> {
        self.atomic(|d| Ok(d.skip_var_uint()? + d.skip_var_uint()?))
    }
}

/* Fixed width. */
impl<'a> Decoder<'a> {
    pub fn skip_u8(&mut self) -> Result<usize, DecodeError> {
        self.skip_bytes(mem::size_of::<u8>())
    }

    pub fn skip_u16(&mut self) -> Result<usize, DecodeError> {
        self.skip_bytes(mem::size_of::<u16>())
    }

    pub fn skip_u32(&mut self) -> Result<usize, DecodeError> {
        self.skip_bytes(mem::size_of::<u32>())
    }

    pub fn skip_u64(&mut self) -> Result<usize, DecodeError> {
        self.skip_bytes(mem::size_of::<u64>())
    }

    pub fn skip_i8(&mut self) -> Result<usize, DecodeError> {
        self.skip_u8()
    }

    pub fn skip_i16(&mut self) -> Result<usize, DecodeError> {
        self.skip_u16()
    }

    pub fn skip_i32(&mut self) -> Result<usize, DecodeError> {
        self.skip_u32()
    }

    pub fn skip_i64(&mut self) -> Result<usize, DecodeError> {
        self.skip_u64()
    }

    pub fn skip_f32(&mut self) -> Result<usize, DecodeError> {
        self.skip_u32()
    }

    pub fn skip_f64(&mut self) -> Result<usize, DecodeError> {
        self.skip_u64()
    }

    pub fn skip_complex64(&mut self) -> Result<usize, DecodeError> {
        self.skip_bytes(2 * mem::size_of::<f32>())
    }

    pub fn skip_complex128(&mut self) -> Result<usize, DecodeError> {
        self.skip_bytes(2 * mem::size_of::<f64>())
    }

    pub fn skip_time(&mut self) -> Result<usize, DecodeError> {
        self.skip_bytes(mem::size_of::<i64>() + mem::size_of::<u32>() + mem::size_of::<i32>())
    }
}

/* Length prefixed. */
impl<'a> Decoder<'a> {
    pub fn skip_blob(&mut self, max: u64) -> Result<usize, DecodeError> {
        self.atomic(|d| {
            let start = d.pos();
            let len = d.get_var_uint()?;
            check_len(len, max)?;
            if len > d.remaining().len() as u64 {
                return Err(d.eof());
            }
            d.skip_bytes(len as usize)?;
            Ok(d.pos() - start)
        })
    }

    /// Fails on invalid UTF-8 like [`Decoder::get_str`], without copying.
    pub fn skip_string(&mut self, max: u64) -> Result<usize, DecodeError> {
        self.atomic(|d| {
            let start = d.pos();
            str::from_utf8(d.get_blob(max)?)?;
            Ok(d.pos() - start)
        })
    }

    pub fn skip_dir(&mut self) -> Result<usize, DecodeError> {
        self.atomic(|d| {
            let len = d.get_byte()?;
            check_len(len as u64, MAX_BINARY_LEN as u64)?;
            Ok(1 + d.skip_bytes(len as usize)?)
        })
    }

    pub fn skip_var_time(&mut self) -> Result<usize, DecodeError> {
        self.atomic(|d| {
            let len = d.get_byte()?;
            Ok(1 + d.skip_bytes(len as usize)?)
        })
    }
}
