use crate::dir::{Dir, MAX_BINARY_LEN};
use crate::idr::{DecodeError, TagInt, Timestamp, Zone};
use crate::varint;
use num_complex::{Complex32, Complex64};
use std::str;

/// Low level IDR decoder: a read cursor over a borrowed buffer.
///
/// A get either returns the whole value and advances past it, or returns an
/// error and leaves the cursor where it was.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    pub(crate) fn eof(&self) -> DecodeError {
        DecodeError::UnexpectedEof { offset: self.pos }
    }

    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let rem = self.remaining();
        if rem.len() < n {
            return Err(self.eof());
        }
        self.pos += n;
        Ok(&rem[..n])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.take(N)?);
        Ok(arr)
    }

    /// Runs `f`, rewinding the cursor when it fails.
    pub(crate) fn atomic<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        let start = self.pos;
        let res = f(self);
        if res.is_err() {
            self.pos = start;
        }
        res
    }
}

/// Fails when a length prefix declares more than `max` bytes.
pub(crate) fn check_len(len: u64, max: u64) -> Result<(), DecodeError> {
    if len > max {
        log::debug!("rejecting a {len} bytes field, maximum is {max}");
        return Err(DecodeError::TooLarge { len, max });
    }
    Ok(())
}

/* Single bytes and raw bytes. */
impl<'a> Decoder<'a> {
    pub fn get_byte(&mut self) -> Result<u8, DecodeError> {
        let [b] = self.take_array::<1>()?;
        Ok(b)
    }

    /// Any nonzero byte is true.
    pub fn get_bool(&mut self) -> Result<bool, DecodeError> {
        Ok(self.get_byte()? != 0)
    }

    /// Returns the next `n` bytes without copying them.
    pub fn get_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.take(n)
    }
}

/* Variable width. */
impl<'a> Decoder<'a> {
    pub fn get_var_uint(&mut self) -> Result<u64, DecodeError> {
        let (v, r_len) = varint::decode_var_uint(self.remaining()).ok_or_else(|| self.eof())?;
        self.pos += r_len;
        Ok(v)
    }

    pub fn get_var_usize(&mut self) -> Result<usize, DecodeError> {
        self.atomic(|d| {
            let v = d.get_var_uint()?;
            usize::try_from(v).map_err(|_| DecodeError::TooLarge {
                len: v,
                max: usize::MAX as u64,
            })
        })
    }

    pub fn get_tag(&mut self) -> Result<TagInt, DecodeError> {
        Ok(TagInt::from(self.get_var_uint()?))
    }

    pub fn get_size(&mut self) -> Result<u64, DecodeError> {
        self.get_var_uint()
    }

    pub fn get_var_int(&mut self) -> Result<i64, DecodeError> {
        Ok(varint::zigzag_decode(self.get_var_uint()?))
    }

    pub fn get_var_float(&mut self) -> Result<f64, DecodeError> {
        Ok(varint::float_from_var_bits(self.get_var_uint()?))
    }

    pub fn get_var_complex(&mut self) -> Result<Complex64, DecodeError> {
        self.atomic(|d| {
            let re = d.get_var_float()?;
            let im = d.get_var_float()?;
            Ok(Complex64::new(re, im))
        })
    }
}

/* Fixed width, little-endian. */
impl<'a> Decoder<'a> {
    pub fn get_u8(&mut self) -> Result<u8, DecodeError> {
        self.get_byte()
    }

    pub fn get_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    pub fn get_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn get_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    pub fn get_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(i8::from_le_bytes(self.take_array()?))
    }

    pub fn get_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(i16::from_le_bytes(self.take_array()?))
    }

    pub fn get_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    pub fn get_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    pub fn get_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.take_array()?))
    }

    pub fn get_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    pub fn get_complex64(&mut self) -> Result<Complex32, DecodeError> {
        self.atomic(|d| {
            let re = d.get_f32()?;
            let im = d.get_f32()?;
            Ok(Complex32::new(re, im))
        })
    }

    pub fn get_complex128(&mut self) -> Result<Complex64, DecodeError> {
        self.atomic(|d| {
            let re = d.get_f64()?;
            let im = d.get_f64()?;
            Ok(Complex64::new(re, im))
        })
    }

    /// An offset of 0 decodes as UTC. Other offsets get an unnamed zone.
    pub fn get_time(&mut self) -> Result<Timestamp, DecodeError> {
        self.atomic(|d| {
            let secs = d.get_i64()?;
            let nanos = d.get_u32()?;
            let offset = d.get_i32()?;
            if offset == 0 {
                Ok(Timestamp::utc(secs, nanos))
            } else {
                Ok(Timestamp::fixed(secs, nanos, offset, ""))
            }
        })
    }
}

/* Length prefixed. */
impl<'a> Decoder<'a> {
    /// Returns the blob without copying it. Fails when its length exceeds `max`.
    pub fn get_blob(&mut self, max: u64) -> Result<&'a [u8], DecodeError> {
        self.atomic(|d| {
            let len = d.get_var_uint()?;
            check_len(len, max)?;
            if len > d.remaining().len() as u64 {
                return Err(d.eof());
            }
            d.take(len as usize)
        })
    }

    pub fn get_str(&mut self, max: u64) -> Result<&'a str, DecodeError> {
        self.atomic(|d| Ok(str::from_utf8(d.get_blob(max)?)?))
    }

    pub fn get_string(&mut self, max: u64) -> Result<String, DecodeError> {
        Ok(self.get_str(max)?.to_owned())
    }

    pub fn get_dir(&mut self) -> Result<Dir, DecodeError> {
        let mut dir = Dir::default();
        self.get_dir_into(&mut dir)?;
        Ok(dir)
    }

    /// Decodes into `dir`, reusing it as storage. On error `dir` is left nil.
    pub fn get_dir_into(&mut self, dir: &mut Dir) -> Result<(), DecodeError> {
        dir.set_nil();
        self.atomic(|d| {
            let len = d.get_byte()?;
            check_len(len as u64, MAX_BINARY_LEN as u64)?;
            let body = d.take(len as usize)?;
            dir.decode_binary(body).map_err(|e| {
                log::debug!("rejecting embedded dir: {e}");
                DecodeError::from(e)
            })
        })
    }

    /// See [`crate::idr::Encoder::put_var_time`] for the layout.
    pub fn get_var_time(&mut self) -> Result<Timestamp, DecodeError> {
        self.atomic(|d| {
            let len = d.get_byte()?;
            let rec_start = d.pos;
            d.take(len as usize)?;
            /* Bounded to the record. Offsets stay relative to the whole input. */
            let mut rec = Decoder {
                buf: &d.buf[..d.pos],
                pos: rec_start,
            };

            let secs = rec.get_var_int()?;
            let nanos = rec.get_u32()?;
            if rec.is_empty() {
                return Ok(Timestamp::utc(secs, nanos));
            }

            let offset = rec.get_var_int()?;
            let offset = i32::try_from(offset).map_err(|_| DecodeError::ZoneOffset(offset))?;
            let name = rec.get_string(rec.remaining().len() as u64)?;
            if !rec.is_empty() {
                log::debug!("rejecting time with {} trailing bytes", rec.remaining().len());
                return Err(DecodeError::TrailingTimeData(rec.remaining().len()));
            }
            Ok(Timestamp {
                secs,
                nanos,
                zone: Zone::Fixed { offset, name },
            })
        })
    }
}
