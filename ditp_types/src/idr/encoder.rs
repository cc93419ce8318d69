use crate::dir::Dir;
use crate::idr::{EncodeError, TagInt, Timestamp, Zone};
use crate::varint;
use derive_more::{Deref, From, Into};
use num_complex::{Complex32, Complex64};

/// Number of bytes appended by one put.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }
}

/// Low level IDR encoder. Every put appends to the owned buffer.
///
/// Wrap an existing `Vec<u8>` with [`From`] to append after its content.
#[derive(From, Into, Deref, Default, Clone, Debug)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
        }
    }

    /// Clears the content, keeping the allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    fn put_fixed<const LEN: usize>(&mut self, bytes: [u8; LEN]) -> WriteLen {
        self.buf.extend_from_slice(&bytes);
        WriteLen(LEN)
    }

    /* Reserves a one-byte length prefix, runs `body`, then back-fills the
     * prefix with the byte length `body` appended. */
    fn put_len_prefixed(&mut self, body: impl FnOnce(&mut Self)) -> (usize, usize) {
        let prefix_pos = self.buf.len();
        self.buf.push(0);
        body(self);
        let body_len = self.buf.len() - prefix_pos - 1;
        self.buf[prefix_pos] = body_len as u8;
        (prefix_pos, body_len)
    }
}

/* Single bytes and raw bytes. */
impl Encoder {
    pub fn put_byte(&mut self, v: u8) -> WriteLen {
        self.buf.push(v);
        WriteLen(1)
    }

    pub fn put_bool(&mut self, v: bool) -> WriteLen {
        self.put_byte(v as u8)
    }

    /// Appends `v` as is, without a length prefix.
    pub fn put_bytes(&mut self, v: &[u8]) -> WriteLen {
        self.buf.extend_from_slice(v);
        WriteLen(v.len())
    }
}

/* Variable width. */
impl Encoder {
    pub fn put_var_uint(&mut self, v: u64) -> WriteLen {
        WriteLen(varint::put_var_uint(&mut self.buf, v))
    }

    pub fn put_tag(&mut self, tag: impl Into<TagInt>) -> WriteLen {
        let int: TagInt = tag.into();
        self.put_var_uint(*int)
    }

    pub fn put_size(&mut self, v: u64) -> WriteLen {
        self.put_var_uint(v)
    }

    pub fn put_var_int(&mut self, v: i64) -> WriteLen {
        WriteLen(varint::put_var_int(&mut self.buf, v))
    }

    pub fn put_var_float(&mut self, v: f64) -> WriteLen {
        WriteLen(varint::put_var_float(&mut self.buf, v))
    }

    pub fn put_var_complex(&mut self, v: Complex64) -> WriteLen {
        let mut w_len = 0;
        w_len += varint::put_var_float(&mut self.buf, v.re);
        w_len += varint::put_var_float(&mut self.buf, v.im);
        WriteLen(w_len)
    }
}

/* Fixed width, little-endian. */
impl Encoder {
    pub fn put_u8(&mut self, v: u8) -> WriteLen {
        self.put_byte(v)
    }

    pub fn put_u16(&mut self, v: u16) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    pub fn put_u32(&mut self, v: u32) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    pub fn put_u64(&mut self, v: u64) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    pub fn put_i8(&mut self, v: i8) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    pub fn put_i16(&mut self, v: i16) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    pub fn put_i32(&mut self, v: i32) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    pub fn put_i64(&mut self, v: i64) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    pub fn put_f32(&mut self, v: f32) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    pub fn put_f64(&mut self, v: f64) -> WriteLen {
        self.put_fixed(v.to_le_bytes())
    }

    /// Two `f32`: real, then imaginary.
    pub fn put_complex64(&mut self, v: Complex32) -> WriteLen {
        let mut w_len = 0;
        w_len += *self.put_f32(v.re);
        w_len += *self.put_f32(v.im);
        WriteLen(w_len)
    }

    /// Two `f64`: real, then imaginary.
    pub fn put_complex128(&mut self, v: Complex64) -> WriteLen {
        let mut w_len = 0;
        w_len += *self.put_f64(v.re);
        w_len += *self.put_f64(v.im);
        WriteLen(w_len)
    }

    /// Unix seconds `i64`, nanoseconds `u32`, zone offset seconds `i32`.
    /// The zone name is not encoded.
    pub fn put_time(&mut self, t: &Timestamp) -> WriteLen {
        let mut w_len = 0;
        w_len += *self.put_i64(t.secs);
        w_len += *self.put_u32(t.nanos);
        w_len += *self.put_i32(t.offset());
        WriteLen(w_len)
    }
}

/* Length prefixed. */
impl Encoder {
    /// VarUint byte length, then the bytes.
    pub fn put_blob(&mut self, v: &[u8]) -> WriteLen {
        let mut w_len = 0;
        w_len += *self.put_var_uint(v.len() as u64);
        w_len += *self.put_bytes(v);
        WriteLen(w_len)
    }

    pub fn put_string(&mut self, v: &str) -> WriteLen {
        self.put_blob(v.as_bytes())
    }

    /// One byte holding the binary length (at most [`crate::dir::MAX_BINARY_LEN`]),
    /// then the binary path.
    pub fn put_dir(&mut self, d: &Dir) -> WriteLen {
        let (_, body_len) = self.put_len_prefixed(|e| {
            d.append_binary(&mut e.buf);
        });
        WriteLen(1 + body_len)
    }

    /// One byte holding the record length, then the record:
    ///
    /// ```text
    /// secs:    VarInt,
    /// nanos:   u32,
    /// // Only when the zone is not UTC:
    /// offset:  VarInt,
    /// name:    String,
    /// ```
    pub fn put_var_time(&mut self, t: &Timestamp) -> Result<WriteLen, EncodeError> {
        let (prefix_pos, body_len) = self.put_len_prefixed(|e| {
            e.put_var_int(t.secs);
            e.put_u32(t.nanos);
            if let Zone::Fixed { offset, name } = &t.zone {
                e.put_var_int(*offset as i64);
                e.put_string(name);
            }
        });
        if body_len > u8::MAX as usize {
            self.buf.truncate(prefix_pos);
            log::debug!("rejecting time with a {} bytes zone name", t.zone_name().len());
            return Err(EncodeError::TimeTooLong(body_len));
        }
        Ok(WriteLen(1 + body_len))
    }
}
