use crate::dir::Dir;
use crate::idr::{
    DecodeError, DecodeLimits, Decoder, EncodeError, Encoder, Tag, TagInt, Timestamp, WriteLen,
};
use num_complex::{Complex32, Complex64};

/// A value together with the encoding it is written in.
///
/// Every member is self-delimiting, so a tagged stream can be read or skipped
/// without a schema. [`Tag::Bytes`] has no member: raw bytes carry no length.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    None,
    Bool(bool),
    Byte(u8),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Complex64(Complex32),
    Complex128(Complex64),
    Time(Timestamp),
    Size(u64),
    Blob(Vec<u8>),
    String(String),
    Dir(Dir),
    VarUint(u64),
    VarInt(i64),
    VarFloat(f64),
    VarComplex(Complex64),
    VarTime(Timestamp),
}

impl From<&Value> for Tag {
    fn from(v: &Value) -> Self {
        match v {
            Value::None => Tag::None,
            Value::Bool(_) => Tag::Bool,
            Value::Byte(_) => Tag::Byte,
            Value::Uint8(_) => Tag::Uint8,
            Value::Uint16(_) => Tag::Uint16,
            Value::Uint32(_) => Tag::Uint32,
            Value::Uint64(_) => Tag::Uint64,
            Value::Int8(_) => Tag::Int8,
            Value::Int16(_) => Tag::Int16,
            Value::Int32(_) => Tag::Int32,
            Value::Int64(_) => Tag::Int64,
            Value::Float32(_) => Tag::Float32,
            Value::Float64(_) => Tag::Float64,
            Value::Complex64(_) => Tag::Complex64,
            Value::Complex128(_) => Tag::Complex128,
            Value::Time(_) => Tag::Time,
            Value::Size(_) => Tag::Size,
            Value::Blob(_) => Tag::Blob,
            Value::String(_) => Tag::String,
            Value::Dir(_) => Tag::Dir,
            Value::VarUint(_) => Tag::VarUint,
            Value::VarInt(_) => Tag::VarInt,
            Value::VarFloat(_) => Tag::VarFloat,
            Value::VarComplex(_) => Tag::VarComplex,
            Value::VarTime(_) => Tag::VarTime,
        }
    }
}

impl Encoder {
    /// Writes the VarUint tag of `v`, then its body.
    pub fn put_value(&mut self, v: &Value) -> Result<WriteLen, EncodeError> {
        let mut w_len = 0;

        /* tag */
        w_len += *self.put_tag(Tag::from(v));

        /* body */
        w_len += *match v {
            Value::None => WriteLen::new_manual(0),
            Value::Bool(b) => self.put_bool(*b),
            Value::Byte(b) => self.put_byte(*b),
            Value::Uint8(i) => self.put_u8(*i),
            Value::Uint16(i) => self.put_u16(*i),
            Value::Uint32(i) => self.put_u32(*i),
            Value::Uint64(i) => self.put_u64(*i),
            Value::Int8(i) => self.put_i8(*i),
            Value::Int16(i) => self.put_i16(*i),
            Value::Int32(i) => self.put_i32(*i),
            Value::Int64(i) => self.put_i64(*i),
            Value::Float32(f) => self.put_f32(*f),
            Value::Float64(f) => self.put_f64(*f),
            Value::Complex64(c) => self.put_complex64(*c),
            Value::Complex128(c) => self.put_complex128(*c),
            Value::Time(t) => self.put_time(t),
            Value::Size(s) => self.put_size(*s),
            Value::Blob(b) => self.put_blob(b),
            Value::String(s) => self.put_string(s),
            Value::Dir(d) => self.put_dir(d),
            Value::VarUint(i) => self.put_var_uint(*i),
            Value::VarInt(i) => self.put_var_int(*i),
            Value::VarFloat(f) => self.put_var_float(*f),
            Value::VarComplex(c) => self.put_var_complex(*c),
            Value::VarTime(t) => self.put_var_time(t)?,
        };

        Ok(WriteLen::new_manual(w_len))
    }
}

impl<'a> Decoder<'a> {
    /// Reads one tagged value. Length-prefixed bodies are bounded by `limits`.
    pub fn get_value(&mut self, limits: &DecodeLimits) -> Result<Value, DecodeError> {
        self.atomic(|d| {
            /* tag */
            let tag = Tag::try_from(d.get_tag()?)?;

            /* body */
            let v = match tag {
                Tag::None => Value::None,
                Tag::Bool => Value::Bool(d.get_bool()?),
                Tag::Byte => Value::Byte(d.get_byte()?),
                Tag::Uint8 => Value::Uint8(d.get_u8()?),
                Tag::Uint16 => Value::Uint16(d.get_u16()?),
                Tag::Uint32 => Value::Uint32(d.get_u32()?),
                Tag::Uint64 => Value::Uint64(d.get_u64()?),
                Tag::Int8 => Value::Int8(d.get_i8()?),
                Tag::Int16 => Value::Int16(d.get_i16()?),
                Tag::Int32 => Value::Int32(d.get_i32()?),
                Tag::Int64 => Value::Int64(d.get_i64()?),
                Tag::Float32 => Value::Float32(d.get_f32()?),
                Tag::Float64 => Value::Float64(d.get_f64()?),
                Tag::Complex64 => Value::Complex64(d.get_complex64()?),
                Tag::Complex128 => Value::Complex128(d.get_complex128()?),
                Tag::Time => Value::Time(d.get_time()?),
                Tag::Size => Value::Size(d.get_size()?),
                Tag::Blob => Value::Blob(d.get_blob(limits.max_blob_len)?.to_vec()),
                Tag::String => Value::String(d.get_string(limits.max_string_len)?),
                Tag::Dir => Value::Dir(d.get_dir()?),
                Tag::VarUint => Value::VarUint(d.get_var_uint()?),
                Tag::VarInt => Value::VarInt(d.get_var_int()?),
                Tag::VarFloat => Value::VarFloat(d.get_var_float()?),
                Tag::VarComplex => Value::VarComplex(d.get_var_complex()?),
                Tag::VarTime => Value::VarTime(d.get_var_time()?),
                Tag::Bytes => return Err(DecodeError::UnsizedTag(tag)),
                Tag::Invalid => return Err(DecodeError::UnknownTag(TagInt::from(tag))),
            };
            Ok(v)
        })
    }

    /// Skips one tagged value, returning the number of bytes skipped.
    pub fn skip_value(&mut self, limits: &DecodeLimits) -> Result<usize, DecodeError> {
        self.atomic(|d| {
            /* tag */
            let start = d.pos();
            let tag = Tag::try_from(d.get_tag()?)?;

            /* body */
            match tag {
                Tag::None => 0,
                Tag::Bool => d.skip_bool()?,
                Tag::Byte => d.skip_byte()?,
                Tag::Uint8 => d.skip_u8()?,
                Tag::Uint16 => d.skip_u16()?,
                Tag::Uint32 => d.skip_u32()?,
                Tag::Uint64 => d.skip_u64()?,
                Tag::Int8 => d.skip_i8()?,
                Tag::Int16 => d.skip_i16()?,
                Tag::Int32 => d.skip_i32()?,
                Tag::Int64 => d.skip_i64()?,
                Tag::Float32 => d.skip_f32()?,
                Tag::Float64 => d.skip_f64()?,
                Tag::Complex64 => d.skip_complex64()?,
                Tag::Complex128 => d.skip_complex128()?,
                Tag::Time => d.skip_time()?,
                Tag::Size => d.skip_size()?,
                Tag::Blob => d.skip_blob(limits.max_blob_len)?,
                Tag::String => d.skip_string(limits.max_string_len)?,
                Tag::Dir => d.skip_dir()?,
                Tag::VarUint => d.skip_var_uint()?,
                Tag::VarInt => d.skip_var_int()?,
                Tag::VarFloat => d.skip_var_float()?,
                Tag::VarComplex => d.skip_var_complex()?,
                Tag::VarTime => d.skip_var_time()?,
                Tag::Bytes => return Err(DecodeError::UnsizedTag(tag)),
                Tag::Invalid => return Err(DecodeError::UnknownTag(TagInt::from(tag))),
            };
            Ok(d.pos() - start)
        })
    }
}
