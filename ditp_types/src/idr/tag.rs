use crate::idr::{DecodeError, ParseTagError};
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt;
use std::str::FromStr;

/// A tag as found on the wire. Any `u64` is representable, including values
/// that do not name a [`Tag`].
#[derive(From, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TagInt(u64);
impl From<Tag> for TagInt {
    fn from(tag: Tag) -> Self {
        // Every member has an explicit u64 discriminant.
        Self(tag.to_u64().unwrap_or(Tag::Invalid as u64))
    }
}

/// Tags identify the encoding of a value in a self-describing stream.
///
/// Discriminants are part of the wire format and must never be reassigned.
#[repr(u64)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum Tag {
    None = 0,
    Bool = 1,
    Byte = 2,
    Uint8 = 3,
    Uint16 = 4,
    Uint32 = 5,
    Uint64 = 6,
    Int8 = 7,
    Int16 = 8,
    Int32 = 9,
    Int64 = 10,
    Float32 = 11,
    Float64 = 12,
    Complex64 = 13,
    Complex128 = 14,
    Time = 15,
    Bytes = 16,
    Size = 17,
    Blob = 18,
    String = 19,
    Dir = 20,
    VarUint = 21,
    VarInt = 22,
    VarFloat = 23,
    VarComplex = 24,
    VarTime = 25,
    Invalid = u64::MAX,
}

impl Tag {
    /// Reserved upper bound: every tag below it is assigned.
    pub const MAX_TAG: u64 = 26;

    pub const ALL: [Tag; 27] = [
        Tag::None,
        Tag::Bool,
        Tag::Byte,
        Tag::Uint8,
        Tag::Uint16,
        Tag::Uint32,
        Tag::Uint64,
        Tag::Int8,
        Tag::Int16,
        Tag::Int32,
        Tag::Int64,
        Tag::Float32,
        Tag::Float64,
        Tag::Complex64,
        Tag::Complex128,
        Tag::Time,
        Tag::Bytes,
        Tag::Size,
        Tag::Blob,
        Tag::String,
        Tag::Dir,
        Tag::VarUint,
        Tag::VarInt,
        Tag::VarFloat,
        Tag::VarComplex,
        Tag::VarTime,
        Tag::Invalid,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Tag::None => "NoneTag",
            Tag::Bool => "BoolTag",
            Tag::Byte => "ByteTag",
            Tag::Uint8 => "Uint8Tag",
            Tag::Uint16 => "Uint16Tag",
            Tag::Uint32 => "Uint32Tag",
            Tag::Uint64 => "Uint64Tag",
            Tag::Int8 => "Int8Tag",
            Tag::Int16 => "Int16Tag",
            Tag::Int32 => "Int32Tag",
            Tag::Int64 => "Int64Tag",
            Tag::Float32 => "Float32Tag",
            Tag::Float64 => "Float64Tag",
            Tag::Complex64 => "Complex64Tag",
            Tag::Complex128 => "Complex128Tag",
            Tag::Time => "TimeTag",
            Tag::Bytes => "BytesTag",
            Tag::Size => "SizeTag",
            Tag::Blob => "BlobTag",
            Tag::String => "StringTag",
            Tag::Dir => "DIRTag",
            Tag::VarUint => "VarUintTag",
            Tag::VarInt => "VarIntTag",
            Tag::VarFloat => "VarFloatTag",
            Tag::VarComplex => "VarComplexTag",
            Tag::VarTime => "VarTimeTag",
            Tag::Invalid => "InvalidTag",
        }
    }
}
impl TryFrom<TagInt> for Tag {
    type Error = DecodeError;
    fn try_from(int: TagInt) -> Result<Self, DecodeError> {
        Tag::from_u64(int.0).ok_or(DecodeError::UnknownTag(int))
    }
}
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/* Text form: a known tag prints its name, any other value prints as `(N)Tag`. */
impl fmt::Display for TagInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Tag::try_from(*self) {
            Ok(tag) => f.write_str(tag.name()),
            Err(_) => write!(f, "({})Tag", self.0),
        }
    }
}
impl FromStr for TagInt {
    type Err = ParseTagError;
    fn from_str(s: &str) -> Result<Self, ParseTagError> {
        if let Some(tag) = Tag::ALL.iter().find(|tag| tag.name() == s) {
            return Ok(TagInt::from(*tag));
        }
        if s == "MaxTag" {
            return Ok(TagInt(Tag::MAX_TAG));
        }
        s.strip_prefix('(')
            .and_then(|s| s.strip_suffix(")Tag"))
            .and_then(|n| n.parse::<u64>().ok())
            .map(TagInt)
            .ok_or_else(|| ParseTagError(s.to_owned()))
    }
}
