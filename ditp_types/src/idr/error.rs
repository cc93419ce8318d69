use crate::dir::DirError;
use crate::idr::{Tag, TagInt};
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum DecodeError {
    #[error("IDR decoder: unexpected end of data at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("IDR decoder: data too big: {len} bytes exceeds maximum {max}")]
    TooLarge { len: u64, max: u64 },

    #[error("IDR decoder: {0}")]
    Dir(#[from] DirError),

    #[error("IDR decoder: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("IDR decoder: Time: {0} bytes of trailing data")]
    TrailingTimeData(usize),

    #[error("IDR decoder: Time: zone offset {0} out of range")]
    ZoneOffset(i64),

    #[error("IDR decoder: unknown tag {0}")]
    UnknownTag(TagInt),

    #[error("IDR decoder: {0} values are not self-delimiting")]
    UnsizedTag(Tag),
}

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum EncodeError {
    #[error("IDR encoder: Time needs {0} bytes, more than its length prefix can hold")]
    TimeTooLong(usize),
}

#[derive(Error, PartialEq, Eq, Clone, Debug)]
#[error("unrecognized tag {0:?}")]
pub struct ParseTagError(pub String);
