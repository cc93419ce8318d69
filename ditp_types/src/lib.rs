//! Identifier paths and the Information Data Representation (IDR) codec of a
//! distributed information system. [`varint`] holds the variable-length
//! integer and float encodings both build on, [`dir`] the [`dir::Dir`] path
//! type with its binary and `dis:` URI forms, and [`idr`] the low level
//! encoder, decoder and skip layer along with tagged values.

pub mod dir;
pub mod idr;
pub mod varint;
