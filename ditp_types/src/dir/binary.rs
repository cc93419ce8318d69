use crate::dir::{Dir, DirError, MAX_DIR_LEN};
use crate::varint;

impl Dir {
    /// Appends the identifiers, each VarUint encoded, to `buf`.
    /// The nil path appends nothing.
    ///
    /// Returns the number of bytes appended.
    pub fn append_binary(&self, buf: &mut Vec<u8>) -> usize {
        let mut w_len = 0;
        for id in self.ids() {
            w_len += varint::put_var_uint(buf, *id);
        }
        w_len
    }

    pub fn to_binary(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.len() * varint::MAX_VAR_UINT_LEN);
        self.append_binary(&mut buf);
        buf
    }

    /// Decodes the binary path occupying the whole of `buf` into `self`.
    ///
    /// On error `self` is left nil.
    pub fn decode_binary(&mut self, buf: &[u8]) -> Result<(), DirError> {
        self.set_nil();
        let res = self.decode_binary_(buf);
        if res.is_err() {
            self.set_nil();
        }
        res
    }

    fn decode_binary_(&mut self, mut buf: &[u8]) -> Result<(), DirError> {
        while self.len() < MAX_DIR_LEN && !buf.is_empty() {
            let (id, r_len) = varint::decode_var_uint(buf).ok_or(DirError::TruncatedIdentifier)?;
            self.push(id);
            buf = &buf[r_len..];
        }
        if !buf.is_empty() {
            return Err(DirError::ExcessData);
        }
        self.validate()
    }

    pub fn from_binary(buf: &[u8]) -> Result<Self, DirError> {
        let mut dir = Self::default();
        dir.decode_binary(buf)?;
        Ok(dir)
    }
}
