use crate::dir::{Dir, DirError, MAX_DIR_LEN, MAX_URI_ID_LEN};

const URI_PREFIX: &[u8] = b"dis:";

/// Symbol of each 6-bit digit.
const URI_SYMBOLS: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Digit of each byte, or -1 for bytes outside the alphabet.
const URI_DIGITS: [i8; 256] = {
    let mut tbl = [-1i8; 256];
    let mut i = 0;
    while i < URI_SYMBOLS.len() {
        tbl[URI_SYMBOLS[i] as usize] = i as i8;
        i += 1;
    }
    tbl
};

fn uri_digit(byte: u8) -> Option<u64> {
    match URI_DIGITS[byte as usize] {
        -1 => None,
        d => Some(d as u64),
    }
}

impl Dir {
    pub fn uri(&self) -> String {
        let mut buf = Vec::with_capacity((MAX_URI_ID_LEN + 1) * self.len() + URI_PREFIX.len() + 1);
        self.append_uri(&mut buf);
        buf.into_iter().map(char::from).collect()
    }

    /// Appends the URI form of the path to `buf`, e.g. `dis:1.fa.0/`.
    ///
    /// Returns the number of bytes appended.
    pub fn append_uri(&self, buf: &mut Vec<u8>) -> usize {
        let w_start = buf.len();
        buf.extend_from_slice(URI_PREFIX);
        for (i, id) in self.ids().iter().enumerate() {
            if i != 0 {
                buf.push(b'.');
            }
            let mut id = *id;
            if id == 0 {
                buf.push(b'0');
            }
            while id != 0 {
                buf.push(URI_SYMBOLS[(id & 0x3F) as usize]);
                id >>= 6;
            }
        }
        buf.push(b'/');
        buf.len() - w_start
    }

    /// Decodes the URI form in `uri` into `self`. Accepts `&str` or bytes.
    ///
    /// On error `self` is left nil.
    pub fn decode_uri(&mut self, uri: impl AsRef<[u8]>) -> Result<(), DirError> {
        self.set_nil();
        let res = self.decode_uri_(uri.as_ref());
        if res.is_err() {
            self.set_nil();
        }
        res
    }

    fn decode_uri_(&mut self, uri: &[u8]) -> Result<(), DirError> {
        if uri.len() <= URI_PREFIX.len() || !uri.starts_with(URI_PREFIX) || !uri.ends_with(b"/")
        {
            return Err(DirError::MissingDelimiters);
        }

        /* `t` always ends with the terminating '/', which is not a digit. */
        let mut t = &uri[URI_PREFIX.len()..];
        while self.len() < MAX_DIR_LEN && t[0] != b'/' {
            let mut id = 0u64;
            let mut shift = 0;
            let mut i = 0;
            while i < MAX_URI_ID_LEN {
                let Some(digit) = uri_digit(t[i]) else {
                    break;
                };
                id |= digit << shift;
                shift += 6;
                i += 1;
            }
            // The last digit may only contribute the 4 remaining bits.
            if i == MAX_URI_ID_LEN && uri_digit(t[i - 1]).unwrap_or(0) > 0xF {
                return Err(DirError::IdentifierOverflow);
            }
            self.push(id);
            t = &t[i..];
            if self.len() == MAX_DIR_LEN || t[0] != b'.' {
                break;
            }
            t = &t[1..];
        }

        if t[0] != b'/' {
            return Err(DirError::InvalidCharacters);
        }
        if t.len() > 1 {
            return Err(DirError::TrailingSlash);
        }
        self.validate()
    }

    pub fn from_uri(uri: impl AsRef<[u8]>) -> Result<Self, DirError> {
        let mut dir = Self::default();
        dir.decode_uri(uri)?;
        Ok(dir)
    }
}
