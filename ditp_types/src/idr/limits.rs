/// Bounds applied to length-prefixed fields while decoding or skipping
/// tagged values. A declared length above its bound fails the read.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct DecodeLimits {
    pub max_blob_len: u64,
    pub max_string_len: u64,
}

impl DecodeLimits {
    pub const DEFAULT_MAX_BLOB_LEN: u64 = 1 << 20;
    pub const DEFAULT_MAX_STRING_LEN: u64 = 1 << 16;

    pub fn with_max_blob_len(mut self, max: u64) -> Self {
        self.max_blob_len = max;
        self
    }

    pub fn with_max_string_len(mut self, max: u64) -> Self {
        self.max_string_len = max;
        self
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_blob_len: Self::DEFAULT_MAX_BLOB_LEN,
            max_string_len: Self::DEFAULT_MAX_STRING_LEN,
        }
    }
}
