//! # Identifier paths
//!
//! A [`Dir`] is a downward path in a distributed information system (DIS) tree.
//! It holds up to [`MAX_DIR_LEN`] `u64` identifiers, from the root toward the leafs.
//!
//! - Only the first and the last identifier may be zero.
//! - A path whose last identifier is zero is a *node* path.
//!   Any other path, including the nil path, is an *info* path.
//! - A path with at least two identifiers whose first identifier is zero is
//!   *relative*: it does not start at the root.
//!
//! Two encodings are defined.
//!
//! ```text
//! binary:  VarUint(id_0) VarUint(id_1) ...          // no count, no delimiter
//! uri:     "dis:" group_0 "." group_1 ... "/"       // groups in base 64, low digit first
//! ```

mod binary;
mod error;
mod uri;


pub use error::*;

use crate::varint::MAX_VAR_UINT_LEN;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum number of identifiers in a [`Dir`].
pub const MAX_DIR_LEN: usize = 7;

/// Maximum byte length of a binary encoded [`Dir`].
pub const MAX_BINARY_LEN: usize = MAX_DIR_LEN * MAX_VAR_UINT_LEN;

/// Maximum byte length of a URI encoded identifier: `ceil(64 / 6)`.
const MAX_URI_ID_LEN: usize = 11;

/// Maximum byte length of a URI encoded [`Dir`].
pub const MAX_URI_LEN: usize = (MAX_URI_ID_LEN + 1) * MAX_DIR_LEN + 4;

#[derive(Clone, Copy, Default)]
pub struct Dir {
    ids: [u64; MAX_DIR_LEN],
    len: u8,
}

/* Construction. */
impl Dir {
    /// Returns the path made of `ids`, or an error when it is not a valid path.
    pub fn new(ids: &[u64]) -> Result<Self, DirError> {
        if ids.len() > MAX_DIR_LEN {
            return Err(DirError::TooManyIdentifiers);
        }
        let mut dir = Self::default();
        dir.ids[..ids.len()].copy_from_slice(ids);
        dir.len = ids.len() as u8;
        dir.validate()?;
        Ok(dir)
    }

    fn validate(&self) -> Result<(), DirError> {
        let ids = self.ids();
        match (1..ids.len().saturating_sub(1)).find(|&i| ids[i] == 0) {
            Some(i) => Err(DirError::ZeroIdentifier(i)),
            None => Ok(()),
        }
    }

    /* Caller guarantees room. */
    fn push(&mut self, id: u64) {
        self.ids[self.len as usize] = id;
        self.len += 1;
    }

    /// Clears the path so the value can be reused as decoding storage.
    pub fn set_nil(&mut self) {
        self.ids = [0; MAX_DIR_LEN];
        self.len = 0;
    }
}
impl TryFrom<&[u64]> for Dir {
    type Error = DirError;
    fn try_from(ids: &[u64]) -> Result<Self, DirError> {
        Self::new(ids)
    }
}
impl<const N: usize> TryFrom<[u64; N]> for Dir {
    type Error = DirError;
    fn try_from(ids: [u64; N]) -> Result<Self, DirError> {
        Self::new(&ids)
    }
}

/* Accessors and classification. */
impl Dir {
    pub fn ids(&self) -> &[u64] {
        &self.ids[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Same as [`Dir::is_nil`].
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the identifier at index `i`, or 0 when `i` is out of range.
    pub fn id(&self, i: usize) -> u64 {
        self.ids().get(i).copied().unwrap_or(0)
    }

    /// Returns the last identifier, or 0 for the nil path.
    pub fn info_id(&self) -> u64 {
        self.ids().last().copied().unwrap_or(0)
    }

    pub fn is_nil(&self) -> bool {
        self.len == 0
    }

    pub fn is_node(&self) -> bool {
        self.len > 0 && self.info_id() == 0
    }

    pub fn is_info(&self) -> bool {
        self.len == 0 || self.info_id() != 0
    }

    pub fn is_relative(&self) -> bool {
        self.len > 1 && self.ids[0] == 0
    }

    pub fn is_absolute(&self) -> bool {
        self.len <= 1 || self.ids[0] != 0
    }

    /// Returns true when `self` is a node path and `other` is a node or an
    /// info below it.
    pub fn contains(&self, other: &Dir) -> bool {
        if self.is_info() || self.len() - 1 >= other.len() {
            return false;
        }
        let prefix_len = self.len() - 1;
        if self.ids[..prefix_len] != other.ids[..prefix_len] {
            return false;
        }
        self.len != other.len || other.info_id() != 0
    }
}

impl PartialEq for Dir {
    fn eq(&self, other: &Dir) -> bool {
        self.ids() == other.ids()
    }
}
impl Eq for Dir {}
impl Hash for Dir {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ids().hash(state);
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dir:")?;
        for (i, id) in self.ids().iter().enumerate() {
            if i != 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}
impl fmt::Debug for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dir").field(&self.ids()).finish()
    }
}
