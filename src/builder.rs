//! Buffer builder
//! --------------
//! A byte buffer with a fixed capacity chosen up front. Fragments are
//! appended in order and every append is checked against the capacity, so an
//! oversized fragment is reported instead of written past the end.
//!
//! Two placement policies exist:
//! * [`AppendMode::Raw`] writes each fragment after the last byte written.
//! * [`AppendMode::CString`] writes each fragment at the null‑terminated end
//!   of the current contents, the way `strcat` does. A packed fragment whose
//!   top byte is zero is therefore overwritten from its terminator onward by
//!   whatever comes next.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::cstr;
use crate::pack::{self, PACK_WIDTH};

/// Error returned by [`BufferBuilder`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("cannot allocate a buffer of {capacity} bytes")]
    AllocationFailure { capacity: usize },
    #[error("append needs {needed} bytes but capacity is {capacity}")]
    OutOfCapacity { needed: usize, capacity: usize },
    #[error("buffer already finalized")]
    Finalized,
}

/// Where the next fragment is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppendMode {
    /// After the last byte written.
    #[default]
    Raw,
    /// At the first zero byte of the current contents (or the end, if none).
    CString,
}

/// One unit appended to a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Bytes(&'a [u8]),
    /// Always contributes [`PACK_WIDTH`] bytes, zeros included.
    Packed(u32),
}

impl<'a> From<&'a [u8]> for Fragment<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Fragment::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(s: &'a str) -> Self {
        Fragment::Bytes(s.as_bytes())
    }
}

impl From<u32> for Fragment<'_> {
    fn from(value: u32) -> Self {
        Fragment::Packed(value)
    }
}

impl Fragment<'_> {
    /// Number of bytes this fragment writes.
    pub fn len(&self) -> usize {
        match self {
            Fragment::Bytes(b) => b.len(),
            Fragment::Packed(_) => PACK_WIDTH,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owned, capacity‑checked byte buffer.
///
/// The backing storage is reserved once in the constructor and released when
/// the builder is dropped.
#[derive(Debug)]
pub struct BufferBuilder {
    buf: Vec<u8>,
    capacity: usize,
    mode: AppendMode,
    sealed: bool,
}

impl BufferBuilder {
    /// Builder with room for exactly `capacity` bytes, raw placement.
    pub fn new(capacity: usize) -> Result<Self, BuildError> {
        Self::with_mode(capacity, AppendMode::Raw)
    }

    /// Builder with room for exactly `capacity` bytes and the given placement.
    pub fn with_mode(capacity: usize, mode: AppendMode) -> Result<Self, BuildError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| BuildError::AllocationFailure { capacity })?;
        Ok(Self {
            buf,
            capacity,
            mode,
            sealed: false,
        })
    }

    /// Builder sized to hold `fragments` in raw placement.
    pub fn for_fragments<'f, 'a: 'f, I>(fragments: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = &'f Fragment<'a>>,
    {
        let capacity = fragments.into_iter().map(Fragment::len).sum();
        Self::new(capacity)
    }

    pub fn mode(&self) -> AppendMode {
        self.mode
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw number of bytes currently held.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes before the first zero, as `strlen` would report.
    pub fn c_str_len(&self) -> usize {
        cstr::c_str_len(&self.buf)
    }

    /// Bytes still available after the raw end.
    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    pub fn is_finalized(&self) -> bool {
        self.sealed
    }

    /// Appends `fragment` at the position chosen by the builder's mode.
    ///
    /// On error nothing is written.
    pub fn append_bytes(&mut self, fragment: &[u8]) -> Result<(), BuildError> {
        if self.sealed {
            return Err(BuildError::Finalized);
        }
        let at = match self.mode {
            AppendMode::Raw => self.buf.len(),
            AppendMode::CString => self.c_str_len(),
        };
        let needed = at + fragment.len();
        if needed > self.capacity {
            warn!(
                needed,
                capacity = self.capacity,
                "fragment does not fit in buffer"
            );
            return Err(BuildError::OutOfCapacity {
                needed,
                capacity: self.capacity,
            });
        }
        trace!(at, len = fragment.len(), mode = ?self.mode, "append");
        self.buf.truncate(at);
        self.buf.extend_from_slice(fragment);
        Ok(())
    }

    /// Same as `append_bytes(&pack::encode(value))`.
    pub fn append_packed_u32(&mut self, value: u32) -> Result<(), BuildError> {
        self.append_bytes(&pack::encode(value))
    }

    pub fn append(&mut self, fragment: Fragment<'_>) -> Result<(), BuildError> {
        match fragment {
            Fragment::Bytes(bytes) => self.append_bytes(bytes),
            Fragment::Packed(value) => self.append_packed_u32(value),
        }
    }

    /// Appends every fragment in order, stopping at the first error.
    pub fn append_all<'a, I>(&mut self, fragments: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = Fragment<'a>>,
    {
        for fragment in fragments {
            self.append(fragment)?;
        }
        Ok(())
    }

    /// Current contents, without sealing.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Current contents up to the first zero byte.
    pub fn as_c_str(&self) -> &[u8] {
        cstr::c_str(&self.buf)
    }

    /// Seals the builder and returns its contents.
    ///
    /// Further appends fail with [`BuildError::Finalized`]; calling this again
    /// returns the same bytes.
    pub fn finalize(&mut self) -> &[u8] {
        if !self.sealed {
            self.sealed = true;
            debug!(
                len = self.buf.len(),
                c_str_len = self.c_str_len(),
                capacity = self.capacity,
                "buffer finalized"
            );
        }
        &self.buf
    }

    /// Takes the contents out of the builder.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::{JOY, RUN, THE};

    #[test]
    fn raw_append_keeps_order_and_zeros() {
        let x = 0x0064_6362; // "bcd\0"
        let mut b = BufferBuilder::new(8).unwrap();
        b.append_bytes(b"ab").unwrap();
        b.append_packed_u32(x).unwrap();
        b.append_bytes(b"cd").unwrap();

        assert_eq!(b.as_bytes(), b"abbcd\0cd");
        assert_eq!(b.len(), 8);
        assert_eq!(b.c_str_len(), 5);
        assert_eq!(b.remaining(), 0);
    }

    #[test]
    fn cstring_append_overwrites_terminator() {
        let mut b = BufferBuilder::with_mode(16, AppendMode::CString).unwrap();
        b.append_bytes(b"po").unwrap();
        b.append_packed_u32(JOY).unwrap();
        assert_eq!(b.as_bytes(), b"pojoy\0");
        b.append_bytes(b"15").unwrap();
        assert_eq!(b.as_bytes(), b"pojoy15");
        assert_eq!(b.len(), b.c_str_len());
    }

    #[test]
    fn fresh_word_buffers() {
        for (value, word) in [(JOY, b"joy"), (THE, b"the"), (RUN, b"run")] {
            let mut b = BufferBuilder::new(PACK_WIDTH).unwrap();
            b.append_packed_u32(value).unwrap();
            assert_eq!(b.as_c_str(), word);
            assert_eq!(b.c_str_len(), 3);
            assert_eq!(b.len(), 4);
        }
    }

    #[test]
    fn out_of_capacity_leaves_contents() {
        let mut b = BufferBuilder::new(5).unwrap();
        b.append_bytes(b"abc").unwrap();
        let err = b.append_packed_u32(RUN).unwrap_err();
        assert_eq!(
            err,
            BuildError::OutOfCapacity {
                needed: 7,
                capacity: 5
            }
        );
        assert_eq!(b.as_bytes(), b"abc");
        b.append_bytes(b"de").unwrap();
        assert_eq!(b.as_bytes(), b"abcde");
    }

    #[test]
    fn cstring_capacity_counts_from_terminator() {
        // "ab" + "xyz\0" needs 6; the next "!" lands on the zero and fits.
        let mut b = BufferBuilder::with_mode(6, AppendMode::CString).unwrap();
        b.append_bytes(b"ab").unwrap();
        b.append_packed_u32(0x007a_7978).unwrap();
        b.append_bytes(b"!").unwrap();
        assert_eq!(b.as_bytes(), b"abxyz!");
        assert!(b.append_bytes(b"?").is_err());
    }

    #[test]
    fn finalize_is_idempotent_and_seals() {
        let mut b = BufferBuilder::new(8).unwrap();
        b.append_all([Fragment::from("ab"), Fragment::from(THE)]).unwrap();
        let first = b.finalize().to_vec();
        let second = b.finalize().to_vec();
        assert_eq!(first, second);
        assert!(b.is_finalized());
        assert_eq!(b.append_bytes(b"x"), Err(BuildError::Finalized));
        assert_eq!(b.append_packed_u32(1), Err(BuildError::Finalized));
        assert_eq!(b.finalize(), first.as_slice());
    }

    #[test]
    fn allocation_failure_is_reported() {
        let err = BufferBuilder::new(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            BuildError::AllocationFailure {
                capacity: usize::MAX
            }
        );
    }

    #[test]
    fn sized_for_fragments() {
        let fragments = [
            Fragment::Bytes(b"raowenyuan"),
            Fragment::Packed(JOY),
            Fragment::Bytes(b""),
        ];
        let mut b = BufferBuilder::for_fragments(&fragments).unwrap();
        assert_eq!(b.capacity(), 14);
        b.append_all(fragments).unwrap();
        assert_eq!(b.into_bytes(), b"raowenyuanjoy\0");
    }

    #[test]
    fn empty_builder() {
        let mut b = BufferBuilder::new(0).unwrap();
        assert!(b.is_empty());
        b.append_bytes(b"").unwrap();
        assert_eq!(b.finalize(), b"");
        assert_eq!(b.mode(), AppendMode::Raw);
    }
}
