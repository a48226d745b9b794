//! Checked reads over an immutable byte slice.

use crate::error::TgaError;

/// Forward-only reader over `&[u8]`.
///
/// Every read either consumes exactly the requested number of bytes or
/// fails with [`TgaError::TruncatedPayload`] and leaves the position
/// untouched.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, TgaError> {
        let [b] = self.read_fixed_bytes::<1>()?;
        Ok(b)
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16, TgaError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes::<2>()?))
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], TgaError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    /// Borrow the next `n` bytes and advance past them.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], TgaError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(TgaError::TruncatedPayload {
                needed: n,
                actual: self.remaining(),
            })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }
}
