//! Fixed-width bit accumulator shared by the encode and decode pipelines.

/// A short queue of bits, appended on the right and drained from the left.
///
/// Never holds more than 14 pending bits: the packer pushes 8 and drains
/// while at least 6 remain, the unpacker pushes 6 and drains while at least
/// 8 remain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BitBuffer {
    acc: u32,
    len: u32,
}

impl BitBuffer {
    pub(crate) const fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Number of pending bits.
    #[inline]
    pub(crate) const fn len(&self) -> u32 {
        self.len
    }

    /// Appends the low `width` bits of `value`, most-significant bit first.
    #[inline]
    pub(crate) fn push(&mut self, value: u32, width: u32) {
        debug_assert!(self.len + width <= 32);
        let mask = (1u32 << width) - 1;
        self.acc = (self.acc << width) | (value & mask);
        self.len += width;
    }

    /// Removes the leftmost `width` bits, or `None` if fewer are pending.
    #[inline]
    pub(crate) fn take(&mut self, width: u32) -> Option<u32> {
        if self.len < width {
            return None;
        }
        self.len -= width;
        let value = self.acc >> self.len;
        self.acc &= (1u32 << self.len) - 1;
        Some(value)
    }

    /// Right-pads the pending bits with zeros up to `width` and removes them.
    ///
    /// Returns `None` when nothing is pending.
    #[inline]
    pub(crate) fn flush(&mut self, width: u32) -> Option<u32> {
        if self.len == 0 {
            return None;
        }
        debug_assert!(self.len < width);
        let value = self.acc << (width - self.len);
        self.acc = 0;
        self.len = 0;
        Some(value)
    }
}
