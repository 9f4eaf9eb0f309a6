/// A fixed-width unsigned integer that can be partitioned one bit at a time.
pub trait RadixKey: Copy + 'static {
    /// Number of bits in the key, the most significant one being `BITS - 1`.
    const BITS: u32;

    /// Returns whether bit `bit` (0 = least significant) is set.
    fn bit(&self, bit: u32) -> bool;

    /// Widens the key for reporting.
    fn to_u64(&self) -> u64;
}

impl RadixKey for u8 {
    const BITS: u32 = u8::BITS;

    #[inline(always)]
    fn bit(&self, bit: u32) -> bool {
        (*self >> bit) & 1 == 1
    }

    #[inline(always)]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u16 {
    const BITS: u32 = u16::BITS;

    #[inline(always)]
    fn bit(&self, bit: u32) -> bool {
        (*self >> bit) & 1 == 1
    }

    #[inline(always)]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u32 {
    const BITS: u32 = u32::BITS;

    #[inline(always)]
    fn bit(&self, bit: u32) -> bool {
        (*self >> bit) & 1 == 1
    }

    #[inline(always)]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u64 {
    const BITS: u32 = u64::BITS;

    #[inline(always)]
    fn bit(&self, bit: u32) -> bool {
        (*self >> bit) & 1 == 1
    }

    #[inline(always)]
    fn to_u64(&self) -> u64 {
        *self
    }
}

// usize is at most 64 bits on every target this crate builds for
impl RadixKey for usize {
    const BITS: u32 = usize::BITS;

    #[inline(always)]
    fn bit(&self, bit: u32) -> bool {
        (*self >> bit) & 1 == 1
    }

    #[inline(always)]
    fn to_u64(&self) -> u64 {
        *self as u64
    }
}
