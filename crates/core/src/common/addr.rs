//! Address decomposition.
//!
//! This module splits a 32-bit trace address into the three fields a
//! set-associative cache cares about. It provides the following:
//! 1. **Layout:** The immutable bit widths derived from a validated geometry.
//! 2. **Decoding:** A pure mapping from an address to its tag, set index, and block offset.
//!
//! ```text
//!  31                                              0
//! +------------------+---------------+--------------+
//! |       tag        |   set index   | block offset |
//! +------------------+---------------+--------------+
//!                     <- index_bits -> <- offset_bits ->
//! ```

/// Bit widths of the index and offset fields of an address.
///
/// Built once from a validated geometry; decoding never fails because the
/// sum of both widths is guaranteed to fit in 32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressLayout {
    offset_bits: u32,
    index_bits: u32,
}

/// An address split into its cache fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodedAddr {
    /// High-order bits identifying the block within its set.
    pub tag: u32,
    /// Set the block maps to.
    pub index: usize,
    /// Byte within the block. Not used by hit/miss logic.
    pub offset: u32,
}

impl AddressLayout {
    /// Creates a layout from the number of sets and the block size in bytes.
    ///
    /// Both values must be powers of two; callers obtain them from a
    /// validated [`Geometry`](crate::config::Geometry).
    pub const fn new(sets: usize, block_size: usize) -> Self {
        Self {
            offset_bits: block_size.trailing_zeros(),
            index_bits: sets.trailing_zeros(),
        }
    }

    /// Number of low-order bits selecting a byte within a block.
    #[inline]
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Number of bits selecting the set.
    #[inline]
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Number of bits left over for the tag.
    #[inline]
    pub const fn tag_bits(&self) -> u32 {
        u32::BITS.saturating_sub(self.offset_bits + self.index_bits)
    }

    /// Splits `address` into tag, set index, and block offset.
    ///
    /// A single-set cache has `index_bits == 0`, so the index mask is empty
    /// and every address lands in set 0.
    #[inline]
    pub fn decode(&self, address: u32) -> DecodedAddr {
        let offset_mask = low_mask(self.offset_bits);
        let index_mask = low_mask(self.index_bits);

        let offset = address & offset_mask;
        let index = address.checked_shr(self.offset_bits).unwrap_or(0) & index_mask;
        let tag = address
            .checked_shr(self.offset_bits + self.index_bits)
            .unwrap_or(0);

        DecodedAddr {
            tag,
            index: index as usize,
            offset,
        }
    }
}

/// Mask with the lowest `bits` bits set; saturates at a full 32-bit mask.
#[inline]
const fn low_mask(bits: u32) -> u32 {
    if bits >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}
