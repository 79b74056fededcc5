//! Cache sets and their slots.
//!
//! A set is a fixed row of slots (ways). Each slot carries only metadata:
//! validity, dirtiness, the tag of the resident block, and the two logical
//! timestamps the replacement policies order by. No data bytes are stored.

/// One cache line's metadata.
///
/// When `valid` is false every other field is stale and must not influence
/// victim selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    valid: bool,
    dirty: bool,
    tag: u32,
    load_ts: u64,
    access_ts: u64,
}

impl Slot {
    /// A valid line with explicit timestamps.
    pub const fn new(tag: u32, dirty: bool, load_ts: u64, access_ts: u64) -> Self {
        Self {
            valid: true,
            dirty,
            tag,
            load_ts,
            access_ts,
        }
    }

    /// A freshly installed line; both timestamps are set to `now`.
    pub const fn filled(tag: u32, dirty: bool, now: u64) -> Self {
        Self::new(tag, dirty, now, now)
    }

    /// Whether the slot holds a block.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the slot holds data not yet written to memory.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Tag of the resident block.
    #[inline]
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// Logical time the block entered the cache.
    #[inline]
    pub const fn load_timestamp(&self) -> u64 {
        self.load_ts
    }

    /// Logical time of the most recent reference to the block.
    #[inline]
    pub const fn access_timestamp(&self) -> u64 {
        self.access_ts
    }

    /// Records a reference at logical time `now`.
    pub(crate) fn touch(&mut self, now: u64) {
        self.access_ts = now;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Outcome of scanning a set for a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The tag is resident at this way.
    Hit(usize),
    /// The tag is absent but this way is empty and can take it.
    MissWithSpace(usize),
    /// The tag is absent and every way is valid; a victim must be chosen.
    MissFull,
}

/// A fixed-size group of slots sharing one set index.
#[derive(Clone, Debug)]
pub struct CacheSet {
    slots: Vec<Slot>,
}

impl CacheSet {
    /// Creates a set of `ways` empty slots.
    pub fn new(ways: usize) -> Self {
        Self {
            slots: vec![Slot::default(); ways],
        }
    }

    /// Scans every way for `tag`.
    ///
    /// An empty way is remembered as a candidate but the scan keeps going, so
    /// a later matching way still wins. With several empty ways the last one
    /// seen is reported.
    pub fn lookup(&self, tag: u32) -> Lookup {
        let mut empty = None;
        for (way, slot) in self.slots.iter().enumerate() {
            if !slot.valid {
                empty = Some(way);
                continue;
            }
            if slot.tag == tag {
                return Lookup::Hit(way);
            }
        }
        empty.map_or(Lookup::MissFull, Lookup::MissWithSpace)
    }

    /// All ways in order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot at `way`, if it exists.
    pub fn slot(&self, way: usize) -> Option<&Slot> {
        self.slots.get(way)
    }

    /// The slot at `way`; callers only pass ways obtained from a lookup or a policy.
    pub(crate) fn slot_mut(&mut self, way: usize) -> &mut Slot {
        &mut self.slots[way]
    }

    /// Number of ways holding a block.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.valid).count()
    }

    /// Whether every way holds a block.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.valid)
    }

    /// Whether a valid way holds `tag`.
    pub fn contains(&self, tag: u32) -> bool {
        matches!(self.lookup(tag), Lookup::Hit(_))
    }
}
