//! Strongly typed, zero-cost pet identifier.
//!
//! `PetId` is `Copy + Ord + Hash` so it can be used as a map key or sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing into
//! the desktop's pet `Vec` via `id.0 as usize`, but callers should prefer the
//! `.index()` helper for clarity.

use std::fmt;

/// Index of a pet in the desktop's pet list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetId(pub u32);

impl PetId {
    /// Sentinel meaning "no valid pet" — equivalent to `u32::MAX`.
    pub const INVALID: PetId = PetId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for PetId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PetId({})", self.0)
    }
}

impl From<PetId> for usize {
    #[inline(always)]
    fn from(id: PetId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PetId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PetId, Self::Error> {
        u32::try_from(n).map(PetId)
    }
}
