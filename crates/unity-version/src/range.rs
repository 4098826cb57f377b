//! Bounded version intervals.

use std::fmt;

use crate::UnityVersion;

/// An interval of versions under the release-sequence ordering.
///
/// Bounds are not required to be ordered; a reversed range contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnityVersionRange {
    lower_bound:     UnityVersion,
    upper_bound:     UnityVersion,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

impl UnityVersionRange {
    pub const fn new(
        lower_bound: UnityVersion,
        upper_bound: UnityVersion,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) -> Self {
        Self { lower_bound, upper_bound, lower_inclusive, upper_inclusive }
    }

    /// `[lower, upper]`
    pub const fn inclusive(lower_bound: UnityVersion, upper_bound: UnityVersion) -> Self {
        Self::new(lower_bound, upper_bound, true, true)
    }

    /// `[lower, upper)`
    pub const fn half_open(lower_bound: UnityVersion, upper_bound: UnityVersion) -> Self {
        Self::new(lower_bound, upper_bound, true, false)
    }

    pub const fn lower_bound(&self) -> UnityVersion { self.lower_bound }

    pub const fn upper_bound(&self) -> UnityVersion { self.upper_bound }

    pub const fn lower_inclusive(&self) -> bool { self.lower_inclusive }

    pub const fn upper_inclusive(&self) -> bool { self.upper_inclusive }

    pub fn contains(&self, version: UnityVersion) -> bool {
        let above_lower = if self.lower_inclusive {
            self.lower_bound <= version
        } else {
            self.lower_bound < version
        };
        let below_upper = if self.upper_inclusive {
            version <= self.upper_bound
        } else {
            version < self.upper_bound
        };
        above_lower && below_upper
    }
}

impl fmt::Display for UnityVersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower_inclusive { '[' } else { '(' };
        let close = if self.upper_inclusive { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.lower_bound, self.upper_bound, close)
    }
}
