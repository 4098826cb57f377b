//! Release-sequence ordering and version distance.
//!
//! Unity numbered its releases `1`..`5`, then switched to calendar years
//! (`2017`..`2023`), then went back to small integers starting at `6`. The
//! resulting sequence is
//!
//! ```text
//! 0..=5  <  2017..=2023  <  6.. (every other major)
//! ```
//!
//! Within each segment versions order by their packed bits.

use std::cmp::Ordering;

use crate::{Result, UnityVersion, VersionError};

/// First major of the calendar-year era.
pub const FIRST_YEAR_MAJOR: u16 = 2017;

/// Last major of the calendar-year era.
pub const LAST_YEAR_MAJOR: u16 = 2023;

/// First major after the calendar-year era.
pub const FIRST_NEW_MAJOR: u16 = 6;

impl UnityVersion {
    /// Whether the major is a calendar year (`2017..=2023`).
    pub const fn uses_year_numbering(self) -> bool {
        let major = self.major();
        major >= FIRST_YEAR_MAJOR && major <= LAST_YEAR_MAJOR
    }

    /// Ordinal distance between two versions.
    ///
    /// Only useful for ranking, for example in [`UnityVersion::closest_in`].
    /// Zero iff the versions are equal.
    pub const fn distance(self, other: Self) -> u64 { self.to_bits().abs_diff(other.to_bits()) }

    /// The candidate with the smallest [`distance`](Self::distance) to `self`.
    /// Ties go to the earliest candidate.
    pub fn closest_in<'a, I>(self, candidates: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a UnityVersion>,
    {
        candidates
            .into_iter()
            .copied()
            .min_by_key(|candidate| self.distance(*candidate))
            .ok_or(VersionError::NoCandidates)
    }
}

impl Ord for UnityVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        match (self.uses_year_numbering(), other.uses_year_numbering()) {
            (true, false) => {
                if other.major() < FIRST_NEW_MAJOR {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, true) => {
                if self.major() < FIRST_NEW_MAJOR {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            _ => self.to_bits().cmp(&other.to_bits()),
        }
    }
}

impl PartialOrd for UnityVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

pub fn distance(left: UnityVersion, right: UnityVersion) -> u64 { left.distance(right) }

pub fn closest_version(target: UnityVersion, candidates: &[UnityVersion]) -> Result<UnityVersion> {
    target.closest_in(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnityVersionType::*;

    const LOW: UnityVersion = UnityVersion::new(2017, 3, 0, Patch, 1);
    const MEDIUM: UnityVersion = UnityVersion::new(2019, 4, 3, Final, 1);
    const HIGH: UnityVersion = UnityVersion::new(2020, 2, 0, Final, 1);

    const V3: UnityVersion = UnityVersion::new(3, 0, 0, Final, 1);
    const V4: UnityVersion = UnityVersion::new(4, 4, 0, Alpha, 1);
    const V5: UnityVersion = UnityVersion::new(5, 6, 1, Final, 11);
    const V6: UnityVersion = UnityVersion::new(6, 0, 0, Final, 1);
    const V7: UnityVersion = UnityVersion::new(7, 0, 0, Final, 1);
    const V8: UnityVersion = UnityVersion::new(8, 0, 0, Final, 1);
    const V9: UnityVersion = UnityVersion::new(9, 0, 0, Final, 1);
    const CANDIDATES: [UnityVersion; 7] = [V3, V4, V5, V6, V7, V8, V9];

    #[test]
    fn test_year_versions_are_transitive() {
        assert!(LOW < MEDIUM);
        assert!(MEDIUM < HIGH);
        assert!(LOW < HIGH);
        assert!(HIGH > MEDIUM && MEDIUM > LOW && HIGH > LOW);
    }

    #[test]
    fn test_sequential_versions_are_transitive() {
        assert!(V3 < V4);
        assert!(V4 < V5);
        assert!(V3 < V5);
    }

    #[test]
    fn test_weak_inequality() {
        let low = LOW;
        assert!(LOW <= low);
        assert!(LOW >= low);
        assert_eq!(LOW.cmp(&low), Ordering::Equal);
    }

    #[test]
    fn test_type_number_increase_is_greater() {
        assert!(UnityVersion::MIN < UnityVersion::new(0, 0, 0, Alpha, 1));
        assert!(LOW < LOW.change_type_number(LOW.type_number() + 1));
    }

    #[test]
    fn test_alpha_zero_is_lowest_for_a_build() {
        assert!(UnityVersion::from_major_minor_build(2019, 1, 0) < UnityVersion::new(2019, 1, 0, Final, 1));
    }

    #[test]
    fn test_year_era_sits_between_five_and_six() {
        let year = UnityVersion::new(2020, 1, 0, Final, 1);
        assert!(year > UnityVersion::new(5, 6, 7, Final, 1));
        assert!(year < UnityVersion::new(6, 0, 0, Final, 1));
        assert!(UnityVersion::new(2023, 2, 20, Final, 1) < V6);
        assert!(UnityVersion::new(2024, 0, 0, Final, 1) > UnityVersion::new(2023, 2, 20, Final, 1));
        assert!(UnityVersion::new(2016, 0, 0, Final, 1) > UnityVersion::new(2023, 0, 0, Final, 1));
    }

    #[test]
    fn test_year_bounds() {
        assert!(!UnityVersion::from_major(2016).uses_year_numbering());
        assert!(UnityVersion::from_major(2017).uses_year_numbering());
        assert!(UnityVersion::from_major(2023).uses_year_numbering());
        assert!(!UnityVersion::from_major(2024).uses_year_numbering());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(V5.max(HIGH), HIGH);
        assert_eq!(V6.min(HIGH), HIGH);
        assert_eq!(UnityVersion::MIN.min(V3), UnityVersion::MIN);
    }

    #[test]
    fn test_sort_follows_release_sequence() {
        let mut versions = vec![V7, HIGH, V3, V6, LOW, V5];
        versions.sort();
        assert_eq!(versions, vec![V3, V5, LOW, HIGH, V6, V7]);
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_eq!(distance(V4, V5), distance(V5, V4));
    }

    #[test]
    fn test_distance_is_zero_for_equal_versions() {
        assert_eq!(distance(V4, V4), 0);
        assert_ne!(distance(V4, V5), 0);
    }

    #[test]
    fn test_closest_returns_version_6() {
        let version = UnityVersion::from_major_minor(6, 1);
        assert_eq!(version.closest_in(&CANDIDATES), Ok(V6));
    }

    #[test]
    fn test_closest_returns_version_5() {
        let version = UnityVersion::from_major_minor_build(5, 4, 9);
        assert_eq!(closest_version(version, &CANDIDATES), Ok(V5));
    }

    #[test]
    fn test_closest_prefers_first_on_tie() {
        let a = UnityVersion::new(5, 0, 0, Final, 1);
        let b = UnityVersion::new(5, 0, 0, Final, 3);
        let target = UnityVersion::new(5, 0, 0, Final, 2);
        assert_eq!(target.closest_in(&[a, b]), Ok(a));
        assert_eq!(target.closest_in(&[b, a]), Ok(b));
    }

    #[test]
    fn test_closest_in_empty_list_fails() {
        let empty: [UnityVersion; 0] = [];
        assert_eq!(V3.closest_in(&empty), Err(VersionError::NoCandidates));
        assert_eq!(closest_version(V3, &[]), Err(VersionError::NoCandidates));
    }
}
