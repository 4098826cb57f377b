//! The release letter of a version string.

use crate::{Result, VersionError};

/// The letter between the build number and the type number (`2019.4.3f1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum UnityVersionType {
    /// `a`
    Alpha = 0,
    /// `b`
    Beta = 1,
    /// `c`
    China = 2,
    /// `f`
    Final = 3,
    /// `p`
    Patch = 4,
    /// `x`
    Experimental = 5,
}

impl UnityVersionType {
    pub const MIN: Self = Self::Alpha;
    pub const MAX: Self = Self::Experimental;

    pub const ALL: [Self; 6] = [
        Self::Alpha,
        Self::Beta,
        Self::China,
        Self::Final,
        Self::Patch,
        Self::Experimental,
    ];

    /// The letter used when rendering a version.
    pub const fn to_char(self) -> char {
        match self {
            Self::Alpha => 'a',
            Self::Beta => 'b',
            Self::China => 'c',
            Self::Final => 'f',
            Self::Patch => 'p',
            Self::Experimental => 'x',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::Alpha),
            'b' => Some(Self::Beta),
            'c' => Some(Self::China),
            'f' => Some(Self::Final),
            'p' => Some(Self::Patch),
            'x' => Some(Self::Experimental),
            _ => None,
        }
    }

    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::Alpha),
            1 => Some(Self::Beta),
            2 => Some(Self::China),
            3 => Some(Self::Final),
            4 => Some(Self::Patch),
            5 => Some(Self::Experimental),
            _ => None,
        }
    }

    pub const fn as_byte(self) -> u8 { self as u8 }
}

impl TryFrom<u8> for UnityVersionType {
    type Error = VersionError;

    fn try_from(b: u8) -> Result<Self> { Self::from_byte(b).ok_or(VersionError::UnknownType(b)) }
}

impl TryFrom<char> for UnityVersionType {
    type Error = VersionError;

    fn try_from(c: char) -> Result<Self> { Self::from_char(c).ok_or(VersionError::UnknownTypeChar(c)) }
}

impl From<UnityVersionType> for u8 {
    fn from(t: UnityVersionType) -> Self { t.as_byte() }
}

impl std::fmt::Display for UnityVersionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UnityVersionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnityVersionType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let c = char::deserialize(deserializer)?;
        Self::try_from(c).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::UnityVersionType;
    use crate::VersionError;

    #[test]
    fn test_char_mapping_is_inverse() {
        for t in UnityVersionType::ALL {
            assert_eq!(UnityVersionType::from_char(t.to_char()), Some(t));
            assert_eq!(UnityVersionType::from_byte(t.as_byte()), Some(t));
        }
    }

    #[test]
    fn test_letters() {
        let letters: String = UnityVersionType::ALL.iter().map(|t| t.to_char()).collect();
        assert_eq!(letters, "abcfpx");
    }

    #[test]
    fn test_unknown_byte_is_rejected() {
        assert_eq!(UnityVersionType::try_from(6u8), Err(VersionError::UnknownType(6)));
        assert_eq!(UnityVersionType::try_from(255u8), Err(VersionError::UnknownType(255)));
    }

    #[test]
    fn test_unknown_char_is_rejected() {
        assert_eq!(UnityVersionType::try_from('u'), Err(VersionError::UnknownTypeChar('u')));
        assert_eq!(UnityVersionType::try_from('F'), Err(VersionError::UnknownTypeChar('F')));
    }

    #[test]
    fn test_declaration_order() {
        assert!(UnityVersionType::Alpha < UnityVersionType::Beta);
        assert!(UnityVersionType::Final < UnityVersionType::Patch);
        assert_eq!(UnityVersionType::MIN, UnityVersionType::Alpha);
        assert_eq!(UnityVersionType::MAX, UnityVersionType::Experimental);
    }
}
