//! The canonical 64-bit version value.
//!
//! ```text
//!  63        48 47    40 39    32 31    24 23    16 15       0
//! +-----------+--------+--------+--------+--------+----------+
//! |   major   | minor  | build  |  type  | typeNo | reserved |
//! +-----------+--------+--------+--------+--------+----------+
//! ```
//!
//! Every constructor masks its arguments into the field widths, so `minor = 256`
//! is stored as `0`. The reserved bits are always zero.

use crate::UnityVersionType;

const MAJOR_OFFSET: u32 = 48;
const MINOR_OFFSET: u32 = 40;
const BUILD_OFFSET: u32 = 32;
const TYPE_OFFSET: u32 = 24;
const TYPE_NUMBER_OFFSET: u32 = 16;

const MASK16: u64 = 0xFFFF;
const MASK8: u64 = 0xFF;
const RESERVED_MASK: u64 = 0xFFFF;

/// A Unity engine version such as `2019.4.3f1`.
///
/// Equality and hashing are defined over the packed bits. Ordering follows the
/// release sequence rather than the bits; see [`crate::ordering`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnityVersion(u64);

impl UnityVersion {
    /// `0.0.0a0`
    pub const MIN: Self = Self(0);

    /// Every field at its maximum, including the type byte (`0xFF`).
    pub const MAX: Self = Self(!RESERVED_MASK);

    pub const fn from_major(major: u32) -> Self { Self(pack(major as u64, 0, 0, 0, 0)) }

    pub const fn from_major_minor(major: u32, minor: u32) -> Self {
        Self(pack(major as u64, minor as u64, 0, 0, 0))
    }

    pub const fn from_major_minor_build(major: u32, minor: u32, build: u32) -> Self {
        Self(pack(major as u64, minor as u64, build as u64, 0, 0))
    }

    pub const fn from_major_minor_build_type(
        major: u32,
        minor: u32,
        build: u32,
        version_type: UnityVersionType,
    ) -> Self {
        Self(pack(major as u64, minor as u64, build as u64, version_type as u64, 0))
    }

    pub const fn new(
        major: u32,
        minor: u32,
        build: u32,
        version_type: UnityVersionType,
        type_number: u32,
    ) -> Self {
        Self(pack(
            major as u64,
            minor as u64,
            build as u64,
            version_type as u64,
            type_number as u64,
        ))
    }

    /// Build a version whose type byte need not name a [`UnityVersionType`].
    pub const fn from_raw_parts(major: u32, minor: u32, build: u32, type_byte: u8, type_number: u32) -> Self {
        Self(pack(
            major as u64,
            minor as u64,
            build as u64,
            type_byte as u64,
            type_number as u64,
        ))
    }

    pub(crate) const fn from_wide_parts(major: u64, minor: u64, build: u64, type_byte: u64, type_number: u64) -> Self {
        Self(pack(major, minor, build, type_byte, type_number))
    }

    /// Decode a packed value. The reserved low bits are discarded.
    pub const fn from_bits(bits: u64) -> Self { Self(bits & !RESERVED_MASK) }

    pub const fn to_bits(self) -> u64 { self.0 }

    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self { Self::from_bits(u64::from_le_bytes(bytes)) }

    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self { Self::from_bits(u64::from_be_bytes(bytes)) }

    pub const fn to_le_bytes(self) -> [u8; 8] { self.0.to_le_bytes() }

    pub const fn to_be_bytes(self) -> [u8; 8] { self.0.to_be_bytes() }

    /// The first number, `2019` in `2019.4.3f1`.
    pub const fn major(self) -> u16 { ((self.0 >> MAJOR_OFFSET) & MASK16) as u16 }

    /// The second number, `4` in `2019.4.3f1`.
    pub const fn minor(self) -> u8 { ((self.0 >> MINOR_OFFSET) & MASK8) as u8 }

    /// The third number, `3` in `2019.4.3f1`.
    pub const fn build(self) -> u8 { ((self.0 >> BUILD_OFFSET) & MASK8) as u8 }

    /// The raw type byte, which may lie outside the defined variants.
    pub const fn type_byte(self) -> u8 { ((self.0 >> TYPE_OFFSET) & MASK8) as u8 }

    /// The letter, `f` in `2019.4.3f1`, or `None` for an undefined type byte.
    pub const fn version_type(self) -> Option<UnityVersionType> { UnityVersionType::from_byte(self.type_byte()) }

    /// The last number, `1` in `2019.4.3f1`.
    pub const fn type_number(self) -> u8 { ((self.0 >> TYPE_NUMBER_OFFSET) & MASK8) as u8 }

    /// Copy with the major replaced.
    pub const fn change_major(self, value: u16) -> Self {
        Self((self.0 & !(MASK16 << MAJOR_OFFSET)) | ((value as u64) << MAJOR_OFFSET))
    }

    /// Copy with the minor replaced.
    pub const fn change_minor(self, value: u8) -> Self {
        Self((self.0 & !(MASK8 << MINOR_OFFSET)) | ((value as u64) << MINOR_OFFSET))
    }

    /// Copy with the build replaced.
    pub const fn change_build(self, value: u8) -> Self {
        Self((self.0 & !(MASK8 << BUILD_OFFSET)) | ((value as u64) << BUILD_OFFSET))
    }

    /// Copy with the version type replaced.
    pub const fn change_type(self, value: UnityVersionType) -> Self {
        Self((self.0 & !(MASK8 << TYPE_OFFSET)) | ((value as u64) << TYPE_OFFSET))
    }

    /// Copy with the type number replaced.
    pub const fn change_type_number(self, value: u8) -> Self {
        Self((self.0 & !(MASK8 << TYPE_NUMBER_OFFSET)) | ((value as u64) << TYPE_NUMBER_OFFSET))
    }
}

const fn pack(major: u64, minor: u64, build: u64, type_byte: u64, type_number: u64) -> u64 {
    ((major & MASK16) << MAJOR_OFFSET)
        | ((minor & MASK8) << MINOR_OFFSET)
        | ((build & MASK8) << BUILD_OFFSET)
        | ((type_byte & MASK8) << TYPE_OFFSET)
        | ((type_number & MASK8) << TYPE_NUMBER_OFFSET)
}

impl std::fmt::Debug for UnityVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("UnityVersion");
        s.field("major", &self.major())
            .field("minor", &self.minor())
            .field("build", &self.build());
        match self.version_type() {
            Some(t) => s.field("type", &t),
            None => s.field("type", &self.type_byte()),
        };
        s.field("type_number", &self.type_number()).finish()
    }
}

impl From<UnityVersion> for u64 {
    fn from(v: UnityVersion) -> Self { v.to_bits() }
}

impl From<u64> for UnityVersion {
    fn from(bits: u64) -> Self { Self::from_bits(bits) }
}
