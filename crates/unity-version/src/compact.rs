//! Narrow encodings for storage-constrained records.
//!
//! Both forms store the major through a "raw major" transform: `0..=5` are
//! stored as-is and calendar majors from `2017` upward are stored as
//! `major - 2011`. Majors `6..=2016`, and anything above the form's maximum,
//! cannot be encoded. Unlike [`UnityVersion`], no field is ever truncated;
//! values that do not fit are rejected.
//!
//! Both forms order by their bits, which agrees with [`UnityVersion`]'s
//! ordering for every representable value.
//!
//! ```text
//! CompactUnityVersion32 (u32)
//!  31      24 23  20 19     12 11   8 7       0
//! +----------+------+---------+------+---------+
//! | raw major| minor|  build  | type | typeNo  |
//! +----------+------+---------+------+---------+
//!
//! CompactUnityVersion24 (u8 + u16)
//!  7       3 2   0    15     9 8    6 5      0
//! +---------+-----+  +--------+------+--------+
//! |raw major|minor|  | build  | type | typeNo |
//! +---------+-----+  +--------+------+--------+
//! ```

use std::fmt;

use tracing::debug;

use crate::ordering::{FIRST_NEW_MAJOR, FIRST_YEAR_MAJOR};
use crate::{Result, UnityVersion, UnityVersionType, VersionError};

const YEAR_OFFSET: u16 = 2011;

const fn major_from_raw(raw: u8) -> u16 {
    if (raw as u16) < FIRST_NEW_MAJOR { raw as u16 } else { raw as u16 + YEAR_OFFSET }
}

fn major_to_raw(major: u16, max: u16) -> Result<u8> {
    if major < FIRST_NEW_MAJOR {
        Ok(major as u8)
    } else if (FIRST_YEAR_MAJOR..=max).contains(&major) {
        Ok((major - YEAR_OFFSET) as u8)
    } else {
        debug!(major, max, "major version cannot be compacted");
        Err(VersionError::MajorOutOfRange { major, max })
    }
}

fn fit(field: &'static str, value: u8, bits: u32) -> Result<u8> {
    if u32::from(value) < (1 << bits) {
        Ok(value)
    } else {
        debug!(field, value, bits, "version field cannot be compacted");
        Err(VersionError::FieldOutOfRange { field, value, bits })
    }
}

/// A version packed into 32 bits. Majors `0..=5` and `2017..=2266`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CompactUnityVersion32(u32);

impl CompactUnityVersion32 {
    /// Largest encodable major.
    pub const MAJOR_MAX: u16 = 0xFF + YEAR_OFFSET;

    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(u32::MAX);

    const MAJOR_OFFSET: u32 = 24;
    const MINOR_OFFSET: u32 = 20;
    const BUILD_OFFSET: u32 = 12;
    const TYPE_OFFSET: u32 = 8;

    /// Pack the fields, rejecting any that do not fit.
    pub fn new(
        major: u16,
        minor: u8,
        build: u8,
        version_type: UnityVersionType,
        type_number: u8,
    ) -> Result<Self> {
        Self::from_raw_parts(major, minor, build, version_type.as_byte(), type_number)
    }

    /// Like `new`, but with an unchecked type byte that still has to fit its field.
    pub fn from_raw_parts(major: u16, minor: u8, build: u8, type_byte: u8, type_number: u8) -> Result<Self> {
        let raw = major_to_raw(major, Self::MAJOR_MAX)?;
        let minor = fit("minor", minor, 4)?;
        let type_byte = fit("type", type_byte, 4)?;
        Ok(Self(
            (u32::from(raw) << Self::MAJOR_OFFSET)
                | (u32::from(minor) << Self::MINOR_OFFSET)
                | (u32::from(build) << Self::BUILD_OFFSET)
                | (u32::from(type_byte) << Self::TYPE_OFFSET)
                | u32::from(type_number),
        ))
    }

    pub const fn from_bits(bits: u32) -> Self { Self(bits) }

    pub const fn to_bits(self) -> u32 { self.0 }

    pub const fn major(self) -> u16 { major_from_raw((self.0 >> Self::MAJOR_OFFSET) as u8) }

    pub const fn minor(self) -> u8 { ((self.0 >> Self::MINOR_OFFSET) & 0xF) as u8 }

    pub const fn build(self) -> u8 { ((self.0 >> Self::BUILD_OFFSET) & 0xFF) as u8 }

    pub const fn type_byte(self) -> u8 { ((self.0 >> Self::TYPE_OFFSET) & 0xF) as u8 }

    pub const fn version_type(self) -> Option<UnityVersionType> { UnityVersionType::from_byte(self.type_byte()) }

    pub const fn type_number(self) -> u8 { (self.0 & 0xFF) as u8 }

    pub fn to_canonical(self) -> UnityVersion { self.into() }

    pub fn try_from_canonical(version: UnityVersion) -> Result<Self> { version.try_into() }
}

/// A version packed into 24 bits. Majors `0..=5` and `2017..=2042`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CompactUnityVersion24 {
    major_minor: u8,
    build_type:  u16,
}

impl CompactUnityVersion24 {
    /// Largest encodable major.
    pub const MAJOR_MAX: u16 = 0x1F + YEAR_OFFSET;

    pub const MIN: Self = Self::from_bits(0, 0);
    pub const MAX: Self = Self::from_bits(u8::MAX, u16::MAX);

    const MAJOR_OFFSET: u32 = 3;
    const BUILD_OFFSET: u32 = 9;
    const TYPE_OFFSET: u32 = 6;

    /// Pack the fields, rejecting any that do not fit.
    pub fn new(
        major: u16,
        minor: u8,
        build: u8,
        version_type: UnityVersionType,
        type_number: u8,
    ) -> Result<Self> {
        Self::from_raw_parts(major, minor, build, version_type.as_byte(), type_number)
    }

    /// Like `new`, but with an unchecked type byte that still has to fit its field.
    pub fn from_raw_parts(major: u16, minor: u8, build: u8, type_byte: u8, type_number: u8) -> Result<Self> {
        let raw = major_to_raw(major, Self::MAJOR_MAX)?;
        let minor = fit("minor", minor, 3)?;
        let build = fit("build", build, 7)?;
        let type_byte = fit("type", type_byte, 3)?;
        let type_number = fit("type number", type_number, 6)?;
        Ok(Self {
            major_minor: (raw << Self::MAJOR_OFFSET) | minor,
            build_type:  (u16::from(build) << Self::BUILD_OFFSET)
                | (u16::from(type_byte) << Self::TYPE_OFFSET)
                | u16::from(type_number),
        })
    }

    pub const fn from_bits(major_minor: u8, build_type: u16) -> Self { Self { major_minor, build_type } }

    pub const fn to_bits(self) -> (u8, u16) { (self.major_minor, self.build_type) }

    /// Decode from the low 24 bits of `bits`; the high byte is ignored.
    pub const fn from_u24(bits: u32) -> Self { Self::from_bits((bits >> 16) as u8, bits as u16) }

    pub const fn to_u24(self) -> u32 { ((self.major_minor as u32) << 16) | self.build_type as u32 }

    const fn major_raw(self) -> u8 { self.major_minor >> Self::MAJOR_OFFSET }

    pub const fn major(self) -> u16 { major_from_raw(self.major_raw()) }

    pub const fn minor(self) -> u8 { self.major_minor & 0x7 }

    pub const fn build(self) -> u8 { ((self.build_type >> Self::BUILD_OFFSET) & 0x7F) as u8 }

    pub const fn type_byte(self) -> u8 { ((self.build_type >> Self::TYPE_OFFSET) & 0x7) as u8 }

    pub const fn version_type(self) -> Option<UnityVersionType> { UnityVersionType::from_byte(self.type_byte()) }

    pub const fn type_number(self) -> u8 { (self.build_type & 0x3F) as u8 }

    pub fn to_canonical(self) -> UnityVersion { self.into() }

    pub fn try_from_canonical(version: UnityVersion) -> Result<Self> { version.try_into() }
}

impl From<CompactUnityVersion32> for UnityVersion {
    fn from(v: CompactUnityVersion32) -> Self {
        UnityVersion::from_raw_parts(
            v.major().into(),
            v.minor().into(),
            v.build().into(),
            v.type_byte(),
            v.type_number().into(),
        )
    }
}

impl From<CompactUnityVersion24> for UnityVersion {
    fn from(v: CompactUnityVersion24) -> Self {
        UnityVersion::from_raw_parts(
            v.major().into(),
            v.minor().into(),
            v.build().into(),
            v.type_byte(),
            v.type_number().into(),
        )
    }
}

impl From<CompactUnityVersion24> for CompactUnityVersion32 {
    fn from(v: CompactUnityVersion24) -> Self {
        // The raw major transform is the same for both widths.
        Self(
            (u32::from(v.major_raw()) << Self::MAJOR_OFFSET)
                | (u32::from(v.minor()) << Self::MINOR_OFFSET)
                | (u32::from(v.build()) << Self::BUILD_OFFSET)
                | (u32::from(v.type_byte()) << Self::TYPE_OFFSET)
                | u32::from(v.type_number()),
        )
    }
}

impl TryFrom<UnityVersion> for CompactUnityVersion32 {
    type Error = VersionError;

    fn try_from(v: UnityVersion) -> Result<Self> {
        Self::from_raw_parts(v.major(), v.minor(), v.build(), v.type_byte(), v.type_number())
    }
}

impl TryFrom<UnityVersion> for CompactUnityVersion24 {
    type Error = VersionError;

    fn try_from(v: UnityVersion) -> Result<Self> {
        Self::from_raw_parts(v.major(), v.minor(), v.build(), v.type_byte(), v.type_number())
    }
}

impl TryFrom<CompactUnityVersion32> for CompactUnityVersion24 {
    type Error = VersionError;

    fn try_from(v: CompactUnityVersion32) -> Result<Self> {
        Self::from_raw_parts(v.major(), v.minor(), v.build(), v.type_byte(), v.type_number())
    }
}

impl fmt::Debug for CompactUnityVersion32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompactUnityVersion32").field(&self.to_canonical()).finish()
    }
}

impl fmt::Debug for CompactUnityVersion24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompactUnityVersion24").field(&self.to_canonical()).finish()
    }
}

impl fmt::Display for CompactUnityVersion32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.to_canonical(), f) }
}

impl fmt::Display for CompactUnityVersion24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.to_canonical(), f) }
}
