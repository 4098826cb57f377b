//! Partially specified versions (`2019`, `2019.4`, `2019.4.3f`, ...).
//!
//! A partial version fixes some leading fields and leaves the rest to be taken
//! from whatever version it is compared against, so `2019.1.0f1` is equal to
//! the partial `2019.1.0` rather than greater than it.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Result, UnityVersion, UnityVersionType, VersionError};

static PARTIAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>[0-9]+)(?:\.(?<minor>[0-9]+)(?:\.(?<build>[0-9]+)(?:\.?(?<type>[abcfpx])(?<number>[0-9]+)?)?)?)?$").unwrap()
});

/// A version with only a leading run of fields specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartialVersion {
    pub major:        u16,
    pub minor:        Option<u8>,
    pub build:        Option<u8>,
    pub version_type: Option<UnityVersionType>,
    pub type_number:  Option<u8>,
}

impl PartialVersion {
    /// Only the major specified.
    pub const fn new(major: u16) -> Self {
        Self { major, minor: None, build: None, version_type: None, type_number: None }
    }

    pub const fn with_minor(mut self, minor: u8) -> Self {
        self.minor = Some(minor);
        self
    }

    pub const fn with_build(mut self, build: u8) -> Self {
        self.build = Some(build);
        self
    }

    pub const fn with_type(mut self, version_type: UnityVersionType) -> Self {
        self.version_type = Some(version_type);
        self
    }

    pub const fn with_type_number(mut self, type_number: u8) -> Self {
        self.type_number = Some(type_number);
        self
    }

    /// Parse `major[.minor[.build[<letter>[number]]]]`. Numbers are masked
    /// into their field widths like [`UnityVersion`]'s constructors.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let invalid = || VersionError::InvalidFormat(s.to_string());
        let caps = PARTIAL_REGEX.captures(s).ok_or_else(invalid)?;
        let field = |name: &str| -> Result<Option<u64>> {
            caps.name(name)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
                .transpose()
        };

        let major = field("major")?.ok_or_else(invalid)?;
        let version_type = caps
            .name("type")
            .and_then(|m| m.as_str().chars().next())
            .map(<UnityVersionType as TryFrom<char>>::try_from)
            .transpose()?;

        Ok(Self {
            major: (major & 0xFFFF) as u16,
            minor: field("minor")?.map(|n| (n & 0xFF) as u8),
            build: field("build")?.map(|n| (n & 0xFF) as u8),
            version_type,
            type_number: field("number")?.map(|n| (n & 0xFF) as u8),
        })
    }

    /// `base` with every specified field replaced.
    pub const fn apply_to(&self, base: UnityVersion) -> UnityVersion {
        let mut version = base.change_major(self.major);
        if let Some(minor) = self.minor {
            version = version.change_minor(minor);
        }
        if let Some(build) = self.build {
            version = version.change_build(build);
        }
        if let Some(version_type) = self.version_type {
            version = version.change_type(version_type);
        }
        if let Some(type_number) = self.type_number {
            version = version.change_type_number(type_number);
        }
        version
    }

    /// Whether every specified field equals the corresponding field of `version`.
    pub fn matches(&self, version: UnityVersion) -> bool { self.apply_to(version) == version }
}

impl UnityVersion {
    /// Compare against a partial version, ignoring the fields it leaves out.
    pub fn cmp_partial(&self, partial: &PartialVersion) -> Ordering { self.cmp(&partial.apply_to(*self)) }

    pub fn matches_partial(&self, partial: &PartialVersion) -> bool { partial.matches(*self) }
}

impl From<UnityVersion> for PartialVersion {
    fn from(v: UnityVersion) -> Self {
        Self {
            major:        v.major(),
            minor:        Some(v.minor()),
            build:        Some(v.build()),
            version_type: v.version_type(),
            type_number:  Some(v.type_number()),
        }
    }
}

impl std::str::FromStr for PartialVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> { PartialVersion::parse(s) }
}

impl std::fmt::Display for PartialVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.major)?;
        let Some(minor) = self.minor else { return Ok(()) };
        write!(f, ".{}", minor)?;
        let Some(build) = self.build else { return Ok(()) };
        write!(f, ".{}", build)?;
        let Some(version_type) = self.version_type else { return Ok(()) };
        write!(f, "{}", version_type)?;
        if let Some(type_number) = self.type_number {
            write!(f, "{}", type_number)?;
        }
        Ok(())
    }
}
