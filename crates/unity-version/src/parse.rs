//! Version string parsing.
//!
//! Recognised shapes, tried in order:
//!
//! | Shape             | Example           | Missing fields      |
//! |-------------------|-------------------|---------------------|
//! | China (long)      | `2021.3.11f1c2`   |                     |
//! | Normal            | `2019.4.3f1`      |                     |
//! | Major.Minor.Build | `2019.4.3`        | `f1`                |
//! | Major.Minor       | `2019.4`          | `.0f1`              |
//! | Major             | `2019`            | `.0.0f1`            |
//!
//! The Normal shape also accepts the short China form `2017.4.40c1`. Both the
//! China and Normal shapes may be followed by arbitrary text (newlines
//! included), which marks a custom engine build.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::{Result, UnityVersion, UnityVersionType, VersionError};

static CHINA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?<major>[0-9]+)\.(?<minor>[0-9]+)\.(?<build>[0-9]+)\.?f1c(?<number>[0-9]+)(?<custom>.+)?$").unwrap()
});

static NORMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?<major>[0-9]+)\.(?<minor>[0-9]+)\.(?<build>[0-9]+)\.?(?<type>[abcfpx])(?<number>[0-9]+)(?<custom>.+)?$").unwrap()
});

static MAJOR_MINOR_BUILD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?<major>[0-9]+)\.(?<minor>[0-9]+)\.(?<build>[0-9]+)$").unwrap());

static MAJOR_MINOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?<major>[0-9]+)\.(?<minor>[0-9]+)$").unwrap());

static MAJOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?<major>[0-9]+)$").unwrap());

/// Type and type number assumed when the string omits them.
const DEFAULT_TYPE: UnityVersionType = UnityVersionType::Final;
const DEFAULT_TYPE_NUMBER: u64 = 1;

impl UnityVersion {
    /// Parse a version string, discarding any custom engine suffix.
    pub fn parse(s: &str) -> Result<Self> { Self::parse_with_custom_engine(s).map(|(version, _)| version) }

    /// Parse a version string.
    ///
    /// The second element is the text following a China or Normal version,
    /// e.g. `"\n1"` for `4.2.2f1\n1`, or `None` when nothing follows.
    pub fn parse_with_custom_engine(s: &str) -> Result<(Self, Option<String>)> {
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let invalid = || VersionError::InvalidFormat(s.to_string());

        if let Some(caps) = CHINA_REGEX.captures(s) {
            trace!(input = s, "matched china version");
            let version = UnityVersion::from_wide_parts(
                number(&caps, "major").ok_or_else(invalid)?,
                number(&caps, "minor").ok_or_else(invalid)?,
                number(&caps, "build").ok_or_else(invalid)?,
                UnityVersionType::China as u64,
                number(&caps, "number").ok_or_else(invalid)?,
            );
            return Ok((version, custom_engine(&caps)));
        }

        if let Some(caps) = NORMAL_REGEX.captures(s) {
            trace!(input = s, "matched normal version");
            let letter = caps
                .name("type")
                .and_then(|m| m.as_str().chars().next())
                .ok_or_else(invalid)?;
            let version_type = UnityVersionType::try_from(letter)?;
            let version = UnityVersion::from_wide_parts(
                number(&caps, "major").ok_or_else(invalid)?,
                number(&caps, "minor").ok_or_else(invalid)?,
                number(&caps, "build").ok_or_else(invalid)?,
                version_type as u64,
                number(&caps, "number").ok_or_else(invalid)?,
            );
            return Ok((version, custom_engine(&caps)));
        }

        if let Some(caps) = MAJOR_MINOR_BUILD_REGEX.captures(s) {
            trace!(input = s, "matched major.minor.build version");
            let version = UnityVersion::from_wide_parts(
                number(&caps, "major").ok_or_else(invalid)?,
                number(&caps, "minor").ok_or_else(invalid)?,
                number(&caps, "build").ok_or_else(invalid)?,
                DEFAULT_TYPE as u64,
                DEFAULT_TYPE_NUMBER,
            );
            return Ok((version, None));
        }

        if let Some(caps) = MAJOR_MINOR_REGEX.captures(s) {
            trace!(input = s, "matched major.minor version");
            let version = UnityVersion::from_wide_parts(
                number(&caps, "major").ok_or_else(invalid)?,
                number(&caps, "minor").ok_or_else(invalid)?,
                0,
                DEFAULT_TYPE as u64,
                DEFAULT_TYPE_NUMBER,
            );
            return Ok((version, None));
        }

        if let Some(caps) = MAJOR_REGEX.captures(s) {
            trace!(input = s, "matched major-only version");
            let version = UnityVersion::from_wide_parts(
                number(&caps, "major").ok_or_else(invalid)?,
                0,
                0,
                DEFAULT_TYPE as u64,
                DEFAULT_TYPE_NUMBER,
            );
            return Ok((version, None));
        }

        Err(invalid())
    }

    /// Parse an assembly name like `_2019_4_3f1.dll`.
    pub fn parse_dll_name(dll_name: &str) -> Result<Self> {
        let name = dll_name.strip_prefix('_').unwrap_or(dll_name);
        if name.is_empty() {
            return Err(VersionError::Empty);
        }
        Self::parse(&name.replace('_', ".").replace(".dll", ""))
    }
}

impl std::str::FromStr for UnityVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> { UnityVersion::parse(s) }
}

impl TryFrom<&str> for UnityVersion {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self> { UnityVersion::parse(s) }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnityVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        UnityVersion::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A digit run too long for `u64` yields `None`; shorter runs are masked by the
/// constructor.
fn number(caps: &Captures<'_>, name: &str) -> Option<u64> { caps.name(name)?.as_str().parse().ok() }

fn custom_engine(caps: &Captures<'_>) -> Option<String> {
    let custom = caps.name("custom")?.as_str();
    debug!(custom_engine = custom, "version carries a custom engine suffix");
    Some(custom.to_string())
}

#[cfg(test)]
mod tests {
    use crate::UnityVersionType::*;
    use crate::{FormatFlags, UnityVersion, UnityVersionType, VersionError};

    fn check(input: &str, expected: UnityVersion, custom: Option<&str>) {
        let (version, custom_engine) = UnityVersion::parse_with_custom_engine(input).unwrap();
        assert_eq!(version, expected, "parsed version is wrong for {input:?}");
        assert_eq!(custom_engine.as_deref(), custom, "custom engine is wrong for {input:?}");
    }

    #[test]
    fn test_normal_version() {
        check("4.2.2f1", UnityVersion::new(4, 2, 2, Final, 1), None);
        check("2343.4.5f7", UnityVersion::new(2343, 4, 5, Final, 7), None);
        check("2019.4.3.f1", UnityVersion::new(2019, 4, 3, Final, 1), None);
        check("5.6.0b11", UnityVersion::new(5, 6, 0, Beta, 11), None);
    }

    #[test]
    fn test_custom_engine_suffix() {
        check("4.2.2f1\n1", UnityVersion::new(4, 2, 2, Final, 1), Some("\n1"));
        check("2019.2.2f1-letters", UnityVersion::new(2019, 2, 2, Final, 1), Some("-letters"));
    }

    #[test]
    fn test_china_long_form() {
        check("2021.3.11f1c2", UnityVersion::new(2021, 3, 11, China, 2), None);
        check("2019.2.2f1c2\n2", UnityVersion::new(2019, 2, 2, China, 2), Some("\n2"));
    }

    #[test]
    fn test_china_short_form() {
        check("2017.4.40c1", UnityVersion::new(2017, 4, 40, China, 1), None);
        assert_eq!(
            UnityVersion::parse("2019.4.40c1").unwrap(),
            UnityVersion::parse("2019.4.40f1c1").unwrap()
        );
    }

    #[test]
    fn test_partial_shapes_default_to_final_one() {
        check("2019.4.3", UnityVersion::new(2019, 4, 3, Final, 1), None);
        check("2019.4", UnityVersion::new(2019, 4, 0, Final, 1), None);
        check("2019", UnityVersion::new(2019, 0, 0, Final, 1), None);
    }

    #[test]
    fn test_round_trip() {
        for s in ["2343.4.5f7", "2021.3.11f1c2", "5.6.7p3", "2022.1.0a12", "6000.0.23x1"] {
            assert_eq!(UnityVersion::parse(s).unwrap().to_string(), s);
        }
        let short = UnityVersion::parse("2017.4.40c1").unwrap();
        assert_eq!(short.format(FormatFlags::SHORT_CHINESE_FORMAT).unwrap(), "2017.4.40c1");
        assert_eq!(short.to_string(), "2017.4.40f1c1");
    }

    #[test]
    fn test_defaulted_shapes_render_in_normal_form() {
        assert_eq!(UnityVersion::parse("2019.4").unwrap().to_string(), "2019.4.0f1");
        assert_eq!(UnityVersion::parse("2019.4.3").unwrap().to_string(), "2019.4.3f1");
    }

    #[test]
    fn test_custom_engine_round_trip() {
        for s in ["4.2.2f1\n1", "2019.2.2f1c2\n2", "2019.2.2f1-letters"] {
            let (version, custom) = UnityVersion::parse_with_custom_engine(s).unwrap();
            let custom = custom.unwrap();
            assert_eq!(version.format_with_custom_engine(FormatFlags::empty(), &custom).unwrap(), s);
        }
    }

    #[test]
    fn test_numbers_are_masked() {
        let v = UnityVersion::parse("70000.300.2f257").unwrap();
        assert_eq!(v.major(), (70000u32 & 0xFFFF) as u16);
        assert_eq!(v.minor(), (300u32 & 0xFF) as u8);
        assert_eq!(v.type_number(), 1);
    }

    #[test]
    fn test_empty_is_distinct_from_invalid() {
        assert_eq!(UnityVersion::parse(""), Err(VersionError::Empty));
        assert_eq!(
            UnityVersion::parse("not a version"),
            Err(VersionError::InvalidFormat("not a version".to_string()))
        );
    }

    #[test]
    fn test_invalid_inputs() {
        for s in [
            "2019.",
            ".4.3f1",
            "2019.4.3q1",
            "2019.4.3f",
            " 2019.4.3f1",
            "2019.4.3 ",
            "v2019.4",
            "99999999999999999999999.1",
        ] {
            assert!(
                matches!(UnityVersion::parse(s), Err(VersionError::InvalidFormat(_))),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_dll_name() {
        assert_eq!(
            UnityVersion::parse_dll_name("_2019_4_3f1.dll").unwrap(),
            UnityVersion::new(2019, 4, 3, Final, 1)
        );
        assert_eq!(
            UnityVersion::parse_dll_name("5_6_2p3.dll").unwrap(),
            UnityVersion::new(5, 6, 2, Patch, 3)
        );
        assert_eq!(UnityVersion::parse_dll_name(""), Err(VersionError::Empty));
        assert_eq!(UnityVersion::parse_dll_name("_"), Err(VersionError::Empty));
    }

    #[test]
    fn test_from_str() {
        let v: UnityVersion = "2020.3.48f1".parse().unwrap();
        assert_eq!(v.version_type(), Some(UnityVersionType::Final));
        assert_eq!(UnityVersion::try_from("2020.3.48f1"), Ok(v));
    }
}
