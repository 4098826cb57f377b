//! Packed, totally ordered Unity engine versions.
//!
//! A [`UnityVersion`] such as `2019.4.3f1` is stored in a single `u64`, so it is
//! `Copy`, hashes cheaply and compares without allocation.
//!
//! # Features
//!
//! - **Parsing**: normal versions, both China formats, `major.minor[.build]`
//!   shorthands and custom engine suffixes ([`UnityVersion::parse_with_custom_engine`])
//! - **Formatting**: round-trips the parser, configurable through [`FormatFlags`]
//! - **Ordering**: follows the release sequence across the 2017-2023 calendar era
//!   ([`ordering`])
//! - **Compact forms**: [`CompactUnityVersion32`] and [`CompactUnityVersion24`]
//!   for storage-constrained records
//! - **Ranges and partial versions**: [`UnityVersionRange`], [`PartialVersion`]
//!
//! # Example
//!
//! ```
//! use unity_version::{FormatFlags, UnityVersion, UnityVersionType};
//!
//! let v: UnityVersion = "2021.3.11f1c2".parse().unwrap();
//! assert_eq!(v.version_type(), Some(UnityVersionType::China));
//! assert_eq!(v.format(FormatFlags::SHORT_CHINESE_FORMAT).unwrap(), "2021.3.11c2");
//!
//! // Unity 6 came after the calendar-year releases.
//! assert!(v < "6000.0.23f1".parse::<UnityVersion>().unwrap());
//! ```

pub use self::compact::{CompactUnityVersion24, CompactUnityVersion32};
pub use self::error::{Result, VersionError};
pub use self::format::FormatFlags;
pub use self::partial::PartialVersion;
pub use self::range::UnityVersionRange;
pub use self::version::UnityVersion;
pub use self::version_type::UnityVersionType;

pub mod ordering;

mod compact;
mod error;
mod format;
mod parse;
mod partial;
mod range;
mod version;
mod version_type;
