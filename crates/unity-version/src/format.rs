//! Rendering versions back to strings.

use std::fmt;

use crate::{Result, UnityVersion, UnityVersionType, VersionError};

bitflags::bitflags! {
    /// Options for [`UnityVersion::format`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatFlags: u8 {
        /// Render only `major.minor.build`, dropping the type, type number and
        /// any custom engine suffix.
        const EXCLUDE_TYPE = 1 << 0;
        /// Render China builds as `2017.4.40c1` instead of `2017.4.40f1c1`.
        const SHORT_CHINESE_FORMAT = 1 << 1;
    }
}

impl UnityVersion {
    /// Render with the given flags.
    ///
    /// Fails with [`VersionError::UnknownType`] when the type byte names no
    /// [`UnityVersionType`] and the type is not excluded.
    pub fn format(&self, flags: FormatFlags) -> Result<String> { self.format_with_custom_engine(flags, "") }

    /// Render with the given flags, appending a custom engine suffix verbatim.
    pub fn format_with_custom_engine(&self, flags: FormatFlags, custom_engine: &str) -> Result<String> {
        if flags.contains(FormatFlags::EXCLUDE_TYPE) {
            return Ok(self.to_string_without_type());
        }
        let version_type = self.version_type().ok_or(VersionError::UnknownType(self.type_byte()))?;
        Ok(self.render(Some(version_type), flags, custom_engine))
    }

    /// `major.minor.build`
    pub fn to_string_without_type(&self) -> String {
        format!("{}.{}.{}", self.major(), self.minor(), self.build())
    }

    /// Render as an assembly name such as `_2019_4_3f1.dll`.
    pub fn to_dll_name(&self) -> Result<String> {
        let version = self.format(FormatFlags::empty())?;
        Ok(format!("_{}.dll", version.replace('.', "_")))
    }

    /// `None` renders the undefined type byte as `?byte:number`.
    fn render(&self, version_type: Option<UnityVersionType>, flags: FormatFlags, custom_engine: &str) -> String {
        let mut out = self.to_string_without_type();
        match version_type {
            Some(UnityVersionType::China) if !flags.contains(FormatFlags::SHORT_CHINESE_FORMAT) => {
                out.push_str("f1c");
            }
            Some(t) => out.push(t.to_char()),
            None => {
                out.push('?');
                out.push_str(&self.type_byte().to_string());
                out.push(':');
            }
        }
        out.push_str(&self.type_number().to_string());
        out.push_str(custom_engine);
        out
    }
}

/// Renders with [`FormatFlags::empty`].
///
/// A type byte that names no [`UnityVersionType`] is shown as `?byte:number`,
/// so `UnityVersion::MAX` displays as `65535.255.255?255:255`. Use
/// [`UnityVersion::format`] to get a typed error instead.
impl fmt::Display for UnityVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.render(self.version_type(), FormatFlags::empty(), ""))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UnityVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let rendered = self.format(FormatFlags::empty()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&rendered)
    }
}
