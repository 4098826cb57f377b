/// Version parsing, formatting and encoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("version string is empty")]
    Empty,

    #[error("invalid version format: {0:?}")]
    InvalidFormat(String),

    #[error("unsupported version type {0}")]
    UnknownType(u8),

    #[error("there is no version type '{0}'")]
    UnknownTypeChar(char),

    #[error("major version {major} is not representable (valid: 0-5, 2017-{max})")]
    MajorOutOfRange { major: u16, max: u16 },

    #[error("{field} value {value} does not fit in {bits} bits")]
    FieldOutOfRange {
        field: &'static str,
        value: u8,
        bits:  u32,
    },

    #[error("no candidate versions to choose from")]
    NoCandidates,
}

/// Result alias for version operations.
pub type Result<T> = std::result::Result<T, VersionError>;
