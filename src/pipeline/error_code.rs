//! Stable machine-readable codes for spec diagnostics.

use serde::Serialize;

/// Category of a [`super::errors::SpecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The spec version is not understood.
    UnsupportedVersion,
    /// A numeric value is outside its valid range.
    OutOfRange,
    /// The requested language has no stopword list.
    UnsupportedLanguage,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::OutOfRange => "out_of_range",
            Self::UnsupportedLanguage => "unsupported_language",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
