//! Error types for configuration validation and transport decoding.

use thiserror::Error;

/// Stable codes for configuration errors.
///
/// Every code is fatal: a renderer is never constructed from a
/// configuration that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorCode {
    /// C001: Palette has no colors
    EmptyPalette,
    /// C002: Grid width or height is zero
    ZeroDimension,
    /// C003: Cell size is zero
    ZeroCellSize,
    /// C004: Palette has more colors than a grid cell can index
    PaletteTooLarge,
    /// C005: Grid or canvas dimensions are too large
    DimensionTooLarge,
    /// C006: Name prefix or description is empty
    EmptyText,
}

impl ConfigErrorCode {
    /// Returns the error code string (e.g., "C001").
    pub fn code(&self) -> &'static str {
        match self {
            ConfigErrorCode::EmptyPalette => "C001",
            ConfigErrorCode::ZeroDimension => "C002",
            ConfigErrorCode::ZeroCellSize => "C003",
            ConfigErrorCode::PaletteTooLarge => "C004",
            ConfigErrorCode::DimensionTooLarge => "C005",
            ConfigErrorCode::EmptyText => "C006",
        }
    }
}

impl std::fmt::Display for ConfigErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A configuration error with code, message, and the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message} (field: {field})")]
pub struct ConfigError {
    /// The error code.
    pub code: ConfigErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Name of the configuration field that failed.
    pub field: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(code: ConfigErrorCode, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field,
        }
    }
}

/// Errors from parsing a color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("color must have 3 or 6 hex digits: {0:?}")]
    InvalidLength(String),

    #[error("color contains a non-hex digit: {0:?}")]
    InvalidDigit(String),
}

/// Errors from decoding a `data:` URI or the document it carries.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("not a data URI: missing 'data:' prefix")]
    NotDataUri,

    #[error("data URI is not base64 encoded")]
    NotBase64,

    #[error("unexpected media type: expected {expected}, got {actual}")]
    MediaType { expected: String, actual: String },

    #[error("base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
