//! Error types for bit extraction, field formatting and schema checks.

use thiserror::Error;

/// Errors produced when reading a bit window out of a byte slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A field must be at least one bit wide.
    #[error("bit length must be at least 1")]
    ZeroWidth,
    /// The bits touched (`bit_offset % 8 + bit_length`) do not fit a 64-bit container.
    #[error("bit window spans {span} bits, more than a 64-bit container holds")]
    UnsupportedWidth { span: usize },
    /// The window reaches past the end of the available data.
    #[error("bit window needs {needed} bytes but only {available} are available")]
    OutOfBounds { needed: usize, available: usize },
}

/// Errors produced when a field cannot be shown with its display type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Dotted-quad display only applies to 32-bit fields.
    #[error("IPv4 display needs a 32-bit field, got {0} bits")]
    NotIpv4Width(usize),
    /// ASCII display only applies to byte-aligned, whole-byte fields.
    #[error("ASCII display needs byte alignment (offset {bit_offset}, length {bit_length})")]
    NotByteAligned { bit_offset: usize, bit_length: usize },
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Errors produced by [`crate::schema::Schema::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Field width is 0 or greater than 64 bits.
    #[error("field `{field}` has invalid size of {bit_length} bits")]
    InvalidFieldSize { field: String, bit_length: usize },
    /// Row-group at this index has no fields.
    #[error("row-group {0} has no fields")]
    EmptyGroup(usize),
}
