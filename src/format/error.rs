use crate::engine::codec::EncodeError;
use crate::engine::frequency::CountOverflow;
use std::fmt;

/// Malformed-container failures. These are always surfaced, never patched
/// over, and are kept distinct from I/O errors at the file boundary.
#[derive(Debug, PartialEq, Eq)]
pub enum FormatError {
    BadMagic,
    Truncated { section: &'static str },
    SymbolCountOverflow(u32),
    DuplicateSymbol(u8),
    ZeroFrequency(u8),
    /// Never produced by `from_bytes`, which enforces the exact payload
    /// size while parsing; this guards hand-built containers handed
    /// straight to `decompress`.
    PayloadSizeMismatch { expected: u64, actual: u64 },
    TrailingData(usize),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::BadMagic =>
                write!(f, "not a huffpack container (bad magic)"),
            FormatError::Truncated { section } =>
                write!(f, "truncated container: {} cut short", section),
            FormatError::SymbolCountOverflow(n) =>
                write!(f, "symbol count {} exceeds the 256 possible byte values", n),
            FormatError::DuplicateSymbol(byte) =>
                write!(f, "symbol table lists byte 0x{:02x} twice", byte),
            FormatError::ZeroFrequency(byte) =>
                write!(f, "symbol table lists byte 0x{:02x} with zero count", byte),
            FormatError::PayloadSizeMismatch { expected, actual } =>
                write!(f, "payload is {} bytes, bit count requires {}", actual, expected),
            FormatError::TrailingData(extra) =>
                write!(f, "{} unexpected bytes after payload", extra),
        }
    }
}

impl std::error::Error for FormatError {}

/// Compress-pipeline failure: the tally or the encode step refused the
/// input. Both indicate inputs the format cannot represent, not I/O trouble.
#[derive(Debug, PartialEq, Eq)]
pub enum CompressError {
    Count(CountOverflow),
    Encode(EncodeError),
}

impl From<CountOverflow> for CompressError {
    fn from(e: CountOverflow) -> Self {
        CompressError::Count(e)
    }
}

impl From<EncodeError> for CompressError {
    fn from(e: EncodeError) -> Self {
        CompressError::Encode(e)
    }
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressError::Count(e) => e.fmt(f),
            CompressError::Encode(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CompressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompressError::Count(e) => Some(e),
            CompressError::Encode(e) => Some(e),
        }
    }
}
