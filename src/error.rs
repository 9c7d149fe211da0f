use std::{borrow::Cow, fmt::Display};

/// The error type of the crate.
#[derive(Debug)]
pub enum Error {
    /// A fixed-size field ran past the end of the input.
    ShortRead {
        /// Byte offset where the read was attempted.
        offset: u64,
        /// Number of bytes requested.
        expected: usize,
        /// Number of bytes actually available.
        actual: usize,
    },
    /// A section envelope was self-inconsistent, or its LZSS output length
    /// did not match the declared `original_length`.
    CorruptSection {
        /// Byte offset of the section header.
        offset: u64,
        /// Declared length.
        expected: u32,
        /// Length actually produced.
        actual: u32,
    },
    /// `agf_type` was not `1` or `2`.
    UnsupportedAgfType(u32),
    /// `biHeight < 0`, `biBitCount % 8 != 0`, or `biCompression != 0`.
    UnsupportedBitmap(Cow<'static, str>),
    /// Palette byte length was not a multiple of 4.
    PaletteMisaligned(usize),
    /// A BIN opcode was not present in the opcode table.
    UnknownOpcode {
        /// Byte offset of the instruction.
        offset: u64,
        /// The offending opcode.
        opcode: u32,
    },
    /// A BIN argument type lay outside the allowed ranges.
    BadArgType {
        /// Byte offset of the argument.
        offset: u64,
        /// The offending type value.
        arg_type: u32,
    },
    /// A string or array reference resolved outside the file.
    BadRefOffset {
        /// Byte offset of the reference itself.
        offset: u64,
        /// The resolved target offset.
        target: u64,
    },
    /// An entry's `archive_index` exceeded the archive list.
    ArchiveOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of archives actually listed.
        archive_count: u32,
    },
    /// The underlying byte source failed.
    Io(std::io::Error, Cow<'static, str>),
    /// Opening a file on disk failed.
    FileOpen(std::io::Error, String),
    /// Serializing a structured record to JSON failed.
    Json(serde_json::Error),
    /// Catch-all for conditions not covered by a dedicated variant.
    Other(Cow<'static, str>),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl Error {
    #[inline]
    pub(crate) fn other<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Self::Other(s.into())
    }

    #[inline]
    pub(crate) fn io(e: std::io::Error) -> Self {
        Self::Io(e, Cow::Borrowed(""))
    }

    #[inline]
    pub(crate) fn file_open(e: std::io::Error, filename: impl Into<Cow<'static, str>>) -> Self {
        Self::FileOpen(e, filename.into().into_owned())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

impl std::error::Error for Error {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
