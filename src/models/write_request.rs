use std::str::FromStr;

use thiserror::Error;

use crate::utils::encoding::codec::{EncodeError, encode_text};

/// -------------------- Contents --------------------
/// The data operand of a write request: either text, which is run through
/// the effective encoding, or raw bytes, which are written as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    Text(String),
    Bytes(Vec<u8>),
}

impl Contents {
    /// Resolves the operand to the byte sequence actually written to disk.
    pub fn into_bytes(self, encoding: Encoding) -> Result<Vec<u8>, EncodeError> {
        match self {
            Contents::Text(text) => encode_text(&text, encoding),
            Contents::Bytes(bytes) => Ok(bytes),
        }
    }
}

impl From<&str> for Contents {
    fn from(text: &str) -> Self {
        Contents::Text(text.to_string())
    }
}

impl From<String> for Contents {
    fn from(text: String) -> Self {
        Contents::Text(text)
    }
}

impl From<&[u8]> for Contents {
    fn from(bytes: &[u8]) -> Self {
        Contents::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Contents {
    fn from(bytes: Vec<u8>) -> Self {
        Contents::Bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for Contents {
    fn from(bytes: &[u8; N]) -> Self {
        Contents::Bytes(bytes.to_vec())
    }
}

/// -------------------- Encoding --------------------
#[derive(Debug, Error)]
#[error("Unknown encoding: {0}")]
pub struct UnknownEncodingError(String);

/// Text-to-byte mapping applied when the write operand is textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Latin1,
    Ascii,
    Base64,
    Hex,
}

impl FromStr for Encoding {
    type Err = UnknownEncodingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "ascii" => Ok(Encoding::Ascii),
            "base64" => Ok(Encoding::Base64),
            "hex" => Ok(Encoding::Hex),
            _ => Err(UnknownEncodingError(name.to_string())),
        }
    }
}

/// -------------------- WriteMode --------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Create the file, or truncate it if it exists.
    #[default]
    Truncate,
    /// Create the file, or append to it if it exists.
    Append,
    /// Create the file, failing if it already exists.
    CreateNew,
}

/// -------------------- WriteOptions --------------------
/// Named overrides for a write request. Encoding falls back to utf8 when
/// omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    pub encoding: Option<Encoding>,
    pub mode: WriteMode,
    pub permissions: Option<u32>,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Unix permission bits applied to the file after a successful write.
    pub fn permissions(mut self, permissions: u32) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn resolved_encoding(&self) -> Encoding {
        self.encoding.unwrap_or_default()
    }
}

impl From<Encoding> for WriteOptions {
    fn from(encoding: Encoding) -> Self {
        Self {
            encoding: Some(encoding),
            ..Self::default()
        }
    }
}

impl FromStr for WriteOptions {
    type Err = UnknownEncodingError;

    /// A bare encoding name is shorthand for options carrying only that
    /// encoding.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(name.parse::<Encoding>()?))
    }
}
