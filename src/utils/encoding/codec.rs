use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use thiserror::Error;

use crate::models::write_request::Encoding;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Converts a textual write operand into the byte sequence written to disk.
///
/// Base64 and hex treat the text as already-encoded data and decode it;
/// latin1 and ascii keep the low 8/7 bits of each character, matching the
/// platform write primitive.
pub fn encode_text(text: &str, encoding: Encoding) -> Result<Vec<u8>, EncodeError> {
    match encoding {
        Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
        Encoding::Utf16Le => {
            let mut buf = Vec::with_capacity(text.len() * 2);
            for unit in text.encode_utf16() {
                buf.extend_from_slice(&unit.to_le_bytes());
            }
            Ok(buf)
        }
        Encoding::Latin1 => Ok(text.chars().map(|c| (c as u32 & 0xFF) as u8).collect()),
        Encoding::Ascii => Ok(text.chars().map(|c| (c as u32 & 0x7F) as u8).collect()),
        Encoding::Base64 => Ok(BASE64.decode(text.as_bytes())?),
        Encoding::Hex => Ok(hex::decode(text)?),
    }
}
