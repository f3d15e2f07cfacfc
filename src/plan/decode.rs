// src/plan/decode.rs
use encoding_rs::Encoding;

use crate::utils::error::ParseError;

/// Decodes the raw plan payload using its declared encoding label.
///
/// The timetable exports are usually ISO-8859-1 on disk. Labels are resolved
/// per the WHATWG registry, so "latin1", "ISO-8859-1" and "windows-1252" all
/// name the same decoder. Undecodable byte sequences decode to U+FFFD rather
/// than failing.
pub fn decode(raw: &[u8], label: &str) -> Result<String, ParseError> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ParseError::UnknownEncoding(label.to_string()))?;

    let (text, actual, _had_errors) = encoding.decode(raw);
    tracing::debug!("Decoded {} bytes as {}", raw.len(), actual.name());

    Ok(text.into_owned())
}
