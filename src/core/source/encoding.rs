//! Text encoding detection and round-tripping
//!
//! Staged files arrive from systems that export in UTF-8, UTF-16, or
//! legacy Windows code pages. The encoding is detected from the raw bytes
//! before any text interpretation and carried on the batch so every
//! derived artifact is written back the same way.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Detect the text encoding of raw file content
///
/// Detection order: byte-order mark, strict UTF-8 validation,
/// windows-1252 fallback. The fallback decodes any byte sequence, so
/// detection never fails.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Decode raw file content, returning the text and the detected encoding
///
/// A leading BOM matching the detected encoding is stripped.
pub fn decode(bytes: &[u8]) -> (String, &'static Encoding) {
    let encoding = detect_encoding(bytes);
    let (text, _, _) = encoding.decode(bytes);
    (text.into_owned(), encoding)
}

/// Encode artifact text in the encoding detected for the source file
///
/// encoding_rs has no UTF-16 encoders; a UTF-16 source is written back as
/// UTF-8, which every consumer of the artifacts accepts.
pub fn encode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.output_encoding().encode(text);
    bytes.into_owned()
}
