//! Source reading and two-tier text decoding.

use std::path::Path;

use encoding_rs::{UTF_8, mem::decode_latin1};

use crate::error::{IngestError, Result};

/// Character encoding a source was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

impl SourceEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
        }
    }
}

/// Decoded source text and the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSource {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Reads the whole source file.
///
/// The file handle is opened and released inside this call.
pub fn read_source_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| IngestError::unavailable(path, e))
}

/// Decodes source bytes as UTF-8, falling back to ISO-8859-1.
///
/// The fallback cannot fail, so decoding always produces text. A leading
/// UTF-8 byte order mark is removed.
pub fn decode_source(bytes: &[u8]) -> DecodedSource {
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        let text = text
            .strip_prefix('\u{feff}')
            .unwrap_or(&*text)
            .to_string();
        return DecodedSource {
            text,
            encoding: SourceEncoding::Utf8,
        };
    }

    tracing::debug!(bytes = bytes.len(), "source is not valid UTF-8");
    DecodedSource {
        text: decode_latin1(bytes).into_owned(),
        encoding: SourceEncoding::Latin1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let decoded = decode_source("Café,ORAL".as_bytes());
        assert_eq!(decoded.text, "Café,ORAL");
        assert_eq!(decoded.encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_decode_strips_bom() {
        let decoded = decode_source(b"\xEF\xBB\xBFbrand_name\n");
        assert_eq!(decoded.text, "brand_name\n");
        assert_eq!(decoded.encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // 0xE9 is 'é' in ISO-8859-1 and an invalid lone byte in UTF-8.
        let decoded = decode_source(b"Caf\xE9");
        assert_eq!(decoded.text, "Café");
        assert_eq!(decoded.encoding, SourceEncoding::Latin1);
    }

    #[test]
    fn test_decode_latin1_maps_c1_range_verbatim() {
        // 0x96 stays U+0096; this is not windows-1252.
        let decoded = decode_source(b"a\x96b");
        assert_eq!(decoded.text, "a\u{96}b");
        assert_eq!(decoded.encoding, SourceEncoding::Latin1);
    }

    #[test]
    fn test_read_missing_source() {
        let result = read_source_bytes(Path::new("/nonexistent/drugs.csv"));
        assert!(matches!(
            result,
            Err(IngestError::SourceUnavailable { .. })
        ));
    }
}
