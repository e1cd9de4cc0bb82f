use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// How far into the document to look for a `<meta>` charset declaration.
const META_PRESCAN_BYTES: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    pub html: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown character encoding label {0:?}")]
    UnknownLabel(String),
}

/// Decode raw document bytes into UTF-8 using:
/// BOM -> explicit label -> `<meta>` prescan -> chardetng fallback.
pub fn decode_document(
    bytes: &[u8],
    charset_hint: Option<&str>,
) -> Result<DecodedDocument, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return Ok(decode_with(bytes, encoding));
    }

    if let Some(label) = charset_hint {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| DecodeError::UnknownLabel(label.to_string()))?;
        return Ok(decode_with(bytes, encoding));
    }

    if let Some(encoding) = prescan_meta_charset(bytes) {
        return Ok(decode_with(bytes, encoding));
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    Ok(decode_with(bytes, encoding))
}

/// Finds `charset=` inside the first `<meta ...>` tags of the document head.
///
/// Covers both `<meta charset="x">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=x">`.
fn prescan_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_PRESCAN_BYTES)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    let mut rest = head.as_str();
    while let Some(start) = rest.find("<meta") {
        let tag = &rest[start..];
        let end = tag.find('>').unwrap_or(tag.len());
        let tag = &tag[..end];
        if let Some(label) = charset_in_tag(tag) {
            if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
                // A UTF-16 declaration in ASCII-compatible bytes cannot be true.
                if encoding == UTF_16LE || encoding == UTF_16BE {
                    return Some(UTF_8);
                }
                return Some(encoding);
            }
        }
        rest = &rest[start + end..];
    }
    None
}

fn charset_in_tag(tag: &str) -> Option<&str> {
    let (_, value) = tag.split_once("charset=")?;
    let value = value.trim_start_matches(['"', '\'', ' '].as_ref());
    let end = value
        .find(|c: char| matches!(c, '"' | '\'' | ';' | '/') || c.is_ascii_whitespace())
        .unwrap_or(value.len());
    let label = &value[..end];
    (!label.is_empty()).then_some(label)
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedDocument {
    let (text, actual, had_errors) = encoding.decode(bytes);
    DecodedDocument {
        html: text.into_owned(),
        encoding_label: actual.name().to_string(),
        had_errors,
    }
}
