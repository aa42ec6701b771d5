//! Shared PDF object helpers used across multiple modules.

use lopdf::{Dictionary, Document, Object, ObjectId};

/// Decode a PDF text string.
///
/// Strings starting with the UTF-16BE byte order mark (`FE FF`) are decoded
/// as UTF-16; anything else is tried as UTF-8 and falls back to Latin-1.
/// Undecodable sequences never fail the call.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Resolve a value that might be an inline dictionary or a reference to one.
pub fn resolve_dict<'a>(document: &'a Document, value: &'a Object) -> Option<&'a Dictionary> {
    match value {
        Object::Reference(id) => document.get_object(*id).ok()?.as_dict().ok(),
        other => other.as_dict().ok(),
    }
}

/// Object id of the document catalog, taken from trailer `/Root`.
pub fn catalog_id(document: &Document) -> Option<ObjectId> {
    document.trailer.get(b"Root").ok()?.as_reference().ok()
}
