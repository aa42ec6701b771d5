use crate::metadata::{DocumentMetadata, MetadataEntry, XmpInfo};
use crate::pdf_utils;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, warn};

/// Reads the document information dictionary and the XMP stream summary.
///
/// A missing or unusable `/Info` is not an error: the caller simply gets an
/// empty [`DocumentMetadata`].
pub struct InfoReader<'a> {
    document: &'a Document,
}

impl<'a> InfoReader<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Object id of the `/Info` dictionary, when the trailer stores it as an
    /// indirect reference.
    pub fn info_id(&self) -> Option<ObjectId> {
        self.document.trailer.get(b"Info").ok()?.as_reference().ok()
    }

    /// Resolve trailer `/Info`, either an indirect reference or an inline
    /// dictionary.
    pub fn info_dict(&self) -> Option<&'a Dictionary> {
        let value = self.document.trailer.get(b"Info").ok()?;
        let dict = pdf_utils::resolve_dict(self.document, value);
        if dict.is_none() {
            warn!("trailer /Info does not resolve to a dictionary; treating as empty");
        }
        dict
    }

    /// Collect every `/Info` entry as display text, in dictionary order.
    pub fn read(&self) -> DocumentMetadata {
        let Some(info) = self.info_dict() else {
            debug!("document has no /Info dictionary");
            return DocumentMetadata::default();
        };

        let entries = info
            .iter()
            .map(|(key, value)| {
                let key = String::from_utf8_lossy(key).into_owned();
                let value = self.render(value, true);
                debug!(%key, %value, "metadata entry");
                MetadataEntry { key, value }
            })
            .collect();

        DocumentMetadata::new(entries)
    }

    /// Summarise the catalog's `/Metadata` stream, if it has one.
    pub fn xmp(&self) -> Option<XmpInfo> {
        let catalog = self.document.catalog().ok()?;
        let id = catalog.get(b"Metadata").ok()?.as_reference().ok()?;
        let stream = self.document.get_object(id).ok()?.as_stream().ok()?;

        let length = stream
            .decompressed_content()
            .map(|bytes| bytes.len())
            .unwrap_or_else(|_| stream.content.len());

        Some(XmpInfo { length })
    }

    /// Render one `/Info` value as text.
    ///
    /// Only a reference stored directly as the entry value is followed, and
    /// only one hop; any reference reached after that renders as `<ref N G>`,
    /// which keeps the output linear in the size of the file.
    fn render(&self, value: &Object, follow_reference: bool) -> String {
        match value {
            Object::String(bytes, _) => pdf_utils::decode_text(bytes),
            Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
            Object::Integer(n) => n.to_string(),
            Object::Real(r) => r.to_string(),
            Object::Boolean(b) => b.to_string(),
            Object::Null => String::new(),
            // Array-valued entries are flattened into one run of text.
            Object::Array(items) => items.iter().map(|item| self.render(item, false)).collect(),
            Object::Reference(id) if follow_reference => match self.document.get_object(*id) {
                Ok(target) => self.render(target, false),
                Err(_) => reference_marker(*id),
            },
            Object::Reference(id) => reference_marker(*id),
            Object::Dictionary(_) => "<dictionary>".into(),
            Object::Stream(_) => "<stream>".into(),
        }
    }
}

fn reference_marker(id: ObjectId) -> String {
    format!("<ref {} {}>", id.0, id.1)
}
