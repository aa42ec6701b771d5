use crate::info_reader::InfoReader;
use crate::{pdf_utils, CleanerConfig, Result, WipeMode};
use lopdf::{Dictionary, Document, Object};
use serde::Serialize;
use tracing::{debug, info};

/// Keys written, all empty, when [`WipeMode::Blank`] meets a document that
/// has no metadata entries at all.
pub const DEFAULT_BLANK_KEYS: [&str; 8] = [
    "Trapped",
    "Title",
    "Author",
    "Subject",
    "Producer",
    "Content creator",
    "CreationDate",
    "ModDate",
];

/// What a wipe changed in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WipeSummary {
    /// The strategy that was applied.
    pub mode: WipeMode,

    /// Keys that were blanked or removed, in document order.
    pub cleared_keys: Vec<String>,

    /// `true` when an XMP `/Metadata` stream was detached from the catalog.
    pub xmp_removed: bool,
}

/// Rewrites the metadata of a loaded document in place.
pub struct MetadataWiper<'a> {
    config: &'a CleanerConfig,
}

impl<'a> MetadataWiper<'a> {
    pub fn new(config: &'a CleanerConfig) -> Self {
        Self { config }
    }

    /// Apply the configured [`WipeMode`] and XMP policy to `document`.
    pub fn wipe(&self, document: &mut Document) -> Result<WipeSummary> {
        let existing: Vec<String> = InfoReader::new(document)
            .read()
            .keys()
            .map(str::to_owned)
            .collect();

        let cleared_keys = match self.config.wipe_mode {
            WipeMode::Blank => Self::blank_info(document, existing)?,
            WipeMode::Remove => Self::remove_info(document, existing),
        };

        let xmp_removed = self.config.strip_xmp && Self::strip_xmp(document)?;

        info!(
            mode = ?self.config.wipe_mode,
            cleared = cleared_keys.len(),
            xmp_removed,
            "metadata wiped"
        );

        Ok(WipeSummary {
            mode: self.config.wipe_mode,
            cleared_keys,
            xmp_removed,
        })
    }

    /// Replace `/Info` with a dictionary holding the same keys, each set to
    /// an empty string.
    fn blank_info(document: &mut Document, existing: Vec<String>) -> Result<Vec<String>> {
        let keys = if existing.is_empty() {
            debug!("no metadata entries, writing the default blank key set");
            DEFAULT_BLANK_KEYS.iter().map(|k| k.to_string()).collect()
        } else {
            existing
        };

        let mut blank = Dictionary::new();
        for key in &keys {
            blank.set(key.as_bytes().to_vec(), Object::string_literal(""));
        }

        // Reuse the existing object so other references to it stay valid.
        let reader = InfoReader::new(document);
        match reader.info_id() {
            Some(id) if document.get_object(id).and_then(Object::as_dict).is_ok() => {
                *document.get_object_mut(id)?.as_dict_mut()? = blank;
            }
            _ => {
                let id = document.add_object(blank);
                document.trailer.set("Info", id);
            }
        }

        Ok(keys)
    }

    /// Drop trailer `/Info` and delete the object it pointed at.
    fn remove_info(document: &mut Document, existing: Vec<String>) -> Vec<String> {
        if let Some(id) = InfoReader::new(document).info_id() {
            document.objects.remove(&id);
        }
        document.trailer.remove(b"Info");
        existing
    }

    /// Detach the catalog's `/Metadata` stream. Returns `true` if one was
    /// present.
    fn strip_xmp(document: &mut Document) -> Result<bool> {
        let Some(root_id) = pdf_utils::catalog_id(document) else {
            return Ok(false);
        };

        let removed = document
            .get_object_mut(root_id)?
            .as_dict_mut()?
            .remove(b"Metadata");

        match removed {
            Some(Object::Reference(id)) => {
                document.objects.remove(&id);
                Ok(true)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }
}
