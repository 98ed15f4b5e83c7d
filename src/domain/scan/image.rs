// SPDX-License-Identifier: MPL-2.0
//! Selected image value object.

use std::fmt;
use std::sync::Arc;

/// Declared media types accepted by the scanner start with this prefix.
pub const IMAGE_MEDIA_TYPE_PREFIX: &str = "image/";

/// Why a file could not become the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The declared media type is not an `image/*` type.
    UnsupportedMediaType(String),
    /// The file could not be read from disk.
    Unreadable(String),
}

impl SelectionError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SelectionError::UnsupportedMediaType(_) => "selection-error-not-image",
            SelectionError::Unreadable(_) => "selection-error-unreadable",
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnsupportedMediaType(media_type) => {
                write!(f, "Not an image file (declared type: {media_type})")
            }
            SelectionError::Unreadable(msg) => write!(f, "Could not read file: {msg}"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// An image picked by the user, ready to be previewed and submitted.
///
/// The payload is shared behind an [`Arc`] so a submission can carry the
/// image into a background task without copying the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    file_name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl SelectedImage {
    /// Validates the declared media type and builds the image.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnsupportedMediaType`] when `media_type`
    /// does not start with `image/`.
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self, SelectionError> {
        let media_type = media_type.into();
        if !media_type.starts_with(IMAGE_MEDIA_TYPE_PREFIX) {
            return Err(SelectionError::UnsupportedMediaType(media_type));
        }

        Ok(Self {
            file_name: file_name.into(),
            media_type,
            bytes: bytes.into(),
        })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a cheap clone of the shared payload.
    #[must_use]
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
