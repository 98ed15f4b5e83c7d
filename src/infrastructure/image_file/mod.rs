// SPDX-License-Identifier: MPL-2.0
//! Turns a path picked in the file dialog (or dropped on the window) into a
//! [`SelectedImage`].
//!
//! The declared media type is derived from the file extension, the way a
//! browser fills in `File.type`. The content itself is not decoded; an
//! unknown extension is declared as `application/octet-stream` and rejected
//! by the domain.

use crate::domain::scan::{SelectedImage, SelectionError, IMAGE_MEDIA_TYPE_PREFIX};
use image_rs::ImageFormat;
use std::path::{Path, PathBuf};

/// Media type declared for files whose extension is not a known image format.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Returns the media type implied by the extension of `path`.
#[must_use]
pub fn media_type_for(path: &Path) -> &'static str {
    ImageFormat::from_path(path).map_or(FALLBACK_MEDIA_TYPE, |format| format.to_mime_type())
}

/// Extensions offered by the file dialog filter.
#[must_use]
pub fn supported_extensions() -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| format.reading_enabled())
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

/// Reads `path` and validates it as a selection.
///
/// # Errors
///
/// [`SelectionError::UnsupportedMediaType`] for non-image extensions (the
/// file is not read), [`SelectionError::Unreadable`] if reading fails.
pub async fn load_selected_image(path: PathBuf) -> Result<SelectedImage, SelectionError> {
    let media_type = media_type_for(&path);
    if !media_type.starts_with(IMAGE_MEDIA_TYPE_PREFIX) {
        return Err(SelectionError::UnsupportedMediaType(media_type.to_string()));
    }

    let bytes = tokio::fs::read(&path).await.map_err(|err| {
        log::warn!("Failed to read {}: {err}", path.display());
        SelectionError::Unreadable(err.to_string())
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    log::debug!("Selected {file_name} ({media_type}, {} bytes)", bytes.len());
    SelectedImage::new(file_name, media_type, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn media_type_follows_extension() {
        assert_eq!(media_type_for(Path::new("dog.jpg")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("dog.PNG")), "image/png");
        assert_eq!(media_type_for(Path::new("dog.webp")), "image/webp");
        assert_eq!(media_type_for(Path::new("notes.txt")), FALLBACK_MEDIA_TYPE);
        assert_eq!(media_type_for(Path::new("no_extension")), FALLBACK_MEDIA_TYPE);
    }

    #[test]
    fn dialog_filter_lists_common_formats() {
        let extensions = supported_extensions();
        assert!(extensions.contains(&"jpg"));
        assert!(extensions.contains(&"png"));
    }

    #[tokio::test]
    async fn loads_image_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rex.png");
        std::fs::write(&path, b"\x89PNG payload").unwrap();

        let image = load_selected_image(path).await.unwrap();
        assert_eq!(image.file_name(), "rex.png");
        assert_eq!(image.media_type(), "image/png");
        assert_eq!(image.bytes(), b"\x89PNG payload");
    }

    #[tokio::test]
    async fn rejects_non_image_without_reading() {
        let dir = tempdir().unwrap();
        // Never created: a read attempt would report Unreadable instead.
        let path = dir.path().join("notes.txt");

        let err = load_selected_image(path).await.unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnsupportedMediaType(FALLBACK_MEDIA_TYPE.into())
        );
    }

    #[tokio::test]
    async fn missing_image_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = load_selected_image(dir.path().join("gone.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, SelectionError::Unreadable(_)));
    }
}
