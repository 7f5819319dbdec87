//! Image probing — pure Rust, no external tools.
//!
//! Decodes just enough of an image file to answer the questions templates
//! ask: pixel dimensions and container format. The `image` crate's reader
//! sniffs the format from file content (falling back to the extension), and
//! dimensions come from the header alone — no full decode, no pixel data in
//! memory.

use crate::post::ImageInfo;
use image::{ImageFormat, ImageReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported image format: {0}")]
    Unsupported(PathBuf),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Read dimensions and format from an image file's header.
pub fn probe(path: &Path) -> Result<ImageInfo, ImagingError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| ImagingError::Unsupported(path.to_path_buf()))?;
    let (width, height) = reader.into_dimensions().map_err(|source| ImagingError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ImageInfo {
        width,
        height,
        format: short_name(format),
    })
}

/// Lowercase short name for a format: `Jpeg` → "jpeg", `WebP` → "webp".
fn short_name(format: ImageFormat) -> String {
    format!("{format:?}").to_ascii_lowercase()
}
