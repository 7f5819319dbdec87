//! The post model — one photo folder merged into a single record.
//!
//! A [`Post`] pairs a source image with its optional metadata and carries
//! enough derived identity (title, slug) for the renderer to place it in the
//! output tree. Posts are constructed once during discovery and never
//! mutated afterwards; neighbor links are computed in the renderer's
//! sequencing pass rather than stored here.
//!
//! Everything in this module is pure data plus derived-value accessors — no
//! I/O, no side effects.

use crate::naming;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Structured metadata for a post, read from its `meta.yml`.
///
/// Every field is optional in the file; a missing file leaves the whole
/// struct at its defaults. `posted` is filled from the image file's
/// modification time during discovery when the file doesn't set it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// When the photo was posted. Explicit value wins over file mtime.
    pub posted: Option<DateTime<Utc>>,
    pub title: String,
    pub location: String,
    /// Free-text body; templates may run it through the `markdown` filter.
    pub comments: String,
    pub tags: Vec<String>,
    /// Open mapping for user-defined extension fields.
    pub extra: BTreeMap<String, String>,
}

/// Decoded image facts used for templating decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Lowercase short format name, e.g. `jpeg` or `png`.
    pub format: String,
}

/// One discovered photo post.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Path to the source image file on disk.
    pub original: PathBuf,
    /// Base filename of the source image, preserved in the output.
    pub file: String,
    /// Name of the source folder; fallback source for titles and slugs.
    pub dir_name: String,
    pub image: ImageInfo,
    pub meta: Meta,
}

impl Post {
    /// The title to display: `meta.title` when set, otherwise a readable
    /// form of the folder name, otherwise the image file stem.
    pub fn title_or_default(&self) -> String {
        let title = self.meta.title.trim();
        if !title.is_empty() {
            return title.to_string();
        }
        let from_dir = naming::display_name(&self.dir_name);
        if !from_dir.is_empty() {
            return from_dir;
        }
        let stem = Path::new(&self.file)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file.clone());
        naming::display_name(&stem)
    }

    /// Deterministic output-directory name for this post.
    ///
    /// Derived from the display title; falls back to the folder name, then
    /// the file name, when earlier candidates reduce to nothing slug-safe.
    pub fn slug(&self) -> String {
        let from_title = naming::slugify(&self.title_or_default());
        if !from_title.is_empty() {
            return from_title;
        }
        let from_dir = self.dir_slug();
        if !from_dir.is_empty() {
            return from_dir;
        }
        naming::slugify(&self.file)
    }

    /// Slug derived from the folder name alone — the fallback the renderer
    /// reaches for when the title slug is taken or reserved.
    pub fn dir_slug(&self) -> String {
        naming::slugify(&self.dir_name)
    }
}
