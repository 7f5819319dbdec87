//! Post discovery.
//!
//! Turns the images root into an ordered sequence of posts. Each immediate
//! child directory of the root is one post folder — nothing below one level
//! is scanned:
//!
//! ```text
//! images/                          # Images root
//! ├── 2018-05-12-golden-gate/      # One post
//! │   ├── dsc0001.jpg              # First recognized image = the photo
//! │   └── meta.yml                 # Optional structured metadata
//! └── sunset/
//!     └── sunset.png               # No meta.yml — defaults apply
//! ```
//!
//! Within a folder, files are considered in name order. The first file with
//! a recognized image extension becomes the post's original; any further
//! recognized images in the same folder are ignored. A file named exactly
//! `meta.yml` is parsed into [`Meta`]; its absence is not an error. When the
//! metadata carries no `posted` timestamp, the image file's modification
//! time stands in.
//!
//! ## Ordering
//!
//! The returned sequence reflects folder-name order, not `posted` order.
//! Prev/next links follow this sequence; callers wanting chronological
//! reading order must sort before rendering.
//!
//! ## Failure
//!
//! Discovery is fail-fast: the first problem folder (empty, image-less,
//! malformed metadata, undecodable image) aborts the whole walk and no
//! partial sequence is returned.

use crate::imaging::{self, ImagingError};
use crate::post::{Meta, Post};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Exact filename recognized as a post's metadata file.
pub const META_FILENAME: &str = "meta.yml";

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("no files in post folder: {0}")]
    NoFiles(PathBuf),
    #[error("no recognized image in post folder: {0}")]
    NoImageFound(PathBuf),
    #[error("invalid metadata file {path}: {source}")]
    Meta {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Image(#[from] ImagingError),
}

/// Discover every post under `root`.
///
/// Stray files sitting next to the post folders are skipped — only
/// directories become posts. Returns posts in folder-name order.
pub fn discover_posts(
    root: &Path,
    image_extensions: &[String],
) -> Result<Vec<Post>, DiscoverError> {
    let mut folders: Vec<PathBuf> = fs::read_dir(root)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    folders.sort();

    let mut posts = Vec::new();
    for folder in folders {
        if !folder.is_dir() {
            continue;
        }
        posts.push(read_post(&folder, image_extensions)?);
    }
    Ok(posts)
}

/// Read a single post folder into a [`Post`].
///
/// Callable on its own for spot-checking one folder; `dir` must be a
/// directory.
pub fn read_post(dir: &Path, image_extensions: &[String]) -> Result<Post, DiscoverError> {
    if !fs::metadata(dir)?.is_dir() {
        return Err(DiscoverError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    if entries.is_empty() {
        return Err(DiscoverError::NoFiles(dir.to_path_buf()));
    }

    let mut meta: Option<Meta> = None;
    let mut found: Option<(PathBuf, String, SystemTime)> = None;
    for entry in &entries {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name == META_FILENAME {
            let contents = fs::read_to_string(&path)?;
            meta = Some(serde_yaml::from_str(&contents).map_err(|source| DiscoverError::Meta {
                path: path.clone(),
                source,
            })?);
        } else if found.is_none() && has_recognized_extension(&name, image_extensions) {
            // first recognized image wins; later ones in the folder are ignored
            let modified = entry.metadata()?.modified()?;
            found = Some((path, name, modified));
        }
    }

    let Some((original, file, modified)) = found else {
        return Err(DiscoverError::NoImageFound(dir.to_path_buf()));
    };
    let image = imaging::probe(&original)?;

    let mut meta = meta.unwrap_or_default();
    if meta.posted.is_none() {
        meta.posted = Some(DateTime::<Utc>::from(modified));
    }

    let dir_name = dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Post {
        original,
        file,
        dir_name,
        image,
        meta,
    })
}

fn has_recognized_extension(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext)))
        .unwrap_or(false)
}
