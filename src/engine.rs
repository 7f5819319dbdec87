//! The generation pipeline.
//!
//! [`generate`] is the one operation the host calls. It sequences four
//! steps, each failure aborting immediately:
//!
//! 1. Discover posts under the configured images root
//! 2. Ensure the output directory exists (create it if absent)
//! 3. Render every page and post
//! 4. Copy static assets into the output root
//!
//! The pipeline is strictly sequential and single-threaded; there is no
//! rollback, so a failure mid-render leaves earlier output on disk. Every
//! write is idempotent, and a rerun overwrites cleanly.
//!
//! Configuration and the event sink arrive as arguments — the pipeline
//! holds no global state. Events are a side channel for the host's progress
//! display; a dropped receiver never affects the build.

use crate::config::BlogConfig;
use crate::discover::{self, DiscoverError};
use crate::render::{self, RenderError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("output path exists and is not a directory: {0}")]
    OutputPath(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("asset walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Progress notifications emitted while generating.
#[derive(Debug, Clone)]
pub enum Event {
    PostDiscovered { title: String, source: PathBuf },
    PageRendered { output: PathBuf },
    PostRendered { title: String, output: PathBuf },
    AssetCopied { source: PathBuf, output: PathBuf },
}

/// Optional channel the pipeline reports progress through.
pub type EventSink = Option<Sender<Event>>;

pub(crate) fn emit(sink: &EventSink, event: Event) {
    // a closed receiver must never abort a build
    if let Some(tx) = sink {
        let _ = tx.send(event);
    }
}

/// Run the full pipeline: discover → prepare output → render → copy statics.
pub fn generate(config: &BlogConfig, events: &EventSink) -> Result<(), GenerateError> {
    let posts = discover::discover_posts(
        &config.images_or_default(),
        &config.extensions_or_default(),
    )?;
    for post in &posts {
        emit(events, Event::PostDiscovered {
            title: post.title_or_default(),
            source: post.original.clone(),
        });
    }

    ensure_output_dir(&config.output_or_default())?;
    render::render(config, &posts, events)?;
    copy_statics(config, events)?;
    Ok(())
}

fn ensure_output_dir(path: &Path) -> Result<(), GenerateError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(GenerateError::OutputPath(path.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(fs::create_dir_all(path)?),
        Err(err) => Err(err.into()),
    }
}

/// Copy each configured static asset into the output root, keeping its
/// relative structure under the asset's own base name.
fn copy_statics(config: &BlogConfig, events: &EventSink) -> Result<(), GenerateError> {
    let output = config.output_or_default();
    for asset in config.layout.statics_or_default() {
        // a bare `/` or `..` has no base name to land under
        let Some(base) = asset.file_name() else {
            continue;
        };
        let dest_root = output.join(base);

        if asset.is_dir() {
            for entry in WalkDir::new(&asset) {
                let entry = entry?;
                let rel = entry.path().strip_prefix(&asset).unwrap_or(entry.path());
                let dest = dest_root.join(rel);
                if entry.file_type().is_dir() {
                    fs::create_dir_all(&dest)?;
                } else {
                    if let Some(parent) = dest.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::copy(entry.path(), &dest)?;
                    emit(events, Event::AssetCopied {
                        source: entry.path().to_path_buf(),
                        output: dest,
                    });
                }
            }
        } else {
            fs::copy(&asset, &dest_root)?;
            emit(events, Event::AssetCopied {
                source: asset.clone(),
                output: dest_root,
            });
        }
    }
    Ok(())
}
