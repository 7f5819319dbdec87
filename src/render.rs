//! Rendering — posts and pages to output files.
//!
//! Two output classes:
//!
//! 1. **Site pages**: each configured page template renders once against the
//!    full post sequence and lands at `<output>/<page-basename>`.
//! 2. **Post pages**: the post template compiles once, then renders per post
//!    into `<output>/<slug>/index.html` with the post's neighbors bound as
//!    `previous`/`next`; the original image is copied beside the page.
//!
//! Rendering is fail-fast and not transactional: a missing template, a
//! compile failure, or a write failure aborts the run, and whatever was
//! already written stays on disk. Each write is self-contained, so a rerun
//! after fixing the problem simply overwrites.
//!
//! ## Slug assignment
//!
//! Output-directory names are resolved up front in a sequencing pass so that
//! prev/next links always agree with where neighbors were actually written.
//! A post whose title slug is taken — by a reserved page name or an earlier
//! post — gets its folder-name slug instead; a residual collision falls
//! through as last-write-wins.

use crate::config::BlogConfig;
use crate::engine::{Event, EventSink, emit};
use crate::post::{ImageInfo, Post};
use crate::templates::{self, TemplateError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tera::Context;
use thiserror::Error;

/// Filename of the rendered page inside each post's slug directory.
pub const POST_INDEX_FILE: &str = "index.html";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("failed to build template context: {0}")]
    Context(#[source] tera::Error),
}

/// Everything a template can see about one post.
///
/// Meta fields are flattened to the top level so templates read
/// `{{ post.location }}` rather than digging through nesting; the image
/// stays grouped as `{{ post.image.width }}`.
#[derive(Debug, Clone, Serialize)]
pub struct PostContext {
    pub title: String,
    pub slug: String,
    pub file: String,
    pub image: ImageInfo,
    pub posted: Option<DateTime<Utc>>,
    pub location: String,
    pub comments: String,
    pub tags: Vec<String>,
    pub extra: BTreeMap<String, String>,
}

impl PostContext {
    fn new(post: &Post, slug: String) -> Self {
        Self {
            title: post.title_or_default(),
            slug,
            file: post.file.clone(),
            image: post.image.clone(),
            posted: post.meta.posted,
            location: post.meta.location.clone(),
            comments: post.meta.comments.clone(),
            tags: post.meta.tags.clone(),
            extra: post.meta.extra.clone(),
        }
    }
}

#[derive(Serialize)]
struct PageViewModel<'a> {
    site: &'a BlogConfig,
    posts: &'a [PostContext],
}

#[derive(Serialize)]
struct PostViewModel<'a> {
    site: &'a BlogConfig,
    post: &'a PostContext,
    previous: Option<&'a PostContext>,
    next: Option<&'a PostContext>,
}

/// Render every output file for the given post sequence.
///
/// Posts render in the order given; this function does not sort.
pub fn render(config: &BlogConfig, posts: &[Post], events: &EventSink) -> Result<(), RenderError> {
    let output = config.output_or_default();
    let partials = templates::read_partials(&config.layout.partials_or_default())?;

    let slugs = assign_slugs(posts, &reserved_names(config));
    let contexts: Vec<PostContext> = posts
        .iter()
        .zip(&slugs)
        .map(|(post, slug)| PostContext::new(post, slug.clone()))
        .collect();

    for page_path in config.layout.pages_or_default() {
        let page = templates::compile(&page_path, &partials)?;
        let view = PageViewModel {
            site: config,
            posts: &contexts,
        };
        let html = page.render(&Context::from_serialize(&view).map_err(RenderError::Context)?)?;
        let page_output = output.join(basename(&page_path));
        fs::write(&page_output, html)?;
        emit(events, Event::PageRendered {
            output: page_output,
        });
    }

    let post_template = templates::compile(&config.layout.post_or_default(), &partials)?;
    for (index, post) in posts.iter().enumerate() {
        let slug_dir = output.join(&slugs[index]);
        fs::create_dir_all(&slug_dir)?;

        let view = PostViewModel {
            site: config,
            post: &contexts[index],
            previous: index.checked_sub(1).map(|i| &contexts[i]),
            next: contexts.get(index + 1),
        };
        let html =
            post_template.render(&Context::from_serialize(&view).map_err(RenderError::Context)?)?;
        fs::write(slug_dir.join(POST_INDEX_FILE), html)?;
        fs::copy(&post.original, slug_dir.join(&post.file))?;

        emit(events, Event::PostRendered {
            title: contexts[index].title.clone(),
            output: slug_dir,
        });
    }

    Ok(())
}

/// Resolve each post's output-directory name up front.
fn assign_slugs(posts: &[Post], reserved: &HashSet<String>) -> Vec<String> {
    let mut taken = reserved.clone();
    let mut slugs = Vec::with_capacity(posts.len());
    for post in posts {
        let mut slug = post.slug();
        if taken.contains(&slug) {
            let fallback = post.dir_slug();
            if !fallback.is_empty() && !taken.contains(&fallback) {
                slug = fallback;
            }
        }
        taken.insert(slug.clone());
        slugs.push(slug);
    }
    slugs
}

/// Output names posts must not claim: the page files written next to the
/// slug directories, plus their stems (a post titled "Index" must not shadow
/// `index.html`'s territory).
fn reserved_names(config: &BlogConfig) -> HashSet<String> {
    let mut names = HashSet::new();
    for page in config.layout.pages_or_default() {
        let base = basename(&page);
        if let Some(stem) = Path::new(&base).file_stem() {
            names.insert(stem.to_string_lossy().to_string());
        }
        names.insert(base);
    }
    names
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
