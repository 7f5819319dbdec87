//! # focal
//!
//! A minimal static site generator for photo blogs. Your filesystem is the
//! data source: each folder under the images root is one post — a photo
//! plus an optional `meta.yml` — and user-supplied templates decide what
//! the site looks like.
//!
//! # Architecture: One Pipeline, Four Steps
//!
//! ```text
//! 1. Discover   images/    →  Vec<Post>     (folders → structured records)
//! 2. Prepare    output/       created if absent
//! 3. Render     templates  →  output/       (pages, post pages, originals)
//! 4. Statics    assets     →  output/       (copied under their base names)
//! ```
//!
//! The pipeline is synchronous and fail-fast: the first error aborts the
//! run and surfaces to the caller. Output generation is a sequence of
//! independent, idempotent writes — there is no transaction and no
//! rollback, so a failed run leaves whatever earlier steps produced, and a
//! rerun overwrites it cleanly.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`post`] | The post model: image reference, metadata, derived title and slug |
//! | [`naming`] | Slug sanitization and display-name fallbacks |
//! | [`imaging`] | Image probing — dimensions and format from file headers |
//! | [`config`] | `config.toml` loading, defaults, and the documented stock config |
//! | [`discover`] | Walks the images root into an ordered post sequence |
//! | [`templates`] | Partials-first Tera compilation with a fixed helper set |
//! | [`render`] | Page and post rendering, prev/next linking, original copies |
//! | [`engine`] | The `generate` pipeline entry point and its event side channel |
//! | [`output`] | CLI output formatting — pure `format_*` plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## User Templates Over Compiled HTML
//!
//! HTML comes from [Tera](https://keats.github.io/tera/) templates the user
//! supplies, not from markup compiled into the binary. A photo blog lives
//! or dies on its presentation, and photographers should not need a Rust
//! toolchain to change theirs. Partial fragments share one namespace across
//! every page and post template, so a header written once is included
//! everywhere, and `.html` templates are auto-escaped.
//!
//! ## Folder Order Is Post Order
//!
//! Discovery returns posts in folder-name order, and prev/next links follow
//! that sequence. Date-prefixed folder names (`2018-05-12-golden-gate`)
//! give chronological ordering for free; anything else is the caller's
//! sorting decision, not the pipeline's.
//!
//! ## Events, Not Logging
//!
//! The pipeline reports progress through a channel of typed [`engine::Event`]
//! values rather than writing to stdout itself. The CLI drains the channel
//! into progress lines; library consumers can drop it entirely. Either way
//! the build's control flow is unaffected.

pub mod config;
pub mod discover;
pub mod engine;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod post;
pub mod render;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_helpers;
