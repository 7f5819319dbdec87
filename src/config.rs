//! Site configuration.
//!
//! A single `config.toml` at the project root describes the site identity,
//! the content and output roots, and the template layout. Config files are
//! sparse — set just the values you want; every field has a documented
//! default reachable through an `*_or_default()` accessor. Unknown keys are
//! rejected to catch typos early.
//!
//! ```toml
//! title = "My Photo Blog"
//! author = "Jane Doe"
//! base_url = "https://photos.example.com"
//!
//! images = "images"         # each immediate subdirectory is one post
//! output = "dist"
//!
//! [layout]
//! pages = ["templates/pages/index.html"]
//! post = "templates/post.html"
//! partials = ["templates/partials/header.html"]
//! statics = ["static"]
//! ```
//!
//! The loaded [`BlogConfig`] is handed to the pipeline by value — it is
//! plain data, and it serializes into every template context as `site` so
//! templates can reference `{{ site.title }}` and friends.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Default name of the configuration file.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    /// Site title, shown to templates as `site.title`.
    pub title: String,
    pub author: String,
    pub description: String,
    /// Absolute URL prefix for canonical links and feeds.
    pub base_url: String,
    /// Images root; each immediate subdirectory is one post folder.
    pub images: Option<PathBuf>,
    /// Output root the generated site is written to.
    pub output: Option<PathBuf>,
    /// File extensions recognized as post images (no dot, case-insensitive).
    pub image_extensions: Option<Vec<String>>,
    pub layout: LayoutConfig,
}

/// Template and asset layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Page templates, each rendered once against the full post list and
    /// written to the output root under the template's base name.
    pub pages: Option<Vec<PathBuf>>,
    /// The post template, rendered once per post into `<slug>/index.html`.
    pub post: Option<PathBuf>,
    /// Partial fragments registered into the template namespace before any
    /// page or post template compiles.
    pub partials: Option<Vec<PathBuf>>,
    /// Files or directories copied into the output root under their own
    /// base names.
    pub statics: Option<Vec<PathBuf>>,
}

impl BlogConfig {
    pub fn images_or_default(&self) -> PathBuf {
        self.images
            .clone()
            .unwrap_or_else(|| PathBuf::from("images"))
    }

    pub fn output_or_default(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("dist"))
    }

    pub fn extensions_or_default(&self) -> Vec<String> {
        self.image_extensions
            .clone()
            .unwrap_or_else(default_extensions)
    }
}

impl LayoutConfig {
    pub fn pages_or_default(&self) -> Vec<PathBuf> {
        self.pages
            .clone()
            .unwrap_or_else(|| vec![PathBuf::from("templates/pages/index.html")])
    }

    pub fn post_or_default(&self) -> PathBuf {
        self.post
            .clone()
            .unwrap_or_else(|| PathBuf::from("templates/post.html"))
    }

    pub fn partials_or_default(&self) -> Vec<PathBuf> {
        self.partials.clone().unwrap_or_default()
    }

    pub fn statics_or_default(&self) -> Vec<PathBuf> {
        self.statics.clone().unwrap_or_default()
    }
}

fn default_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "gif", "webp", "tiff"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Load configuration from `path`.
///
/// A missing file yields stock defaults — a config file is optional for
/// sites happy with the conventional layout. A malformed file is an error.
pub fn load_config(path: &Path) -> Result<BlogConfig, ConfigError> {
    if !path.exists() {
        return Ok(BlogConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// A documented stock `config.toml`, printed by `focal gen-config`.
pub fn stock_config_toml() -> String {
    r#"# focal site configuration.
# Every key is optional — defaults shown below.

title = "My Photo Blog"
author = ""
description = ""
base_url = ""

# Content root. Each immediate subdirectory is one post: the first
# recognized image file (by name) becomes the post's photo, and an optional
# meta.yml supplies title, posted timestamp, location, comments, and tags.
images = "images"

# Output root the site is written to.
output = "dist"

# Extensions recognized as post images.
image_extensions = ["jpg", "jpeg", "png", "gif", "webp", "tiff"]

[layout]
# Page templates: each is rendered once with the full post list and written
# to the output root under its base name.
pages = ["templates/pages/index.html"]

# Post template: rendered once per post into <output>/<slug>/index.html.
post = "templates/post.html"

# Partial fragments available to all templates via {% include "name" %}.
partials = []

# Files or directories copied into the output root under their base names.
statics = []
"#
    .to_string()
}
