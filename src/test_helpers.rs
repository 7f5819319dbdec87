//! Shared test fixtures for the focal test suite.
//!
//! Discovery decodes image headers, so fixtures must be real bytes — the
//! byte arrays below are the smallest valid PNG and baseline JPEG that
//! still carry a parseable 1x1 header.
//!
//! `site_fixture` builds a complete miniature site (three posts, page and
//! post templates, a shared partial) in a temp directory; `fixture_config`
//! returns a [`BlogConfig`] pointing at it.

use crate::config::{BlogConfig, LayoutConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 1x1 RGBA PNG.
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0xf8,
    0xcf, 0xc0, 0xf0, 0x1f, 0x00, 0x05, 0x00, 0x01, 0xff, 0x89, 0x99, 0x3d, 0x1d, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// 1x1 grayscale baseline JPEG with explicit quantization and Huffman tables.
pub const JPEG_1X1: &[u8] = &[
    0xff, 0xd8, 0xff, 0xdb, 0x00, 0x43, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0xff, 0xc0, 0x00, 0x0b,
    0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xff, 0xc4, 0x00, 0x14, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xc4, 0x00, 0x14, 0x10, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xda, 0x00, 0x08, 0x01, 0x01,
    0x00, 0x00, 0x3f, 0x00, 0x3f, 0xff, 0xd9,
];

/// The stock image-extension allow-list.
pub fn exts() -> Vec<String> {
    BlogConfig::default().extensions_or_default()
}

/// Create one post folder under `root` with an image and optional `meta.yml`.
///
/// Returns the folder path so tests can add more files to it.
pub fn write_post_folder(
    root: &Path,
    name: &str,
    image_name: &str,
    image_bytes: &[u8],
    meta_yaml: Option<&str>,
) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(image_name), image_bytes).unwrap();
    if let Some(yaml) = meta_yaml {
        fs::write(dir.join(crate::discover::META_FILENAME), yaml).unwrap();
    }
    dir
}

/// Write the standard test templates under `<root>/templates/`.
///
/// The post template prints `prev=<slug>`/`next=<slug>` (or `-` at the
/// boundaries) so tests can assert neighbor linkage from the rendered HTML.
pub fn write_site_templates(root: &Path) {
    let templates = root.join("templates");
    fs::create_dir_all(templates.join("pages")).unwrap();
    fs::create_dir_all(templates.join("partials")).unwrap();

    fs::write(
        templates.join("partials/header.html"),
        "<header>{{ site.title }}</header>",
    )
    .unwrap();
    fs::write(
        templates.join("pages/index.html"),
        "{% include \"header.html\" %}<ul>\
         {% for post in posts %}<li><a href=\"{{ post.slug }}/\">{{ post.title }}</a></li>\
         {% endfor %}</ul>",
    )
    .unwrap();
    fs::write(
        templates.join("post.html"),
        "{% include \"header.html\" %}\
         <h1>{{ post.title }}</h1>\
         <img src=\"{{ post.file }}\" width=\"{{ post.image.width }}\">\
         <p>prev={% if previous %}{{ previous.slug }}{% else %}-{% endif %}</p>\
         <p>next={% if next %}{{ next.slug }}{% else %}-{% endif %}</p>",
    )
    .unwrap();
}

/// A complete miniature site: three posts (alpha, beta, gamma), templates,
/// and an empty output directory.
pub fn site_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let images = tmp.path().join("images");
    write_post_folder(&images, "alpha", "photo.jpg", JPEG_1X1, None);
    write_post_folder(
        &images,
        "beta",
        "photo.png",
        PNG_1X1,
        Some("title: Sunset\nposted: 2018-05-12T10:30:00Z\n"),
    );
    write_post_folder(&images, "gamma", "photo.jpg", JPEG_1X1, None);
    write_site_templates(tmp.path());
    fs::create_dir_all(tmp.path().join("dist")).unwrap();
    tmp
}

/// A [`BlogConfig`] pointing at a fixture directory's conventional layout.
pub fn fixture_config(root: &Path) -> BlogConfig {
    BlogConfig {
        title: "Fixture Blog".to_string(),
        images: Some(root.join("images")),
        output: Some(root.join("dist")),
        layout: LayoutConfig {
            pages: Some(vec![root.join("templates/pages/index.html")]),
            post: Some(root.join("templates/post.html")),
            partials: Some(vec![root.join("templates/partials/header.html")]),
            statics: Some(vec![]),
        },
        ..BlogConfig::default()
    }
}
