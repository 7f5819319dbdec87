//! CLI output formatting.
//!
//! Output is information-centric: the primary display for a post is its
//! title and positional index, with filesystem paths as indented `Source:`
//! context lines. Build progress prints one line per pipeline event.
//!
//! ```text
//! Posts (2)
//! 001 Golden Gate (3000x2000 jpeg)
//!     Source: images/golden-gate/dsc0001.jpg
//!     Posted: 2018-05-12
//! 002 Sunset (1600x900 png)
//!     Source: images/sunset/sunset.png
//!     Tags: sunset, ocean
//! ```
//!
//! Each display has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes to stdout.

use crate::engine::Event;
use crate::post::Post;

/// One progress line per pipeline event.
pub fn format_event(event: &Event) -> String {
    match event {
        Event::PostDiscovered { title, source } => {
            format!("found {} ({})", title, source.display())
        }
        Event::PageRendered { output } => format!("page → {}", output.display()),
        Event::PostRendered { title, output } => {
            format!("{} → {}", title, output.display())
        }
        Event::AssetCopied { source, output } => {
            format!("asset {} → {}", source.display(), output.display())
        }
    }
}

/// Inventory listing for `focal check`.
pub fn format_check_output(posts: &[Post]) -> Vec<String> {
    let mut lines = vec![format!("Posts ({})", posts.len())];
    for (index, post) in posts.iter().enumerate() {
        lines.push(format!(
            "{:03} {} ({}x{} {})",
            index + 1,
            post.title_or_default(),
            post.image.width,
            post.image.height,
            post.image.format
        ));
        lines.push(format!("    Source: {}", post.original.display()));
        if let Some(posted) = post.meta.posted {
            lines.push(format!("    Posted: {}", posted.format("%Y-%m-%d")));
        }
        if !post.meta.location.is_empty() {
            lines.push(format!("    Location: {}", post.meta.location));
        }
        if !post.meta.tags.is_empty() {
            lines.push(format!("    Tags: {}", post.meta.tags.join(", ")));
        }
    }
    lines
}

pub fn print_check_output(posts: &[Post]) {
    for line in format_check_output(posts) {
        println!("{line}");
    }
}
