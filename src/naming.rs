//! Slug and display-name derivation.
//!
//! Posts take their identity from a human-entered title or, failing that,
//! from the folder name on disk. Both end up in URLs and output paths, so
//! this module reduces them to a conservative character set. Slugs are
//! lowercase ASCII alphanumerics separated by single dashes, truncated at a
//! word boundary.
//!
//! Derivation is pure string manipulation — given the same input, the same
//! slug comes out on every run, which is what keeps output paths stable
//! across rebuilds.

const MAX_SLUG_LEN: usize = 80;

/// Reduce a title to a URL- and filesystem-safe slug.
///
/// - ASCII alphanumerics are kept (lowercased); every other run of
///   characters becomes a single dash
/// - Leading and trailing dashes are stripped
/// - Truncates to `MAX_SLUG_LEN`, breaking at the last dash before the limit
///
/// Titles made entirely of unsupported characters reduce to the empty
/// string; callers fall back to the folder name in that case.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut prev_dash = true; // suppresses leading dashes
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() <= MAX_SLUG_LEN {
        return slug;
    }
    // slug is pure ASCII at this point, so byte slicing is safe
    let truncated = &slug[..MAX_SLUG_LEN];
    match truncated.rfind('-') {
        Some(pos) => truncated[..pos].to_string(),
        None => truncated.to_string(),
    }
}

/// Human-readable fallback title for a folder or file name.
///
/// Dashes and underscores become spaces, so `golden-gate_dusk` reads as
/// "golden gate dusk" without requiring a `title:` in the metadata file.
pub fn display_name(name: &str) -> String {
    name.replace(['-', '_'], " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // slugify() tests
    // =========================================================================

    #[test]
    fn slugify_lowercases_alphanumerics() {
        assert_eq!(slugify("Sunset"), "sunset");
        assert_eq!(slugify("Photo123"), "photo123");
    }

    #[test]
    fn slugify_replaces_spaces_and_special_chars() {
        assert_eq!(slugify("My Great Photo!"), "my-great-photo");
        assert_eq!(slugify("foo@bar#baz"), "foo-bar-baz");
    }

    #[test]
    fn slugify_collapses_consecutive_separators() {
        assert_eq!(slugify("a---b"), "a-b");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("hello   world"), "hello-world");
    }

    #[test]
    fn slugify_strips_leading_trailing_separators() {
        assert_eq!(slugify("--hello--"), "hello");
        assert_eq!(slugify("  hello  "), "hello");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn slugify_empty_for_all_special_chars() {
        assert_eq!(slugify("@#$%"), "");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("café"), "caf");
        assert_eq!(slugify("München"), "m-nchen");
    }

    #[test]
    fn slugify_truncates_long_titles() {
        let long_title = "a ".repeat(60); // 120 chars
        let result = slugify(&long_title);
        assert!(result.len() <= MAX_SLUG_LEN);
        assert!(!result.ends_with('-'));
    }

    #[test]
    fn slugify_truncates_at_word_boundary() {
        let title = "this is a very long title that exceeds the maximum slug \
                     length and should be truncated well before this word";
        let result = slugify(title);
        assert!(result.len() <= MAX_SLUG_LEN);
        assert!(!result.contains("this-word"));
        assert!(!result.ends_with('-'));
    }

    #[test]
    fn slugify_is_deterministic() {
        assert_eq!(slugify("Golden Gate at Dusk"), slugify("Golden Gate at Dusk"));
    }

    // =========================================================================
    // display_name() tests
    // =========================================================================

    #[test]
    fn display_name_converts_separators_to_spaces() {
        assert_eq!(display_name("golden-gate"), "golden gate");
        assert_eq!(display_name("golden_gate_dusk"), "golden gate dusk");
    }

    #[test]
    fn display_name_trims() {
        assert_eq!(display_name("-edge-"), "edge");
    }

    #[test]
    fn display_name_passthrough() {
        assert_eq!(display_name("Sunset"), "Sunset");
    }
}
