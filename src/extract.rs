//! Video ID extraction from saved HTML pages.
//!
//! Used offline to recover the testimonial video IDs from a reference copy of
//! an older site. Results keep first-seen order and collapse duplicates.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "reference_site.html";

pub const VIDEO_ID_LEN: usize = 11;

static RE_EMBED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})").unwrap());
static RE_WATCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"watch\?v=([a-zA-Z0-9_-]{11})").unwrap());
static RE_SHORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})").unwrap());
// Any quoted 11-char token. Noisy on purpose; output is triaged by hand.
static RE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([a-zA-Z0-9_-]{11})""#).unwrap());
static RE_COMBINED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .unwrap()
});

/// An 11-character video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Accepts exactly eleven characters; content is otherwise opaque.
    pub fn new(raw: &str) -> Option<Self> {
        (raw.chars().count() == VIDEO_ID_LEN).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which matchers to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSet {
    /// Embed URL, `watch?v=`, `youtu.be/`, and quoted tokens, in that order.
    Separate,
    /// A single case-insensitive pattern over every URL shape.
    Combined,
}

impl PatternSet {
    fn patterns(self) -> Vec<&'static Regex> {
        match self {
            PatternSet::Separate => vec![&*RE_EMBED, &*RE_WATCH, &*RE_SHORT, &*RE_QUOTED],
            PatternSet::Combined => vec![&*RE_COMBINED],
        }
    }
}

/// Scan `content` and return distinct IDs in first-seen order.
pub fn extract_video_ids(content: &str, set: PatternSet) -> Vec<VideoId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for pattern in set.patterns() {
        for caps in pattern.captures_iter(content) {
            let Some(id) = caps.get(1).and_then(|m| VideoId::new(m.as_str())) else {
                continue;
            };
            if seen.insert(id.clone()) {
                ids.push(id);
            }
        }
    }
    debug!(?set, found = ids.len(), "video id scan finished");
    ids
}

/// Read `path` and scan it.
pub fn extract_from_file(path: &Path, set: PatternSet) -> Result<Vec<VideoId>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(extract_video_ids(&content, set))
}

/// `Found IDs: [...]` listing used by the plain extractor.
///
/// The array is Rust's debug form (`["a", "b"]`, double quotes, no inner
/// padding), not Node's `[ 'a', 'b' ]`; diff old listings accordingly.
pub fn render_listing(ids: &[VideoId]) -> String {
    let raw: Vec<&str> = ids.iter().map(VideoId::as_str).collect();
    format!("Found IDs: {raw:?}")
}

/// Pretty JSON array used by the JSON extractor.
pub fn render_json(ids: &[VideoId]) -> Result<String> {
    serde_json::to_string_pretty(ids).context("Failed to serialize video ids")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(ids: &[VideoId]) -> Vec<&str> {
        ids.iter().map(VideoId::as_str).collect()
    }

    #[test]
    fn test_each_url_shape_yields_the_id() {
        for input in [
            r#"<iframe src="https://www.youtube.com/embed/abcdefghijk"></iframe>"#,
            "see watch?v=abcdefghijk for more",
            "https://youtu.be/abcdefghijk",
        ] {
            assert_eq!(raw(&extract_video_ids(input, PatternSet::Separate)), vec!["abcdefghijk"]);
        }
    }

    #[test]
    fn test_duplicates_across_patterns_collapse() {
        let input = r#"https://www.youtube.com/embed/abcdefghijk" watch?v=abcdefghijk https://youtu.be/abcdefghijk"#;
        assert_eq!(raw(&extract_video_ids(input, PatternSet::Separate)), vec!["abcdefghijk"]);
    }

    #[test]
    fn test_order_follows_pattern_pass_then_position() {
        let input = r#"youtu.be/BBBBBBBBBBB youtube.com/embed/AAAAAAAAAAA {"id":"CCCCCCCCCCC"}"#;
        assert_eq!(
            raw(&extract_video_ids(input, PatternSet::Separate)),
            vec!["AAAAAAAAAAA", "BBBBBBBBBBB", "CCCCCCCCCCC"]
        );
    }

    #[test]
    fn test_combined_pattern_covers_url_shapes() {
        for (input, expected) in [
            ("https://www.YouTube.com/watch?v=-nl13zI0yNM&t=4", "-nl13zI0yNM"),
            ("https://youtube.com/v/8CDSFowRCzg", "8CDSFowRCzg"),
            ("https://youtube.com/e/DAm7Z5oDW8U", "DAm7Z5oDW8U"),
            ("https://www.youtube.com/embed/A8Ur0bGH8nM", "A8Ur0bGH8nM"),
            ("https://youtu.be/oOHxY2UvwvA", "oOHxY2UvwvA"),
        ] {
            assert_eq!(raw(&extract_video_ids(input, PatternSet::Combined)), vec![expected]);
        }
    }

    #[test]
    fn test_combined_pattern_collapses_repeats() {
        let input = "youtu.be/oOHxY2UvwvA youtu.be/ZkvCSOsg1AM youtu.be/oOHxY2UvwvA";
        assert_eq!(
            raw(&extract_video_ids(input, PatternSet::Combined)),
            vec!["oOHxY2UvwvA", "ZkvCSOsg1AM"]
        );
    }

    #[test]
    fn test_combined_ignores_bare_quoted_tokens() {
        assert!(extract_video_ids(r#"{"key":"abcdefghijk"}"#, PatternSet::Combined).is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let input = r#"youtu.be/ZkvCSOsg1AM "Fqby6Cr1zHQ" watch?v=ZkvCSOsg1AM"#;
        for set in [PatternSet::Separate, PatternSet::Combined] {
            assert_eq!(extract_video_ids(input, set), extract_video_ids(input, set));
        }
    }

    #[test]
    fn test_renderers() {
        let ids = vec![VideoId::new("abcdefghijk").unwrap(), VideoId::new("-nl13zI0yNM").unwrap()];
        assert_eq!(render_listing(&ids), r#"Found IDs: ["abcdefghijk", "-nl13zI0yNM"]"#);
        assert_eq!(render_json(&ids).unwrap(), "[\n  \"abcdefghijk\",\n  \"-nl13zI0yNM\"\n]");
    }

    #[test]
    fn test_video_id_shape() {
        assert!(VideoId::new("short").is_none());
        assert!(VideoId::new("abcdefghijkl").is_none());
        assert_eq!(VideoId::new("A8Ur0bGH8nM").unwrap().as_str(), "A8Ur0bGH8nM");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = extract_from_file(Path::new("definitely/not/here.html"), PatternSet::Separate).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
