// tests/extract_cli.rs
//
// End-to-end checks for the video id extractors against files on disk.
//
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pb_site::content::TESTIMONIAL_VIDEOS;
use pb_site::extract::{extract_from_file, render_json, render_listing, PatternSet};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pb_extract_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn saved_page() -> String {
    let mut page = String::from("<html><body>\n");
    for video in TESTIMONIAL_VIDEOS {
        page.push_str(&format!(
            "<iframe src=\"{}\" title=\"{}\"></iframe>\n",
            video.embed_url(),
            video.title
        ));
    }
    // Repeats in other shapes must not add entries.
    page.push_str("<a href=\"https://www.youtube.com/watch?v=-nl13zI0yNM\">video</a>\n");
    page.push_str("<a href=\"https://youtu.be/8CDSFowRCzg\">short</a>\n");
    page.push_str("</body></html>\n");
    page
}

fn run_bin(bin: &str, path: &Path) -> Output {
    Command::new(bin)
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn listing_reports_every_testimonial_once_in_page_order() {
    let dir = tmp_dir("listing");
    let path = dir.join("reference_site.html");
    fs::write(&path, saved_page()).unwrap();

    let ids = extract_from_file(&path, PatternSet::Separate).unwrap();
    let expected: Vec<&str> = TESTIMONIAL_VIDEOS.iter().map(|v| v.id).collect();
    let found: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(found, expected);

    let listing = render_listing(&ids);
    assert!(listing.starts_with("Found IDs: ["));
    assert!(listing.contains("\"-nl13zI0yNM\""));
}

#[test]
fn json_output_is_a_string_array() {
    let dir = tmp_dir("json");
    let path = dir.join("page.html");
    fs::write(&path, saved_page()).unwrap();

    let ids = extract_from_file(&path, PatternSet::Combined).unwrap();
    let json = render_json(&ids).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), TESTIMONIAL_VIDEOS.len());
    assert!(parsed.iter().all(|id| id.len() == 11));
}

#[test]
fn repeated_runs_produce_identical_output() {
    let dir = tmp_dir("idempotent");
    let path = dir.join("page.html");
    fs::write(&path, saved_page()).unwrap();

    for set in [PatternSet::Separate, PatternSet::Combined] {
        let first = extract_from_file(&path, set).unwrap();
        let second = extract_from_file(&path, set).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn missing_input_reports_the_path() {
    let dir = tmp_dir("missing");
    let path = dir.join("does-not-exist.html");
    let err = extract_from_file(&path, PatternSet::Separate).unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.html"));
}

#[test]
fn extract_ids_binary_prints_listing_on_stdout() {
    let dir = tmp_dir("bin_listing");
    let path = dir.join("reference_site.html");
    fs::write(&path, saved_page()).unwrap();

    let out = run_bin(env!("CARGO_BIN_EXE_extract-ids"), &path);
    assert!(out.status.success());

    let quoted: Vec<String> = TESTIMONIAL_VIDEOS.iter().map(|v| format!("\"{}\"", v.id)).collect();
    let expected = format!("Found IDs: [{}]\n", quoted.join(", "));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), expected);
}

#[test]
fn extract_ids_json_binary_prints_pretty_array_on_stdout() {
    let dir = tmp_dir("bin_json");
    let path = dir.join("reference_site.html");
    fs::write(&path, saved_page()).unwrap();

    let out = run_bin(env!("CARGO_BIN_EXE_extract-ids-json"), &path);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("[\n  \""));
    let parsed: Vec<String> = serde_json::from_str(&stdout).unwrap();
    let expected: Vec<&str> = TESTIMONIAL_VIDEOS.iter().map(|v| v.id).collect();
    assert_eq!(parsed, expected);
}

#[test]
fn binaries_exit_with_one_on_missing_input() {
    let dir = tmp_dir("bin_missing");
    let path = dir.join("gone.html");

    for bin in [env!("CARGO_BIN_EXE_extract-ids"), env!("CARGO_BIN_EXE_extract-ids-json")] {
        let out = run_bin(bin, &path);
        assert_eq!(out.status.code(), Some(1), "{bin}");
        assert!(out.stdout.is_empty(), "{bin}");
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("Failed to read"), "{bin}: {stderr}");
        assert!(stderr.contains("gone.html"), "{bin}: {stderr}");
    }
}
