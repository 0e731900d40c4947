//! Integration tests for the deduplication pipeline
//!
//! These tests drive the public API end-to-end: a URL list on disk is read,
//! deduplicated, and the results are written back out.

use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};
use uddup::config::{load_config, read_config, validate, CliOverrides};
use uddup::dedup::{Deduplicator, KeptSet};
use uddup::{input, output, ConfigError};

/// Writes the given lines to a temporary URL list
fn create_url_list(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write URL");
    }
    file.flush().expect("Failed to flush URL list");
    file
}

/// Runs the full pipeline over a URL list and returns the kept URLs
fn dedup_file(lines: &[&str]) -> Vec<String> {
    let file = create_url_list(lines);
    let mut kept = KeptSet::new();
    let mut dedup = Deduplicator::new(&mut kept);

    input::feed_file(file.path(), &mut dedup).expect("Failed to read URL list");

    dedup.snapshot().iter().map(|u| u.to_string()).collect()
}

#[test]
fn test_recon_list_end_to_end() {
    let result = dedup_file(&[
        "https://target.example/",
        "https://target.example/assets/css/site.css",
        "https://target.example/assets/img/logo.png",
        "https://target.example/products/1001",
        "https://target.example/products/1002",
        "https://target.example/products/1003?ref=home",
        "https://target.example/products/1004?ref=home&sort=asc",
        "https://target.example/search/go?q=shoes",
        "https://target.example/search/go?page=2",
        "https://target.example/login.php?next=/",
        "https://target.example/login.php?next=/account",
        "",
        "https://target.example/about",
    ]);

    assert_eq!(
        result,
        vec![
            "https://target.example/",
            "https://target.example/about",
            "https://target.example/login.php?next=/",
            "https://target.example/login.php?next=/account",
            "https://target.example/products/1004?ref=home&sort=asc",
            "https://target.example/search/go?page=2",
            "https://target.example/search/go?q=shoes",
        ]
    );
}

#[test]
fn test_output_is_sorted_regardless_of_input_order() {
    let forward = dedup_file(&[
        "https://b.example/x",
        "https://a.example/index.html",
        "https://c.example/",
    ]);
    let backward = dedup_file(&[
        "https://c.example/",
        "https://a.example/index.html",
        "https://b.example/x",
    ]);

    assert_eq!(forward, backward);
    let mut sorted = forward.clone();
    sorted.sort();
    assert_eq!(forward, sorted);
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let lines = [
        "https://target.example/api/items?id=1",
        "https://target.example/apis/v1",
        "https://target.example/api/items?cat=1",
        "https://target.example/api/items?id=1&cat=2",
        "https://target.example/api/other?tag=1",
    ];

    let first = dedup_file(&lines);
    for _ in 0..5 {
        assert_eq!(dedup_file(&lines), first);
    }
}

#[test]
fn test_results_saved_to_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out_path = dir.path().join("unique.txt");

    let list = create_url_list(&[
        "https://target.example/shop/view?id=1",
        "https://target.example/shop/view?id=1&cat=2",
        "https://target.example/",
    ]);

    let mut kept = KeptSet::new();
    let mut dedup = Deduplicator::new(&mut kept);
    input::feed_file(list.path(), &mut dedup).expect("Failed to read URL list");

    let results = dedup.snapshot();
    assert!(output::emit_results(&results, Some(&out_path)));

    let saved = std::fs::read_to_string(&out_path).expect("Failed to read results");
    assert_eq!(
        saved,
        "https://target.example/\nhttps://target.example/shop/view?id=1&cat=2\n"
    );
}

#[test]
fn test_config_file_merged_with_cli() {
    let list = create_url_list(&["https://target.example/"]);
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut config_file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        config_file,
        "[input]\nurls-file = \"{}\"\n\n[output]\npath = \"{}\"\n",
        list.path().display(),
        dir.path().join("from-file.txt").display()
    )
    .expect("Failed to write config");
    config_file.flush().expect("Failed to flush config");

    let cli_output = dir.path().join("from-cli.txt");
    let config = load_config(config_file.path())
        .expect("Failed to load config")
        .merge_cli(CliOverrides {
            urls_file: None,
            output: Some(cli_output.clone()),
            silent: true,
        });

    assert!(validate(&config).is_ok());
    assert_eq!(config.input.urls_file.as_deref(), Some(list.path()));
    assert_eq!(config.output.path, Some(cli_output));
    assert!(config.output.silent);
}

#[test]
fn test_cli_input_rescues_stale_config_entry() {
    let list = create_url_list(&["https://target.example/"]);

    let mut config_file = NamedTempFile::new().expect("Failed to create temp file");
    write!(config_file, "[input]\nurls-file = \"/nonexistent/urls.txt\"\n")
        .expect("Failed to write config");
    config_file.flush().expect("Failed to flush config");

    let stale = read_config(config_file.path()).expect("Failed to parse config");
    assert!(matches!(validate(&stale), Err(ConfigError::MissingInput(_))));

    let config = stale.merge_cli(CliOverrides {
        urls_file: Some(PathBuf::from(list.path())),
        ..Default::default()
    });
    assert!(validate(&config).is_ok());
}
