use harx_cli::commands::domains::sorted_domains;
use std::path::PathBuf;

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[test]
fn test_domains_of_sample() {
    let domains = sorted_domains(&fixture_path("sample.har")).unwrap();
    assert_eq!(domains, vec!["api.example.com", "example.com"]);
}

#[test]
fn test_domains_are_unique_and_keep_ports() {
    let domains = sorted_domains(&fixture_path("mixed.har")).unwrap();
    assert_eq!(
        domains,
        vec![
            "api.example.com",
            "cdn.example.com",
            "localhost:8080",
            "www.example.com"
        ]
    );
}

#[test]
fn test_domains_of_empty_document() {
    let domains = sorted_domains(&fixture_path("empty.har")).unwrap();
    assert!(domains.is_empty());
}
