use carousel_core::source::{parse, parse_with_report, AllowList, SkipReason};

fn urls(raw: &str) -> Vec<String> {
    parse(raw, &AllowList::default())
        .into_iter()
        .map(|u| u.into_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Line-number handling
// ---------------------------------------------------------------------------

#[test]
fn test_numbered_listing() {
    let raw = "1|https://drive.google.com/x\n2|  \n3|amazonaws.com/y\n";
    assert_eq!(
        urls(raw),
        vec!["https://drive.google.com/x", "https://amazonaws.com/y"]
    );
}

#[test]
fn test_pure_digit_lines_are_dropped() {
    let raw = "42\n7|\n8|   \n13 \n";
    assert!(urls(raw).is_empty());
}

#[test]
fn test_number_prefix_without_pipe() {
    assert_eq!(
        urls("12 drive.google.com/file/d/abc"),
        vec!["https://drive.google.com/file/d/abc"]
    );
}

#[test]
fn test_number_prefix_glued_to_content() {
    // Digits directly followed by content are still treated as a label.
    assert_eq!(urls("5drive.google.com/a"), vec!["https://drive.google.com/a"]);
}

#[test]
fn test_unnumbered_lines_kept_as_is() {
    assert_eq!(
        urls("  https://bucket.s3.amazonaws.com/cat.png  "),
        vec!["https://bucket.s3.amazonaws.com/cat.png"]
    );
}

#[test]
fn test_windows_line_endings() {
    let raw = "1|drive.google.com/a\r\n2|drive.google.com/b\r\n";
    assert_eq!(
        urls(raw),
        vec!["https://drive.google.com/a", "https://drive.google.com/b"]
    );
}

#[test]
fn test_embedded_carriage_return_keeps_number_prefix() {
    assert_eq!(
        urls("1|drive.google.com/a\rb"),
        vec!["https://1|drive.google.com/a\rb"]
    );
}

// ---------------------------------------------------------------------------
// Host allow-list
// ---------------------------------------------------------------------------

#[test]
fn test_unlisted_hosts_are_dropped() {
    let raw = "https://example.com/a.png\nhttps://drive.google.com/b\nhttps://imgur.com/c";
    assert_eq!(urls(raw), vec!["https://drive.google.com/b"]);
}

#[test]
fn test_host_match_is_substring() {
    // Loose check: the fragment may appear anywhere in the line.
    assert_eq!(
        urls("https://cdn.example.com/?from=amazonaws.com"),
        vec!["https://cdn.example.com/?from=amazonaws.com"]
    );
}

#[test]
fn test_custom_allow_list() {
    let hosts = AllowList::new(["images.example.org"]);
    let list = parse(
        "images.example.org/1.jpg\nhttps://drive.google.com/2",
        &hosts,
    );
    assert_eq!(list.len(), 1);
    assert_eq!(list.as_slice()[0].as_str(), "https://images.example.org/1.jpg");
}

// ---------------------------------------------------------------------------
// Scheme handling
// ---------------------------------------------------------------------------

#[test]
fn test_missing_scheme_gets_https() {
    assert_eq!(urls("drive.google.com/x"), vec!["https://drive.google.com/x"]);
}

#[test]
fn test_http_scheme_preserved() {
    assert_eq!(urls("http://drive.google.com/x"), vec!["http://drive.google.com/x"]);
}

#[test]
fn test_http_prefix_check_is_literal() {
    // Anything starting with "http" counts as schemed, even without "://".
    assert_eq!(urls("httpfoo.amazonaws.com/x"), vec!["httpfoo.amazonaws.com/x"]);
}

#[test]
fn test_http_prefix_check_is_case_sensitive() {
    assert_eq!(
        urls("HTTPS://drive.google.com/x"),
        vec!["https://HTTPS://drive.google.com/x"]
    );
}

// ---------------------------------------------------------------------------
// Ordering and duplicates
// ---------------------------------------------------------------------------

#[test]
fn test_order_and_duplicates_preserved() {
    let raw = "drive.google.com/b\ndrive.google.com/a\ndrive.google.com/b";
    assert_eq!(
        urls(raw),
        vec![
            "https://drive.google.com/b",
            "https://drive.google.com/a",
            "https://drive.google.com/b",
        ]
    );
}

#[test]
fn test_empty_input_is_empty_list() {
    assert!(parse("", &AllowList::default()).is_empty());
    assert!(parse("\n\n  \n", &AllowList::default()).is_empty());
}

#[test]
fn test_every_url_is_schemed_and_allowed() {
    let hosts = AllowList::default();
    let raw = "1|drive.google.com/a\n2|nope.com/b\n3|\n4 https://x.amazonaws.com/c\nhttpz.drive.google.com";
    for url in &parse(raw, &hosts) {
        assert!(url.as_str().starts_with("http"), "{url}");
        assert!(hosts.permits(url.as_str()), "{url}");
    }
}

// ---------------------------------------------------------------------------
// Skip report
// ---------------------------------------------------------------------------

#[test]
fn test_report_reasons_and_line_numbers() {
    let raw = "1|drive.google.com/a\n\n2|\nexample.com/x\n";
    let report = parse_with_report(raw, &AllowList::default());

    assert_eq!(report.images.len(), 1);
    let reasons: Vec<(usize, SkipReason)> = report
        .skipped
        .iter()
        .map(|s| (s.line_number, s.reason))
        .collect();
    assert_eq!(
        reasons,
        vec![
            (2, SkipReason::Blank),
            (3, SkipReason::LineNumberOnly),
            (4, SkipReason::HostNotAllowed),
            (5, SkipReason::Blank),
        ]
    );
    assert_eq!(report.skipped[2].text, "example.com/x");
}

#[test]
fn test_skip_reason_display() {
    assert_eq!(format!("{}", SkipReason::Blank), "blank");
    assert_eq!(format!("{}", SkipReason::LineNumberOnly), "line number only");
    assert_eq!(format!("{}", SkipReason::HostNotAllowed), "host not allowed");
}
