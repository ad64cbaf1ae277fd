use super::utils::*;

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate_with_ellipsis("short", 10), "short");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate_with_ellipsis("abcdefghijkl", 8), "abcde...");
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    assert_eq!(truncate_with_ellipsis("héllo wörld", 11), "héllo wörld");
    assert_eq!(truncate_with_ellipsis("héllo wörld", 8), "héllo...");
}

#[test]
fn test_single_line_collapses_whitespace() {
    assert_eq!(single_line("line one\n\nline  two\t"), "line one line two");
}
