//! Tests for resource URI parsing and the advertised catalogue.

use rmcp::model::{ReadResourceResult, ResourceContents};

use super::{ResourceText, ResourceUri, resource_templates, resources};

#[test]
fn list_uri_wins_over_document_named_list() {
    assert_eq!(ResourceUri::parse("docs://list"), Some(ResourceUri::DocsList));
}

#[test]
fn docs_uri_keeps_nested_path() {
    assert_eq!(
        ResourceUri::parse("docs://guides/setup.md"),
        Some(ResourceUri::Doc("guides/setup.md"))
    );
    assert_eq!(
        ResourceUri::parse("docs://readme"),
        Some(ResourceUri::Doc("readme"))
    );
}

#[test]
fn content_uri_extracts_id() {
    assert_eq!(
        ResourceUri::parse("content://42"),
        Some(ResourceUri::Content("42"))
    );
}

#[test]
fn unknown_schemes_are_rejected() {
    assert_eq!(ResourceUri::parse("file:///etc/passwd"), None);
    assert_eq!(ResourceUri::parse("docs:/list"), None);
}

#[test]
fn catalogue_advertises_list_and_templates() {
    let list = resources();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].uri, "docs://list");

    let templates: Vec<_> = resource_templates()
        .into_iter()
        .map(|t| t.uri_template.clone())
        .collect();
    assert_eq!(templates, vec!["docs://{filepath}", "content://{id}"]);
}

#[test]
fn resource_text_becomes_single_text_content() {
    let result: ReadResourceResult = ResourceText {
        uri: "docs://a.md".to_string(),
        mime_type: "text/markdown".to_string(),
        text: "# A".to_string(),
    }
    .into();

    assert_eq!(result.contents.len(), 1);
    match &result.contents[0] {
        ResourceContents::TextResourceContents {
            uri,
            mime_type,
            text,
            ..
        } => {
            assert_eq!(uri, "docs://a.md");
            assert_eq!(mime_type.as_deref(), Some("text/markdown"));
            assert_eq!(text, "# A");
        }
        other => panic!("Expected text contents, got {other:?}"),
    }
}
