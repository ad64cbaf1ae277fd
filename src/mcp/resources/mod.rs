//! MCP resource implementations
//!
//! Resources are addressed by URI rather than routed by macro, so this
//! module also owns URI parsing and the advertised resource catalogue.

mod content;
mod docs;

#[cfg(test)]
mod uri_test;

use rmcp::model::{
    AnnotateAble, RawResource, RawResourceTemplate, ReadResourceResult, Resource,
    ResourceContents, ResourceTemplate,
};

pub use content::{CONTENT_URI_SCHEME, ContentResources, JSON_MIME_TYPE};
pub use docs::{DOCS_LIST_URI, DocResources};

use crate::docs::{DOCS_URI_SCHEME, MARKDOWN_MIME_TYPE};

/// A resource URI recognised by this server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceUri<'a> {
    /// `docs://list`
    DocsList,
    /// `docs://{filepath}`
    Doc(&'a str),
    /// `content://{id}`
    Content(&'a str),
}

impl<'a> ResourceUri<'a> {
    /// Match a URI against the known templates. `docs://list` takes
    /// precedence over a document of the same name.
    pub fn parse(uri: &'a str) -> Option<Self> {
        if uri == DOCS_LIST_URI {
            Some(Self::DocsList)
        } else if let Some(path) = uri.strip_prefix(DOCS_URI_SCHEME) {
            Some(Self::Doc(path))
        } else {
            uri.strip_prefix(CONTENT_URI_SCHEME).map(Self::Content)
        }
    }
}

/// Text body of a resource read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceText {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

impl From<ResourceText> for ReadResourceResult {
    fn from(resource: ResourceText) -> Self {
        let mut contents = ResourceContents::text(resource.text, resource.uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(resource.mime_type);
        }
        ReadResourceResult::new(vec![contents])
    }
}

/// Concrete resources advertised by `resources/list`.
pub fn resources() -> Vec<Resource> {
    vec![
        RawResource::new(DOCS_LIST_URI, "list-docs")
            .with_description("List all available documentation files")
            .with_mime_type(JSON_MIME_TYPE)
            .no_annotation(),
    ]
}

/// Parameterised resources advertised by `resources/templates/list`.
pub fn resource_templates() -> Vec<ResourceTemplate> {
    [
        (
            "docs://{filepath}",
            "read-doc",
            "Read a documentation file. Use a filepath from docs://list",
            MARKDOWN_MIME_TYPE,
        ),
        (
            "content://{id}",
            "content",
            "Get content by ID",
            JSON_MIME_TYPE,
        ),
    ]
    .into_iter()
    .map(|(uri_template, name, description, mime_type)| {
        RawResourceTemplate::new(uri_template, name)
            .with_description(description)
            .with_mime_type(mime_type)
            .no_annotation()
    })
    .collect()
}
