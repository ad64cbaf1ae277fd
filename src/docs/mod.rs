//! Documentation access over a fixed root directory.
//!
//! - `lister`: recursive enumeration of every file under the root
//! - `store`: resolution of a logical document name to its text
//! - `search`: case-insensitive substring scan over names and content
//!
//! All three are read-only and hold nothing but paths, so they are cheap to
//! clone into each MCP session.

mod error;
mod lister;
mod search;
mod store;


pub use error::{DocsError, DocsResult};
pub use lister::DocLister;
pub use search::{DocSearch, MatchKind, SearchHit};
pub use store::{DOCS_URI_SCHEME, DocStore, Document, MARKDOWN_MIME_TYPE, README_NAME};
