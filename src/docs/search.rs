//! Linear substring search over the docs tree.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::error::DocsResult;
use super::lister::DocLister;

/// Where a query matched a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Filename,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub path: String,
    pub match_type: MatchKind,
}

/// Re-scans every listed document on each query. No index, no ranking.
#[derive(Debug, Clone)]
pub struct DocSearch {
    lister: DocLister,
}

impl DocSearch {
    pub fn new(lister: DocLister) -> Self {
        Self { lister }
    }

    /// Find documents whose relative path or content contains `query`,
    /// ignoring case.
    ///
    /// A path match wins and skips the content read for that document, so a
    /// document is reported at most once. Documents that fail to read are
    /// treated as non-matches.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> DocsResult<Vec<SearchHit>> {
        let needle = query.to_lowercase();
        let mut hits = Vec::new();

        for path in self.lister.list().await? {
            if path.to_lowercase().contains(&needle) {
                hits.push(SearchHit {
                    path,
                    match_type: MatchKind::Filename,
                });
                continue;
            }

            let full = self.lister.root().join(&path);
            match tokio::fs::read(&full).await {
                Ok(bytes) => {
                    if String::from_utf8_lossy(&bytes)
                        .to_lowercase()
                        .contains(&needle)
                    {
                        hits.push(SearchHit {
                            path,
                            match_type: MatchKind::Content,
                        });
                    }
                }
                Err(e) => trace!(path = %full.display(), error = %e, "Skipping unreadable document"),
            }
        }

        debug!(hits = hits.len(), "Search complete");
        Ok(hits)
    }
}
