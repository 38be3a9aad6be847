//! Node repository: accumulates the full node collection from a paginated source.
//!
//! The whole collection is materialized before validation starts. Any page
//! failure aborts the fetch; no partial collection is returned.

pub mod client;

pub use client::HttpPageSource;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::RepositoryError;
use crate::model::{MenuNode, Page};

/// One page of menu records, numbered from 1.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u64) -> Result<Page, RepositoryError>;
}

pub struct MenuRepository<S> {
    source: S,
}

impl<S: PageSource> MenuRepository<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch every page and concatenate the records in page order.
    pub async fn fetch_all(&self) -> Result<Vec<MenuNode>, RepositoryError> {
        let first = self.source.fetch_page(1).await?;
        let expected = first.pagination;
        let page_count = expected.page_count();
        debug!(
            total = expected.total,
            per_page = expected.per_page,
            pages = page_count,
            "fetched first page"
        );

        let mut nodes = first.menus;
        for number in 2..=page_count {
            let page = self.source.fetch_page(number).await?;
            if page.pagination.total != expected.total {
                warn!(
                    page = number,
                    expected = expected.total,
                    reported = page.pagination.total,
                    "page reports a different total"
                );
            }
            debug!(page = number, records = page.menus.len(), "fetched page");
            nodes.extend(page.menus);
        }

        if nodes.len() as u64 != expected.total {
            warn!(
                expected = expected.total,
                received = nodes.len(),
                "record count differs from pagination total"
            );
        }

        Ok(nodes)
    }
}
