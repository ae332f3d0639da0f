use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{Instrument, info, info_span, instrument, warn};
use url::Url;
use utoipa::ToSchema;

use crate::crawler::errors::CrawlError;
use crate::extractor::{self, PageContent};
use crate::fetcher::PageFetcher;

/// Upper bound on sub-pages crawled per request.
pub const MAX_SUBPAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    pub main_page: PageContent,
    /// In link discovery order.
    pub sub_pages: Vec<PageContent>,
}

/// Crawls a seed page plus a bounded fan-out of its same-site links.
#[derive(Clone)]
pub struct CrawlOrchestrator {
    fetcher: Arc<dyn PageFetcher>,
}

impl CrawlOrchestrator {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Crawl `url` and up to [`MAX_SUBPAGES`] of the pages it links to.
    ///
    /// The seed page must succeed. Sub-page failures are logged and the page
    /// is left out of the result.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn crawl(&self, url: &Url) -> Result<CrawlResult, CrawlError> {
        let html = self
            .fetcher
            .fetch_html(url)
            .await
            .map_err(|err| CrawlError::from_fetch(url.as_str(), err))?;
        info!(html_len = html.len(), "fetched main page");

        let (main_page, links) = extractor::extract_page_with_links(url, &html);
        info!(found = links.len(), "discovered internal links");

        let targets: Vec<Url> = links.into_iter().take(MAX_SUBPAGES).collect();
        let sub_pages = self.crawl_sub_pages(targets).await;

        info!(sub_pages = sub_pages.len(), "crawl finished");
        Ok(CrawlResult {
            main_page,
            sub_pages,
        })
    }

    /// Crawl every target concurrently, then collect the results in the
    /// order the targets were given. The tasks live in a `JoinSet`, so
    /// dropping this future (client gone) aborts the outstanding fetches.
    async fn crawl_sub_pages(&self, targets: Vec<Url>) -> Vec<PageContent> {
        let mut tasks = JoinSet::new();
        for (index, target) in targets.into_iter().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let span = info_span!("sub_page", url = %target);
            tasks.spawn(
                async move { (index, crawl_page(fetcher.as_ref(), &target).await) }
                    .instrument(span),
            );
        }

        let mut slots: Vec<Option<PageContent>> = vec![None; tasks.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(page))) => slots[index] = Some(page),
                Ok((_, Err(err))) => warn!(error = %err, "skipping sub-page"),
                Err(err) => warn!(error = %err, "sub-page task failed"),
            }
        }
        slots.into_iter().flatten().collect()
    }
}

/// Fetch and extract a single page.
pub async fn crawl_page(fetcher: &dyn PageFetcher, url: &Url) -> Result<PageContent, CrawlError> {
    let html = fetcher
        .fetch_html(url)
        .await
        .map_err(|err| CrawlError::from_fetch(url.as_str(), err))?;
    Ok(extractor::extract_page(url, &html))
}
