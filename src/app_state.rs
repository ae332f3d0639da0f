use std::sync::Arc;

use crate::crawler::CrawlOrchestrator;
use crate::fetcher::PageFetcher;

#[derive(Clone)]
pub struct AppState {
    pub crawler: CrawlOrchestrator,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            crawler: CrawlOrchestrator::new(fetcher),
        }
    }
}
