pub mod errors;
pub mod orchestrator;

pub use errors::CrawlError;
pub use orchestrator::{CrawlOrchestrator, CrawlResult, MAX_SUBPAGES};
