pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{HttpFetcher, PageFetcher};
pub use errors::FetchError;
pub use types::{BROWSER_USER_AGENT, Charset, FetcherOptions, PageResponse};

#[cfg(test)]
pub use client::MockPageFetcher;
