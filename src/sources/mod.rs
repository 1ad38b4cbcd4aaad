// Sources module for fetching remote plugin lists

pub mod fetcher;
pub mod http;

pub use fetcher::ListFetcher;
pub use http::HttpFetcher;
