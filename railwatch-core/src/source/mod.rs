//! Collaborators that produce raw rows: the page fetcher and the markup
//! extractor.

mod error;
mod extract;
mod fetch;
mod markup;

#[cfg(test)]
mod tests;

pub use error::{FetchError, ParseError};
pub use extract::{CONTAINER_CLASS, MarkupExtractor, STATUS_CLASS, TroubleTableExtractor};
pub use fetch::{Fetcher, HttpFetcher};
