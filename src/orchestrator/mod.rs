//! Search orchestration: query optimisation, relevance ranking and
//! existence annotation around a single engine.

pub mod annotate;
pub mod query;
pub mod scoring;
pub mod search;

pub use annotate::{annotate_existing, PageLookup};
pub use search::SearchService;
