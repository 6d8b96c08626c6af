mod query_matcher;
mod record_registry;
mod response_deduplicator;

pub use query_matcher::QueryMatcher;
pub use record_registry::RecordRegistry;
pub use response_deduplicator::ResponseDeduplicator;
