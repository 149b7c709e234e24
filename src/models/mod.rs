mod record;
mod shard;
mod summary;

pub use record::{CATEGORY_FIELD, LEGACY_TAGS_FIELD, record_id, record_word, upsert_category};
pub use shard::{ShardReport, ShardReportBuilder, ShardReportBuilderError, UncategorizedEntry};
pub use summary::RunSummary;
