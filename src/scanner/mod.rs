mod discover;
mod process;

use crate::models::ShardReport;

pub struct ProcessResult {
    /// One report per shard, in discovery order.
    pub shards: Vec<ShardReport>,
}

pub use self::discover::{Discovery, discover};
pub use self::process::{TaggedShard, process, tag_items};
