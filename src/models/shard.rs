use derive_builder::Builder;
use serde::Serialize;
use std::collections::BTreeMap;

/// An entry the tagger refused to classify, kept for human triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UncategorizedEntry {
    pub id: String,
    pub word: String,
}

/// Outcome of tagging one shard file.
#[derive(Debug, Clone, Builder, Serialize)]
pub struct ShardReport {
    /// Path relative to the dataset directory.
    pub name: String,
    #[builder(default)]
    pub entries_tagged: usize,
    #[builder(default)]
    pub tag_counts: BTreeMap<&'static str, usize>,
    #[builder(default)]
    pub uncategorized: Vec<UncategorizedEntry>,
    /// The file held no top-level array and was left alone.
    #[builder(default)]
    pub skipped: bool,
    #[builder(default)]
    pub written: bool,
    #[builder(default)]
    pub errors: Vec<String>,
}
