use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use super::{ShardReport, UncategorizedEntry};

/// Aggregate of one tagging run over a dataset directory.
#[derive(Serialize, Debug)]
pub struct RunSummary {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub files_processed: usize,
    pub files_written: usize,
    pub total_words_tagged: usize,
    pub tag_counts: BTreeMap<&'static str, usize>,
    /// Uncategorized entries per shard name, in entry order.
    pub uncategorized: BTreeMap<String, Vec<UncategorizedEntry>>,
    pub errors: Vec<String>,
}

impl RunSummary {
    pub fn from_shards(
        shards: Vec<ShardReport>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        let duration =
            (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

        let mut summary = Self {
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            files_processed: shards.len(),
            files_written: 0,
            total_words_tagged: 0,
            tag_counts: BTreeMap::new(),
            uncategorized: BTreeMap::new(),
            errors: Vec::new(),
        };

        for shard in shards {
            summary.total_words_tagged += shard.entries_tagged;
            if shard.written {
                summary.files_written += 1;
            }
            for (tag, count) in shard.tag_counts {
                *summary.tag_counts.entry(tag).or_default() += count;
            }
            summary.errors.extend(
                shard
                    .errors
                    .iter()
                    .map(|error| format!("{}: {}", shard.name, error)),
            );
            if !shard.uncategorized.is_empty() {
                summary
                    .uncategorized
                    .entry(shard.name)
                    .or_default()
                    .extend(shard.uncategorized);
            }
        }

        summary
    }

    /// The `n` most frequent tags, by count descending then name.
    pub fn top_tags(&self, n: usize) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<_> = self.tag_counts.iter().map(|(k, v)| (*k, *v)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(n);
        counts
    }

    pub fn uncategorized_total(&self) -> usize {
        self.uncategorized.values().map(Vec::len).sum()
    }

    /// Plain-text report, one `key=value` fact per line.
    ///
    /// At most `show_limit` uncategorized entries are listed per file; the
    /// remainder is summarized as `... (+k more)`.
    pub fn render_text(&self, top: usize, show_limit: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "files_processed={}", self.files_processed);
        let _ = writeln!(out, "total_words_tagged={}", self.total_words_tagged);

        let top_tags = self
            .top_tags(top)
            .iter()
            .map(|(tag, count)| format!("{tag}:{count}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "top_{top}_tags={top_tags}");

        let total = self.uncategorized_total();
        let _ = writeln!(out, "uncategorized_total={total}");
        for (name, entries) in &self.uncategorized {
            let _ = writeln!(out, "uncategorized_file={} count={}", name, entries.len());
            for entry in entries.iter().take(show_limit) {
                let _ = writeln!(out, "  {} {}", entry.id, entry.word);
            }
            if entries.len() > show_limit {
                let _ = writeln!(out, "  ... (+{} more)", entries.len() - show_limit);
            }
        }
        out
    }
}
