use crate::models::{
    ShardReport, ShardReportBuilder, UncategorizedEntry, record_id, record_word, upsert_category,
};
use crate::scanner::ProcessResult;
use crate::tagging::{Entry, Tagger};
use crate::utils::file::{read_json, relative_name, write_json_pretty};
use anyhow::Error;
use indicatif::ProgressBar;
use log::{debug, warn};
use rayon::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Tagged contents of one shard.
#[derive(Debug, Default)]
pub struct TaggedShard {
    pub items: Vec<Value>,
    pub entries_tagged: usize,
    pub tag_counts: BTreeMap<&'static str, usize>,
    pub uncategorized: Vec<UncategorizedEntry>,
}

/// Tag every shard in parallel, one shard per task.
///
/// Shards that cannot be read, parsed or written are reported with their
/// errors; they never abort the run.
pub fn process<P: AsRef<Path>>(
    root: P,
    shards: &[PathBuf],
    tagger: &Tagger,
    write: bool,
    progress_bar: Arc<ProgressBar>,
) -> Result<ProcessResult, Error> {
    let root = root.as_ref();

    let shards = shards
        .par_iter()
        .map(|path| {
            let report = process_shard(root, path, tagger, write);
            progress_bar.inc(1);
            report
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProcessResult { shards })
}

fn process_shard(
    root: &Path,
    path: &Path,
    tagger: &Tagger,
    write: bool,
) -> Result<ShardReport, Error> {
    let mut builder = ShardReportBuilder::default();
    builder.name(relative_name(root, path));

    if let Err(e) = tag_shard_file(&mut builder, path, tagger, write) {
        warn!("Error processing {}: {:#}", path.display(), e);
        builder.errors(vec![format!("{e:#}")]);
    }

    Ok(builder.build()?)
}

fn tag_shard_file(
    builder: &mut ShardReportBuilder,
    path: &Path,
    tagger: &Tagger,
    write: bool,
) -> Result<(), Error> {
    let Value::Array(items) = read_json(path)? else {
        debug!("{} is not an array of entries, skipping", path.display());
        builder.skipped(true);
        return Ok(());
    };

    let tagged = tag_items(items, tagger);
    builder
        .entries_tagged(tagged.entries_tagged)
        .tag_counts(tagged.tag_counts)
        .uncategorized(tagged.uncategorized);

    if write {
        write_json_pretty(path, &tagged.items)?;
        builder.written(true);
    }
    Ok(())
}

/// Tag the object items of a shard in order.
///
/// Non-object items pass through unchanged and are not counted.
pub fn tag_items(items: Vec<Value>, tagger: &Tagger) -> TaggedShard {
    let mut shard = TaggedShard {
        items: Vec::with_capacity(items.len()),
        ..TaggedShard::default()
    };

    for item in items {
        let Value::Object(record) = item else {
            shard.items.push(item);
            continue;
        };

        let labels = tagger.tag(&Entry::from_record(&record));
        shard.entries_tagged += 1;
        for tag in labels.names() {
            *shard.tag_counts.entry(tag).or_default() += 1;
        }
        if labels.is_uncategorized() {
            shard.uncategorized.push(UncategorizedEntry {
                id: record_id(&record),
                word: record_word(&record).to_string(),
            });
        }
        shard
            .items
            .push(Value::Object(upsert_category(&record, &labels)));
    }

    shard
}
