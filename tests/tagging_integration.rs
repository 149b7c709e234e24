use indicatif::ProgressBar;
use lexitag::models::RunSummary;
use lexitag::scanner::{discover, process};
use lexitag::tagging::{Entry, Lexicon, Tagger};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const WORDS_DIR: &str = "testdata/words";

fn run(dir: &Path, max_depth: usize, write: bool) -> RunSummary {
    let start = chrono::Utc::now();
    let discovery = discover(dir, max_depth, &[]).expect("Discovery should succeed");
    let result = process(
        dir,
        &discovery.shards,
        &Tagger::default(),
        write,
        Arc::new(ProgressBar::hidden()),
    )
    .expect("Run should succeed");
    RunSummary::from_shards(result.shards, start, chrono::Utc::now())
}

/// Copy the fixture shards into a scratch directory so they can be rewritten.
fn scratch_copy() -> TempDir {
    let dir = TempDir::new().unwrap();
    for entry in fs::read_dir(WORDS_DIR).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            fs::copy(&path, dir.path().join(path.file_name().unwrap())).unwrap();
        }
    }
    dir
}

fn read(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_dry_run_report() {
    let summary = run(Path::new(WORDS_DIR), 0, false);

    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.files_written, 0);
    assert_eq!(summary.total_words_tagged, 5);
    assert!(summary.errors.is_empty());
    assert_eq!(
        summary.top_tags(3),
        vec![("uncategorized", 2), ("a1_core", 1), ("conversation_phrases", 1)]
    );

    let text = summary.render_text(20, 30);
    assert!(text.starts_with("files_processed=3\ntotal_words_tagged=5\n"));
    assert!(text.contains("uncategorized_total=2\n"));
    assert!(text.contains("uncategorized_file=a1_basics.json count=1\n  a1-3 Xyzzy\n"));
    assert!(text.contains("uncategorized_file=b1_misc.json count=1\n  7 Erfahrung\n"));
}

#[test]
fn test_nested_shards_need_depth() {
    let summary = run(Path::new(WORDS_DIR), 1, false);
    assert_eq!(summary.files_processed, 4);
    assert_eq!(summary.total_words_tagged, 6);
    assert_eq!(summary.tag_counts["food_drink"], 2);
}

#[test]
fn test_write_back_migrates_legacy_fields() {
    let dir = scratch_copy();
    let summary = run(dir.path(), 0, true);
    assert_eq!(summary.files_written, 2);

    let a1 = read(&dir.path().join("a1_basics.json"));
    assert_eq!(
        a1[0],
        json!({
            "id": "a1-1",
            "word": "mit",
            "translation_en": "with",
            "translation_fa": "با",
            "level": "A1",
            "category": ["conversation_phrases", "a1_core", "preposition"]
        })
    );
    assert_eq!(a1[1]["category"], json!(["daily_life", "noun"]));
    assert_eq!(a1[2], json!("not an entry"));
    assert_eq!(a1[3]["category"], json!(["uncategorized"]));

    let b1 = read(&dir.path().join("b1_misc.json"));
    let keys: Vec<_> = b1[1].as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["id", "word", "translation_en", "level", "category"]);
    assert_eq!(b1[1]["category"], json!(["food_drink", "verb", "irregular_verb"]));
    assert_eq!(b1[0]["category"], json!(["uncategorized"]));

    let raw = fs::read_to_string(dir.path().join("b1_misc.json")).unwrap();
    assert!(raw.ends_with("]\n"));
    assert!(raw.starts_with("[\n  {\n    \"id\": 7,"));
}

#[test]
fn test_non_array_shard_left_alone() {
    let dir = scratch_copy();
    let before = fs::read_to_string(dir.path().join("meta.json")).unwrap();
    run(dir.path(), 0, true);
    assert_eq!(fs::read_to_string(dir.path().join("meta.json")).unwrap(), before);
}

#[test]
fn test_second_run_is_stable() {
    let dir = scratch_copy();
    run(dir.path(), 0, true);
    let first = fs::read_to_string(dir.path().join("a1_basics.json")).unwrap();
    run(dir.path(), 0, true);
    let second = fs::read_to_string(dir.path().join("a1_basics.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_broken_shard_recorded_in_summary() {
    let dir = scratch_copy();
    fs::write(dir.path().join("broken.json"), "[{\"word\": ").unwrap();
    let summary = run(dir.path(), 0, false);
    assert_eq!(summary.files_processed, 4);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].starts_with("broken.json: "));
    assert_eq!(summary.total_words_tagged, 5);
}

#[test]
fn test_lexicon_overrides_extend_tables() {
    let lexicon = Lexicon::from_override_file(Path::new("testdata/lexicon_overrides.toml"))
        .expect("Overrides should load");
    let extended = Tagger::new(lexicon);
    let builtin = Tagger::default();

    let falafel = Entry::new("Falafel").with_en("falafel").with_level("B1");
    assert!(builtin.tag(&falafel).is_uncategorized());
    assert_eq!(extended.tag(&falafel).names(), vec!["food_drink", "noun"]);

    let city = Entry::new("Wuppertal").with_en("Wuppertal");
    assert!(builtin.tag(&city).is_uncategorized());
    assert_eq!(extended.tag(&city).names(), vec!["proper_noun", "noun"]);

    // The group naming a grammatical tag is dropped.
    assert_eq!(extended.lexicon().extra_topics().len(), 1);
}

#[test]
fn test_summary_json_shape() {
    let summary = run(Path::new(WORDS_DIR), 0, false);
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["files_processed"], json!(3));
    assert_eq!(
        value["uncategorized"]["a1_basics.json"],
        json!([{"id": "a1-3", "word": "Xyzzy"}])
    );
    assert!(value["start_timestamp"].as_str().unwrap().contains('T'));
}
