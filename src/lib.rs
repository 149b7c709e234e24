pub mod cli;
pub mod models;
pub mod scanner;
pub mod tagging;
pub mod utils;

pub use models::{RunSummary, ShardReport, UncategorizedEntry};
pub use scanner::{Discovery, ProcessResult, discover, process};
pub use tagging::{Entry, LabelSet, Lexicon, Tag, Tagger, tag_entry};
