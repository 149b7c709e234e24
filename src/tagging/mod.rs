//! Vocabulary entry tagging.
//!
//! Assigns category labels to a dataset entry using a four-stage pipeline:
//! 1. Text normalization of the word and its translations
//! 2. Grammatical-function and topical classification
//! 3. Composition of the candidates, with the refusal policy
//! 4. Priority reduction to at most five labels
//!
//! The pipeline is a pure function of the entry's fields and the
//! [`Lexicon`]; a [`Tagger`] can be shared freely between threads.

use std::sync::LazyLock;

mod composer;
mod grammar;
mod lexicon;
mod normalize;
mod reducer;
mod taxonomy;
mod topics;
mod types;

#[cfg(test)]
mod composer_test;

pub use composer::{Composition, compose};
pub use grammar::{GrammarInput, RuleOutcome, infer_grammar_tags};
pub use lexicon::{Lexicon, LexiconOverrides, WordClass};
pub use normalize::{contains_any, first_word, has_any_word, lower, match_form};
pub use reducer::{finalize, reduce};
pub use taxonomy::{PRIORITY_ORDER, Tag, TagFamily};
pub use topics::{TopicInput, infer_topic};
pub use types::{Entry, LabelSet, MAX_TAGS, MIN_TAGS, TagList};

/// Classifies entries against one immutable lexicon.
#[derive(Debug, Clone, Default)]
pub struct Tagger {
    lexicon: Lexicon,
}

impl Tagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Final labels for one entry.
    pub fn tag(&self, entry: &Entry<'_>) -> LabelSet {
        finalize(compose(entry, &self.lexicon))
    }
}

static DEFAULT_TAGGER: LazyLock<Tagger> = LazyLock::new(Tagger::default);

/// Tag an entry with the built-in German lexicon.
pub fn tag_entry(entry: &Entry<'_>) -> LabelSet {
    DEFAULT_TAGGER.tag(entry)
}
