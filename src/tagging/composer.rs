//! Tag composition.
//!
//! Merges the grammar tags, the topic and the entry's level into the raw
//! candidate list, then applies the refusal policy: without a topical
//! signal the entry is `uncategorized`, whatever grammar was found.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::grammar::{GrammarInput, infer_grammar_tags};
use super::lexicon::{Lexicon, WordClass};
use super::normalize::{has_any_word, match_form};
use super::taxonomy::{Tag, TagFamily};
use super::topics::{TopicInput, infer_topic};
use super::types::{Entry, TagList};

/// German derivational suffixes of abstract nouns.
static ABSTRACT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(ung|heit|keit|schaft|tät|tion|ismus|ment)$").unwrap());

const ABSTRACT_KEYWORDS_EN: &[&str] = &["tion", "ness", "ment", "ship", "ism", "ability"];

/// Grammar tags that mark a pure function word.
const FUNCTION_WORD_TAGS: &[Tag] = &[
    Tag::Article,
    Tag::Pronoun,
    Tag::Preposition,
    Tag::Conjunction,
    Tag::QuestionWord,
    Tag::Negation,
];

/// Grammar tags that make a topic-less entry a conversation phrase.
const CONVERSATIONAL_GRAMMAR_TAGS: &[Tag] = &[
    Tag::Article,
    Tag::Pronoun,
    Tag::Preposition,
    Tag::Conjunction,
    Tag::Negation,
    Tag::Adverb,
];

const CONTENT_WORD_TAGS: &[Tag] = &[Tag::Noun, Tag::Verb, Tag::Adjective];

/// Tags that rule out the `daily_life` fallback.
const FALLBACK_BLOCKERS: &[Tag] = &[
    Tag::GreetingsPoliteness,
    Tag::QuestionsAnswers,
    Tag::ConversationPhrases,
    Tag::SchoolLearning,
    Tag::WorkOffice,
];

/// Tags that are enough on their own to publish an entry.
const STANDALONE_SIGNALS: &[Tag] = &[
    Tag::ProperNoun,
    Tag::ConversationPhrases,
    Tag::GreetingsPoliteness,
    Tag::QuestionsAnswers,
];

/// Outcome of composition, before priority reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// Deduplicated candidates with at least one topical-like signal.
    Candidates(TagList),
    /// Nothing topical survived.
    Uncategorized,
}

/// Build the candidate tags for one entry.
pub fn compose(entry: &Entry<'_>, lexicon: &Lexicon) -> Composition {
    let grammar_input = GrammarInput::new(entry.word, entry.translation_en);
    let topic_input = TopicInput::new(entry.word, entry.translation_en, entry.translation_fa);
    let grammar = infer_grammar_tags(&grammar_input, lexicon);
    let topic = infer_topic(&topic_input, lexicon);
    let word = &grammar_input.word;
    let level = entry.level;
    let is_a1 = level.starts_with("A1");

    let mut tags = TagList::new();

    match topic {
        Some(Tag::ProperNoun) => {
            tags.push(Tag::ProperNoun);
            tags.push(Tag::Noun);
            // Recover a genuine topic from the translations alone.
            let secondary = infer_topic(&topic_input.translations_only(), lexicon);
            if let Some(secondary) = secondary.filter(|t| *t != Tag::ProperNoun) {
                tags.push(secondary);
            }
        }
        Some(tag) => {
            tags.push(tag);
        }
        None => {
            if grammar.contains(Tag::QuestionWord) {
                tags.push(Tag::QuestionsAnswers);
                tags.push(Tag::ConversationPhrases);
            } else if grammar.contains_any(CONVERSATIONAL_GRAMMAR_TAGS) {
                tags.push(Tag::ConversationPhrases);
            }
            if grammar.contains(Tag::Verb)
                && is_a1
                && lexicon.is(WordClass::CoreVerbs, &word.first)
            {
                tags.push(Tag::DailyLife);
            }
        }
    }

    if matches!(topic, Some(Tag::GreetingsPoliteness | Tag::QuestionsAnswers)) {
        tags.push(Tag::ConversationPhrases);
    }
    if word.collapsed.contains('!')
        && word.token_count() > 1
        && !tags.contains(Tag::ConversationPhrases)
    {
        tags.push(Tag::ConversationPhrases);
    }

    tags.extend(grammar.iter());

    if lexicon.is(WordClass::Loanwords, &word.lower) {
        tags.push(Tag::LoanwordInternational);
    }
    if is_a1 && is_core_word(&word.lower, &word.first, lexicon) {
        tags.push(Tag::A1Core);
    }

    let fallback = topic.is_none()
        && !tags.contains(Tag::DailyLife)
        && (is_a1 || level.starts_with("A2"))
        && grammar.contains_any(CONTENT_WORD_TAGS)
        && !grammar.contains_any(FUNCTION_WORD_TAGS)
        && !looks_abstract(&word.lower, entry.translation_en)
        && !tags.contains_any(FALLBACK_BLOCKERS);
    if fallback {
        tags.push_front(Tag::DailyLife);
    }

    if has_topical_signal(&tags) {
        Composition::Candidates(tags)
    } else {
        debug!("No topical signal for {:?}, refusing to classify", entry.word);
        Composition::Uncategorized
    }
}

/// Words every A1 learner meets first: function words, modal and irregular
/// verbs, numerals and basic responses.
fn is_core_word(lower: &str, first: &str, lexicon: &Lexicon) -> bool {
    lexicon.is(WordClass::Adverbs, lower)
        || [
            WordClass::Articles,
            WordClass::Pronouns,
            WordClass::Prepositions,
            WordClass::Conjunctions,
            WordClass::QuestionWords,
            WordClass::Negations,
        ]
        .into_iter()
        .any(|class| lexicon.is(class, first))
        || [
            WordClass::ModalVerbs,
            WordClass::IrregularVerbs,
            WordClass::BasicResponses,
            WordClass::NumberWords,
        ]
        .into_iter()
        .any(|class| lexicon.is(class, lower))
}

/// Abstract nouns ("Erfahrung", "Freiheit") are kept out of `daily_life`.
fn looks_abstract(lower_word: &str, translation_en: &str) -> bool {
    ABSTRACT_SUFFIX.is_match(lower_word)
        || has_any_word(&match_form(translation_en), ABSTRACT_KEYWORDS_EN)
}

/// Refusal policy: a topical-like tag or one of the standalone signals must
/// be present.
fn has_topical_signal(tags: &TagList) -> bool {
    let topical_like = tags.iter().any(|t| t.family() == TagFamily::Topical);
    topical_like || tags.contains_any(STANDALONE_SIGNALS)
}
