//! Grammatical-function tagging.
//!
//! Infers part-of-speech style tags (verb, noun, article, modal verb, ...)
//! from the German word and its English translation. Rules run in a fixed
//! order; every rule sees the tags found so far and may add more. A rule
//! can also end evaluation, which is how reflexive verbs pre-empt every
//! other check.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use super::lexicon::{Lexicon, WordClass};
use super::normalize::{NormalizedText, is_lowercase_word};
use super::taxonomy::Tag;
use super::types::TagList;

/// 2–6 upper-case letters with an optional trailing period ("EU", "LKW.").
static ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-ZÄÖÜ]{2,6}\.?$").unwrap());

/// Integer or decimal with `.` or `,` as separator.
pub(crate) static NUMERIC_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+([.,]\d+)?$").unwrap());

/// Derivational endings that mark German adjectives.
static ADJECTIVE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(ig|lich|isch|bar|los|voll|sam|haft|end)$").unwrap());

const REFLEXIVE_PREFIX: &str = "sich ";
const INFINITIVE_MARKER: &str = "to ";

/// What the grammar classifier looks at.
#[derive(Debug, Clone)]
pub struct GrammarInput {
    pub word: NormalizedText,
    pub translation: NormalizedText,
}

impl GrammarInput {
    pub fn new(word: &str, translation_en: &str) -> Self {
        Self {
            word: NormalizedText::new(word),
            translation: NormalizedText::new(translation_en),
        }
    }

    fn is_infinitive_translation(&self) -> bool {
        self.translation.lower.starts_with(INFINITIVE_MARKER)
    }
}

/// Result of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Keep these tags and stop: no later rule runs.
    Terminal(Vec<Tag>),
    /// Keep these tags and carry on.
    Continue(Vec<Tag>),
    NoMatch,
}

type GrammarRule = fn(&GrammarInput, &TagList, &Lexicon) -> RuleOutcome;

/// Evaluation order of the grammar rules.
const RULES: &[(&str, GrammarRule)] = &[
    ("reflexive", reflexive_verb),
    ("abbreviation", abbreviation),
    ("closed_class", closed_class),
    ("numeral", numeral),
    ("time_place", time_place),
    ("verb", verb),
    ("noun", noun),
    ("adverb", adverb),
    ("adjective", adjective),
];

/// Infer grammatical-function tags for a word.
///
/// Tags are returned in order of first detection without duplicates.
pub fn infer_grammar_tags(input: &GrammarInput, lexicon: &Lexicon) -> TagList {
    let mut tags = TagList::new();
    for (name, rule) in RULES {
        match rule(input, &tags, lexicon) {
            RuleOutcome::Terminal(found) => {
                trace!("grammar rule {name} ended evaluation with {found:?}");
                // A terminal rule defines the whole result.
                return found.into_iter().collect();
            }
            RuleOutcome::Continue(found) => {
                trace!("grammar rule {name} matched {found:?}");
                tags.extend(found);
            }
            RuleOutcome::NoMatch => {}
        }
    }
    tags
}

fn outcome(found: Vec<Tag>) -> RuleOutcome {
    if found.is_empty() {
        RuleOutcome::NoMatch
    } else {
        RuleOutcome::Continue(found)
    }
}

fn reflexive_verb(input: &GrammarInput, _tags: &TagList, _lexicon: &Lexicon) -> RuleOutcome {
    if input.word.lower.starts_with(REFLEXIVE_PREFIX) {
        RuleOutcome::Terminal(vec![Tag::ReflexiveVerb, Tag::Verb])
    } else {
        RuleOutcome::NoMatch
    }
}

fn abbreviation(input: &GrammarInput, _tags: &TagList, _lexicon: &Lexicon) -> RuleOutcome {
    if ABBREVIATION.is_match(&input.word.collapsed) {
        RuleOutcome::Continue(vec![Tag::Abbreviation])
    } else {
        RuleOutcome::NoMatch
    }
}

fn closed_class(input: &GrammarInput, _tags: &TagList, lexicon: &Lexicon) -> RuleOutcome {
    let first = input.word.first.as_str();
    let whole = input.word.lower.as_str();
    let either = |class| lexicon.is(class, first) || lexicon.is(class, whole);

    let mut found = Vec::new();
    // Articles only count as the leading token ("der Tisch").
    if lexicon.is(WordClass::Articles, first) {
        found.push(Tag::Article);
    }
    for (class, tag) in [
        (WordClass::Pronouns, Tag::Pronoun),
        (WordClass::Prepositions, Tag::Preposition),
        (WordClass::Conjunctions, Tag::Conjunction),
        (WordClass::QuestionWords, Tag::QuestionWord),
        (WordClass::Negations, Tag::Negation),
    ] {
        if either(class) {
            found.push(tag);
        }
    }
    outcome(found)
}

fn numeral(input: &GrammarInput, _tags: &TagList, lexicon: &Lexicon) -> RuleOutcome {
    let whole = input.word.lower.as_str();
    if lexicon.is(WordClass::NumberWords, whole) || NUMERIC_LITERAL.is_match(whole) {
        RuleOutcome::Continue(vec![Tag::Numbers])
    } else {
        RuleOutcome::NoMatch
    }
}

fn time_place(input: &GrammarInput, _tags: &TagList, lexicon: &Lexicon) -> RuleOutcome {
    let whole = input.word.lower.as_str();
    let mut found = Vec::new();
    if lexicon.is(WordClass::TimeExpressions, whole) {
        found.push(Tag::TimeExpression);
    }
    if lexicon.is(WordClass::PlaceExpressions, whole) {
        found.push(Tag::PlaceExpression);
    }
    outcome(found)
}

fn verb(input: &GrammarInput, tags: &TagList, lexicon: &Lexicon) -> RuleOutcome {
    let whole = input.word.lower.as_str();
    let mut is_verb = tags.contains(Tag::Verb);
    let mut found = Vec::new();

    if input.is_infinitive_translation() {
        found.push(Tag::Verb);
        is_verb = true;
    }
    if lexicon.is(WordClass::ModalVerbs, whole) {
        found.push(Tag::ModalVerb);
        if !is_verb {
            found.push(Tag::Verb);
            is_verb = true;
        }
    }
    // Irregular needs an independent verb signal first.
    if is_verb && lexicon.is(WordClass::IrregularVerbs, whole) {
        found.push(Tag::IrregularVerb);
    }
    outcome(found)
}

fn noun(input: &GrammarInput, tags: &TagList, _lexicon: &Lexicon) -> RuleOutcome {
    let capitalized = input
        .word
        .collapsed
        .chars()
        .next()
        .is_some_and(char::is_uppercase);
    if capitalized && !tags.contains_any(&[Tag::Pronoun, Tag::Article, Tag::Abbreviation]) {
        RuleOutcome::Continue(vec![Tag::Noun])
    } else {
        RuleOutcome::NoMatch
    }
}

fn adverb(input: &GrammarInput, _tags: &TagList, lexicon: &Lexicon) -> RuleOutcome {
    if lexicon.is(WordClass::Adverbs, &input.word.lower) {
        RuleOutcome::Continue(vec![Tag::Adverb])
    } else {
        RuleOutcome::NoMatch
    }
}

fn adjective(input: &GrammarInput, tags: &TagList, lexicon: &Lexicon) -> RuleOutcome {
    let whole = input.word.lower.as_str();
    let eligible = !whole.is_empty()
        && !whole.contains(' ')
        && is_lowercase_word(whole)
        && !tags.contains_any(&[Tag::Verb, Tag::Noun])
        && !input.is_infinitive_translation();
    if !eligible {
        return RuleOutcome::NoMatch;
    }
    if lexicon.is(WordClass::Adjectives, whole) || ADJECTIVE_SUFFIX.is_match(whole) {
        RuleOutcome::Continue(vec![Tag::Adjective])
    } else {
        RuleOutcome::NoMatch
    }
}
