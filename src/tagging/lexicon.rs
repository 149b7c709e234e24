//! Lexical resource tables.
//!
//! A [`Lexicon`] bundles every closed word list the classifiers consult:
//! German function words, verb classes, numerals, curated adverbs and
//! adjectives, the proper-noun gazetteer and the loanword list. It is built
//! once (from the built-in tables, optionally extended by a TOML override
//! file) and then only read, so one instance can be shared by reference
//! across worker threads.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;

use super::taxonomy::Tag;

pub const ARTICLES: &[&str] = &[
    "der", "die", "das", "ein", "eine", "einen", "einem", "einer", "eines", "den", "dem", "des",
];

pub const PRONOUNS: &[&str] = &[
    "ich", "du", "er", "sie", "es", "wir", "ihr", "mich", "dich", "ihn", "uns", "euch", "ihnen",
    "mir", "dir", "ihm", "mein", "meine", "meiner", "meinen", "dein", "deine", "sein", "seine",
    "ihre", "unser", "unsere", "euer", "eure", "dies", "diese", "dieser", "dieses", "das", "der",
    "die",
];

pub const PREPOSITIONS: &[&str] = &[
    "in", "an", "auf", "unter", "über", "vor", "hinter", "neben", "zwischen", "mit", "ohne",
    "für", "gegen", "bei", "nach", "von", "zu", "aus", "um", "seit", "durch", "bis", "während",
];

pub const CONJUNCTIONS: &[&str] = &[
    "und", "oder", "aber", "denn", "weil", "dass", "wenn", "als", "ob", "obwohl", "sondern",
];

pub const QUESTION_WORDS: &[&str] = &[
    "wer", "wen", "wem", "was", "wann", "wo", "wohin", "woher", "wie", "warum", "wieso",
    "weshalb", "welcher", "welche", "welches", "wieviel", "wieviele",
];

pub const NEGATIONS: &[&str] = &[
    "nicht", "nie", "nichts", "kein", "keine", "keinen", "keinem", "keiner", "keines",
];

pub const ADVERBS: &[&str] = &[
    "ja", "nein", "auch", "sehr", "nur", "schon", "noch", "immer", "oft", "manchmal", "selten",
    "hier", "dort", "da", "jetzt", "heute", "gestern", "morgen", "abends", "nachts", "danach",
    "dann", "gleich", "bald", "später", "vielleicht", "leider", "gern", "gerne", "bitte",
];

pub const TIME_EXPRESSIONS: &[&str] = &[
    "heute", "gestern", "morgen", "jetzt", "bald", "später", "abends", "nachts", "danach",
    "dann", "immer", "nie", "oft", "manchmal", "selten",
];

pub const PLACE_EXPRESSIONS: &[&str] = &[
    "hier", "dort", "da", "links", "rechts", "oben", "unten", "vorn", "vorne", "hinten",
    "draußen", "drinnen", "geradeaus",
];

pub const MODAL_VERBS: &[&str] = &[
    "können", "müssen", "dürfen", "sollen", "wollen", "mögen", "möchten",
];

pub const IRREGULAR_VERBS: &[&str] = &[
    "sein", "haben", "werden", "gehen", "kommen", "nehmen", "geben", "sehen", "essen", "trinken",
];

/// Verbs that, at level A1, are everyday vocabulary on their own.
pub const CORE_VERBS: &[&str] = &[
    "sein", "haben", "werden", "gehen", "kommen", "machen", "sagen", "sprechen", "lernen",
    "wohnen", "heißen", "kennen", "fragen", "antworten",
];

pub const NUMBER_WORDS: &[&str] = &[
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig", "hundert", "tausend", "million",
];

pub const ADJECTIVES: &[&str] = &[
    "gut", "schlecht", "groß", "klein", "schön", "teuer", "billig", "neu", "alt", "jung", "müde",
    "hungrig", "durstig", "krank", "gesund", "glücklich", "traurig", "wütend", "ängstlich",
    "warm", "kalt", "heiß", "hell", "dunkel", "laut", "leise", "modern", "einfach",
    "interessant", "schnell", "normal", "aggressiv", "lecker", "süß", "ungesund", "toll",
    "super", "gelb", "blau", "grün", "rot", "schwarz", "weiß", "grau", "braun",
];

pub const PROPER_NOUNS: &[&str] = &[
    "deutschland", "berlin", "hamburg", "münchen", "köln", "frankfurt", "wien", "zürich",
    "schweiz", "österreich", "europa", "afrika", "amerika", "asien", "deutsch", "england",
    "frankreich", "italien", "spanien",
];

/// English country names that turn a single capitalized word into a proper
/// noun.
pub const COUNTRIES_EN: &[&str] = &["germany", "austria", "switzerland"];

pub const LOANWORDS: &[&str] = &[
    "hotel", "restaurant", "internet", "computer", "radio", "taxi", "telefon",
];

/// Short answers and courtesy words every A1 learner needs.
pub const BASIC_RESPONSES: &[&str] = &["ja", "nein", "danke", "bitte"];

/// A named table inside the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Articles,
    Pronouns,
    Prepositions,
    Conjunctions,
    QuestionWords,
    Negations,
    Adverbs,
    TimeExpressions,
    PlaceExpressions,
    ModalVerbs,
    IrregularVerbs,
    CoreVerbs,
    NumberWords,
    Adjectives,
    ProperNouns,
    CountriesEn,
    Loanwords,
    BasicResponses,
}

/// A set of lower-cased words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet(HashSet<String>);

impl WordSet {
    pub fn from_words(words: &[&str]) -> Self {
        Self(words.iter().map(|w| w.to_lowercase()).collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.0.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A keyword group contributed by an override file.
///
/// Evaluated after every built-in topical rule, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraTopic {
    pub tag: Tag,
    /// Whole-word matches against the English translation.
    pub english: Vec<String>,
    /// Whole-word matches against the Persian translation.
    pub persian: Vec<String>,
    /// Substring matches against the source word.
    pub source: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    articles: WordSet,
    pronouns: WordSet,
    prepositions: WordSet,
    conjunctions: WordSet,
    question_words: WordSet,
    negations: WordSet,
    adverbs: WordSet,
    time_expressions: WordSet,
    place_expressions: WordSet,
    modal_verbs: WordSet,
    irregular_verbs: WordSet,
    core_verbs: WordSet,
    number_words: WordSet,
    adjectives: WordSet,
    proper_nouns: WordSet,
    countries_en: WordSet,
    loanwords: WordSet,
    basic_responses: WordSet,
    extra_topics: Vec<ExtraTopic>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::german()
    }
}

impl Lexicon {
    /// The built-in German tables.
    pub fn german() -> Self {
        Self {
            articles: WordSet::from_words(ARTICLES),
            pronouns: WordSet::from_words(PRONOUNS),
            prepositions: WordSet::from_words(PREPOSITIONS),
            conjunctions: WordSet::from_words(CONJUNCTIONS),
            question_words: WordSet::from_words(QUESTION_WORDS),
            negations: WordSet::from_words(NEGATIONS),
            adverbs: WordSet::from_words(ADVERBS),
            time_expressions: WordSet::from_words(TIME_EXPRESSIONS),
            place_expressions: WordSet::from_words(PLACE_EXPRESSIONS),
            modal_verbs: WordSet::from_words(MODAL_VERBS),
            irregular_verbs: WordSet::from_words(IRREGULAR_VERBS),
            core_verbs: WordSet::from_words(CORE_VERBS),
            number_words: WordSet::from_words(NUMBER_WORDS),
            adjectives: WordSet::from_words(ADJECTIVES),
            proper_nouns: WordSet::from_words(PROPER_NOUNS),
            countries_en: WordSet::from_words(COUNTRIES_EN),
            loanwords: WordSet::from_words(LOANWORDS),
            basic_responses: WordSet::from_words(BASIC_RESPONSES),
            extra_topics: Vec::new(),
        }
    }

    /// Built-in tables extended by the TOML override file at `path`.
    pub fn from_override_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon overrides {}", path.display()))?;
        let overrides: LexiconOverrides = toml::from_str(&content)
            .with_context(|| format!("Failed to parse lexicon overrides {}", path.display()))?;
        let mut lexicon = Self::german();
        lexicon.apply(overrides);
        Ok(lexicon)
    }

    pub fn apply(&mut self, overrides: LexiconOverrides) {
        let words = overrides.words;
        self.adverbs.extend(words.adverbs);
        self.adjectives.extend(words.adjectives);
        self.proper_nouns.extend(words.proper_nouns);
        self.loanwords.extend(words.loanwords);
        self.core_verbs.extend(words.core_verbs);
        self.number_words.extend(words.number_words);
        self.time_expressions.extend(words.time_expressions);
        self.place_expressions.extend(words.place_expressions);

        for group in overrides.topics {
            match Tag::parse(&group.tag) {
                Some(tag) if tag.is_topical() => {
                    debug!("Adding keyword group for {tag}");
                    self.extra_topics.push(ExtraTopic {
                        tag,
                        english: group.english,
                        persian: group.persian,
                        source: group.source,
                    });
                }
                Some(tag) => warn!("Ignoring keyword group for non-topical tag {tag}"),
                None => warn!("Ignoring keyword group for unknown tag {:?}", group.tag),
            }
        }
    }

    pub fn words(&self, class: WordClass) -> &WordSet {
        match class {
            WordClass::Articles => &self.articles,
            WordClass::Pronouns => &self.pronouns,
            WordClass::Prepositions => &self.prepositions,
            WordClass::Conjunctions => &self.conjunctions,
            WordClass::QuestionWords => &self.question_words,
            WordClass::Negations => &self.negations,
            WordClass::Adverbs => &self.adverbs,
            WordClass::TimeExpressions => &self.time_expressions,
            WordClass::PlaceExpressions => &self.place_expressions,
            WordClass::ModalVerbs => &self.modal_verbs,
            WordClass::IrregularVerbs => &self.irregular_verbs,
            WordClass::CoreVerbs => &self.core_verbs,
            WordClass::NumberWords => &self.number_words,
            WordClass::Adjectives => &self.adjectives,
            WordClass::ProperNouns => &self.proper_nouns,
            WordClass::CountriesEn => &self.countries_en,
            WordClass::Loanwords => &self.loanwords,
            WordClass::BasicResponses => &self.basic_responses,
        }
    }

    /// Shorthand for `self.words(class).contains(word)`.
    pub fn is(&self, class: WordClass, word: &str) -> bool {
        self.words(class).contains(word)
    }

    pub fn extra_topics(&self) -> &[ExtraTopic] {
        &self.extra_topics
    }
}

/// On-disk shape of a lexicon override file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconOverrides {
    pub words: WordOverrides,
    pub topics: Vec<TopicOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordOverrides {
    pub adverbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub proper_nouns: Vec<String>,
    pub loanwords: Vec<String>,
    pub core_verbs: Vec<String>,
    pub number_words: Vec<String>,
    pub time_expressions: Vec<String>,
    pub place_expressions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TopicOverride {
    pub tag: String,
    pub english: Vec<String>,
    pub persian: Vec<String>,
    pub source: Vec<String>,
}
