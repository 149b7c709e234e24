//! Topical classification.
//!
//! A fixed, ordered table of [`TopicRule`]s is evaluated top to bottom and
//! the first rule with a matching probe decides the topic. The order is the
//! precedence policy: question-like phrases are claimed before any keyword
//! rule, substring rules on the German word run before the broad English
//! keyword groups, and so on. Keyword groups from a lexicon override file
//! run after every built-in rule.
//!
//! Proper-noun detection is deliberately narrow (a small gazetteer and a
//! country-name pattern). Capitalization alone never makes a proper noun;
//! that signal belongs to the grammar classifier's noun rule.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use super::grammar::NUMERIC_LITERAL;
use super::lexicon::{ExtraTopic, Lexicon, WordClass};
use super::normalize::{NormalizedText, contains_any, has_any_word};
use super::taxonomy::Tag;

/// A single capitalized German word ("Polen").
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-ZÄÖÜ][a-zäöüß]+$").unwrap());

/// English openings that make a translation a question.
const WH_OPENINGS: &[&str] = &["how ", "where ", "when ", "why ", "what ", "who "];

pub const COLORS_EN: &[&str] = &[
    "red", "blue", "green", "yellow", "orange", "black", "white", "grey", "gray", "brown", "pink",
    "purple",
];
pub const SHAPES_EN: &[&str] = &["circle", "square", "triangle", "rectangle", "oval", "star", "heart"];
pub const DAYS_EN: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];
pub const MONTHS_EN: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];
pub const SEASONS_EN: &[&str] = &["spring", "summer", "autumn", "fall", "winter"];

/// Which normalized field a probe reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Word,
    English,
    Persian,
}

/// One test inside a topic rule.
#[derive(Debug, Clone, Copy)]
pub enum Probe {
    /// Lower-cased field is in a lexicon table.
    InLexicon(Field, WordClass),
    /// Whole-word keyword match.
    Words(Field, &'static [&'static str]),
    /// Substring keyword match.
    Substring(Field, &'static [&'static str]),
    /// Match form equals one of the values.
    MatchFormIs(Field, &'static [&'static str]),
    /// Lower-cased form equals one of the values.
    LowerIs(Field, &'static [&'static str]),
    /// Lower-cased field is an integer or decimal.
    NumericLiteral(Field),
    /// Question mark in the word, WH-opening in the translation, or a
    /// leading question word.
    QuestionLike,
    /// Single capitalized word translated as a German-speaking country.
    CountryName,
}

/// Claims `tag` when any of its probes matches.
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    pub tag: Tag,
    pub probes: &'static [Probe],
}

use Field::{English, Word};
use Probe::*;

const fn rule(tag: Tag, probes: &'static [Probe]) -> TopicRule {
    TopicRule { tag, probes }
}

/// Built-in rules in precedence order.
pub static TOPIC_RULES: &[TopicRule] = &[
    rule(
        Tag::ProperNoun,
        &[
            InLexicon(Word, WordClass::ProperNouns),
            InLexicon(English, WordClass::ProperNouns),
            CountryName,
        ],
    ),
    rule(Tag::QuestionsAnswers, &[QuestionLike]),
    rule(
        Tag::GreetingsPoliteness,
        &[Substring(
            Word,
            &[
                "hallo", "hi", "tschüss", "auf wiedersehen", "guten morgen", "guten tag",
                "guten abend", "gute nacht", "willkommen", "entschuldigung", "danke", "bitte",
            ],
        )],
    ),
    rule(
        Tag::ConversationPhrases,
        &[Substring(
            Word,
            &[
                "mein name ist", "wie geht", "ich heiße", "freut mich", "keine ahnung", "bis bald",
                "bis später",
            ],
        )],
    ),
    // Personal data on forms.
    rule(
        Tag::ConversationPhrases,
        &[
            Words(
                English,
                &[
                    "name", "first name", "last name", "address", "zip code", "postcode",
                    "phone number", "telephone number", "age", "nationality",
                ],
            ),
            Substring(
                Word,
                &["vorname", "nachname", "adresse", "postleitzahl", "telefonnummer", "alter"],
            ),
        ],
    ),
    // Language names.
    rule(
        Tag::SchoolLearning,
        &[
            MatchFormIs(English, &["english", "french", "german", "persian", "pashto"]),
            Substring(
                Word,
                &["englisch", "französisch", "deutsch", "persisch", "paschtu", "pashto"],
            ),
        ],
    ),
    rule(
        Tag::TimeDate,
        &[
            Words(
                English,
                &[
                    "time", "date", "today", "tomorrow", "yesterday", "hour", "minute", "week",
                    "month", "year",
                ],
            ),
            InLexicon(Word, WordClass::TimeExpressions),
        ],
    ),
    rule(
        Tag::DaysMonthsSeasons,
        &[
            LowerIs(English, DAYS_EN),
            LowerIs(English, MONTHS_EN),
            LowerIs(English, SEASONS_EN),
        ],
    ),
    rule(
        Tag::NumbersMath,
        &[
            InLexicon(Word, WordClass::NumberWords),
            NumericLiteral(Word),
            Words(English, &["percent", "plus", "minus", "times", "divide"]),
        ],
    ),
    rule(
        Tag::ColorsShapes,
        &[Words(English, COLORS_EN), Words(English, SHAPES_EN)],
    ),
    rule(
        Tag::Weather,
        &[Words(
            English,
            &[
                "weather", "rain", "snow", "wind", "cloud", "sun", "sunny", "storm",
                "temperature",
            ],
        )],
    ),
    rule(
        Tag::DirectionsNavigation,
        &[
            Words(
                English,
                &["left", "right", "straight", "near", "far", "direction", "turn", "map"],
            ),
            InLexicon(Word, WordClass::PlaceExpressions),
        ],
    ),
    rule(
        Tag::PlacesBuildings,
        &[Words(
            English,
            &[
                "school", "university", "hospital", "pharmacy", "bank", "restaurant", "hotel",
                "airport", "station", "supermarket", "shop", "office", "post office", "city",
                "street",
            ],
        )],
    ),
    rule(
        Tag::SchoolLearning,
        &[Substring(
            Word,
            &["schule", "berufskolleg", "fachschule", "uni", "universität"],
        )],
    ),
    rule(
        Tag::ServicesAuthorities,
        &[Substring(
            Word,
            &[
                "amt", "behörde", "antrag", "anmeldung", "zulassung", "ausweis", "pass", "visum",
                "versicherung",
            ],
        )],
    ),
    rule(
        Tag::WorkOffice,
        &[Substring(
            Word,
            &[
                "arbeit", "arbeits", "beruf", "firma", "vertrag", "gehalt", "bewerbung",
                "vorstellungsgespräch", "interview",
            ],
        )],
    ),
    rule(
        Tag::SchoolLearning,
        &[Substring(
            Word,
            &[
                "kurs", "klasse", "prüfung", "hausaufgabe", "buch", "text", "dialog", "wort",
                "satz", "grammatik", "alphabet",
            ],
        )],
    ),
    rule(
        Tag::CityTransport,
        &[Words(
            English,
            &[
                "bus", "train", "tram", "subway", "metro", "ticket", "taxi", "bicycle", "bike",
                "car", "traffic", "station", "platform", "stop",
            ],
        )],
    ),
    rule(
        Tag::TravelHolidays,
        &[Words(
            English,
            &[
                "travel", "trip", "vacation", "holiday", "passport", "luggage", "flight",
                "booking", "reservation", "tourist",
            ],
        )],
    ),
    rule(
        Tag::CultureEvents,
        &[Words(English, &["easter", "christmas", "new year"])],
    ),
    rule(
        Tag::HomeHousehold,
        &[Words(
            English,
            &["apartment", "flat", "house", "home", "rent", "neighbor", "garden"],
        )],
    ),
    rule(
        Tag::FurnitureRooms,
        &[Words(
            English,
            &[
                "room", "kitchen", "bathroom", "bedroom", "living room", "chair", "table", "bed",
                "sofa", "wardrobe", "closet",
            ],
        )],
    ),
    rule(
        Tag::KitchenCooking,
        &[Words(English, &["cook", "bake", "fry", "boil", "kitchen", "recipe"])],
    ),
    rule(
        Tag::FoodDrink,
        &[Words(
            English,
            &[
                "food", "drink", "water", "coffee", "tea", "juice", "beer", "wine", "bread",
                "milk", "cheese", "meat", "fish", "fruit", "vegetable", "breakfast", "lunch",
                "dinner", "restaurant",
            ],
        )],
    ),
    rule(
        Tag::ShoppingMoney,
        &[Words(
            English,
            &[
                "buy", "sell", "pay", "price", "money", "euro", "cash", "card", "receipt", "bill",
                "change", "discount", "shopping", "purchase",
            ],
        )],
    ),
    rule(
        Tag::ClothingFashion,
        &[Words(
            English,
            &[
                "shirt", "t shirt", "dress", "pants", "trousers", "skirt", "jacket", "coat",
                "shoes", "sock", "hat", "clothes",
            ],
        )],
    ),
    rule(
        Tag::HealthBody,
        &[Words(
            English,
            &[
                "doctor", "hospital", "medicine", "pain", "ill", "sick", "healthy", "health",
                "body", "head", "hand", "foot", "leg", "arm", "eye", "ear", "nose", "mouth",
                "tooth", "stomach", "back",
            ],
        )],
    ),
    rule(
        Tag::FeelingsEmotions,
        &[Words(
            English,
            &[
                "happy", "sad", "angry", "afraid", "fear", "anxious", "tired", "bored", "excited",
                "love", "hate", "happiness", "luck", "satisfied", "great", "grateful", "good",
                "bad", "nice", "beautiful", "ok", "okay", "shock", "concern",
            ],
        )],
    ),
    rule(
        Tag::PeopleFamily,
        &[Words(
            English,
            &[
                "mother", "father", "sister", "brother", "parents", "family", "child", "son",
                "daughter", "grandmother", "grandfather", "siblings", "grandparents", "boy",
                "girl", "man", "woman", "person", "people", "mr", "mrs",
            ],
        )],
    ),
    rule(
        Tag::Relationships,
        &[Words(
            English,
            &[
                "friend", "boyfriend", "girlfriend", "husband", "wife", "marriage",
                "relationship", "date", "marital status",
            ],
        )],
    ),
    rule(
        Tag::SchoolLearning,
        &[Words(
            English,
            &[
                "learn", "study", "lesson", "homework", "teacher", "student", "exam", "language",
                "alphabet", "grammar", "school", "course", "class", "book", "text", "dialogue",
                "letter", "to read", "to write", "to listen", "to understand", "to spell",
            ],
        )],
    ),
    rule(
        Tag::WorkOffice,
        &[Words(
            English,
            &[
                "work", "office", "meeting", "boss", "colleague", "company", "salary", "contract",
                "interview", "application", "deadline", "financial", "leadership", "management",
            ],
        )],
    ),
    rule(
        Tag::JobsProfessions,
        &[Words(
            English,
            &[
                "job", "profession", "engineer", "doctor", "teacher", "driver", "cook",
                "police officer", "nurse",
            ],
        )],
    ),
    rule(
        Tag::TechnologyInternet,
        &[Words(
            English,
            &[
                "computer", "phone", "smartphone", "internet", "website", "email", "password",
                "app", "wifi", "install", "copy", "download", "upload", "update", "file", "print",
                "printer", "digitalization", "digitalisation", "research", "invention",
            ],
        )],
    ),
    rule(
        Tag::MediaSocial,
        &[Words(
            English,
            &[
                "news", "newspaper", "radio", "tv", "television", "social media", "post",
                "message", "chat",
            ],
        )],
    ),
    rule(
        Tag::HobbiesSports,
        &[Words(
            English,
            &[
                "sport", "football", "soccer", "tennis", "swim", "run", "gym", "music", "dance",
                "hobby", "jogging",
            ],
        )],
    ),
    rule(
        Tag::NatureAnimals,
        &[Words(English, &["dog", "cat", "animal", "bird", "horse", "cow", "fish"])],
    ),
    rule(
        Tag::PlantsEnvironment,
        &[Words(
            English,
            &[
                "tree", "flower", "plant", "forest", "environment", "recycle", "climate", "nature",
            ],
        )],
    ),
    rule(
        Tag::CultureEvents,
        &[Words(
            English,
            &[
                "culture", "festival", "concert", "museum", "theatre", "cinema", "party", "event",
                "club", "disco",
            ],
        )],
    ),
    rule(
        Tag::ServicesAuthorities,
        &[Words(
            English,
            &[
                "police", "passport office", "embassy", "authority", "government", "office",
                "court", "confirmation", "validity", "citizenship", "naturalization", "document",
                "certificate", "permit", "registration",
            ],
        )],
    ),
    rule(
        Tag::SafetyEmergency,
        &[Words(English, &["emergency", "help", "fire", "danger", "ambulance"])],
    ),
    rule(
        Tag::LawRules,
        &[Words(English, &["law", "rule", "fine", "ticket", "illegal"])],
    ),
    rule(
        Tag::ReligionCulture,
        &[Words(English, &["church", "mosque", "prayer", "religion"])],
    ),
];

/// Normalized fields the topical rules read.
#[derive(Debug, Clone, Default)]
pub struct TopicInput {
    pub word: NormalizedText,
    pub english: NormalizedText,
    pub persian: NormalizedText,
}

impl TopicInput {
    pub fn new(word: &str, translation_en: &str, translation_fa: &str) -> Self {
        Self {
            word: NormalizedText::new(word),
            english: NormalizedText::new(translation_en),
            persian: NormalizedText::new(translation_fa),
        }
    }

    /// Same translations with the source word blanked out.
    pub fn translations_only(&self) -> Self {
        Self {
            word: NormalizedText::default(),
            english: self.english.clone(),
            persian: self.persian.clone(),
        }
    }

    fn field(&self, field: Field) -> &NormalizedText {
        match field {
            Field::Word => &self.word,
            Field::English => &self.english,
            Field::Persian => &self.persian,
        }
    }
}

impl Probe {
    pub fn matches(&self, input: &TopicInput, lexicon: &Lexicon) -> bool {
        match *self {
            InLexicon(field, class) => lexicon.is(class, &input.field(field).lower),
            Words(field, keywords) => has_any_word(&input.field(field).matched, keywords),
            Substring(field, needles) => contains_any(&input.field(field).matched, needles),
            MatchFormIs(field, values) => values.contains(&input.field(field).matched.as_str()),
            LowerIs(field, values) => values.contains(&input.field(field).lower.as_str()),
            NumericLiteral(field) => NUMERIC_LITERAL.is_match(&input.field(field).lower),
            QuestionLike => {
                input.word.raw.contains('?')
                    || WH_OPENINGS
                        .iter()
                        .any(|opening| input.english.lower.starts_with(opening))
                    || lexicon.is(WordClass::QuestionWords, &input.word.first)
            }
            CountryName => {
                CAPITALIZED_WORD.is_match(&input.word.collapsed)
                    && lexicon.is(WordClass::CountriesEn, &input.english.lower)
            }
        }
    }
}

impl TopicRule {
    pub fn matches(&self, input: &TopicInput, lexicon: &Lexicon) -> bool {
        self.probes.iter().any(|probe| probe.matches(input, lexicon))
    }
}

fn extra_topic_matches(topic: &ExtraTopic, input: &TopicInput) -> bool {
    has_any_word(&input.field(Field::English).matched, &topic.english)
        || has_any_word(&input.field(Field::Persian).matched, &topic.persian)
        || contains_any(&input.field(Field::Word).matched, &topic.source)
}

/// Infer the topic of an entry: the tag of the first matching rule, if any.
///
/// The result is a topical tag or [`Tag::ProperNoun`].
pub fn infer_topic(input: &TopicInput, lexicon: &Lexicon) -> Option<Tag> {
    if let Some(rule) = TOPIC_RULES.iter().find(|rule| rule.matches(input, lexicon)) {
        trace!("topic rule for {} matched {:?}", rule.tag, input.word.collapsed);
        return Some(rule.tag);
    }
    lexicon
        .extra_topics()
        .iter()
        .find(|topic| extra_topic_matches(topic, input))
        .map(|topic| topic.tag)
}
