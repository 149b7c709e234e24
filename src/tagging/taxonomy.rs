//! The closed tag vocabulary.
//!
//! Every label the tagger can emit is a [`Tag`] variant. Strings coming from
//! outside the crate (override files, legacy dataset fields) are converted
//! through [`Tag::parse`], which is the only place a free-form name becomes a
//! tag. Unknown names are rejected there and never reach the pipeline.

use serde::Serialize;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Category label (type-safe, not stringly-typed)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    // Topical
    DailyLife,
    ConversationPhrases,
    GreetingsPoliteness,
    QuestionsAnswers,
    TimeDate,
    NumbersMath,
    ColorsShapes,
    DaysMonthsSeasons,
    Weather,
    DirectionsNavigation,
    PlacesBuildings,
    CityTransport,
    TravelHolidays,
    HomeHousehold,
    FurnitureRooms,
    KitchenCooking,
    FoodDrink,
    ShoppingMoney,
    ClothingFashion,
    HealthBody,
    FeelingsEmotions,
    PeopleFamily,
    Relationships,
    SchoolLearning,
    WorkOffice,
    JobsProfessions,
    TechnologyInternet,
    MediaSocial,
    HobbiesSports,
    NatureAnimals,
    PlantsEnvironment,
    CultureEvents,
    ServicesAuthorities,
    ReligionCulture,
    SafetyEmergency,
    LawRules,

    // Grammatical function
    Verb,
    Noun,
    Adjective,
    Adverb,
    Pronoun,
    Article,
    Preposition,
    Conjunction,
    ModalVerb,
    SeparableVerb,
    ReflexiveVerb,
    IrregularVerb,
    QuestionWord,
    Negation,
    Numbers,
    TimeExpression,
    PlaceExpression,

    // Administrative / quality
    #[strum(serialize = "a1_core")]
    #[serde(rename = "a1_core")]
    A1Core,
    ProperNoun,
    LoanwordInternational,
    Abbreviation,
    Uncategorized,
}

/// The three partitions of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFamily {
    Topical,
    Grammatical,
    Administrative,
}

impl Tag {
    /// Convert an external label name into a tag.
    ///
    /// Returns `None` for anything outside the taxonomy; callers drop such
    /// names instead of propagating them.
    pub fn parse(name: &str) -> Option<Tag> {
        name.trim().parse().ok()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn family(self) -> TagFamily {
        use Tag::*;
        match self {
            Verb | Noun | Adjective | Adverb | Pronoun | Article | Preposition | Conjunction
            | ModalVerb | SeparableVerb | ReflexiveVerb | IrregularVerb | QuestionWord
            | Negation | Numbers | TimeExpression | PlaceExpression => TagFamily::Grammatical,
            A1Core | ProperNoun | LoanwordInternational | Abbreviation | Uncategorized => {
                TagFamily::Administrative
            }
            _ => TagFamily::Topical,
        }
    }

    pub fn is_topical(self) -> bool {
        self.family() == TagFamily::Topical
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output order of the priority reducer.
///
/// Topics come first in business order, then administrative tags, then
/// grammar. `Uncategorized` is deliberately absent: the sentinel never
/// competes with real labels.
pub const PRIORITY_ORDER: &[Tag] = &[
    // topical
    Tag::GreetingsPoliteness,
    Tag::QuestionsAnswers,
    Tag::ConversationPhrases,
    Tag::TimeDate,
    Tag::DaysMonthsSeasons,
    Tag::NumbersMath,
    Tag::ColorsShapes,
    Tag::Weather,
    Tag::DirectionsNavigation,
    Tag::PlacesBuildings,
    Tag::CityTransport,
    Tag::TravelHolidays,
    Tag::HomeHousehold,
    Tag::FurnitureRooms,
    Tag::KitchenCooking,
    Tag::FoodDrink,
    Tag::ShoppingMoney,
    Tag::ClothingFashion,
    Tag::HealthBody,
    Tag::FeelingsEmotions,
    Tag::PeopleFamily,
    Tag::Relationships,
    Tag::SchoolLearning,
    Tag::WorkOffice,
    Tag::JobsProfessions,
    Tag::TechnologyInternet,
    Tag::MediaSocial,
    Tag::HobbiesSports,
    Tag::NatureAnimals,
    Tag::PlantsEnvironment,
    Tag::CultureEvents,
    Tag::ServicesAuthorities,
    Tag::ReligionCulture,
    Tag::SafetyEmergency,
    Tag::LawRules,
    Tag::DailyLife,
    // admin/core
    Tag::ProperNoun,
    Tag::LoanwordInternational,
    Tag::Abbreviation,
    Tag::A1Core,
    // grammar
    Tag::Verb,
    Tag::ModalVerb,
    Tag::ReflexiveVerb,
    Tag::IrregularVerb,
    Tag::SeparableVerb,
    Tag::Noun,
    Tag::Adjective,
    Tag::Adverb,
    Tag::QuestionWord,
    Tag::Negation,
    Tag::Numbers,
    Tag::TimeExpression,
    Tag::PlaceExpression,
    Tag::Pronoun,
    Tag::Article,
    Tag::Preposition,
    Tag::Conjunction,
];
