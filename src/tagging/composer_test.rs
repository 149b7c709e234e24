#[cfg(test)]
mod tests {
    use crate::tagging::{
        Composition, Entry, LabelSet, Lexicon, MAX_TAGS, MIN_TAGS, Tag, compose, tag_entry,
    };
    use serde_json::json;

    fn labels(entry: Entry<'_>) -> Vec<&'static str> {
        tag_entry(&entry).names()
    }

    // ── worked examples ─────────────────────────────────────────────

    #[test]
    fn test_question_phrase_without_keywords() {
        assert_eq!(
            labels(Entry::new("Kommst du mit?")),
            vec!["questions_answers", "conversation_phrases", "noun"]
        );
    }

    #[test]
    fn test_lone_preposition() {
        assert_eq!(
            labels(Entry::new("mit").with_en("with")),
            vec!["conversation_phrases", "preposition"]
        );
    }

    #[test]
    fn test_infinitive_with_food_keyword() {
        assert_eq!(
            labels(Entry::new("schlürfen").with_en("to drink")),
            vec!["food_drink", "verb"]
        );
        assert_eq!(
            labels(Entry::new("trinken").with_en("to drink")),
            vec!["food_drink", "verb", "irregular_verb"]
        );
    }

    #[test]
    fn test_daily_life_fallback_for_concrete_noun() {
        assert_eq!(
            labels(Entry::new("Schrank").with_en("cupboard").with_level("A1")),
            vec!["daily_life", "noun"]
        );
        assert_eq!(
            labels(Entry::new("Schrank").with_en("cupboard").with_level("A2.1")),
            vec!["daily_life", "noun"]
        );
    }

    #[test]
    fn test_unmatched_word_is_uncategorized() {
        assert_eq!(labels(Entry::new("Xyzzy")), vec!["uncategorized"]);
        assert_eq!(labels(Entry::new("qwrtz")), vec!["uncategorized"]);
        assert_eq!(labels(Entry::default()), vec!["uncategorized"]);
    }

    // ── fallback guards ─────────────────────────────────────────────

    #[test]
    fn test_fallback_needs_early_level() {
        assert_eq!(
            labels(Entry::new("Schrank").with_en("cupboard").with_level("B1")),
            vec!["uncategorized"]
        );
        assert_eq!(
            labels(Entry::new("Schrank").with_en("cupboard")),
            vec!["uncategorized"]
        );
    }

    #[test]
    fn test_fallback_skips_abstract_nouns() {
        assert_eq!(
            labels(Entry::new("Erfahrung").with_en("experience").with_level("A1")),
            vec!["uncategorized"]
        );
        assert_eq!(
            labels(Entry::new("Freiheit").with_en("freedom").with_level("A2")),
            vec!["uncategorized"]
        );
    }

    #[test]
    fn test_fallback_skips_function_words() {
        // "und" is conversational, never daily_life.
        assert_eq!(
            labels(Entry::new("und").with_en("and").with_level("A1")),
            vec!["conversation_phrases", "a1_core", "conjunction"]
        );
    }

    #[test]
    fn test_core_verb_is_daily_life() {
        assert_eq!(
            labels(Entry::new("machen").with_en("to make, to do").with_level("A1")),
            vec!["daily_life", "verb"]
        );
    }

    // ── reflexive verbs ─────────────────────────────────────────────

    #[test]
    fn test_reflexive_with_topic() {
        assert_eq!(
            labels(Entry::new("sich freuen").with_en("to be happy").with_level("A1")),
            vec!["feelings_emotions", "verb", "reflexive_verb"]
        );
    }

    #[test]
    fn test_reflexive_with_fallback() {
        assert_eq!(
            labels(Entry::new("sich beeilen").with_en("to hurry").with_level("A1")),
            vec!["daily_life", "verb", "reflexive_verb"]
        );
    }

    #[test]
    fn test_reflexive_carries_no_other_grammar() {
        let grammar_tags = |labels: &LabelSet| {
            labels
                .tags()
                .iter()
                .filter(|t| t.family() == crate::tagging::TagFamily::Grammatical)
                .copied()
                .collect::<Vec<_>>()
        };
        for (word, en) in [
            ("sich waschen", "to wash oneself"),
            ("sich setzen", "to sit down"),
            ("sich anmelden", "to register"),
        ] {
            let result = tag_entry(&Entry::new(word).with_en(en).with_level("A1"));
            assert!(
                matches!(result, LabelSet::Classified(_)),
                "{word} should be classified, got {result:?}"
            );
            assert_eq!(grammar_tags(&result), vec![Tag::Verb, Tag::ReflexiveVerb]);
        }
    }

    // ── proper nouns ────────────────────────────────────────────────

    #[test]
    fn test_proper_noun_without_secondary_topic() {
        assert_eq!(
            labels(Entry::new("Berlin").with_en("Berlin").with_level("A1")),
            vec!["proper_noun", "noun"]
        );
    }

    #[test]
    fn test_proper_noun_with_secondary_topic() {
        assert_eq!(
            labels(Entry::new("Hamburg").with_en("Hamburg (city)")),
            vec!["places_buildings", "proper_noun", "noun"]
        );
        assert_eq!(
            labels(Entry::new("Deutsch").with_en("German")),
            vec!["school_learning", "proper_noun", "noun"]
        );
    }

    // ── conversation signals ────────────────────────────────────────

    #[test]
    fn test_greeting_adds_conversation() {
        assert_eq!(
            labels(Entry::new("Guten Tag!").with_en("Good day!")),
            vec!["greetings_politeness", "conversation_phrases", "noun"]
        );
    }

    #[test]
    fn test_exclamation_phrase() {
        assert_eq!(
            labels(Entry::new("Komm schnell!").with_en("come quickly!")),
            vec!["conversation_phrases", "noun"]
        );
        // A single exclaimed word is not a phrase.
        assert_eq!(labels(Entry::new("Xyzzy!")), vec!["uncategorized"]);
    }

    #[test]
    fn test_greetings_listed_before_verb() {
        assert_eq!(
            labels(Entry::new("bitten").with_en("to ask")),
            vec!["greetings_politeness", "conversation_phrases", "verb"]
        );
    }

    // ── administrative tags ─────────────────────────────────────────

    #[test]
    fn test_loanword() {
        assert_eq!(
            labels(Entry::new("Taxi").with_en("taxi")),
            vec!["city_transport", "loanword_international", "noun"]
        );
    }

    #[test]
    fn test_abbreviation_alone_is_refused() {
        assert_eq!(
            labels(Entry::new("EU").with_en("European Union")),
            vec!["uncategorized"]
        );
    }

    #[test]
    fn test_refusal_discards_grammar_candidates() {
        let lexicon = Lexicon::german();
        assert_eq!(
            compose(&Entry::new("Xyzzy").with_level("C1"), &lexicon),
            Composition::Uncategorized
        );
    }

    #[test]
    fn test_malformed_record_is_uncategorized() {
        let record = json!({"id": 3, "word": 5, "translation_en": ["x"]});
        let entry = Entry::from_record(record.as_object().unwrap());
        assert_eq!(tag_entry(&entry), LabelSet::Uncategorized);
    }

    // ── properties ──────────────────────────────────────────────────

    fn sample_entries() -> Vec<Entry<'static>> {
        vec![
            Entry::new("Haus").with_en("house").with_level("A1"),
            Entry::new("der").with_en("the").with_level("A1"),
            Entry::new("können").with_en("can").with_level("A1"),
            Entry::new("Wie geht's?").with_en("How are you?").with_level("A1"),
            Entry::new("zwölf").with_en("twelve").with_level("A1"),
            Entry::new("Krankenhaus").with_en("hospital").with_level("A2"),
            Entry::new("pünktlich").with_en("punctual").with_level("A2"),
            Entry::new("sich anmelden").with_en("to register").with_level("A2"),
            Entry::new("Computer").with_en("computer").with_level("A1"),
            Entry::new("leider").with_en("unfortunately").with_level("A1"),
            Entry::new("Österreich").with_en("Austria").with_level("A1"),
            Entry::new("Tschüss!").with_en("Bye!").with_level("A1"),
            Entry::new("nicht").with_en("not").with_level("A1"),
            Entry::new("3,5").with_level("A1"),
            Entry::new("GmbH").with_en("limited company"),
            Entry::new("   "),
        ]
    }

    #[test]
    fn test_tagging_is_idempotent() {
        for entry in sample_entries() {
            assert_eq!(tag_entry(&entry), tag_entry(&entry), "entry {entry:?}");
        }
    }

    #[test]
    fn test_cardinality_invariant() {
        for entry in sample_entries() {
            match tag_entry(&entry) {
                LabelSet::Classified(tags) => {
                    assert!(
                        (MIN_TAGS..=MAX_TAGS).contains(&tags.len()),
                        "entry {entry:?} got {tags:?}"
                    );
                    assert!(!tags.contains(&Tag::Uncategorized));
                    let mut unique = tags.clone();
                    unique.sort();
                    unique.dedup();
                    assert_eq!(unique.len(), tags.len(), "duplicates in {tags:?}");
                }
                LabelSet::Uncategorized => {}
            }
        }
    }

    #[test]
    fn test_labels_parse_back_into_taxonomy() {
        for entry in sample_entries() {
            for name in tag_entry(&entry).names() {
                assert!(Tag::parse(name).is_some(), "unknown label {name}");
            }
        }
    }
}
