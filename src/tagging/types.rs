//! Core types for entry tagging.
//!
//! - [`Entry`]: read-only view of one dataset record
//! - [`TagList`]: ordered tag sequence that drops repeats
//! - [`LabelSet`]: the final, length-checked result for one entry

use std::collections::HashSet;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::taxonomy::Tag;

/// The fields of a dataset record the tagger reads.
///
/// Missing or non-string values are read as `""` so one malformed record
/// never aborts a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entry<'a> {
    pub word: &'a str,
    pub translation_en: &'a str,
    pub translation_fa: &'a str,
    pub level: &'a str,
}

impl<'a> Entry<'a> {
    pub fn new(word: &'a str) -> Self {
        Self {
            word,
            ..Self::default()
        }
    }

    pub fn with_en(mut self, translation_en: &'a str) -> Self {
        self.translation_en = translation_en;
        self
    }

    pub fn with_fa(mut self, translation_fa: &'a str) -> Self {
        self.translation_fa = translation_fa;
        self
    }

    pub fn with_level(mut self, level: &'a str) -> Self {
        self.level = level;
        self
    }

    /// Borrow the tagged fields out of a JSON object.
    pub fn from_record(record: &'a Map<String, Value>) -> Self {
        let field = |key: &str| record.get(key).and_then(Value::as_str).unwrap_or_default();
        Self {
            word: field("word"),
            translation_en: field("translation_en"),
            translation_fa: field("translation_fa"),
            level: field("level"),
        }
    }
}

/// Insertion-ordered tags without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<Tag>,
    seen: HashSet<Tag>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tag` unless it is already present. Returns whether it was added.
    pub fn push(&mut self, tag: Tag) -> bool {
        if self.seen.insert(tag) {
            self.tags.push(tag);
            true
        } else {
            false
        }
    }

    /// Put `tag` in front, or move it there if already present.
    pub fn push_front(&mut self, tag: Tag) {
        if !self.seen.insert(tag) {
            self.tags.retain(|t| *t != tag);
        }
        self.tags.insert(0, tag);
    }

    pub fn extend<I: IntoIterator<Item = Tag>>(&mut self, tags: I) {
        for tag in tags {
            self.push(tag);
        }
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.seen.contains(&tag)
    }

    pub fn contains_any(&self, tags: &[Tag]) -> bool {
        tags.iter().any(|t| self.contains(*t))
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.tags.iter().copied()
    }
}

impl FromIterator<Tag> for TagList {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut list = TagList::new();
        list.extend(iter);
        list
    }
}

/// Smallest and largest number of tags a classified entry carries.
pub const MIN_TAGS: usize = 2;
pub const MAX_TAGS: usize = 5;

/// Final labels for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSet {
    /// Between [`MIN_TAGS`] and [`MAX_TAGS`] distinct tags in priority order.
    Classified(Vec<Tag>),
    /// Not enough signal to publish anything.
    Uncategorized,
}

impl LabelSet {
    /// Wrap reduced tags, collapsing anything shorter than [`MIN_TAGS`] to the
    /// sentinel.
    pub(crate) fn from_reduced(tags: Vec<Tag>) -> Self {
        debug_assert!(tags.len() <= MAX_TAGS);
        if tags.len() < MIN_TAGS {
            LabelSet::Uncategorized
        } else {
            LabelSet::Classified(tags)
        }
    }

    pub fn is_uncategorized(&self) -> bool {
        matches!(self, LabelSet::Uncategorized)
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            LabelSet::Classified(tags) => tags,
            LabelSet::Uncategorized => &[Tag::Uncategorized],
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tags().iter().map(|t| t.as_str()).collect()
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.tags()
                .iter()
                .map(|t| Value::String(t.as_str().to_string()))
                .collect(),
        )
    }
}

impl Serialize for LabelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tags().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_from_record() {
        let record = json!({
            "id": 7,
            "word": "Haus",
            "translation_en": "house",
            "level": "A1",
            "extra": [1, 2]
        });
        let entry = Entry::from_record(record.as_object().unwrap());
        assert_eq!(entry.word, "Haus");
        assert_eq!(entry.translation_en, "house");
        assert_eq!(entry.translation_fa, "");
        assert_eq!(entry.level, "A1");
    }

    #[test]
    fn test_entry_from_malformed_record() {
        let record = json!({"word": 12, "translation_en": null, "level": ["A1"]});
        let entry = Entry::from_record(record.as_object().unwrap());
        assert_eq!(entry, Entry::default());
    }

    #[test]
    fn test_tag_list_dedupes_in_first_seen_order() {
        let list: TagList = [Tag::Verb, Tag::Noun, Tag::Verb, Tag::FoodDrink, Tag::Noun]
            .into_iter()
            .collect();
        assert_eq!(list.as_slice(), &[Tag::Verb, Tag::Noun, Tag::FoodDrink]);
    }

    #[test]
    fn test_tag_list_push_front() {
        let mut list: TagList = [Tag::Noun, Tag::A1Core].into_iter().collect();
        list.push_front(Tag::DailyLife);
        assert_eq!(list.as_slice(), &[Tag::DailyLife, Tag::Noun, Tag::A1Core]);
        list.push_front(Tag::A1Core);
        assert_eq!(list.as_slice(), &[Tag::A1Core, Tag::DailyLife, Tag::Noun]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_label_set_from_reduced() {
        assert_eq!(LabelSet::from_reduced(vec![]), LabelSet::Uncategorized);
        assert_eq!(LabelSet::from_reduced(vec![Tag::Noun]), LabelSet::Uncategorized);
        assert_eq!(
            LabelSet::from_reduced(vec![Tag::FoodDrink, Tag::Noun]),
            LabelSet::Classified(vec![Tag::FoodDrink, Tag::Noun])
        );
    }

    #[test]
    fn test_label_set_serialization() {
        let labels = LabelSet::Classified(vec![Tag::FoodDrink, Tag::Verb]);
        assert_eq!(labels.to_json(), json!(["food_drink", "verb"]));
        assert_eq!(serde_json::to_value(&labels).unwrap(), json!(["food_drink", "verb"]));
        assert_eq!(LabelSet::Uncategorized.to_json(), json!(["uncategorized"]));
        assert_eq!(LabelSet::Uncategorized.names(), vec!["uncategorized"]);
    }
}
