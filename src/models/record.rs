use serde_json::{Map, Value};

use crate::tagging::LabelSet;

/// Field holding the labels in the dataset.
pub const CATEGORY_FIELD: &str = "category";

/// Legacy field holding free-form tags, folded into `category`.
pub const LEGACY_TAGS_FIELD: &str = "tags";

/// Return a copy of `record` whose `category` is `labels`.
///
/// The new field takes the position of the first legacy `category` or
/// `tags` field; both legacy fields are dropped. Without either, `category`
/// is appended. Every other field keeps its value and position.
pub fn upsert_category(record: &Map<String, Value>, labels: &LabelSet) -> Map<String, Value> {
    let mut out = Map::with_capacity(record.len() + 1);
    let mut inserted = false;

    for (key, value) in record {
        if key == CATEGORY_FIELD || key == LEGACY_TAGS_FIELD {
            if !inserted {
                out.insert(CATEGORY_FIELD.to_string(), labels.to_json());
                inserted = true;
            }
            continue;
        }
        out.insert(key.clone(), value.clone());
    }

    if !inserted {
        out.insert(CATEGORY_FIELD.to_string(), labels.to_json());
    }
    out
}

/// Display identifier of a record: strings as-is, other scalars in JSON
/// form, missing or null as `""`.
pub fn record_id(record: &Map<String, Value>) -> String {
    match record.get("id") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
    }
}

/// The `word` field for reports, `""` when absent or not a string.
pub fn record_word(record: &Map<String, Value>) -> &str {
    record
        .get("word")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::Tag;
    use serde_json::json;

    fn labels() -> LabelSet {
        LabelSet::Classified(vec![Tag::FoodDrink, Tag::Noun])
    }

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_replaces_legacy_category_in_place() {
        let record = json!({"id": 1, "word": "Brot", "category": "A1", "level": "A1"});
        let out = upsert_category(record.as_object().unwrap(), &labels());
        assert_eq!(keys(&out), vec!["id", "word", "category", "level"]);
        assert_eq!(out["category"], json!(["food_drink", "noun"]));
    }

    #[test]
    fn test_folds_tags_and_category_into_one_field() {
        let record = json!({"word": "Brot", "tags": ["x"], "level": "A1", "category": "A1"});
        let out = upsert_category(record.as_object().unwrap(), &labels());
        assert_eq!(keys(&out), vec!["word", "category", "level"]);
        assert_eq!(out["category"], json!(["food_drink", "noun"]));
    }

    #[test]
    fn test_appends_when_no_legacy_field() {
        let record = json!({"word": "Brot", "translation_en": "bread"});
        let out = upsert_category(record.as_object().unwrap(), &LabelSet::Uncategorized);
        assert_eq!(keys(&out), vec!["word", "translation_en", "category"]);
        assert_eq!(out["category"], json!(["uncategorized"]));
    }

    #[test]
    fn test_passthrough_fields_untouched() {
        let record = json!({"word": "Brot", "audio": {"de": "brot.mp3"}, "translation_fa": "نان"});
        let out = upsert_category(record.as_object().unwrap(), &labels());
        assert_eq!(out["audio"], json!({"de": "brot.mp3"}));
        assert_eq!(out["translation_fa"], json!("نان"));
    }

    #[test]
    fn test_record_id_forms() {
        let id = |v: Value| record_id(v.as_object().unwrap());
        assert_eq!(id(json!({"id": "w-12"})), "w-12");
        assert_eq!(id(json!({"id": 12})), "12");
        assert_eq!(id(json!({"id": null})), "");
        assert_eq!(id(json!({})), "");
    }

    #[test]
    fn test_record_word() {
        assert_eq!(record_word(json!({"word": "Haus"}).as_object().unwrap()), "Haus");
        assert_eq!(record_word(json!({"word": 3}).as_object().unwrap()), "");
    }
}
