//! Property-based tests for slugs and the merge steps.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use proptest::prelude::*;
    use serde_json::{Map, Value};

    use crate::normalize::{created_at_of, slug_of};
    use crate::pipeline::{dedupe_by_slug, sort_newest_first};
    use crate::reader::Record;
    use crate::util::ids::slug_from_path;

    fn record(slug: &str, created_at: &str, seq: usize) -> Record {
        let mut map = Map::new();
        map.insert("slug".to_string(), Value::String(slug.to_string()));
        map.insert("createdAt".to_string(), Value::String(created_at.to_string()));
        map.insert("seq".to_string(), Value::from(seq));
        map
    }

    fn records() -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(("[a-d]", "202[0-3]"), 0..20).prop_map(|pairs| {
            pairs
                .iter()
                .enumerate()
                .map(|(i, (slug, year))| record(slug, year, i))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn test_slug_charset(stem in "[A-Za-z0-9À-ÿ _.()'!-]{0,24}") {
            let slug = slug_from_path(&PathBuf::from(format!("{stem}.json")));
            prop_assert!(slug
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
            prop_assert!(!slug.chars().any(char::is_uppercase));
        }

        #[test]
        fn test_dedupe_unique_and_first_wins(input in records()) {
            let output = dedupe_by_slug(input.clone());
            let mut seen = HashSet::new();
            for r in &output {
                prop_assert!(seen.insert(slug_of(r).unwrap().to_string()));
                let first = input
                    .iter()
                    .find(|i| slug_of(i) == slug_of(r))
                    .unwrap();
                prop_assert_eq!(first, r);
            }
            let distinct: HashSet<_> = input.iter().filter_map(slug_of).collect();
            prop_assert_eq!(output.len(), distinct.len());
        }

        #[test]
        fn test_sort_descending_and_stable(mut input in records()) {
            sort_newest_first(&mut input);
            for pair in input.windows(2) {
                let (a, b) = (created_at_of(&pair[0]), created_at_of(&pair[1]));
                prop_assert!(a >= b);
                if a == b {
                    prop_assert!(pair[0]["seq"].as_u64() < pair[1]["seq"].as_u64());
                }
            }
        }
    }
}
