mod shared;

use std::collections::BTreeSet;

use ngidx::{build_index, search, search_detailed, SearchPath};

use shared::{fallback, fields, get_test_corpus, Conversation};

fn phones(hits: &[&Conversation]) -> BTreeSet<String> {
    hits.iter()
        .filter_map(|conversation| conversation.phone.clone())
        .collect()
}

#[test]
fn test_every_substring_hits_exact_path() {
    let corpus = get_test_corpus();
    let index = build_index(&corpus, fields);

    for (position, conversation) in corpus.iter().enumerate() {
        for field in fields(conversation) {
            let Some(value) = field.value() else {
                continue;
            };

            let value = value.to_lowercase();
            let chars = value.chars().collect::<Vec<_>>();

            for start in 0..chars.len() {
                for end in (start + 3)..=chars.len() {
                    let needle = chars[start..end].iter().collect::<String>();
                    let result = search_detailed(&needle, &index, &corpus, fallback);

                    assert_eq!(result.path(), SearchPath::Exact, "needle: {needle}");
                    assert!(
                        result.hits().iter().any(|hit| std::ptr::eq(*hit, &corpus[position])),
                        "needle {needle} misses record {position}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_short_value_exact_match() {
    let corpus = get_test_corpus();
    let index = build_index(&corpus, fields);

    let result = search_detailed("JO", &index, &corpus, fallback);
    assert_eq!(result.path(), SearchPath::Exact);
    assert_eq!(phones(result.hits()), BTreeSet::from(["+61491570156".to_string()]));

    // "o" is shorter than "jo", only found by scanning keys.
    let result = search_detailed("o", &index, &corpus, fallback);
    assert_eq!(result.path(), SearchPath::Substring);
}

#[test]
fn test_empty_query_returns_everything() {
    let corpus = get_test_corpus();
    let index = build_index(&corpus, fields);

    let hits = search("", &index, &corpus, fallback);
    assert_eq!(hits.len(), corpus.len());
    assert_eq!(phones(&hits), phones(&corpus.iter().collect::<Vec<_>>()));
}

#[test]
fn test_no_match_is_empty() {
    let corpus = get_test_corpus();
    let index = build_index(&corpus, fields);

    assert!(search("zebra crossing", &index, &corpus, fallback).is_empty());
    assert!(search("qx", &index, &corpus, fallback).is_empty());
}

#[test]
fn test_shared_prefix_returns_both() {
    let corpus = get_test_corpus();
    let index = build_index(&corpus, fields);

    let hits = search("priy", &index, &corpus, fallback);
    assert_eq!(
        phones(&hits),
        BTreeSet::from(["+919812345670".to_string(), "+919812300000".to_string()])
    );

    let hits = search("98123", &index, &corpus, fallback);
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_rebuild_answers_identically() {
    let corpus = get_test_corpus();
    let first = build_index(&corpus, fields);
    let second = build_index(&corpus, fields);

    assert_eq!(first, second);

    for query in ["hot", "o", "+91", "zzz", "Tech", ""] {
        let left = search(query, &first, &corpus, fallback);
        let right = search(query, &second, &corpus, fallback);
        assert_eq!(left, right, "query: {query}");
    }
}

#[test]
fn test_results_are_in_record_order() {
    let corpus = get_test_corpus();
    let index = build_index(&corpus, fields);

    let hits = search("hot", &index, &corpus, fallback);
    let positions = hits
        .iter()
        .filter_map(|hit| corpus.iter().position(|conversation| std::ptr::eq(conversation, *hit)))
        .collect::<Vec<_>>();

    assert_eq!(positions, vec![0, 5]);
}
