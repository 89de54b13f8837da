//! Integration tests for the cache contract
//!
//! Every scenario runs against both strategies through `Box<dyn LruCache>`.

use recency_cache::{
    build_cache, CacheConfig, CacheError, LruCache, RecencyListCache, Strategy,
    TimestampOrderedCache,
};

const STRATEGIES: [Strategy; 2] = [Strategy::RecencyList, Strategy::TimestampOrdered];

// == Helper Functions ==
fn new_cache(capacity: usize, strategy: Strategy) -> Box<dyn LruCache<String, String>> {
    build_cache(&CacheConfig::new(capacity).with_strategy(strategy))
        .expect("capacity is positive")
}

fn put(cache: &mut dyn LruCache<String, String>, key: &str, value: &str) {
    cache.put(key.to_string(), value.to_string());
}

fn get(cache: &mut dyn LruCache<String, String>, key: &str) -> Option<String> {
    cache.get(&key.to_string()).cloned()
}

// == Construction Tests ==

#[test]
fn test_zero_capacity_rejected() {
    for strategy in STRATEGIES {
        let result = build_cache::<String, String>(&CacheConfig::new(0).with_strategy(strategy));
        assert!(
            matches!(result, Err(CacheError::InvalidArgument(_))),
            "{:?} accepted zero capacity",
            strategy
        );
    }

    assert!(RecencyListCache::<String, String>::new(0).is_err());
    assert!(TimestampOrderedCache::<String, String>::new(0).is_err());
}

#[test]
fn test_negative_capacity_rejected_from_config() {
    let result = serde_json::from_str::<CacheConfig>(r#"{"capacity": -1}"#);
    assert!(result.is_err());
}

#[test]
fn test_capacity_is_fixed() {
    for strategy in STRATEGIES {
        let mut cache = new_cache(3, strategy);
        assert_eq!(cache.capacity(), 3);

        for i in 0..10 {
            put(cache.as_mut(), &format!("key{}", i), "value");
            assert_eq!(cache.capacity(), 3);
        }
    }
}

// == Eviction Tests ==

#[test]
fn test_add_past_capacity() {
    for strategy in STRATEGIES {
        let mut cache = new_cache(2, strategy);
        put(cache.as_mut(), "a", "val1");
        put(cache.as_mut(), "b", "val2");
        put(cache.as_mut(), "c", "val3");
        put(cache.as_mut(), "d", "val4");

        assert_eq!(get(cache.as_mut(), "a"), None, "{:?}", strategy);
        assert_eq!(get(cache.as_mut(), "b"), None, "{:?}", strategy);
        assert_eq!(get(cache.as_mut(), "c").as_deref(), Some("val3"));
        assert_eq!(get(cache.as_mut(), "d").as_deref(), Some("val4"));
    }
}

#[test]
fn test_add_past_capacity_with_get() {
    for strategy in STRATEGIES {
        let mut cache = new_cache(3, strategy);
        put(cache.as_mut(), "a", "val1");
        put(cache.as_mut(), "b", "val2");
        put(cache.as_mut(), "c", "val3");
        // Reading "a" gives it a new lease
        get(cache.as_mut(), "a");
        put(cache.as_mut(), "d", "val4");

        assert_eq!(get(cache.as_mut(), "b"), None, "{:?}", strategy);
        assert!(get(cache.as_mut(), "a").is_some());
        assert!(get(cache.as_mut(), "c").is_some());
        assert!(get(cache.as_mut(), "d").is_some());
    }
}

#[test]
fn test_overwrite_does_not_evict() {
    for strategy in STRATEGIES {
        let mut cache = new_cache(2, strategy);
        put(cache.as_mut(), "a", "val1");
        put(cache.as_mut(), "b", "val2");
        put(cache.as_mut(), "a", "val1b");

        assert_eq!(cache.len(), 2);
        assert_eq!(get(cache.as_mut(), "a").as_deref(), Some("val1b"));
        assert_eq!(get(cache.as_mut(), "b").as_deref(), Some("val2"));
    }
}

#[test]
fn test_overwrite_promotes() {
    for strategy in STRATEGIES {
        let mut cache = new_cache(2, strategy);
        put(cache.as_mut(), "a", "val1");
        put(cache.as_mut(), "b", "val2");
        put(cache.as_mut(), "a", "val3");
        put(cache.as_mut(), "c", "val4");

        assert!(cache.contains(&"a".to_string()), "{:?}", strategy);
        assert!(!cache.contains(&"b".to_string()), "{:?}", strategy);
    }
}

#[test]
fn test_capacity_one() {
    for strategy in STRATEGIES {
        let mut cache = new_cache(1, strategy);
        put(cache.as_mut(), "a", "val1");
        put(cache.as_mut(), "b", "val2");

        assert_eq!(cache.len(), 1);
        assert_eq!(get(cache.as_mut(), "a"), None);
        assert_eq!(get(cache.as_mut(), "b").as_deref(), Some("val2"));
    }
}

#[test]
fn test_miss_on_empty_cache() {
    for strategy in STRATEGIES {
        let mut cache = new_cache(4, strategy);

        assert!(cache.is_empty());
        assert_eq!(get(cache.as_mut(), "missing"), None);
        assert!(cache.is_empty());
    }
}

#[test]
fn test_strategies_agree_on_scripted_sequence() {
    let mut list = new_cache(3, Strategy::RecencyList);
    let mut stamped = new_cache(3, Strategy::TimestampOrdered);

    let script: &[(&str, Option<&str>)] = &[
        ("a", Some("1")),
        ("b", Some("2")),
        ("a", None),
        ("c", Some("3")),
        ("d", Some("4")),
        ("b", None),
        ("c", None),
        ("e", Some("5")),
        ("a", None),
        ("d", None),
        ("a", Some("6")),
        ("c", None),
        ("e", None),
    ];

    for (key, value) in script {
        match value {
            Some(value) => {
                put(list.as_mut(), key, value);
                put(stamped.as_mut(), key, value);
            }
            None => {
                assert_eq!(
                    get(list.as_mut(), key),
                    get(stamped.as_mut(), key),
                    "strategies disagree on {}",
                    key
                );
            }
        }
        assert_eq!(list.len(), stamped.len());
    }
}
