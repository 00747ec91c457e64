use proptest::prelude::*;
use sswap_core::{RdfKey, Term};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of(key: &RdfKey) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn uri_keys_from_same_string_are_equal(path in "[a-z0-9/_-]{0,40}", fragment in "[a-z0-9]{0,8}") {
        let uri = format!("http://example.org/{}#{}", path, fragment);
        let k1 = RdfKey::uri(uri.clone());
        let k2 = RdfKey::try_uri(&uri).unwrap();
        prop_assert_eq!(&k1, &k2);
        prop_assert_eq!(hash_of(&k1), hash_of(&k2));
        prop_assert_eq!(k1.value(), uri.as_str());
    }

    #[test]
    fn uri_and_blank_keys_never_collide(value in "[a-zA-Z0-9]{1,20}") {
        prop_assert_ne!(RdfKey::uri(value.clone()), RdfKey::blank(value));
    }

    #[test]
    fn key_term_round_trip(value in "[a-zA-Z0-9]{1,20}", blank in any::<bool>()) {
        let key = if blank { RdfKey::blank(value) } else { RdfKey::uri(format!("urn:{}", value)) };
        let term: Term = (&key).into();
        prop_assert_eq!(term.to_key(), Some(key));
    }
}

#[test]
fn keys_deduplicate_in_hash_sets() {
    let mut set = HashSet::new();
    set.insert(RdfKey::uri("http://example.org/a"));
    set.insert(RdfKey::uri("http://example.org/a"));
    set.insert(RdfKey::blank("http://example.org/a"));
    assert_eq!(set.len(), 2);
}
