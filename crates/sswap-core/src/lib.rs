//! # SSWAP Core
//!
//! RDF term model shared by the SSWAP object-graph crates: identity keys,
//! literals, triples, vocabulary constants and a small JSON-LD codec.

pub mod model;
pub mod vocab;
pub mod jsonld;

pub use model::*;
pub use jsonld::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{rdf, rdfs, xsd};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    mod rdf_key_tests {
        use super::*;

        #[test]
        fn test_same_uri_keys_are_equal() {
            let k1 = RdfKey::uri("http://example.org/a");
            let k2 = RdfKey::uri("http://example.org/a");
            assert_eq!(k1, k2);
            assert_eq!(hash_of(&k1), hash_of(&k2));
        }

        #[test]
        fn test_variant_participates_in_equality() {
            let uri = RdfKey::uri("abc");
            let blank = RdfKey::blank("abc");
            assert_ne!(uri, blank);
            assert_eq!(uri.value(), blank.value());
        }

        #[test]
        fn test_value_is_unmodified() {
            let key = RdfKey::uri("http://example.org/Thing#x");
            assert_eq!(key.value(), "http://example.org/Thing#x");
            assert_eq!(key.as_uri(), Some("http://example.org/Thing#x"));
            assert!(!key.is_blank());
        }

        #[test]
        fn test_fresh_blank_keys_differ() {
            let k1 = RdfKey::fresh_blank();
            let k2 = RdfKey::fresh_blank();
            assert!(k1.is_blank());
            assert_ne!(k1, k2);
            assert!(k1.as_uri().is_none());
        }

        #[test]
        fn test_display_and_term() {
            let blank = RdfKey::blank("n1");
            assert_eq!(blank.to_string(), "_:n1");
            assert_eq!(blank.to_term(), Term::BlankNode("n1".to_string()));
            assert_eq!(RdfKey::uri("urn:x").to_term(), Term::iri("urn:x"));
        }

        #[test]
        fn test_try_uri() {
            assert!(RdfKey::try_uri("http://example.org/a").is_ok());
            assert!(RdfKey::try_uri("urn:isbn:123").is_ok());
            assert_eq!(
                RdfKey::try_uri("relative/path"),
                Err(CoreError::InvalidIri("relative/path".to_string()))
            );
            assert!(RdfKey::try_uri("_:b0").is_err());
            assert!(RdfKey::try_uri("http://example.org/a b").is_err());
            assert!(RdfKey::try_uri("1http://x").is_err());
        }

        #[test]
        fn test_try_uri_rejects_malformed_iris() {
            for bad in [
                "http://example.org/<x>",
                "http:",
                "http://exa\"mple.org/",
                "urn:a{b}",
                "http://example.org/a|b",
                "",
            ] {
                assert_eq!(RdfKey::try_uri(bad), Err(CoreError::InvalidIri(bad.to_string())), "{bad}");
            }
            assert!(RdfKey::try_uri("http://example.org/caf\u{e9}#frag").is_ok());
            assert!(RdfKey::try_uri("mailto:someone@example.org").is_ok());
        }

        #[test]
        fn test_serde_round_trip_keeps_variant() {
            let key = RdfKey::blank("b7");
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, r#"{"kind":"blank","value":"b7"}"#);
            let back: RdfKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    mod literal_tests {
        use super::*;

        #[test]
        fn test_scalar_readers() {
            assert_eq!(Literal::from("hi").as_str(), Some("hi"));
            assert_eq!(Literal::from(42i64).as_integer(), Some(42));
            assert_eq!(Literal::from(42i64).as_double(), Some(42.0));
            assert_eq!(Literal::from(2.5f64).as_double(), Some(2.5));
            assert_eq!(Literal::from(true).as_boolean(), Some(true));
            assert_eq!(Literal::typed("1", xsd::BOOLEAN).as_boolean(), Some(true));
        }

        #[test]
        fn test_scalar_readers_reject_wrong_types() {
            assert_eq!(Literal::from("42").as_integer(), None);
            assert_eq!(Literal::from(1i64).as_str(), None);
            assert_eq!(Literal::from(1i64).as_boolean(), None);
            assert_eq!(Literal::typed("abc", xsd::INTEGER).as_integer(), None);
        }

        #[test]
        fn test_lang_string() {
            let lit = Literal::lang_string("chat", "fr");
            assert_eq!(lit.datatype, rdf::LANG_STRING);
            assert_eq!(lit.as_str(), Some("chat"));
            assert_eq!(lit.to_string(), "\"chat\"@fr");
        }

        #[test]
        fn test_display_escapes_quotes() {
            let lit = Literal::string("say \"hi\"");
            assert_eq!(
                lit.to_string(),
                "\"say \\\"hi\\\"\"^^<http://www.w3.org/2001/XMLSchema#string>"
            );
        }
    }

    mod term_tests {
        use super::*;

        #[test]
        fn test_term_keys() {
            assert_eq!(Term::iri("urn:a").to_key(), Some(RdfKey::uri("urn:a")));
            assert_eq!(Term::BlankNode("x".into()).to_key(), Some(RdfKey::blank("x")));
            assert_eq!(Term::literal("x").to_key(), None);
        }

        #[test]
        fn test_plain_string() {
            assert_eq!(Term::iri("urn:a").to_plain_string(), "urn:a");
            assert_eq!(Term::BlankNode("x".into()).to_plain_string(), "_:x");
        }

        #[test]
        fn test_triple_display() {
            let triple = Triple::new(Term::iri("urn:s"), rdfs::LABEL, Term::literal("l"));
            assert_eq!(
                triple.to_string(),
                "<urn:s> <http://www.w3.org/2000/01/rdf-schema#label> \"l\"^^<http://www.w3.org/2001/XMLSchema#string> ."
            );
        }
    }

    mod jsonld_tests {
        use super::*;

        #[test]
        fn test_parse_graph_document() {
            let doc = parse_jsonld(
                r#"{
                    "@context": {},
                    "@graph": [
                        {
                            "@id": "http://example.org/svc",
                            "@type": "http://sswapmeet.sswap.info/sswap/Resource",
                            "http://www.w3.org/2000/01/rdf-schema#label": "Service",
                            "http://example.org/count": 3,
                            "http://example.org/ref": { "@id": "_:b1" },
                            "http://example.org/typed": { "@value": "7", "@type": "http://www.w3.org/2001/XMLSchema#int" }
                        }
                    ]
                }"#,
            )
            .unwrap();

            let triples = jsonld_to_triples(&doc).unwrap();
            assert_eq!(triples.len(), 5);

            let subject = Term::iri("http://example.org/svc");
            assert!(triples.contains(&Triple::new(
                subject.clone(),
                rdf::TYPE,
                Term::iri("http://sswapmeet.sswap.info/sswap/Resource")
            )));
            assert!(triples.contains(&Triple::new(subject.clone(), rdfs::LABEL, Term::literal("Service"))));
            assert!(triples.contains(&Triple::new(
                subject.clone(),
                "http://example.org/count",
                Term::literal(3i64)
            )));
            assert!(triples.contains(&Triple::new(
                subject.clone(),
                "http://example.org/ref",
                Term::BlankNode("b1".to_string())
            )));
            assert!(triples.contains(&Triple::new(
                subject,
                "http://example.org/typed",
                Term::Literal(Literal::typed("7", xsd::INT))
            )));
        }

        #[test]
        fn test_missing_id_is_an_error() {
            let doc = parse_jsonld(r#"{ "@graph": [ { "http://example.org/p": "x" } ] }"#).unwrap();
            assert!(jsonld_to_triples(&doc).is_err());
        }

        #[test]
        fn test_single_node_document() {
            let doc = parse_jsonld(r#"{ "@id": "urn:a", "urn:p": ["x", "y"] }"#).unwrap();
            let triples = jsonld_to_triples(&doc).unwrap();
            assert_eq!(triples.len(), 2);
        }

        #[test]
        fn test_serialized_triples_parse_back() {
            let triples = vec![
                Triple::new(Term::iri("urn:a"), rdf::TYPE, Term::iri("urn:C")),
                Triple::new(Term::iri("urn:a"), rdfs::LABEL, Term::literal("A")),
                Triple::new(Term::iri("urn:a"), rdfs::LABEL, Term::Literal(Literal::lang_string("Ah", "fr"))),
            ];
            let doc = triples_to_jsonld(&triples);
            let text = serialize_jsonld(&doc).unwrap();
            let parsed = jsonld_to_triples(&parse_jsonld(&text).unwrap()).unwrap();
            assert_eq!(parsed.len(), 3);
            for triple in &triples {
                assert!(parsed.contains(triple), "missing {}", triple);
            }
        }
    }
}
