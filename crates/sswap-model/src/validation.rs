//! Validation gate applied to dereferenced documents
//!
//! Only the pass/fail outcome matters to the object-graph layer; the
//! report carries enough detail to explain a rejection.

use serde::{Deserialize, Serialize};
use sswap_core::vocab::{owl, rdf, rdfs};
use sswap_core::{Term, Triple};
use std::collections::HashSet;
use std::fmt;

/// OWL expressivity profiles, ordered from least to most expressive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressivityProfile {
    Lite,
    Dl,
    Full,
}

impl fmt::Display for ExpressivityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressivityProfile::Lite => write!(f, "OWL Lite"),
            ExpressivityProfile::Dl => write!(f, "OWL DL"),
            ExpressivityProfile::Full => write!(f, "OWL Full"),
        }
    }
}

const DL_CONSTRUCTS: [&str; 5] = [
    owl::UNION_OF,
    owl::COMPLEMENT_OF,
    owl::ONE_OF,
    owl::HAS_VALUE,
    owl::DISJOINT_WITH,
];

const CARDINALITIES: [&str; 3] = [owl::CARDINALITY, owl::MIN_CARDINALITY, owl::MAX_CARDINALITY];

/// Measure the expressivity profile a set of triples requires.
///
/// Full: a declared class is also used as a property, or is typed by another
/// declared class. DL: union, complement, enumeration, value restrictions,
/// disjointness, or cardinalities above one. Anything else is Lite.
pub fn classify(triples: &[Triple]) -> ExpressivityProfile {
    let classes: HashSet<&Term> = triples
        .iter()
        .filter(|t| {
            t.predicate == rdf::TYPE
                && matches!(t.object.as_iri(), Some(owl::CLASS) | Some(rdfs::CLASS))
        })
        .map(|t| &t.subject)
        .collect();

    let punned_property = triples
        .iter()
        .any(|t| classes.contains(&Term::Iri(t.predicate.clone())));
    let metaclass = triples.iter().any(|t| {
        t.predicate == rdf::TYPE && classes.contains(&t.subject) && classes.contains(&t.object)
    });
    if punned_property || metaclass {
        return ExpressivityProfile::Full;
    }

    let dl = triples.iter().any(|t| {
        DL_CONSTRUCTS.contains(&t.predicate.as_str())
            || (CARDINALITIES.contains(&t.predicate.as_str())
                && t.object
                    .as_literal()
                    .and_then(|l| l.lexical.trim().parse::<u64>().ok())
                    .map_or(false, |n| n > 1))
    });

    if dl {
        ExpressivityProfile::Dl
    } else {
        ExpressivityProfile::Lite
    }
}

/// Violation Level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationLevel {
    Violation,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub focus_node: Option<String>,
    pub message: String,
    pub severity: ViolationLevel,
}

/// Validation Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub conforms: bool,
    pub profile: ExpressivityProfile,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn conforming(profile: ExpressivityProfile) -> Self {
        Self {
            conforms: true,
            profile,
            violations: Vec::new(),
        }
    }

    /// Record a violation; only `ViolationLevel::Violation` breaks conformance
    pub fn push(&mut self, violation: Violation) {
        if violation.severity == ViolationLevel::Violation {
            self.conforms = false;
        }
        self.violations.push(violation);
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.conforms &= other.conforms;
        self.profile = self.profile.max(other.profile);
        self.violations.extend(other.violations);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            if self.conforms { "conforms" } else { "does not conform" },
            self.profile
        )?;
        for violation in &self.violations {
            write!(f, "; {}", violation.message)?;
            if let Some(node) = &violation.focus_node {
                write!(f, " [{}]", node)?;
            }
        }
        Ok(())
    }
}

/// Validates the content of a fetched document before it is committed
pub trait ProfileValidator {
    fn validate(&self, document_uri: &str, triples: &[Triple]) -> ValidationReport;
}

/// Rejects documents more expressive than the required profile
#[derive(Debug, Clone, Copy)]
pub struct ExpressivityValidator {
    pub required: ExpressivityProfile,
}

impl ProfileValidator for ExpressivityValidator {
    fn validate(&self, document_uri: &str, triples: &[Triple]) -> ValidationReport {
        let profile = classify(triples);
        let mut report = ValidationReport::conforming(profile);
        if profile > self.required {
            report.push(Violation {
                focus_node: Some(document_uri.to_string()),
                message: format!("document requires {} but {} is the maximum allowed", profile, self.required),
                severity: ViolationLevel::Violation,
            });
        }
        report
    }
}

/// Requires at least one triple whose subject is the document URI
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfDescriptionValidator;

impl ProfileValidator for SelfDescriptionValidator {
    fn validate(&self, document_uri: &str, triples: &[Triple]) -> ValidationReport {
        let mut report = ValidationReport::conforming(classify(triples));
        let subject = Term::iri(document_uri);
        if !triples.iter().any(|t| t.subject == subject) {
            report.push(Violation {
                focus_node: Some(document_uri.to_string()),
                message: "document does not describe its own URI".to_string(),
                severity: ViolationLevel::Violation,
            });
        }
        report
    }
}

/// Runs several validators and merges their reports
#[derive(Default)]
pub struct CompositeValidator {
    validators: Vec<Box<dyn ProfileValidator>>,
}

impl CompositeValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, validator: Box<dyn ProfileValidator>) {
        self.validators.push(validator);
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl ProfileValidator for CompositeValidator {
    fn validate(&self, document_uri: &str, triples: &[Triple]) -> ValidationReport {
        let mut report = ValidationReport::conforming(ExpressivityProfile::Lite);
        if self.validators.is_empty() {
            report.profile = classify(triples);
        }
        for validator in &self.validators {
            report.merge(validator.validate(document_uri, triples));
        }
        report
    }
}
