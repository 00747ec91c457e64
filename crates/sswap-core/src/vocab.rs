//! Vocabulary IRIs

pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
}

pub mod owl {
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    pub const COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    pub const CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
    pub const MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    pub const MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
}

pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// Whether `datatype` is an XSD integer-derived type
    pub fn is_integer_type(datatype: &str) -> bool {
        matches!(datatype, INTEGER | INT | LONG | NON_NEGATIVE_INTEGER)
    }

    /// Whether `iri` lives in the XSD namespace
    pub fn is_builtin(iri: &str) -> bool {
        iri.starts_with(NS)
    }
}

/// SSWAP protocol vocabulary
pub mod sswap {
    pub const NS: &str = "http://sswapmeet.sswap.info/sswap/";
    pub const RESOURCE: &str = "http://sswapmeet.sswap.info/sswap/Resource";
    pub const PROVIDER: &str = "http://sswapmeet.sswap.info/sswap/Provider";
    pub const GRAPH: &str = "http://sswapmeet.sswap.info/sswap/Graph";
    pub const SUBJECT: &str = "http://sswapmeet.sswap.info/sswap/Subject";
    pub const OBJECT: &str = "http://sswapmeet.sswap.info/sswap/Object";
    pub const PROVIDED_BY: &str = "http://sswapmeet.sswap.info/sswap/providedBy";
    pub const OPERATES_ON: &str = "http://sswapmeet.sswap.info/sswap/operatesOn";
    pub const HAS_MAPPING: &str = "http://sswapmeet.sswap.info/sswap/hasMapping";
    pub const MAPS_TO: &str = "http://sswapmeet.sswap.info/sswap/mapsTo";
    pub const NAME: &str = "http://sswapmeet.sswap.info/sswap/name";
    pub const ONE_LINE_DESCRIPTION: &str = "http://sswapmeet.sswap.info/sswap/oneLineDescription";
}
