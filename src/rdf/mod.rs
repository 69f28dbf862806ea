//! RDF terms for the GA4GH graph conversion
//!
//! This module provides:
//! - RDF terms and triples in their written, tab-separated form
//! - URI minting for every GA4GH graph entity
//! - Literal builders (quoted strings, integers, reals, booleans, dates)
//! - Prefix maps for the Turtle header and SPARQL prologues
//!
//! # Example
//!
//! ```rust
//! use ga4gh_rdf::rdf::{entity_uri, quote_literal, EntityKind, Term, Triple};
//!
//! let subject = entity_uri(EntityKind::VariantSet, &["5"]).unwrap();
//! let triple = Triple::new(subject, Term::local("name"), quote_literal("1kg"));
//!
//! assert_eq!(
//!     triple.to_string(),
//!     "<http://ga4gh.org/graph/rdf/VariantSet/5>\t:name\t\"1kg\" ."
//! );
//! ```

mod builder;
mod namespace;
mod types;

pub use types::{
    Term, TermError, TermResult, Triple, RDFS_LABEL, RDF_TYPE, XSD_DATE, XSD_DOUBLE, XSD_INTEGER,
};

pub use builder::{
    boolean_literal, date_literal, entity_uri, file_uri, integer_literal, quote_literal,
    real_literal, taxonomy_uri, EntityKind, GRAPH_BASE, TAXONOMY_BASE,
};

pub use namespace::PrefixMap;
