//! RDF term and triple types
//!
//! Terms are kept in the shape they are written in. Absolute IRIs and quoted
//! strings wrap the oxrdf primitives; prefixed names and typed literals use
//! the prefixes declared in the output header.

use std::fmt;

use oxrdf::{Literal as OxLiteral, NamedNode as OxNamedNode};
use thiserror::Error;

use super::builder::EntityKind;

/// Term construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// A value required to build a term was empty
    #[error("Empty value for {0}")]
    EmptyValue(String),

    /// Wrong number of identifiers for an entity URI
    #[error("{kind} URI takes {expected} identifier(s), got {found}")]
    KeyArity {
        kind: EntityKind,
        expected: usize,
        found: usize,
    },

    /// The minted string is not a valid IRI
    #[error("Invalid IRI <{iri}>: {reason}")]
    InvalidIri { iri: String, reason: String },

    /// A triple term carries no content
    #[error("Empty {0} in triple")]
    EmptyTerm(&'static str),
}

pub type TermResult<T> = Result<T, TermError>;

/// `rdf:type`
pub const RDF_TYPE: &str = "rdf:type";
/// `rdfs:label`
pub const RDFS_LABEL: &str = "rdfs:label";
/// `xsd:integer`
pub const XSD_INTEGER: &str = "xsd:integer";
/// `xsd:double`
pub const XSD_DOUBLE: &str = "xsd:double";
/// `xsd:date`
pub const XSD_DATE: &str = "xsd:date";

/// RDF term as it appears in the triple stream
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Absolute IRI, written `<iri>`
    Iri(OxNamedNode),
    /// Prefixed name such as `rdf:type` or `:name`
    Prefixed(String),
    /// Plain string literal, written quoted and escaped
    Literal(OxLiteral),
    /// Literal with a prefixed datatype, written `"lexical"^^datatype`
    Typed {
        lexical: String,
        datatype: &'static str,
    },
    /// Boolean literal, written bare
    Boolean(bool),
}

impl Term {
    /// Create an IRI term, failing unless `iri` is an absolute IRI
    pub fn iri(iri: impl Into<String>) -> TermResult<Self> {
        let iri = iri.into();
        match OxNamedNode::new(iri.as_str()) {
            Ok(node) => Ok(Term::Iri(node)),
            Err(e) => Err(TermError::InvalidIri {
                iri,
                reason: e.to_string(),
            }),
        }
    }

    /// Create a plain string literal
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(OxLiteral::new_simple_literal(value))
    }

    /// Create a prefixed-name term
    pub fn prefixed(name: impl Into<String>) -> Self {
        Term::Prefixed(name.into())
    }

    /// Name in the default (`:`) namespace
    pub fn local(name: &str) -> Self {
        Term::Prefixed(format!(":{}", name))
    }

    /// True when the term has nothing to write.
    ///
    /// An empty plain literal still writes as `""` and is not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Term::Prefixed(name) => name.is_empty(),
            Term::Typed { lexical, .. } => lexical.is_empty(),
            Term::Iri(_) | Term::Literal(_) | Term::Boolean(_) => false,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(node) => write!(f, "<{}>", node.as_str()),
            Term::Prefixed(name) => f.write_str(name),
            Term::Literal(literal) => write!(f, "{}", literal),
            Term::Typed { lexical, datatype } => {
                let quoted = OxLiteral::new_simple_literal(lexical.as_str());
                write!(f, "{}^^{}", quoted, datatype)
            }
            Term::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// RDF triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject
    pub subject: Term,
    /// Predicate
    pub predicate: Term,
    /// Object
    pub object: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Fail if any of the three terms is empty
    pub fn validate(&self) -> TermResult<()> {
        if self.subject.is_empty() {
            return Err(TermError::EmptyTerm("subject"));
        }
        if self.predicate.is_empty() {
            return Err(TermError::EmptyTerm("predicate"));
        }
        if self.object.is_empty() {
            return Err(TermError::EmptyTerm("object"));
        }
        Ok(())
    }
}

/// Tab separated, terminated by ` .`
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{} .", self.subject, self.predicate, self.object)
    }
}
