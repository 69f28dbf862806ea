//! URI and literal builders
//!
//! Every entity URI is minted here so that a foreign key in one table
//! resolves to exactly the URI the referenced table mints for its own key.

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

use super::types::{Term, TermError, TermResult, XSD_DATE, XSD_DOUBLE, XSD_INTEGER};

/// Base of all entity URIs
pub const GRAPH_BASE: &str = "http://ga4gh.org/graph/rdf";

/// Base of NCBI taxonomy URIs
pub const TAXONOMY_BASE: &str = "http://identifiers.org/taxonomy";

/// Characters escaped inside one URI path segment. `/` and `%` are included so
/// that distinct identifiers never collapse into the same path.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'#')
    .add(b'?');

/// Same as [`SEGMENT`] but keeps `/` for file paths.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

static INTEGER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)(\d+)").expect("valid regex"));

static REAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
});

/// Kind of entity that owns a URI template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Allele,
    AlleleCall,
    AllelePathItem,
    CallSet,
    Fasta,
    GraphJoin,
    Reference,
    ReferenceAccession,
    ReferenceSet,
    ReferenceSetAccession,
    Sequence,
    VariantSet,
}

impl EntityKind {
    /// Path segment used in the URI template
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Allele => "Allele",
            EntityKind::AlleleCall => "AlleleCall",
            EntityKind::AllelePathItem => "AllelePathItem",
            EntityKind::CallSet => "CallSet",
            EntityKind::Fasta => "FASTA",
            EntityKind::GraphJoin => "GraphJoin",
            EntityKind::Reference => "Reference",
            EntityKind::ReferenceAccession => "ReferenceAccession",
            EntityKind::ReferenceSet => "ReferenceSet",
            EntityKind::ReferenceSetAccession => "ReferenceSetAccession",
            EntityKind::Sequence => "Sequence",
            EntityKind::VariantSet => "VariantSet",
        }
    }

    /// Number of identifiers in the URI template.
    ///
    /// `AlleleCall` is keyed by `(alleleID, callSetID)` and `AllelePathItem`
    /// by `(alleleID, pathItemIndex)`; everything else by a single ID.
    pub fn key_arity(&self) -> usize {
        match self {
            EntityKind::AlleleCall | EntityKind::AllelePathItem => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mint `<GRAPH_BASE/Kind/id[/id2]>`.
///
/// All identifiers must be non-empty and their count must match the kind's
/// template.
pub fn entity_uri(kind: EntityKind, ids: &[&str]) -> TermResult<Term> {
    if ids.len() != kind.key_arity() {
        return Err(TermError::KeyArity {
            kind,
            expected: kind.key_arity(),
            found: ids.len(),
        });
    }
    let mut iri = format!("{}/{}", GRAPH_BASE, kind.as_str());
    for id in ids {
        if id.is_empty() {
            return Err(TermError::EmptyValue(format!("{} identifier", kind)));
        }
        iri.push('/');
        iri.extend(utf8_percent_encode(id, SEGMENT));
    }
    Term::iri(iri)
}

/// Taxonomy URI on identifiers.org.
///
/// The identifier is used as is, so anything that does not form a valid IRI
/// (whitespace, `<`, ...) is rejected.
pub fn taxonomy_uri(taxon_id: &str) -> TermResult<Term> {
    Term::iri(format!("{}/{}", TAXONOMY_BASE, taxon_id))
}

/// `file://` URI for a path stored in the database
pub fn file_uri(path: &str) -> TermResult<Term> {
    Term::iri(format!("file://{}", utf8_percent_encode(path, PATH)))
}

/// Quoted string literal; escaping happens when the term is written.
pub fn quote_literal(value: &str) -> Term {
    Term::literal(value)
}

/// `"N"^^xsd:integer` from the leading integer of `value`, `0` if none
pub fn integer_literal(value: &str) -> Term {
    Term::Typed {
        lexical: loose_integer(value),
        datatype: XSD_INTEGER,
    }
}

/// `"R"^^xsd:double` from the leading number of `value`, `0.0` if none
pub fn real_literal(value: &str) -> Term {
    Term::Typed {
        lexical: loose_real(value),
        datatype: XSD_DOUBLE,
    }
}

/// `true` if `value` contains `TRUE` (any case) or `1`, `false` otherwise
pub fn boolean_literal(value: &str) -> Term {
    let truthy = value.contains('1') || value.to_ascii_uppercase().contains("TRUE");
    Term::Boolean(truthy)
}

/// `"value"^^xsd:date`, format not checked
pub fn date_literal(value: &str) -> Term {
    Term::Typed {
        lexical: value.to_string(),
        datatype: XSD_DATE,
    }
}

/// Canonical decimal digits of the leading integer in `value`.
///
/// Kept as text so database integers of any width survive unchanged.
fn loose_integer(value: &str) -> String {
    let Some(caps) = INTEGER_PREFIX.captures(value) else {
        return "0".to_string();
    };
    let digits = caps[2].trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if &caps[1] == "-" {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

fn loose_real(value: &str) -> String {
    let parsed = REAL_PREFIX
        .find(value)
        .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
        .unwrap_or(0.0);
    if parsed.is_nan() {
        "NaN".to_string()
    } else if parsed.is_infinite() {
        let inf = if parsed > 0.0 { "INF" } else { "-INF" };
        inf.to_string()
    } else {
        format!("{:?}", parsed)
    }
}
