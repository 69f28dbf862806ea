//! GA4GH graph RDF tools
//!
//! Two independent utilities:
//!
//! - [`convert`]: dumps the tables of a GA4GH graph relational database to
//!   pipe-delimited files and maps every row to RDF triples with a fixed,
//!   per-table rule
//! - [`sparql`]: a thin HTTP client for a SPARQL endpoint that returns raw
//!   JSON/XML results or renders them as tab-separated text
//!
//! Both build on [`rdf`], which mints entity URIs and literals and writes
//! terms in their tab-separated triple form.
//!
//! ## Example Usage
//!
//! ```rust
//! use ga4gh_rdf::convert::{schema, Row};
//!
//! let rule = schema::lookup("Allele").unwrap();
//! let triples = rule.convert(&Row::parse("3|5|rs42")).unwrap();
//!
//! assert_eq!(triples.len(), 4);
//! assert_eq!(
//!     triples[0].to_string(),
//!     "<http://ga4gh.org/graph/rdf/Allele/3>\trdf:type\t:Allele ."
//! );
//! ```

#![warn(clippy::all)]

pub mod convert;
pub mod rdf;
pub mod sparql;

// Re-export main types for convenience
pub use convert::{
    ConvertConfig, ConvertError, ConvertResult, ConvertSummary, Converter, RdbDumper,
    TableRule, TripleEmitter,
};

pub use rdf::{EntityKind, PrefixMap, Term, TermError, TermResult, Triple};

pub use sparql::{
    ClientConfig, QueryOutput, ResultFormat, SparqlClient, SparqlError, SparqlResult,
    TabularResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
