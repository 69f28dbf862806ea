//! SPARQL endpoint client
//!
//! A thin HTTP client for a remote SPARQL endpoint:
//! - prepends configured `PREFIX` declarations to the query text
//! - sends it as a GET `query=` parameter with an `Accept` header per format
//! - returns the raw body (JSON/XML) or renders SPARQL-results JSON as
//!   tab-separated text
//!
//! # Example
//!
//! ```rust,no_run
//! use ga4gh_rdf::sparql::{ClientConfig, ResultFormat, SparqlClient};
//!
//! # async fn run() -> ga4gh_rdf::sparql::SparqlResult<()> {
//! let client = SparqlClient::new(ClientConfig::from_env())?;
//! let output = client
//!     .query("select * where { ?s ?p ?o . } limit 10", ResultFormat::Table)
//!     .await?;
//! print!("{}", output.as_text());
//! # Ok(())
//! # }
//! ```

mod client;
mod results;

pub use client::{ClientConfig, QueryOutput, SparqlClient, DEFAULT_ENDPOINT};
pub use results::{format_json, TabularResult};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// SPARQL client errors
#[derive(Error, Debug)]
pub enum SparqlError {
    /// Transport failure or timeout
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL cannot be used
    #[error("Invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },
}

pub type SparqlResult<T> = Result<T, SparqlError>;

/// Requested result serialization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultFormat {
    /// SPARQL-results JSON rendered as tab-separated text
    #[default]
    Table,
    /// Raw `application/sparql-results+json`
    Json,
    /// Raw `application/sparql-results+xml`
    Xml,
    /// Unrecognized format name; the raw JSON body is passed through
    Other(String),
}

impl ResultFormat {
    /// `Accept` header value
    pub fn accept(&self) -> &'static str {
        match self {
            ResultFormat::Xml => "application/sparql-results+xml",
            _ => "application/sparql-results+json",
        }
    }

    /// True when the body is returned unmodified
    pub fn is_raw(&self) -> bool {
        !matches!(self, ResultFormat::Table)
    }

    /// Parse an optional format argument; `None` selects the tabular form
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => ResultFormat::Table,
            Some(name) => name.parse().unwrap_or(ResultFormat::Table),
        }
    }

    /// A format name is accepted if it mentions `xml` or `json`
    pub fn is_known(name: &str) -> bool {
        name.contains("xml") || name.contains("json")
    }
}

impl FromStr for ResultFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "json" => ResultFormat::Json,
            "xml" => ResultFormat::Xml,
            other => ResultFormat::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultFormat::Table => f.write_str("table"),
            ResultFormat::Json => f.write_str("json"),
            ResultFormat::Xml => f.write_str("xml"),
            ResultFormat::Other(name) => f.write_str(name),
        }
    }
}

/// Query for subjects with a literal object equal to `keyword`, with all of
/// their triples
pub fn find_query(keyword: &str) -> String {
    let escaped = keyword.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "select ?s ?p ?o where {{ ?s ?t '{}'. ?s ?p ?o . }}",
        escaped
    )
}

/// Default `head` page size
pub const HEAD_LIMIT: u64 = 20;
/// Default `head` offset
pub const HEAD_OFFSET: u64 = 1;

/// Query for a page of arbitrary triples
pub fn head_query(limit: u64, offset: u64) -> String {
    format!(
        "select ?s ?p ?o where {{ ?s ?p ?o . }} offset {} limit {}",
        offset, limit
    )
}
