//! GA4GH graph database → RDF conversion
//!
//! The pipeline:
//! 1. dump every known table to a pipe-delimited file (`sqlite3`)
//! 2. write the `@prefix` header
//! 3. read each dump file line by line, in table order, and map every row to
//!    triples through the table's rule
//!
//! Conversion is fail-fast: the first invalid row aborts the run with an
//! error naming the table and line.
//!
//! # Example
//!
//! ```rust
//! use ga4gh_rdf::convert::{schema, Converter};
//!
//! let mut converter = Converter::new(Vec::new());
//! let rule = schema::lookup("VariantSet_CallSet_Join").unwrap();
//! converter.convert_reader(rule, "5|9\n".as_bytes()).unwrap();
//!
//! let out = String::from_utf8(converter.into_inner()).unwrap();
//! assert_eq!(out.lines().count(), 2);
//! ```

pub mod dump;
pub mod emitter;
pub mod mapper;
pub mod schema;

pub use dump::{default_dump_dir, RdbDumper};
pub use emitter::TripleEmitter;
pub use mapper::{Row, DUMP_DELIMITER};
pub use schema::{FieldKind, TableRule, TableShape, TABLES};

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::rdf::{PrefixMap, TermError};

/// Conversion errors
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A row could not be converted
    #[error("{table} line {line}: {source}")]
    Row {
        table: String,
        line: usize,
        #[source]
        source: TermError,
    },

    /// A dump line could not be read, e.g. it is not valid UTF-8
    #[error("{table} line {line}: {source}")]
    Read {
        table: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A term failed validation outside of row context
    #[error("Invalid triple: {0}")]
    Invalid(#[from] TermError),

    /// Reading a dump file or creating the dump directory failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the triple stream failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// The dump tool could not be started
    #[error("Cannot run {}: {source}", tool.display())]
    DumpSpawn {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dump tool failed for a table
    #[error("Dump of table {table} failed: {status}")]
    Dump { table: String, status: String },

    /// No rule for a table name
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

impl ConvertError {
    /// Attach table and line to a validation failure
    fn at_row(self, table: &str, line: usize) -> Self {
        match self {
            ConvertError::Invalid(source) => ConvertError::Row {
                table: table.to_string(),
                line,
                source,
            },
            other => other,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Conversion run configuration
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// SQLite database file
    pub database: PathBuf,
    /// Directory holding one dump file per table
    pub dump_dir: PathBuf,
    /// Dump tool executable
    pub sqlite3: PathBuf,
    /// Convert existing dump files without running the dump tool
    pub skip_dump: bool,
}

impl ConvertConfig {
    /// Configuration with the default dump directory and `sqlite3` from `PATH`
    pub fn new(database: impl Into<PathBuf>) -> Self {
        let database = database.into();
        Self {
            dump_dir: default_dump_dir(&database),
            database,
            sqlite3: PathBuf::from("sqlite3"),
            skip_dump: false,
        }
    }

    pub fn with_dump_dir(mut self, dump_dir: impl Into<PathBuf>) -> Self {
        self.dump_dir = dump_dir.into();
        self
    }

    pub fn with_sqlite3(mut self, sqlite3: impl Into<PathBuf>) -> Self {
        self.sqlite3 = sqlite3.into();
        self
    }

    pub fn skip_dump(mut self, skip: bool) -> Self {
        self.skip_dump = skip;
        self
    }
}

/// Totals of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub tables: usize,
    pub rows: usize,
    pub triples: u64,
}

/// Streams dump rows through the table rules into a triple writer
pub struct Converter<W: Write> {
    emitter: TripleEmitter<W>,
}

impl<W: Write> Converter<W> {
    pub fn new(out: W) -> Self {
        Self {
            emitter: TripleEmitter::new(out),
        }
    }

    /// Write the graph `@prefix` header
    pub fn write_header(&mut self) -> ConvertResult<()> {
        self.emitter.write_header(&PrefixMap::graph_output())
    }

    /// Convert every row of `reader`; returns the number of rows converted.
    ///
    /// Blank lines are skipped. Line numbers in errors are 1-based.
    pub fn convert_reader<R: BufRead>(
        &mut self,
        rule: &TableRule,
        reader: R,
    ) -> ConvertResult<usize> {
        let mut rows = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ConvertError::Read {
                table: rule.name.to_string(),
                line: index + 1,
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            self.convert_line(rule, &line)
                .map_err(|e| e.at_row(rule.name, index + 1))?;
            rows += 1;
        }
        Ok(rows)
    }

    fn convert_line(&mut self, rule: &TableRule, line: &str) -> ConvertResult<()> {
        let triples = rule.convert(&Row::parse(line))?;
        for triple in &triples {
            self.emitter.emit(triple)?;
        }
        Ok(())
    }

    /// Convert one dump file
    pub fn convert_file(&mut self, rule: &TableRule, path: &Path) -> ConvertResult<usize> {
        let file = File::open(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.convert_reader(rule, BufReader::new(file))
    }

    /// Convert the dump files of all tables in `dump_dir`, in table order
    pub fn convert_dir(&mut self, dump_dir: &Path) -> ConvertResult<ConvertSummary> {
        let mut summary = ConvertSummary::default();
        for table in schema::table_names() {
            let rule = schema::lookup(table)
                .ok_or_else(|| ConvertError::UnknownTable(table.to_string()))?;
            info!("Converting {} ...", table);
            let rows = self.convert_file(rule, &dump_dir.join(table))?;
            debug!("{}: {} rows", table, rows);
            summary.tables += 1;
            summary.rows += rows;
        }
        summary.triples = self.emitter.emitted();
        Ok(summary)
    }

    pub fn flush(&mut self) -> ConvertResult<()> {
        self.emitter.flush()
    }

    pub fn into_inner(self) -> W {
        self.emitter.into_inner()
    }
}

/// Run the whole pipeline: dump (unless skipped), header, all tables
pub fn run<W: Write>(config: &ConvertConfig, out: W) -> ConvertResult<ConvertSummary> {
    let dumper = RdbDumper::new(&config.database, &config.dump_dir, &config.sqlite3)?;
    if config.skip_dump {
        info!("Using existing dump in {}", dumper.dump_dir().display());
    } else {
        dumper.dump_all(schema::table_names())?;
    }

    let mut converter = Converter::new(out);
    converter.write_header()?;
    let summary = converter.convert_dir(dumper.dump_dir())?;
    converter.flush()?;
    info!(
        "Converted {} rows from {} tables into {} triples",
        summary.rows, summary.tables, summary.triples
    );
    Ok(summary)
}
