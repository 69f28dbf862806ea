//! ga4gh-rdb2rdf: convert a GA4GH graph database to RDF
//!
//! Dumps every table with `sqlite3`, then writes the triple stream to stdout.
//! Progress goes to stderr.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use ga4gh_rdf::convert::{self, ConvertConfig};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "ga4gh-rdb2rdf",
    version,
    about = "Convert a GA4GH graph relational database to RDF triples"
)]
struct Cli {
    /// SQLite database file
    database: PathBuf,

    /// Directory for the per-table dump files [default: database path without extension]
    dump_dir: Option<PathBuf>,

    /// sqlite3 executable used for the dump
    #[arg(long, env = "SQLITE3", default_value = "sqlite3")]
    sqlite3: PathBuf,

    /// Convert existing dump files without running sqlite3
    #[arg(long)]
    skip_dump: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ConvertConfig {
        let mut config = ConvertConfig::new(&self.database)
            .with_sqlite3(&self.sqlite3)
            .skip_dump(self.skip_dump);
        if let Some(dump_dir) = &self.dump_dir {
            config = config.with_dump_dir(dump_dir);
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let stdout = io::stdout();
    convert::run(&config, BufWriter::new(stdout.lock()))
        .with_context(|| format!("converting {}", config.database.display()))?;
    Ok(())
}
