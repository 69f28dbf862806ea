//! Relational dump step
//!
//! Runs the `sqlite3` shell once per table and redirects its pipe-delimited
//! output to `<dump_dir>/<Table>`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use super::{ConvertError, ConvertResult};

/// Dump directory used when none is given: the database path without its
/// extension, or with `.dump` appended when it has none
pub fn default_dump_dir(database: &Path) -> PathBuf {
    match database.extension() {
        Some(_) => database.with_extension(""),
        None => database.with_extension("dump"),
    }
}

/// Dumps tables of one database through an external tool
#[derive(Debug, Clone)]
pub struct RdbDumper {
    database: PathBuf,
    dump_dir: PathBuf,
    tool: PathBuf,
}

impl RdbDumper {
    /// Create the dumper, creating `dump_dir` if it does not exist
    pub fn new(
        database: impl Into<PathBuf>,
        dump_dir: impl Into<PathBuf>,
        tool: impl Into<PathBuf>,
    ) -> ConvertResult<Self> {
        let dump_dir = dump_dir.into();
        if !dump_dir.is_dir() {
            fs::create_dir_all(&dump_dir).map_err(|source| ConvertError::Io {
                path: dump_dir.clone(),
                source,
            })?;
        }
        Ok(Self {
            database: database.into(),
            dump_dir,
            tool: tool.into(),
        })
    }

    pub fn dump_dir(&self) -> &Path {
        &self.dump_dir
    }

    /// Path of the dump file for `table`
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dump_dir.join(table)
    }

    /// Dump one table, returning the file written
    pub fn dump_table(&self, table: &str) -> ConvertResult<PathBuf> {
        let path = self.table_path(table);
        let statement = format!("select * from {};", table);
        info!(
            "{} {} '{}' > {}",
            self.tool.display(),
            self.database.display(),
            statement,
            path.display()
        );

        let output = File::create(&path).map_err(|source| ConvertError::Io {
            path: path.clone(),
            source,
        })?;
        let status = Command::new(&self.tool)
            .arg(&self.database)
            .arg(&statement)
            .stdin(Stdio::null())
            .stdout(Stdio::from(output))
            .status()
            .map_err(|source| ConvertError::DumpSpawn {
                tool: self.tool.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ConvertError::Dump {
                table: table.to_string(),
                status: status.to_string(),
            });
        }
        debug!("Dumped {} to {}", table, path.display());
        Ok(path)
    }

    /// Dump every table in order
    pub fn dump_all<'a>(&self, tables: impl IntoIterator<Item = &'a str>) -> ConvertResult<()> {
        for table in tables {
            self.dump_table(table)?;
        }
        Ok(())
    }
}
