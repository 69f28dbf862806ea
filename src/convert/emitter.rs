//! Triple emitter
//!
//! Writes one `S\tP\tO .` line per triple after checking that no term is
//! empty.

use std::io::Write;

use crate::rdf::{PrefixMap, Triple};

use super::ConvertResult;

/// Line-oriented triple writer
pub struct TripleEmitter<W: Write> {
    out: W,
    emitted: u64,
}

impl<W: Write> TripleEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, emitted: 0 }
    }

    /// Write `@prefix` declarations followed by a blank line
    pub fn write_header(&mut self, prefixes: &PrefixMap) -> ConvertResult<()> {
        self.out.write_all(prefixes.turtle_header().as_bytes())?;
        Ok(())
    }

    /// Validate and write one triple
    pub fn emit(&mut self, triple: &Triple) -> ConvertResult<()> {
        triple.validate()?;
        writeln!(self.out, "{}", triple)?;
        self.emitted += 1;
        Ok(())
    }

    /// Number of triples written so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn flush(&mut self) -> ConvertResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
