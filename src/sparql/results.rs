//! SPARQL-results JSON → tab-separated text

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ResultsDocument {
    head: Head,
    results: Bindings,
}

#[derive(Debug, Deserialize)]
struct Head {
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Bindings {
    bindings: Vec<HashMap<String, Binding>>,
}

/// One bound value; missing keys read as empty
#[derive(Debug, Default, Deserialize)]
struct Binding {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    value: String,
}

impl Binding {
    fn render(&self) -> String {
        if self.kind == "uri" {
            format!("<{}>", self.value.replace('\\', ""))
        } else {
            self.value.replace("\\/", "/")
        }
    }
}

/// Tabular rendering of a results document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabularResult {
    /// Header line plus one line per solution
    Table(String),
    /// The body was not SPARQL-results JSON; renders as empty text
    Malformed(String),
}

impl TabularResult {
    /// Text to print; empty for a malformed body
    pub fn as_text(&self) -> &str {
        match self {
            TabularResult::Table(text) => text,
            TabularResult::Malformed(_) => "",
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, TabularResult::Malformed(_))
    }
}

impl fmt::Display for TabularResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// Render a SPARQL-results JSON body as tab-separated text.
///
/// Columns follow `head.vars`. URI bindings become `<value>` with backslashes
/// removed; other values have `\/` unescaped to `/`. Unbound variables are
/// empty cells.
pub fn format_json(body: &str) -> TabularResult {
    let document: ResultsDocument = match serde_json::from_str(body) {
        Ok(document) => document,
        Err(e) => return TabularResult::Malformed(e.to_string()),
    };

    let vars = &document.head.vars;
    let mut text = vars.join("\t");
    text.push('\n');

    let unbound = Binding::default();
    for solution in &document.results.bindings {
        let cells: Vec<String> = vars
            .iter()
            .map(|var| solution.get(var).unwrap_or(&unbound).render())
            .collect();
        text.push_str(&cells.join("\t"));
        text.push('\n');
    }

    TabularResult::Table(text)
}
