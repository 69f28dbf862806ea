//! RDF namespace and prefix management
//!
//! Prefixes are kept sorted by name so declarations render deterministically.

use std::collections::BTreeMap;

/// Sorted prefix → IRI map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMap {
    prefixes: BTreeMap<String, String>,
}

impl PrefixMap {
    /// Create an empty prefix map
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes declared at the top of the converted triple stream
    pub fn graph_output() -> Self {
        let mut map = Self::new();
        map.add_prefix("", format!("{}/ontology#", super::builder::GRAPH_BASE));
        map.add_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        map.add_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        map.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        map
    }

    /// Well-known vocabularies prepended by the `q` and `f` query commands
    pub fn sparql_defaults() -> Self {
        let mut map = Self::new();
        for (prefix, iri) in [
            ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
            ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
            ("owl", "http://www.w3.org/2002/07/owl#"),
            ("xsd", "http://www.w3.org/2001/XMLSchema#"),
            ("pext", "http://proton.semanticweb.org/protonext#"),
            ("psys", "http://proton.semanticweb.org/protonsys#"),
            ("xhtml", "http://www.w3.org/1999/xhtml#"),
            ("dc", "http://purl.org/dc/elements/1.1/"),
            ("dcterms", "http://purl.org/dc/terms/"),
            ("foaf", "http://xmlns.com/foaf/0.1/"),
            ("skos", "http://www.w3.org/2004/02/skos/core#"),
            ("void", "http://rdfs.org/ns/void#"),
            ("dbpedia", "http://dbpedia.org/resource/"),
            ("dbp", "http://dbpedia.org/property/"),
            ("dbo", "http://dbpedia.org/ontology/"),
            ("yago", "http://dbpedia.org/class/yago/"),
            ("fb", "http://rdf.freebase.com/ns/"),
            ("sioc", "http://rdfs.org/sioc/ns#"),
            ("geo", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
            ("geonames", "http://www.geonames.org/ontology#"),
            ("bibo", "http://purl.org/ontology/bibo/"),
            ("prism", "http://prismstandard.org/namespaces/basic/2.1/"),
        ] {
            map.add_prefix(prefix, iri);
        }
        map
    }

    /// Add a prefix, replacing any previous IRI for it
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// `PREFIX name: <iri>` lines, one per prefix, each newline-terminated
    pub fn sparql_prologue(&self) -> String {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| format!("PREFIX {}: <{}>\n", prefix, iri))
            .collect()
    }

    /// `@prefix name: <iri> .` lines followed by one blank line
    pub fn turtle_header(&self) -> String {
        let mut header: String = self
            .prefixes
            .iter()
            .map(|(prefix, iri)| format!("@prefix {}: <{}> .\n", prefix, iri))
            .collect();
        header.push('\n');
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparql_defaults() {
        let map = PrefixMap::sparql_defaults();
        assert_eq!(map.len(), 22);
        assert_eq!(
            map.get_iri("rdf"),
            Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#")
        );
        assert_eq!(map.get_iri("foaf"), Some("http://xmlns.com/foaf/0.1/"));
        assert_eq!(map.get_iri("nope"), None);
    }

    #[test]
    fn test_prologue_is_sorted() {
        let mut map = PrefixMap::new();
        map.add_prefix("zeta", "http://z.example/");
        map.add_prefix("alpha", "http://a.example/");
        assert_eq!(
            map.sparql_prologue(),
            "PREFIX alpha: <http://a.example/>\nPREFIX zeta: <http://z.example/>\n"
        );

        let prologue = PrefixMap::sparql_defaults().sparql_prologue();
        let names: Vec<&str> = prologue
            .lines()
            .filter_map(|line| line.strip_prefix("PREFIX ")?.split_once(':'))
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names.len(), 22);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_empty_prologue() {
        assert!(PrefixMap::new().is_empty());
        assert_eq!(PrefixMap::new().sparql_prologue(), "");
    }

    #[test]
    fn test_graph_output_header() {
        assert_eq!(
            PrefixMap::graph_output().turtle_header(),
            "@prefix : <http://ga4gh.org/graph/rdf/ontology#> .\n\
             @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
             @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\n"
        );
    }

    #[test]
    fn test_custom_prefix_replaces() {
        let mut map = PrefixMap::new();
        map.add_prefix("ex", "http://example.org/");
        map.add_prefix("ex", "http://example.com/");
        assert_eq!(map.get_iri("ex"), Some("http://example.com/"));
        assert_eq!(map.len(), 1);
    }
}
