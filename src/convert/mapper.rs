//! Row → triple mapping
//!
//! Entity rows emit `rdf:type` and `rdfs:label` first, then one triple per
//! non-key field in column order. Join rows emit exactly two triples, one in
//! each direction.

use crate::rdf::{
    boolean_literal, date_literal, entity_uri, file_uri, integer_literal, quote_literal,
    real_literal, taxonomy_uri, EntityKind, Term, TermError, TermResult, Triple, RDFS_LABEL,
    RDF_TYPE,
};

use super::schema::{Field, FieldKind, JoinSide, TableRule, TableShape};

/// Field separator of the dump files
pub const DUMP_DELIMITER: char = '|';

/// One dump line split into positional fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    /// Split a dump line. Surrounding whitespace is trimmed from the line, not
    /// from individual fields.
    pub fn parse(line: &'a str) -> Self {
        Self {
            fields: line.trim().split(DUMP_DELIMITER).collect(),
        }
    }

    pub fn from_fields(fields: Vec<&'a str>) -> Self {
        Self { fields }
    }

    /// Field at `index`; missing trailing fields read as empty
    pub fn get(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TableRule {
    /// Map one row to its triples
    pub fn convert(&self, row: &Row<'_>) -> TermResult<Vec<Triple>> {
        match self.shape {
            TableShape::Entity { kind, key, fields } => {
                convert_entity(self.name, kind, key, fields, row)
            }
            TableShape::Join { left, right } => convert_join(left, right, row),
        }
    }
}

fn convert_entity(
    table: &str,
    kind: EntityKind,
    key: &[usize],
    fields: &[Field],
    row: &Row<'_>,
) -> TermResult<Vec<Triple>> {
    let ids: Vec<&str> = key.iter().map(|&i| row.get(i)).collect();
    let subject = entity_uri(kind, &ids)?;

    let mut triples = Vec::with_capacity(fields.len() + 2);
    triples.push(Triple::new(
        subject.clone(),
        Term::prefixed(RDF_TYPE),
        Term::local(table),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Term::prefixed(RDFS_LABEL),
        quote_literal(&format!("{}/{}", table, ids.join("/"))),
    ));

    for (index, field) in fields.iter().enumerate() {
        let value = row.get(index);
        if value.is_empty() && field.kind != FieldKind::Key {
            if field.optional {
                continue;
            }
            return Err(TermError::EmptyValue(field.name.to_string()));
        }
        if let Some(object) = object_term(field.kind, value)? {
            triples.push(Triple::new(subject.clone(), Term::local(field.name), object));
        }
    }

    Ok(triples)
}

fn convert_join(left: JoinSide, right: JoinSide, row: &Row<'_>) -> TermResult<Vec<Triple>> {
    let left_node = entity_uri(left.kind, &[row.get(0)])?;
    let right_node = entity_uri(right.kind, &[row.get(1)])?;
    Ok(vec![
        Triple::new(left_node.clone(), Term::local(right.field), right_node.clone()),
        Triple::new(right_node, Term::local(left.field), left_node),
    ])
}

/// Object for a field value; key columns have none
fn object_term(kind: FieldKind, value: &str) -> TermResult<Option<Term>> {
    let term = match kind {
        FieldKind::Key => return Ok(None),
        FieldKind::Ref(target) => entity_uri(target, &[value])?,
        FieldKind::Text => quote_literal(value),
        FieldKind::Integer => integer_literal(value),
        FieldKind::Real => real_literal(value),
        FieldKind::Boolean => boolean_literal(value),
        FieldKind::Date => date_literal(value),
        FieldKind::Taxonomy => taxonomy_uri(value)?,
        FieldKind::FileUri => file_uri(value)?,
    };
    Ok(Some(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::schema::lookup;

    fn convert(table: &str, line: &str) -> TermResult<Vec<String>> {
        let rule = lookup(table).unwrap();
        let triples = rule.convert(&Row::parse(line))?;
        Ok(triples.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_row_parse() {
        let row = Row::parse("1|name|\n");
        assert_eq!(row.len(), 3);
        assert_eq!(row.get(0), "1");
        assert_eq!(row.get(2), "");
        assert_eq!(row.get(7), "");

        let padded = Row::parse("  4| a b |x ");
        assert_eq!(padded.get(1), " a b ");
        assert_eq!(padded.get(2), "x");
    }

    #[test]
    fn test_allele() {
        let lines = convert("Allele", "3|5|rs42").unwrap();
        assert_eq!(
            lines,
            vec![
                "<http://ga4gh.org/graph/rdf/Allele/3>\trdf:type\t:Allele .",
                "<http://ga4gh.org/graph/rdf/Allele/3>\trdfs:label\t\"Allele/3\" .",
                "<http://ga4gh.org/graph/rdf/Allele/3>\t:variantSetID\t<http://ga4gh.org/graph/rdf/VariantSet/5> .",
                "<http://ga4gh.org/graph/rdf/Allele/3>\t:name\t\"rs42\" .",
            ]
        );
    }

    #[test]
    fn test_optional_field_skipped_when_empty() {
        let lines = convert("Allele", "3|5|").unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.contains(":name")));

        // Trailing empty fields may be missing entirely
        assert_eq!(convert("Allele", "3|5").unwrap(), lines);
    }

    #[test]
    fn test_required_field_empty_fails() {
        assert_eq!(
            convert("Allele", "3||x"),
            Err(TermError::EmptyValue("variantSetID".to_string()))
        );
        assert_eq!(
            convert("Sequence", "1|2|chr1||100"),
            Err(TermError::EmptyValue("md5checksum".to_string()))
        );
    }

    #[test]
    fn test_empty_primary_key_fails() {
        assert_eq!(
            convert("CallSet", "|NA12878|S1"),
            Err(TermError::EmptyValue("CallSet identifier".to_string()))
        );
        assert!(convert("AlleleCall", "1||2").is_err());
    }

    #[test]
    fn test_allele_call_composite_key() {
        let lines = convert("AlleleCall", "7|9|2").unwrap();
        let subject = "<http://ga4gh.org/graph/rdf/AlleleCall/7/9>";
        assert_eq!(
            lines,
            vec![
                format!("{}\trdf:type\t:AlleleCall .", subject),
                format!("{}\trdfs:label\t\"AlleleCall/7/9\" .", subject),
                format!("{}\t:alleleID\t<http://ga4gh.org/graph/rdf/Allele/7> .", subject),
                format!("{}\t:callSetID\t<http://ga4gh.org/graph/rdf/CallSet/9> .", subject),
                format!("{}\t:ploidy\t\"2\"^^xsd:integer .", subject),
            ]
        );
    }

    #[test]
    fn test_allele_path_item() {
        let lines = convert("AllelePathItem", "7|0|12|100|25|TRUE").unwrap();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "<http://ga4gh.org/graph/rdf/AllelePathItem/7/0>\trdf:type\t:AllelePathItem ."
        );
        assert!(lines[3].ends_with("\t:pathItemIndex\t\"0\"^^xsd:integer ."));
        assert!(lines[4].ends_with("\t:sequenceID\t<http://ga4gh.org/graph/rdf/Sequence/12> ."));
        assert!(lines[7].ends_with("\t:strandIsForward\ttrue ."));
    }

    #[test]
    fn test_fasta() {
        let lines = convert("FASTA", "1|/data/chr1.fa").unwrap();
        assert_eq!(
            lines[2],
            "<http://ga4gh.org/graph/rdf/FASTA/1>\t:fastaURI\t<file:///data/chr1.fa> ."
        );
    }

    #[test]
    fn test_graph_join() {
        let lines = convert("GraphJoin", "4|1|10|1|2|0|FALSE").unwrap();
        let objects: Vec<&str> = lines
            .iter()
            .skip(2)
            .map(|l| l.split('\t').nth(2).unwrap())
            .collect();
        assert_eq!(
            objects,
            vec![
                "<http://ga4gh.org/graph/rdf/Sequence/1> .",
                "\"10\"^^xsd:integer .",
                "true .",
                "<http://ga4gh.org/graph/rdf/Sequence/2> .",
                "\"0\"^^xsd:integer .",
                "false .",
            ]
        );
    }

    #[test]
    fn test_reference_full_row() {
        let lines = convert(
            "Reference",
            "8|chr1|2015-07-20|3|0|248956422|6aef897c|0|0.25|9606|1",
        )
        .unwrap();
        let pairs: Vec<(&str, &str)> = lines
            .iter()
            .map(|l| {
                let mut parts = l.split('\t');
                parts.next();
                (parts.next().unwrap(), parts.next().unwrap())
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("rdf:type", ":Reference ."),
                ("rdfs:label", "\"Reference/8\" ."),
                (":name", "\"chr1\" ."),
                (":updateTime", "\"2015-07-20\"^^xsd:date ."),
                (":sequenceID", "<http://ga4gh.org/graph/rdf/Sequence/3> ."),
                (":start", "\"0\"^^xsd:integer ."),
                (":length", "\"248956422\"^^xsd:integer ."),
                (":md5checksum", "\"6aef897c\" ."),
                (":isDerived", "false ."),
                (":sourceDivergence", "\"0.25\"^^xsd:double ."),
                (":ncbiTaxonID", "<http://identifiers.org/taxonomy/9606> ."),
                (":isPrimary", "true ."),
            ]
        );
    }

    #[test]
    fn test_reference_without_optional_fields() {
        let lines = convert("Reference", "8|chr1|2015-07-20|3").unwrap();
        assert_eq!(lines.len(), 5);
        assert!(lines[4].contains(":sequenceID"));
    }

    #[test]
    fn test_reference_set_taxon_only_when_present() {
        let with_taxon = convert("ReferenceSet", "2|9606|GRCh38|GCA_1|0").unwrap();
        assert!(with_taxon[2].ends_with("\t:ncbiTaxonID\t<http://identifiers.org/taxonomy/9606> ."));
        assert_eq!(with_taxon.len(), 6);

        let without_taxon = convert("ReferenceSet", "2||GRCh38|GCA_1|0").unwrap();
        assert_eq!(without_taxon.len(), 5);
        assert!(without_taxon.iter().all(|l| !l.contains("ncbiTaxonID")));
    }

    #[test]
    fn test_malformed_taxon_fails_row() {
        match convert("ReferenceSet", "2|9 606|GRCh38|GCA_1|0").unwrap_err() {
            TermError::InvalidIri { iri, .. } => {
                assert_eq!(iri, "http://identifiers.org/taxonomy/9 606")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_text_is_escaped() {
        let lines = convert("CallSet", "1|say \"hi\"\\now|S1").unwrap();
        assert_eq!(
            lines[2],
            "<http://ga4gh.org/graph/rdf/CallSet/1>\t:name\t\"say \\\"hi\\\"\\\\now\" ."
        );
    }

    #[test]
    fn test_variant_set_call_set_join() {
        let lines = convert("VariantSet_CallSet_Join", "5|9").unwrap();
        assert_eq!(
            lines,
            vec![
                "<http://ga4gh.org/graph/rdf/VariantSet/5>\t:callSetID\t<http://ga4gh.org/graph/rdf/CallSet/9> .",
                "<http://ga4gh.org/graph/rdf/CallSet/9>\t:variantSetID\t<http://ga4gh.org/graph/rdf/VariantSet/5> .",
            ]
        );
    }

    #[test]
    fn test_other_join_tables() {
        let graph_join = convert("GraphJoin_ReferenceSet_Join", "4|2").unwrap();
        assert_eq!(
            graph_join[0],
            "<http://ga4gh.org/graph/rdf/GraphJoin/4>\t:referenceSetID\t<http://ga4gh.org/graph/rdf/ReferenceSet/2> ."
        );
        assert_eq!(
            graph_join[1],
            "<http://ga4gh.org/graph/rdf/ReferenceSet/2>\t:graphJoinID\t<http://ga4gh.org/graph/rdf/GraphJoin/4> ."
        );

        let reference = convert("Reference_ReferenceSet_Join", "8|2").unwrap();
        assert_eq!(reference.len(), 2);
        assert!(reference[1].contains("\t:referenceID\t"));

        assert!(convert("GraphJoin_VariantSet_Join", "4|").is_err());
    }

    #[test]
    fn test_foreign_key_matches_referenced_subject() {
        let sequence = convert("Sequence", "12|1|chr1|abc|100").unwrap();
        let subject = sequence[0].split('\t').next().unwrap();
        let path_item = convert("AllelePathItem", "7|0|12|100|25|1").unwrap();
        assert!(path_item[4].ends_with(&format!("\t{} .", subject)));
    }

    #[test]
    fn test_every_table_converts_a_full_row() {
        for rule in crate::convert::schema::TABLES.iter() {
            let values: Vec<String> = (0..rule.width()).map(|i| (i + 1).to_string()).collect();
            let fields: Vec<&str> = values.iter().map(String::as_str).collect();
            let triples = rule.convert(&Row::from_fields(fields)).unwrap();
            let expected = if rule.is_join() {
                2
            } else {
                // every column but the single-column primary key, plus type and label
                let keys = match rule.shape {
                    TableShape::Entity { fields, .. } => {
                        fields.iter().filter(|f| f.kind == FieldKind::Key).count()
                    }
                    TableShape::Join { .. } => 0,
                };
                rule.width() - keys + 2
            };
            assert_eq!(triples.len(), expected, "{}", rule.name);
            assert!(triples.iter().all(|t| t.validate().is_ok()), "{}", rule.name);
        }
    }
}
