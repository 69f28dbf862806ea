//! Table schema registry
//!
//! One rule per table of the GA4GH graph database. Field positions follow the
//! column order of the `CREATE TABLE` statements, which is also the order of
//! the pipe-delimited dump.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::rdf::EntityKind;
use crate::rdf::EntityKind as E;
use FieldKind::*;

/// How a column becomes an RDF object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Part of the subject URI only, no triple of its own
    Key,
    /// Foreign key, rendered as the referenced entity's URI
    Ref(EntityKind),
    /// Quoted string
    Text,
    /// `xsd:integer`
    Integer,
    /// `xsd:double`
    Real,
    /// Bare `true`/`false`
    Boolean,
    /// `xsd:date`
    Date,
    /// NCBI taxon ID on identifiers.org
    Taxonomy,
    /// Local file path, rendered as a `file://` URI
    FileUri,
}

/// One positional column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Column name, also the local name of the predicate
    pub name: &'static str,
    pub kind: FieldKind,
    /// Nullable columns: an empty value skips the triple instead of failing
    pub optional: bool,
}

const fn required(name: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        kind,
        optional: false,
    }
}

const fn optional(name: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        kind,
        optional: true,
    }
}

/// One side of a many-to-many join table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinSide {
    /// Column name; the other side points here with `:{field}`
    pub field: &'static str,
    pub kind: EntityKind,
}

/// Layout of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// Entity table: subject from `key` columns, one triple per non-key field
    Entity {
        kind: EntityKind,
        key: &'static [usize],
        fields: &'static [Field],
    },
    /// Join table: two symmetric triples per row
    Join { left: JoinSide, right: JoinSide },
}

/// Conversion rule for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRule {
    /// Table name, also the dump file name and the `rdf:type` local name
    pub name: &'static str,
    pub shape: TableShape,
}

impl TableRule {
    /// Number of columns in the dump
    pub fn width(&self) -> usize {
        match self.shape {
            TableShape::Entity { fields, .. } => fields.len(),
            TableShape::Join { .. } => 2,
        }
    }

    pub fn is_join(&self) -> bool {
        matches!(self.shape, TableShape::Join { .. })
    }
}

/// All tables, in conversion order
pub static TABLES: [TableRule; 16] = [
    TableRule {
        name: "Allele",
        shape: TableShape::Entity {
            kind: E::Allele,
            key: &[0],
            fields: &[
                required("ID", Key),
                required("variantSetID", Ref(E::VariantSet)),
                optional("name", Text),
            ],
        },
    },
    TableRule {
        name: "AlleleCall",
        shape: TableShape::Entity {
            kind: E::AlleleCall,
            key: &[0, 1],
            fields: &[
                required("alleleID", Ref(E::Allele)),
                required("callSetID", Ref(E::CallSet)),
                required("ploidy", Integer),
            ],
        },
    },
    TableRule {
        name: "AllelePathItem",
        shape: TableShape::Entity {
            kind: E::AllelePathItem,
            key: &[0, 1],
            fields: &[
                required("alleleID", Ref(E::Allele)),
                required("pathItemIndex", Integer),
                required("sequenceID", Ref(E::Sequence)),
                required("start", Integer),
                required("length", Integer),
                required("strandIsForward", Boolean),
            ],
        },
    },
    TableRule {
        name: "CallSet",
        shape: TableShape::Entity {
            kind: E::CallSet,
            key: &[0],
            fields: &[
                required("ID", Key),
                optional("name", Text),
                optional("sampleID", Text),
            ],
        },
    },
    TableRule {
        name: "FASTA",
        shape: TableShape::Entity {
            kind: E::Fasta,
            key: &[0],
            fields: &[required("ID", Key), required("fastaURI", FileUri)],
        },
    },
    TableRule {
        name: "GraphJoin",
        shape: TableShape::Entity {
            kind: E::GraphJoin,
            key: &[0],
            fields: &[
                required("ID", Key),
                required("side1SequenceID", Ref(E::Sequence)),
                required("side1Position", Integer),
                required("side1StrandIsForward", Boolean),
                required("side2SequenceID", Ref(E::Sequence)),
                required("side2Position", Integer),
                required("side2StrandIsForward", Boolean),
            ],
        },
    },
    TableRule {
        name: "GraphJoin_ReferenceSet_Join",
        shape: TableShape::Join {
            left: JoinSide {
                field: "graphJoinID",
                kind: E::GraphJoin,
            },
            right: JoinSide {
                field: "referenceSetID",
                kind: E::ReferenceSet,
            },
        },
    },
    TableRule {
        name: "GraphJoin_VariantSet_Join",
        shape: TableShape::Join {
            left: JoinSide {
                field: "graphJoinID",
                kind: E::GraphJoin,
            },
            right: JoinSide {
                field: "variantSetID",
                kind: E::VariantSet,
            },
        },
    },
    TableRule {
        name: "Reference",
        shape: TableShape::Entity {
            kind: E::Reference,
            key: &[0],
            fields: &[
                required("ID", Key),
                required("name", Text),
                required("updateTime", Date),
                required("sequenceID", Ref(E::Sequence)),
                optional("start", Integer),
                optional("length", Integer),
                optional("md5checksum", Text),
                optional("isDerived", Boolean),
                optional("sourceDivergence", Real),
                optional("ncbiTaxonID", Taxonomy),
                optional("isPrimary", Boolean),
            ],
        },
    },
    TableRule {
        name: "ReferenceAccession",
        shape: TableShape::Entity {
            kind: E::ReferenceAccession,
            key: &[0],
            fields: &[
                required("ID", Key),
                required("referenceID", Ref(E::Reference)),
                required("accessionID", Text),
            ],
        },
    },
    TableRule {
        name: "ReferenceSet",
        shape: TableShape::Entity {
            kind: E::ReferenceSet,
            key: &[0],
            fields: &[
                required("ID", Key),
                optional("ncbiTaxonID", Taxonomy),
                optional("description", Text),
                optional("assemblyID", Text),
                required("isDerived", Boolean),
            ],
        },
    },
    TableRule {
        name: "ReferenceSetAccession",
        shape: TableShape::Entity {
            kind: E::ReferenceSetAccession,
            key: &[0],
            fields: &[
                required("ID", Key),
                required("referenceSetID", Ref(E::ReferenceSet)),
                required("accessionID", Text),
            ],
        },
    },
    TableRule {
        name: "Reference_ReferenceSet_Join",
        shape: TableShape::Join {
            left: JoinSide {
                field: "referenceID",
                kind: E::Reference,
            },
            right: JoinSide {
                field: "referenceSetID",
                kind: E::ReferenceSet,
            },
        },
    },
    TableRule {
        name: "Sequence",
        shape: TableShape::Entity {
            kind: E::Sequence,
            key: &[0],
            fields: &[
                required("ID", Key),
                required("fastaID", Ref(E::Fasta)),
                required("sequenceRecordName", Text),
                required("md5checksum", Text),
                required("length", Integer),
            ],
        },
    },
    TableRule {
        name: "VariantSet",
        shape: TableShape::Entity {
            kind: E::VariantSet,
            key: &[0],
            fields: &[
                required("ID", Key),
                required("referenceSetID", Ref(E::ReferenceSet)),
                optional("name", Text),
            ],
        },
    },
    TableRule {
        name: "VariantSet_CallSet_Join",
        shape: TableShape::Join {
            left: JoinSide {
                field: "variantSetID",
                kind: E::VariantSet,
            },
            right: JoinSide {
                field: "callSetID",
                kind: E::CallSet,
            },
        },
    },
];

static REGISTRY: LazyLock<IndexMap<&'static str, &'static TableRule>> =
    LazyLock::new(|| TABLES.iter().map(|rule| (rule.name, rule)).collect());

/// Rule for a table name
pub fn lookup(table: &str) -> Option<&'static TableRule> {
    REGISTRY.get(table).copied()
}

/// Table names in conversion order
pub fn table_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}
