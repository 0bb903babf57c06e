//! Field Schema Model.
//!
//! Each indexed field is described once, as data, in declaration order. The
//! index schema and the scoring profile are both derived from these tables;
//! nothing inspects Rust types at runtime.

use crate::types::Document;

/// How a field may be queried or returned by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Searchable,
    Filterable,
    Sortable,
    Facetable,
    Retrievable,
}

/// Remote data type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    String,
    StringCollection,
    DateTimeOffset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub data_type: DataType,
    pub key: bool,
    pub capabilities: &'static [Capability],
    /// Relevance weight; only set on fields that take part in the scoring profile.
    pub weight: Option<f64>,
}

impl FieldDescriptor {
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// A record type that knows its own index schema.
pub trait IndexedDocument {
    /// Field descriptors in declaration order.
    fn fields() -> &'static [FieldDescriptor];

    /// Value of the key field, used to match upserts.
    fn key(&self) -> &str;
}

use Capability::{Facetable, Filterable, Retrievable, Searchable, Sortable};

pub const DOCUMENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "uid",
        data_type: DataType::String,
        key: true,
        capabilities: &[Retrievable],
        weight: None,
    },
    FieldDescriptor {
        name: "title",
        data_type: DataType::String,
        key: false,
        capabilities: &[Sortable, Searchable, Retrievable],
        weight: Some(10.0),
    },
    FieldDescriptor {
        name: "section",
        data_type: DataType::String,
        key: false,
        capabilities: &[Filterable, Sortable, Searchable, Retrievable],
        weight: Some(8.0),
    },
    FieldDescriptor {
        name: "tags",
        data_type: DataType::StringCollection,
        key: false,
        capabilities: &[Filterable, Facetable, Searchable, Retrievable],
        weight: Some(9.0),
    },
    FieldDescriptor {
        name: "content",
        data_type: DataType::String,
        key: false,
        capabilities: &[Searchable, Retrievable],
        weight: Some(1.0),
    },
    FieldDescriptor {
        name: "date",
        data_type: DataType::DateTimeOffset,
        key: false,
        capabilities: &[Filterable, Sortable, Facetable, Retrievable],
        weight: None,
    },
    FieldDescriptor {
        name: "url",
        data_type: DataType::String,
        key: false,
        capabilities: &[Retrievable],
        weight: None,
    },
];

impl IndexedDocument for Document {
    fn fields() -> &'static [FieldDescriptor] {
        DOCUMENT_FIELDS
    }

    fn key(&self) -> &str {
        &self.uid
    }
}

/// Descriptors that carry a relevance weight, in declaration order.
pub fn weighted_fields(fields: &[FieldDescriptor]) -> Vec<&FieldDescriptor> {
    fields.iter().filter(|f| f.weight.is_some()).collect()
}
