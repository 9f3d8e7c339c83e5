//! # Wire Value Tree
//!
//! The self-describing, transport-agnostic representation of ledger data:
//! a tagged union of primitives, records, variants, lists, and optionals.
//! Values arrive already parsed; the bindings runtime only ever walks them.
//!
//! ## Design
//!
//! - `Record` keeps its fields in insertion order, which the ledger
//!   guarantees equals declaration order. Field lookup is by label.
//! - The only shape query the decode path needs is `as_record()`; the other
//!   accessors exist for generated field decoders.
//! - Timestamps are UTC-only (`chrono::DateTime<Utc>`); numerics keep their
//!   wire text so no precision is invented at this layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{Identifier, Party};

/// A single node of the wire value tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// The unit value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int64(i64),
    /// A fixed-scale decimal, kept as its wire text.
    Numeric(String),
    /// A text string.
    Text(String),
    /// A ledger party.
    Party(Party),
    /// An absolute timestamp, UTC only.
    Timestamp(DateTime<Utc>),
    /// A calendar date.
    Date(NaiveDate),
    /// A contract id in its raw text form.
    ContractId(String),
    /// An optional value.
    Optional(Option<Box<Value>>),
    /// A homogeneous list.
    List(Vec<Value>),
    /// A record with ordered, labeled fields.
    Record(Record),
    /// A variant: one named constructor applied to one value.
    Variant(Box<Variant>),
}

impl Value {
    /// The record behind this value, if it is record-shaped.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The text behind this value, if it is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The integer behind this value, if it is an `Int64`.
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// The party behind this value, if it is a `Party`.
    pub fn as_party(&self) -> Option<&Party> {
        match self {
            Value::Party(party) => Some(party),
            _ => None,
        }
    }

    /// The boolean behind this value, if it is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The elements behind this value, if it is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The inner value behind this value, if it is an `Optional`.
    pub fn as_optional(&self) -> Option<Option<&Value>> {
        match self {
            Value::Optional(inner) => Some(inner.as_deref()),
            _ => None,
        }
    }

    /// A short name for this value's shape, used in decode errors.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Value::Unit => "Unit",
            Value::Bool(_) => "Bool",
            Value::Int64(_) => "Int64",
            Value::Numeric(_) => "Numeric",
            Value::Text(_) => "Text",
            Value::Party(_) => "Party",
            Value::Timestamp(_) => "Timestamp",
            Value::Date(_) => "Date",
            Value::ContractId(_) => "ContractId",
            Value::Optional(_) => "Optional",
            Value::List(_) => "List",
            Value::Record(_) => "Record",
            Value::Variant(_) => "Variant",
        }
    }
}

/// One labeled field of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordField {
    label: String,
    value: Value,
}

impl RecordField {
    /// Construct a labeled field.
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The field's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The field's value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A record value: ordered, labeled fields, optionally tagged with the
/// record type's identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    record_id: Option<Identifier>,
    fields: Vec<RecordField>,
}

impl Record {
    /// Construct a record from its fields, untagged.
    pub fn new(fields: Vec<RecordField>) -> Self {
        Self {
            record_id: None,
            fields,
        }
    }

    /// Construct a record tagged with its type identifier.
    pub fn with_record_id(record_id: Identifier, fields: Vec<RecordField>) -> Self {
        Self {
            record_id: Some(record_id),
            fields,
        }
    }

    /// The record type's identifier, when the ledger supplied one.
    pub fn record_id(&self) -> Option<&Identifier> {
        self.record_id.as_ref()
    }

    /// The fields in declaration order.
    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    /// Look up a field's value by label.
    pub fn field(&self, label: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| &f.value)
    }
}

/// A variant value: a named constructor applied to a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    constructor: String,
    value: Value,
}

impl Variant {
    /// Construct a variant.
    pub fn new(constructor: impl Into<String>, value: Value) -> Self {
        Self {
            constructor: constructor.into(),
            value,
        }
    }

    /// The constructor name.
    pub fn constructor(&self) -> &str {
        &self.constructor
    }

    /// The applied value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}
