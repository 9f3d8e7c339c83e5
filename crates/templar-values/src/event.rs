//! # Created Events
//!
//! A `CreatedEvent` is the ledger's notification that a new contract
//! instance came into existence. The bindings runtime consumes it read-only:
//! every field is reached through an accessor and nothing here is mutated
//! after construction.
//!
//! All fields are present-or-absent independently. The only cross-field
//! expectation lives downstream: the argument value must be record-shaped
//! for a companion to decode it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::identity::{Identifier, Party};
use crate::value::Value;

/// A contract-creation event as delivered by the transport layer, already
/// deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedEvent {
    event_id: String,
    template_id: Identifier,
    contract_id: String,
    arguments: Value,
    agreement_text: Option<String>,
    contract_key: Option<Value>,
    signatories: BTreeSet<Party>,
    observers: BTreeSet<Party>,
}

impl CreatedEvent {
    /// Construct an event from its required parts. Optional metadata is
    /// attached with the `with_*` methods.
    pub fn new(
        event_id: impl Into<String>,
        template_id: Identifier,
        contract_id: impl Into<String>,
        arguments: Value,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            template_id,
            contract_id: contract_id.into(),
            arguments,
            agreement_text: None,
            contract_key: None,
            signatories: BTreeSet::new(),
            observers: BTreeSet::new(),
        }
    }

    /// Attach the agreement text.
    pub fn with_agreement_text(mut self, text: impl Into<String>) -> Self {
        self.agreement_text = Some(text.into());
        self
    }

    /// Attach the contract key value.
    pub fn with_contract_key(mut self, key: Value) -> Self {
        self.contract_key = Some(key);
        self
    }

    /// Attach the signatory set.
    pub fn with_signatories(mut self, signatories: impl IntoIterator<Item = Party>) -> Self {
        self.signatories = signatories.into_iter().collect();
        self
    }

    /// Attach the observer set.
    pub fn with_observers(mut self, observers: impl IntoIterator<Item = Party>) -> Self {
        self.observers = observers.into_iter().collect();
        self
    }

    /// The transport-assigned event id. Not interpreted by decoding.
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// The template the created contract was made from. Not interpreted by
    /// decoding.
    pub fn template_id(&self) -> &Identifier {
        &self.template_id
    }

    /// The created contract's id text.
    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    /// The creation arguments. Must be record-shaped to decode as a payload.
    pub fn arguments(&self) -> &Value {
        &self.arguments
    }

    /// The agreement text, when present.
    pub fn agreement_text(&self) -> Option<&str> {
        self.agreement_text.as_deref()
    }

    /// The contract key value, when the template declares one and the
    /// transport supplied it.
    pub fn contract_key(&self) -> Option<&Value> {
        self.contract_key.as_ref()
    }

    /// The signatory parties.
    pub fn signatories(&self) -> &BTreeSet<Party> {
        &self.signatories
    }

    /// The observer parties.
    pub fn observers(&self) -> &BTreeSet<Party> {
        &self.observers
    }
}
