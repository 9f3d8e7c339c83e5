//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers that flow through event decoding.
//! These prevent accidental identifier confusion — you cannot pass a
//! `Party` where a `ChoiceName` is expected, and a `ContractId<Asset>`
//! cannot stand in for a `ContractId<Loan>`.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Fully qualified name of a template type: the
/// `(package id, module name, entity name)` triple.
///
/// Immutable once constructed; owned by the companion that describes the
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    package_id: String,
    module_name: String,
    entity_name: String,
}

impl Identifier {
    /// Construct an identifier from its three components.
    pub fn new(
        package_id: impl Into<String>,
        module_name: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        Self {
            package_id: package_id.into(),
            module_name: module_name.into(),
            entity_name: entity_name.into(),
        }
    }

    /// The package the template was compiled into.
    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    /// The module within the package.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// The entity (template) name within the module.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.package_id, self.module_name, self.entity_name)
    }
}

/// A ledger party.
///
/// Ordered and hashable so signatory/observer sets can be `BTreeSet<Party>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Party(pub String);

impl Party {
    /// Construct a party from its ledger identifier text.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the party identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a choice declared on a template.
///
/// Carried on companions as opaque metadata; nothing in this workspace
/// interprets choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceName(pub String);

impl ChoiceName {
    /// Construct a choice name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the choice name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A contract id tagged at compile time with the payload type it points at.
///
/// Carries only the underlying id text. Generated per-template id types wrap
/// the same text; a companion's `to_contract_id` re-tags a generic id into
/// the template-specific type without parsing it.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId<Payload> {
    text: String,
    #[serde(skip)]
    _payload: PhantomData<fn() -> Payload>,
}

impl<Payload> ContractId<Payload> {
    /// Wrap raw contract-id text. The text is treated as opaquely valid at
    /// this layer.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            _payload: PhantomData,
        }
    }

    /// Access the underlying contract-id text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the id, yielding the underlying text.
    pub fn into_string(self) -> String {
        self.text
    }
}

// Manual impls: deriving would put spurious bounds on `Payload`, which is
// phantom here.
impl<Payload> Clone for ContractId<Payload> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            _payload: PhantomData,
        }
    }
}

impl<Payload> PartialEq for ContractId<Payload> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl<Payload> Eq for ContractId<Payload> {}

impl<Payload> std::hash::Hash for ContractId<Payload> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl<Payload> std::fmt::Debug for ContractId<Payload> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ContractId").field(&self.text).finish()
    }
}

impl<Payload> std::fmt::Display for ContractId<Payload> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
