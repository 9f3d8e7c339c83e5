//! # Companion Metadata
//!
//! A `Companion` is the immutable, per-template descriptor a code generator
//! emits alongside each template's contract struct: the template's
//! identifier, a human-readable type name, its choice names (opaque here),
//! and the function values needed to go from wire data to a typed contract.
//!
//! ## Decode Protocol
//!
//! Decoding a created event runs the same steps for every template, with the
//! keyed flavor adding one:
//!
//! 1. Wrap the event's contract-id text into the template-specific id type.
//! 2. Require the event's argument to be record-shaped, then run the
//!    generated record decoder on it.
//! 3. (Keyed only) If a key value is present, run the generated key decoder
//!    on it. An absent key is not an error: the transport guarantees key
//!    presence when the template declares one, so this layer stays
//!    permissive.
//! 4. Hand everything to the generated contract constructor.
//!
//! The first failing step short-circuits; no contract is constructed on
//! failure, and a failed decode of one event never affects any other.
//!
//! The payload is decoded before the key, so an event that is malformed in
//! both reports the payload failure.

use std::collections::BTreeSet;
use std::sync::Arc;

use templar_values::{
    ChoiceName, ContractId, CreatedEvent, DecodeError, Identifier, Party, Record, Value,
};

use crate::decoder::ValueDecoder;

/// Wraps raw contract-id text into a template-specific id type. Pure; never
/// fails at this layer (id text is opaquely valid here).
pub type IdFromText<Id> = Arc<dyn Fn(&str) -> Id + Send + Sync>;

/// The generated record decoder for a template's payload.
pub type PayloadFromRecord<Payload> =
    Arc<dyn Fn(&Record) -> Result<Payload, DecodeError> + Send + Sync>;

/// The generated decoder for a template's declared key type.
pub type KeyFromValue<Key> = Arc<dyn Fn(&Value) -> Result<Key, DecodeError> + Send + Sync>;

/// The generated contract constructor for a template without a key.
pub type BuildUnkeyed<Ct, Id, Payload> = Arc<
    dyn Fn(Id, Payload, Option<String>, BTreeSet<Party>, BTreeSet<Party>) -> Ct + Send + Sync,
>;

/// The generated contract constructor for a template with a declared key.
pub type BuildKeyed<Ct, Id, Payload, Key> = Arc<
    dyn Fn(Id, Payload, Option<String>, Option<Key>, BTreeSet<Party>, BTreeSet<Party>) -> Ct
        + Send
        + Sync,
>;

/// The keyed/unkeyed split. Exactly one flavor exists per template, fixed at
/// construction.
enum CompanionKind<Ct, Id, Payload, Key> {
    Unkeyed {
        build: BuildUnkeyed<Ct, Id, Payload>,
    },
    Keyed {
        key_from_value: KeyFromValue<Key>,
        build: BuildKeyed<Ct, Id, Payload, Key>,
    },
}

/// Immutable per-template metadata: everything needed to decode any created
/// event for one template.
///
/// Constructed once by generated code at static-init time and shared for the
/// process lifetime. Safe for unsynchronized concurrent reads.
///
/// Type parameters: `Ct` is the generated contract struct, `Id` the
/// generated id type, `Payload` the generated payload struct, and `Key` the
/// declared key type (`()` for unkeyed templates).
pub struct Companion<Ct, Id, Payload, Key = ()> {
    type_name: String,
    template_id: Identifier,
    choices: Vec<ChoiceName>,
    id_from_text: IdFromText<Id>,
    payload_from_record: PayloadFromRecord<Payload>,
    kind: CompanionKind<Ct, Id, Payload, Key>,
}

impl<Ct, Id, Payload> Companion<Ct, Id, Payload> {
    /// Companion for a template without a declared key.
    pub fn unkeyed(
        type_name: impl Into<String>,
        template_id: Identifier,
        choices: Vec<ChoiceName>,
        id_from_text: impl Fn(&str) -> Id + Send + Sync + 'static,
        payload_from_record: impl Fn(&Record) -> Result<Payload, DecodeError> + Send + Sync + 'static,
        build: impl Fn(Id, Payload, Option<String>, BTreeSet<Party>, BTreeSet<Party>) -> Ct
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            template_id,
            choices,
            id_from_text: Arc::new(id_from_text),
            payload_from_record: Arc::new(payload_from_record),
            kind: CompanionKind::Unkeyed {
                build: Arc::new(build),
            },
        }
    }
}

impl<Ct, Id, Payload, Key> Companion<Ct, Id, Payload, Key> {
    /// Companion for a template with a declared key of type `Key`.
    pub fn keyed(
        type_name: impl Into<String>,
        template_id: Identifier,
        choices: Vec<ChoiceName>,
        id_from_text: impl Fn(&str) -> Id + Send + Sync + 'static,
        payload_from_record: impl Fn(&Record) -> Result<Payload, DecodeError> + Send + Sync + 'static,
        key_from_value: impl Fn(&Value) -> Result<Key, DecodeError> + Send + Sync + 'static,
        build: impl Fn(Id, Payload, Option<String>, Option<Key>, BTreeSet<Party>, BTreeSet<Party>) -> Ct
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            template_id,
            choices,
            id_from_text: Arc::new(id_from_text),
            payload_from_record: Arc::new(payload_from_record),
            kind: CompanionKind::Keyed {
                key_from_value: Arc::new(key_from_value),
                build: Arc::new(build),
            },
        }
    }

    /// The generated type's human-readable name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The template's fully qualified identifier.
    pub fn template_id(&self) -> &Identifier {
        &self.template_id
    }

    /// The template's choice names. Opaque metadata; nothing in this crate
    /// interprets them.
    pub fn choices(&self) -> &[ChoiceName] {
        &self.choices
    }

    /// Whether the template declares a key.
    pub fn has_key(&self) -> bool {
        matches!(self.kind, CompanionKind::Keyed { .. })
    }

    /// Wrap raw contract-id text into the template-specific id type.
    pub fn id_from_text(&self, text: &str) -> Id {
        (self.id_from_text)(text)
    }

    /// Run the generated record decoder on an already record-shaped value.
    pub fn payload_from_record(&self, record: &Record) -> Result<Payload, DecodeError> {
        (self.payload_from_record)(record)
    }

    /// Re-tag a generic contract id as this template's id type. A re-wrap of
    /// the underlying text, not a parse.
    pub fn to_contract_id(&self, contract_id: ContractId<Payload>) -> Id {
        (self.id_from_text)(contract_id.as_str())
    }

    /// Assemble a typed contract from already-extracted event parts.
    ///
    /// `key_value` is ignored by unkeyed companions; for keyed companions an
    /// absent key decodes to `None` without error.
    ///
    /// # Errors
    ///
    /// `DecodeError::Shape` when `arguments` is not record-shaped, or
    /// whatever the generated payload/key decoders raise.
    pub fn from_parts(
        &self,
        contract_id: &str,
        arguments: &Value,
        agreement_text: Option<String>,
        key_value: Option<&Value>,
        signatories: BTreeSet<Party>,
        observers: BTreeSet<Party>,
    ) -> Result<Ct, DecodeError> {
        let id = (self.id_from_text)(contract_id);
        let record = arguments.as_record().ok_or_else(DecodeError::not_a_record)?;
        let payload = (self.payload_from_record)(record)?;
        match &self.kind {
            CompanionKind::Unkeyed { build } => {
                Ok(build(id, payload, agreement_text, signatories, observers))
            }
            CompanionKind::Keyed {
                key_from_value,
                build,
            } => {
                let key = match key_value {
                    Some(value) => Some(key_from_value(value)?),
                    None => None,
                };
                Ok(build(id, payload, agreement_text, key, signatories, observers))
            }
        }
    }

    /// Decode a created event into this template's typed contract.
    ///
    /// # Errors
    ///
    /// `DecodeError::Shape` when the event's argument is not record-shaped;
    /// `DecodeError::Field`/`MissingField` when the payload or key decoder
    /// rejects a field. The first failing step short-circuits and no
    /// contract is constructed.
    pub fn decode_event(&self, event: &CreatedEvent) -> Result<Ct, DecodeError> {
        self.from_parts(
            event.contract_id(),
            event.arguments(),
            event.agreement_text().map(str::to_owned),
            event.contract_key(),
            event.signatories().clone(),
            event.observers().clone(),
        )
    }

    /// The standalone decoder bound to this companion: shares the same
    /// function values, so it behaves identically to calling the companion
    /// directly.
    pub fn value_decoder(&self) -> ValueDecoder<Id, Payload> {
        ValueDecoder::new(
            Arc::clone(&self.id_from_text),
            Arc::clone(&self.payload_from_record),
        )
    }
}

/// Hand-rolled stand-ins for what the code generator emits, shared by the
/// unit and property tests here and in `decoder.rs`.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use templar_values::RecordField;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AssetId(pub ContractId<AssetPayload>);

    impl AssetId {
        pub fn new(text: &str) -> Self {
            Self(ContractId::new(text))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AssetPayload {
        pub owner: Party,
        pub amount: i64,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Asset {
        pub id: AssetId,
        pub payload: AssetPayload,
        pub agreement_text: Option<String>,
        pub signatories: BTreeSet<Party>,
        pub observers: BTreeSet<Party>,
    }

    pub fn asset_payload_from_record(record: &Record) -> Result<AssetPayload, DecodeError> {
        let owner = record
            .field("owner")
            .ok_or_else(|| DecodeError::missing_field("owner"))?;
        let owner = owner
            .as_party()
            .ok_or_else(|| DecodeError::field("owner", "Party", owner.shape_name()))?
            .clone();
        let amount = record
            .field("amount")
            .ok_or_else(|| DecodeError::missing_field("amount"))?;
        let amount = amount
            .as_int64()
            .ok_or_else(|| DecodeError::field("amount", "Int64", amount.shape_name()))?;
        Ok(AssetPayload { owner, amount })
    }

    pub fn asset_companion() -> Companion<Asset, AssetId, AssetPayload> {
        Companion::unkeyed(
            "Asset",
            Identifier::new("pkg-1", "Finance.Asset", "Asset"),
            vec![ChoiceName::new("Archive"), ChoiceName::new("Transfer")],
            |text| AssetId::new(text),
            asset_payload_from_record,
            |id, payload, agreement_text, signatories, observers| Asset {
                id,
                payload,
                agreement_text,
                signatories,
                observers,
            },
        )
    }

    pub fn asset_record(owner: &str, amount: i64) -> Value {
        Value::Record(Record::new(vec![
            RecordField::new("owner", Value::Party(Party::new(owner))),
            RecordField::new("amount", Value::Int64(amount)),
        ]))
    }

    pub fn asset_event() -> CreatedEvent {
        CreatedEvent::new(
            "#ev-1",
            Identifier::new("pkg-1", "Finance.Asset", "Asset"),
            "#1:0",
            asset_record("Alice", 10),
        )
        .with_signatories([Party::new("Alice")])
    }

    // Keyed stand-in: an account keyed by its owner party.

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AccountId(pub ContractId<AccountPayload>);

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AccountPayload {
        pub owner: Party,
        pub number: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Account {
        pub id: AccountId,
        pub payload: AccountPayload,
        pub agreement_text: Option<String>,
        pub key: Option<Party>,
        pub signatories: BTreeSet<Party>,
        pub observers: BTreeSet<Party>,
    }

    pub fn account_payload_from_record(record: &Record) -> Result<AccountPayload, DecodeError> {
        let owner = record
            .field("owner")
            .ok_or_else(|| DecodeError::missing_field("owner"))?;
        let owner = owner
            .as_party()
            .ok_or_else(|| DecodeError::field("owner", "Party", owner.shape_name()))?
            .clone();
        let number = record
            .field("number")
            .ok_or_else(|| DecodeError::missing_field("number"))?;
        let number = number
            .as_text()
            .ok_or_else(|| DecodeError::field("number", "Text", number.shape_name()))?
            .to_owned();
        Ok(AccountPayload { owner, number })
    }

    pub fn account_companion() -> Companion<Account, AccountId, AccountPayload, Party> {
        Companion::keyed(
            "Account",
            Identifier::new("pkg-1", "Finance.Account", "Account"),
            vec![ChoiceName::new("Archive")],
            |text| AccountId(ContractId::new(text)),
            account_payload_from_record,
            |value| {
                value
                    .as_party()
                    .cloned()
                    .ok_or_else(|| DecodeError::field("key", "Party", value.shape_name()))
            },
            |id, payload, agreement_text, key, signatories, observers| Account {
                id,
                payload,
                agreement_text,
                key,
                signatories,
                observers,
            },
        )
    }

    pub fn account_event() -> CreatedEvent {
        CreatedEvent::new(
            "#ev-2",
            Identifier::new("pkg-1", "Finance.Account", "Account"),
            "#2:0",
            Value::Record(Record::new(vec![
                RecordField::new("owner", Value::Party(Party::new("Alice"))),
                RecordField::new("number", Value::Text("ACC-7".into())),
            ])),
        )
        .with_signatories([Party::new("Alice")])
    }
}
