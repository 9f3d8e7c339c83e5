//! # Standalone Value Decoder
//!
//! A `ValueDecoder` is the subset of a companion's behavior needed to decode
//! a bare wire value into a payload, without a full created event. Generic
//! containers use it to parse a payload nested inside another structure,
//! where no event metadata exists.
//!
//! It is a capability view, not a separate implementation: the decoder
//! shares the companion's own function values, so its results are
//! indistinguishable from calling the companion directly.

use templar_values::{DecodeError, Value};

use crate::companion::{Companion, IdFromText, PayloadFromRecord};

/// A stateless decode capability detached from its companion.
pub struct ValueDecoder<Id, Payload> {
    id_from_text: IdFromText<Id>,
    payload_from_record: PayloadFromRecord<Payload>,
}

impl<Id, Payload> ValueDecoder<Id, Payload> {
    pub(crate) fn new(
        id_from_text: IdFromText<Id>,
        payload_from_record: PayloadFromRecord<Payload>,
    ) -> Self {
        Self {
            id_from_text,
            payload_from_record,
        }
    }

    /// Decode a record-shaped wire value into the template's payload.
    ///
    /// # Errors
    ///
    /// `DecodeError::Shape` when `value` is not record-shaped, or whatever
    /// the generated record decoder raises.
    pub fn decode(&self, value: &Value) -> Result<Payload, DecodeError> {
        let record = value.as_record().ok_or_else(DecodeError::not_a_record)?;
        (self.payload_from_record)(record)
    }

    /// Wrap raw contract-id text into the template-specific id type.
    /// Identical contract to the companion's own `id_from_text`.
    pub fn id_from_text(&self, text: &str) -> Id {
        (self.id_from_text)(text)
    }
}

// Manual impl: deriving would bound `Id` and `Payload`, which only occur
// behind `Arc`.
impl<Id, Payload> Clone for ValueDecoder<Id, Payload> {
    fn clone(&self) -> Self {
        Self {
            id_from_text: self.id_from_text.clone(),
            payload_from_record: self.payload_from_record.clone(),
        }
    }
}

/// The standalone decoder bound to the given companion.
pub fn value_decoder_for<Ct, Id, Payload, Key>(
    companion: &Companion<Ct, Id, Payload, Key>,
) -> ValueDecoder<Id, Payload> {
    companion.value_decoder()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companion::test_support::*;
    use templar_values::{DecodeError, Party, Record, RecordField, Value};

    #[test]
    fn decode_matches_companion_record_decoder() {
        let companion = asset_companion();
        let decoder = value_decoder_for(&companion);

        let value = asset_record("Alice", 10);
        let via_decoder = decoder.decode(&value).unwrap();
        let via_companion = companion
            .payload_from_record(value.as_record().unwrap())
            .unwrap();
        assert_eq!(via_decoder, via_companion);
    }

    #[test]
    fn decode_rejects_non_record_values() {
        let decoder = asset_companion().value_decoder();
        for value in [
            Value::Int64(7),
            Value::Text("Asset".into()),
            Value::Optional(None),
            Value::List(vec![]),
        ] {
            let err = decoder.decode(&value).unwrap_err();
            assert_eq!(err, DecodeError::not_a_record());
        }
    }

    #[test]
    fn decode_propagates_field_errors_unchanged() {
        let decoder = asset_companion().value_decoder();
        let value = Value::Record(Record::new(vec![
            RecordField::new("owner", Value::Int64(1)),
            RecordField::new("amount", Value::Int64(10)),
        ]));
        let err = decoder.decode(&value).unwrap_err();
        assert_eq!(err, DecodeError::field("owner", "Party", "Int64"));
    }

    #[test]
    fn id_from_text_matches_companion() {
        let companion = asset_companion();
        let decoder = companion.value_decoder();
        assert_eq!(decoder.id_from_text("#3:1"), companion.id_from_text("#3:1"));
    }

    #[test]
    fn decodes_payloads_nested_in_containers() {
        // The generic-container use case: payloads arrive inside a list.
        let decoder = asset_companion().value_decoder();
        let nested = Value::List(vec![
            asset_record("Alice", 10),
            asset_record("Bob", 20),
        ]);

        let payloads: Result<Vec<_>, _> = nested
            .as_list()
            .unwrap()
            .iter()
            .map(|v| decoder.decode(v))
            .collect();
        let payloads = payloads.unwrap();
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[1].owner, Party::new("Bob"));
        assert_eq!(payloads[1].amount, 20);
    }

    #[test]
    fn cloned_decoders_share_behavior() {
        let decoder = asset_companion().value_decoder();
        let clone = decoder.clone();
        let value = asset_record("Alice", 10);
        assert_eq!(decoder.decode(&value), clone.decode(&value));
    }
}
