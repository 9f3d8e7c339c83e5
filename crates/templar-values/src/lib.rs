//! # templar-values — Wire-Level Data Model
//!
//! This crate is the leaf of the Templar workspace. It defines the
//! transport-agnostic representation of ledger data that the bindings
//! runtime consumes read-only:
//!
//! - **Value** (`value.rs`): the self-describing tagged value tree
//!   (primitives, records, variants, lists, optionals) as delivered by the
//!   ledger, already parsed.
//!
//! - **Identity** (`identity.rs`): newtype identifiers — `Identifier` for
//!   template types, `Party`, `ChoiceName`, and the phantom-typed
//!   `ContractId<Payload>`.
//!
//! - **Event** (`event.rs`): `CreatedEvent`, the notification that a new
//!   contract instance came into existence.
//!
//! - **Error** (`error.rs`): `DecodeError`, the failure taxonomy for
//!   wire-to-typed conversion.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `templar-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod event;
pub mod identity;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::DecodeError;
pub use event::CreatedEvent;
pub use identity::{ChoiceName, ContractId, Identifier, Party};
pub use value::{Record, RecordField, Value, Variant};
