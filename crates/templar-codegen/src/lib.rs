//! # templar-codegen — Bindings Runtime for Ledger Templates
//!
//! The typed decoding boundary between the generic wire representation of
//! contract-creation events and the strongly-typed contract structs a code
//! generator emits per template:
//!
//! - **Companion** (`companion.rs`): immutable per-template metadata — a
//!   bundle of the handful of generated functions needed to reconstruct a
//!   typed contract from an untyped event, in keyed and unkeyed flavors.
//!
//! - **ValueDecoder** (`decoder.rs`): the capability view over a companion
//!   for template-agnostic callers that only need to parse a bare wire
//!   value, not a full event.
//!
//! ## Key Design Principles
//!
//! 1. **Tagged variant, not subclassing.** The keyed/unkeyed split is a
//!    `CompanionKind` enum matched exhaustively inside the decode path.
//!    Adding a third flavor is a compile-time exhaustiveness concern.
//!
//! 2. **Function-valued fields.** The generated "new id", "decode payload",
//!    "decode key", and "build contract" behaviors are `Arc`'d closures
//!    stored in the companion, constructed once by generated code and shared
//!    for the process lifetime.
//!
//! 3. **Pure and concurrent.** Every operation is a synchronous pure
//!    function over immutable inputs. Companions are `Send + Sync` and safe
//!    for unsynchronized concurrent reads; decoding one event never orders
//!    with respect to decoding any other.
//!
//! ## Crate Policy
//!
//! - Depends on `templar-values` internally, nothing else.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod companion;
pub mod decoder;

// Re-export primary types for ergonomic imports.
pub use companion::{Companion, BuildKeyed, BuildUnkeyed, IdFromText, KeyFromValue, PayloadFromRecord};
pub use decoder::{value_decoder_for, ValueDecoder};
