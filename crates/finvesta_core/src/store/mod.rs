//! Record store: ownership and write-through persistence of the collection.
//!
//! # Responsibility
//! - Own the in-memory `RecordCollection` and mediate all mutations.
//! - Write the whole collection through the storage port on every change.
//!
//! # Invariants
//! - No operation here returns an error to the caller; storage trouble is
//!   logged and the in-memory state stays authoritative.

pub mod record_store;
