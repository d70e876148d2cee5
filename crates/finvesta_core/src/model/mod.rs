//! Domain model for loan record keeping.
//!
//! # Responsibility
//! - Define the canonical record and collection shapes used by core logic.
//! - Keep the serialized form identical to the persisted wire format.
//!
//! # Invariants
//! - `RecordId` values are unique within one `RecordCollection`.
//! - Collection order is insertion order and is never reordered by core.

pub mod record;
